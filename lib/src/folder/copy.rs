//! Resources needed to copy a folder

use super::FolderUpdate;

impl crate::Client {
    /// Copies a folder.
    ///
    /// Calls [`copyfolder`](https://docs.pcloud.com/methods/folder/copyfolder.html) after
    /// normalizing both `path` and `topath`.
    #[tracing::instrument(skip(self, params))]
    pub async fn copy_folder(&self, mut params: FolderUpdate) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("copyfolder", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::folder::{Folder, FolderUpdate};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/copyfolder")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("auth".into(), "token".into()),
                Matcher::UrlEncoded("folderid".into(), "12".into()),
                Matcher::UrlEncoded("topath".into(), "/backup/".into()),
                Matcher::UrlEncoded("copycontentonly".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(r#"{ "result": 0, "metadata": { "folderid": 13 } }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let mut params =
            FolderUpdate::new(Folder::new("token").with_folder_id(12)).with_to_path("backup/");
        params.copy_content_only = Some(1);
        let result = client.copy_folder(params).await.unwrap();
        assert_eq!(result["metadata"]["folderid"], 13);
        m.assert_async().await;
    }
}
