//! Resources needed to rename or move a file

use super::FileUpdate;

impl crate::Client {
    /// Renames or moves a file.
    ///
    /// Calls [`renamefile`](https://docs.pcloud.com/methods/file/renamefile.html) after normalizing
    /// both `path` and `topath`.
    #[tracing::instrument(skip(self, params))]
    pub async fn rename_file(&self, mut params: FileUpdate) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("renamefile", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::file::{File, FileUpdate};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/renamefile")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("auth".into(), "token".into()),
                Matcher::UrlEncoded("fileid".into(), "42".into()),
                Matcher::UrlEncoded("toname".into(), "yolo.bin".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "result": 0,
    "metadata": {
        "name": "yolo.bin",
        "created": "Sat, 24 Jul 2021 07:38:41 +0000",
        "thumb": false,
        "modified": "Sat, 24 Jul 2021 07:38:41 +0000",
        "isfolder": false,
        "fileid": 42,
        "hash": 9403476549337371523,
        "comments": 0,
        "category": 0,
        "id": "f42",
        "isshared": false,
        "ismine": true,
        "size": 10485760,
        "parentfolderid": 1075398908,
        "contenttype": "application\/octet-stream",
        "icon": "file"
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .rename_file(
                FileUpdate::new(File::new("token").with_file_id(42)).with_to_name("yolo.bin"),
            )
            .await
            .unwrap();
        assert_eq!(result["metadata"]["name"], "yolo.bin");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_normalize_both_paths() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/renamefile")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("path".into(), "/inbox/a.txt".into()),
                Matcher::UrlEncoded("topath".into(), "/archive/a.txt".into()),
            ]))
            .with_status(200)
            .with_body(r#"{ "result": 0, "metadata": { "fileid": 43 } }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        client
            .rename_file(
                FileUpdate::new(File::new("token").with_path("inbox/a.txt"))
                    .with_to_path("archive/a.txt"),
            )
            .await
            .unwrap();
        m.assert_async().await;
    }
}
