//! Resources needed to create a folder

use super::FolderCreate;

impl crate::Client {
    /// Creates a folder, unless it already exists.
    ///
    /// Calls [`createfolderifnotexists`](https://docs.pcloud.com/methods/folder/createfolderifnotexists.html)
    /// after normalizing the `path`.
    #[tracing::instrument(skip(self, params))]
    pub async fn create_folder(&self, mut params: FolderCreate) -> crate::Result<crate::Payload> {
        params.folder.normalize();
        self.get_request("createfolderifnotexists", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::folder::{Folder, FolderCreate};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/createfolderifnotexists")
            .match_query(Matcher::Exact("auth=token&path=%2Fdocuments%2F2024".into()))
            .with_status(200)
            .with_body(
                r#"{
    "result": 0,
    "created": true,
    "metadata": {
        "path": "\/documents\/2024",
        "name": "2024",
        "created": "Fri, 23 Jul 2021 19:39:09 +0000",
        "ismine": true,
        "thumb": false,
        "modified": "Fri, 23 Jul 2021 19:39:09 +0000",
        "id": "d10",
        "isshared": false,
        "icon": "folder",
        "isfolder": true,
        "parentfolderid": 0,
        "folderid": 10
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .create_folder(FolderCreate::new(
                Folder::new("token").with_path("documents/2024"),
            ))
            .await
            .unwrap();
        assert_eq!(result["metadata"]["folderid"], 10);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn with_name_in_parent() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/createfolderifnotexists")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("auth".into(), "token".into()),
                Matcher::UrlEncoded("folderid".into(), "0".into()),
                Matcher::UrlEncoded("name".into(), "testing".into()),
            ]))
            .with_status(200)
            .with_body(r#"{ "result": 0, "created": false, "metadata": { "folderid": 42 } }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .create_folder(
                FolderCreate::new(Folder::new("token").with_folder_id(0)).with_name("testing"),
            )
            .await
            .unwrap();
        assert_eq!(result["created"], false);
        m.assert_async().await;
    }
}
