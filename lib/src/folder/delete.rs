//! Resources needed to delete a folder and its content

use super::Folder;

impl crate::Client {
    /// Deletes a folder with all its content.
    ///
    /// Calls [`deletefolderrecursive`](https://docs.pcloud.com/methods/folder/deletefolderrecursive.html)
    /// after normalizing the `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootFolderDeletion`](crate::Error::RootFolderDeletion) without calling the
    /// API when the path resolves to the root folder.
    #[tracing::instrument(skip(self, params))]
    pub async fn delete_folder(&self, mut params: Folder) -> crate::Result<crate::Payload> {
        params.normalize();
        if params.path.as_deref() == Some(crate::path::ROOT) {
            tracing::warn!("refusing to delete the root folder");
            return Err(crate::Error::RootFolderDeletion);
        }
        self.get_request("deletefolderrecursive", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::folder::Folder;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/deletefolderrecursive")
            .match_query(Matcher::Exact("auth=token&path=%2Fdocuments".into()))
            .with_status(200)
            .with_body(r#"{ "result": 0, "deletedfiles": 2, "deletedfolders": 1 }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .delete_folder(Folder::new("token").with_path("documents"))
            .await
            .unwrap();
        assert_eq!(result["deletedfolders"], 1);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_refuse_root_path() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/deletefolderrecursive")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        for path in ["/", ""] {
            let error = client
                .delete_folder(Folder::new("token").with_path(path))
                .await
                .unwrap_err();
            assert!(matches!(error, crate::Error::RootFolderDeletion));
            assert_eq!(error.to_string(), "You can't delete root folder by path");
        }
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_allow_root_folder_id() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/deletefolderrecursive")
            .match_query(Matcher::Exact("auth=token&folderid=0".into()))
            .with_status(200)
            .with_body(r#"{ "result": 2007, "error": "Invalid 'folderid' provided." }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .delete_folder(Folder::new("token").with_folder_id(0))
            .await
            .unwrap();
        assert_eq!(result["result"], 2007);
        m.assert_async().await;
    }
}
