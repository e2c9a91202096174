//! Resources needed to get the metadata of a file

use super::File;

impl crate::Client {
    /// Gets the metadata of a file.
    ///
    /// Calls [`stat`](https://docs.pcloud.com/methods/general/stat.html) after normalizing the `path`.
    #[tracing::instrument(skip(self, params))]
    pub async fn stat_file(&self, mut params: File) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("stat", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::file::File;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/stat")
            .match_query(Matcher::Exact(
                "auth=token&path=%2Fdocuments%2Freport.pdf&nopartial=1".into(),
            ))
            .with_status(200)
            .with_body(
                r#"{
    "result": 0,
    "metadata": {
        "name": "report.pdf",
        "created": "Sat, 24 Jul 2021 07:38:41 +0000",
        "thumb": false,
        "modified": "Sat, 24 Jul 2021 07:38:41 +0000",
        "isfolder": false,
        "fileid": 5257731387,
        "hash": 9403476549337371523,
        "category": 4,
        "id": "f5257731387",
        "isshared": false,
        "ismine": true,
        "size": 10485760,
        "parentfolderid": 1075398908,
        "contenttype": "application\/pdf",
        "icon": "document"
    }
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .stat_file(File::new("token").with_path("documents/report.pdf"))
            .await
            .unwrap();
        assert_eq!(result["metadata"]["fileid"], 5257731387u64);
        m.assert_async().await;
    }
}
