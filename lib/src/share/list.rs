//! Resources needed to list the shares

use super::ShareList;

impl crate::Client {
    /// Lists the shares and share requests.
    ///
    /// Calls [`listshares`](https://docs.pcloud.com/methods/sharing/listshares.html).
    #[tracing::instrument(skip(self, params))]
    pub async fn list_shares(&self, params: ShareList) -> crate::Result<crate::Payload> {
        self.get_request("listshares", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::share::ShareList;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/listshares")
            .match_query(Matcher::Exact("auth=token&norequests=1".into()))
            .with_status(200)
            .with_body(r#"{ "result": 0, "shares": { "incoming": [], "outgoing": [] } }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client
            .list_shares(ShareList {
                auth: Some("token".into()),
                no_requests: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(result["shares"]["incoming"].is_array());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn without_any_field() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/listshares")
            .match_query(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{ "result": 1000, "error": "Log in required." }"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server);
        let result = client.list_shares(ShareList::default()).await.unwrap();
        assert_eq!(result["result"], 1000);
        m.assert_async().await;
    }
}
