//! Resources needed to change the permissions of a share

use super::ShareUpdate;

impl crate::Client {
    /// Changes the permissions of a share.
    ///
    /// Calls [`changeshare`](https://docs.pcloud.com/methods/sharing/changeshare.html).
    #[tracing::instrument(skip(self, params))]
    pub async fn update_share(&self, params: ShareUpdate) -> crate::Result<crate::Payload> {
        self.get_request("changeshare", params).await
    }
}
