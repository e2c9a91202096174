//! Resources needed to remove a share

use super::ShareDelete;

impl crate::Client {
    /// Removes a share.
    ///
    /// Calls [`removeshare`](https://docs.pcloud.com/methods/sharing/removeshare.html).
    #[tracing::instrument(skip(self, params))]
    pub async fn delete_share(&self, params: ShareDelete) -> crate::Result<crate::Payload> {
        self.get_request("removeshare", params).await
    }
}
