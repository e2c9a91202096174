//! Resources needed to share a folder

use super::Share;

impl crate::Client {
    /// Shares a folder with another user.
    ///
    /// Calls [`sharefolder`](https://docs.pcloud.com/methods/sharing/sharefolder.html) after
    /// normalizing the `path`.
    #[tracing::instrument(skip(self, params))]
    pub async fn create_share(&self, mut params: Share) -> crate::Result<crate::Payload> {
        crate::path::normalize_field(&mut params.path);
        self.get_request("sharefolder", params).await
    }
}
