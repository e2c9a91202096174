//! Resources needed to delete a file

use super::File;

impl crate::Client {
    /// Deletes a file.
    ///
    /// Calls [`deletefile`](https://docs.pcloud.com/methods/file/deletefile.html) after normalizing the `path`.
    #[tracing::instrument(skip(self, params))]
    pub async fn delete_file(&self, mut params: File) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("deletefile", params).await
    }
}
