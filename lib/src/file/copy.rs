//! Resources needed to copy a file

use super::FileUpdate;

impl crate::Client {
    /// Copies a file.
    ///
    /// Calls [`copyfile`](https://docs.pcloud.com/methods/file/copyfile.html) after normalizing
    /// both `path` and `topath`.
    #[tracing::instrument(skip(self, params))]
    pub async fn copy_file(&self, mut params: FileUpdate) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("copyfile", params).await
    }
}
