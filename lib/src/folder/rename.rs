//! Resources needed to rename or move a folder

use super::FolderUpdate;

impl crate::Client {
    /// Renames or moves a folder.
    ///
    /// Calls [`renamefolder`](https://docs.pcloud.com/methods/folder/renamefolder.html) after
    /// normalizing both `path` and `topath`.
    #[tracing::instrument(skip(self, params))]
    pub async fn rename_folder(&self, mut params: FolderUpdate) -> crate::Result<crate::Payload> {
        params.normalize();
        self.get_request("renamefolder", params).await
    }
}
