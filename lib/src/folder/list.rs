//! Resources needed to list the content of a folder

use super::Folder;

impl crate::Client {
    /// Lists the content of a folder.
    ///
    /// Calls [`listfolder`](https://docs.pcloud.com/methods/folder/listfolder.html) after
    /// normalizing the `path`. When neither `folderid` nor `path` is provided, the root folder
    /// is listed.
    #[tracing::instrument(skip(self, params))]
    pub async fn list_folder(&self, mut params: Folder) -> crate::Result<crate::Payload> {
        params.normalize();
        if params.folder_id.is_none() && params.path.is_none() {
            params.path = Some(crate::path::ROOT.to_string());
        }
        self.get_request("listfolder", params).await
    }
}
