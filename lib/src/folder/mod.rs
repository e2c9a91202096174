//! Folder operations
//!
//! A folder is identified either by its `folderid` or by its `path`. When both are
//! provided, pCloud gives priority to the `folderid`.

pub mod copy;
pub mod create;
pub mod delete;
pub mod list;
pub mod rename;

/// Request targeting a single folder, used to list and delete folders.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Folder {
    pub auth: String,
    #[serde(
        default,
        rename = "folderid",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive: Option<u8>,
    #[serde(
        default,
        rename = "showdeleted",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_deleted: Option<u8>,
    #[serde(default, rename = "nofiles", skip_serializing_if = "Option::is_none")]
    pub no_files: Option<u8>,
    #[serde(default, rename = "noshares", skip_serializing_if = "Option::is_none")]
    pub no_shares: Option<u8>,
}

impl Folder {
    pub fn new(auth: impl Into<String>) -> Self {
        Self {
            auth: auth.into(),
            folder_id: None,
            path: None,
            recursive: None,
            show_deleted: None,
            no_files: None,
            no_shares: None,
        }
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }

    pub fn with_path(mut self, value: impl Into<String>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub fn with_recursive(mut self, value: bool) -> Self {
        self.recursive = Some(u8::from(value));
        self
    }

    pub(crate) fn normalize(&mut self) {
        crate::path::normalize_field(&mut self.path);
    }
}

/// Request to create a folder, either from a full `path` or from a `name` in a parent `folderid`.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FolderCreate {
    #[serde(flatten)]
    pub folder: Folder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FolderCreate {
    pub fn new(folder: Folder) -> Self {
        Self { folder, name: None }
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
}

/// Request to rename, move or copy a folder to a destination.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FolderUpdate {
    #[serde(flatten)]
    pub folder: Folder,
    #[serde(
        default,
        rename = "tofolderid",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_folder_id: Option<u64>,
    #[serde(default, rename = "topath", skip_serializing_if = "Option::is_none")]
    pub to_path: Option<String>,
    #[serde(default, rename = "noover", skip_serializing_if = "Option::is_none")]
    pub no_over: Option<u8>,
    #[serde(
        default,
        rename = "skipexisting",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_existing: Option<u8>,
    #[serde(
        default,
        rename = "copycontentonly",
        skip_serializing_if = "Option::is_none"
    )]
    pub copy_content_only: Option<u8>,
}

impl FolderUpdate {
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            to_folder_id: None,
            to_path: None,
            no_over: None,
            skip_existing: None,
            copy_content_only: None,
        }
    }

    pub fn with_to_folder_id(mut self, value: u64) -> Self {
        self.to_folder_id = Some(value);
        self
    }

    pub fn with_to_path(mut self, value: impl Into<String>) -> Self {
        self.to_path = Some(value.into());
        self
    }

    pub(crate) fn normalize(&mut self) {
        self.folder.normalize();
        crate::path::normalize_field(&mut self.to_path);
    }
}
