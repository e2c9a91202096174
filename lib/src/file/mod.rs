//! File operations
//!
//! A file is identified either by its `fileid` or by its `path`.

pub mod copy;
pub mod delete;
pub mod rename;
pub mod stat;
pub mod upload;

/// Request targeting a single file, used to get information on a file and to delete it.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct File {
    pub auth: String,
    #[serde(
        default,
        rename = "folderid",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_id: Option<u64>,
    #[serde(default, rename = "fileid", skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(
        default = "crate::http::enabled",
        rename = "nopartial",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_partial: Option<u8>,
    #[serde(
        default,
        rename = "progresshash",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_hash: Option<String>,
    #[serde(
        default,
        rename = "renameifexists",
        skip_serializing_if = "Option::is_none"
    )]
    pub rename_if_exists: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctime: Option<u64>,
}

impl File {
    pub fn new(auth: impl Into<String>) -> Self {
        Self {
            auth: auth.into(),
            folder_id: None,
            file_id: None,
            path: None,
            filename: None,
            no_partial: Some(1),
            progress_hash: None,
            rename_if_exists: None,
            mtime: None,
            ctime: None,
        }
    }

    pub fn with_file_id(mut self, value: u64) -> Self {
        self.file_id = Some(value);
        self
    }

    pub fn with_path(mut self, value: impl Into<String>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub(crate) fn normalize(&mut self) {
        crate::path::normalize_field(&mut self.path);
    }
}

/// Request to rename, move or copy a file to a destination.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct FileUpdate {
    #[serde(flatten)]
    pub file: File,
    #[serde(
        default,
        rename = "tofolderid",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_folder_id: Option<u64>,
    #[serde(default, rename = "topath", skip_serializing_if = "Option::is_none")]
    pub to_path: Option<String>,
    #[serde(default, rename = "toname", skip_serializing_if = "Option::is_none")]
    pub to_name: Option<String>,
    #[serde(default, rename = "noover", skip_serializing_if = "Option::is_none")]
    pub no_over: Option<u8>,
}

impl FileUpdate {
    pub fn new(file: File) -> Self {
        Self {
            file,
            to_folder_id: None,
            to_path: None,
            to_name: None,
            no_over: None,
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

    pub fn with_to_name(mut self, value: impl Into<String>) -> Self {
        self.to_name = Some(value.into());
        self
    }

    pub(crate) fn normalize(&mut self) {
        self.file.normalize();
        crate::path::normalize_field(&mut self.to_path);
    }
}

#[cfg(test)]
mod tests {
    use super::{File, FileUpdate};

    #[test]
    fn should_default_no_partial() {
        let params: File = serde_json::from_str(r#"{ "auth": "token", "fileid": 42 }"#).unwrap();
        assert_eq!(params.no_partial, Some(1));
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "auth": "token", "fileid": 42, "nopartial": 1 })
        );
    }

    #[test]
    fn should_skip_absent_update_fields() {
        let params: FileUpdate = serde_json::from_str(
            r#"{ "auth": "token", "fileid": 42, "nopartial": null, "toname": "yolo.bin" }"#,
        )
        .unwrap();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "auth": "token", "fileid": 42, "toname": "yolo.bin" })
        );
    }
}
