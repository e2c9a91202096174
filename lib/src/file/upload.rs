//! Resources needed to upload a file

use bytes::Bytes;

/// Content of the uploaded file, sent as a multipart part.
#[derive(Clone, Debug)]
pub struct FileContent {
    pub filename: String,
    pub content: Bytes,
}

impl FileContent {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Parameters sent in the query string when uploading a file.
///
/// The file name is not part of it: it comes from the [`FileContent`].
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct FileUpload {
    pub auth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "folderid", skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(rename = "nopartial", skip_serializing_if = "Option::is_none")]
    pub no_partial: Option<u8>,
    #[serde(rename = "progresshash", skip_serializing_if = "Option::is_none")]
    pub progress_hash: Option<String>,
    #[serde(rename = "renameifexists", skip_serializing_if = "Option::is_none")]
    pub rename_if_exists: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctime: Option<u64>,
}

impl FileUpload {
    pub fn new(auth: impl Into<String>) -> Self {
        Self {
            auth: auth.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, value: impl Into<String>) -> Self {
        self.path = Some(value.into());
        self
    }

    pub fn with_folder_id(mut self, value: u64) -> Self {
        self.folder_id = Some(value);
        self
    }
}

#[derive(serde::Serialize)]
struct FileUploadParams<'a> {
    #[serde(flatten)]
    params: FileUpload,
    filename: &'a str,
}

impl crate::Client {
    /// Uploads a single file.
    ///
    /// Calls [`uploadfile`](https://docs.pcloud.com/methods/file/uploadfile.html) with a multipart
    /// body. The content is attached under an empty field name and the file name is sent both
    /// on the part and as the `filename` query parameter.
    #[tracing::instrument(
        skip(self, params, file),
        fields(filename = %file.filename, size = file.content.len())
    )]
    pub async fn upload_file(
        &self,
        mut params: FileUpload,
        file: FileContent,
    ) -> crate::Result<crate::Payload> {
        crate::path::normalize_field(&mut params.path);

        let FileContent { filename, content } = file;
        let length = content.len() as u64;
        let part = reqwest::multipart::Part::stream_with_length(content, length)
            .file_name(filename.clone());
        let form = reqwest::multipart::Form::new().part("", part);

        self.post_request_multipart(
            "uploadfile",
            FileUploadParams {
                params,
                filename: filename.as_str(),
            },
            form,
        )
        .await
    }
}
