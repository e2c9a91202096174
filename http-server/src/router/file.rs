use std::str::FromStr;

use axum::extract::Multipart;
use axum::{Extension, Json};
use pcloud_facade::file::upload::{FileContent, FileUpload};
use pcloud_facade::file::{File, FileUpdate};
use pcloud_facade::{Client, Payload};

use super::error::Error;

/// Name of the multipart field holding the uploaded file
const FILE_FIELD: &str = "file";

fn parse_field<T>(name: &'static str, value: String) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| Error::InvalidField(name, err))
}

async fn read_upload(mut multipart: Multipart) -> Result<(FileUpload, FileContent), Error> {
    let mut auth = None;
    let mut params = FileUpload::default();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                let filename = field
                    .file_name()
                    .map(String::from)
                    .ok_or(Error::MissingFileName)?;
                let content = field.bytes().await?;
                file = Some(FileContent::new(filename, content));
            }
            "auth" => auth = Some(field.text().await?),
            "path" => params.path = Some(field.text().await?),
            "folderid" => params.folder_id = Some(parse_field("folderid", field.text().await?)?),
            "nopartial" => {
                params.no_partial = Some(parse_field("nopartial", field.text().await?)?);
            }
            "progresshash" => params.progress_hash = Some(field.text().await?),
            "renameifexists" => {
                params.rename_if_exists = Some(parse_field("renameifexists", field.text().await?)?);
            }
            "mtime" => params.mtime = Some(parse_field("mtime", field.text().await?)?),
            "ctime" => params.ctime = Some(parse_field("ctime", field.text().await?)?),
            other => tracing::debug!("ignoring unknown field {other:?}"),
        }
    }

    params.auth = auth.ok_or(Error::MissingField("auth"))?;
    let file = file.ok_or(Error::MissingField(FILE_FIELD))?;
    Ok((params, file))
}

pub(crate) async fn upload_handler(
    Extension(client): Extension<Client>,
    multipart: Multipart,
) -> Result<Json<Payload>, Error> {
    let (params, file) = read_upload(multipart).await?;
    Ok(Json(client.upload_file(params, file).await?))
}

pub(crate) async fn stat_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<File>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.stat_file(params).await?))
}

pub(crate) async fn rename_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<FileUpdate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.rename_file(params).await?))
}

pub(crate) async fn copy_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<FileUpdate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.copy_file(params).await?))
}

pub(crate) async fn delete_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<File>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.delete_file(params).await?))
}
