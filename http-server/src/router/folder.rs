use axum::{Extension, Json};
use pcloud_facade::folder::{Folder, FolderCreate, FolderUpdate};
use pcloud_facade::{Client, Payload};

use super::error::Error;

pub(crate) async fn create_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<FolderCreate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.create_folder(params).await?))
}

pub(crate) async fn list_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<Folder>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.list_folder(params).await?))
}

pub(crate) async fn rename_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<FolderUpdate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.rename_folder(params).await?))
}

pub(crate) async fn copy_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<FolderUpdate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.copy_folder(params).await?))
}

pub(crate) async fn delete_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<Folder>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.delete_folder(params).await?))
}
