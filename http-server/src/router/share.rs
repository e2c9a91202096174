use axum::{Extension, Json};
use pcloud_facade::share::{Share, ShareDelete, ShareList, ShareUpdate};
use pcloud_facade::{Client, Payload};

use super::error::Error;

pub(crate) async fn create_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<Share>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.create_share(params).await?))
}

pub(crate) async fn list_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<ShareList>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.list_shares(params).await?))
}

pub(crate) async fn update_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<ShareUpdate>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.update_share(params).await?))
}

pub(crate) async fn delete_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<ShareDelete>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.delete_share(params).await?))
}
