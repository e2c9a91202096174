use axum::{Extension, Json};
use pcloud_facade::auth::Login;
use pcloud_facade::{Client, Payload};

use super::error::Error;

pub(crate) async fn login_handler(
    Extension(client): Extension<Client>,
    Json(params): Json<Login>,
) -> Result<Json<Payload>, Error> {
    Ok(Json(client.login(params).await?))
}
