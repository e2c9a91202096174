mod auth;
mod error;
mod file;
mod folder;
mod health;
mod share;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

/// Default limit of an upload body, in bytes
pub(crate) const DEFAULT_MAX_UPLOAD_SIZE: usize = 256 * 1024 * 1024;

/// The upload body is read in memory before being forwarded, so its size is bounded
/// by `max_upload_size` instead of the default axum limit.
pub(crate) fn router(max_upload_size: usize) -> axum::Router {
    axum::Router::new()
        .route("/login", post(auth::login_handler))
        .route("/folder/create", post(folder::create_handler))
        .route("/folder/list", post(folder::list_handler))
        .route("/folder/rename", post(folder::rename_handler))
        .route("/folder/copy", post(folder::copy_handler))
        .route("/folder/delete", post(folder::delete_handler))
        .route(
            "/file/upload",
            post(file::upload_handler).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/file/stat", post(file::stat_handler))
        .route("/file/rename", post(file::rename_handler))
        .route("/file/copy", post(file::copy_handler))
        .route("/file/delete", post(file::delete_handler))
        .route("/share/create", post(share::create_handler))
        .route("/share/list", post(share::list_handler))
        .route("/share/update", post(share::update_handler))
        .route("/share/delete", post(share::delete_handler))
        .route("/values", get(health::handler))
}
