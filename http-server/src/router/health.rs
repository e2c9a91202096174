use axum::Json;

pub(crate) const STATUS: &str = "Api is running";

pub(crate) async fn handler() -> Json<&'static str> {
    Json(STATUS)
}
