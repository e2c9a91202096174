use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

#[derive(serde::Serialize)]
struct ErrorResponse {
    message: String,
    details: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Forward(#[from] pcloud_facade::Error),
    #[error("unable to read multipart body")]
    Multipart(#[from] MultipartError),
    #[error("missing field {0:?}")]
    MissingField(&'static str),
    #[error("invalid value for field {0:?}")]
    InvalidField(&'static str, #[source] std::num::ParseIntError),
    #[error("missing file name on the uploaded file")]
    MissingFileName,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Forward(pcloud_facade::Error::RootFolderDeletion) => StatusCode::BAD_REQUEST,
            Self::Forward(_) => StatusCode::BAD_GATEWAY,
            Self::Multipart(inner) => inner.status(),
            Self::MissingField(_) | Self::InvalidField(_, _) | Self::MissingFileName => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::Forward(inner) => std::error::Error::source(inner).map(|err| err.to_string()),
            Self::Multipart(inner) => Some(inner.body_text()),
            Self::InvalidField(_, inner) => Some(inner.to_string()),
            Self::MissingField(_) | Self::MissingFileName => None,
        }
    }

    fn response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("unable to handle request: {self:?}");
        } else {
            tracing::debug!("rejected request: {self:?}");
        }
        let body = self.response();

        (status, axum::Json(body)).into_response()
    }
}
