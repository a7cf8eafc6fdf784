use serde::Serialize;

use crate::infer::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Box<str>),
    #[error("Spectroscopy generation failed: {0}")]
    Inference(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;

// The original service reported errors as {"detail": ...}; clients depend
// on that field name.
#[derive(Serialize)]
struct HttpErrorBody {
    detail: Box<str>,
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            Error::BadRequest(message) => (axum::http::StatusCode::BAD_REQUEST, message),
            Error::Inference(_) => {
                tracing::error!("Service error: {}", self);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    self.to_string().into_boxed_str(),
                )
            }
        };

        (status, axum::Json(HttpErrorBody { detail })).into_response()
    }
}
