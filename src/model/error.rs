use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by request handlers.
///
/// Handlers never shape error bodies themselves. The provisional response
/// built here carries the error in its extensions so the exception advice
/// can replace it with the registered translation.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("object not found: {0}")]
    ObjectNotFound(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Tag used to select a translator for an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ObjectNotFound,
    Internal,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ObjectNotFound(_) => ErrorKind::ObjectNotFound,
            Self::InternalError(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    reason: String,
}

impl From<rusqlite::Error> for ApiError {
    fn from(value: rusqlite::Error) -> ApiError {
        error!("rusqlite error: {}", value);
        ApiError::InternalError(String::from("Internal Error"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = match &self {
            Self::ObjectNotFound(description) => {
                warn!("NOT_FOUND raised: {}", description);
                StatusCode::NOT_FOUND.into_response()
            }
            Self::InternalError(public_reason) => {
                warn!(
                    "INTERNAL_SERVER_ERROR response with public_reason={}",
                    public_reason
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        reason: public_reason.clone(),
                    }),
                )
                    .into_response()
            }
        };

        response.extensions_mut().insert(self);
        response
    }
}
