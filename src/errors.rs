use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use miette::Diagnostic;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GalenaError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(galena::io))]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    #[diagnostic(code(galena::config))]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(galena::serde))]
    Serde(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    #[diagnostic(code(galena::db))]
    Db(#[from] sea_orm::DbErr),

    #[error("Bad request: {0}")]
    #[diagnostic(code(galena::bad_request))]
    BadRequest(String),

    #[error("Not found: {0}")]
    #[diagnostic(code(galena::not_found))]
    NotFound(String),

    #[error("Conflict: {0}")]
    #[diagnostic(code(galena::conflict))]
    Conflict(String),

    #[error("Not implemented: {0}")]
    #[diagnostic(code(galena::not_implemented))]
    NotImplemented(String),

    #[error("{0}")]
    #[diagnostic(code(galena::other))]
    Other(String),
}

/// HTTP-facing error. Handlers return this so every failure serializes as
/// `{"error": message}` with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("authentication required")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotImplemented(String),
    #[error("internal error")]
    Internal(#[source] GalenaError),
}

impl From<GalenaError> for ApiError {
    fn from(err: GalenaError) -> Self {
        match err {
            GalenaError::BadRequest(m) => ApiError::BadRequest(m),
            GalenaError::NotFound(m) => ApiError::NotFound(m),
            GalenaError::Conflict(m) => ApiError::Conflict(m),
            GalenaError::NotImplemented(m) => ApiError::NotImplemented(m),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(source) => {
                tracing::error!(error = %source, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
