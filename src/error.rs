//! Crate error type and its HTTP mapping.
//!
//! Flag lookups and updates never fail. Everything here comes from the
//! edges: request decoding, configuration loading, and logger setup.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Request body could not be decoded into the command's fields (400)
    #[error("malformed '{command}' request: {source}")]
    MalformedRequest {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid log level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
}

impl Error {
    /// Machine-readable code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedRequest { .. } => "MALFORMED_REQUEST",
            _ => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body: `{"error": {"code": "...", "message": "..."}}`
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
        } else {
            tracing::error!("Request error: {}", self);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
