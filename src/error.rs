use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request body: {source}")]
    MalformedRequest {
        #[from]
        source: serde_json::Error,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejecting request: {}", self);
        match self {
            ApiError::MalformedRequest { .. } => {
                (StatusCode::BAD_REQUEST, "Malformed request body").into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("a key file was given without a certificate file")]
    MissingCertificate,
    #[error("could not load tls configuration: {source}")]
    TlsConfig { source: io::Error },
    #[error("server failed: {source}")]
    Serve {
        #[from]
        source: io::Error,
    },
}
