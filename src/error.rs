use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::domain::validation::FieldError;

/// Every failure the API reports through the Open Banking error envelope
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported content type: {}", .content_type.as_deref().unwrap_or("<none>"))]
    UnsupportedMediaType { content_type: Option<String> },

    #[error("No acceptable representation for Accept: {accept}")]
    NotAcceptable { accept: String },

    #[error("Request body failed validation on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Required request header '{0}' is not present")]
    MissingHeader(String),

    #[error("Remote server unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Request method '{0}' is not supported")]
    MethodNotAllowed(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Failure attached to a response until the translation layer renders it
#[derive(Debug, Clone)]
pub struct PendingFailure(pub Arc<AppError>);

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType { .. }
            | Self::Validation(_)
            | Self::MissingHeader(_)
            | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            Self::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Handlers return `AppError` directly; the body is written by
/// `error_translation_middleware`, which knows the request context.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.status_code().into_response();
        response
            .extensions_mut()
            .insert(PendingFailure(Arc::new(self)));
        response
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
