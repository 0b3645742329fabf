use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::field_errors::format_field_error;
use crate::domain::shared::{ErrorEnvelope, ErrorItem, OpenBankingErrorCode};
use crate::error::AppError;

/// Shown instead of the client error text when the account-holding bank is unreachable
pub const REMOTE_UNREACHABLE_MESSAGE: &str = "Unable to reach remote server";

/// What the translator knows about the failed request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub request_id: Option<String>,
}

/// Renders [`AppError`]s as Open Banking error envelopes.
///
/// Holds no per-request state; one instance is shared by the whole router.
/// Every error item's `path` is the context path it was built with.
#[derive(Debug, Clone, Default)]
pub struct ErrorTranslator {
    context_path: String,
}

impl ErrorTranslator {
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
        }
    }

    /// Maps a failure to its status and envelope; `errors` is never empty
    pub fn translate(&self, failure: &AppError) -> (StatusCode, ErrorEnvelope) {
        let status = failure.status_code();

        let envelope = match failure {
            AppError::UnsupportedMediaType { .. } | AppError::NotAcceptable { .. } => {
                self.single_item(status, OpenBankingErrorCode::HeaderInvalid, reason(status))
            }
            AppError::Validation(errors) if errors.is_empty() => self.single_item(
                StatusCode::BAD_REQUEST,
                OpenBankingErrorCode::InvalidField,
                reason(StatusCode::BAD_REQUEST),
            ),
            AppError::Validation(errors) => ErrorEnvelope::new(
                StatusCode::BAD_REQUEST.as_u16().to_string(),
                reason(StatusCode::BAD_REQUEST),
                errors
                    .iter()
                    .map(|e| format_field_error(e, &self.context_path))
                    .collect(),
            ),
            AppError::MissingHeader(_) => {
                self.single_item(status, OpenBankingErrorCode::HeaderMissing, reason(status))
            }
            AppError::UpstreamUnreachable(_) => self.single_item(
                status,
                OpenBankingErrorCode::UnexpectedError,
                REMOTE_UNREACHABLE_MESSAGE,
            ),
            AppError::MethodNotAllowed(_) | AppError::MalformedBody(_) => self.single_item(
                status,
                OpenBankingErrorCode::InvalidField,
                &status.as_u16().to_string(),
            ),
        };

        (status, envelope)
    }

    /// Logs the failure and builds the JSON response
    pub fn respond(&self, failure: &AppError, ctx: &RequestContext) -> Response {
        let (status, envelope) = self.translate(failure);
        let request_id = ctx.request_id.as_deref().unwrap_or("-");

        match failure {
            AppError::UpstreamUnreachable(_) => tracing::error!(
                error = %failure,
                status = %status.as_u16(),
                request_id = %request_id,
                method = %ctx.method,
                path = %ctx.path,
                "Remote server call failed"
            ),
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                tracing::warn!(
                    error = %failure,
                    fields = ?fields,
                    status = %status.as_u16(),
                    request_id = %request_id,
                    method = %ctx.method,
                    path = %ctx.path,
                    "Request validation failed"
                )
            }
            _ => tracing::warn!(
                error = %failure,
                status = %status.as_u16(),
                request_id = %request_id,
                method = %ctx.method,
                path = %ctx.path,
                "Request rejected"
            ),
        }

        let mut response = (status, Json(envelope)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}

impl ErrorTranslator {
    fn single_item(
        &self,
        status: StatusCode,
        error_code: OpenBankingErrorCode,
        message: &str,
    ) -> ErrorEnvelope {
        ErrorEnvelope::new(
            status.as_u16().to_string(),
            message,
            vec![ErrorItem::new(error_code, message, self.context_path.as_str())],
        )
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
