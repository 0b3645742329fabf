use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::request_id::RequestId;
use crate::domain::error_translation::{ErrorTranslator, RequestContext};
use crate::error::{AppError, PendingFailure};

/// Renders failures raised anywhere below it as Open Banking envelopes.
///
/// A 405 produced by the router carries no failure; it is translated as
/// `MethodNotAllowed`. Every other response passes through unchanged.
pub async fn error_translation_middleware(
    State(translator): State<Arc<ErrorTranslator>>,
    request: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        request_id: request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone()),
    };

    let mut response = next.run(request).await;

    if let Some(PendingFailure(failure)) = response.extensions_mut().remove::<PendingFailure>() {
        return translator.respond(&failure, &ctx);
    }

    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        let mut translated =
            translator.respond(&AppError::MethodNotAllowed(ctx.method.clone()), &ctx);
        if let Some(allow) = response.headers().get(header::ALLOW) {
            translated.headers_mut().insert(header::ALLOW, allow.clone());
        }
        return translated;
    }

    response
}
