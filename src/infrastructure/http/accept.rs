use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::error::AppError;

/// Guard for handlers that only answer in JSON.
///
/// Runs as an extractor so the router's 405 for a wrong method wins over
/// an `Accept` mismatch.
#[derive(Debug, Clone, Copy)]
pub struct AcceptsJson;

#[async_trait]
impl<S> FromRequestParts<S> for AcceptsJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match unacceptable(&parts.headers) {
            Some(accept) => Err(AppError::NotAcceptable { accept }),
            None => Ok(Self),
        }
    }
}

/// Returns the offending header value, or `None` when JSON is acceptable
fn unacceptable(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() || values.iter().any(|v| accepts_json(v)) {
        return None;
    }

    Some(values.join(", "))
}

fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|range| {
        let mut params = range.split(';');
        let media = params.next().unwrap_or("").trim().to_ascii_lowercase();
        let refused = params.any(|p| {
            let p = p.trim().replace(' ', "");
            p == "q=0" || p == "q=0.0" || p == "q=0.00" || p == "q=0.000"
        });

        !refused
            && (media.is_empty()
                || media == "*/*"
                || media == "application/*"
                || media == "application/json"
                || (media.starts_with("application/") && media.ends_with("+json")))
    })
}
