//! Extractors that raise [`AppError`]s instead of axum's default rejections.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::validation::Validate;
use crate::error::AppError;

pub const X_FAPI_FINANCIAL_ID: &str = "x-fapi-financial-id";

/// JSON body that has been parsed and passed [`Validate`]
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::UnsupportedMediaType { content_type }
                }
                other => AppError::MalformedBody(other.body_text()),
            })?;

        let errors = value.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self(value))
    }
}

/// Value of the mandatory `x-fapi-financial-id` header
#[derive(Debug, Clone)]
pub struct FinancialId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for FinancialId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(X_FAPI_FINANCIAL_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .ok_or_else(|| AppError::MissingHeader(X_FAPI_FINANCIAL_ID.to_string()))
    }
}
