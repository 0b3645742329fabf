use async_trait::async_trait;
use axum::http::StatusCode;
use std::time::Duration;

use crate::domain::confirmation::AccountHolder;

/// Any failure to get a usable answer from the account-holding bank
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to account holding bank failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("account holding bank answered {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait AccountHolderLookup: Send + Sync {
    /// `Ok(None)` when the bank does not hold the account
    async fn find_account_holder(
        &self,
        identification: &str,
    ) -> Result<Option<AccountHolder>, UpstreamError>;
}

/// HTTP client for the account-holding bank's account API
pub struct AccountHolderClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AccountHolderClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, UpstreamError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl AccountHolderLookup for AccountHolderClient {
    async fn find_account_holder(
        &self,
        identification: &str,
    ) -> Result<Option<AccountHolder>, UpstreamError> {
        let url = format!("{}/accounts/{}", self.base_url, identification);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(status = %status.as_u16(), "Account holding bank returned an error");
            return Err(UpstreamError::Status(
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            ));
        }

        Ok(Some(response.json::<AccountHolder>().await?))
    }
}
