use super::error::ConfirmationServiceError;
use super::model::{
    AccountHolder, ConfirmationResponse, ConfirmationResult, PayeeCheck, ReasonCode,
    ACCOUNT_TYPE_BUSINESS,
};
use crate::infrastructure::upstream::AccountHolderLookup;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ConfirmationService {
    lookup: Arc<dyn AccountHolderLookup>,
}

impl ConfirmationService {
    pub fn new(lookup: Arc<dyn AccountHolderLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
pub trait ConfirmationServiceApi: Send + Sync {
    async fn confirm(&self, check: PayeeCheck) -> Result<ConfirmationResponse, ConfirmationServiceError>;
}

#[async_trait]
impl ConfirmationServiceApi for ConfirmationService {
    async fn confirm(&self, check: PayeeCheck) -> Result<ConfirmationResponse, ConfirmationServiceError> {
        let holder = self.lookup.find_account_holder(&check.identification).await?;

        let result = match holder {
            Some(holder) => compare(&check, &holder),
            None => ConfirmationResult {
                matched: false,
                reason_code: Some(ReasonCode::AccountDoesNotExist),
                name: None,
            },
        };

        tracing::debug!(
            matched = result.matched,
            reason_code = ?result.reason_code,
            "Payee check completed"
        );

        Ok(ConfirmationResponse { data: result })
    }
}

fn compare(check: &PayeeCheck, holder: &AccountHolder) -> ConfirmationResult {
    if normalize_name(&check.name) != normalize_name(&holder.name) {
        return ConfirmationResult {
            matched: false,
            reason_code: Some(ReasonCode::NameNoMatch),
            name: None,
        };
    }

    if check.account_type.eq_ignore_ascii_case(&holder.account_type) {
        return ConfirmationResult {
            matched: true,
            reason_code: None,
            name: None,
        };
    }

    let reason = if holder.account_type.eq_ignore_ascii_case(ACCOUNT_TYPE_BUSINESS) {
        ReasonCode::BusinessAccountNameMatch
    } else {
        ReasonCode::PersonalAccountNameMatch
    };

    ConfirmationResult {
        matched: false,
        reason_code: Some(reason),
        name: None,
    }
}

/// Lowercases, drops punctuation and collapses whitespace
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
