use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::domain::validation::{FieldError, Validate, Violations};

pub const SCHEME_SORT_CODE_ACCOUNT_NUMBER: &str = "SortCodeAccountNumber";
pub const ACCOUNT_TYPE_PERSONAL: &str = "Personal";
pub const ACCOUNT_TYPE_BUSINESS: &str = "Business";

const SCHEME_NAMES: [&str; 1] = [SCHEME_SORT_CODE_ACCOUNT_NUMBER];
const ACCOUNT_TYPES: [&str; 2] = [ACCOUNT_TYPE_PERSONAL, ACCOUNT_TYPE_BUSINESS];

fn identification_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new("^[0-9]{14}$").expect("identification pattern is valid"))
}

/// Request body for POST /confirmation-of-payee
///
/// Every field is optional on the wire so that absent values are reported
/// as field errors instead of parse errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    pub data: Option<ConfirmationData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationData {
    pub scheme_name: Option<String>,
    pub account_type: Option<String>,
    /// Sort code followed by account number
    pub identification: Option<String>,
    pub name: Option<String>,
    pub secondary_identification: Option<String>,
}

impl Validate for ConfirmationRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();

        let Some(data) = v.not_null("data", self.data.as_ref()) else {
            return v.into_errors();
        };

        if let Some(scheme) = v.not_null("data.schemeName", data.scheme_name.as_deref()) {
            v.one_of("data.schemeName", scheme, &SCHEME_NAMES);
        }
        if let Some(account_type) = v.not_null("data.accountType", data.account_type.as_deref()) {
            v.one_of("data.accountType", account_type, &ACCOUNT_TYPES);
        }
        if let Some(identification) =
            v.not_null("data.identification", data.identification.as_deref())
        {
            v.pattern("data.identification", identification, identification_regex());
        }
        if let Some(name) = v.not_blank("data.name", data.name.as_deref()) {
            v.size("data.name", name, 1, 70);
        }
        if let Some(secondary) = data.secondary_identification.as_deref() {
            v.size("data.secondaryIdentification", secondary, 1, 18);
        }

        v.into_errors()
    }
}

/// Validated view of a CoP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeCheck {
    pub account_type: String,
    pub identification: String,
    pub name: String,
}

impl ConfirmationRequest {
    /// Only meaningful once `validate` returned no errors
    pub fn into_check(self) -> Option<PayeeCheck> {
        let data = self.data?;
        Some(PayeeCheck {
            account_type: data.account_type?,
            identification: data.identification?,
            name: data.name?,
        })
    }
}

/// Response body for POST /confirmation-of-payee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub data: ConfirmationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResult {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ReasonCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Pay.UK CoP reason codes returned on a negative answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Account name does not match
    #[serde(rename = "ANNM")]
    NameNoMatch,
    /// Name matches but the account is a business account
    #[serde(rename = "BANM")]
    BusinessAccountNameMatch,
    /// Name matches but the account is a personal account
    #[serde(rename = "PANM")]
    PersonalAccountNameMatch,
    /// Account does not exist
    #[serde(rename = "AC01")]
    AccountDoesNotExist,
}

/// Account holder record held by the account-holding bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolder {
    pub name: String,
    pub account_type: String,
}
