use serde::{Deserialize, Serialize};

use super::error_code::OpenBankingErrorCode;

/// Error response body defined by the Pay.UK CoP standard (OBErrorResponse1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// HTTP status code of the response, as text
    pub code: String,
    pub message: String,
    pub errors: Vec<ErrorItem>,
}

/// One discrete problem reported in an [`ErrorEnvelope`] (OBError1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorItem {
    pub error_code: OpenBankingErrorCode,
    pub message: String,
    pub path: String,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>, errors: Vec<ErrorItem>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            errors,
        }
    }
}

impl ErrorItem {
    pub fn new(error_code: OpenBankingErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
            path: path.into(),
        }
    }
}
