use serde::{Deserialize, Serialize};
use std::fmt;

/// Open Banking error codes reported in `errorCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpenBankingErrorCode {
    HeaderInvalid,
    HeaderMissing,
    InvalidField,
    FieldMissing,
    UnexpectedError,
}

impl OpenBankingErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeaderInvalid => "HEADER_INVALID",
            Self::HeaderMissing => "HEADER_MISSING",
            Self::InvalidField => "INVALID_FIELD",
            Self::FieldMissing => "FIELD_MISSING",
            Self::UnexpectedError => "UNEXPECTED_ERROR",
        }
    }
}

impl fmt::Display for OpenBankingErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
