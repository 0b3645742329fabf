pub mod error_code;
pub mod error_dto;

pub use error_code::OpenBankingErrorCode;
pub use error_dto::{ErrorEnvelope, ErrorItem};
