pub mod error;
pub mod model;
pub mod service;

pub use error::ConfirmationServiceError;
pub use model::{
    AccountHolder, ConfirmationData, ConfirmationRequest, ConfirmationResponse,
    ConfirmationResult, PayeeCheck, ReasonCode,
};
pub use service::{ConfirmationService, ConfirmationServiceApi};
