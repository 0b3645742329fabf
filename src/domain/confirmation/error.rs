use crate::error::AppError;
use crate::infrastructure::upstream::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ConfirmationServiceError {
    #[error("account holding bank unavailable: {0}")]
    Unavailable(#[from] UpstreamError),
}

impl From<ConfirmationServiceError> for AppError {
    fn from(err: ConfirmationServiceError) -> Self {
        match err {
            ConfirmationServiceError::Unavailable(e) => AppError::UpstreamUnreachable(e.to_string()),
        }
    }
}
