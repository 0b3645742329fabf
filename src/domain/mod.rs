pub mod confirmation;
pub mod error_translation;
pub mod shared;
pub mod validation;
