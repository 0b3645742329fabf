pub mod field_errors;
pub mod translator;

pub use field_errors::format_field_error;
pub use translator::{ErrorTranslator, RequestContext, REMOTE_UNREACHABLE_MESSAGE};
