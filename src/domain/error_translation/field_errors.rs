use crate::domain::shared::{ErrorItem, OpenBankingErrorCode};
use crate::domain::validation::FieldError;

/// Root segment of every validated CoP payload path
const PAYLOAD_PREFIX: &str = "data.";

/// Fields whose failures always mean a bad value rather than a missing one
const ENUMERATED_FIELDS: [&str; 2] = ["data.schemeName", "data.accountType"];

/// Pattern literal quoted by the account identification rule
const IDENTIFICATION_PATTERN: &str = "^[0-9]{14}$";

/// Turns one field violation into an envelope item.
///
/// The item path is the request context path, not the field path.
pub fn format_field_error(error: &FieldError, context_path: &str) -> ErrorItem {
    let name = error
        .field
        .strip_prefix(PAYLOAD_PREFIX)
        .unwrap_or(&error.field);

    if is_invalid_value(error) {
        ErrorItem::new(
            OpenBankingErrorCode::InvalidField,
            format!("this field {} is invalid", name),
            context_path,
        )
    } else {
        ErrorItem::new(
            OpenBankingErrorCode::FieldMissing,
            format!("this field {} {}", name, error.default_message),
            context_path,
        )
    }
}

fn is_invalid_value(error: &FieldError) -> bool {
    ENUMERATED_FIELDS.contains(&error.field.as_str())
        || error.default_message.contains(IDENTIFICATION_PATTERN)
}
