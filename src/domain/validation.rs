//! Field-level request validation.
//!
//! Rules report problems as [`FieldError`]s carrying the dotted path of the
//! field and a default message worded like Bean Validation's, which is what
//! the error translator keys on when classifying a field.

use regex::Regex;

/// One invalid field of a request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path from the payload root, e.g. `data.amount`
    pub field: String,
    pub default_message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            default_message: default_message.into(),
        }
    }
}

/// Implemented by request payloads checked by the `ValidatedJson` extractor
pub trait Validate {
    /// Returns every violation in declaration order, empty when valid
    fn validate(&self) -> Vec<FieldError>;
}

/// Collects violations for a payload, one rule call per constraint
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// `@NotNull`; returns the value so nested checks can continue
    pub fn not_null<'a, T>(&mut self, field: &str, value: Option<&'a T>) -> Option<&'a T>
    where
        T: ?Sized,
    {
        if value.is_none() {
            self.push(field, "must not be null");
        }
        value
    }

    /// `@NotBlank`
    pub fn not_blank<'a>(&mut self, field: &str, value: Option<&'a str>) -> Option<&'a str> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                self.push(field, "must not be blank");
                None
            }
        }
    }

    /// `@Size(min, max)` on character count
    pub fn size(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min || len > max {
            self.push(field, format!("size must be between {} and {}", min, max));
        }
    }

    /// `@Pattern(regexp)`; the message quotes the raw expression
    pub fn pattern(&mut self, field: &str, value: &str, regex: &Regex) {
        if !regex.is_match(value) {
            self.push(field, format!("must match \"{}\"", regex.as_str()));
        }
    }

    pub fn one_of(&mut self, field: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.push(field, format!("must be one of [{}]", allowed.join(", ")));
        }
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }
}
