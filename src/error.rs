use std::fmt;

use thiserror::Error;

use crate::domain::EmployeeField;

/// A single rejected field and the message to show beside its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: EmployeeField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: EmployeeField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field-level problem found in a candidate record.
///
/// Never empty: a candidate with no problems validates successfully instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Employee validation failed: {}", render_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn render_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Messages recorded for `field`, in the order they were found.
    pub fn messages_for(&self, field: EmployeeField) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn has_field(&self, field: EmployeeField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Errors surfaced to callers of the directory client and store handle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unknown {kind} filter value: {value}")]
    UnknownFilterValue { kind: &'static str, value: String },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Errors raised while loading [`crate::config::DirectoryConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Channel capacity must be greater than zero")]
    ZeroCapacity,
}
