//! Validation error types

use thiserror::Error;

use crate::field::FieldKey;

/// A field value that failed its rule
///
/// Missing and malformed values are not distinguished: both carry the
/// field-specific message shown inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldValidationError {
    /// The field that failed validation
    pub field: FieldKey,
    /// Human-readable message
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A field name that is not one of the registration form inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownFieldKey(pub String);
