// File: src/error_map.rs
// Purpose: Per-field validation results for display

use std::collections::BTreeMap;

use crate::error::FieldValidationError;
use crate::field::FieldKey;

/// Outcome of the last rule check for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(FieldValidationError),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// Message to render next to the field, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Invalid(err) => Some(err.message.as_str()),
        }
    }
}

impl From<Result<(), FieldValidationError>> for FieldStatus {
    fn from(result: Result<(), FieldValidationError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }
}

/// Validation results keyed by field
///
/// A key with no entry has not been checked yet and shows no error.
/// Iteration follows declared form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldKey, FieldStatus>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result of checking `field`, replacing any earlier result
    pub fn record(&mut self, field: FieldKey, result: Result<(), FieldValidationError>) {
        self.entries.insert(field, result.into());
    }

    pub fn status(&self, field: FieldKey) -> Option<&FieldStatus> {
        self.entries.get(&field)
    }

    /// Error message for a field, `None` when it is valid or unchecked
    pub fn message(&self, field: FieldKey) -> Option<&str> {
        self.entries.get(&field).and_then(FieldStatus::message)
    }

    pub fn has_error(&self, field: FieldKey) -> bool {
        self.message(field).is_some()
    }

    /// True when no recorded entry is invalid
    pub fn is_clean(&self) -> bool {
        self.entries.values().all(FieldStatus::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid().count()
    }

    /// First invalid field in declared form order
    pub fn first_invalid(&self) -> Option<FieldKey> {
        self.invalid().next().map(|err| err.field)
    }

    /// Invalid entries in declared form order
    pub fn invalid(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.entries.values().filter_map(|status| match status {
            FieldStatus::Valid => None,
            FieldStatus::Invalid(err) => Some(err),
        })
    }

    /// Drop the valid entries, keeping only fields that need correcting
    pub fn retain_invalid(&mut self) {
        self.entries.retain(|_, status| !status.is_valid());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldStatus)> {
        self.entries.iter().map(|(key, status)| (*key, status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(field: FieldKey, message: &str) -> Result<(), FieldValidationError> {
        Err(FieldValidationError::new(field, message))
    }

    #[test]
    fn test_empty_map_is_clean() {
        let errors = ErrorMap::new();
        assert!(errors.is_clean());
        assert!(errors.is_empty());
        assert_eq!(errors.first_invalid(), None);
    }

    #[test]
    fn test_record_replaces_previous_status() {
        let mut errors = ErrorMap::new();
        errors.record(FieldKey::Email, invalid(FieldKey::Email, "Invalid email address."));
        assert!(errors.has_error(FieldKey::Email));

        errors.record(FieldKey::Email, Ok(()));
        assert!(!errors.has_error(FieldKey::Email));
        assert_eq!(errors.status(FieldKey::Email), Some(&FieldStatus::Valid));
        assert!(errors.is_clean());
    }

    #[test]
    fn test_first_invalid_follows_declared_order() {
        let mut errors = ErrorMap::new();
        errors.record(FieldKey::Aadhar, invalid(FieldKey::Aadhar, "aadhar"));
        errors.record(FieldKey::FirstName, Ok(()));
        errors.record(FieldKey::Password, invalid(FieldKey::Password, "password"));

        assert_eq!(errors.first_invalid(), Some(FieldKey::Password));
        assert_eq!(errors.invalid_count(), 2);
    }

    #[test]
    fn test_retain_invalid() {
        let mut errors = ErrorMap::new();
        errors.record(FieldKey::City, Ok(()));
        errors.record(FieldKey::Pan, invalid(FieldKey::Pan, "Invalid PAN number."));
        errors.retain_invalid();

        assert_eq!(errors.len(), 1);
        assert!(errors.status(FieldKey::City).is_none());
    }
}
