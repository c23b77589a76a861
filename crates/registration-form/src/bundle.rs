// File: src/bundle.rs
// Purpose: Snapshot of field values handed to the confirmation view

use serde::Serialize;
use std::collections::BTreeMap;

use registration_validation::FieldKey;

use crate::values::FieldValues;

/// Values captured at the moment of a successful submission
///
/// Read-only once created; serializes as an object keyed by wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionBundle {
    values: BTreeMap<FieldKey, String>,
}

impl SubmissionBundle {
    pub(crate) fn capture(values: &FieldValues) -> Self {
        Self {
            values: values
                .iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// Captured values in declared form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq<FieldValues> for SubmissionBundle {
    fn eq(&self, other: &FieldValues) -> bool {
        self.iter().eq(other.iter())
    }
}
