// File: src/values.rs
// Purpose: Raw field values owned by one form session

use std::collections::BTreeMap;

use registration_validation::FieldKey;

/// Current raw value of every form input
///
/// All keys are always present and start out empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldKey, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self {
            values: FieldKey::ALL
                .into_iter()
                .map(|key| (key, String::new()))
                .collect(),
        }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// Replace the value for `key`, returning the previous one
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) -> String {
        self.values.insert(key, value.into()).unwrap_or_default()
    }

    /// Values in declared form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Copy of the values keyed by wire name
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.clone()))
            .collect()
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_start_empty() {
        let values = FieldValues::new();
        assert_eq!(values.iter().count(), FieldKey::ALL.len());
        assert!(values.iter().all(|(_, value)| value.is_empty()));
        assert_eq!(values.get(FieldKey::Pan), "");
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut values = FieldValues::new();
        assert_eq!(values.set(FieldKey::City, "Delhi"), "");
        assert_eq!(values.set(FieldKey::City, "Mumbai"), "Delhi");
        assert_eq!(values.get(FieldKey::City), "Mumbai");
    }

    #[test]
    fn test_to_map_uses_wire_names() {
        let mut values = FieldValues::new();
        values.set(FieldKey::PhoneCode, "+91");
        let map = values.to_map();
        assert_eq!(map.len(), 11);
        assert_eq!(map.get("phoneCode").map(String::as_str), Some("+91"));
    }
}
