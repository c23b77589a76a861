// File: src/field.rs
// Purpose: Closed set of registration form field keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFieldKey;

/// Identifier of one input on the registration form
///
/// Variants are declared in form order, and `Ord` follows that order, so a
/// `BTreeMap<FieldKey, _>` iterates the way the form is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

impl FieldKey {
    /// Every key, in declared form order
    pub const ALL: [FieldKey; 11] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Username,
        FieldKey::Email,
        FieldKey::Password,
        FieldKey::PhoneCode,
        FieldKey::PhoneNumber,
        FieldKey::Country,
        FieldKey::City,
        FieldKey::Pan,
        FieldKey::Aadhar,
    ];

    /// Wire name used by the form inputs (`name="..."`)
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Username => "username",
            FieldKey::Email => "email",
            FieldKey::Password => "password",
            FieldKey::PhoneCode => "phoneCode",
            FieldKey::PhoneNumber => "phoneNumber",
            FieldKey::Country => "country",
            FieldKey::City => "city",
            FieldKey::Pan => "pan",
            FieldKey::Aadhar => "aadhar",
        }
    }

    /// Label rendered next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::FirstName => "First Name",
            FieldKey::LastName => "Last Name",
            FieldKey::Username => "Username",
            FieldKey::Email => "Email",
            FieldKey::Password => "Password",
            FieldKey::PhoneCode => "Country Code",
            FieldKey::PhoneNumber => "Phone Number",
            FieldKey::Country => "Country",
            FieldKey::City => "City",
            FieldKey::Pan => "PAN Number",
            FieldKey::Aadhar => "Aadhar Number",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = UnknownFieldKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFieldKey(s.to_string()))
    }
}
