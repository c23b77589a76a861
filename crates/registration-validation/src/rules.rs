// File: src/rules.rs
// Purpose: One format rule per field key

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldValidationError;
use crate::error_map::ErrorMap;
use crate::field::FieldKey;

// Character classes are spelled out in ASCII; `\w` and `\d` are Unicode-aware in `regex`.
const NAME_PATTERN: &str = r"^[A-Za-z]{2,}$";
const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_]{4,}$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$";
const PASSWORD_CHARSET_PATTERN: &str = r"^[A-Za-z0-9]{6,}$";
const PHONE_CODE_PATTERN: &str = r"^\+[0-9]{1,4}$";
const PHONE_NUMBER_PATTERN: &str = r"^[0-9]{7,12}$";
const PAN_PATTERN: &str = r"^[A-Z]{5}[0-9]{4}[A-Z]$";
const AADHAR_PATTERN: &str = r"^[0-9]{12}$";

/// Browser-side spelling of the password rule (uses lookahead, which `regex` lacks)
const PASSWORD_CLIENT_PATTERN: &str = r"^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{6,}$";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| compile(NAME_PATTERN));
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| compile(USERNAME_PATTERN));
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| compile(EMAIL_PATTERN));
static PASSWORD_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| compile(PASSWORD_CHARSET_PATTERN));
static PHONE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| compile(PHONE_CODE_PATTERN));
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| compile(PHONE_NUMBER_PATTERN));
static PAN_REGEX: Lazy<Regex> = Lazy::new(|| compile(PAN_PATTERN));
static AADHAR_REGEX: Lazy<Regex> = Lazy::new(|| compile(AADHAR_PATTERN));

fn compile(pattern: &str) -> Regex {
    // Patterns are module constants
    Regex::new(pattern).expect("built-in field pattern must compile")
}

/// Description of the rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: FieldKey,
    /// Pattern a client-side validator can mirror; `None` for required-only fields
    pub pattern: Option<&'static str>,
    /// Message shown when the value is rejected
    pub message: &'static str,
}

/// Rule for a field key
///
/// The match is exhaustive, so adding a `FieldKey` without a rule does not compile.
pub fn rule_for(field: FieldKey) -> Rule {
    let (pattern, message) = match field {
        FieldKey::FirstName => (
            Some(NAME_PATTERN),
            "First Name must be at least 2 letters.",
        ),
        FieldKey::LastName => (Some(NAME_PATTERN), "Last name must be at least 2 letters."),
        FieldKey::Username => (
            Some(USERNAME_PATTERN),
            "Username must be at least 4 characters and no special chars.",
        ),
        FieldKey::Email => (Some(EMAIL_PATTERN), "Invalid email address."),
        FieldKey::Password => (
            Some(PASSWORD_CLIENT_PATTERN),
            "Password must be 6+ chars with letters and numbers.",
        ),
        FieldKey::PhoneCode => (Some(PHONE_CODE_PATTERN), "Invalid country code."),
        FieldKey::PhoneNumber => (
            Some(PHONE_NUMBER_PATTERN),
            "Phone Number must be 7 to 12 digits.",
        ),
        FieldKey::Country => (None, "Country is required."),
        FieldKey::City => (None, "City is required."),
        FieldKey::Pan => (Some(PAN_PATTERN), "Invalid PAN number."),
        FieldKey::Aadhar => (
            Some(AADHAR_PATTERN),
            "Aadhar Number must be exactly 12 digits.",
        ),
    };

    Rule {
        field,
        pattern,
        message,
    }
}

fn accepts(field: FieldKey, raw: &str) -> bool {
    match field {
        FieldKey::FirstName | FieldKey::LastName => NAME_REGEX.is_match(raw),
        FieldKey::Username => USERNAME_REGEX.is_match(raw),
        FieldKey::Email => EMAIL_REGEX.is_match(raw),
        FieldKey::Password => is_valid_password(raw),
        FieldKey::PhoneCode => PHONE_CODE_REGEX.is_match(raw),
        FieldKey::PhoneNumber => PHONE_NUMBER_REGEX.is_match(raw),
        FieldKey::Country | FieldKey::City => !raw.is_empty(),
        FieldKey::Pan => PAN_REGEX.is_match(raw),
        FieldKey::Aadhar => AADHAR_REGEX.is_match(raw),
    }
}

/// 6+ ASCII alphanumerics with at least one letter and one digit
fn is_valid_password(raw: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(raw)
        && raw.bytes().any(|b| b.is_ascii_alphabetic())
        && raw.bytes().any(|b| b.is_ascii_digit())
}

/// Check one raw value against its field's rule
pub fn validate(field: FieldKey, raw: &str) -> Result<(), FieldValidationError> {
    if accepts(field, raw) {
        Ok(())
    } else {
        Err(FieldValidationError::new(field, rule_for(field).message))
    }
}

/// Check every given value and collect the results
///
/// Each key that appears in `values` gets a status in the returned map;
/// keys that do not appear stay untouched.
pub fn validate_all<'a, I>(values: I) -> ErrorMap
where
    I: IntoIterator<Item = (FieldKey, &'a str)>,
{
    let mut errors = ErrorMap::new();
    for (field, raw) in values {
        errors.record(field, validate(field, raw));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_message() {
        for key in FieldKey::ALL {
            let rule = rule_for(key);
            assert_eq!(rule.field, key);
            assert!(!rule.message.is_empty());
        }
    }

    #[test]
    fn test_builtin_patterns_compile() {
        for regex in [
            &*NAME_REGEX,
            &*USERNAME_REGEX,
            &*EMAIL_REGEX,
            &*PASSWORD_CHARSET_REGEX,
            &*PHONE_CODE_REGEX,
            &*PHONE_NUMBER_REGEX,
            &*PAN_REGEX,
            &*AADHAR_REGEX,
        ] {
            assert!(!regex.as_str().is_empty());
        }
    }

    #[test]
    fn test_required_only_fields_have_no_pattern() {
        assert_eq!(rule_for(FieldKey::Country).pattern, None);
        assert_eq!(rule_for(FieldKey::City).pattern, None);
        assert_eq!(rule_for(FieldKey::Pan).pattern, Some(PAN_PATTERN));
    }

    #[test]
    fn test_ascii_only_digits() {
        // Arabic-Indic digits are `\d` in Unicode mode but not in a browser
        assert!(validate(FieldKey::Aadhar, "١٢٣٤٥٦٧٨٩٠١٢").is_err());
        assert!(validate(FieldKey::PhoneNumber, "１２３４５６７").is_err());
    }

    #[test]
    fn test_password_needs_letter_and_digit() {
        assert!(is_valid_password("abc123"));
        assert!(!is_valid_password("123456"));
        assert!(!is_valid_password("abcdef"));
        assert!(!is_valid_password("ab12"));
        assert!(!is_valid_password("abc12!"));
    }

    #[test]
    fn test_validate_all_only_records_given_keys() {
        let errors = validate_all([(FieldKey::Email, "a@b.com"), (FieldKey::Pan, "nope")]);
        assert_eq!(errors.len(), 2);
        assert!(errors.status(FieldKey::FirstName).is_none());
        assert_eq!(errors.message(FieldKey::Pan), Some("Invalid PAN number."));
        assert_eq!(errors.message(FieldKey::Email), None);
    }
}
