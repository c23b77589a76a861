//! Registration Validation
//!
//! Pure, stateless format rules for the registration form fields.
//! The same value always produces the same result, so the rules back both
//! live per-field feedback and the whole-form check before submission.
//!
//! ```rust
//! use registration_validation::{validate, FieldKey};
//!
//! assert!(validate(FieldKey::Pan, "ABCDE1234F").is_ok());
//! let err = validate(FieldKey::Aadhar, "1234").unwrap_err();
//! assert_eq!(err.message, "Aadhar Number must be exactly 12 digits.");
//! ```

pub mod error;
pub mod error_map;
pub mod field;
pub mod rules;

pub use error::{FieldValidationError, UnknownFieldKey};
pub use error_map::{ErrorMap, FieldStatus};
pub use field::FieldKey;
pub use rules::{rule_for, validate, validate_all, Rule};
