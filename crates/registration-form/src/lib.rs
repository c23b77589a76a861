//! # registration-form
//!
//! Form controller for a single-page registration form: it owns the field
//! values and the displayed errors, gates submission on the rules from
//! `registration-validation`, and hands a `SubmissionBundle` to the
//! confirmation view through a `FormEvent`.
//!
//! ## Quick Start
//!
//! ```rust
//! use registration_form::{FormController, FormEvent};
//! use registration_validation::FieldKey;
//!
//! let mut form = FormController::default();
//! form.set_field(FieldKey::FirstName, "J");
//! form.touch_field(FieldKey::FirstName, "J");
//!
//! match form.submit().unwrap() {
//!     FormEvent::SubmissionRejected { focus, .. } => assert_eq!(focus, FieldKey::FirstName),
//!     FormEvent::SubmissionCompleted(_) => unreachable!(),
//! }
//! ```
//!
//! ## Architecture
//!
//! - `controller` - `FormController`, the single owner of session state
//! - `catalog` / `config` - country/city reference data loaded from TOML
//! - `bundle` / `event` - what leaves the controller on submit
//! - `confirmation` / `router` / `app` - the confirmation view model and routing

pub mod app;
pub mod bundle;
pub mod catalog;
pub mod config;
pub mod confirmation;
pub mod controller;
pub mod error;
pub mod event;
pub mod router;
pub mod values;

pub use app::{Page, RegistrationApp};
pub use bundle::SubmissionBundle;
pub use catalog::{CatalogError, CountryCityCatalog, CountryEntry};
pub use config::{FormConfig, FormSettings, DEFAULT_CONFIG_PATH};
pub use confirmation::{ConfirmationPage, ConfirmationView, SummaryLine};
pub use controller::{FieldState, FormController, FormPhase};
pub use error::FormError;
pub use event::FormEvent;
pub use router::{Navigator, Route};
pub use values::FieldValues;
