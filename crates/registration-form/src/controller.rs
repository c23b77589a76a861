// File: src/controller.rs
// Purpose: Owns one form session's values and errors and decides when to validate

use registration_validation::{validate, validate_all, ErrorMap, FieldKey, FieldStatus};
use tracing::{debug, info, warn};

use crate::bundle::SubmissionBundle;
use crate::catalog::CountryCityCatalog;
use crate::error::FormError;
use crate::event::FormEvent;
use crate::values::FieldValues;

/// What the view should show for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState<'a> {
    /// Never checked; no error is displayed
    Untouched,
    Valid,
    Invalid(&'a str),
}

/// Lifecycle of the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    /// Hand-off happened; terminal for this session
    Submitted,
}

/// Mutable state of one registration form session
#[derive(Debug, Clone)]
pub struct FormController {
    catalog: CountryCityCatalog,
    values: FieldValues,
    errors: ErrorMap,
    phase: FormPhase,
}

impl FormController {
    pub fn new(catalog: CountryCityCatalog) -> Self {
        Self {
            catalog,
            values: FieldValues::new(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(key)
    }

    /// Errors currently on display
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn catalog(&self) -> &CountryCityCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Replace a raw value; does not validate
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.set(key, value);
    }

    /// Replace a raw value addressed by its input name
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let key = name.parse::<FieldKey>()?;
        self.set_field(key, value);
        Ok(())
    }

    /// Validate one field (on blur) and record the result for that field only
    pub fn touch_field(&mut self, key: FieldKey, value: &str) -> FieldState<'_> {
        let result = validate(key, value);
        debug!(field = %key, valid = result.is_ok(), "field touched");
        self.errors.record(key, result);
        self.field_state(key)
    }

    pub fn field_state(&self, key: FieldKey) -> FieldState<'_> {
        match self.errors.status(key) {
            None => FieldState::Untouched,
            Some(FieldStatus::Valid) => FieldState::Valid,
            Some(FieldStatus::Invalid(err)) => FieldState::Invalid(err.message.as_str()),
        }
    }

    /// Set the country from the select; a change clears the dependent city
    ///
    /// Only catalog countries or the empty placeholder are accepted. A city
    /// that was already checked is checked again against its new empty
    /// value, so it shows "City is required." until re-selected.
    pub fn select_country(&mut self, country: impl Into<String>) -> Result<(), FormError> {
        let country = country.into();
        if !country.is_empty() && !self.catalog.contains(&country) {
            warn!("rejected country outside the catalog");
            return Err(FormError::CountryNotOffered { country });
        }
        if self.values.get(FieldKey::Country) == country {
            return Ok(());
        }

        debug!(cleared = country.is_empty(), "country changed");
        self.values.set(FieldKey::Country, country);
        self.values.set(FieldKey::City, String::new());

        if self.errors.status(FieldKey::City).is_some() {
            self.errors.record(FieldKey::City, validate(FieldKey::City, ""));
        }
        Ok(())
    }

    /// Cities offered for the current country
    ///
    /// `None` while the country is empty or unknown; the city input is then disabled.
    pub fn city_options(&self) -> Option<&[String]> {
        self.catalog.cities(self.values.get(FieldKey::Country))
    }

    pub fn is_city_enabled(&self) -> bool {
        self.city_options().is_some()
    }

    /// Set the city from the select; only offered cities or the empty placeholder
    pub fn select_city(&mut self, city: impl Into<String>) -> Result<(), FormError> {
        let city = city.into();
        let offered = city.is_empty()
            || self
                .city_options()
                .is_some_and(|cities| cities.iter().any(|c| *c == city));

        if !offered {
            warn!("rejected city outside the current country's options");
            return Err(FormError::CityNotOffered {
                country: self.values.get(FieldKey::Country).to_string(),
                city,
            });
        }

        self.values.set(FieldKey::City, city);
        Ok(())
    }

    /// Whether every field currently passes its rule; does not touch displayed errors
    pub fn is_submittable(&self) -> bool {
        validate_all(self.values.iter()).is_clean()
    }

    /// Validate every field and either hand off a bundle or publish the errors
    pub fn submit(&mut self) -> Result<FormEvent, FormError> {
        if self.phase == FormPhase::Submitted {
            warn!("submit called after hand-off");
            return Err(FormError::AlreadySubmitted);
        }
        self.phase = FormPhase::Submitting;

        let mut errors = validate_all(self.values.iter());
        match errors.first_invalid() {
            None => {
                let bundle = SubmissionBundle::capture(&self.values);
                self.errors = errors;
                self.phase = FormPhase::Submitted;
                info!(fields = bundle.len(), "form submitted");
                Ok(FormEvent::SubmissionCompleted(bundle))
            }
            Some(focus) => {
                errors.retain_invalid();
                debug!(invalid = errors.invalid_count(), focus = %focus, "submit rejected");
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                Ok(FormEvent::SubmissionRejected { focus, errors })
            }
        }
    }

    /// Start a fresh session with the same catalog
    pub fn reset(&mut self) {
        self.values = FieldValues::new();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(CountryCityCatalog::default())
    }
}
