//! Form controller errors
//!
//! Field validation failures are not errors at this level; they are
//! recorded in the controller's `ErrorMap` and shown inline.

use registration_validation::UnknownFieldKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldKey),

    #[error("country {country:?} is not in the catalog")]
    CountryNotOffered { country: String },

    #[error("city {city:?} is not offered for country {country:?}")]
    CityNotOffered { country: String, city: String },

    #[error("form was already submitted")]
    AlreadySubmitted,
}
