// File: src/catalog.rs
// Purpose: Read-only country to city reference data

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One selectable country and its cities, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    pub cities: Vec<String>,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>, cities: &[&str]) -> Self {
        Self {
            name: name.into(),
            cities: cities.iter().map(|city| city.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("country name must not be empty")]
    EmptyCountryName,
    #[error("country {0:?} is listed more than once")]
    DuplicateCountry(String),
    #[error("country {0:?} has no cities")]
    NoCities(String),
    #[error("country {country:?} has an empty city name")]
    EmptyCityName { country: String },
    #[error("city {city:?} is listed more than once for {country:?}")]
    DuplicateCity { country: String, city: String },
}

/// Static mapping from country name to its ordered city list
///
/// Countries keep the order they were declared in; that order is the
/// order of the country select options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCityCatalog {
    entries: Vec<CountryEntry>,
}

impl CountryCityCatalog {
    /// Build a catalog, rejecting blank or repeated names
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyCountryName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::DuplicateCountry(entry.name.clone()));
            }
            if entry.cities.is_empty() {
                return Err(CatalogError::NoCities(entry.name.clone()));
            }

            let mut cities = HashSet::new();
            for city in &entry.cities {
                if city.is_empty() {
                    return Err(CatalogError::EmptyCityName {
                        country: entry.name.clone(),
                    });
                }
                if !cities.insert(city.as_str()) {
                    return Err(CatalogError::DuplicateCity {
                        country: entry.name.clone(),
                        city: city.clone(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Country names in option order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Cities for a country, `None` when the country is not in the catalog
    pub fn cities(&self, country: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.name == country)
            .map(|entry| entry.cities.as_slice())
    }

    pub fn contains(&self, country: &str) -> bool {
        self.cities(country).is_some()
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }
}

impl Default for CountryCityCatalog {
    fn default() -> Self {
        Self {
            entries: default_entries(),
        }
    }
}

pub(crate) fn default_entries() -> Vec<CountryEntry> {
    vec![
        CountryEntry::new("India", &["Delhi", "Mumbai", "Bangalore", "Chennai"]),
        CountryEntry::new("USA", &["New York", "Chicago", "Los Angeles"]),
        CountryEntry::new("Canada", &["Toronto", "Vancouver", "Montreal"]),
    ]
}
