// crates/geogrant-core/src/store.rs

//! # Geographic Reference Store
//!
//! A three-level nested lookup: country name → state name → city name →
//! [`CityRecord`]. Absence of a key at any level means that place is unknown.
//!
//! **Structure:** `GeoStore` -> `CountryMap` -> `StateMap` -> `CityMap`
//!
//! The store is built once by the [`loader`](crate::loader) and only read
//! afterwards.

use crate::location::{Granularity, ParsedLocation};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One row of the reference dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city_code: String,
    pub province_code: String,
    pub country_code: String,
    pub city_name: String,
    pub province_name: String,
    pub country_name: String,
}

pub type CityMap = BTreeMap<String, CityRecord>;
pub type StateMap = BTreeMap<String, CityMap>;
pub type CountryMap = BTreeMap<String, StateMap>;

/// Simple aggregate statistics for the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoStore {
    countries: CountryMap,
}

impl GeoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.csv"
    }

    /// Files `record` under its country/state/city path, replacing any
    /// record already stored there.
    pub fn insert(&mut self, record: CityRecord) {
        self.countries
            .entry(record.country_name.clone())
            .or_default()
            .entry(record.province_name.clone())
            .or_default()
            .insert(record.city_name.clone(), record);
    }

    /// Registers a country with no states. Mostly useful for tests and
    /// hand-built stores.
    pub fn insert_country(&mut self, country: impl Into<String>) {
        self.countries.entry(country.into()).or_default();
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    pub fn has_state(&self, country: &str, state: &str) -> bool {
        self.states(country).is_some_and(|s| s.contains_key(state))
    }

    pub fn has_city(&self, country: &str, state: &str, city: &str) -> bool {
        self.city(country, state, city).is_some()
    }

    /// Validates a parsed location at its own granularity.
    pub fn contains(&self, location: &ParsedLocation<'_>) -> bool {
        let country = location.country();
        match location.granularity() {
            Granularity::Country => self.has_country(country),
            Granularity::State => location
                .state()
                .is_some_and(|state| self.has_state(country, state)),
            Granularity::City => match (location.state(), location.city()) {
                (Some(state), Some(city)) => self.has_city(country, state, city),
                _ => false,
            },
        }
    }

    pub fn states(&self, country: &str) -> Option<&StateMap> {
        self.countries.get(country)
    }

    pub fn cities(&self, country: &str, state: &str) -> Option<&CityMap> {
        self.states(country)?.get(state)
    }

    pub fn city(&self, country: &str, state: &str, city: &str) -> Option<&CityRecord> {
        self.cities(country, state)?.get(city)
    }

    /// Country names in sorted order.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Finds the stored spelling of a country, ignoring case and accents.
    pub fn canonical_country(&self, query: &str) -> Option<&str> {
        let q = fold_key(query.trim());
        self.country_names().find(|name| fold_key(name) == q)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn stats(&self) -> DbStats {
        let states = self.countries.values().map(BTreeMap::len).sum();
        let cities = self
            .countries
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum();
        DbStats {
            countries: self.countries.len(),
            states,
            cities,
        }
    }
}

#[cfg(test)]
pub(crate) fn record(city: &str, state: &str, country: &str) -> CityRecord {
    CityRecord {
        city_code: city.to_uppercase(),
        province_code: state.to_uppercase(),
        country_code: country.to_uppercase(),
        city_name: city.to_string(),
        province_name: state.to_string(),
        country_name: country.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::parse;

    fn sample() -> GeoStore {
        let mut store = GeoStore::new();
        store.insert(record("Vyara", "Gujarat", "India"));
        store.insert(record("Surat", "Gujarat", "India"));
        store.insert(record("Chennai", "Tamil Nadu", "India"));
        store.insert(record("Zürich", "Zürich", "Switzerland"));
        store
    }

    #[test]
    fn walks_nested_levels() {
        let store = sample();
        assert!(store.has_country("India"));
        assert!(!store.has_country("USA"));
        assert!(store.has_state("India", "Gujarat"));
        assert!(!store.has_state("India", "Kerala"));
        assert!(store.has_city("India", "Gujarat", "Vyara"));
        assert!(!store.has_city("India", "Tamil Nadu", "Vyara"));
        assert_eq!(
            store.city("India", "Gujarat", "Surat").map(|c| c.city_code.as_str()),
            Some("SURAT")
        );
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let store = sample();
        assert!(!store.has_country("india"));
        assert_eq!(store.canonical_country("india"), Some("India"));
        assert_eq!(store.canonical_country(" SWITZERLAND "), Some("Switzerland"));
        assert_eq!(store.canonical_country("Atlantis"), None);
    }

    #[test]
    fn contains_checks_at_location_granularity() {
        let store = sample();
        assert!(store.contains(&parse("India").unwrap()));
        assert!(store.contains(&parse("Gujarat-India").unwrap()));
        assert!(store.contains(&parse("Vyara-Gujarat-India").unwrap()));
        assert!(!store.contains(&parse("Kerala-India").unwrap()));
        assert!(!store.contains(&parse("Chennai-Gujarat-India").unwrap()));
    }

    #[test]
    fn stats_count_every_level() {
        let mut store = sample();
        store.insert_country("Nepal");
        // re-inserting an existing path replaces rather than adds
        store.insert(record("Vyara", "Gujarat", "India"));
        assert_eq!(
            store.stats(),
            DbStats {
                countries: 3,
                states: 3,
                cities: 4
            }
        );
    }
}
