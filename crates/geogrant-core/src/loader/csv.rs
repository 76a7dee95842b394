// crates/geogrant-core/src/loader/csv.rs

//! Row parser for the reference dataset.
//!
//! Columns: `cityCode,provinceCode,countryCode,cityName,provinceName,countryName`.
//! The first line is a header. Fields are split on `,` with no quoting.

use crate::error::{GrantError, Result};
use crate::store::{CityRecord, GeoStore};
use std::io::{BufRead, BufReader, Read};

pub const FIELD_COUNT: usize = 6;

/// Parses one data row. Carriage returns are dropped anywhere in the line.
pub fn parse_row(line: &str) -> Option<CityRecord> {
    let line = line.replace('\r', "");
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return None;
    }
    Some(CityRecord {
        city_code: fields[0].to_string(),
        province_code: fields[1].to_string(),
        country_code: fields[2].to_string(),
        city_name: fields[3].to_string(),
        province_name: fields[4].to_string(),
        country_name: fields[5].to_string(),
    })
}

pub fn load_csv<R: Read>(reader: R) -> Result<GeoStore> {
    let mut store = GeoStore::new();
    let mut rows = 0usize;

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if idx == 0 || line.trim().is_empty() {
            continue;
        }
        let record = parse_row(&line).ok_or_else(|| {
            GrantError::InvalidData(format!(
                "line {}: expected {FIELD_COUNT} comma-separated fields",
                idx + 1
            ))
        })?;
        store.insert(record);
        rows += 1;
    }

    let stats = store.stats();
    tracing::debug!(
        rows,
        countries = stats.countries,
        states = stats.states,
        cities = stats.cities,
        "reference dataset parsed"
    );
    Ok(store)
}
