//! Location classification: maps free-form pickup codes onto a market region.
//!
//! Lookups run against process-wide tables that are indexed once on first use and never
//! mutated afterwards. Classification is total: any string, including empty or garbage
//! input, resolves to a [`LocationInfo`], falling back to [`Region::Global`].

mod airports;
mod countries;

use super::region::Region;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Airport,
    City,
    TrainStation,
    Hotel,
    Downtown,
    Port,
}

impl LocationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Airport => "Airport",
            Self::City => "City",
            Self::TrainStation => "Train Station",
            Self::Hotel => "Hotel",
            Self::Downtown => "Downtown",
            Self::Port => "Port",
        }
    }
}

/// Resolved pickup or dropoff point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub code: String,
    pub display_name: String,
    pub address: String,
    pub city: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Region,
    pub location_type: LocationType,
}

struct LocationIndex {
    airport_country: HashMap<&'static str, &'static str>,
    airport_names: HashMap<&'static str, (&'static str, &'static str)>,
    country_region: HashMap<&'static str, Region>,
    country_names: HashMap<&'static str, &'static str>,
}

static LOCATION_INDEX: OnceLock<LocationIndex> = OnceLock::new();

fn location_index() -> &'static LocationIndex {
    LOCATION_INDEX.get_or_init(|| {
        let airport_country = airports::AIRPORTS_BY_COUNTRY
            .iter()
            .flat_map(|(country, codes)| codes.iter().map(move |code| (*code, *country)))
            .collect();
        let airport_names = airports::NAMED_AIRPORTS
            .iter()
            .map(|(code, name, city)| (*code, (*name, *city)))
            .collect();
        let country_region = countries::COUNTRIES_BY_REGION
            .iter()
            .flat_map(|(region, codes)| codes.iter().map(move |code| (*code, *region)))
            .collect();
        let country_names = countries::COUNTRY_NAMES.iter().copied().collect();

        LocationIndex {
            airport_country,
            airport_names,
            country_region,
            country_names,
        }
    })
}

/// Trims surrounding whitespace and upper-cases ASCII letters.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Resolves a location code to its metadata and market region.
pub fn classify(raw: &str) -> LocationInfo {
    let code = normalize_code(raw);
    let index = location_index();

    let Some(country_code) = index.airport_country.get(code.as_str()).copied() else {
        return unlisted_location(code);
    };

    let region = index
        .country_region
        .get(country_code)
        .copied()
        .unwrap_or(Region::Global);
    let (display_name, city) = match index.airport_names.get(code.as_str()) {
        Some((name, city)) => (name.to_string(), city.to_string()),
        None => (format!("{code} International Airport"), code.clone()),
    };
    let address = format!("{display_name}, Car Rental Center");
    let country = index
        .country_names
        .get(country_code)
        .map(|name| name.to_string());

    LocationInfo {
        code,
        display_name,
        address,
        city,
        country,
        country_code: Some(country_code.to_string()),
        region,
        location_type: LocationType::Airport,
    }
}

/// Region projection of [`classify`].
pub fn region(raw: &str) -> Region {
    let code = normalize_code(raw);
    let index = location_index();
    index
        .airport_country
        .get(code.as_str())
        .and_then(|country| index.country_region.get(country))
        .copied()
        .unwrap_or(Region::Global)
}

/// Number of location codes known to the classifier.
pub fn known_location_count() -> usize {
    location_index().airport_country.len()
}

/// Iterates every known location code together with its country code.
pub fn known_locations() -> impl Iterator<Item = (&'static str, &'static str)> {
    location_index()
        .airport_country
        .iter()
        .map(|(code, country)| (*code, *country))
}

fn unlisted_location(code: String) -> LocationInfo {
    let location_type = location_type_hint(&code);
    let address = match location_type {
        LocationType::Airport => format!("{code}, Car Rental Center"),
        _ => format!("{code} Downtown, Main Car Rental Office"),
    };

    LocationInfo {
        display_name: code.clone(),
        city: code.clone(),
        address,
        country: None,
        country_code: None,
        region: Region::Global,
        location_type,
        code,
    }
}

// Suffix conventions used by GDS city and rail codes.
fn location_type_hint(code: &str) -> LocationType {
    if code.contains("TRN") || code.contains("STN") || code.ends_with('T') {
        LocationType::TrainStation
    } else if code.ends_with('C') || code.ends_with('X') {
        LocationType::City
    } else {
        LocationType::Airport
    }
}
