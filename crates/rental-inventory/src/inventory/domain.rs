use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::acriss::{AcrissCode, BodyType, Category, FuelType, Transmission};
use super::location::LocationInfo;
use super::pricing::PriceQuote;
use super::region::Region;
use super::rules::{MileageUnit, RentalBrand};

/// Time of day assumed when a request omits pickup or dropoff time.
pub const DEFAULT_RENTAL_TIME: (u32, u32) = (10, 0);

/// Rentable vehicle as presented to the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub name: String,
    pub category: Category,
    pub body_type: BodyType,
    pub transmission: Transmission,
    pub air_conditioning: bool,
    pub seats: u8,
    pub doors: u8,
    pub bags: u8,
    pub fuel_type: FuelType,
    pub acriss_code: AcrissCode,
}

/// Rental company quoting the offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub code: String,
    pub name: String,
}

impl From<&RentalBrand> for Provider {
    fn from(brand: &RentalBrand) -> Self {
        Self {
            code: brand.code.to_string(),
            name: brand.name.to_string(),
        }
    }
}

/// Distance allowance; `limit` is a per-day figure and only present when capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileagePolicy {
    pub unlimited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub unit: MileageUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub included: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
}

/// One bookable-looking rental quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalOffer {
    pub id: String,
    pub vehicle: Vehicle,
    pub provider: Provider,
    pub price: PriceQuote,
    pub pickup_location: LocationInfo,
    pub dropoff_location: LocationInfo,
    pub pickup_date_time: NaiveDateTime,
    pub dropoff_date_time: NaiveDateTime,
    pub mileage: MileagePolicy,
    pub insurance: InsurancePolicy,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

/// Validated search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    #[serde(default)]
    pub pickup_time: Option<NaiveTime>,
    #[serde(default)]
    pub dropoff_time: Option<NaiveTime>,
}

impl SearchRequest {
    pub fn new(
        pickup_location: impl Into<String>,
        pickup_date: NaiveDate,
        dropoff_date: NaiveDate,
    ) -> Self {
        Self {
            pickup_location: pickup_location.into(),
            dropoff_location: None,
            pickup_date,
            dropoff_date,
            pickup_time: None,
            dropoff_time: None,
        }
    }

    pub fn with_dropoff_location(mut self, code: impl Into<String>) -> Self {
        self.dropoff_location = Some(code.into());
        self
    }

    pub fn with_times(mut self, pickup: NaiveTime, dropoff: NaiveTime) -> Self {
        self.pickup_time = Some(pickup);
        self.dropoff_time = Some(dropoff);
        self
    }

    /// Dropoff code, falling back to the pickup code when absent or blank.
    pub fn dropoff_code(&self) -> &str {
        self.dropoff_location
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .unwrap_or(&self.pickup_location)
    }

    pub fn pickup_at(&self) -> NaiveDateTime {
        self.pickup_date
            .and_time(self.pickup_time.unwrap_or_else(default_rental_time))
    }

    pub fn dropoff_at(&self) -> NaiveDateTime {
        self.dropoff_date
            .and_time(self.dropoff_time.unwrap_or_else(default_rental_time))
    }
}

fn default_rental_time() -> NaiveTime {
    let (hour, minute) = DEFAULT_RENTAL_TIME;
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Wire form of a search as submitted by clients, with dates and times still as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub dropoff_date: String,
    #[serde(default)]
    pub pickup_time: Option<String>,
    #[serde(default)]
    pub dropoff_time: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchRequestError {
    #[error("pickupLocation is required")]
    MissingPickupLocation,
    #[error("{field} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("{field} must be an HH:MM time, got '{value}'")]
    InvalidTime { field: &'static str, value: String },
}

impl TryFrom<SearchQuery> for SearchRequest {
    type Error = SearchRequestError;

    fn try_from(query: SearchQuery) -> Result<Self, Self::Error> {
        let pickup_location = query.pickup_location.trim().to_string();
        if pickup_location.is_empty() {
            return Err(SearchRequestError::MissingPickupLocation);
        }

        Ok(Self {
            pickup_location,
            dropoff_location: query
                .dropoff_location
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty()),
            pickup_date: parse_date("pickupDate", &query.pickup_date)?,
            dropoff_date: parse_date("dropoffDate", &query.dropoff_date)?,
            pickup_time: parse_optional_time("pickupTime", query.pickup_time.as_deref())?,
            dropoff_time: parse_optional_time("dropoffTime", query.dropoff_time.as_deref())?,
        })
    }
}

pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, SearchRequestError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        SearchRequestError::InvalidDate {
            field,
            value: raw.to_string(),
        }
    })
}

fn parse_optional_time(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveTime>, SearchRequestError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| SearchRequestError::InvalidTime {
            field,
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeta {
    pub count: usize,
    pub is_synthetic_data: bool,
    pub region: Region,
    pub note: String,
}

/// Offers generated for one request plus provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub offers: Vec<RentalOffer>,
    pub meta: SearchMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub count: usize,
    pub mock_data: bool,
    pub note: String,
    pub region: Region,
}

/// Display labels for the codes that appear in a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionaries {
    pub categories: BTreeMap<String, String>,
    pub providers: BTreeMap<String, String>,
}

/// JSON envelope returned to search clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<RentalOffer>,
    pub meta: ResponseMeta,
    pub dictionaries: Dictionaries,
}

impl SearchResponse {
    pub fn from_result(result: SearchResult) -> Self {
        let mut dictionaries = Dictionaries::default();
        for offer in &result.offers {
            let category = offer.vehicle.category;
            dictionaries
                .categories
                .entry(category.as_str().to_string())
                .or_insert_with(|| category.label().to_string());
            dictionaries
                .providers
                .entry(offer.provider.code.clone())
                .or_insert_with(|| offer.provider.name.clone());
        }

        Self {
            meta: ResponseMeta {
                count: result.offers.len(),
                mock_data: result.meta.is_synthetic_data,
                note: result.meta.note,
                region: result.meta.region,
            },
            data: result.offers,
            dictionaries,
        }
    }
}
