//! Rental price arithmetic.
//!
//! Quotes are built from a per-day rate and a billable day count, so the total is always
//! `perDay × billableDays` to the cent. Taxes are carved out of the total rather than
//! added on top.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::acriss::Category;
use super::region::Region;
use super::rules::{currency_for, tax_rate_for};

const SECONDS_PER_DAY: i64 = 86_400;

pub const MIN_VARIATION: f64 = 0.9;
pub const MAX_VARIATION: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub currency: String,
    pub per_day: f64,
    pub total: f64,
    pub base: f64,
    pub taxes: f64,
    pub billable_days: u32,
}

/// Whole days charged for a rental; any started day counts and the minimum is one.
pub fn billable_days(pickup: NaiveDateTime, dropoff: NaiveDateTime) -> u32 {
    let seconds = (dropoff - pickup).num_seconds();
    if seconds <= 0 {
        return 1;
    }
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

fn category_baseline_usd(category: Category) -> f64 {
    match category {
        Category::Economy => 35.0,
        Category::Compact => 42.0,
        Category::Intermediate => 50.0,
        Category::Standard => 58.0,
        Category::Fullsize => 66.0,
        Category::Premium => 85.0,
        Category::Luxury => 120.0,
        Category::Electric => 130.0,
    }
}

/// Converts a USD baseline into the market's local currency and price level.
fn region_multiplier(region: Region) -> f64 {
    match region {
        Region::Brazil => 3.2,
        Region::Usa => 1.0,
        Region::Canada => 1.3,
        Region::Europe => 0.95,
        Region::Latam => 0.85,
        Region::Asia => 0.9,
        Region::MiddleEast => 1.0,
        Region::Oceania => 1.45,
        Region::Africa => 0.8,
        Region::Global => 1.0,
    }
}

fn premium_uplift(category: Category, region: Region) -> f64 {
    match (category, region) {
        (Category::Luxury | Category::Electric, Region::Usa | Region::Europe) => 1.15,
        _ => 1.0,
    }
}

/// Unvaried daily rate in the market's currency.
pub fn base_daily_rate(category: Category, region: Region) -> f64 {
    category_baseline_usd(category) * region_multiplier(region) * premium_uplift(category, region)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Prices one rental. `variation` is clamped to the supported band around the base rate.
pub fn quote(
    category: Category,
    region: Region,
    pickup: NaiveDateTime,
    dropoff: NaiveDateTime,
    variation: f64,
) -> PriceQuote {
    let variation = variation.clamp(MIN_VARIATION, MAX_VARIATION);
    let billable_days = billable_days(pickup, dropoff);
    let per_day = round2(base_daily_rate(category, region) * variation);
    let total = round2(per_day * f64::from(billable_days));
    let base = round2(total / (1.0 + tax_rate_for(region)));
    let taxes = round2(total - base);

    PriceQuote {
        currency: currency_for(region).to_string(),
        per_day,
        total,
        base,
        taxes,
        billable_days,
    }
}
