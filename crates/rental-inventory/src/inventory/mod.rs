//! Region-aware synthesis of car rental inventory.
//!
//! A search flows one way: the pickup code is classified into a [`Region`], the region's
//! rule catalog bounds what may be offered, and the generator assembles offers whose
//! ACRISS codes and prices are consistent with those rules and the rental window.

pub mod acriss;
pub mod domain;
pub mod fleet;
pub mod generator;
pub mod location;
pub mod pricing;
pub mod region;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use acriss::{
    synthesize_code, AcrissCode, AcrissError, BodyType, Category, FuelType, Transmission,
};
pub use domain::{
    Dictionaries, InsurancePolicy, MileagePolicy, Provider, RentalOffer, ResponseMeta,
    SearchMeta, SearchQuery, SearchRequest, SearchRequestError, SearchResponse, SearchResult,
    Vehicle,
};
pub use generator::InventoryGenerator;
pub use location::{classify, known_location_count, normalize_code, LocationInfo, LocationType};
pub use pricing::{base_daily_rate, billable_days, quote, PriceQuote};
pub use region::Region;
pub use router::inventory_router;
pub use rules::{
    categories_for, fuel_types_for, mileage_unit_for, providers_for, transmissions_for,
    DrivingSide, MileageUnit, RegionalRules, RentalBrand,
};
