use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::domain::{SearchQuery, SearchRequest, SearchResponse};
use super::generator::InventoryGenerator;
use super::location::{classify, LocationInfo};
use super::region::Region;
use super::rules::{DrivingSide, MileageUnit, RegionalRules};
use crate::error::AppError;

/// Router exposing car search and location lookup over the inventory engine.
pub fn inventory_router(generator: Arc<InventoryGenerator>) -> Router {
    Router::new()
        .route("/api/v1/cars/search", post(search_handler))
        .route("/api/v1/locations/:code", get(location_handler))
        .with_state(generator)
}

pub(crate) async fn search_handler(
    State(generator): State<Arc<InventoryGenerator>>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let request = SearchRequest::try_from(query)?;
    let result = generator.generate(&request);
    Ok(Json(SearchResponse::from_result(result)))
}

/// Market conventions that apply at a location.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub region: Region,
    pub label: &'static str,
    pub currency: &'static str,
    pub mileage_unit: MileageUnit,
    pub driving_side: DrivingSide,
    pub providers: Vec<&'static str>,
}

impl From<&RegionalRules> for MarketSummary {
    fn from(rules: &RegionalRules) -> Self {
        Self {
            region: rules.region,
            label: rules.region.label(),
            currency: rules.currency,
            mileage_unit: rules.mileage_unit,
            driving_side: rules.driving_side,
            providers: rules.providers.iter().map(|brand| brand.name).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationLookup {
    pub location: LocationInfo,
    pub market: MarketSummary,
}

pub(crate) async fn location_handler(Path(code): Path<String>) -> Json<LocationLookup> {
    let location = classify(&code);
    let rules = RegionalRules::for_region(location.region);
    Json(LocationLookup {
        market: MarketSummary::from(&rules),
        location,
    })
}
