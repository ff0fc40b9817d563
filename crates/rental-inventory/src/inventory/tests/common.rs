use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::inventory::{
    FuelType, InventoryGenerator, Region, RentalOffer, SearchRequest, SearchResult,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Five day rental used by most scenarios.
pub(super) fn week_request(pickup: &str) -> SearchRequest {
    SearchRequest::new(pickup, date(2025, 1, 15), date(2025, 1, 20))
}

pub(super) fn search(pickup: &str) -> SearchResult {
    InventoryGenerator::new().generate(&week_request(pickup))
}

pub(super) fn has_fuel(offers: &[RentalOffer], fuel: FuelType) -> bool {
    offers.iter().any(|offer| offer.vehicle.fuel_type == fuel)
}

pub(super) fn provider_names(offers: &[RentalOffer]) -> Vec<&str> {
    offers
        .iter()
        .map(|offer| offer.provider.name.as_str())
        .collect()
}

/// One representative pickup code per market.
pub(super) const REGION_SAMPLES: &[(&str, Region)] = &[
    ("GRU", Region::Brazil),
    ("JFK", Region::Usa),
    ("YYZ", Region::Canada),
    ("CDG", Region::Europe),
    ("EZE", Region::Latam),
    ("NRT", Region::Asia),
    ("DXB", Region::MiddleEast),
    ("SYD", Region::Oceania),
    ("JNB", Region::Africa),
    ("XYZ", Region::Global),
];

pub(super) fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_bad_request(response: &Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
