//! End-to-end car search scenarios driven through the public generator and HTTP router.

mod common {
    use chrono::NaiveDate;
    use rental_inventory::inventory::{InventoryGenerator, SearchRequest, SearchResponse};

    pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    pub(super) fn respond(request: &SearchRequest) -> SearchResponse {
        SearchResponse::from_result(InventoryGenerator::new().generate(request))
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use rental_inventory::inventory::{
    classify, inventory_router, Category, FuelType, InventoryGenerator, MileageUnit, Region,
    SearchRequest,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{date, respond};

#[test]
fn brasilia_five_day_rental() {
    let request = SearchRequest::new("BSB", date(2025, 1, 15), date(2025, 1, 20));
    let response = respond(&request);

    assert_eq!(response.meta.region, Region::Brazil);
    assert!(response.meta.mock_data);
    assert_eq!(response.meta.count, response.data.len());
    assert!(!response.data.is_empty());

    for offer in &response.data {
        assert_eq!(offer.price.billable_days, 5);
        assert!((offer.price.total - offer.price.per_day * 5.0).abs() < 0.01);
        assert_eq!(offer.price.currency, "BRL");
        assert!(["Localiza", "Movida", "Unidas"].contains(&offer.provider.name.as_str()));
        assert!(!offer.vehicle.name.to_lowercase().contains("tesla"));
        assert_eq!(offer.mileage.unit, MileageUnit::Km);
        assert_eq!(offer.pickup_location.display_name, "Brasília International Airport");
        assert_eq!(
            response.dictionaries.providers.get(&offer.provider.code),
            Some(&offer.provider.name)
        );
    }
    assert!(response
        .data
        .iter()
        .any(|offer| offer.vehicle.fuel_type == FuelType::Flex));
}

#[test]
fn los_angeles_same_day_rental() {
    let day = date(2025, 7, 4);
    let request = SearchRequest::new("lax", day, day);
    let response = respond(&request);

    assert_eq!(response.meta.region, Region::Usa);
    assert_eq!(response.meta.region, classify("LAX").region);
    assert!(response
        .data
        .iter()
        .any(|offer| offer.vehicle.name.to_lowercase().contains("tesla")));

    for offer in &response.data {
        assert_eq!(offer.price.billable_days, 1);
        assert!((offer.price.total - offer.price.per_day).abs() < 0.01);
        assert_eq!(offer.mileage.unit, MileageUnit::Miles);
        assert_eq!(offer.price.currency, "USD");
        if matches!(
            offer.vehicle.category,
            Category::Luxury | Category::Premium | Category::Electric
        ) {
            assert!(offer.insurance.included);
        }
        assert!(!offer.features.is_empty());
    }
}

#[test]
fn reversed_window_bills_a_single_day() {
    let request = SearchRequest::new("LHR", date(2025, 5, 10), date(2025, 5, 3));
    for offer in respond(&request).data {
        assert_eq!(offer.price.billable_days, 1);
    }
}

#[test]
fn unknown_location_still_returns_a_consistent_batch() {
    let request = SearchRequest::new("ZZ9", date(2025, 2, 1), date(2025, 2, 4));
    let response = respond(&request);
    assert_eq!(response.meta.region, Region::Global);
    assert!(!response.data.is_empty());
    for offer in &response.data {
        assert_eq!(offer.pickup_location.display_name, "ZZ9");
        assert_eq!(offer.price.billable_days, 3);
    }
}

#[tokio::test]
async fn http_search_matches_direct_generation() {
    let router = inventory_router(Arc::new(InventoryGenerator::new()));
    let payload = json!({
        "pickupLocation": "CDG",
        "dropoffLocation": "FRA",
        "pickupDate": "2025-09-01",
        "dropoffDate": "2025-09-08",
        "pickupTime": "14:00",
        "dropoffTime": "12:00",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/cars/search")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&body).expect("json payload");

    let direct = respond(
        &SearchRequest::new("CDG", date(2025, 9, 1), date(2025, 9, 8))
            .with_dropoff_location("FRA")
            .with_times(
                chrono::NaiveTime::from_hms_opt(14, 0, 0).expect("valid"),
                chrono::NaiveTime::from_hms_opt(12, 0, 0).expect("valid"),
            ),
    );
    assert_eq!(body, serde_json::to_value(&direct).expect("serializes"));
    assert_eq!(body["meta"]["region"], json!("europe"));
    assert!(body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .all(|offer| offer["price"]["billableDays"] == json!(7)));
}
