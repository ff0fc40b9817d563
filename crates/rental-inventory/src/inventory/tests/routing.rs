use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;

use crate::error::AppError;
use crate::inventory::{inventory_router, InventoryGenerator, SearchQuery, SearchRequestError};

fn router() -> axum::Router {
    inventory_router(Arc::new(InventoryGenerator::new()))
}

#[tokio::test]
async fn search_returns_the_response_envelope() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/cars/search",
            json!({
                "pickupLocation": "bsb",
                "pickupDate": "2025-01-15",
                "dropoffDate": "2025-01-20",
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["meta"]["mockData"], json!(true));
    assert_eq!(body["meta"]["region"], json!("brazil"));

    let data = body["data"].as_array().expect("data array");
    assert_eq!(body["meta"]["count"], json!(data.len()));
    let first = &data[0];
    assert_eq!(first["pickupLocation"]["code"], json!("BSB"));
    assert_eq!(first["price"]["billableDays"], json!(5));
    assert_eq!(first["price"]["currency"], json!("BRL"));
    assert_eq!(first["pickupDateTime"], json!("2025-01-15T10:00:00"));
    assert_eq!(first["vehicle"]["acrissCode"].as_str().map(str::len), Some(4));

    let category = first["vehicle"]["category"].as_str().expect("category");
    assert!(body["dictionaries"]["categories"][category].is_string());
    let provider = first["provider"]["code"].as_str().expect("provider code");
    assert_eq!(
        body["dictionaries"]["providers"][provider],
        first["provider"]["name"]
    );
}

#[tokio::test]
async fn search_rejects_malformed_dates() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/cars/search",
            json!({
                "pickupLocation": "LAX",
                "pickupDate": "15/01/2025",
                "dropoffDate": "2025-01-20",
            }),
        ))
        .await
        .expect("router responds");

    assert_bad_request(&response);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("pickupDate"), "{message}");
}

#[tokio::test]
async fn search_rejects_missing_pickup() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/cars/search",
            json!({
                "pickupLocation": "   ",
                "pickupDate": "2025-01-15",
                "dropoffDate": "2025-01-20",
            }),
        ))
        .await
        .expect("router responds");

    assert_bad_request(&response);
}

#[tokio::test]
async fn search_rejects_malformed_times() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/cars/search",
            json!({
                "pickupLocation": "LAX",
                "pickupDate": "2025-01-15",
                "dropoffDate": "2025-01-15",
                "pickupTime": "25:99",
            }),
        ))
        .await
        .expect("router responds");

    assert_bad_request(&response);
}

#[tokio::test]
async fn location_lookup_reports_market_conventions() {
    let response = router()
        .oneshot(get_request("/api/v1/locations/syd"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["location"]["code"], json!("SYD"));
    assert_eq!(body["location"]["region"], json!("oceania"));
    assert_eq!(body["location"]["locationType"], json!("airport"));
    assert_eq!(body["market"]["currency"], json!("AUD"));
    assert_eq!(body["market"]["drivingSide"], json!("left"));
    assert_eq!(body["market"]["mileageUnit"], json!("km"));
}

#[tokio::test]
async fn location_lookup_falls_back_to_global() {
    let response = router()
        .oneshot(get_request("/api/v1/locations/nowhere"))
        .await
        .expect("router responds");

    let body = read_json_body(response).await;
    assert_eq!(body["location"]["region"], json!("global"));
    assert_eq!(body["location"]["displayName"], json!("NOWHERE"));
    assert!(body["location"]["country"].is_null());
}

#[test]
fn query_conversion_trims_codes_and_defaults_times() {
    let query = SearchQuery {
        pickup_location: " gru ".to_string(),
        dropoff_location: Some("   ".to_string()),
        pickup_date: "2025-01-15".to_string(),
        dropoff_date: "2025-01-20".to_string(),
        pickup_time: Some("08:15".to_string()),
        dropoff_time: None,
    };
    let request = crate::inventory::SearchRequest::try_from(query).expect("valid query");
    assert_eq!(request.pickup_location, "gru");
    assert_eq!(request.dropoff_location, None);
    assert_eq!(request.pickup_at().to_string(), "2025-01-15 08:15:00");
    assert_eq!(request.dropoff_at().to_string(), "2025-01-20 10:00:00");
}

#[test]
fn invalid_search_maps_to_client_error() {
    let error = AppError::from(SearchRequestError::MissingPickupLocation);
    let response = axum::response::IntoResponse::into_response(error);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
