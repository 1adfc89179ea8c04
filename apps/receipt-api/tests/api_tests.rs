//! Integration tests for the Receipt API endpoints.
//!
//! Requests go straight into the axum `Router` via `tower::ServiceExt`,
//! no socket involved.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use receipt_api::{create_router, ApiConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    create_router(AppState::default(), &ApiConfig::default())
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

// ============ Info / Health ============

#[tokio::test]
async fn test_service_info() {
    let router = test_router();

    let (status, body) = send(&router, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Receipt Processor");
    assert_eq!(body["description"], "A simple receipt processor");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

// ============ Process + Lookup ============

#[tokio::test]
async fn test_process_then_get_points() {
    let router = test_router();

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(target_receipt())).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&router, Method::GET, &format!("/receipts/{id}/points"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"points": 28}));

    let (status, body) = send(&router, Method::GET, &format!("/receipts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"points": 28}));
}

#[tokio::test]
async fn test_corner_market_scores_109() {
    let router = test_router();

    let (_, body) = send(&router, Method::POST, "/receipts/process", Some(corner_market_receipt())).await;
    let id = body["id"].as_str().unwrap();

    let (_, body) = send(&router, Method::GET, &format!("/receipts/{id}/points"), None).await;
    assert_eq!(body["points"], 109);
}

#[tokio::test]
async fn test_numeric_amounts_are_accepted() {
    let router = test_router();
    let mut receipt = corner_market_receipt();
    receipt["total"] = json!(9.0);
    for item in receipt["items"].as_array_mut().unwrap() {
        item["price"] = json!(2.25);
    }

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(receipt)).await;
    assert_eq!(status, StatusCode::OK);

    let id = body["id"].as_str().unwrap();
    let (_, body) = send(&router, Method::GET, &format!("/receipts/{id}"), None).await;
    assert_eq!(body["points"], 109);
}

#[tokio::test]
async fn test_list_receipts_in_insertion_order() {
    let router = test_router();

    let (_, empty) = send(&router, Method::GET, "/receipts", None).await;
    assert_eq!(empty, json!([]));

    let (_, first) = send(&router, Method::POST, "/receipts/process", Some(target_receipt())).await;
    let (_, second) = send(&router, Method::POST, "/receipts/process", Some(corner_market_receipt())).await;

    let (status, body) = send(&router, Method::GET, "/receipts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": first["id"], "points": 28},
            {"id": second["id"], "points": 109}
        ])
    );
}

// ============ Errors ============

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::GET,
        "/receipts/7fb1377b-b223-49d9-a31a-5a02701dd310/points",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No receipt found for that ID");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_total_is_rejected_and_not_stored() {
    let router = test_router();
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("total");

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(receipt)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "The receipt is invalid: missing total");

    let (_, listed) = send(&router, Method::GET, "/receipts", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_missing_item_field_is_rejected() {
    let router = test_router();
    let mut receipt = target_receipt();
    receipt["items"][2]
        .as_object_mut()
        .unwrap()
        .remove("shortDescription");

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(receipt)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"],
        "Item at index 2 does not have the required field shortDescription"
    );
}

#[tokio::test]
async fn test_malformed_amount_is_rejected() {
    let router = test_router();
    let mut receipt = target_receipt();
    receipt["total"] = json!("35.355");

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(receipt)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_json_body_is_bad_request() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/receipts/process")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_wrong_json_shape_is_bad_request() {
    let router = test_router();

    let (status, body) = send(&router, Method::POST, "/receipts/process", Some(json!([1, 2, 3]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let mut receipt = target_receipt();
    receipt["items"] = json!("not a list");
    let (status, _) = send(&router, Method::POST, "/receipts/process", Some(receipt)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_limit() {
    let config = ApiConfig {
        max_body_bytes: 64,
        ..ApiConfig::default()
    };
    let router = create_router(AppState::default(), &config);

    let (status, _) = send(&router, Method::POST, "/receipts/process", Some(target_receipt())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
