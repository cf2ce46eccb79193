use std::str::FromStr;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use easyrental::{app_router, config::Config, AppState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    app_router(AppState::new(Config::default()))
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn amount(value: &Value) -> Decimal {
    Decimal::from_str(value["amount"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn health_works() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn quote_three_days() {
    let (status, body) = post_json(
        "/api/pricing/quote",
        json!({ "price_per_day": "1000", "start_date": "2024-01-01", "end_date": "2024-01-04" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 3);
    assert_eq!(amount(&body["base_amount"]), dec!(3000));
    assert_eq!(amount(&body["service_charge"]), dec!(150));
    assert_eq!(amount(&body["vat"]), dec!(567));
    assert_eq!(amount(&body["total"]), dec!(3717));
    assert_eq!(body["total"]["currency"], "LKR");
}

#[tokio::test]
async fn quote_with_missing_end_date_is_zero() {
    let (status, body) = post_json(
        "/api/pricing/quote",
        json!({ "price_per_day": "1000", "start_date": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 0);
    assert_eq!(amount(&body["total"]), Decimal::ZERO);
}

#[tokio::test]
async fn quote_rejects_negative_price() {
    let (status, body) = post_json(
        "/api/pricing/quote",
        json!({ "price_per_day": "-5", "start_date": "2024-01-01", "end_date": "2024-01-02" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "bad_request");
}

#[tokio::test]
async fn decompose_total() {
    let (status, body) = post_json("/api/pricing/decompose", json!({ "total_amount": "3717" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["base_amount"]), dec!(3000));
    assert_eq!(amount(&body["service_charge"]), dec!(150));
    assert_eq!(amount(&body["owner_earnings"]), dec!(3000));
}

#[tokio::test]
async fn eligibility_for_pending_booking() {
    let (status, body) = post_json(
        "/api/bookings/eligibility",
        json!({
            "booking": { "id": 4, "status": "PENDING", "startDate": "2024-07-01", "endDate": "2024-07-03" },
            "now": "2024-06-15T12:00:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking_id"], 4);
    assert_eq!(body["can_approve"], true);
    assert_eq!(body["can_cancel"], false);
    assert_eq!(body["actions"], json!(["approve", "reject"]));
}

#[tokio::test]
async fn eligibility_for_finished_active_booking() {
    let (_, body) = post_json(
        "/api/bookings/eligibility",
        json!({
            "booking": { "id": 5, "status": "ACTIVE", "startDate": "2024-06-10", "endDate": "2024-06-15" },
            "now": "2024-06-15T12:00:00Z"
        }),
    )
    .await;

    assert_eq!(body["actions"], json!(["complete"]));
}

#[tokio::test]
async fn earnings_summary_counts_completed_only() {
    let (status, body) = post_json(
        "/api/earnings/summary",
        json!({
            "bookings": [
                { "id": 1, "status": "COMPLETED", "totalAmount": 3717 },
                { "id": 2, "status": "COMPLETED", "totalAmount": 1239 },
                { "id": 3, "status": "PENDING", "totalAmount": 3717 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking_count"], 3);
    assert_eq!(body["completed_count"], 2);
    assert_eq!(amount(&body["total_earnings"]), dec!(4000));
    assert_eq!(amount(&body["average_booking_value"]), dec!(2000));
    assert_eq!(amount(&body["platform_revenue"]), dec!(200));
}

#[tokio::test]
async fn earnings_monthly_fills_all_months() {
    let (status, body) = post_json(
        "/api/earnings/monthly",
        json!({
            "year": 2024,
            "bookings": [
                { "id": 1, "status": "COMPLETED", "totalAmount": 3717, "bookingDate": "2024-03-05T09:30:00" },
                { "id": 2, "status": "PENDING", "totalAmount": 3717, "bookingDate": "2024-03-20T09:30:00" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let months = body["months"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[2]["label"], "Mar");
    assert_eq!(months[2]["transactions"], 2);
    assert_eq!(amount(&months[2]["revenue"]), dec!(150));
    assert_eq!(months[0]["transactions"], 0);
}

#[tokio::test]
async fn agreement_requires_saved_booking() {
    let (status, _) = post_json(
        "/api/reports/agreement",
        json!({ "booking": { "status": "PENDING" }, "date": "2024-03-09" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        "/api/reports/agreement",
        json!({ "booking": { "id": 9, "vehicleName": "Aqua" }, "date": "2024-03-09" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_name"], "rental-agreement-9.pdf");
    assert_eq!(body["terms"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn listing_report_for_users() {
    let (status, body) = post_json(
        "/api/reports/listing",
        json!({
            "kind": "users",
            "users": [{ "id": 2, "name": "Kamal", "email": "kamal@x.lk", "role": "ADMIN" }],
            "date": "2024-11-30"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_name"], "users-report-11-2024.pdf");
    assert_eq!(body["rows"][0], json!(["2", "Kamal", "kamal@x.lk", "N/A", "N/A", "ADMIN"]));
}

const MAX_AMOUNT: &str = "79228162514264337593543950335";

#[tokio::test]
async fn quote_too_large_is_bad_request() {
    let (status, body) = post_json(
        "/api/pricing/quote",
        json!({
            "price_per_day": "50000000000000000000000000000",
            "start_date": "2024-01-01",
            "end_date": "2024-01-03"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "bad_request");
}

#[tokio::test]
async fn earnings_too_large_are_bad_requests() {
    let bookings = json!([
        { "id": 1, "status": "COMPLETED", "totalAmount": MAX_AMOUNT, "bookingDate": "2024-05-01T10:00:00", "vehicleId": 3 },
        { "id": 2, "status": "COMPLETED", "totalAmount": MAX_AMOUNT, "bookingDate": "2024-05-02T10:00:00", "vehicleId": 3 }
    ]);

    let (status, _) = post_json("/api/earnings/summary", json!({ "bookings": bookings })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        "/api/reports/earnings",
        json!({ "vehicle": { "id": 3, "name": "Aqua" }, "bookings": bookings, "date": "2024-06-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let many: Vec<Value> = (0..30)
        .map(|id| json!({ "id": id, "status": "COMPLETED", "totalAmount": MAX_AMOUNT, "bookingDate": "2024-05-01T10:00:00" }))
        .collect();
    let (status, _) = post_json("/api/earnings/monthly", json!({ "year": 2024, "bookings": many })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
