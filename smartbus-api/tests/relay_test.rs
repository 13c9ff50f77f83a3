use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use smartbus_api::{app, AppState};
use smartbus_core::allocator::SeatAllocator;
use smartbus_core::repository::{BookingRepository, HistoryRepository};
use smartbus_shared::models::{Booking, HistoryRecord, NewBooking};
use smartbus_store::{InMemoryBookingRepository, InMemoryHistoryRepository};
use std::error::Error;
use std::sync::Arc;
use tower::ServiceExt;

type BoxError = Box<dyn Error + Send + Sync>;

struct CannedAllocator(Value);

#[async_trait]
impl SeatAllocator for CannedAllocator {
    async fn allocate(&self, _payload: &Value) -> Result<Value, BoxError> {
        Ok(self.0.clone())
    }
}

/// Answers with exactly what it was sent.
struct EchoAllocator;

#[async_trait]
impl SeatAllocator for EchoAllocator {
    async fn allocate(&self, payload: &Value) -> Result<Value, BoxError> {
        Ok(payload.clone())
    }
}

struct DownAllocator;

#[async_trait]
impl SeatAllocator for DownAllocator {
    async fn allocate(&self, _payload: &Value) -> Result<Value, BoxError> {
        Err("connection refused".into())
    }
}

struct BrokenHistory;

#[async_trait]
impl HistoryRepository for BrokenHistory {
    async fn append(&self, _record: &HistoryRecord) -> Result<(), BoxError> {
        Err("database is down".into())
    }

    async fn find_by_passenger(&self, _passenger_id: &str) -> Result<Vec<HistoryRecord>, BoxError> {
        Err("database is down".into())
    }

    async fn list_all(
        &self,
        _since: Option<DateTime<Utc>>,
    ) -> Result<Vec<HistoryRecord>, BoxError> {
        Err("database is down".into())
    }
}

struct BrokenBookings;

#[async_trait]
impl BookingRepository for BrokenBookings {
    async fn insert(&self, _booking: NewBooking) -> Result<Booking, BoxError> {
        Err("database is down".into())
    }

    async fn list_recent(&self) -> Result<Vec<Booking>, BoxError> {
        Err("database is down".into())
    }
}

fn state_with(
    allocator: Arc<dyn SeatAllocator>,
    history_repo: Arc<dyn HistoryRepository>,
    booking_repo: Arc<dyn BookingRepository>,
) -> AppState {
    AppState {
        history_repo,
        booking_repo,
        allocator,
    }
}

fn test_app() -> Router {
    app(state_with(
        Arc::new(EchoAllocator),
        Arc::new(InMemoryHistoryRepository::new()),
        Arc::new(InMemoryBookingRepository::new()),
    ))
}

fn broken_storage_app() -> Router {
    app(state_with(
        Arc::new(EchoAllocator),
        Arc::new(BrokenHistory),
        Arc::new(BrokenBookings),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

fn feedback(passenger_id: &str, rating: i32, seat_label: &str) -> Value {
    json!({
        "passengerId": passenger_id,
        "rating": rating,
        "seatLabel": seat_label,
        "totalRows": 10,
        "totalCols": 4
    })
}

fn booking_body(trip_id: &str, seats: &[&str]) -> Value {
    let assignments: Vec<Value> = seats
        .iter()
        .enumerate()
        .map(|(i, seat)| {
            json!({
                "passengerId": format!("pax{}", i),
                "seatId": seat,
                "seatType": "Standard",
                "normRow": 0.0,
                "normCol": 0.0,
                "groupDistance": 0,
                "groupId": null,
                "explanation": "Closest free seat to the door."
            })
        })
        .collect();
    json!({
        "tripId": trip_id,
        "vehicle": { "rows": 10, "columns": 4, "vehicleType": "AC Seater" },
        "assignments": assignments
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "v1");

    let (status, _) = send(&app, "GET", "/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_allocate_relays_request_and_response_verbatim() {
    let app = test_app();
    let payload = json!({
        "tripId": "TRIP-1700000000000",
        "route": {},
        "vehicle": { "rows": 10, "columns": 4, "vehicleType": "AC Seater" },
        "passengers": [{
            "id": "ab12cd34", "name": "Asha", "age": 67, "gender": "Female",
            "disability": "Wheelchair", "groupId": null, "pickupStopId": 1, "dropStopId": 3
        }],
        "clientBuild": "unknown-field-survives"
    });

    let (status, body) = send(&app, "POST", "/allocate", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_allocate_keeps_key_order_and_bytes() {
    let app = test_app();
    let raw = r#"{"zeta":1,"passengers":[],"alpha":{"rows":2,"columns":1},"middle":"x"}"#;
    let request = Request::builder()
        .method("POST")
        .uri("/allocate")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), raw);
}

#[tokio::test]
async fn test_allocate_without_trip_id() {
    let app = test_app();
    let payload = json!({ "vehicle": { "rows": 1, "columns": 1 }, "passengers": [] });

    let (status, body) = send(&app, "POST", "/allocate", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    assert!(body.get("tripId").is_none());
}

#[tokio::test]
async fn test_allocate_returns_allocator_answer() {
    let answer = json!({
        "tripId": "TRIP-1",
        "assignments": [{
            "tripId": "TRIP-1", "passengerId": "ab12cd34", "groupId": null, "seatId": "1A",
            "groupDistance": null, "seatType": "Priority", "normRow": 0.0, "normCol": 0.0,
            "explanation": "Front seat close to the door for easier boarding."
        }]
    });
    let app = app(state_with(
        Arc::new(CannedAllocator(answer.clone())),
        Arc::new(InMemoryHistoryRepository::new()),
        Arc::new(InMemoryBookingRepository::new()),
    ));

    let request = json!({ "passengers": [] });
    let (status, body) = send(&app, "POST", "/v1/allocate", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, answer);
}

#[tokio::test]
async fn test_allocate_with_allocator_down() {
    let app = app(state_with(
        Arc::new(DownAllocator),
        Arc::new(InMemoryHistoryRepository::new()),
        Arc::new(InMemoryBookingRepository::new()),
    ));

    let (status, body) = send(&app, "POST", "/allocate", Some(json!({ "tripId": "TRIP-1" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to allocate seats" }));
}

#[tokio::test]
async fn test_feedback_is_normalized_and_queryable() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/feedback", Some(feedback("p1", 5, "1A"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stored");
    assert_eq!(body["norm_row"], 0.0);
    assert_eq!(body["norm_col"], 0.0);

    let (status, body) = send(&app, "POST", "/feedback", Some(feedback("p1", 2, "10D"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norm_row"], 1.0);
    assert_eq!(body["norm_col"], 1.0);

    let (status, body) = send(&app, "GET", "/histories/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "norm_row": 0.0, "norm_col": 0.0, "feedback_score": 5 },
            { "norm_row": 1.0, "norm_col": 1.0, "feedback_score": 2 }
        ])
    );
}

#[tokio::test]
async fn test_identical_feedback_is_appended_twice() {
    let app = test_app();
    for _ in 0..2 {
        let (status, _) = send(&app, "POST", "/feedback", Some(feedback("p9", 4, "3B"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, "GET", "/histories/p9", None).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
}

#[tokio::test]
async fn test_unknown_passenger_has_empty_history() {
    let (status, body) = send(&test_app(), "GET", "/histories/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unparsable_seat_label_is_a_server_error() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/feedback", Some(feedback("p1", 3, "aisle"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());

    let (_, body) = send(&app, "GET", "/histories/p1", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_feedback_body_is_rejected() {
    let (status, body) = send(&test_app(), "POST", "/feedback", Some(json!({ "rating": 5 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_training_export() {
    let app = test_app();
    send(&app, "POST", "/feedback", Some(feedback("p1", 3, "2B"))).await;
    send(&app, "POST", "/feedback", Some(feedback("p2", 5, "4C"))).await;

    let (status, body) = send(&app, "GET", "/feedback", None).await;
    assert_eq!(status, StatusCode::OK);

    let seattype = body["seattype"].as_array().unwrap();
    let penalty = body["penalty"].as_array().unwrap();
    assert_eq!(seattype.len(), 2);
    assert_eq!(penalty.len(), 2);
    assert_eq!(seattype[0][1], "Priority");
    assert_eq!(seattype[1][1], "Standard");
    assert_eq!(penalty[0][1], 3);
    assert_eq!(penalty[1][1], 5);
    assert_eq!(seattype[0][0]["incomplete_features"], true);
    assert_eq!(penalty[1][0]["norm_col"], json!(2.0 / 3.0));
}

#[tokio::test]
async fn test_training_export_since_filter() {
    let app = test_app();
    send(&app, "POST", "/feedback", Some(feedback("p1", 3, "2B"))).await;

    let (status, body) = send(&app, "GET", "/feedback?since=2999-01-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "seattype": [], "penalty": [] }));

    let (_, body) = send(&app, "GET", "/feedback?since=2000-01-01", None).await;
    assert_eq!(body["penalty"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/feedback?since=yesterday", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_reads_degrade_when_storage_is_down() {
    let app = broken_storage_app();

    let (status, body) = send(&app, "GET", "/histories/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "GET", "/feedback", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "seattype": [], "penalty": [] }));
}

#[tokio::test]
async fn test_writes_fail_when_storage_is_down() {
    let app = broken_storage_app();

    let booking = booking_body("TRIP-1", &["1A"]);
    let (status, body) = send(&app, "POST", "/allocations", Some(booking)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "status": "error" }));

    let (status, _) = send(&app, "POST", "/feedback", Some(feedback("p1", 5, "1A"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&app, "GET", "/bookings", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_bookings_are_stored_and_listed_newest_first() {
    let app = test_app();

    let booking = booking_body("TRIP-1", &["1A", "1B"]);
    let (status, body) = send(&app, "POST", "/allocations", Some(booking)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stored");
    assert_eq!(body["tripId"], "TRIP-1");

    // same trip again is a second booking
    send(&app, "POST", "/allocations", Some(booking_body("TRIP-1", &["2A"]))).await;
    send(&app, "POST", "/v1/allocations", Some(booking_body("TRIP-2", &["10D"]))).await;

    let (status, body) = send(&app, "GET", "/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0]["tripId"], "TRIP-2");
    assert_eq!(bookings[0]["schemaVersion"], 1);
    assert_eq!(bookings[2]["assignments"].as_array().unwrap().len(), 2);

    let created: Vec<DateTime<Utc>> = bookings
        .iter()
        .map(|b| serde_json::from_value(b["createdAt"].clone()).unwrap())
        .collect();
    assert!(created.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_bookings_outside_schema_are_not_stored() {
    let app = test_app();

    let booking = booking_body("TRIP-1", &["11A"]);
    let (status, body) = send(&app, "POST", "/allocations", Some(booking)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("outside"));

    let (status, _) = send(
        &app,
        "POST",
        "/allocations",
        Some(json!({ "tripId": "TRIP-2", "vehicle": "minibus", "assignments": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&app, "GET", "/bookings", None).await;
    assert_eq!(body, json!([]));
}
