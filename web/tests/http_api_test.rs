//! HTTP surface tests over the in-memory store.
//!
//! Exercises the full router in process: routing, extraction,
//! status-code translation, and response shapes.

#![allow(clippy::unwrap_used)]

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use eventdash_core::memory::InMemoryStore;
use eventdash_core::service::EventService;
use eventdash_web::router::build_router;
use eventdash_web::state::AppState;
use serde_json::{Value, json};

fn server() -> TestServer {
    let state = AppState::new(EventService::new(InMemoryStore::new()));
    TestServer::new(build_router(state)).unwrap()
}

async fn create_event(server: &TestServer, title: &str, capacity: i64) -> Value {
    let response = server
        .post("/events")
        .json(&json!({
            "title": title,
            "description": "A gathering",
            "date": "2026-09-01T18:00:00Z",
            "capacity": capacity,
        }))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn register(server: &TestServer, email: &str, event_id: &str) -> axum_test::TestResponse {
    server
        .post("/attendees")
        .json(&json!({
            "name": "Ada Lovelace",
            "email": email,
            "eventId": event_id,
        }))
        .await
}

#[tokio::test]
async fn test_health_reports_version() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready_probes_store() {
    let server = server();
    let response = server.get("/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn test_create_event_round_trips() {
    let server = server();
    let created = create_event(&server, "Launch", 50).await;
    assert_eq!(created["title"], "Launch");
    assert_eq!(created["capacity"], 50);
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let response = server
        .get(&format!("/events/{}", created["id"].as_str().unwrap()))
        .await;
    response.assert_status_ok();
    let detail: Value = response.json();
    assert_eq!(detail["title"], "Launch");
    assert_eq!(detail["attendees"], json!([]));
}

#[tokio::test]
async fn test_create_event_validation_returns_field_detail() {
    let server = server();
    let response = server
        .post("/events")
        .json(&json!({
            "title": "",
            "description": "",
            "date": "not a date",
            "capacity": 0,
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "description", "date", "capacity"]);

    // Nothing persisted
    let events: Value = server.get("/events").await.json();
    assert_eq!(events, json!([]));
}

#[tokio::test]
async fn test_create_event_accepts_string_capacity() {
    let server = server();
    let response = server
        .post("/events")
        .json(&json!({
            "title": "Launch",
            "description": "A gathering",
            "date": "2026-09-01",
            "capacity": "25",
        }))
        .await;
    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["capacity"], 25);
}

#[tokio::test]
async fn test_get_missing_event_is_404() {
    let server = server();
    let response = server
        .get("/events/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_registration_scenario() {
    // Create "Launch" (capacity 2), register a@x.com twice: the
    // second call fails and exactly one attendee row exists.
    let server = server();
    let event = create_event(&server, "Launch", 2).await;
    let event_id = event["id"].as_str().unwrap();

    register(&server, "a@x.com", event_id).await.assert_status_ok();

    let response = register(&server, "a@x.com", event_id).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "DUPLICATE_REGISTRATION");
    assert_eq!(
        body["message"],
        "This email is already registered for this event."
    );

    let events: Value = server.get("/events").await.json();
    assert_eq!(events[0]["attendeeCount"], 1);
}

#[tokio::test]
async fn test_same_email_two_events_is_fine() {
    let server = server();
    let first = create_event(&server, "First", 5).await;
    let second = create_event(&server, "Second", 5).await;

    register(&server, "a@x.com", first["id"].as_str().unwrap())
        .await
        .assert_status_ok();
    register(&server, "a@x.com", second["id"].as_str().unwrap())
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_capacity_is_display_only() {
    let server = server();
    let event = create_event(&server, "Tiny", 2).await;
    let event_id = event["id"].as_str().unwrap();

    for email in ["a@x.com", "b@x.com", "c@x.com"] {
        register(&server, email, event_id).await.assert_status_ok();
    }
    let events: Value = server.get("/events").await.json();
    assert_eq!(events[0]["attendeeCount"], 3);
}

#[tokio::test]
async fn test_register_invalid_body_returns_field_detail() {
    let server = server();
    let response = server
        .post("/attendees")
        .json(&json!({
            "name": "",
            "email": "nope",
            "eventId": "not-a-uuid",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_dangling_event_is_404() {
    let server = server();
    let response = register(&server, "a@x.com", "00000000-0000-0000-0000-000000000000").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_event_cascades_scenario() {
    // Create, register two attendees, delete the event: GET returns
    // 404 and the directory contains neither attendee.
    let server = server();
    let event = create_event(&server, "Launch", 2).await;
    let event_id = event["id"].as_str().unwrap();

    register(&server, "a@x.com", event_id).await.assert_status_ok();
    register(&server, "b@x.com", event_id).await.assert_status_ok();

    let response = server.delete(&format!("/events/{event_id}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Event deleted");

    server
        .get(&format!("/events/{event_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let directory: Value = server.get("/attendees/all").await.json();
    assert_eq!(directory, json!([]));
}

#[tokio::test]
async fn test_delete_missing_attendee_is_404_not_silent() {
    let server = server();
    let response = server
        .delete("/attendees/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_attendee_returns_deleted_record() {
    let server = server();
    let event = create_event(&server, "Launch", 2).await;
    let attendee: Value = register(&server, "a@x.com", event["id"].as_str().unwrap())
        .await
        .json();

    let response = server
        .delete(&format!("/attendees/{}", attendee["id"].as_str().unwrap()))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Attendee removed");
    assert_eq!(body["deleted"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_directory_embeds_event_summary_newest_first() {
    let server = server();
    let first = create_event(&server, "First", 5).await;
    let second = create_event(&server, "Second", 5).await;

    register(&server, "a@x.com", first["id"].as_str().unwrap())
        .await
        .assert_status_ok();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    register(&server, "b@x.com", second["id"].as_str().unwrap())
        .await
        .assert_status_ok();

    let directory: Value = server.get("/attendees/all").await.json();
    assert_eq!(directory[0]["email"], "b@x.com");
    assert_eq!(directory[0]["event"]["title"], "Second");
    assert_eq!(directory[1]["email"], "a@x.com");
    assert_eq!(directory[1]["event"]["title"], "First");
}

#[tokio::test]
async fn test_csv_export_download() {
    let server = server();
    let event = create_event(&server, "Launch Party", 10).await;
    let event_id = event["id"].as_str().unwrap();
    register(&server, "ada@x.com", event_id).await.assert_status_ok();

    let response = server
        .get(&format!("/events/{event_id}/attendees/export"))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition").to_str().unwrap(),
        "attachment; filename=\"Launch_Party_Attendees.csv\""
    );
    let body = response.text();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("Name,Email,Registered At"));
    assert!(lines.next().unwrap().contains("ada@x.com"));
}

#[tokio::test]
async fn test_stats_counters() {
    let server = server();
    let event = create_event(&server, "Launch", 5).await;
    register(&server, "a@x.com", event["id"].as_str().unwrap())
        .await
        .assert_status_ok();
    register(&server, "b@x.com", event["id"].as_str().unwrap())
        .await
        .assert_status_ok();

    let stats: Value = server.get("/stats").await.json();
    assert_eq!(stats["totalEvents"], 1);
    assert_eq!(stats["totalRegistrations"], 2);
}

#[tokio::test]
async fn test_correlation_id_round_trips() {
    let server = server();
    let response = server
        .get("/events")
        .add_header(
            HeaderName::from_static("x-correlation-id"),
            HeaderValue::from_static("3e1f1c52-86b1-4e4e-9f06-54cfd63dfc12"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("x-correlation-id").to_str().unwrap(),
        "3e1f1c52-86b1-4e4e-9f06-54cfd63dfc12"
    );
}
