//! Integration tests for the booking HTTP API.
//!
//! These drive a full booking through the router:
//! 1. Open a session
//! 2. Fill every required field through `update_field`
//! 3. Pick a flight and fetch the summary
//! 4. End the session

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use travel_desk::adapters::{booking_router, BookingAppState, InMemorySessionStore};
use travel_desk::application::BookingToolExecutor;
use travel_desk::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(max_sessions: usize) -> Router {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(max_sessions));
    let executor = Arc::new(BookingToolExecutor::new(store.clone()));
    booking_router().with_state(BookingAppState::new(store, executor))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn session_uri(session_id: &str, resource: &str) -> String {
    format!("/api/sessions/{}/{}", session_id, resource)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn start(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

async fn invoke(app: &Router, session_id: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        post_json(&format!("/api/sessions/{}/invoke", session_id), body),
    )
    .await
}

async fn update(app: &Router, session_id: &str, field: &str, value: &str) -> Value {
    let (status, body) = invoke(
        app,
        session_id,
        json!({
            "tool_name": "update_field",
            "parameters": { "field": field, "value": value }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

const ANSWERS: &[(&str, &str)] = &[
    ("registererDetails.projectOrOpportunity", "Apollo rollout"),
    ("registererDetails.billableTo", "Company"),
    ("travelPlan.travelType", "domestic"),
    ("travelPlan.travelScope", "round trip"),
    ("travelPlan.leavingFrom", "Bengaluru"),
    ("travelPlan.goingTo", "Mumbai"),
    ("travelPlan.departureDate", "12/03/2027"),
    ("travelPlan.travelMode", "Air"),
    ("travelPlan.companyProvidedAccommodationRequired", "No"),
    ("travelPlan.travelPurpose", "Client workshop"),
    ("passengerDetails.passengerName", "Asha Rao"),
    ("passengerDetails.relation", "self"),
    ("approver.approverName", "Vikram Shah"),
];

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_booking_flow() {
    let app = app(10);
    let session_id = start(&app).await;

    for (field, value) in ANSWERS {
        let body = update(&app, &session_id, field, value).await;
        assert_eq!(body["success"], json!(true), "update of {} failed", field);
        assert_eq!(body["context_updated"], json!(true));
    }

    let (status, progress) = send(&app, get(&session_uri(&session_id, "progress"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["complete"], json!(true));
    assert_eq!(progress["nextNode"], json!("booking_options"));
    assert_eq!(progress["pendingFields"], json!([]));
    assert_eq!(progress["stage"], json!("complete"));

    let (_, selected) = invoke(
        &app,
        &session_id,
        json!({
            "tool_name": "set_selected_flight",
            "task": "suggest_flights",
            "parameters": { "option": "1" }
        }),
    )
    .await;
    assert_eq!(selected["success"], json!(true));

    let (_, summary) = invoke(
        &app,
        &session_id,
        json!({ "tool_name": "get_booking_summary", "task": "summarize" }),
    )
    .await;
    assert_eq!(summary["success"], json!(true));
    assert_eq!(
        summary["result"]["approvalMessage"],
        json!("travel request is sent to Vikram Shah for approval")
    );
    assert_eq!(
        summary["result"]["selectedFlight"]["airline"],
        json!("Air Indigo")
    );

    let (_, yaml) = invoke(
        &app,
        &session_id,
        json!({
            "tool_name": "get_booking_summary",
            "task": "summarize",
            "parameters": { "format": "yaml" }
        }),
    )
    .await;
    assert_eq!(yaml["success"], json!(true));
    let rendered = yaml["result"].as_str().unwrap();
    assert!(rendered.contains("approvalMessage: travel request is sent to Vikram Shah for approval"));
    assert!(rendered.contains("airline: Air Indigo"));

    let (_, context) = send(&app, get(&session_uri(&session_id, "context"))).await;
    assert_eq!(context["stage"], json!("summarized"));
    assert_eq!(context["context"]["travelPlan"]["goingTo"], json!("Mumbai"));

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/sessions/{}", session_id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&session_uri(&session_id, "progress"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("SESSION_NOT_FOUND"));
}

#[tokio::test]
async fn rejected_value_reports_code_and_keeps_state() {
    let app = app(10);
    let session_id = start(&app).await;

    let body = update(&app, &session_id, "travelPlan.departureDate", "2027-03-12").await;

    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error_code"], json!("INVALID_VALUE"));
    assert_eq!(body["error"], json!("Invalid date format, must be dd/mm/yyyy"));
    assert_eq!(body["context_updated"], json!(false));

    let (_, progress) = send(&app, get(&session_uri(&session_id, "progress"))).await;
    assert_eq!(progress["filledFields"], json!([]));
}

#[tokio::test]
async fn sessions_do_not_share_state() {
    let app = app(10);
    let first = start(&app).await;
    let second = start(&app).await;

    update(&app, &first, "travelPlan.goingTo", "Delhi").await;

    let (_, context) = send(&app, get(&session_uri(&second, "context"))).await;
    assert_eq!(context["context"]["travelPlan"]["goingTo"], json!(null));
}

#[tokio::test]
async fn tool_outside_agent_role_is_forbidden() {
    let app = app(10);
    let session_id = start(&app).await;

    let (status, body) = invoke(
        &app,
        &session_id,
        json!({ "tool_name": "reset_state", "task": "ask_question" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "shared tools are open to every role");
    assert_eq!(body["success"], json!(true));

    let (status, body) = invoke(
        &app,
        &session_id,
        json!({ "tool_name": "get_booking_summary", "task": "extract_fields" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!("TOOL_NOT_PERMITTED"));
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let app = app(10);
    let session_id = start(&app).await;

    let (status, _) = invoke(&app, &session_id, json!({ "tool_name": "book_hotel" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_limit_is_enforced() {
    let app = app(1);
    start(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], json!("SESSION_LIMIT_REACHED"));
}

#[tokio::test]
async fn lists_tools_for_role_in_openai_format() {
    let app = app(10);

    let (status, body) = send(&app, get("/api/tools?role=flight_options&format=openai")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("flight_options"));
    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["function"]["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"set_selected_flight"));
    assert!(names.contains(&"list_flight_options"));
    assert!(names.contains(&"get_context"));
    assert!(!names.contains(&"update_field"));
}

#[tokio::test]
async fn health_reports_active_sessions() {
    let app = app(10);
    start(&app).await;

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["active_sessions"], json!(1));
}
