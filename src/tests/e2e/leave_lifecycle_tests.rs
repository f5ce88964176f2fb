use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::leave_balances::core::policy::LeavePolicy;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shared::infrastructure::record_store::{EMPLOYEES, LEAVES};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::stores::{EMPLOYEE_ID, seed_employee};

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn it_should_track_the_balance_through_allocation_request_and_cancellation() {
    let store = Arc::new(InMemoryRecordStore::new());
    seed_employee(&store, 4).await;
    let app = router(AppState::new(store.clone(), LeavePolicy::default()));
    let balance_uri = format!("/leave-balance?employee_id={EMPLOYEE_ID}&year=2024");

    let (status, json) = call(&app, get(&balance_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["remainingBalance"], 18.67);

    let (status, json) = call(
        &app,
        post(
            "/set-leave-allocation",
            json!({ "employee_id": EMPLOYEE_ID, "year": 2024, "allocated_days": 22 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["baseLeaveBalance"], 22.0);

    let (status, json) = call(
        &app,
        post(
            "/request-leave",
            json!({
                "employee_id": EMPLOYEE_ID,
                "start_date": "2024-05-13",
                "end_date": "2024-05-17",
                "days_taken": 4.5,
                "reason": "Holiday",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["remainingBalance"], 17.5);
    let employees = store.rows(EMPLOYEES).await;
    assert_eq!(employees[0]["leave_balance"], 17.5);
    assert_eq!(employees[0]["annual_leave_balance"], 0.0);

    let leave_id = store.rows(LEAVES).await[0]["id"]
        .as_str()
        .expect("leave id")
        .to_string();
    let (status, json) = call(
        &app,
        post(
            "/cancel-leave",
            json!({ "leave_id": leave_id, "employee_id": EMPLOYEE_ID }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["remainingBalance"], 22.0);

    let (_, json) = call(&app, get(&balance_uri)).await;
    assert_eq!(json["remainingBalance"], 22.0);
    assert!(store.rows(LEAVES).await.is_empty());
}

#[tokio::test]
async fn it_should_serve_the_graphql_endpoint() {
    let store = Arc::new(InMemoryRecordStore::new());
    seed_employee(&store, 10).await;
    let app = router(AppState::new(store, LeavePolicy::default()));
    let query = r#"query($id: String!) {
        leaveBalance(employeeId: $id, year: 2024) { remainingBalance }
    }"#;
    let body = json!({ "query": query, "variables": { "id": EMPLOYEE_ID } });

    let (status, json) = call(&app, post("/gql", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["leaveBalance"]["remainingBalance"], 24.67);
}
