use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::leave_balances::core::records::ANNUAL_LEAVE_TYPE;
use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::modules::leave_balances::use_cases::request_leave::command::RequestLeave;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RequestLeaveBody {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_taken: f64,
    pub leave_type: Option<String>,
    pub reason: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RequestLeaveBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RequestLeave {
        leave_id: Uuid::now_v7().to_string(),
        employee_id: body.employee_id,
        start_date: body.start_date,
        end_date: body.end_date,
        days_taken: body.days_taken,
        leave_type: body.leave_type.unwrap_or_else(|| ANNUAL_LEAVE_TYPE.into()),
        reason: body.reason,
        created_at: Utc::now().timestamp_millis(),
    };

    match state.request_leave_handler.handle(command).await {
        Ok(balance) => (StatusCode::CREATED, Json(balance)).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(ApplicationError::Balance(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
