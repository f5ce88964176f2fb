use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::modules::leave_balances::use_cases::set_leave_allocation::command::SetLeaveAllocation;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetLeaveAllocationBody {
    pub employee_id: String,
    pub year: i32,
    pub allocated_days: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SetLeaveAllocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SetLeaveAllocation {
        employee_id: body.employee_id,
        year: body.year,
        allocated_days: body.allocated_days,
    };

    match state.set_leave_allocation_handler.handle(command).await {
        Ok(balance) => Json(balance).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
