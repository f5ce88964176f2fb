use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::leave_balances::use_cases::cancel_leave::command::CancelLeave;
use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CancelLeaveBody {
    pub leave_id: String,
    pub employee_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CancelLeaveBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CancelLeave {
        leave_id: body.leave_id,
        employee_id: body.employee_id,
    };

    match state.cancel_leave_handler.handle(command).await {
        Ok(balance) => Json(balance).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
