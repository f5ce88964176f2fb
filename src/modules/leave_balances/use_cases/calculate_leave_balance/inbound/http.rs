use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LeaveBalanceParams {
    #[serde(default)]
    pub employee_id: String,
    pub year: Option<i32>,
    pub debug: Option<bool>,
}

/// Always 200: a failed calculation is reported in the body's `error` field.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<LeaveBalanceParams>,
) -> impl IntoResponse {
    let query = CalculateLeaveBalance {
        employee_id: params.employee_id,
        year: params.year,
        include_debug: params.debug.unwrap_or(false),
    };
    Json(state.balances.handle(query).await)
}
