use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::leave_balances::use_cases::calculate_leave_balance::outcome::LeaveBalanceResult;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLeaveBalance {
    pub base_leave_balance: f64,
    pub in_lieu_balance: f64,
    pub leave_taken: f64,
    pub remaining_balance: f64,
    pub error: Option<String>,
    pub warnings: Vec<String>,
    /// JSON encoded trace of every store call, only when requested.
    pub debug: Option<String>,
}

impl From<LeaveBalanceResult> for GqlLeaveBalance {
    fn from(v: LeaveBalanceResult) -> Self {
        Self {
            base_leave_balance: v.base_leave_balance,
            in_lieu_balance: v.in_lieu_balance,
            leave_taken: v.leave_taken,
            remaining_balance: v.remaining_balance,
            error: v.error,
            warnings: v.warnings.iter().map(ToString::to_string).collect(),
            debug: v.debug.and_then(|debug| serde_json::to_string(&debug).ok()),
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn leave_balance(
        &self,
        context: &Context<'_>,
        employee_id: String,
        year: Option<i32>,
        debug: Option<bool>,
    ) -> GqlResult<GqlLeaveBalance> {
        let state = context.data_unchecked::<AppState>();
        let query = CalculateLeaveBalance {
            employee_id,
            year,
            include_debug: debug.unwrap_or(false),
        };
        Ok(state.balances.handle(query).await.into())
    }
}
