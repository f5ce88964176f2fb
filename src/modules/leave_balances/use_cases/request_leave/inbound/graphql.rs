use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::leave_balances::core::records::ANNUAL_LEAVE_TYPE;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::inbound::graphql::GqlLeaveBalance;
use crate::modules::leave_balances::use_cases::request_leave::command::RequestLeave;
use crate::shared::core::primitives::parse_date;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RequestLeaveMutation;

#[Object]
impl RequestLeaveMutation {
    async fn request_leave(
        &self,
        context: &Context<'_>,
        employee_id: String,
        start_date: String,
        end_date: String,
        days_taken: f64,
        leave_type: Option<String>,
        reason: Option<String>,
    ) -> GqlResult<GqlLeaveBalance> {
        let state = context.data_unchecked::<AppState>();
        let start_date = parse_date(&start_date)
            .ok_or_else(|| async_graphql::Error::new("start_date must be YYYY-MM-DD"))?;
        let end_date = parse_date(&end_date)
            .ok_or_else(|| async_graphql::Error::new("end_date must be YYYY-MM-DD"))?;

        let command = RequestLeave {
            leave_id: Uuid::now_v7().to_string(),
            employee_id,
            start_date,
            end_date,
            days_taken,
            leave_type: leave_type.unwrap_or_else(|| ANNUAL_LEAVE_TYPE.to_string()),
            reason,
            created_at: Utc::now().timestamp_millis(),
        };

        let balance = state
            .request_leave_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(balance.into())
    }
}
