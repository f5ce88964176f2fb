use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::leave_balances::use_cases::calculate_leave_balance::inbound::graphql::GqlLeaveBalance;
use crate::modules::leave_balances::use_cases::cancel_leave::command::CancelLeave;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelLeaveMutation;

#[Object]
impl CancelLeaveMutation {
    async fn cancel_leave(
        &self,
        context: &Context<'_>,
        leave_id: String,
        employee_id: String,
    ) -> GqlResult<GqlLeaveBalance> {
        let state = context.data_unchecked::<AppState>();
        let balance = state
            .cancel_leave_handler
            .handle(CancelLeave {
                leave_id,
                employee_id,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(balance.into())
    }
}
