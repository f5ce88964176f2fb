use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::leave_balances::use_cases::calculate_leave_balance::inbound::graphql::GqlLeaveBalance;
use crate::modules::leave_balances::use_cases::set_leave_allocation::command::SetLeaveAllocation;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SetLeaveAllocationMutation;

#[Object]
impl SetLeaveAllocationMutation {
    async fn set_leave_allocation(
        &self,
        context: &Context<'_>,
        employee_id: String,
        year: i32,
        allocated_days: f64,
    ) -> GqlResult<GqlLeaveBalance> {
        let state = context.data_unchecked::<AppState>();
        let balance = state
            .set_leave_allocation_handler
            .handle(SetLeaveAllocation {
                employee_id,
                year,
                allocated_days,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(balance.into())
    }
}
