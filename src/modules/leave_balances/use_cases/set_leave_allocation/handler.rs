use crate::modules::leave_balances::use_cases::calculate_leave_balance::handler::CalculateLeaveBalanceHandler;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::outcome::LeaveBalanceResult;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::modules::leave_balances::use_cases::set_leave_allocation::command::SetLeaveAllocation;
use crate::shared::infrastructure::record_store::{
    EMPLOYEES, Filter, LEAVE_ALLOCATIONS, RecordStore, RecordStoreError,
};
use std::sync::Arc;
use tracing::info;

pub struct SetLeaveAllocationHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    balances: Arc<CalculateLeaveBalanceHandler<TStore>>,
}

impl<TStore> SetLeaveAllocationHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, balances: Arc<CalculateLeaveBalanceHandler<TStore>>) -> Self {
        Self { store, balances }
    }

    /// Upserts the annual allocation and returns the recalculated balance for that year.
    pub async fn handle(
        &self,
        command: SetLeaveAllocation,
    ) -> Result<LeaveBalanceResult, ApplicationError> {
        command
            .validate()
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;

        match self
            .store
            .select_single(EMPLOYEES, &[Filter::eq("id", command.employee_id.as_str())])
            .await
        {
            Ok(_) => {}
            Err(RecordStoreError::NotFound { .. }) => {
                return Err(ApplicationError::NotFound(format!("employee {}", command.employee_id)));
            }
            Err(err) => return Err(err.into()),
        }

        let updated = self
            .store
            .update(LEAVE_ALLOCATIONS, &command.key(), command.changes())
            .await?;
        if updated == 0 {
            self.store
                .insert(LEAVE_ALLOCATIONS, command.to_row())
                .await?;
        }
        info!(
            employee_id = %command.employee_id,
            year = command.year,
            allocated_days = command.allocated_days,
            "leave allocation set"
        );

        Ok(self
            .balances
            .handle(CalculateLeaveBalance::for_employee(command.employee_id).in_year(command.year))
            .await)
    }
}
