use crate::modules::leave_balances::use_cases::calculate_leave_balance::handler::CalculateLeaveBalanceHandler;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::outcome::LeaveBalanceResult;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::modules::leave_balances::use_cases::cancel_leave::command::CancelLeave;
use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{current_year, parse_date};
use crate::shared::infrastructure::record_store::{Filter, LEAVES, RecordStore, RecordStoreError};
use chrono::Datelike;
use std::sync::Arc;
use tracing::info;

pub struct CancelLeaveHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    balances: Arc<CalculateLeaveBalanceHandler<TStore>>,
}

impl<TStore> CancelLeaveHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, balances: Arc<CalculateLeaveBalanceHandler<TStore>>) -> Self {
        Self { store, balances }
    }

    /// Removes the leave and returns the recalculated balance for the year it started in.
    pub async fn handle(
        &self,
        command: CancelLeave,
    ) -> Result<LeaveBalanceResult, ApplicationError> {
        let filters = [
            Filter::eq("id", command.leave_id.as_str()),
            Filter::eq("employee_id", command.employee_id.as_str()),
        ];

        let leave = match self.store.select_single(LEAVES, &filters).await {
            Ok(leave) => leave,
            Err(RecordStoreError::NotFound { .. }) => {
                return Err(ApplicationError::NotFound(format!("leave {}", command.leave_id)));
            }
            Err(err) => return Err(err.into()),
        };
        let year = leave
            .get("start_date")
            .and_then(|value| value.as_str())
            .and_then(parse_date)
            .map_or_else(current_year, |date| date.year());

        self.store.delete(LEAVES, &filters).await?;
        info!(leave_id = %command.leave_id, employee_id = %command.employee_id, "leave cancelled");

        Ok(self
            .balances
            .handle(CalculateLeaveBalance::for_employee(command.employee_id).in_year(year))
            .await)
    }
}
