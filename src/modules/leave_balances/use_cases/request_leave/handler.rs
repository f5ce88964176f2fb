use crate::modules::leave_balances::use_cases::calculate_leave_balance::handler::CalculateLeaveBalanceHandler;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::outcome::LeaveBalanceResult;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::modules::leave_balances::use_cases::errors::ApplicationError;
use crate::modules::leave_balances::use_cases::request_leave::command::RequestLeave;
use crate::modules::leave_balances::use_cases::request_leave::decide::decide_request_leave;
use crate::modules::leave_balances::use_cases::request_leave::decision::Decision;
use crate::shared::infrastructure::record_store::{LEAVES, RecordStore};
use chrono::Datelike;
use std::sync::Arc;
use tracing::info;

pub struct RequestLeaveHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    balances: Arc<CalculateLeaveBalanceHandler<TStore>>,
}

impl<TStore> RequestLeaveHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, balances: Arc<CalculateLeaveBalanceHandler<TStore>>) -> Self {
        Self { store, balances }
    }

    /// Records the leave and returns the recalculated balance for the year it starts in.
    pub async fn handle(
        &self,
        command: RequestLeave,
    ) -> Result<LeaveBalanceResult, ApplicationError> {
        let query = CalculateLeaveBalance::for_employee(command.employee_id.clone())
            .in_year(command.start_date.year());

        let current = self.balances.handle(query.clone()).await;
        if let Some(error) = current.error {
            return Err(ApplicationError::Balance(error));
        }

        match decide_request_leave(command, current.remaining_balance) {
            Decision::Accepted { row } => {
                let inserted = self.store.insert(LEAVES, row).await?;
                info!(
                    leave_id = ?inserted.get("id"),
                    employee_id = %query.employee_id,
                    "leave requested"
                );
                Ok(self.balances.handle(query).await)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
