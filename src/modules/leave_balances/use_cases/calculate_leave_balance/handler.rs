use crate::modules::leave_balances::core::policy::LeavePolicy;
use crate::modules::leave_balances::core::records::{
    ANNUAL_ALLOCATION_TYPE, Employee, allocated_days, sum_annual_days_taken, sum_in_lieu_days,
};
use crate::modules::leave_balances::use_cases::calculate_leave_balance::outcome::{
    CalculationDebug, CalculationWarning, LeaveBalanceResult,
};
use crate::modules::leave_balances::use_cases::calculate_leave_balance::query::CalculateLeaveBalance;
use crate::shared::core::primitives::{current_year, round2, year_bounds};
use crate::shared::infrastructure::record_store::{
    EMPLOYEES, Filter, IN_LIEU_RECORDS, LEAVE_ALLOCATIONS, LEAVES, RecordStore, RecordStoreError,
    Row,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("User ID is required")]
    MissingEmployeeId,

    #[error(transparent)]
    EmployeeUnavailable(#[from] RecordStoreError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Reconciles employee, allocation, in-lieu and leave rows into a balance, then writes the
/// balance back onto the employee row.
pub struct CalculateLeaveBalanceHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    policy: LeavePolicy,
}

impl<TStore> CalculateLeaveBalanceHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, policy: LeavePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Never fails: every failure is reported through `LeaveBalanceResult::error`.
    pub async fn handle(&self, query: CalculateLeaveBalance) -> LeaveBalanceResult {
        let mut debug = query.include_debug.then(CalculationDebug::default);
        match self.calculate(&query, &mut debug).await {
            Ok(result) => result,
            Err(err) => {
                error!(
                    employee_id = %query.employee_id,
                    error = %err,
                    "leave balance calculation failed"
                );
                LeaveBalanceResult::failed(err.to_string(), debug)
            }
        }
    }

    async fn calculate(
        &self,
        query: &CalculateLeaveBalance,
        debug: &mut Option<CalculationDebug>,
    ) -> Result<LeaveBalanceResult, CalculationError> {
        if query.employee_id.is_empty() {
            return Err(CalculationError::MissingEmployeeId);
        }
        let employee_id = query.employee_id.as_str();
        let year = query.year.unwrap_or_else(current_year);
        let mut warnings = Vec::new();
        info!(employee_id, year, "calculating leave balance");

        let employee_row = self
            .store
            .select_single(EMPLOYEES, &[Filter::eq("id", employee_id)])
            .await;
        trace(debug, "employee", EMPLOYEES, &employee_row);
        let Some(employee) = Employee::from_row(&employee_row?) else {
            return Err(CalculationError::Unexpected(
                "invalid employee record: id is not a string".into(),
            ));
        };

        let allocation = self
            .store
            .select_single(
                LEAVE_ALLOCATIONS,
                &[
                    Filter::eq("employee_id", employee_id),
                    Filter::eq("year", year),
                    Filter::eq("type", ANNUAL_ALLOCATION_TYPE),
                ],
            )
            .await;
        trace(debug, "allocation", LEAVE_ALLOCATIONS, &allocation);
        let base_leave_balance = match allocation {
            Ok(row) => allocated_days(&row),
            Err(RecordStoreError::NotFound { .. }) => None,
            Err(err) => {
                warn!(employee_id, year, error = %err, "allocation lookup failed, using policy");
                warnings.push(CalculationWarning::AllocationUnavailable(err.to_string()));
                None
            }
        }
        .unwrap_or_else(|| {
            let days = self.policy.base_days_for(employee.years_of_service);
            info!(
                employee_id,
                year,
                years_of_service = employee.years_of_service,
                days,
                "no allocation set, using policy entitlement"
            );
            days
        });

        let in_lieu = self
            .store
            .select(IN_LIEU_RECORDS, &[Filter::eq("employee_id", employee_id)])
            .await;
        trace(debug, "in_lieu", IN_LIEU_RECORDS, &in_lieu);
        let in_lieu_balance = match in_lieu {
            Ok(rows) => sum_in_lieu_days(&rows),
            Err(err) => {
                error!(employee_id, error = %err, "in-lieu lookup failed");
                warnings.push(CalculationWarning::InLieuUnavailable(err.to_string()));
                0.0
            }
        };

        let (year_start, year_end) = year_bounds(year);
        let leaves = self
            .store
            .select(
                LEAVES,
                &[
                    Filter::eq("employee_id", employee_id),
                    Filter::gte("start_date", year_start),
                    Filter::lte("start_date", year_end),
                ],
            )
            .await;
        trace(debug, "leaves_taken", LEAVES, &leaves);
        let leave_taken = match leaves {
            Ok(rows) => sum_annual_days_taken(&rows),
            Err(err) => {
                error!(employee_id, year, error = %err, "leave lookup failed");
                warnings.push(CalculationWarning::LeaveTakenUnavailable(err.to_string()));
                0.0
            }
        };

        let remaining_balance = round2(base_leave_balance + in_lieu_balance - leave_taken);
        info!(
            employee_id,
            year,
            base_leave_balance,
            in_lieu_balance,
            leave_taken,
            remaining_balance,
            "leave balance calculated"
        );

        // annual_leave_balance holds the in-lieu balance, leave_balance the remaining total.
        let mut changes = Row::new();
        changes.insert("annual_leave_balance".into(), Value::from(in_lieu_balance));
        changes.insert("leave_balance".into(), Value::from(remaining_balance));
        let write_back = self
            .store
            .update(EMPLOYEES, &[Filter::eq("id", employee_id)], changes)
            .await;
        trace(debug, "write_back", EMPLOYEES, &write_back);
        if let Err(err) = write_back {
            error!(employee_id, error = %err, "employee balance write-back failed");
            warnings.push(CalculationWarning::WriteBackFailed(err.to_string()));
        }

        Ok(LeaveBalanceResult {
            base_leave_balance,
            in_lieu_balance,
            leave_taken,
            remaining_balance,
            error: None,
            warnings,
            debug: debug.take(),
        })
    }
}

fn trace<T: serde::Serialize>(
    debug: &mut Option<CalculationDebug>,
    step: &str,
    table: &str,
    outcome: &Result<T, RecordStoreError>,
) {
    if let Some(debug) = debug.as_mut() {
        debug.record(step, table, outcome);
    }
}
