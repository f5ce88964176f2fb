use crate::modules::leave_balances::core::records::ANNUAL_ALLOCATION_TYPE;
use crate::shared::infrastructure::record_store::{Filter, Row};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct SetLeaveAllocation {
    pub employee_id: String,
    pub year: i32,
    pub allocated_days: f64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("employee id is required")]
    MissingEmployeeId,

    #[error("allocated days must be a non-negative number")]
    InvalidDays,
}

impl SetLeaveAllocation {
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.employee_id.is_empty() {
            return Err(AllocationError::MissingEmployeeId);
        }
        if !self.allocated_days.is_finite() || self.allocated_days < 0.0 {
            return Err(AllocationError::InvalidDays);
        }
        Ok(())
    }

    /// Filters identifying the one annual allocation row for this employee and year.
    pub fn key(&self) -> [Filter; 3] {
        [
            Filter::eq("employee_id", self.employee_id.as_str()),
            Filter::eq("year", self.year),
            Filter::eq("type", ANNUAL_ALLOCATION_TYPE),
        ]
    }

    pub fn changes(&self) -> Row {
        let mut row = Row::new();
        row.insert("allocated_days".into(), Value::from(self.allocated_days));
        row
    }

    pub fn to_row(&self) -> Row {
        let mut row = self.changes();
        row.insert("employee_id".into(), Value::from(self.employee_id.as_str()));
        row.insert("year".into(), Value::from(self.year));
        row.insert("type".into(), Value::from(ANNUAL_ALLOCATION_TYPE));
        row
    }
}
