// Shared test fixture for the RequestLeave command.

use crate::modules::leave_balances::use_cases::request_leave::command::RequestLeave;
use crate::tests::fixtures::stores::EMPLOYEE_ID;
use chrono::NaiveDate;

pub struct RequestLeaveBuilder {
    inner: RequestLeave,
}

impl Default for RequestLeaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RequestLeaveBuilder {
    /// Three annual days, 4 to 6 March 2024.
    pub fn new() -> Self {
        Self {
            inner: RequestLeave {
                leave_id: "leave-fixed-0001".to_string(),
                employee_id: EMPLOYEE_ID.to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                days_taken: 3.0,
                leave_type: "Annual".to_string(),
                reason: Some("Family trip".to_string()),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn leave_id(mut self, v: impl Into<String>) -> Self {
        self.inner.leave_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn start_date(mut self, v: NaiveDate) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: NaiveDate) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn days_taken(mut self, v: f64) -> Self {
        self.inner.days_taken = v;
        self
    }

    pub fn leave_type(mut self, v: impl Into<String>) -> Self {
        self.inner.leave_type = v.into();
        self
    }

    pub fn reason(mut self, v: Option<String>) -> Self {
        self.inner.reason = v;
        self
    }

    pub fn build(self) -> RequestLeave {
        self.inner
    }
}

#[cfg(test)]
mod request_leave_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(
            RequestLeaveBuilder::default().build(),
            RequestLeaveBuilder::new().build()
        );
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = RequestLeaveBuilder::new()
            .leave_id("leave-123")
            .employee_id("emp-456")
            .days_taken(1.0)
            .leave_type("Sick")
            .reason(None)
            .build();
        assert_eq!(custom.leave_id, "leave-123");
        assert_eq!(custom.employee_id, "emp-456");
        assert_eq!(custom.days_taken, 1.0);
        assert_eq!(custom.leave_type, "Sick");
        assert_eq!(custom.reason, None);
    }
}
