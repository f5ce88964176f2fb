#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateLeaveBalance {
    pub employee_id: String,
    /// Defaults to the current calendar year.
    pub year: Option<i32>,
    pub include_debug: bool,
}

impl CalculateLeaveBalance {
    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            year: None,
            include_debug: false,
        }
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_debug(mut self) -> Self {
        self.include_debug = true;
        self
    }
}
