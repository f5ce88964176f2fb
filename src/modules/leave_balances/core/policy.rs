use serde::{Deserialize, Serialize};

/// Fallback annual entitlement, used when no allocation was set for the year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeavePolicy {
    pub base_days_junior: f64,
    pub base_days_senior: f64,
    pub seniority_threshold_years: i64,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            base_days_junior: 18.67,
            base_days_senior: 24.67,
            seniority_threshold_years: 10,
        }
    }
}

impl LeavePolicy {
    pub fn base_days_for(&self, years_of_service: f64) -> f64 {
        if years_of_service >= self.seniority_threshold_years as f64 {
            self.base_days_senior
        } else {
            self.base_days_junior
        }
    }
}
