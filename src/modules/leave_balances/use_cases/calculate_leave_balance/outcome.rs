use crate::shared::infrastructure::record_store::RecordStoreError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A lookup or write that failed without failing the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum CalculationWarning {
    #[error("allocation lookup failed: {0}")]
    AllocationUnavailable(String),

    #[error("in-lieu lookup failed: {0}")]
    InLieuUnavailable(String),

    #[error("leave lookup failed: {0}")]
    LeaveTakenUnavailable(String),

    #[error("employee balance write-back failed: {0}")]
    WriteBackFailed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryTrace {
    pub data: Value,
    pub error: Option<String>,
}

/// Raw inputs and outputs of every store call, for diagnostic tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculationDebug {
    pub queries: Vec<String>,
    pub results: BTreeMap<String, QueryTrace>,
}

impl CalculationDebug {
    pub fn record<T: Serialize>(
        &mut self,
        step: &str,
        table: &str,
        outcome: &Result<T, RecordStoreError>,
    ) {
        self.queries.push(table.to_string());
        let trace = match outcome {
            Ok(data) => QueryTrace {
                data: serde_json::to_value(data).unwrap_or(Value::Null),
                error: None,
            },
            Err(error) => QueryTrace {
                data: Value::Null,
                error: Some(error.to_string()),
            },
        };
        self.results.insert(step.to_string(), trace);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalanceResult {
    pub base_leave_balance: f64,
    pub in_lieu_balance: f64,
    pub leave_taken: f64,
    pub remaining_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CalculationWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<CalculationDebug>,
}

impl LeaveBalanceResult {
    /// All-zero result carrying `error`. Callers must check `error` before trusting the numbers.
    pub fn failed(error: impl Into<String>, debug: Option<CalculationDebug>) -> Self {
        Self {
            base_leave_balance: 0.0,
            in_lieu_balance: 0.0,
            leave_taken: 0.0,
            remaining_balance: 0.0,
            error: Some(error.into()),
            warnings: Vec::new(),
            debug,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod leave_balance_result_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_build_a_zeroed_failure() {
        let result = LeaveBalanceResult::failed("User ID is required", None);
        assert_eq!(result.remaining_balance, 0.0);
        assert_eq!(result.error.as_deref(), Some("User ID is required"));
        assert!(!result.is_ok());
        assert!(!result.is_degraded());
    }

    #[rstest]
    fn it_should_serialize_in_camel_case_without_empty_extras() {
        let result = LeaveBalanceResult {
            base_leave_balance: 18.67,
            in_lieu_balance: 5.0,
            leave_taken: 5.0,
            remaining_balance: 18.67,
            error: None,
            warnings: vec![CalculationWarning::InLieuUnavailable("offline".into())],
            debug: None,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "baseLeaveBalance": 18.67,
                "inLieuBalance": 5.0,
                "leaveTaken": 5.0,
                "remainingBalance": 18.67,
                "warnings": [{ "kind": "in_lieu_unavailable", "message": "offline" }],
            })
        );
    }

    #[rstest]
    fn it_should_trace_successful_and_failed_calls() {
        let mut debug = CalculationDebug::default();
        debug.record(
            "in_lieu",
            "in_lieu_records",
            &Ok::<_, RecordStoreError>(vec![1, 2]),
        );
        debug.record::<()>(
            "leaves_taken",
            "leaves",
            &Err(RecordStoreError::Backend("boom".into())),
        );
        assert_eq!(debug.queries, vec!["in_lieu_records", "leaves"]);
        assert_eq!(debug.results["in_lieu"].data, json!([1, 2]));
        assert_eq!(
            debug.results["leaves_taken"].error.as_deref(),
            Some("backend error: boom")
        );
    }
}
