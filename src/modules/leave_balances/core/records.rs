// Interpreters for the rows the leave calculation reads.
//
// The store hands back loose JSON rows. Everything here decides how a row contributes to a
// balance; nothing here talks to the store.

use crate::shared::infrastructure::record_store::Row;
use serde_json::Value;

pub const ANNUAL_ALLOCATION_TYPE: &str = "annual";
pub const ANNUAL_LEAVE_TYPE: &str = "Annual";

/// The employee columns the calculation reads. The balance columns are only ever written.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    /// A non-numeric, null or absent value reads as 0.
    pub years_of_service: f64,
}

impl Employee {
    /// `None` when the row has no string `id`.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = row.get("id")?.as_str()?.to_string();
        let years_of_service = row
            .get("years_of_service")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        Some(Self {
            id,
            years_of_service,
        })
    }
}

/// `allocated_days` when it is a non-zero number. Anything else means "fall back to policy".
pub fn allocated_days(row: &Row) -> Option<f64> {
    row.get("allocated_days")
        .and_then(Value::as_f64)
        .filter(|days| *days != 0.0 && !days.is_nan())
}

/// Days credited by an in-lieu record.
///
/// Legacy field fallback: older rows carry the credit as `leave_days_added`, newer rows as
/// `days_added`. The first of the two holding a number wins.
// TODO: read only `days_added` once in_lieu_records has been backfilled.
pub fn in_lieu_days(row: &Row) -> f64 {
    ["days_added", "leave_days_added"]
        .iter()
        .find_map(|field| row.get(*field).and_then(Value::as_f64))
        .unwrap_or(0.0)
}

/// Rows without a `leave_type` column count; otherwise only exact "Annual" does.
pub fn counts_against_annual(row: &Row) -> bool {
    match row.get("leave_type") {
        None => true,
        Some(leave_type) => leave_type.as_str() == Some(ANNUAL_LEAVE_TYPE),
    }
}

pub fn days_taken(row: &Row) -> f64 {
    row.get("days_taken").and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn sum_in_lieu_days(rows: &[Row]) -> f64 {
    rows.iter().map(in_lieu_days).sum()
}

pub fn sum_annual_days_taken(rows: &[Row]) -> f64 {
    rows.iter()
        .filter(|row| counts_against_annual(row))
        .map(days_taken)
        .sum()
}
