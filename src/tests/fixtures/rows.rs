// Row builders shared by the leave balance tests.

use crate::shared::infrastructure::record_store::Row;
use serde_json::{Value, json};

pub fn row(value: Value) -> Row {
    match value {
        Value::Object(row) => row,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn employee_row(id: &str, years_of_service: i64) -> Row {
    row(json!({
        "id": id,
        "years_of_service": years_of_service,
        "leave_balance": 0,
        "annual_leave_balance": 0,
    }))
}

pub fn allocation_row(employee_id: &str, year: i32, allocated_days: f64) -> Row {
    row(json!({
        "employee_id": employee_id,
        "year": year,
        "type": "annual",
        "allocated_days": allocated_days,
    }))
}

/// `fields` carries the credited days under whichever legacy name the test needs.
pub fn in_lieu_row(employee_id: &str, fields: Value) -> Row {
    let mut in_lieu = row(fields);
    in_lieu.insert("employee_id".into(), json!(employee_id));
    in_lieu
}

pub fn leave_row(
    employee_id: &str,
    start_date: &str,
    days_taken: f64,
    leave_type: Option<&str>,
) -> Row {
    let mut leave = row(json!({
        "id": format!("leave-{employee_id}-{start_date}"),
        "employee_id": employee_id,
        "start_date": start_date,
        "end_date": start_date,
        "days_taken": days_taken,
    }));
    if let Some(leave_type) = leave_type {
        leave.insert("leave_type".into(), json!(leave_type));
    }
    leave
}
