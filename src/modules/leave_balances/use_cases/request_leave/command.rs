use crate::shared::core::primitives::format_date;
use crate::shared::infrastructure::record_store::Row;
use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct RequestLeave {
    pub leave_id: String,
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_taken: f64,
    pub leave_type: String,
    pub reason: Option<String>,
    pub created_at: i64,
}

impl RequestLeave {
    pub fn into_row(self) -> Row {
        let mut row = Row::new();
        row.insert("id".into(), Value::from(self.leave_id));
        row.insert("employee_id".into(), Value::from(self.employee_id));
        row.insert(
            "start_date".into(),
            Value::from(format_date(self.start_date)),
        );
        row.insert("end_date".into(), Value::from(format_date(self.end_date)));
        row.insert("days_taken".into(), Value::from(self.days_taken));
        row.insert("leave_type".into(), Value::from(self.leave_type));
        row.insert(
            "reason".into(),
            self.reason.map_or(Value::Null, Value::from),
        );
        row.insert("created_at".into(), Value::from(self.created_at));
        row
    }
}
