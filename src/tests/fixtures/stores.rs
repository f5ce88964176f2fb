// Pre-seeded in memory stores.

use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shared::infrastructure::record_store::{EMPLOYEES, IN_LIEU_RECORDS, LEAVES};
use crate::tests::fixtures::rows::{employee_row, in_lieu_row, leave_row};
use serde_json::json;

pub const EMPLOYEE_ID: &str = "emp-fixed-0001";
pub const YEAR: i32 = 2024;

/// A junior employee with 5 in-lieu days and 5 annual days taken in 2024.
pub async fn seeded_store() -> InMemoryRecordStore {
    let store = InMemoryRecordStore::new();
    seed_employee(&store, 9).await;
    store
        .seed(
            IN_LIEU_RECORDS,
            vec![
                in_lieu_row(EMPLOYEE_ID, json!({ "days_added": 2 })),
                in_lieu_row(EMPLOYEE_ID, json!({ "leave_days_added": 3 })),
                in_lieu_row(EMPLOYEE_ID, json!({})),
            ],
        )
        .await;
    store
        .seed(
            LEAVES,
            vec![
                leave_row(EMPLOYEE_ID, "2024-03-01", 5.0, Some("Annual")),
                leave_row(EMPLOYEE_ID, "2024-06-01", 3.0, Some("Sick")),
                leave_row(EMPLOYEE_ID, "2023-12-01", 10.0, Some("Annual")),
            ],
        )
        .await;
    store
}

pub async fn seed_employee(store: &InMemoryRecordStore, years_of_service: i64) {
    store
        .seed(EMPLOYEES, vec![employee_row(EMPLOYEE_ID, years_of_service)])
        .await;
}
