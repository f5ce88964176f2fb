// In memory implementation of the RecordStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep rows per table in insertion order.
// - Simulate an offline backend, or a single failing table, for failure path tests.
// - Record every call so tests can assert which tables were touched.

use crate::shared::infrastructure::record_store::{
    Filter, RecordStore, RecordStoreError, Row, matches_all,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCall {
    pub operation: &'static str,
    pub table: String,
}

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
    calls: Mutex<Vec<StoreCall>>,
    failing_tables: HashSet<String>,
    failing_writes: HashSet<String>,
    is_offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `{ "<table>": [ {row}, ... ], ... }`.
    pub fn from_json(seed: Value) -> Result<Self, RecordStoreError> {
        let Value::Object(tables) = seed else {
            return Err(RecordStoreError::Backend("seed must be an object of tables".into()));
        };
        let mut loaded = HashMap::new();
        for (table, rows) in tables {
            let Value::Array(rows) = rows else {
                return Err(RecordStoreError::Backend(format!(
                    "seed table {table} must be an array"
                )));
            };
            let rows = rows
                .into_iter()
                .map(|row| match row {
                    Value::Object(row) => Ok(row),
                    _ => Err(RecordStoreError::Backend(format!(
                        "seed rows of {table} must be objects"
                    ))),
                })
                .collect::<Result<Vec<Row>, _>>()?;
            loaded.insert(table, rows);
        }
        Ok(Self {
            tables: RwLock::new(loaded),
            ..Self::default()
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Every operation on `table` fails with a backend error.
    pub fn fail_table(&mut self, table: &str) {
        self.failing_tables.insert(table.to_string());
    }

    /// Reads on `table` keep working; inserts, updates and deletes fail.
    pub fn fail_writes_to(&mut self, table: &str) {
        self.failing_writes.insert(table.to_string());
    }

    pub async fn seed(&self, table: &str, rows: Vec<Row>) {
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    pub async fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .read()
            .await
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().await.clone()
    }

    async fn guard(
        &self,
        operation: &'static str,
        table: &str,
        is_write: bool,
    ) -> Result<(), RecordStoreError> {
        self.calls.lock().await.push(StoreCall {
            operation,
            table: table.to_string(),
        });
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        if self.failing_tables.contains(table)
            || (is_write && self.failing_writes.contains(table))
        {
            return Err(RecordStoreError::Backend(format!("{operation} on {table} failed")));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn select(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>, RecordStoreError> {
        self.guard("select", table, false).await?;
        let guard = self.tables.read().await;
        Ok(guard
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_all(row, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn select_single(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> Result<Row, RecordStoreError> {
        self.guard("select_single", table, false).await?;
        let guard = self.tables.read().await;
        let mut matching: Vec<&Row> = guard
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_all(row, filters))
                    .collect()
            })
            .unwrap_or_default();
        match matching.len() {
            0 => Err(RecordStoreError::NotFound {
                table: table.to_string(),
            }),
            1 => Ok(matching.remove(0).clone()),
            count => Err(RecordStoreError::MultipleRows {
                table: table.to_string(),
                count,
            }),
        }
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, RecordStoreError> {
        self.guard("insert", table, true).await?;
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        changes: Row,
    ) -> Result<usize, RecordStoreError> {
        self.guard("update", table, true).await?;
        let mut guard = self.tables.write().await;
        let Some(rows) = guard.get_mut(table) else {
            return Ok(0);
        };
        let mut updated = 0;
        for row in rows.iter_mut().filter(|row| matches_all(row, filters)) {
            for (column, value) in &changes {
                row.insert(column.clone(), value.clone());
            }
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<usize, RecordStoreError> {
        self.guard("delete", table, true).await?;
        let mut guard = self.tables.write().await;
        let Some(rows) = guard.get_mut(table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !matches_all(row, filters));
        Ok(before - rows.len())
    }
}
