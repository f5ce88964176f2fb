// Record store port.
//
// Purpose
// - Describe the generic table/filter data access the leave use cases need, without
//   binding them to a database client.
//
// Boundaries
// - Rows are plain JSON objects so optional and legacy columns pass through untouched.
// - Adapters implement the trait. The in memory adapter backs tests and local runs.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use thiserror::Error;

pub type Row = Map<String, Value>;

pub const EMPLOYEES: &str = "employees";
pub const LEAVE_ALLOCATIONS: &str = "leave_allocations";
pub const IN_LIEU_RECORDS: &str = "in_lieu_records";
pub const LEAVES: &str = "leaves";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordStoreError {
    #[error("no rows returned from {table}")]
    NotFound { table: String },

    #[error("expected a single row from {table}, got {count}")]
    MultipleRows { table: String, count: usize },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, Value),
    Gte(String, Value),
    Lte(String, Value),
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq(column.into(), value.into())
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Gte(column.into(), value.into())
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Lte(column.into(), value.into())
    }

    /// A missing column never matches, whatever the predicate.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Filter::Eq(column, expected) => row
                .get(column)
                .is_some_and(|actual| compare(actual, expected) == Some(Ordering::Equal)),
            Filter::Gte(column, bound) => row.get(column).is_some_and(|actual| {
                matches!(
                    compare(actual, bound),
                    Some(Ordering::Greater | Ordering::Equal)
                )
            }),
            Filter::Lte(column, bound) => row.get(column).is_some_and(|actual| {
                matches!(
                    compare(actual, bound),
                    Some(Ordering::Less | Ordering::Equal)
                )
            }),
        }
    }
}

fn compare(actual: &Value, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.as_str().cmp(b.as_str())),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

pub fn matches_all(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(row))
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>, RecordStoreError>;

    /// Fails with `NotFound` on zero rows and `MultipleRows` on more than one.
    async fn select_single(&self, table: &str, filters: &[Filter]) -> Result<Row, RecordStoreError>;

    async fn insert(&self, table: &str, row: Row) -> Result<Row, RecordStoreError>;

    /// Merges `changes` into every matching row and returns how many rows matched.
    async fn update(
        &self,
        table: &str,
        filters: &[Filter],
        changes: Row,
    ) -> Result<usize, RecordStoreError>;

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<usize, RecordStoreError>;
}

pub mod in_memory;
