use crate::shared::infrastructure::record_store::Row;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DecideError {
    #[error("end date must not be before start date")]
    InvalidInterval,

    #[error("days taken must be positive and fit within the requested dates")]
    InvalidDays,

    #[error("insufficient annual leave: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },
}

pub enum Decision {
    Accepted { row: Row },
    Rejected { reason: DecideError },
}
