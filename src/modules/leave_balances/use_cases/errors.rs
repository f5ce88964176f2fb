use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("balance unavailable: {0}")]
    Balance(String),
}
