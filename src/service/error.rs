use thiserror::Error;

use crate::storage::StorageError;
use crate::types::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
