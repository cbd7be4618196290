use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read collection {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed collection {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write collection {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Whole-collection persistence for one record kind.
///
/// `load` must distinguish a missing or empty collection (`Ok(vec![])`) from
/// a collection that could not be read (`Err`).
pub trait CollectionStore<R>: Send + Sync {
    fn load(&self) -> Result<Vec<R>, StorageError>;
    fn save(&self, records: &[R]) -> Result<(), StorageError>;
}
