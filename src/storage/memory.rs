use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{CollectionStore, StorageError};

/// In-memory collection for tests. Clones share the same records.
#[derive(Clone, Debug)]
pub struct MemoryStore<R> {
    records: Arc<RwLock<Vec<R>>>,
    saves: Arc<AtomicUsize>,
    broken: bool,
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            saves: Arc::new(AtomicUsize::new(0)),
            broken: false,
        }
    }
}

impl<R: Clone> MemoryStore<R> {
    pub fn with_records(records: Vec<R>) -> Self {
        let store = Self::default();
        *store.records.write().unwrap() = records;
        store
    }

    /// A store whose every load and save fails.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.records.read().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn failure() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "memory store is broken")
    }
}

impl<R: Clone + Send + Sync> CollectionStore<R> for MemoryStore<R> {
    fn load(&self) -> Result<Vec<R>, StorageError> {
        if self.broken {
            return Err(StorageError::Read {
                path: PathBuf::from("memory"),
                source: Self::failure(),
            });
        }
        Ok(self.snapshot())
    }

    fn save(&self, records: &[R]) -> Result<(), StorageError> {
        if self.broken {
            return Err(StorageError::Write {
                path: PathBuf::from("memory"),
                source: Self::failure(),
            });
        }
        *self.records.write().unwrap() = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
