use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::ServiceError;
use crate::storage::CollectionStore;
use crate::types::Record;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// CRUD over one collection.
///
/// Every call reloads the whole collection from the store; nothing is cached
/// between calls. Mutations hold `write_lock` across load, change and save so
/// writers in this process never lose each other's updates. Other processes
/// writing the same file are not coordinated with.
pub struct RecordService<R: Record> {
    store: Arc<dyn CollectionStore<R>>,
    write_lock: Mutex<()>,
}

impl<R: Record> RecordService<R> {
    pub fn new(store: Arc<dyn CollectionStore<R>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn list(&self) -> ServiceResult<Vec<R>> {
        Ok(self.store.load()?)
    }

    /// Case-insensitive lookup; with duplicate ids the first one wins.
    pub fn get_by_id(&self, id: &str) -> ServiceResult<R> {
        self.store
            .load()?
            .into_iter()
            .find(|r| r.has_id(id))
            .ok_or_else(|| not_found::<R>(id))
    }

    pub fn create(&self, input: R::Input) -> ServiceResult<R> {
        let draft = R::validate(input)?;

        let _guard = self.lock_writes();
        let mut records = self.store.load()?;
        let record = R::create(fresh_id(&records), draft);
        records.push(record.clone());
        self.store.save(&records)?;

        log::info!("Created {} {}", R::KIND, record.id());
        Ok(record)
    }

    /// Full replace: fields missing from `input` fall back to their defaults.
    pub fn update(&self, id: &str, input: R::Input) -> ServiceResult<R> {
        let draft = R::validate(input)?;

        let _guard = self.lock_writes();
        let mut records = self.store.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.has_id(id))
            .ok_or_else(|| not_found::<R>(id))?;
        record.apply(draft);
        let updated = record.clone();
        self.store.save(&records)?;

        log::info!("Updated {} {}", R::KIND, updated.id());
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let _guard = self.lock_writes();
        let mut records = self.store.load()?;
        let pos = records
            .iter()
            .position(|r| r.has_id(id))
            .ok_or_else(|| not_found::<R>(id))?;
        let removed = records.remove(pos);
        self.store.save(&records)?;

        log::info!("Deleted {} {}", R::KIND, removed.id());
        Ok(())
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // the guarded value is (), so a poisoned lock carries no broken state
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_found<R: Record>(id: &str) -> ServiceError {
    ServiceError::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    }
}

fn fresh_id<R: Record>(existing: &[R]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !existing.iter().any(|r| r.has_id(&id)) {
            return id;
        }
    }
}
