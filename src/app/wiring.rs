use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::configuration::Configuration;
use crate::rest::AppState;
use crate::service::RecordService;
use crate::storage::{CollectionStore, JsonFileStore};
use crate::types::Record;

pub fn init_data_dir(config: &Configuration) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))
}

pub fn build_state(config: &Configuration) -> AppState {
    AppState::new(
        build_service(&config.topics_path),
        build_service(&config.skills_path),
    )
}

fn build_service<R: Record>(path: &Path) -> RecordService<R> {
    let store: Arc<dyn CollectionStore<R>> = Arc::new(JsonFileStore::<R>::new(path));
    RecordService::new(store)
}
