mod file;
#[cfg(test)]
pub mod memory;
pub mod traits;

pub use file::JsonFileStore;
pub use traits::{CollectionStore, StorageError};
