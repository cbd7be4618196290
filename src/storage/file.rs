use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;

use super::{CollectionStore, StorageError};

const INDENT: &[u8] = b"    ";

/// A collection persisted as one pretty-printed JSON array file.
///
/// The store takes no file locks. It assumes a single writing process: two
/// processes saving the same path race and the last writer wins, and a read
/// that overlaps a write can observe a truncated file, which `load` reports
/// as [`StorageError::Malformed`].
#[derive(Debug)]
pub struct JsonFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileStore<R> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }
}

impl<R> CollectionStore<R> for JsonFileStore<R>
where
    R: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<R>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                log::error!("Failed to read {}: {}", self.path.display(), source);
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| {
            log::error!(
                "Malformed JSON in {}: {}. Check the file syntax.",
                self.path.display(),
                source
            );
            StorageError::Malformed {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn save(&self, records: &[R]) -> Result<(), StorageError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut ser).map_err(|e| {
            log::error!("Failed to serialize {}: {}", self.path.display(), e);
            StorageError::Serialize(e)
        })?;

        if let Some(d) = self.path.parent() {
            if !d.as_os_str().is_empty() {
                fs::create_dir_all(d).map_err(|source| self.write_error(source))?;
            }
        }
        fs::write(&self.path, &buf).map_err(|source| self.write_error(source))
    }
}

impl<R> JsonFileStore<R> {
    fn write_error(&self, source: io::Error) -> StorageError {
        log::error!("Failed to write {}: {}", self.path.display(), source);
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        label: String,
    }

    fn entry(id: &str, label: &str) -> Entry {
        Entry {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn load_returns_empty_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_treats_blank_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"id\": \"a\",").unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn load_reports_wrong_shape_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, "{\"id\": \"a\"}").unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(&path);
        assert!(matches!(
            store.load().unwrap_err(),
            StorageError::Malformed { .. }
        ));
    }

    #[test]
    fn load_reports_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        let store: JsonFileStore<Entry> = JsonFileStore::new(dir.path());
        assert!(matches!(store.load().unwrap_err(), StorageError::Read { .. }));
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(dir.path().join("entries.json"));
        let records = vec![entry("b", "second"), entry("a", "first"), entry("c", "third")];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_creates_parent_dirs_and_indents_four_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("entries.json");
        let store: JsonFileStore<Entry> = JsonFileStore::new(&path);
        store.save(&[entry("x", "only")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n    {\n        \"id\": \"x\",\n        \"label\": \"only\"\n    }\n]"
        );
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(dir.path().join("entries.json"));
        store.save(&[entry("a", "1"), entry("b", "2")]).unwrap();
        store.save(&[entry("c", "3")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![entry("c", "3")]);
    }

    #[test]
    fn save_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let store: JsonFileStore<Entry> = JsonFileStore::new(blocker.join("entries.json"));
        let err = store.save(&[entry("a", "1")]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
