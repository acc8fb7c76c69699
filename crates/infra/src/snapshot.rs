//! Wholesale JSON snapshot of the stock mapping.
//!
//! The persisted format is a single JSON object: top-level keys are item
//! names, values are integer quantities. No schema version, no metadata.
//! Loading replaces the mapping wholesale; saving serializes it
//! pretty-printed. File handles are scoped to each call.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use stockroom_core::Level;
use stockroom_inventory::{InventoryStore, StockMap};

/// Default snapshot location.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Snapshot persistence error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file exists but does not parse as an object of item → integer.
    #[error("malformed snapshot at {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    /// Reading or writing the file failed.
    #[error("snapshot io failure at {path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
}

impl SnapshotError {
    fn malformed(path: &Path, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.display().to_string(),
            source,
        }
    }

    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Replace the store's mapping with the snapshot at `path`.
///
/// A missing file is a normal cold start: the mapping is reset to empty and
/// an info diagnostic is emitted. A malformed file emits an error diagnostic
/// and leaves the prior mapping in place.
pub fn load(store: &mut InventoryStore, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            store.replace(StockMap::new());
            store.sink().emit(
                Level::Info,
                &format!("{} not found, starting with empty stock", path.display()),
            );
            return Ok(());
        }
        Err(err) => {
            let err = SnapshotError::io(path, err);
            store
                .sink()
                .emit(Level::Error, &format!("failed to read snapshot: {err}"));
            return Err(err);
        }
    };

    match serde_json::from_str::<StockMap>(&contents) {
        Ok(stock) => {
            store.replace(stock);
            store
                .sink()
                .emit(Level::Info, "inventory data loaded successfully");
            Ok(())
        }
        Err(err) => {
            // Prior in-memory state is preserved.
            let err = SnapshotError::malformed(path, err);
            store.sink().emit(Level::Error, &err.to_string());
            Err(err)
        }
    }
}

/// Serialize the store's mapping to `path`, pretty-printed.
///
/// Any failure emits an error diagnostic and is returned; the in-memory
/// mapping is unaffected either way.
pub fn save(store: &InventoryStore, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();

    let result = serde_json::to_vec_pretty(store.snapshot())
        .map_err(|err| SnapshotError::io(path, io::Error::from(err)))
        .and_then(|bytes| fs::write(path, bytes).map_err(|err| SnapshotError::io(path, err)));

    match result {
        Ok(()) => {
            store
                .sink()
                .emit(Level::Info, "inventory data saved successfully");
            Ok(())
        }
        Err(err) => {
            store
                .sink()
                .emit(Level::Error, &format!("failed to save snapshot: {err}"));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockroom_core::MemorySink;

    fn store_with_memory_sink() -> (InventoryStore, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let store = InventoryStore::with_sink(sink.clone());
        (store, sink)
    }

    #[test]
    fn save_then_load_reproduces_the_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut original = InventoryStore::new();
        original.add("apple", 7, None).unwrap();
        original.add("banana", 5, None).unwrap();
        original.add("grapes", 2, None).unwrap();
        save(&original, &path).unwrap();

        let mut restored = InventoryStore::new();
        load(&mut restored, &path).unwrap();

        assert_eq!(restored.snapshot(), original.snapshot());
    }

    #[test]
    fn snapshot_is_a_pretty_printed_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut store = InventoryStore::new();
        store.add("apple", 7, None).unwrap();
        save(&store, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["apple"], 7);
    }

    #[test]
    fn load_of_missing_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let (mut store, sink) = store_with_memory_sink();
        store.add("apple", 3, None).unwrap();

        load(&mut store, &path).unwrap();

        assert!(store.is_empty());
        assert!(
            sink.messages_at(Level::Info)
                .iter()
                .any(|m| m.contains("starting with empty stock"))
        );
    }

    #[test]
    fn load_of_malformed_file_preserves_prior_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let (mut store, sink) = store_with_memory_sink();
        store.add("apple", 3, None).unwrap();

        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed { .. }));

        assert_eq!(store.quantity("apple"), 3);
        assert_eq!(sink.messages_at(Level::Error).len(), 1);
    }

    #[test]
    fn load_rejects_non_integer_quantities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": "lots"}"#).unwrap();

        let mut store = InventoryStore::new();
        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed { .. }));
    }

    #[test]
    fn save_failure_is_diagnosed_and_leaves_mapping_intact() {
        let dir = tempfile::tempdir().unwrap();

        let (mut store, sink) = store_with_memory_sink();
        store.add("apple", 3, None).unwrap();

        // A directory path cannot be created as a file.
        let err = save(&store, dir.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));

        assert_eq!(store.quantity("apple"), 3);
        assert_eq!(sink.messages_at(Level::Error).len(), 1);
    }
}
