//! Whole-store JSON snapshots.
//!
//! A snapshot is one top-level JSON object, item names as keys and integer
//! quantities as values, pretty-printed with 4-space indentation. There is no
//! envelope, no version field and no checksum; load and save each move the
//! entire mapping in a single blocking read or write.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize as _;
use thiserror::Error;

use stockroom_core::{DomainError, ItemName};
use stockroom_inventory::InventoryStore;

/// Snapshot load/save failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file does not exist. Recoverable: the in-memory store is
    /// left exactly as it was.
    #[error("snapshot file not found: {path}")]
    Missing { path: String },

    /// The file exists but is not a valid JSON object of integer quantities.
    #[error("invalid JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON parsed, but an entry violates a domain constraint.
    #[error("invalid entry in {path}")]
    InvalidEntry {
        path: String,
        #[source]
        source: DomainError,
    },

    /// Underlying filesystem failure other than a missing file.
    #[error("io failure on {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Load a snapshot from `path`, replacing the store's contents wholesale.
///
/// The store is touched only after the whole file has been read, parsed and
/// validated; on any failure it is left exactly as it was. Returns the number
/// of items loaded.
pub fn load(store: &mut InventoryStore, path: impl AsRef<Path>) -> Result<usize, SnapshotError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %display_path, "snapshot file not found, keeping in-memory stock");
            return Err(SnapshotError::Missing { path: display_path });
        }
        Err(source) => {
            tracing::error!(path = %display_path, error = %source, "failed to read snapshot");
            return Err(SnapshotError::Io {
                path: display_path,
                source,
            });
        }
    };

    let raw: BTreeMap<String, i64> = serde_json::from_str(&text).map_err(|source| {
        tracing::error!(path = %display_path, error = %source, "invalid JSON snapshot, keeping in-memory stock");
        SnapshotError::Json {
            path: display_path.clone(),
            source,
        }
    })?;

    let mut items = BTreeMap::new();
    for (name, qty) in raw {
        let name = ItemName::new(name).map_err(|source| {
            tracing::error!(path = %display_path, error = %source, "rejected snapshot entry");
            SnapshotError::InvalidEntry {
                path: display_path.clone(),
                source,
            }
        })?;
        items.insert(name, qty);
    }

    let count = items.len();
    store.replace(items);
    tracing::info!(path = %display_path, items = count, "loaded stock snapshot");
    Ok(count)
}

/// Save the store to `path` as one JSON object, overwriting any existing
/// file.
///
/// The write is not atomic: no temp-file rename, no locking. A crash mid-save
/// can leave a truncated file.
pub fn save(store: &InventoryStore, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let items: BTreeMap<&str, i64> = store.iter().map(|(name, qty)| (name.as_str(), qty)).collect();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut serializer).map_err(|source| {
        tracing::error!(path = %display_path, error = %source, "failed to serialize snapshot");
        SnapshotError::Json {
            path: display_path.clone(),
            source,
        }
    })?;

    fs::write(path, &buf).map_err(|source| {
        tracing::error!(path = %display_path, error = %source, "failed to write snapshot");
        SnapshotError::Io {
            path: display_path.clone(),
            source,
        }
    })?;

    tracing::info!(path = %display_path, items = store.len(), "saved stock snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    fn populated_store() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add(&name("apple"), 7);
        store.add(&name("banana"), 5);
        store
    }

    #[test]
    fn save_then_load_round_trips_the_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let store = populated_store();
        save(&store, &path).unwrap();

        let mut restored = InventoryStore::new();
        let loaded = load(&mut restored, &path).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(restored, store);
    }

    #[test]
    fn load_replaces_rather_than_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        save(&populated_store(), &path).unwrap();

        let mut store = InventoryStore::new();
        store.add(&name("pear"), 42);
        load(&mut store, &path).unwrap();

        assert_eq!(store.get_qty(&name("pear")), 0);
        assert_eq!(store.get_qty(&name("apple")), 7);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_from_missing_path_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let mut store = populated_store();
        let before = store.clone();

        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Missing { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn load_from_malformed_json_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = populated_store();
        let before = store.clone();

        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Json { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn load_rejects_blank_item_names_without_touching_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"": 3, "apple": 1}"#).unwrap();

        let mut store = populated_store();
        let before = store.clone();

        let err = load(&mut store, &path).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidEntry { .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn snapshot_is_a_flat_object_with_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        save(&populated_store(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 5\n}");
    }

    #[test]
    fn save_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "stale contents").unwrap();

        save(&populated_store(), &path).unwrap();

        let mut restored = InventoryStore::new();
        assert_eq!(load(&mut restored, &path).unwrap(), 2);
    }
}
