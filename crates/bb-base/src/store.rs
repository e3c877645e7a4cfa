//! Durable single-entity item store.
//!
//! Layout on disk is one YAML document (`items.yaml`) holding a schema
//! header and every `Item` with its store-assigned id. Each mutation is
//! written through before it returns: serialize, write to a sibling temp
//! file, then rename over the original.
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::constants::{ITEM_SCHEMA, ITEMS_FILE, SCHEMA_VERSION};
use crate::error::StoreError;
use crate::item::Item;

/// Identity assigned by the store on insert. Never reused within a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory that holds `items.yaml`
    pub location: PathBuf,
    /// Keep everything in memory and never touch the filesystem
    pub stored_in_memory_only: bool,
}

impl StoreConfig {
    pub fn on_disk(location: impl Into<PathBuf>) -> Self {
        Self { location: location.into(), stored_in_memory_only: false }
    }

    pub fn in_memory() -> Self {
        Self { location: PathBuf::new(), stored_in_memory_only: true }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    schema: String,
    schema_version: u32,
    next_id: u64,
    #[serde(default)]
    items: Vec<StoredItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredItem {
    id: ItemId,
    #[serde(flatten)]
    item: Item,
}

#[derive(Debug)]
pub struct ItemStore {
    /// Path of `items.yaml`; None when in-memory
    path: Option<PathBuf>,
    next_id: u64,
    items: BTreeMap<ItemId, Item>,
}

impl ItemStore {
    /// Open (or create) the store described by `config`.
    ///
    /// On disk, the directory is created if needed and the store file is
    /// rewritten immediately, so an unwritable location fails here rather
    /// than on the first insert.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.stored_in_memory_only {
            tracing::debug!("opening in-memory item store");
            return Ok(Self { path: None, next_id: 1, items: BTreeMap::new() });
        }

        fs::create_dir_all(&config.location).map_err(|e| StoreError::io(&config.location, e))?;
        let path = config.location.join(ITEMS_FILE);

        let store = match fs::read_to_string(&path) {
            Ok(yaml) => Self::from_yaml(&path, &yaml)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Self { path: Some(path.clone()), next_id: 1, items: BTreeMap::new() }
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        store.persist()?;

        tracing::info!(path = %path.display(), items = store.len(), "item store opened");
        Ok(store)
    }

    fn from_yaml(path: &Path, yaml: &str) -> Result<Self, StoreError> {
        let file: StoreFile = serde_yaml::from_str(yaml)
            .map_err(|e| StoreError::Parse { path: path.to_path_buf(), message: e.to_string() })?;

        if file.schema != ITEM_SCHEMA || file.schema_version != SCHEMA_VERSION {
            return Err(StoreError::SchemaMismatch {
                found: format!("{} v{}", file.schema, file.schema_version),
                expected: format!("{} v{}", ITEM_SCHEMA, SCHEMA_VERSION),
            });
        }

        let mut items = BTreeMap::new();
        for stored in file.items {
            if items.insert(stored.id, stored.item).is_some() {
                return Err(StoreError::Parse {
                    path: path.to_path_buf(),
                    message: format!("duplicate item id {}", stored.id.0),
                });
            }
        }

        // Guard against a hand-edited header lagging behind the records
        let max_id = items.keys().next_back().map(|id| id.0).unwrap_or(0);
        let next_id = file.next_id.max(max_id + 1);

        Ok(Self { path: Some(path.to_path_buf()), next_id, items })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let file = StoreFile {
            schema: ITEM_SCHEMA.to_string(),
            schema_version: SCHEMA_VERSION,
            next_id: self.next_id,
            items: self.items.iter().map(|(id, item)| StoredItem { id: *id, item: item.clone() }).collect(),
        };
        let yaml = serde_yaml::to_string(&file)?;

        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
        Ok(())
    }

    /// Add an item and write it through. On failure the store is left unchanged.
    pub fn insert(&mut self, item: Item) -> Result<ItemId, StoreError> {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);

        if let Err(e) = self.persist() {
            self.items.remove(&id);
            self.next_id -= 1;
            return Err(e);
        }
        tracing::debug!(%id, "item inserted");
        Ok(id)
    }

    /// Remove an item. Returns false if no item had that id.
    pub fn delete(&mut self, id: ItemId) -> Result<bool, StoreError> {
        let Some(removed) = self.items.remove(&id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist() {
            self.items.insert(id, removed);
            return Err(e);
        }
        tracing::debug!(%id, "item deleted");
        Ok(true)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Items in id (creation) order
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Path of the store file, or None for an in-memory store
    pub fn location(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
