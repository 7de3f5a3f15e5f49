use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Timestamp;

// =============================================================================
// File Entry
// =============================================================================

/// One observed file, as reported by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    /// Slash-delimited path, unique within a listing
    pub path: String,
    /// File size in bytes (None when the backend did not report it)
    pub size: Option<u64>,
    /// Last modification time
    pub mtime: Timestamp,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, size: Option<u64>, mtime: Timestamp) -> Self {
        Self {
            path: path.into(),
            size,
            mtime,
        }
    }
}

// =============================================================================
// File Catalog
// =============================================================================

/// Path-keyed set of file entries.
///
/// Backed by a `BTreeMap`, so iteration is always in path order no matter how
/// the catalog was assembled. Tree building relies on this for determinism.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileCatalog {
    entries: BTreeMap<String, FileEntry>,
}

impl FileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same path.
    pub fn insert(&mut self, entry: FileEntry) -> Option<FileEntry> {
        self.entries.insert(entry.path.clone(), entry)
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<FileEntry> for FileCatalog {
    fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a FileCatalog {
    type Item = &'a FileEntry;
    type IntoIter = std::collections::btree_map::Values<'a, String, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

// =============================================================================
// Key Catalog
// =============================================================================

/// Anything that can answer "is this a known file key?".
///
/// The session validates `open` against whatever catalog the caller hands it
/// instead of keeping its own copy of the listing.
pub trait KeyCatalog {
    fn contains_key(&self, key: &str) -> bool;
}

impl KeyCatalog for FileCatalog {
    fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyCatalog for HashSet<String> {
    fn contains_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl<T: KeyCatalog + ?Sized> KeyCatalog for &T {
    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}
