// src/load/cache.rs

use chrono::{DateTime, Utc};

use crate::model::CustomerCell;

/// Last successful remote dataset, tagged with the file path it was loaded for.
///
/// A lookup only hits when the requested path equals the stored one, so
/// asking for a different file invalidates the entry implicitly.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    key: Option<String>,
    cells: Vec<CustomerCell>,
    stored_at: DateTime<Utc>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: Option<&str>) -> Option<&[CustomerCell]> {
        self.entry
            .as_ref()
            .filter(|e| e.key.as_deref() == key)
            .map(|e| e.cells.as_slice())
    }

    /// Replace whatever was cached.
    pub fn store(&mut self, key: Option<&str>, cells: Vec<CustomerCell>) {
        self.entry = Some(CacheEntry {
            key: key.map(str::to_string),
            cells,
            stored_at: Utc::now(),
        });
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn key(&self) -> Option<&str> {
        self.entry.as_ref().and_then(|e| e.key.as_deref())
    }

    pub fn stored_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|e| e.stored_at)
    }
}
