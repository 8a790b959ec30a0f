use std::collections::HashMap;

use rustc_hash::FxHashSet;

use crate::id::FontId;
use crate::metadata::FontMetadata;
use crate::record::FontRecord;

/// Case-folds a name for use as a lookup key.
///
/// ASCII-only simple case folding: the implementation limitation `external
/// interfaces` documents for non-ASCII family and font names, which are
/// matched byte-for-byte after ASCII lowercasing only.
pub fn fold_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// The canonical font table plus the two lookup indexes the matcher needs.
///
/// Immutable once built except for `insert`, used only by memory-font
/// registration, which the cache wraps in a lock (see
/// [`Cache::add_memory_fonts`](super::Cache::add_memory_fonts)).
#[derive(Debug, Default)]
pub struct Store {
    records: Vec<FontRecord>,
    by_id: HashMap<FontId, usize>,
    by_family: HashMap<String, Vec<FontId>>,
    by_name: HashMap<String, Vec<FontId>>,
    dedup: FxHashSet<(u8, String, u32)>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record unless its dedup key has already been seen, in
    /// which case it is silently ignored. Returns whether it was inserted.
    pub fn insert(&mut self, record: FontRecord) -> bool {
        let key = record.source.dedup_key();
        let key = (key.0, key.1.to_owned(), key.2);
        if !self.dedup.insert(key) {
            return false;
        }

        let index = self.records.len();
        let id = record.id;

        if let Some(family) = record.family() {
            self.by_family.entry(fold_case(family)).or_default().push(id);
        }
        if let Some(name) = record.name() {
            self.by_name.entry(fold_case(name)).or_default().push(id);
        }

        self.by_id.insert(id, index);
        self.records.push(record);
        true
    }

    pub fn get(&self, id: FontId) -> Option<&FontRecord> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &FontRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lookup_by_family(&self, name: &str) -> &[FontId] {
        self.by_family.get(&fold_case(name)).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn lookup_by_name(&self, name: &str) -> &[FontId] {
        self.by_name.get(&fold_case(name)).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn get_path(&self, id: FontId) -> Option<String> {
        self.get(id).map(FontRecord::path_string)
    }

    pub fn get_metadata(&self, id: FontId) -> Option<&FontMetadata> {
        self.get(id).map(|record| &record.metadata)
    }

    /// `(id, name, family)` triples for every indexed font, in insertion
    /// order.
    pub fn list_fonts(&self) -> Vec<(FontId, Option<&str>, Option<&str>)> {
        self.records
            .iter()
            .map(|record| (record.id, record.name(), record.family()))
            .collect()
    }
}
