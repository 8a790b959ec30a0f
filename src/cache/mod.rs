mod builder;
mod store;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::BuildConfig;
use crate::id::FontId;
use crate::metadata::FontMetadata;
use crate::source::{self, Candidate};
use crate::trace::Trace;

pub use store::Store;

/// The font table, effectively immutable after [`Cache::build`] except for
/// memory-font registration, which takes a brief exclusive lock.
///
/// Reads (`get`, `lookup_by_family`, …) take a shared lock, so concurrent
/// queries never block each other.
pub struct Cache {
    store: RwLock<Store>,
}

impl Cache {
    /// Scans the configured (or platform default) font directories plus any
    /// candidates already supplied, parses every face in parallel, and
    /// returns the resulting cache alongside a build-time trace.
    pub fn build(config: &BuildConfig) -> (Cache, Trace) {
        let dirs = config.font_dirs.clone().unwrap_or_else(source::default_font_dirs);
        let candidates = source::scan(&dirs, config.follow_symlinks);
        Self::build_from_candidates(candidates, config)
    }

    /// Builds a cache from an explicit candidate list, bypassing directory
    /// scanning entirely. Used by tests and by callers that already have
    /// their own enumeration strategy.
    pub fn build_from_candidates(candidates: Vec<Candidate>, config: &BuildConfig) -> (Cache, Trace) {
        let (store, trace) = builder::build(candidates, config);
        (Cache { store: RwLock::new(store) }, trace)
    }

    /// Registers in-memory fonts after the initial build. Duplicates
    /// (matching `(label, face_index)`) are silently ignored.
    pub fn add_memory_fonts(&self, fonts: Vec<(Box<str>, Arc<[u8]>)>, config: &BuildConfig) -> Trace {
        let candidates = fonts
            .into_iter()
            .map(|(label, bytes)| Candidate::Memory { label, bytes })
            .collect();
        let (additions, trace) = builder::build(candidates, config);

        let mut store = self.store.write();
        for record in additions.iter_all() {
            store.insert(record.clone());
        }
        trace
    }

    pub fn get(&self, id: FontId) -> Option<crate::record::FontRecord> {
        self.store.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    pub fn lookup_by_family(&self, name: &str) -> Vec<FontId> {
        self.store.read().lookup_by_family(name).to_vec()
    }

    pub fn lookup_by_name(&self, name: &str) -> Vec<FontId> {
        self.store.read().lookup_by_name(name).to_vec()
    }

    pub fn get_path(&self, id: FontId) -> Option<String> {
        self.store.read().get_path(id)
    }

    pub fn get_metadata(&self, id: FontId) -> Option<FontMetadata> {
        self.store.read().get_metadata(id).cloned()
    }

    pub fn list_fonts(&self) -> Vec<(FontId, Option<String>, Option<String>)> {
        self.store
            .read()
            .list_fonts()
            .into_iter()
            .map(|(id, name, family)| (id, name.map(String::from), family.map(String::from)))
            .collect()
    }

    /// Runs `f` with shared read access to the underlying store. Used by
    /// the matcher, which needs to iterate candidates without cloning every
    /// [`FontRecord`](crate::record::FontRecord) it considers.
    pub(crate) fn with_store<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        f(&self.store.read())
    }
}
