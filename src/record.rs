use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

use crate::id::FontId;
use crate::metadata::FontMetadata;
use crate::range::Coverage;
use crate::style::{Stretch, StyleFlags, Weight};

/// Where a font's bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A face loaded lazily from a file on disk.
    File { path: PathBuf, face_index: u32 },
    /// A face supplied in-memory by the caller, identified by a caller-given
    /// label rather than a path.
    Memory { bytes: Arc<[u8]>, face_index: u32, label: Box<str> },
}

impl FontSource {
    /// The deduplication key for the cache builder: `(canonical_path,
    /// face_index)` for file sources, `(label, face_index)` for memory
    /// sources. The leading discriminant keeps a file path from colliding
    /// with a memory label that happens to read the same.
    pub fn dedup_key(&self) -> (u8, &str, u32) {
        match self {
            FontSource::File { path, face_index } => {
                (0, path.to_str().unwrap_or_default(), *face_index)
            }
            FontSource::Memory { label, face_index, .. } => (1, label, *face_index),
        }
    }
}

impl Display for FontSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File { path, .. } => write!(f, "{}", path.display()),
            FontSource::Memory { label, .. } => write!(f, "memory:{label}"),
        }
    }
}

/// A single indexed font face, immutable once built.
///
/// Owned exclusively by the [`Cache`](crate::cache::Cache); every other
/// component holds only the [`FontId`] and borrows the record through the
/// cache.
#[derive(Debug, Clone, PartialEq)]
pub struct FontRecord {
    pub id: FontId,
    pub source: FontSource,
    pub metadata: FontMetadata,
    pub coverage: Coverage,
    pub style_flags: StyleFlags,
    pub weight: Weight,
    pub stretch: Stretch,
}

impl FontRecord {
    /// The family this record should be indexed and matched under.
    pub fn family(&self) -> Option<&str> {
        self.metadata.effective_family()
    }

    /// The name this record should be indexed and matched under.
    pub fn name(&self) -> Option<&str> {
        self.metadata.effective_name()
    }

    /// The rendered path, `memory:<label>` for in-memory fonts or the
    /// canonical filesystem path for file fonts.
    pub fn path_string(&self) -> String {
        self.source.to_string()
    }
}
