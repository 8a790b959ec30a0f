use std::path::PathBuf;

use crate::trace::Trace;

/// Options recognized by the cache builder.
///
/// Construct with [`BuildConfig::default`] and override fields, mirroring
/// the builder-by-struct-update convention the rest of this crate's
/// dependency stack uses rather than a fluent builder type — there's no
/// validation between fields that would benefit from one.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Overrides the platform default scan list. `None` means use the
    /// platform defaults from [`crate::source::default_font_dirs`].
    pub font_dirs: Option<Vec<PathBuf>>,
    /// Whether to descend into symlinked directories and follow symlinked
    /// files while scanning. Default `true`.
    pub follow_symlinks: bool,
    /// Worker-pool size for the parallel parse stage. `0` means let `rayon`
    /// pick based on available hardware parallelism.
    pub parallelism: usize,
    /// Maximum trace entries retained per query.
    pub trace_cap: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            font_dirs: None,
            follow_symlinks: true,
            parallelism: 0,
            trace_cap: Trace::DEFAULT_CAP,
        }
    }
}
