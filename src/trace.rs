use crate::style::{Stretch, Weight};

/// Severity of a [`TraceMsg`].
///
/// Only two levels: this is a decision log, not an exception channel, so
/// there's no `Error` variant — nothing that ends up in a trace ever aborts
/// a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLevel {
    Info,
    Warning,
}

/// Why a single candidate was accepted or rejected during matching, or why
/// a source failed during a cache build.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceReason {
    /// The pattern's `name` field did not match.
    NameMismatch { expected: Box<str>, actual: Option<Box<str>> },
    /// The pattern's `family` field did not match.
    FamilyMismatch { expected: Box<str>, actual: Option<Box<str>> },
    /// A tri-state style attribute (italic/oblique/bold/monospace/condensed)
    /// disagreed with the font's detected flag.
    StyleMismatch { attribute: &'static str, expected: bool, actual: bool },
    /// Recorded for diagnostic purposes only; weight never hard-filters.
    WeightMismatch { expected: Weight, actual: Weight },
    /// Recorded for diagnostic purposes only; stretch never hard-filters.
    StretchMismatch { expected: Stretch, actual: Stretch },
    /// `pattern.unicode_ranges` was not a subset of the font's coverage.
    UnicodeRangeMismatch,
    /// A source file could not be read.
    SourceUnreadable { detail: Box<str> },
    /// A face failed to parse and was skipped.
    ParseFailed { detail: Box<str> },
    /// The candidate was chosen as the primary match.
    Success,
}

/// One entry in a [`Trace`]: the path or origin under consideration, the
/// severity, and why the outcome happened.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceMsg {
    pub level: TraceLevel,
    pub path: Box<str>,
    pub reason: TraceReason,
}

impl TraceMsg {
    pub fn new(level: TraceLevel, path: impl Into<Box<str>>, reason: TraceReason) -> Self {
        Self { level, path: path.into(), reason }
    }
}

/// A bounded, push-only accumulator of [`TraceMsg`]s.
///
/// Once `cap` entries have been recorded, further pushes are silently
/// dropped rather than growing the trace without bound — a query over a
/// huge cache should not be able to allocate unboundedly just because every
/// candidate was rejected.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    entries: Vec<TraceMsg>,
    cap: usize,
    dropped: u64,
}

impl Trace {
    /// Default cap on entries per query, matching the cache's default
    /// [`BuildConfig::trace_cap`](crate::config::BuildConfig).
    pub const DEFAULT_CAP: usize = 1024;

    pub fn new(cap: usize) -> Self {
        Self { entries: Vec::new(), cap, dropped: 0 }
    }

    pub fn push(&mut self, msg: TraceMsg) {
        if self.entries.len() < self.cap {
            self.entries.push(msg);
        } else {
            self.dropped += 1;
        }
    }

    pub fn entries(&self) -> &[TraceMsg] {
        &self.entries
    }

    /// Number of entries that were dropped once the cap was reached.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<TraceMsg> {
        self.entries
    }
}

impl IntoIterator for Trace {
    type Item = TraceMsg;
    type IntoIter = std::vec::IntoIter<TraceMsg>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
