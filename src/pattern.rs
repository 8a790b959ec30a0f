use crate::range::Coverage;
use crate::style::{Stretch, TriState, Weight};

/// A declarative query against the font cache.
///
/// `TriState::DontCare` (the default for every boolean field) on every
/// attribute, `weight = Normal`, `stretch = Normal`, and empty
/// `unicode_ranges` is the wildcard pattern: it hard-filters nothing and
/// matches every indexed font, differing only in how candidates are
/// ranked against each other.
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    /// Substring/exact match against the font's full name or PostScript name.
    pub name: Option<Box<str>>,
    /// Substring/exact match against the font's family or preferred family.
    pub family: Option<Box<str>>,
    pub italic: TriState,
    pub oblique: TriState,
    pub bold: TriState,
    pub monospace: TriState,
    pub condensed: TriState,
    pub weight: Weight,
    pub stretch: Stretch,
    /// Coverage the matched font must be a superset of. Empty means no
    /// coverage requirement.
    pub unicode_ranges: Coverage,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(family: impl Into<Box<str>>) -> Self {
        Self { family: Some(family.into()), ..Self::default() }
    }

    pub fn with_name(name: impl Into<Box<str>>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }
}
