use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use unicode_normalization::UnicodeNormalization;

use crate::cache::Cache;
use crate::css;
use crate::id::FontId;
use crate::matcher;
use crate::pattern::Pattern;
use crate::range::Coverage;
use crate::style::{TriState, Weight};

/// One CSS family's resolution result: the primary match (if any) plus its
/// coverage fallbacks, each retaining enough coverage information for the
/// text segmenter to pick a font per codepoint without re-querying the
/// cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CssFallbackGroup {
    pub css_name: Box<str>,
    pub primary: Option<FontId>,
    pub primary_coverage: Coverage,
    pub fallbacks: Vec<(FontId, Coverage)>,
}

/// The resolved fallback chain for a CSS font-family stack: one group per
/// (expanded) family, in order, plus the original stack for introspection.
/// A family that resolves to nothing still contributes an empty group —
/// positional identity is part of `css_source` labeling downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct FontChain {
    pub original_stack: Vec<Box<str>>,
    pub groups: Vec<CssFallbackGroup>,
}

type MemoKey = (Vec<String>, u16, bool, bool);

/// Resolves and memoizes CSS font-family stacks against a cache.
///
/// Uses a read-lock fast path with double-checked insertion under a write
/// lock on miss: concurrent callers resolving the same stack never pay for
/// more than one matcher run.
#[derive(Default)]
pub struct ChainResolver {
    memo: RwLock<HashMap<MemoKey, Arc<FontChain>>>,
}

impl ChainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_chain(
        &self,
        cache: &Cache,
        families: &[String],
        weight: Weight,
        italic: bool,
        oblique: bool,
    ) -> Arc<FontChain> {
        let key = memo_key(families, weight, italic, oblique);

        if let Some(chain) = self.memo.read().get(&key) {
            return Arc::clone(chain);
        }

        let mut memo = self.memo.write();
        if let Some(chain) = memo.get(&key) {
            return Arc::clone(chain);
        }

        let chain = Arc::new(build_chain(cache, families, weight, italic, oblique));
        memo.insert(key, Arc::clone(&chain));
        chain
    }
}

fn memo_key(families: &[String], weight: Weight, italic: bool, oblique: bool) -> MemoKey {
    let normalized = families
        .iter()
        .map(|f| f.nfc().collect::<String>().to_ascii_lowercase())
        .collect();
    (normalized, weight.to_number(), italic, oblique)
}

fn build_chain(
    cache: &Cache,
    families: &[String],
    weight: Weight,
    italic: bool,
    oblique: bool,
) -> FontChain {
    let expanded = css::expand_stack(families);

    let groups = expanded
        .into_iter()
        .map(|family| resolve_group(cache, &family, weight, italic, oblique))
        .collect();

    FontChain {
        original_stack: families.iter().map(|f| f.as_str().into()).collect(),
        groups,
    }
}

fn resolve_group(
    cache: &Cache,
    family: &str,
    weight: Weight,
    italic: bool,
    oblique: bool,
) -> CssFallbackGroup {
    let pattern = Pattern {
        family: Some(family.into()),
        weight,
        italic: TriState::from(italic),
        oblique: TriState::from(oblique),
        ..Pattern::default()
    };

    let (matched, _trace) = matcher::match_pattern(&pattern, cache);

    match matched {
        Some(m) => CssFallbackGroup {
            css_name: family.into(),
            primary: Some(m.id),
            primary_coverage: Coverage::from_ranges(m.unicode_ranges),
            fallbacks: m
                .fallbacks
                .into_iter()
                .map(|f| (f.id, Coverage::from_ranges(f.unicode_ranges)))
                .collect(),
        },
        None => CssFallbackGroup {
            css_name: family.into(),
            primary: None,
            primary_coverage: Coverage::empty(),
            fallbacks: Vec::new(),
        },
    }
}
