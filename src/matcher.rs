use crate::cache::{Cache, Store};
use crate::id::FontId;
use crate::pattern::Pattern;
use crate::range::UnicodeRange;
use crate::record::FontRecord;
use crate::style::{Stretch, TriState, Weight};
use crate::trace::{Trace, TraceLevel, TraceMsg, TraceReason};

/// A font matched against a pattern, without its own fallback list —
/// used for entries inside [`FontMatch::fallbacks`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontMatchNoFallback {
    pub id: FontId,
    pub unicode_ranges: Vec<UnicodeRange>,
}

/// The result of a successful pattern match: a primary font plus a
/// coverage-ordered list of fallbacks for codepoints the primary doesn't
/// cover.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMatch {
    pub id: FontId,
    pub unicode_ranges: Vec<UnicodeRange>,
    pub fallbacks: Vec<FontMatchNoFallback>,
}

/// Runs the pattern matcher: selects a candidate set, hard-filters it,
/// scores survivors, and returns the best match plus a ranked fallback
/// list and a trace explaining every considered candidate.
pub fn match_pattern(pattern: &Pattern, cache: &Cache) -> (Option<FontMatch>, Trace) {
    let mut trace = Trace::new(Trace::DEFAULT_CAP);

    cache.with_store(|store| {
        let candidate_ids = candidate_set(pattern, store);
        if candidate_ids.is_empty() {
            return (None, trace);
        }

        let mut survivors: Vec<(usize, &FontRecord)> = Vec::new();
        for (order, id) in candidate_ids.into_iter().enumerate() {
            let Some(record) = store.get(id) else { continue };
            match hard_filter(pattern, record) {
                Ok(()) => survivors.push((order, record)),
                Err(reason) => {
                    trace.push(TraceMsg::new(TraceLevel::Info, record.path_string(), reason));
                }
            }
        }

        if survivors.is_empty() {
            return (None, trace);
        }

        let primary_index = (0..survivors.len())
            .min_by_key(|&i| {
                let (order, record) = survivors[i];
                score(pattern, record, order)
            })
            .expect("survivors is non-empty");

        let (_, primary) = survivors[primary_index];
        trace.push(TraceMsg::new(TraceLevel::Info, primary.path_string(), TraceReason::Success));

        let mut fallback_candidates: Vec<&FontRecord> = Vec::with_capacity(survivors.len() - 1);
        for i in 0..survivors.len() {
            if i == primary_index {
                continue;
            }
            let (_, record) = survivors[i];
            trace.push(TraceMsg::new(
                TraceLevel::Info,
                record.path_string(),
                non_primary_reason(pattern, record),
            ));
            fallback_candidates.push(record);
        }

        fallback_candidates.sort_by(|a, b| {
            let a_uncovered = a.coverage.count_uncovered_by(&primary.coverage);
            let b_uncovered = b.coverage.count_uncovered_by(&primary.coverage);
            b_uncovered
                .cmp(&a_uncovered)
                .then_with(|| b.coverage.total_codepoints().cmp(&a.coverage.total_codepoints()))
        });

        let fallbacks = fallback_candidates
            .into_iter()
            .map(|record| FontMatchNoFallback {
                id: record.id,
                unicode_ranges: record.coverage.ranges().to_vec(),
            })
            .collect();

        let matched = FontMatch {
            id: primary.id,
            unicode_ranges: primary.coverage.ranges().to_vec(),
            fallbacks,
        };
        (Some(matched), trace)
    })
}

fn candidate_set(pattern: &Pattern, store: &Store) -> Vec<FontId> {
    if let Some(name) = &pattern.name {
        store.lookup_by_name(name).to_vec()
    } else if let Some(family) = &pattern.family {
        store.lookup_by_family(family).to_vec()
    } else {
        store.iter_all().map(|record| record.id).collect()
    }
}

fn hard_filter(pattern: &Pattern, record: &FontRecord) -> Result<(), TraceReason> {
    check_tri_state(pattern.italic, record.style_flags.italic, "italic")?;
    check_tri_state(pattern.oblique, record.style_flags.oblique, "oblique")?;
    check_tri_state(pattern.bold, record.style_flags.bold, "bold")?;
    check_tri_state(pattern.monospace, record.style_flags.monospace, "monospace")?;
    check_tri_state(pattern.condensed, record.style_flags.condensed, "condensed")?;

    if !pattern.unicode_ranges.is_empty() && !pattern.unicode_ranges.is_subset_of(&record.coverage)
    {
        return Err(TraceReason::UnicodeRangeMismatch);
    }

    Ok(())
}

fn check_tri_state(expected: TriState, actual: bool, attribute: &'static str) -> Result<(), TraceReason> {
    if expected.accepts(actual) {
        Ok(())
    } else {
        let expected_bool = matches!(expected, TriState::True);
        Err(TraceReason::StyleMismatch { attribute, expected: expected_bool, actual })
    }
}

/// Lexicographic score tuple, smaller is better: weight distance (sided),
/// stretch distance (sided), name/family match quality, insertion order.
fn score(pattern: &Pattern, record: &FontRecord, insertion_order: usize) -> (u16, u8, u8, u8, u8, usize) {
    let (weight_distance, weight_penalty) = sided_weight_distance(pattern.weight, record.weight);
    let (stretch_distance, stretch_penalty) = sided_stretch_distance(pattern.stretch, record.stretch);
    let quality = name_quality(pattern, record);
    (weight_distance, weight_penalty, stretch_distance, stretch_penalty, quality, insertion_order)
}

/// `(distance, penalty)` where penalty is `0` on the CSS-preferred side of
/// `target` and `1` otherwise: below when `target <= 500`, above when
/// `target > 500`.
fn sided_weight_distance(target: Weight, candidate: Weight) -> (u16, u8) {
    let distance = target.distance(candidate);
    let prefer_below = target.to_number() <= 500;
    let is_below_or_equal = candidate.to_number() <= target.to_number();
    let penalty = if prefer_below == is_below_or_equal { 0 } else { 1 };
    (distance, penalty)
}

/// Same sided tie-break, around `Normal` (5) on the stretch axis.
fn sided_stretch_distance(target: Stretch, candidate: Stretch) -> (u8, u8) {
    let distance = target.distance(candidate);
    let prefer_below = target.to_number() <= Stretch::NORMAL.to_number();
    let is_below_or_equal = candidate.to_number() <= target.to_number();
    let penalty = if prefer_below == is_below_or_equal { 0 } else { 1 };
    (distance, penalty)
}

/// Every hard-filtered survivor that isn't chosen as the primary still gets
/// a trace entry explaining why it lost: whichever score term actually
/// differed from the pattern, weight before stretch since that's the order
/// they're compared in.
fn non_primary_reason(pattern: &Pattern, record: &FontRecord) -> TraceReason {
    if record.weight != pattern.weight {
        TraceReason::WeightMismatch { expected: pattern.weight, actual: record.weight }
    } else if record.stretch != pattern.stretch {
        TraceReason::StretchMismatch { expected: pattern.stretch, actual: record.stretch }
    } else {
        TraceReason::WeightMismatch { expected: pattern.weight, actual: record.weight }
    }
}

fn name_quality(pattern: &Pattern, record: &FontRecord) -> u8 {
    let mut best = 3u8;

    if let Some(name) = &pattern.name {
        if let Some(actual) = record.name() {
            if actual.eq_ignore_ascii_case(name) {
                best = best.min(0);
            } else if actual.to_ascii_lowercase().contains(&name.to_ascii_lowercase()) {
                best = best.min(2);
            }
        }
    }

    if let Some(family) = &pattern.family {
        if let Some(actual) = record.family() {
            if actual.eq_ignore_ascii_case(family) {
                best = best.min(1);
            } else if actual.to_ascii_lowercase().contains(&family.to_ascii_lowercase()) {
                best = best.min(2);
            }
        }
    }

    best
}
