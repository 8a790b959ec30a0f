use crate::cache::Cache;
use crate::chain::FontChain;
use crate::id::FontId;

/// A maximal run of contiguous codepoints assigned to the same font (or to
/// no font at all, if nothing in the chain covers them).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFontRun {
    pub text: Box<str>,
    pub start_byte: usize,
    pub end_byte: usize,
    pub font: Option<FontId>,
    pub css_source: Box<str>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Choice {
    font: Option<FontId>,
    css_source_index: Option<usize>,
}

/// Walks `text` codepoint by codepoint, picking the best font in `chain`
/// for each, and emits maximal runs. Concatenating every run's `text`
/// reproduces `text` byte-for-byte; the cache parameter is accepted for API
/// symmetry with the rest of the querying surface but the chain already
/// carries everything needed to decide coverage.
pub fn query_for_text(chain: &FontChain, _cache: &Cache, text: &str) -> Vec<ResolvedFontRun> {
    let mut runs = Vec::new();
    if text.is_empty() {
        return runs;
    }

    let mut current_start = 0usize;
    let mut current_choice: Option<Choice> = None;

    for (byte_offset, ch) in text.char_indices() {
        // Whitespace and other ASCII controls inherit the run's current
        // font rather than forcing a split: almost every font covers them,
        // so splitting on them would fragment runs for no visual benefit.
        let choice = if byte_offset != 0 && is_inheritable_control(ch) {
            current_choice.unwrap_or_else(|| choose_font(chain, ch as u32))
        } else {
            choose_font(chain, ch as u32)
        };

        if byte_offset == 0 {
            current_choice = Some(choice);
            continue;
        }

        if Some(choice) != current_choice {
            flush(&mut runs, chain, text, current_start, byte_offset, current_choice);
            current_start = byte_offset;
            current_choice = Some(choice);
        }
    }

    flush(&mut runs, chain, text, current_start, text.len(), current_choice);
    runs
}

fn flush(
    runs: &mut Vec<ResolvedFontRun>,
    chain: &FontChain,
    text: &str,
    start: usize,
    end: usize,
    choice: Option<Choice>,
) {
    let Some(choice) = choice else { return };
    let css_source = choice
        .css_source_index
        .map(|i| chain.groups[i].css_name.clone())
        .or_else(|| chain.groups.last().map(|g| g.css_name.clone()))
        .unwrap_or_default();

    runs.push(ResolvedFontRun {
        text: text[start..end].into(),
        start_byte: start,
        end_byte: end,
        font: choice.font,
        css_source,
    });
}

fn is_inheritable_control(ch: char) -> bool {
    ch.is_ascii_whitespace() || (ch.is_ascii_control() && ch != '\0')
}

fn choose_font(chain: &FontChain, cp: u32) -> Choice {
    for (index, group) in chain.groups.iter().enumerate() {
        if group.primary_coverage.contains(cp) {
            return Choice { font: group.primary, css_source_index: Some(index) };
        }
        for (fallback_id, coverage) in &group.fallbacks {
            if coverage.contains(cp) {
                return Choice { font: Some(*fallback_id), css_source_index: Some(index) };
            }
        }
    }
    Choice { font: None, css_source_index: None }
}
