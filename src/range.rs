/// The highest codepoint Unicode defines.
const MAX_CODEPOINT: u32 = 0x10FFFF;

/// An inclusive range of Unicode codepoints.
///
/// Invariant: `start <= end <= 0x10FFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeRange {
    pub start: u32,
    pub end: u32,
}

impl UnicodeRange {
    /// Creates a range, clamping `end` to the last valid codepoint.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end: end.min(MAX_CODEPOINT) }
    }

    fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}

/// A sorted, merged, non-overlapping set of [`UnicodeRange`]s.
///
/// This is the coverage set of a single font as well as the
/// `unicode_ranges` field of a [`Pattern`](crate::Pattern). Adjacent ranges
/// (where one's `end + 1` equals the next's `start`) are coalesced on
/// construction, so `ranges()` always returns a canonical, directly
/// comparable form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coverage(Vec<UnicodeRange>);

impl Coverage {
    /// The empty coverage set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Builds a coverage set from an arbitrary list of ranges, sorting and
    /// merging them.
    pub fn from_ranges(mut ranges: Vec<UnicodeRange>) -> Self {
        ranges.sort_unstable_by_key(|r| r.start);
        let mut merged: Vec<UnicodeRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }
        Self(merged)
    }

    /// Builds a coverage set from an unsorted list of codepoints, the form
    /// the `cmap` parser naturally produces.
    pub fn from_codepoints(mut codepoints: Vec<u32>) -> Self {
        codepoints.sort_unstable();
        codepoints.dedup();

        let mut ranges = Vec::new();
        for cp in codepoints {
            match ranges.last_mut() {
                Some(&mut UnicodeRange { end, .. }) if cp == end + 1 => {
                    ranges.last_mut().unwrap().end = cp;
                }
                _ => ranges.push(UnicodeRange::new(cp, cp)),
            }
        }
        Self(ranges)
    }

    /// The ranges, sorted and merged.
    pub fn ranges(&self) -> &[UnicodeRange] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a single codepoint is covered.
    pub fn contains(&self, cp: u32) -> bool {
        self.0
            .binary_search_by(|r| {
                if cp < r.start {
                    std::cmp::Ordering::Greater
                } else if cp > r.end {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Whether `self` is a subset of `other`, i.e. every codepoint `self`
    /// covers is also covered by `other`. Both operands must already be
    /// sorted and merged; walks both range lists with a single cursor pair.
    pub fn is_subset_of(&self, other: &Coverage) -> bool {
        let mut j = 0;
        for need in &self.0 {
            // Advance `other`'s cursor past ranges that end before `need` starts.
            while j < other.0.len() && other.0[j].end < need.start {
                j += 1;
            }
            let mut covered_start = need.start;
            let mut k = j;
            while covered_start <= need.end {
                let Some(candidate) = other.0.get(k) else {
                    return false;
                };
                if candidate.start > covered_start {
                    return false;
                }
                covered_start = candidate.end.saturating_add(1);
                k += 1;
            }
        }
        true
    }

    /// The number of codepoints in `self` that are not covered by `other`,
    /// used to rank fallback candidates by how much of a codepoint set they
    /// actually fill in.
    pub fn count_uncovered_by(&self, other: &Coverage) -> u64 {
        let mut count = 0u64;
        let mut j = 0;
        for range in &self.0 {
            let mut cursor = range.start;
            while cursor <= range.end {
                while j < other.0.len() && other.0[j].end < cursor {
                    j += 1;
                }
                let next_gap_end = match other.0.get(j) {
                    Some(candidate) if candidate.start <= cursor => {
                        cursor = candidate.end.saturating_add(1);
                        continue;
                    }
                    Some(candidate) => candidate.start.saturating_sub(1).min(range.end),
                    None => range.end,
                };
                count += u64::from(next_gap_end - cursor) + 1;
                cursor = next_gap_end.saturating_add(1);
            }
        }
        count
    }

    /// Total number of codepoints covered, used as the fallback tie-break.
    pub fn total_codepoints(&self) -> u64 {
        self.0.iter().map(|r| u64::from(r.end - r.start) + 1).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u32, end: u32) -> UnicodeRange {
        UnicodeRange::new(start, end)
    }

    #[test]
    fn merges_adjacent_and_overlapping_ranges() {
        let cov = Coverage::from_ranges(vec![r(10, 20), r(21, 25), r(0, 5), r(30, 40)]);
        assert_eq!(cov.ranges(), &[r(0, 5), r(10, 25), r(30, 40)]);
    }

    #[test]
    fn from_codepoints_coalesces_runs() {
        let cov = Coverage::from_codepoints(vec![5, 2, 3, 4, 9, 11, 10, 20]);
        assert_eq!(cov.ranges(), &[r(2, 5), r(9, 11), r(20, 20)]);
    }

    #[test]
    fn contains_respects_bounds() {
        let cov = Coverage::from_ranges(vec![r(0x20, 0x7e), r(0x4e00, 0x9fff)]);
        assert!(cov.contains(0x41));
        assert!(cov.contains(0x4e2d));
        assert!(!cov.contains(0x7f));
        assert!(!cov.contains(0x1f600));
    }

    #[test]
    fn subset_true_and_false() {
        let small = Coverage::from_ranges(vec![r(10, 20)]);
        let big = Coverage::from_ranges(vec![r(0, 100)]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));

        let split = Coverage::from_ranges(vec![r(0, 5), r(15, 100)]);
        assert!(small.is_subset_of(&split));

        let gap = Coverage::from_ranges(vec![r(0, 12), r(18, 100)]);
        assert!(!small.is_subset_of(&gap));
    }

    #[test]
    fn empty_pattern_ranges_are_trivially_a_subset() {
        let empty = Coverage::empty();
        let any = Coverage::from_ranges(vec![r(0, 10)]);
        assert!(empty.is_subset_of(&any));
    }

    #[test]
    fn count_uncovered_by_counts_gaps_only() {
        let a = Coverage::from_ranges(vec![r(0, 9)]);
        let b = Coverage::from_ranges(vec![r(0, 4)]);
        assert_eq!(a.count_uncovered_by(&b), 5);
        assert_eq!(b.count_uncovered_by(&a), 0);
    }
}
