use ttf_parser::Face;

use crate::range::Coverage;

/// Unions the Unicode codepoints covered by every `cmap` subtable that maps
/// from Unicode (formats 4 and 12, plus any other subtable `ttf-parser`
/// recognizes as Unicode), then folds them into a sorted-merged [`Coverage`].
///
/// A font with no usable Unicode subtable gets empty coverage; it is still
/// indexed (and never satisfies a `unicode_ranges` constraint), unless its
/// `name` table is empty too, in which case the caller rejects the face
/// entirely as unparseable.
pub fn extract_coverage(face: &Face) -> Coverage {
    let mut codepoints = Vec::new();

    if let Some(table) = face.tables().cmap {
        for subtable in table.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|c| codepoints.push(c));
        }
    }

    Coverage::from_codepoints(codepoints)
}
