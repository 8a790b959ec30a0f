use ttf_parser::{Face, Tag};

use crate::style::{Stretch, StyleFlags, Weight};

/// PANOSE "Proportion" byte index within the 10-byte PANOSE classification,
/// itself found at offset 32 of `OS/2`. Value `9` means monospaced.
const PANOSE_PROPORTION_OFFSET: usize = 32 + 3;
const PANOSE_MONOSPACED: u8 = 9;

/// Extracts weight, stretch, and the boolean style flags from `OS/2`,
/// `head.macStyle`, and `post.isFixedPitch`, falling back to defaults when
/// `OS/2` is absent.
pub fn extract_style(face: &Face) -> (Weight, Stretch, StyleFlags) {
    let weight = Weight::from_os2_weight_class(face.weight().to_number());
    let stretch = Stretch::from_os2_width_class(face.width().to_number());

    let italic = face.is_italic();
    let oblique = face.is_oblique();
    let bold = face.is_bold() || weight.is_bold();
    let monospace = face.is_monospaced() || has_panose_monospace_signal(face);
    let condensed = stretch.is_condensed();

    (weight, stretch, StyleFlags { italic, oblique, bold, monospace, condensed })
}

fn has_panose_monospace_signal(face: &Face) -> bool {
    face.raw_face()
        .table(Tag::from_bytes(b"OS/2"))
        .and_then(|os2| os2.get(PANOSE_PROPORTION_OFFSET))
        .copied()
        == Some(PANOSE_MONOSPACED)
}
