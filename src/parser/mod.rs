mod cmap;
mod name;
mod os2;

use crate::error::ParseError;
use crate::metadata::FontMetadata;
use crate::range::Coverage;
use crate::style::{Stretch, StyleFlags, Weight};

/// Everything extracted from a single parsed face.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFace {
    pub metadata: FontMetadata,
    pub coverage: Coverage,
    pub style_flags: StyleFlags,
    pub weight: Weight,
    pub stretch: Stretch,
}

/// Detects the container format and returns the number of faces it holds.
///
/// Recognizes single-face TrueType (`\0\1\0\0`, `true`) and OpenType
/// (`OTTO`) containers, plus TrueType/OpenType collections (`ttcf`).
pub fn probe(bytes: &[u8]) -> Result<u32, ParseError> {
    let magic = bytes.get(0..4).ok_or(ParseError::Truncated)?;
    match magic {
        b"OTTO" | [0, 1, 0, 0] | b"true" | b"typ1" => Ok(1),
        b"ttcf" => {
            ttf_parser::fonts_in_collection(bytes).ok_or(ParseError::Truncated)
        }
        _ => Err(ParseError::UnrecognizedFormat),
    }
}

/// Parses a single face out of a font container.
///
/// `face_index` is `0` for single-face containers; for collections it
/// selects which face to decode. Structural errors here are always
/// non-fatal at the cache level: the caller downgrades them to a trace
/// entry and skips the face.
pub fn parse(bytes: &[u8], face_index: u32) -> Result<ParsedFace, ParseError> {
    let face_count = probe(bytes)?;
    if face_index >= face_count {
        return Err(ParseError::FaceIndexOutOfRange { index: face_index, face_count });
    }

    let face = ttf_parser::Face::parse(bytes, face_index).map_err(|_| ParseError::Truncated)?;

    let metadata = name::extract_metadata(&face);
    let coverage = cmap::extract_coverage(&face);
    let (weight, stretch, style_flags) = os2::extract_style(&face);

    // A face missing both `name` and `cmap` carries neither an identity to
    // index it under nor any codepoints to match against; there is nothing
    // left for this crate to do with it.
    if metadata.effective_name().is_none() && metadata.effective_family().is_none() && coverage.is_empty() {
        return Err(ParseError::MissingTable { tag: "name+cmap" });
    }

    Ok(ParsedFace { metadata, coverage, style_flags, weight, stretch })
}
