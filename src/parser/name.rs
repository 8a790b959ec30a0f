use ttf_parser::{name_id, Face, PlatformId};

use crate::metadata::FontMetadata;

/// Extracts every `name`-table string this crate cares about.
///
/// English is preferred when a field has more than one localization:
/// platform 3 (Windows) / encoding 1 (Unicode BMP) / language `0x0409`
/// (US English), or platform 1 (Macintosh) / language `0`. Failing that,
/// the first entry that decodes wins.
pub fn extract_metadata(face: &Face) -> FontMetadata {
    FontMetadata {
        family: find_name(face, name_id::FAMILY),
        subfamily: find_name(face, name_id::SUBFAMILY),
        full_name: find_name(face, name_id::FULL_NAME),
        postscript_name: find_name(face, name_id::POST_SCRIPT_NAME),
        version: find_name(face, name_id::VERSION),
        designer: find_name(face, name_id::DESIGNER),
        designer_url: find_name(face, name_id::DESIGNER_URL),
        manufacturer: find_name(face, name_id::MANUFACTURER),
        manufacturer_url: find_name(face, name_id::VENDOR_URL),
        license: find_name(face, name_id::LICENSE),
        license_url: find_name(face, name_id::LICENSE_URL),
        copyright: find_name(face, name_id::COPYRIGHT_NOTICE),
        trademark: find_name(face, name_id::TRADEMARK),
        unique_id: find_name(face, name_id::UNIQUE_ID),
        preferred_family: find_name(face, name_id::TYPOGRAPHIC_FAMILY),
        preferred_subfamily: find_name(face, name_id::TYPOGRAPHIC_SUBFAMILY),
    }
}

fn find_name(face: &Face, name_id: u16) -> Option<Box<str>> {
    let mut english_other_platform = None;

    for entry in face.names() {
        if entry.name_id != name_id {
            continue;
        }

        let is_preferred_english = (entry.platform_id == PlatformId::Windows
            && entry.encoding_id == 1
            && entry.language_id == 0x0409)
            || (entry.platform_id == PlatformId::Macintosh && entry.language_id == 0);

        let decoded = entry
            .to_string()
            .or_else(|| (entry.platform_id == PlatformId::Macintosh && entry.encoding_id == 0)
                .then(|| decode_mac_roman(entry.name)));

        let Some(decoded) = decoded else { continue };

        if is_preferred_english {
            return Some(decoded.into_boxed_str());
        }
        english_other_platform.get_or_insert(decoded);
    }

    english_other_platform.map(String::into_boxed_str)
}

fn decode_mac_roman(coded: &[u8]) -> String {
    #[rustfmt::skip]
    const TABLE: [char; 128] = [
        'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è',
        'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü',
        '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø',
        '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø',
        '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{a0}', 'À', 'Ã', 'Õ', 'Œ', 'œ',
        '–', '—', '"', '"', '\'', '\'', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ',
        '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô',
        '\u{f8ff}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
    ];

    coded
        .iter()
        .copied()
        .map(|code| if code < 128 { code as char } else { TABLE[(code - 128) as usize] })
        .collect()
}
