//! Builds minimal, byte-valid single-face TrueType fonts for tests, since
//! no real font files are available to ship alongside this crate.
//!
//! Only the tables `ttf-parser` needs to accept a face are populated:
//! `head`, `hhea`, `maxp`, `hmtx`, `loca`, `glyf` (one empty `.notdef`
//! glyph), `cmap` (format 4, BMP only), `OS/2` (version 4), `name`
//! (format 0), and `post` (version 3, no per-glyph names).

use std::collections::BTreeMap;

const UNITS_PER_EM: u16 = 1000;

/// Describes the font a test wants built; every field has a sensible
/// default via [`SyntheticFont::new`].
pub struct SyntheticFont {
    pub family: String,
    pub subfamily: String,
    pub weight_class: u16,
    pub width_class: u16,
    pub italic: bool,
    pub bold: bool,
    pub fixed_pitch: bool,
    /// BMP codepoints this font claims to cover, via a format-4 `cmap`.
    pub codepoints: Vec<u32>,
    /// When set, omits the `name` and `cmap` tables entirely instead of
    /// emitting empty ones, for testing faces with neither an identity nor
    /// any coverage.
    pub without_identity: bool,
}

impl SyntheticFont {
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            subfamily: "Regular".to_string(),
            weight_class: 400,
            width_class: 5,
            italic: false,
            bold: false,
            fixed_pitch: false,
            codepoints: (0x20..=0x7E).collect(),
            without_identity: false,
        }
    }

    pub fn without_identity(mut self) -> Self {
        self.without_identity = true;
        self.codepoints = Vec::new();
        self
    }

    pub fn weight(mut self, weight_class: u16) -> Self {
        self.weight_class = weight_class;
        self
    }

    pub fn codepoints(mut self, codepoints: Vec<u32>) -> Self {
        self.codepoints = codepoints;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Serializes the font to valid `sfnt` bytes.
    pub fn build(&self) -> Vec<u8> {
        build_sfnt(self)
    }
}

struct Table {
    tag: [u8; 4],
    data: Vec<u8>,
}

fn checksum(data: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut chunks = data.chunks(4);
    for chunk in &mut chunks {
        let mut padded = [0u8; 4];
        padded[..chunk.len()].copy_from_slice(chunk);
        sum = sum.wrapping_add(u32::from_be_bytes(padded));
    }
    sum
}

fn pad4(mut data: Vec<u8>) -> Vec<u8> {
    while data.len() % 4 != 0 {
        data.push(0);
    }
    data
}

fn build_sfnt(font: &SyntheticFont) -> Vec<u8> {
    let mut tables = vec![
        Table { tag: *b"head", data: head_table() },
        Table { tag: *b"hhea", data: hhea_table() },
        Table { tag: *b"maxp", data: maxp_table() },
        Table { tag: *b"hmtx", data: hmtx_table() },
        Table { tag: *b"loca", data: loca_table() },
        Table { tag: *b"glyf", data: glyf_table() },
        Table { tag: *b"OS/2", data: os2_table(font) },
        Table { tag: *b"post", data: post_table() },
    ];

    if !font.without_identity {
        tables.push(Table { tag: *b"cmap", data: cmap_table(&font.codepoints) });
        tables.push(Table { tag: *b"name", data: name_table(font) });
    }

    let mut sorted: BTreeMap<[u8; 4], Vec<u8>> =
        tables.into_iter().map(|t| (t.tag, pad4(t.data))).collect();

    let num_tables = sorted.len() as u16;
    let mut out = Vec::new();

    // Offset subtable.
    out.extend_from_slice(&0x00010000u32.to_be_bytes());
    out.extend_from_slice(&num_tables.to_be_bytes());
    let (search_range, entry_selector, range_shift) = binary_search_params(num_tables);
    out.extend_from_slice(&search_range.to_be_bytes());
    out.extend_from_slice(&entry_selector.to_be_bytes());
    out.extend_from_slice(&range_shift.to_be_bytes());

    let header_len = 12 + 16 * sorted.len();
    let mut offset = header_len;
    let mut directory = Vec::new();
    let mut body = Vec::new();

    for (tag, data) in sorted.iter_mut() {
        let table_checksum = checksum(data);
        directory.push((*tag, table_checksum, offset as u32, data.len() as u32));
        body.extend_from_slice(data);
        offset += data.len();
    }

    for (tag, table_checksum, table_offset, length) in directory {
        out.extend_from_slice(&tag);
        out.extend_from_slice(&table_checksum.to_be_bytes());
        out.extend_from_slice(&table_offset.to_be_bytes());
        out.extend_from_slice(&length.to_be_bytes());
    }

    out.extend_from_slice(&body);
    out
}

fn binary_search_params(num_tables: u16) -> (u16, u16, u16) {
    let mut max_pow2 = 1u16;
    let mut log2 = 0u16;
    while max_pow2 * 2 <= num_tables {
        max_pow2 *= 2;
        log2 += 1;
    }
    let search_range = max_pow2 * 16;
    (search_range, log2, num_tables * 16 - search_range)
}

fn head_table() -> Vec<u8> {
    let mut data = vec![0u8; 54];
    data[0..4].copy_from_slice(&0x00010000u32.to_be_bytes()); // version
    data[4..8].copy_from_slice(&0x00010000u32.to_be_bytes()); // fontRevision
    data[12..16].copy_from_slice(&0x5F0F3CF5u32.to_be_bytes()); // magicNumber
    data[18..20].copy_from_slice(&UNITS_PER_EM.to_be_bytes());
    data[50..52].copy_from_slice(&0i16.to_be_bytes()); // indexToLocFormat: short
    data[52..54].copy_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    data
}

fn hhea_table() -> Vec<u8> {
    let mut data = vec![0u8; 36];
    data[0..4].copy_from_slice(&0x00010000u32.to_be_bytes());
    data[34..36].copy_from_slice(&1u16.to_be_bytes()); // numberOfHMetrics
    data
}

fn maxp_table() -> Vec<u8> {
    let mut data = vec![0u8; 6];
    data[0..4].copy_from_slice(&0x00005000u32.to_be_bytes()); // version 0.5
    data[4..6].copy_from_slice(&1u16.to_be_bytes()); // numGlyphs
    data
}

fn hmtx_table() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&(UNITS_PER_EM / 2).to_be_bytes()); // advanceWidth
    data.extend_from_slice(&0i16.to_be_bytes()); // lsb
    data
}

fn loca_table() -> Vec<u8> {
    // Short format: offsets in units of 2 bytes. One empty glyph.
    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(&0u16.to_be_bytes());
    data
}

fn glyf_table() -> Vec<u8> {
    Vec::new()
}

fn cmap_table(codepoints: &[u32]) -> Vec<u8> {
    let mut bmp: Vec<u16> = codepoints.iter().filter(|&&c| c <= 0xFFFF).map(|&c| c as u16).collect();
    bmp.sort_unstable();
    bmp.dedup();

    let mut segments: Vec<(u16, u16)> = Vec::new();
    for &cp in &bmp {
        match segments.last_mut() {
            Some((_, end)) if cp == *end + 1 => *end = cp,
            _ => segments.push((cp, cp)),
        }
    }
    segments.push((0xFFFF, 0xFFFF));

    let seg_count = segments.len() as u16;
    let seg_count_x2 = seg_count * 2;
    let (search_range, entry_selector, range_shift) = binary_search_params(seg_count);

    let mut end_codes = Vec::new();
    let mut start_codes = Vec::new();
    let mut id_deltas = Vec::new();
    for &(start, end) in &segments {
        end_codes.extend_from_slice(&end.to_be_bytes());
        start_codes.extend_from_slice(&start.to_be_bytes());
        let delta = if start == 0xFFFF && end == 0xFFFF {
            1i16
        } else {
            (0i32 - start as i32) as i16
        };
        id_deltas.extend_from_slice(&delta.to_be_bytes());
    }
    let id_range_offsets = vec![0u8; segments.len() * 2];

    let mut subtable = Vec::new();
    subtable.extend_from_slice(&4u16.to_be_bytes()); // format
    let length_placeholder_index = subtable.len();
    subtable.extend_from_slice(&0u16.to_be_bytes()); // length, patched below
    subtable.extend_from_slice(&0u16.to_be_bytes()); // language
    subtable.extend_from_slice(&seg_count_x2.to_be_bytes());
    subtable.extend_from_slice(&search_range.to_be_bytes());
    subtable.extend_from_slice(&entry_selector.to_be_bytes());
    subtable.extend_from_slice(&range_shift.to_be_bytes());
    subtable.extend_from_slice(&end_codes);
    subtable.extend_from_slice(&0u16.to_be_bytes()); // reservedPad
    subtable.extend_from_slice(&start_codes);
    subtable.extend_from_slice(&id_deltas);
    subtable.extend_from_slice(&id_range_offsets);

    let length = subtable.len() as u16;
    subtable[length_placeholder_index..length_placeholder_index + 2]
        .copy_from_slice(&length.to_be_bytes());

    let mut table = Vec::new();
    table.extend_from_slice(&0u16.to_be_bytes()); // version
    table.extend_from_slice(&1u16.to_be_bytes()); // numTables
    table.extend_from_slice(&3u16.to_be_bytes()); // platformID: Windows
    table.extend_from_slice(&1u16.to_be_bytes()); // encodingID: Unicode BMP
    let subtable_offset = 4 + 8u32;
    table.extend_from_slice(&subtable_offset.to_be_bytes());
    table.extend_from_slice(&subtable);
    table
}

fn os2_table(font: &SyntheticFont) -> Vec<u8> {
    let mut data = vec![0u8; 96];
    data[0..2].copy_from_slice(&0x0004u16.to_be_bytes()); // version 4
    data[4..6].copy_from_slice(&font.weight_class.to_be_bytes());
    data[6..8].copy_from_slice(&font.width_class.to_be_bytes());

    // PANOSE at offset 32, 10 bytes. Byte 3 (proportion): 9 == monospaced.
    if font.fixed_pitch {
        data[32] = 2; // bFamilyType: Latin Text
        data[35] = 9;
    }

    let mut fs_selection: u16 = 0;
    if font.italic {
        fs_selection |= 1 << 0;
    }
    if font.bold {
        fs_selection |= 1 << 5;
    }
    if !font.italic && !font.bold {
        fs_selection |= 1 << 6; // REGULAR
    }
    data[62..64].copy_from_slice(&fs_selection.to_be_bytes());

    data[64..66].copy_from_slice(&0x0020u16.to_be_bytes()); // usFirstCharIndex
    data[66..68].copy_from_slice(&0x007Eu16.to_be_bytes()); // usLastCharIndex
    data
}

fn name_table(font: &SyntheticFont) -> Vec<u8> {
    let full_name = format!("{} {}", font.family, font.subfamily);
    let strings: Vec<(u16, &str)> = vec![
        (1, font.family.as_str()),  // FAMILY
        (2, font.subfamily.as_str()), // SUBFAMILY
        (4, full_name.as_str()),   // FULL_NAME
        (6, full_name.as_str()),   // POST_SCRIPT_NAME (not strictly valid, fine for tests)
    ];

    let mut storage = Vec::new();
    let mut records = Vec::new();
    for (name_id, value) in &strings {
        let utf16: Vec<u8> = value
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();
        records.push((3u16, 1u16, 0x0409u16, *name_id, storage.len() as u16, utf16.len() as u16));
        storage.extend_from_slice(&utf16);
    }

    let mut table = Vec::new();
    table.extend_from_slice(&0u16.to_be_bytes()); // format
    table.extend_from_slice(&(records.len() as u16).to_be_bytes());
    let storage_offset = 6 + 12 * records.len();
    table.extend_from_slice(&(storage_offset as u16).to_be_bytes());

    for (platform_id, encoding_id, language_id, name_id, str_offset, length) in records {
        table.extend_from_slice(&platform_id.to_be_bytes());
        table.extend_from_slice(&encoding_id.to_be_bytes());
        table.extend_from_slice(&language_id.to_be_bytes());
        table.extend_from_slice(&name_id.to_be_bytes());
        table.extend_from_slice(&length.to_be_bytes());
        table.extend_from_slice(&str_offset.to_be_bytes());
    }

    table.extend_from_slice(&storage);
    table
}

fn post_table() -> Vec<u8> {
    let mut data = vec![0u8; 32];
    data[0..4].copy_from_slice(&0x00030000u32.to_be_bytes()); // version 3.0
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_produces_nonempty_bytes_with_valid_magic() {
        let bytes = SyntheticFont::new("Test").build();
        assert_eq!(&bytes[0..4], &0x00010000u32.to_be_bytes());
    }
}
