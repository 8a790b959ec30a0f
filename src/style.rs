use std::fmt::{self, Display, Formatter};

/// A boolean pattern attribute that can also be left unconstrained.
///
/// Mirrors the C ABI's three-valued `TRUE` / `FALSE` / `DONT_CARE` match
/// kind: a [`Pattern`](crate::Pattern) field set to `DontCare` imposes no
/// filter at all, rather than meaning "false".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    True,
    False,
    #[default]
    DontCare,
}

impl TriState {
    /// Whether a concrete boolean value satisfies this constraint.
    pub fn accepts(self, value: bool) -> bool {
        match self {
            TriState::True => value,
            TriState::False => !value,
            TriState::DontCare => true,
        }
    }

    pub fn is_dont_care(self) -> bool {
        matches!(self, TriState::DontCare)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

/// A font weight, `100..=900` in multiples of 100, with named constants at
/// each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    pub const THIN: Weight = Weight(100);
    pub const EXTRA_LIGHT: Weight = Weight(200);
    pub const LIGHT: Weight = Weight(300);
    pub const NORMAL: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const SEMIBOLD: Weight = Weight(600);
    pub const BOLD: Weight = Weight(700);
    pub const EXTRABOLD: Weight = Weight(800);
    pub const BLACK: Weight = Weight(900);

    /// Clamps to `100..=900`. Does not snap to a multiple of 100 — use
    /// [`Weight::from_os2_weight_class`] when the source is raw `OS/2` data.
    pub fn new(value: u16) -> Self {
        Self(value.clamp(100, 900))
    }

    /// Builds a `Weight` from an `OS/2.usWeightClass` value, clamping to
    /// `100..=900` and snapping to the nearest multiple of 100.
    pub fn from_os2_weight_class(weight_class: u16) -> Self {
        let clamped = weight_class.clamp(100, 900);
        let snapped = ((clamped + 50) / 100) * 100;
        Self(snapped.clamp(100, 900))
    }

    pub fn to_number(self) -> u16 {
        self.0
    }

    /// Distance between two weights, used directly as a matching score.
    pub fn distance(self, other: Weight) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// Whether this weight is considered "bold" for the coarse bold/regular
    /// split some pattern matching and fallback tables use.
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::NORMAL
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A CSS `font-stretch` value, represented the way `@font-face` descriptors
/// and OS/2 `usWidthClass` agree on it: 1 (ultra-condensed) through 9
/// (ultra-expanded), with 5 as normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stretch(u8);

impl Stretch {
    pub const ULTRA_CONDENSED: Stretch = Stretch(1);
    pub const EXTRA_CONDENSED: Stretch = Stretch(2);
    pub const CONDENSED: Stretch = Stretch(3);
    pub const SEMI_CONDENSED: Stretch = Stretch(4);
    pub const NORMAL: Stretch = Stretch(5);
    pub const SEMI_EXPANDED: Stretch = Stretch(6);
    pub const EXPANDED: Stretch = Stretch(7);
    pub const EXTRA_EXPANDED: Stretch = Stretch(8);
    pub const ULTRA_EXPANDED: Stretch = Stretch(9);

    /// Clamps to the valid range of 1–9.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 9))
    }

    /// Builds a `Stretch` from an OS/2 `usWidthClass` (1–9), clamping
    /// out-of-range values the same way `new` does.
    pub fn from_os2_width_class(width_class: u16) -> Self {
        Self::new(width_class.min(9) as u8)
    }

    pub fn to_number(self) -> u8 {
        self.0
    }

    pub fn distance(self, other: Stretch) -> u8 {
        self.0.abs_diff(other.0)
    }

    pub fn is_condensed(self) -> bool {
        self.0 < Self::NORMAL.0
    }
}

impl Default for Stretch {
    fn default() -> Self {
        Stretch::NORMAL
    }
}

impl Display for Stretch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Shape-related attributes read off a font's `head`/`OS/2`/`post` tables.
///
/// Kept as a plain struct of booleans rather than a bitflags type: each flag
/// is looked at individually by the matcher and the parser populates them
/// one at a time from independent table fields, so there's no shared
/// bit-twiddling to hide behind a flags abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StyleFlags {
    pub italic: bool,
    pub oblique: bool,
    pub bold: bool,
    pub monospace: bool,
    pub condensed: bool,
}
