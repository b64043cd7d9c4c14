//! Glyph codes and glyph tables
//!
//! A glyph is a fixed-width bitmap stored as display columns. Each byte is
//! one column of one bank (8 pixel rows, LSB at the top), which is the
//! native write unit of page-addressed monochrome controllers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symbols a numeric field can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphCode {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Minus,
    Plus,
    Point,
    Blank,
}

impl GlyphCode {
    /// Number of distinct glyph codes
    pub const COUNT: usize = 14;

    /// Glyph for a decimal digit
    ///
    /// Values above 9 map to [`GlyphCode::Blank`].
    pub const fn digit(value: u8) -> Self {
        match value {
            0 => Self::Digit0,
            1 => Self::Digit1,
            2 => Self::Digit2,
            3 => Self::Digit3,
            4 => Self::Digit4,
            5 => Self::Digit5,
            6 => Self::Digit6,
            7 => Self::Digit7,
            8 => Self::Digit8,
            9 => Self::Digit9,
            _ => Self::Blank,
        }
    }

    /// Dense index, usable for table lookups
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is one of the ten digit glyphs
    pub const fn is_digit(self) -> bool {
        self.index() <= Self::Digit9.index()
    }

    /// ASCII rendering, for logs and tests
    pub const fn as_char(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Plus => '+',
            Self::Point => '.',
            Self::Blank => ' ',
            // Digits are contiguous from zero
            digit => (b'0' + digit as u8) as char,
        }
    }
}

/// Measurement units shown next to numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitKind {
    /// Vertical speed, m/s
    MetersPerSecond,
    /// Vertical speed, m/min
    MetersPerMinute,
    /// Ground speed, km/h
    KilometersPerHour,
    /// Glide ratio
    GlideRatio,
}

/// A bitmap borrowed from a glyph table
///
/// `columns` is bank-major: all columns of bank 0, then all columns of
/// bank 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u8,
    height: u8,
    columns: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Create a glyph `width` columns wide and `height` banks tall
    pub const fn new(width: u8, height: u8, columns: &'a [u8]) -> Self {
        Self {
            width,
            height,
            columns,
        }
    }

    /// Width in pixel columns
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in banks
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Columns of one bank row of the glyph
    ///
    /// Returns an empty slice for rows past the glyph height or when the
    /// backing data is short.
    pub fn line(&self, line: u8) -> &'a [u8] {
        let width = usize::from(self.width);
        let start = usize::from(line) * width;
        if line >= self.height {
            return &[];
        }
        self.columns.get(start..start + width).unwrap_or(&[])
    }

    /// One column byte; zero outside the bitmap
    pub fn column(&self, line: u8, col: u8) -> u8 {
        self.line(line).get(usize::from(col)).copied().unwrap_or(0)
    }
}

/// Maps glyph codes to bitmaps
pub trait GlyphTable {
    /// Height of the numeric glyphs in banks
    fn height(&self) -> u8;

    /// Bitmap for a numeric glyph
    fn lookup(&self, code: GlyphCode) -> Glyph<'_>;

    /// Bitmap for a unit label
    fn unit(&self, kind: UnitKind) -> Glyph<'_>;

    /// Total width of a glyph sequence in pixel columns
    fn width_of(&self, codes: &[GlyphCode]) -> u16 {
        codes
            .iter()
            .map(|&code| u16::from(self.lookup(code).width()))
            .sum()
    }

    /// Width of the widest digit glyph
    fn max_digit_width(&self) -> u8 {
        (0..10)
            .map(|d| self.lookup(GlyphCode::digit(d)).width())
            .max()
            .unwrap_or(0)
    }

    /// Width of the widest sign glyph
    fn max_sign_width(&self) -> u8 {
        let minus = self.lookup(GlyphCode::Minus).width();
        let plus = self.lookup(GlyphCode::Plus).width();
        minus.max(plus)
    }
}

impl<T: GlyphTable + ?Sized> GlyphTable for &T {
    fn height(&self) -> u8 {
        (**self).height()
    }

    fn lookup(&self, code: GlyphCode) -> Glyph<'_> {
        (**self).lookup(code)
    }

    fn unit(&self, kind: UnitKind) -> Glyph<'_> {
        (**self).unit(kind)
    }
}
