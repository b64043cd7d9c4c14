//! Built-in glyph font
//!
//! Large 16-pixel digits (two banks) for the readouts and 7-pixel unit
//! labels (one bank) that sit on the lower bank of a readout.
//!
//! Digits are 9 columns plus one spacing column. Signs are 7 plus one,
//! the decimal point 3 plus one.

use vario_core::{Glyph, GlyphCode, GlyphTable, UnitKind};

/// Height of the numeric glyphs in banks
pub const LARGE_HEIGHT: u8 = 2;

/// Digit cell width, including spacing
pub const DIGIT_WIDTH: u8 = 10;

/// Sign cell width, including spacing
pub const SIGN_WIDTH: u8 = 8;

/// Decimal point cell width, including spacing
pub const POINT_WIDTH: u8 = 4;

/// The panel font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LargeFont;

impl GlyphTable for LargeFont {
    fn height(&self) -> u8 {
        LARGE_HEIGHT
    }

    fn lookup(&self, code: GlyphCode) -> Glyph<'_> {
        let columns: &'static [u8] = match code {
            GlyphCode::Digit0 => &DIGIT_0,
            GlyphCode::Digit1 => &DIGIT_1,
            GlyphCode::Digit2 => &DIGIT_2,
            GlyphCode::Digit3 => &DIGIT_3,
            GlyphCode::Digit4 => &DIGIT_4,
            GlyphCode::Digit5 => &DIGIT_5,
            GlyphCode::Digit6 => &DIGIT_6,
            GlyphCode::Digit7 => &DIGIT_7,
            GlyphCode::Digit8 => &DIGIT_8,
            GlyphCode::Digit9 => &DIGIT_9,
            GlyphCode::Minus => &MINUS,
            GlyphCode::Plus => &PLUS,
            GlyphCode::Point => &POINT,
            GlyphCode::Blank => &BLANK,
        };
        let width = match code {
            GlyphCode::Minus | GlyphCode::Plus => SIGN_WIDTH,
            GlyphCode::Point => POINT_WIDTH,
            _ => DIGIT_WIDTH,
        };
        Glyph::new(width, LARGE_HEIGHT, columns)
    }

    fn unit(&self, kind: UnitKind) -> Glyph<'_> {
        let columns: &'static [u8] = match kind {
            UnitKind::MetersPerSecond => &UNIT_MS,
            UnitKind::MetersPerMinute => &UNIT_MMIN,
            UnitKind::KilometersPerHour => &UNIT_KMH,
            UnitKind::GlideRatio => &UNIT_GR,
        };
        // Labels are at most 29 columns
        Glyph::new(columns.len() as u8, 1, columns)
    }
}

const BLANK: [u8; 20] = [0; 20];

const DIGIT_0: [u8; 20] = [
    0xFC, 0xFE, 0x03, 0x81, 0xC1, 0x61, 0x33, 0xFE, 0xFC, 0x00, 0x1F, 0x3F,
    0x63, 0x41, 0x40, 0x40, 0x60, 0x3F, 0x1F, 0x00,
];

const DIGIT_1: [u8; 20] = [
    0x00, 0x08, 0x0C, 0x06, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
    0x40, 0x40, 0x7F, 0x7F, 0x40, 0x40, 0x00, 0x00,
];

const DIGIT_2: [u8; 20] = [
    0x04, 0x06, 0x03, 0x01, 0x81, 0xC1, 0x63, 0x3E, 0x1C, 0x00, 0x78, 0x7C,
    0x46, 0x43, 0x41, 0x40, 0x40, 0x40, 0x40, 0x00,
];

const DIGIT_3: [u8; 20] = [
    0x04, 0x06, 0x43, 0x41, 0x41, 0x41, 0xE3, 0xBE, 0x1C, 0x00, 0x18, 0x38,
    0x60, 0x40, 0x40, 0x40, 0x60, 0x3F, 0x1F, 0x00,
];

const DIGIT_4: [u8; 20] = [
    0xE0, 0xF0, 0x98, 0x8C, 0x86, 0x83, 0xFF, 0xFF, 0x80, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x7F, 0x7F, 0x00, 0x00,
];

const DIGIT_5: [u8; 20] = [
    0x3F, 0x3F, 0x21, 0x21, 0x21, 0x21, 0x61, 0xC1, 0x81, 0x00, 0x18, 0x38,
    0x60, 0x40, 0x40, 0x40, 0x60, 0x3F, 0x1F, 0x00,
];

const DIGIT_6: [u8; 20] = [
    0xF8, 0xFC, 0x46, 0x23, 0x21, 0x21, 0x61, 0xE0, 0x80, 0x00, 0x1F, 0x3F,
    0x60, 0x40, 0x40, 0x40, 0x60, 0x3F, 0x1F, 0x00,
];

const DIGIT_7: [u8; 20] = [
    0x01, 0x01, 0x01, 0x01, 0x81, 0xE1, 0x79, 0x1F, 0x07, 0x00, 0x00, 0x00,
    0x00, 0x7E, 0x7F, 0x01, 0x00, 0x00, 0x00, 0x00,
];

const DIGIT_8: [u8; 20] = [
    0x1C, 0xBE, 0xE3, 0x41, 0x41, 0x41, 0xE3, 0xBE, 0x1C, 0x00, 0x1F, 0x3F,
    0x60, 0x40, 0x40, 0x40, 0x60, 0x3F, 0x1F, 0x00,
];

const DIGIT_9: [u8; 20] = [
    0x7C, 0xFE, 0x83, 0x01, 0x01, 0x01, 0x83, 0xFE, 0xFC, 0x00, 0x00, 0x00,
    0x41, 0x41, 0x41, 0x61, 0x31, 0x1E, 0x0F, 0x00,
];

const MINUS: [u8; 16] = [
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x00,
];

const PLUS: [u8; 16] = [
    0x80, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x01, 0x01, 0x01, 0x0F,
    0x01, 0x01, 0x01, 0x00,
];

const POINT: [u8; 8] = [
    0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00,
];

const UNIT_MS: [u8; 17] = [
    0x7C, 0x04, 0x78, 0x04, 0x78, 0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00,
    0x48, 0x54, 0x54, 0x54, 0x24,
];

const UNIT_MMIN: [u8; 29] = [
    0x7C, 0x04, 0x78, 0x04, 0x78, 0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00,
    0x7C, 0x04, 0x78, 0x04, 0x78, 0x00, 0x00, 0x44, 0x7D, 0x40, 0x00, 0x00,
    0x7C, 0x08, 0x04, 0x04, 0x78,
];

const UNIT_KMH: [u8; 23] = [
    0x7F, 0x10, 0x28, 0x44, 0x00, 0x00, 0x7C, 0x04, 0x78, 0x04, 0x78, 0x00,
    0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x7F, 0x08, 0x04, 0x04, 0x78,
];

const UNIT_GR: [u8; 11] = [
    0x3E, 0x41, 0x49, 0x49, 0x3A, 0x00, 0x7F, 0x09, 0x19, 0x29, 0x46,
];

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [GlyphCode; GlyphCode::COUNT] = [
        GlyphCode::Digit0,
        GlyphCode::Digit1,
        GlyphCode::Digit2,
        GlyphCode::Digit3,
        GlyphCode::Digit4,
        GlyphCode::Digit5,
        GlyphCode::Digit6,
        GlyphCode::Digit7,
        GlyphCode::Digit8,
        GlyphCode::Digit9,
        GlyphCode::Minus,
        GlyphCode::Plus,
        GlyphCode::Point,
        GlyphCode::Blank,
    ];

    #[test]
    fn test_every_glyph_has_full_data() {
        let font = LargeFont;
        for code in CODES {
            let glyph = font.lookup(code);
            for line in 0..glyph.height() {
                assert_eq!(glyph.line(line).len(), usize::from(glyph.width()), "{:?}", code);
            }
        }
    }

    #[test]
    fn test_spacing_column_is_empty() {
        let font = LargeFont;
        for code in CODES {
            let glyph = font.lookup(code);
            let last = glyph.width() - 1;
            for line in 0..glyph.height() {
                assert_eq!(glyph.column(line, last), 0, "{:?}", code);
            }
        }
    }

    #[test]
    fn test_blank_is_digit_wide_and_empty() {
        let glyph = LargeFont.lookup(GlyphCode::Blank);
        assert_eq!(glyph.width(), DIGIT_WIDTH);
        assert!(glyph.line(0).iter().chain(glyph.line(1)).all(|&c| c == 0));
    }

    #[test]
    fn test_widths() {
        let font = LargeFont;
        assert_eq!(font.max_digit_width(), DIGIT_WIDTH);
        assert_eq!(font.max_sign_width(), SIGN_WIDTH);
        assert_eq!(
            font.width_of(&[GlyphCode::Digit1, GlyphCode::Point, GlyphCode::Digit2]),
            24
        );
    }

    #[test]
    fn test_unit_labels_are_one_bank() {
        let font = LargeFont;
        for kind in [
            UnitKind::MetersPerSecond,
            UnitKind::MetersPerMinute,
            UnitKind::KilometersPerHour,
            UnitKind::GlideRatio,
        ] {
            let glyph = font.unit(kind);
            assert_eq!(glyph.height(), 1);
            assert!(glyph.width() > 0);
            assert_eq!(glyph.line(0).len(), usize::from(glyph.width()));
        }
        assert_eq!(font.unit(UnitKind::MetersPerSecond).width(), 17);
        assert_eq!(font.unit(UnitKind::KilometersPerHour).width(), 23);
    }
}
