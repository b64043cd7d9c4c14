//! Property-based tests for number formatting.

use vario_core::format::{format_value, Digit, MAX_GLYPHS, MAX_PRECISION};
use vario_core::GlyphCode;

fn fraction_digits(glyphs: &[GlyphCode]) -> Option<usize> {
    glyphs
        .iter()
        .position(|&g| g == GlyphCode::Point)
        .map(|point| glyphs.len() - point - 1)
}

proptest::proptest! {
    /// Formatting the same reading twice gives the same glyphs.
    #[test]
    fn format_is_deterministic(
        value in proptest::num::f64::ANY,
        precision in 0u8..=MAX_PRECISION,
        plus in proptest::bool::ANY
    ) {
        let a = format_value(value, precision, plus);
        let b = format_value(value, precision, plus);
        proptest::prop_assert_eq!(a, b);
    }

    /// Precision 0 never shows a decimal point.
    #[test]
    fn precision_zero_has_no_point(value in -1.0e6f64..1.0e6, plus in proptest::bool::ANY) {
        let glyphs = format_value(value, 0, plus);
        proptest::prop_assert!(!glyphs.contains(&GlyphCode::Point));
    }

    /// Precision p shows exactly p digits after the point.
    #[test]
    fn precision_sets_fraction_digits(
        value in -1.0e6f64..1.0e6,
        precision in 1u8..=MAX_PRECISION,
        plus in proptest::bool::ANY
    ) {
        let glyphs = format_value(value, precision, plus);
        proptest::prop_assert_eq!(fraction_digits(&glyphs), Some(usize::from(precision)));

        let point = glyphs.iter().position(|&g| g == GlyphCode::Point).unwrap_or(0);
        proptest::prop_assert!(glyphs[point + 1..].iter().all(|g| g.is_digit()));
    }

    /// Without plus display, no plus sign ever appears.
    #[test]
    fn no_plus_without_plus_display(
        value in proptest::num::f64::ANY,
        precision in 0u8..=MAX_PRECISION
    ) {
        let glyphs = format_value(value, precision, false);
        proptest::prop_assert!(!glyphs.contains(&GlyphCode::Plus));
    }

    /// Finite non-negative readings get a plus exactly when plus display is on.
    #[test]
    fn plus_display_marks_non_negative(value in 0.0f64..1.0e6, precision in 0u8..=MAX_PRECISION) {
        let glyphs = format_value(value, precision, true);
        proptest::prop_assert_eq!(glyphs.first().copied(), Some(GlyphCode::Plus));
    }

    /// Negative readings always start with a minus.
    #[test]
    fn negative_starts_with_minus(
        value in -1.0e6f64..-1.0e-9,
        precision in 0u8..=MAX_PRECISION,
        plus in proptest::bool::ANY
    ) {
        let glyphs = format_value(value, precision, plus);
        proptest::prop_assert_eq!(glyphs.first().copied(), Some(GlyphCode::Minus));
    }

    /// The integer part never has a leading zero unless it is zero itself.
    #[test]
    fn no_leading_zero(value in -1.0e6f64..1.0e6, precision in 0u8..=MAX_PRECISION) {
        let glyphs = format_value(value, precision, false);
        let digits: Vec<GlyphCode> = glyphs
            .iter()
            .copied()
            .skip_while(|&g| g == GlyphCode::Minus)
            .take_while(|g| g.is_digit())
            .collect();
        proptest::prop_assert!(!digits.is_empty());
        if digits.len() > 1 {
            proptest::prop_assert_ne!(digits[0], GlyphCode::Digit0);
        }
    }

    /// The glyph count never exceeds the field's worst case.
    #[test]
    fn glyph_count_is_bounded(
        value in proptest::num::f64::ANY,
        precision in 0u8..=MAX_PRECISION,
        digits in 1u8..=7,
        plus in proptest::bool::ANY
    ) {
        let digit = Digit::new(precision, plus).with_integer_digits(digits);
        let glyphs = digit.format(value);
        let point = usize::from(precision > 0);
        let worst = 1 + usize::from(digits) + point + usize::from(precision);
        proptest::prop_assert!(glyphs.len() <= worst);
        proptest::prop_assert!(glyphs.len() <= MAX_GLYPHS);
    }
}
