//! Number formatting
//!
//! Turns a reading into the glyph sequence a field shows: optional sign,
//! integer digits without leading zeros, then a decimal point and exactly
//! `precision` fraction digits.
//!
//! Rounding is half away from zero on the decimal value. Binary floats
//! cannot hold most decimal ties exactly (`1.005` is stored as
//! `1.00499999...`), so rounding works on the shortest decimal spelling
//! that reads back as the same float: `1.005` rounds up, the float just
//! below `0.5` (spelled `0.49999999999999994`) rounds down.
//!
//! # Limits
//!
//! Formatting is total over `f64`:
//! - Magnitudes that need more integer digits than allowed saturate to the
//!   largest representable magnitude (all nines), keeping the sign.
//!   Infinities saturate the same way.
//! - NaN renders as two minus glyphs, the usual "no reading" marker.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::glyph::{GlyphCode, GlyphTable};

/// Maximum number of fraction digits
pub const MAX_PRECISION: u8 = 6;

/// Maximum number of integer digits
pub const MAX_INTEGER_DIGITS: u8 = 7;

/// Capacity of a formatted value: sign, integer digits, point, fraction
pub const MAX_GLYPHS: usize = 16;

/// Glyphs shown for NaN
const NAN_MARKER: [GlyphCode; 2] = [GlyphCode::Minus, GlyphCode::Minus];

/// Powers of ten up to 10^(MAX_INTEGER_DIGITS + MAX_PRECISION)
const POW10: [u64; 14] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
];

/// Glyph sequence for one rendering, left to right
pub type FormattedValue = Vec<GlyphCode, MAX_GLYPHS>;

/// Format a value with the widest integer range
///
/// Precision above [`MAX_PRECISION`] is clamped.
pub fn format_value(value: f64, precision: u8, plus_display: bool) -> FormattedValue {
    Digit::new(precision, plus_display).format(value)
}

/// Formatting settings for one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit {
    precision: u8,
    plus_display: bool,
    integer_digits: u8,
}

impl Digit {
    /// Create a formatter
    ///
    /// Precision above [`MAX_PRECISION`] is clamped.
    pub const fn new(precision: u8, plus_display: bool) -> Self {
        let precision = if precision > MAX_PRECISION {
            MAX_PRECISION
        } else {
            precision
        };
        Self {
            precision,
            plus_display,
            integer_digits: MAX_INTEGER_DIGITS,
        }
    }

    /// Limit the integer part to `digits` digits, clamped to 1..=7
    ///
    /// Larger magnitudes saturate, so the rendering never grows past the
    /// width the field was laid out for.
    pub const fn with_integer_digits(mut self, digits: u8) -> Self {
        self.integer_digits = if digits == 0 {
            1
        } else if digits > MAX_INTEGER_DIGITS {
            MAX_INTEGER_DIGITS
        } else {
            digits
        };
        self
    }

    /// Number of fraction digits
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// Whether non-negative values get a plus sign
    pub const fn plus_display(&self) -> bool {
        self.plus_display
    }

    /// Maximum number of integer digits
    pub const fn integer_digits(&self) -> u8 {
        self.integer_digits
    }

    /// Largest magnitude this formatter can show, in units of 10^-precision
    fn limit(&self) -> u64 {
        POW10[usize::from(self.integer_digits + self.precision)] - 1
    }

    /// Format a value
    pub fn format(&self, value: f64) -> FormattedValue {
        let mut out = FormattedValue::new();

        if value.is_nan() {
            // Capacity is well above the marker length
            let _ = out.extend_from_slice(&NAN_MARKER);
            return out;
        }

        if value < 0.0 {
            let _ = out.push(GlyphCode::Minus);
        } else if self.plus_display {
            let _ = out.push(GlyphCode::Plus);
        }

        let magnitude = if value < 0.0 { -value } else { value };
        let scaled = self.scaled_magnitude(magnitude);
        let scale = POW10[usize::from(self.precision)];

        push_digits(&mut out, scaled / scale, 1);

        if self.precision > 0 {
            let _ = out.push(GlyphCode::Point);
            push_digits(&mut out, scaled % scale, self.precision);
        }

        out
    }

    /// Widest rendering this formatter can produce with `font`, in columns
    pub fn max_width<G: GlyphTable>(&self, font: &G) -> u16 {
        let digit = u16::from(font.max_digit_width());
        let mut width = u16::from(font.max_sign_width()) + u16::from(self.integer_digits) * digit;
        if self.precision > 0 {
            width += u16::from(font.lookup(GlyphCode::Point).width());
            width += u16::from(self.precision) * digit;
        }
        width.max(font.width_of(&NAN_MARKER))
    }

    /// Round `|value| * 10^precision` half away from zero, saturating
    fn scaled_magnitude(&self, magnitude: f64) -> u64 {
        let limit = self.limit();
        if magnitude.is_infinite() {
            return limit;
        }

        let scaled = magnitude * POW10[usize::from(self.precision)] as f64;
        if scaled >= limit as f64 + 1.0 {
            return limit;
        }
        if magnitude < NEGLIGIBLE {
            return 0;
        }

        let rounded = match round_decimal(magnitude, self.precision) {
            Some(rounded) => rounded,
            // In range: below 10^13, so the conversion is exact
            None => (scaled + 0.5) as u64,
        };

        rounded.min(limit)
    }
}

/// Magnitudes below this round to zero at every precision
const NEGLIGIBLE: f64 = 1.0e-8;

/// Shortest decimal spelling of an in-range, non-negligible magnitude
type Spelling = String<48>;

/// Round the shortest decimal spelling of `magnitude` to `precision`
/// fraction digits, half away from zero
///
/// Returns the result in units of 10^-precision, or `None` if the spelling
/// does not fit.
fn round_decimal(magnitude: f64, precision: u8) -> Option<u64> {
    let mut spelling = Spelling::new();
    write!(spelling, "{}", magnitude).ok()?;

    let (integer, fraction) = match spelling.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (spelling.as_str(), ""),
    };

    let mut value: u64 = 0;
    for b in integer.bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(b.checked_sub(b'0')?))?;
    }

    let mut fraction = fraction.bytes();
    for _ in 0..precision {
        let digit = fraction.next().map_or(0, |b| b.saturating_sub(b'0'));
        value = value.checked_mul(10)?.checked_add(u64::from(digit))?;
    }

    // The first dropped digit decides: 5 and above is at least half
    match fraction.next() {
        Some(b) if b >= b'5' => value.checked_add(1),
        _ => Some(value),
    }
}

/// Push the decimal digits of `value`, zero-padded to `min_digits`
fn push_digits(out: &mut FormattedValue, mut value: u64, min_digits: u8) {
    let mut buf = [0u8; 20];
    let mut len = 0;

    while value > 0 || len < usize::from(min_digits) {
        buf[len] = (value % 10) as u8;
        value /= 10;
        len += 1;
    }

    for &d in buf[..len].iter().rev() {
        let _ = out.push(GlyphCode::digit(d));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GlyphCode::*;

    fn render(value: f64, precision: u8, plus: bool) -> heapless::String<MAX_GLYPHS> {
        format_value(value, precision, plus)
            .iter()
            .map(|g| g.as_char())
            .collect()
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(
            format_value(12.345, 2, false).as_slice(),
            &[Digit1, Digit2, Point, Digit3, Digit5]
        );
        assert_eq!(render(2.5, 0, false), "3");
        assert_eq!(render(-2.5, 0, false), "-3");
        assert_eq!(render(0.125, 2, false), "0.13");
        assert_eq!(render(1.005, 2, false), "1.01");
        assert_eq!(render(2.4999, 0, false), "2");
    }

    #[test]
    fn test_values_just_below_a_tie_round_down() {
        assert_eq!(render(0.49999999999999994, 0, false), "0");
        assert_eq!(render(2.4999999999999996, 0, false), "2");
        assert_eq!(render(1234567.123456499, 6, false), "1234567.123456");
        assert_eq!(render(-2.4999999999999996, 0, false), "-2");
    }

    #[test]
    fn test_round_decimal_carries() {
        assert_eq!(round_decimal(9.96, 1), Some(100));
        assert_eq!(round_decimal(0.95, 1), Some(10));
        assert_eq!(round_decimal(3.0, 3), Some(3000));
        assert_eq!(round_decimal(1.0e-7, 6), Some(0));
    }

    #[test]
    fn test_fraction_is_zero_padded() {
        assert_eq!(format_value(1.2, 2, false).as_slice(), &[Digit1, Point, Digit2, Digit0]);
        assert_eq!(render(3.0, 3, false), "3.000");
        assert_eq!(render(0.05, 2, false), "0.05");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(format_value(-5.0, 0, false).as_slice(), &[Minus, Digit5]);
        assert_eq!(format_value(0.0, 1, true).as_slice(), &[Plus, Digit0, Point, Digit0]);
        assert_eq!(render(0.0, 0, false), "0");
        assert_eq!(render(-0.0, 1, false), "0.0");
        assert_eq!(render(4.2, 1, true), "+4.2");
        assert_eq!(render(-4.2, 1, true), "-4.2");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(render(-0.001, 1, false), "-0.0");
    }

    #[test]
    fn test_no_leading_zeros() {
        assert_eq!(render(100.0, 0, false), "100");
        assert_eq!(render(0.7, 1, false), "0.7");
        assert_eq!(render(1234567.0, 0, false), "1234567");
    }

    #[test]
    fn test_saturates_out_of_range() {
        assert_eq!(render(1.0e9, 0, false), "9999999");
        assert_eq!(render(-1.0e9, 1, false), "-9999999.9");
        assert_eq!(render(9_999_999.5, 0, false), "9999999");
        assert_eq!(render(f64::INFINITY, 1, true), "+9999999.9");
        assert_eq!(render(f64::NEG_INFINITY, 0, false), "-9999999");
    }

    #[test]
    fn test_integer_digit_limit() {
        let digit = Digit::new(1, false).with_integer_digits(2);
        let text: heapless::String<MAX_GLYPHS> =
            digit.format(123.4).iter().map(|g| g.as_char()).collect();
        assert_eq!(text, "99.9");

        assert_eq!(Digit::new(0, false).with_integer_digits(0).integer_digits(), 1);
        assert_eq!(
            Digit::new(0, false).with_integer_digits(9).integer_digits(),
            MAX_INTEGER_DIGITS
        );
    }

    #[test]
    fn test_nan_marker() {
        assert_eq!(format_value(f64::NAN, 2, true).as_slice(), &[Minus, Minus]);
    }

    #[test]
    fn test_precision_is_clamped() {
        let digit = Digit::new(9, false);
        assert_eq!(digit.precision(), MAX_PRECISION);
        assert_eq!(render(1.0, 9, false), "1.000000");
    }

    #[test]
    fn test_widest_rendering_fits_capacity() {
        let widest = format_value(-1.0e12, MAX_PRECISION, false);
        let expected = 1 + usize::from(MAX_INTEGER_DIGITS) + 1 + usize::from(MAX_PRECISION);
        assert_eq!(widest.len(), expected);
        assert!(widest.len() <= MAX_GLYPHS);
    }
}
