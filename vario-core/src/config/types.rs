//! Field configuration types
//!
//! These types describe where a numeric field or unit label sits on the
//! surface and how a field formats its value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::format::{Digit, MAX_INTEGER_DIGITS, MAX_PRECISION};
use crate::glyph::{GlyphTable, UnitKind};

/// Integer digits reserved by [`FieldConfig::new`]
pub const DEFAULT_INTEGER_DIGITS: u8 = 3;

/// Numeric field configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Left pixel column
    pub anchor_x: u8,
    /// Top bank
    pub anchor_y: u8,
    /// Fraction digits
    pub precision: u8,
    /// Show a plus sign for non-negative values
    pub plus_display: bool,
    /// Integer digits the field reserves room for
    ///
    /// Larger readings saturate to all nines.
    pub integer_digits: u8,
}

impl FieldConfig {
    /// Create a field at (`anchor_x`, bank `anchor_y`)
    pub const fn new(anchor_x: u8, anchor_y: u8, precision: u8) -> Self {
        Self {
            anchor_x,
            anchor_y,
            precision,
            plus_display: false,
            integer_digits: DEFAULT_INTEGER_DIGITS,
        }
    }

    /// Enable or disable the plus sign
    pub const fn with_plus_display(mut self, plus_display: bool) -> Self {
        self.plus_display = plus_display;
        self
    }

    /// Set the number of integer digits
    pub const fn with_integer_digits(mut self, integer_digits: u8) -> Self {
        self.integer_digits = integer_digits;
        self
    }

    /// Formatter for this field
    pub const fn digit(&self) -> Digit {
        Digit::new(self.precision, self.plus_display).with_integer_digits(self.integer_digits)
    }

    /// Widest rendering of this field with `font`, in columns
    pub fn max_width<G: GlyphTable>(&self, font: &G) -> u16 {
        self.digit().max_width(font)
    }

    /// Check that every rendering of this field fits the surface
    ///
    /// `dimensions` is (columns, banks), as reported by the surface.
    pub fn validate<G: GlyphTable>(
        &self,
        font: &G,
        dimensions: (u8, u8),
    ) -> Result<(), ConfigError> {
        let (columns, banks) = dimensions;

        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge);
        }
        if self.integer_digits == 0 || self.integer_digits > MAX_INTEGER_DIGITS {
            return Err(ConfigError::InvalidIntegerDigits);
        }
        if u16::from(self.anchor_x) + self.max_width(font) > u16::from(columns) {
            return Err(ConfigError::FieldTooWide);
        }
        if u16::from(self.anchor_y) + u16::from(font.height()) > u16::from(banks) {
            return Err(ConfigError::FieldTooTall);
        }

        Ok(())
    }
}

/// Unit label position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitPlacement {
    /// Which unit label
    pub kind: UnitKind,
    /// Left pixel column
    pub x: u8,
    /// Top bank
    pub y: u8,
}

impl UnitPlacement {
    /// Create a placement
    pub const fn new(kind: UnitKind, x: u8, y: u8) -> Self {
        Self { kind, x, y }
    }

    /// Check that the label fits the surface
    pub fn validate<G: GlyphTable>(
        &self,
        font: &G,
        dimensions: (u8, u8),
    ) -> Result<(), ConfigError> {
        let (columns, banks) = dimensions;
        let glyph = font.unit(self.kind);

        let right = u16::from(self.x) + u16::from(glyph.width());
        let bottom = u16::from(self.y) + u16::from(glyph.height());
        if right > u16::from(columns) || bottom > u16::from(banks) {
            return Err(ConfigError::UnitOutOfBounds);
        }

        Ok(())
    }
}
