//! Configuration types
//!
//! Field geometry and screen layout. Everything here is validated once
//! when a field is set up; rendering never re-checks it.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Precision above `MAX_PRECISION`
    PrecisionTooLarge,
    /// Integer digit count of zero or above `MAX_INTEGER_DIGITS`
    InvalidIntegerDigits,
    /// Widest rendering runs past the right edge
    FieldTooWide,
    /// Glyph rows run past the bottom bank
    FieldTooTall,
    /// Unit label does not fit on the surface
    UnitOutOfBounds,
    /// Stored layout could not be decoded
    Deserialize,
    /// Layout does not fit the output buffer
    Serialize,
}
