//! Screen layout
//!
//! Placement of the three numeric readouts and their unit labels. With the
//! `serde` feature a layout can be stored in flash as postcard binary data.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{FieldConfig, UnitPlacement};
use super::ConfigError;
use crate::glyph::{GlyphTable, UnitKind};

/// Maximum unit labels per layout
pub const MAX_UNITS: usize = 4;

/// Complete screen layout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenLayout {
    /// Vertical speed readout
    pub vario: FieldConfig,
    /// Ground speed readout
    pub speed: FieldConfig,
    /// Glide ratio readout
    pub glide_ratio: FieldConfig,
    /// Unit labels
    pub units: Vec<UnitPlacement, MAX_UNITS>,
}

impl Default for ScreenLayout {
    /// Three stacked readouts on an 84 x 48 panel
    fn default() -> Self {
        let mut units = Vec::new();
        // Three labels fit in MAX_UNITS
        let _ = units.push(UnitPlacement::new(UnitKind::MetersPerSecond, 46, 1));
        let _ = units.push(UnitPlacement::new(UnitKind::KilometersPerHour, 42, 3));
        let _ = units.push(UnitPlacement::new(UnitKind::GlideRatio, 46, 5));

        Self {
            vario: FieldConfig::new(0, 0, 1)
                .with_plus_display(true)
                .with_integer_digits(2),
            speed: FieldConfig::new(0, 2, 0).with_integer_digits(3),
            glide_ratio: FieldConfig::new(0, 4, 1).with_integer_digits(2),
            units,
        }
    }
}

impl ScreenLayout {
    /// Numeric fields in drawing order
    pub fn fields(&self) -> [&FieldConfig; 3] {
        [&self.vario, &self.speed, &self.glide_ratio]
    }

    /// Check every field and unit label against the surface
    pub fn validate<G: GlyphTable>(
        &self,
        font: &G,
        dimensions: (u8, u8),
    ) -> Result<(), ConfigError> {
        for field in self.fields() {
            field.validate(font, dimensions)?;
        }
        for unit in &self.units {
            unit.validate(font, dimensions)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl ScreenLayout {
    /// Decode a layout stored as postcard binary data
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }

    /// Encode the layout into `buf`, returning the used part
    pub fn to_slice<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }
}
