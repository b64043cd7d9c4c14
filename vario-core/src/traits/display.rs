//! Display surface trait
//!
//! A surface is addressed in pixel columns (`x`) and banks (`y`, eight
//! pixel rows each). Writes happen in regions: `begin_region` places the
//! cursor, every `write_byte` stores one column byte and advances the
//! cursor by one column, `end_region` closes the region.
//!
//! Failures are not modelled at this level. A bus fault leaves the device
//! faulted, which the concrete surface reports on its own.

use crate::glyph::Glyph;

/// Column/bank addressed block writes
pub trait DisplaySurface {
    /// Open a region at pixel column `x`, bank `y`
    fn begin_region(&mut self, x: u8, y: u8);

    /// Write one column byte and advance the cursor
    fn write_byte(&mut self, column: u8);

    /// Close the current region
    fn end_region(&mut self);

    /// Make all writes visible on the panel
    fn flush(&mut self);

    /// Blank the entire surface
    fn clear(&mut self);

    /// Get the surface dimensions
    ///
    /// Returns (columns, banks)
    fn dimensions(&self) -> (u8, u8);
}

/// Helper trait for drawing glyphs and blank spans
pub trait SurfaceExt: DisplaySurface {
    /// Draw a glyph with its top-left column at (`x`, bank `y`)
    ///
    /// Each bank row of the glyph is written as its own region.
    fn blit(&mut self, x: u8, y: u8, glyph: &Glyph<'_>) {
        for line in 0..glyph.height() {
            self.begin_region(x, y.saturating_add(line));
            for &column in glyph.line(line) {
                self.write_byte(column);
            }
            self.end_region();
        }
    }

    /// Clear `width` columns starting at (`x`, bank `y`), `height` banks tall
    fn blank(&mut self, x: u8, y: u8, width: u8, height: u8) {
        for line in 0..height {
            self.begin_region(x, y.saturating_add(line));
            for _ in 0..width {
                self.write_byte(0x00);
            }
            self.end_region();
        }
    }
}

// Blanket implementation for all DisplaySurface types
impl<T: DisplaySurface + ?Sized> SurfaceExt for T {}
