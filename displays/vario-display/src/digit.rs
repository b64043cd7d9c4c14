//! Incremental numeric field
//!
//! A `ScreenDigit` owns one on-screen number. Every `display` call
//! re-blits all glyphs of the new value, so a panel that lost pixels to
//! supply noise heals on the next update. What the field caches is the
//! width of its last drawing: when the new value is narrower (`12.3` to
//! `1.23` is not, `-5` to `5` is), the trailing columns it no longer covers
//! are blanked first.

use core::cell::RefCell;

use vario_core::config::{ConfigError, FieldConfig};
use vario_core::{Digit, DisplaySurface, FormattedValue, GlyphTable, RenderState, SurfaceExt};

use crate::font::LargeFont;

/// A numeric field at a fixed anchor
pub struct ScreenDigit<'a, S, G = LargeFont> {
    screen: &'a RefCell<S>,
    font: G,
    config: FieldConfig,
    digit: Digit,
    state: RenderState,
}

impl<'a, S, G> ScreenDigit<'a, S, G>
where
    S: DisplaySurface,
    G: GlyphTable,
{
    /// Create a field drawing on `screen`
    ///
    /// Fails if the widest value the field can show would not fit the
    /// surface.
    pub fn new(screen: &'a RefCell<S>, config: FieldConfig, font: G) -> Result<Self, ConfigError> {
        let dimensions = screen.borrow().dimensions();
        if let Err(e) = config.validate(&font, dimensions) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Rejected field at ({}, {}): {:?}", config.anchor_x, config.anchor_y, e);
            return Err(e);
        }

        Ok(Self {
            screen,
            font,
            config,
            digit: config.digit(),
            state: RenderState::new(),
        })
    }

    /// Field configuration
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Redraw bookkeeping
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Forget what is on screen, e.g. after the surface was cleared
    pub fn invalidate(&mut self) {
        self.state.reset();
    }

    /// Draw `value`, blanking columns left over from a wider previous value
    ///
    /// Returns the glyphs drawn.
    pub fn display(&mut self, value: f64) -> FormattedValue {
        let glyphs = self.digit.format(value);
        let width = self.font.width_of(&glyphs);

        let x = self.config.anchor_x;
        let y = self.config.anchor_y;
        let height = self.font.height();

        let mut screen = self.screen.borrow_mut();

        if let Some(fill) = self.state.blank_fill(width) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Blank-fill columns {}..{} at bank {}", fill.start, fill.end, y);

            screen.blank(column(x, fill.start), y, narrow(fill.width()), height);
        }

        let mut offset = 0u16;
        for &code in &glyphs {
            let glyph = self.font.lookup(code);
            screen.blit(column(x, offset), y, &glyph);
            offset += u16::from(glyph.width());
        }

        drop(screen);
        self.state.commit(value, width);

        glyphs
    }
}

/// Pixel column `offset` columns right of `anchor`
///
/// Construction guarantees every drawn column fits in `u8`.
fn column(anchor: u8, offset: u16) -> u8 {
    narrow(u16::from(anchor) + offset)
}

fn narrow(value: u16) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
