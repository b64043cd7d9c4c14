//! Unit labels
//!
//! Labels are static: they are drawn once after the surface is cleared and
//! never touched by field updates.

use core::cell::RefCell;

use vario_core::config::{ConfigError, UnitPlacement};
use vario_core::{DisplaySurface, GlyphTable, SurfaceExt, UnitKind};

use crate::font::LargeFont;

/// A unit label bound to a surface
pub struct UnitOverlay<'a, S, G = LargeFont> {
    screen: &'a RefCell<S>,
    font: G,
    kind: UnitKind,
}

impl<'a, S, G> UnitOverlay<'a, S, G>
where
    S: DisplaySurface,
    G: GlyphTable,
{
    /// Create a label of `kind`
    pub fn new(screen: &'a RefCell<S>, kind: UnitKind, font: G) -> Self {
        Self { screen, font, kind }
    }

    /// Unit this label shows
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Label width in columns
    pub fn width(&self) -> u8 {
        self.font.unit(self.kind).width()
    }

    /// Draw the label with its top-left column at (`x`, bank `y`)
    pub fn display(&self, x: u8, y: u8) {
        let glyph = self.font.unit(self.kind);
        self.screen.borrow_mut().blit(x, y, &glyph);
    }

    /// Draw the label at a configured placement
    ///
    /// The placement must name this label's unit and fit the surface.
    pub fn display_at(&self, placement: &UnitPlacement) -> Result<(), ConfigError> {
        if placement.kind != self.kind {
            return Err(ConfigError::UnitOutOfBounds);
        }
        let dimensions = self.screen.borrow().dimensions();
        placement.validate(&self.font, dimensions)?;

        self.display(placement.x, placement.y);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    type Panel = FrameBuffer<84, 6>;

    #[test]
    fn test_label_is_drawn_once_per_bank() {
        let screen = RefCell::new(Panel::new());
        let label = UnitOverlay::new(&screen, UnitKind::MetersPerSecond, LargeFont);

        label.display(46, 1);

        let fb = screen.borrow();
        let width = usize::from(label.width());
        assert_eq!(fb.dirty_span(1), Some(46..46 + width));
        assert_eq!(fb.dirty_span(0), None);
        assert!(fb.bank(1).unwrap()[46..46 + width].iter().any(|&c| c != 0));
    }

    #[test]
    fn test_every_unit_has_a_label() {
        let screen = RefCell::new(Panel::new());
        for kind in [
            UnitKind::MetersPerSecond,
            UnitKind::MetersPerMinute,
            UnitKind::KilometersPerHour,
            UnitKind::GlideRatio,
        ] {
            let label = UnitOverlay::new(&screen, kind, LargeFont);
            assert!(label.width() > 0);
            assert_eq!(label.kind(), kind);
        }
    }

    #[test]
    fn test_display_at_checks_placement() {
        let screen = RefCell::new(Panel::new());
        let label = UnitOverlay::new(&screen, UnitKind::GlideRatio, LargeFont);

        assert_eq!(
            label.display_at(&UnitPlacement::new(UnitKind::GlideRatio, 46, 5)),
            Ok(())
        );
        assert_eq!(
            label.display_at(&UnitPlacement::new(UnitKind::GlideRatio, 80, 5)),
            Err(ConfigError::UnitOutOfBounds)
        );
        assert_eq!(
            label.display_at(&UnitPlacement::new(UnitKind::MetersPerSecond, 0, 0)),
            Err(ConfigError::UnitOutOfBounds)
        );
    }
}
