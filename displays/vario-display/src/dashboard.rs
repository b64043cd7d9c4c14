//! Vario dashboard
//!
//! The standard vario screen: climb rate, ground speed and glide ratio
//! readouts with their unit labels, all placed by a [`ScreenLayout`].
//!
//! ```text
//! +----------------------------------+
//! | +1.3         m/s                 |
//! |  42          km/h                |
//! |  9.5         GR                  |
//! +----------------------------------+
//! ```

use core::cell::RefCell;

use heapless::Vec;
use vario_core::config::{ConfigError, ScreenLayout, UnitPlacement, MAX_UNITS};
use vario_core::{DisplaySurface, GlyphTable};

use crate::digit::ScreenDigit;
use crate::font::LargeFont;
use crate::unit::UnitOverlay;

/// One set of instrument readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Vertical speed in m/s
    pub climb_rate: f64,
    /// Ground speed in km/h
    pub ground_speed: f64,
    /// Distance covered per height lost
    pub glide_ratio: f64,
}

/// Three readouts and their labels on one surface
pub struct Dashboard<'a, S, G = LargeFont> {
    screen: &'a RefCell<S>,
    vario: ScreenDigit<'a, S, G>,
    speed: ScreenDigit<'a, S, G>,
    glide_ratio: ScreenDigit<'a, S, G>,
    labels: Vec<(UnitOverlay<'a, S, G>, UnitPlacement), MAX_UNITS>,
}

impl<'a, S, G> Dashboard<'a, S, G>
where
    S: DisplaySurface,
    G: GlyphTable + Clone,
{
    /// Build every field and label of `layout`
    ///
    /// The whole layout is checked against the surface before anything is
    /// created. Nothing is drawn until [`refresh`](Self::refresh).
    pub fn new(
        screen: &'a RefCell<S>,
        layout: &ScreenLayout,
        font: G,
    ) -> Result<Self, ConfigError> {
        let dimensions = screen.borrow().dimensions();
        layout.validate(&font, dimensions)?;

        let mut labels = Vec::new();
        for placement in &layout.units {
            let overlay = UnitOverlay::new(screen, placement.kind, font.clone());
            // Same capacity as the layout's unit list
            let _ = labels.push((overlay, *placement));
        }

        Ok(Self {
            screen,
            vario: ScreenDigit::new(screen, layout.vario, font.clone())?,
            speed: ScreenDigit::new(screen, layout.speed, font.clone())?,
            glide_ratio: ScreenDigit::new(screen, layout.glide_ratio, font)?,
            labels,
        })
    }

    /// Clear the surface and draw the unit labels
    ///
    /// The readouts are blank until the next [`update`](Self::update).
    pub fn refresh(&mut self) {
        self.screen.borrow_mut().clear();
        for field in [&mut self.vario, &mut self.speed, &mut self.glide_ratio] {
            field.invalidate();
        }
        self.draw_labels();
    }

    /// Draw every unit label at its placement
    pub fn draw_labels(&self) {
        for (label, placement) in &self.labels {
            label.display(placement.x, placement.y);
        }
    }

    /// Redraw all three readouts
    pub fn update(&mut self, reading: &Reading) {
        self.vario.display(reading.climb_rate);
        self.speed.display(reading.ground_speed);
        self.glide_ratio.display(reading.glide_ratio);
    }

    /// Push pending writes to the panel
    pub fn flush(&self) {
        self.screen.borrow_mut().flush();
    }

    /// Climb rate readout
    pub fn vario(&self) -> &ScreenDigit<'a, S, G> {
        &self.vario
    }

    /// Ground speed readout
    pub fn speed(&self) -> &ScreenDigit<'a, S, G> {
        &self.speed
    }

    /// Glide ratio readout
    pub fn glide_ratio(&self) -> &ScreenDigit<'a, S, G> {
        &self.glide_ratio
    }
}
