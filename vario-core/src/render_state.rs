//! Per-field redraw bookkeeping
//!
//! A field remembers the last value it drew and how many pixel columns
//! that drawing covered. When the next rendering is narrower, the columns
//! it no longer covers still hold stale pixels and must be blanked.

/// Trailing column span to clear, relative to the field anchor
///
/// Covers `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlankFill {
    /// First stale column
    pub start: u16,
    /// One past the last stale column
    pub end: u16,
}

impl BlankFill {
    /// Number of columns to clear
    pub const fn width(&self) -> u16 {
        self.end - self.start
    }
}

/// Cache of the last rendering of one field
///
/// Invariant: `last_width` is the column width of the glyphs drawn for
/// `last_value`, or 0 if nothing has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
    last_value: Option<f64>,
    last_width: u16,
}

impl RenderState {
    /// State of a field that has never been drawn
    pub const fn new() -> Self {
        Self {
            last_value: None,
            last_width: 0,
        }
    }

    /// Last value drawn, if any
    pub const fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Column width of the last drawing
    pub const fn last_width(&self) -> u16 {
        self.last_width
    }

    /// Check if the field has been drawn since creation or reset
    pub const fn has_rendered(&self) -> bool {
        self.last_value.is_some()
    }

    /// Columns left stale by a rendering `new_width` columns wide
    pub fn blank_fill(&self, new_width: u16) -> Option<BlankFill> {
        (new_width < self.last_width).then_some(BlankFill {
            start: new_width,
            end: self.last_width,
        })
    }

    /// Record a completed rendering
    pub fn commit(&mut self, value: f64, width: u16) {
        self.last_value = Some(value);
        self.last_width = width;
    }

    /// Forget the last rendering
    ///
    /// Used after the whole surface was cleared: nothing on screen belongs
    /// to this field any more.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
