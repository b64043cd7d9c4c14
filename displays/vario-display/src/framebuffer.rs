//! Bank-organized frame buffer
//!
//! In-memory image of a page-addressed monochrome panel. Each byte is one
//! column of one bank, LSB at the top. The region cursor behaves like the
//! controller's horizontal addressing mode: it advances one column per
//! byte and wraps to column 0 of the next bank past the right edge.

use core::ops::Range;

use vario_core::DisplaySurface;

/// Frame buffer for a `COLUMNS` x (`BANKS` * 8) panel
#[derive(Clone)]
pub struct FrameBuffer<const COLUMNS: usize, const BANKS: usize> {
    /// Pixel data, one array per bank
    banks: [[u8; COLUMNS]; BANKS],
    /// Write cursor (column, bank) while a region is open
    cursor: Option<(usize, usize)>,
    /// Written column span per bank since the last flush
    dirty: [Option<(usize, usize)>; BANKS],
}

impl<const COLUMNS: usize, const BANKS: usize> Default for FrameBuffer<COLUMNS, BANKS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLUMNS: usize, const BANKS: usize> FrameBuffer<COLUMNS, BANKS> {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            banks: [[0; COLUMNS]; BANKS],
            cursor: None,
            dirty: [None; BANKS],
        }
    }

    /// Pixel data of one bank
    pub fn bank(&self, bank: usize) -> Option<&[u8; COLUMNS]> {
        self.banks.get(bank)
    }

    /// Check if the pixel at (`x`, `y`) is set
    ///
    /// `y` is in pixel rows. Out-of-range coordinates read as unset.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.banks
            .get(y / 8)
            .and_then(|bank| bank.get(x))
            .is_some_and(|&column| column & (1 << (y % 8)) != 0)
    }

    /// Check if any bank was written since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(Option::is_some)
    }

    /// Columns of `bank` written since the last flush
    pub fn dirty_span(&self, bank: usize) -> Option<Range<usize>> {
        self.dirty
            .get(bank)
            .copied()
            .flatten()
            .map(|(start, end)| start..end)
    }

    /// Mark every bank as sent
    pub fn mark_clean(&mut self) {
        self.dirty = [None; BANKS];
    }

    fn mark_dirty(&mut self, bank: usize, start: usize, end: usize) {
        if let Some(span) = self.dirty.get_mut(bank) {
            *span = match *span {
                Some((s, e)) => Some((s.min(start), e.max(end))),
                None => Some((start, end)),
            };
        }
    }
}

impl<const COLUMNS: usize, const BANKS: usize> DisplaySurface for FrameBuffer<COLUMNS, BANKS> {
    fn begin_region(&mut self, x: u8, y: u8) {
        self.cursor = Some((usize::from(x), usize::from(y)));
    }

    fn write_byte(&mut self, column: u8) {
        let Some((x, bank)) = self.cursor else {
            return;
        };

        if let Some(slot) = self.banks.get_mut(bank).and_then(|b| b.get_mut(x)) {
            *slot = column;
            self.mark_dirty(bank, x, x + 1);
        }

        self.cursor = if x + 1 >= COLUMNS {
            Some((0, bank + 1))
        } else {
            Some((x + 1, bank))
        };
    }

    fn end_region(&mut self) {
        self.cursor = None;
    }

    fn flush(&mut self) {
        self.mark_clean();
    }

    fn clear(&mut self) {
        for bank in self.banks.iter_mut() {
            bank.fill(0);
        }
        for bank in 0..BANKS {
            self.mark_dirty(bank, 0, COLUMNS);
        }
    }

    fn dimensions(&self) -> (u8, u8) {
        (
            u8::try_from(COLUMNS).unwrap_or(u8::MAX),
            u8::try_from(BANKS).unwrap_or(u8::MAX),
        )
    }
}
