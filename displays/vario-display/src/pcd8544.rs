//! PCD8544 LCD surface
//!
//! Surface for 84x48 PCD8544-based LCDs (Nokia 5110 class) via SPI.
//! Region writes land in a local frame buffer; `flush` sends each bank's
//! written span with one X/Y address burst followed by the data.
//!
//! The controller must already be powered up and configured (extended
//! instruction set, bias, contrast, normal display mode) by the board
//! bring-up code.

use vario_core::DisplaySurface;
use vario_hal::{OutputPin, SpiBus};

use crate::framebuffer::FrameBuffer;

/// Display dimensions
pub const WIDTH: usize = 84;
pub const BANKS: usize = 6;

/// PCD8544 basic instruction set, addressing subset
mod cmd {
    pub const SET_Y_ADDR: u8 = 0x40;
    pub const SET_X_ADDR: u8 = 0x80;
}

/// Bus errors latched by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Address command transfer failed
    Command,
    /// Pixel data transfer failed
    Data,
}

/// PCD8544 LCD surface
pub struct Pcd8544<SPI, DC> {
    spi: SPI,
    /// Data/command select: low for commands, high for pixel data
    dc: DC,
    frame: FrameBuffer<WIDTH, BANKS>,
    fault: Option<BusFault>,
}

impl<SPI, DC> Pcd8544<SPI, DC>
where
    SPI: SpiBus,
    DC: OutputPin,
{
    /// Create a new surface on an initialized controller
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            frame: FrameBuffer::new(),
            fault: None,
        }
    }

    /// Get the local frame buffer
    pub fn frame(&self) -> &FrameBuffer<WIDTH, BANKS> {
        &self.frame
    }

    /// First bus fault since the last [`take_fault`](Self::take_fault)
    pub fn fault(&self) -> Option<BusFault> {
        self.fault
    }

    /// Read and clear the latched bus fault
    pub fn take_fault(&mut self) -> Option<BusFault> {
        self.fault.take()
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    /// Send every dirty bank span
    ///
    /// The dirty spans are only cleared once every bank went out, so a
    /// failed transfer is retried by the next flush.
    fn transmit(&mut self) -> Result<(), BusFault> {
        for bank in 0..BANKS {
            let Some(span) = self.frame.dirty_span(bank) else {
                continue;
            };
            let Some(data) = self.frame.bank(bank).and_then(|b| b.get(span.clone())) else {
                continue;
            };

            // Both fit in 7 bits: bank < 6, column < 84
            let address = [cmd::SET_Y_ADDR | bank as u8, cmd::SET_X_ADDR | span.start as u8];

            self.dc.set_low();
            self.spi.write(&address).map_err(|_| BusFault::Command)?;

            self.dc.set_high();
            self.spi.write(data).map_err(|_| BusFault::Data)?;
        }

        self.frame.mark_clean();
        Ok(())
    }
}

impl<SPI, DC> DisplaySurface for Pcd8544<SPI, DC>
where
    SPI: SpiBus,
    DC: OutputPin,
{
    fn begin_region(&mut self, x: u8, y: u8) {
        self.frame.begin_region(x, y);
    }

    fn write_byte(&mut self, column: u8) {
        self.frame.write_byte(column);
    }

    fn end_region(&mut self) {
        self.frame.end_region();
    }

    fn flush(&mut self) {
        if let Err(fault) = self.transmit() {
            #[cfg(feature = "defmt")]
            defmt::warn!("PCD8544 flush failed: {:?}", fault);

            self.fault.get_or_insert(fault);
        }
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn dimensions(&self) -> (u8, u8) {
        self.frame.dimensions()
    }
}
