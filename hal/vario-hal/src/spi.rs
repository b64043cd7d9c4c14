//! SPI bus abstractions
//!
//! The display controller is write-only, so the bus trait only models
//! outgoing transfers. Chip select is owned by the implementation.

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    ///
    /// Returns once every byte has been clocked out.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Bridge from an `embedded-hal` 1.0 [`SpiDevice`](embedded_hal::spi::SpiDevice)
///
/// The device manages chip select around each write, which matches how the
/// display driver frames its command and data bursts.
pub struct SpiDeviceBus<D> {
    device: D,
}

impl<D> SpiDeviceBus<D> {
    /// Wrap an SPI device
    pub const fn new(device: D) -> Self {
        Self { device }
    }

    /// Release the wrapped device
    pub fn release(self) -> D {
        self.device
    }
}

impl<D: embedded_hal::spi::SpiDevice> SpiBus for SpiDeviceBus<D> {
    type Error = D::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.device.write(data)
    }
}
