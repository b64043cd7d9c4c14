//! GPIO pin abstractions
//!
//! Provides the digital output trait used for the display's data/command
//! select line.

use core::convert::Infallible;

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Bridge from an `embedded-hal` 1.0 output pin
///
/// Only pins whose error type is [`Infallible`] are accepted, which covers
/// the on-chip GPIO of every MCU this firmware targets.
pub struct HalOutputPin<P> {
    pin: P,
}

impl<P> HalOutputPin<P> {
    /// Wrap an output pin
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for HalOutputPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}
