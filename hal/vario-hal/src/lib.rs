//! Vario Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the display stack
//! needs from a chip HAL: a write-only SPI bus and a digital output pin for
//! the controller's data/command line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vario-display (Pcd8544 surface)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vario-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 chip HAL          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - SPI write operations
//! - [`gpio::OutputPin`] - Digital output
//!
//! Chip HALs that already implement `embedded-hal` 1.0 are bridged with
//! [`spi::SpiDeviceBus`] and [`gpio::HalOutputPin`].

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{HalOutputPin, OutputPin};
pub use spi::{SpiBus, SpiDeviceBus};
