//! Numeric readouts for the vario display
//!
//! This crate provides:
//! - `ScreenDigit`, a numeric field that redraws through a shared surface
//!   and blanks the columns a narrower value leaves behind
//! - `UnitOverlay`, the static unit labels next to the readouts
//! - `Dashboard`, the three readouts and their labels built from a
//!   `ScreenLayout`
//! - `LargeFont`, the built-in glyph table
//! - Display surfaces: an in-memory `FrameBuffer` and the `Pcd8544` LCD
//!   driven over SPI
//!
//! # Architecture
//!
//! The surface is created once at startup and wrapped in a `RefCell`.
//! Every renderer borrows it for its own lifetime and takes the mutable
//! borrow only for the duration of one draw call, so two fields can never
//! interleave partial regions on the bus.

#![no_std]
#![deny(unsafe_code)]

pub mod dashboard;
pub mod digit;
pub mod font;
pub mod framebuffer;
pub mod pcd8544;
pub mod unit;

// Re-export key types
pub use dashboard::{Dashboard, Reading};
pub use digit::ScreenDigit;
pub use font::LargeFont;
pub use framebuffer::FrameBuffer;
pub use pcd8544::{BusFault, Pcd8544};
pub use unit::UnitOverlay;
