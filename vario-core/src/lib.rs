//! Board-agnostic core logic for the vario display
//!
//! This crate contains everything about rendering numbers that does not
//! depend on a particular display controller:
//!
//! - Glyph codes and the glyph table trait
//! - Number formatting (sign, rounding, decimal point)
//! - Per-field redraw bookkeeping (`RenderState`)
//! - The display surface trait the renderers draw through
//! - Field and screen layout configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod format;
pub mod glyph;
pub mod render_state;
pub mod traits;

pub use format::{format_value, Digit, FormattedValue};
pub use glyph::{Glyph, GlyphCode, GlyphTable, UnitKind};
pub use render_state::{BlankFill, RenderState};
pub use traits::{DisplaySurface, SurfaceExt};
