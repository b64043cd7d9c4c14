//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic and
//! display-specific implementations.

pub mod display;

pub use display::{DisplaySurface, SurfaceExt};
