//! Board-agnostic core of the simulated LED-matrix clock
//!
//! This crate contains everything that does not depend on a concrete
//! screen or platform:
//!
//! - Packed monochrome framebuffer (32 columns × 2 row-bands)
//! - Bitmap font tables and the glyph compositor
//! - Wall-clock / environment input types
//! - Display state (style, colors, format flags) and color presets
//! - Timezone name table
//!
//! The framebuffer is the single shared mutable surface: layout routines
//! write glyphs into it, and the blit engine in `matrix-render` maps it
//! onto physical pixels.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod clock;
pub mod color;
pub mod font;
pub mod fonts;
pub mod framebuffer;
pub mod state;
pub mod text;
pub mod timezone;

pub use clock::WallClock;
pub use color::dim;
pub use font::{Font, Glyph};
pub use framebuffer::{Framebuffer, BANDS, HEIGHT, WIDTH};
pub use state::{DisplayState, Environment, OffSchedule, RenderStyle};
