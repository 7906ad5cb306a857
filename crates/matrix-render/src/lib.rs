//! Diff-and-blit rendering for the simulated LED matrix clock
//!
//! Turns the logical 32×16 framebuffer from `matrix-core` into physical
//! pixels on any `DrawTarget<Color = Rgb888>`. Three layers:
//!
//! - [`style`] rasterizes a single LED in the active style
//! - [`blit`] repaints only the byte-columns that changed since the
//!   last committed frame
//! - [`controller`] drives the whole core from wall-clock ticks and a
//!   command queue
//!
//! The crate is `no_std`; the desktop emulator and the test harness
//! supply the draw targets.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod blit;
pub mod controller;
pub mod style;

pub use blit::Blitter;
pub use controller::{Command, CommandQueue, FramebufferSnapshot, MatrixClock, MessageText};
pub use style::{paint_pixel, DISPLAY_PX_HEIGHT, DISPLAY_PX_WIDTH, LED_SIZE, ROW_GAP};
