//! Content scheduling and screen layouts for the matrix clock
//!
//! The [`Scheduler`] decides *when* something must be drawn and *which*
//! screen owns the frame; the layout routines in [`layout`] decide what
//! the framebuffer contains for that screen and tick. Neither touches
//! physical pixels; that is the blit engine's job in `matrix-render`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod layout;
pub mod scheduler;

pub use layout::{layout_message, layout_screen};
pub use scheduler::{Scheduler, ScreenKind, MODE_SWITCH_INTERVAL_MS};
