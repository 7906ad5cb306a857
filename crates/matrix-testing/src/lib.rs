//! Testing utilities for the matrix renderer
//!
//! A headless [`TestCanvas`] implementing `DrawTarget<Rgb888>` with the
//! instrumentation the render tests need: a pixel-write counter for
//! verifying diff behavior, injectable write failures for exercising
//! error propagation, and pixel/region assertion helpers.
//!
//! # Quick start
//!
//! ```
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//! use matrix_testing::TestCanvas;
//!
//! let mut canvas = TestCanvas::new(100, 100);
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
//!     .draw(&mut canvas)
//!     .unwrap();
//!
//! canvas.assert_pixel(20, 15, Rgb888::RED).unwrap();
//! assert_eq!(canvas.writes(), 40 * 20);
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]

use core::fmt;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

/// Error returned by the canvas once its injected failure budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteRejected;

impl fmt::Display for WriteRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "canvas rejected a pixel write (injected failure)")
    }
}

impl std::error::Error for WriteRejected {}

/// Headless pixel canvas with write instrumentation.
pub struct TestCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    writes: u64,
    fail_after: Option<u64>,
}

impl TestCanvas {
    /// Create a canvas filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb888::BLACK)
    }

    /// Create a canvas pre-filled with `color`.
    ///
    /// Useful for detecting regions the renderer never touches: fill with
    /// a sentinel color no renderer path produces and assert it survives.
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
            writes: 0,
            fail_after: None,
        }
    }

    // ── Pixel access ─────────────────────────────────────────────────────

    /// The color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    // ── Write instrumentation ────────────────────────────────────────────

    /// Number of in-bounds pixel writes accepted since the last reset.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Reset the write counter to zero.
    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }

    /// Accept `budget` more writes, then fail every write after that.
    pub fn fail_after(&mut self, budget: u64) {
        self.fail_after = Some(self.writes + budget);
    }

    /// Remove any injected failure so writes succeed again.
    pub fn clear_failure(&mut self) {
        self.fail_after = None;
    }

    // ── Assertions ───────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected color.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual != expected {
            Err(format!(
                "assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"
            ))
        } else {
            Ok(())
        }
    }

    /// Assert that every pixel inside `rect` has the given color.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        let tl = rect.top_left;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                self.assert_pixel(x, y, color)
                    .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel of the color.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {color:?} pixel found in {rect:?}"
            ))
        }
    }

    /// Count how many pixels in `rect` match `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb888) -> usize {
        let tl = rect.top_left;
        let mut count = 0;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                if self.pixel_at(x, y) == Some(color) {
                    count += 1;
                }
            }
        }
        count
    }

    /// The set of distinct colors present in `rect`.
    ///
    /// Handy for "this style never produces that color" assertions.
    pub fn colors_in(&self, rect: Rectangle) -> Vec<Rgb888> {
        let tl = rect.top_left;
        let mut seen: Vec<Rgb888> = Vec::new();
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                if let Some(c) = self.pixel_at(x, y) {
                    if !seen.contains(&c) {
                        seen.push(c);
                    }
                }
            }
        }
        seen
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb888;
    type Error = WriteRejected;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.width as i32
                || point.y >= self.height as i32
            {
                continue;
            }
            if let Some(limit) = self.fail_after {
                if self.writes >= limit {
                    return Err(WriteRejected);
                }
            }
            let index = (point.y as u32 * self.width + point.x as u32) as usize;
            if let Some(slot) = self.pixels.get_mut(index) {
                *slot = color;
                self.writes += 1;
            }
        }
        Ok(())
    }
}
