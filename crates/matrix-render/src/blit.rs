//! Diff-and-blit engine
//!
//! Compares the logical framebuffer against a snapshot of what the
//! physical target last showed and repaints only the byte-columns that
//! changed. A forced pass repaints everything; it is armed at startup
//! and re-armed by any configuration change that invalidates the pixels
//! already on screen (palette, style, format).

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use matrix_core::framebuffer::{CELLS, WIDTH};
use matrix_core::{DisplayState, Framebuffer};

use crate::style::paint_pixel;

/// Incremental renderer from logical cells to physical pixels.
pub struct Blitter {
    snapshot: [u8; CELLS],
    force_full: bool,
}

impl Default for Blitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Blitter {
    /// A blitter whose first pass repaints the whole display.
    ///
    /// The snapshot starts as all-ones, but the forced flag is what
    /// guarantees the full first pass; the sentinel alone could in
    /// principle collide with real cell content.
    pub fn new() -> Self {
        Self {
            snapshot: [0xFF; CELLS],
            force_full: true,
        }
    }

    /// Arm a full repaint on the next [`render`](Self::render) call.
    pub fn mark_dirty(&mut self) {
        self.force_full = true;
    }

    /// Whether the next pass will repaint every cell.
    pub fn is_dirty(&self) -> bool {
        self.force_full
    }

    /// Repaint every changed cell of `fb` onto `target`.
    ///
    /// Each repainted cell is copied into the snapshot only after all
    /// eight of its pixels were accepted, so a failed target leaves the
    /// remaining cells marked stale and a later call retries them. The
    /// forced flag is likewise cleared only after a complete pass.
    pub fn render<D>(
        &mut self,
        fb: &Framebuffer,
        state: &DisplayState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let cells = fb.cells();
        for (index, (&cell, snap)) in cells.iter().zip(self.snapshot.iter_mut()).enumerate() {
            if !self.force_full && cell == *snap {
                continue;
            }
            let x = index % WIDTH;
            let band = index / WIDTH;
            for bit in 0..8 {
                let y = band * 8 + bit;
                let lit = cell & (1 << bit) != 0;
                paint_pixel(target, x, y, lit, state)?;
            }
            *snap = cell;
        }
        self.force_full = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blitter_is_dirty() {
        assert!(Blitter::new().is_dirty());
    }

    #[test]
    fn test_mark_dirty_rearms() {
        let mut blitter = Blitter::new();
        blitter.force_full = false;
        blitter.mark_dirty();
        assert!(blitter.is_dirty());
    }
}
