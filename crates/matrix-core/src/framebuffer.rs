//! Packed monochrome framebuffer for the 32×16 simulated matrix
//!
//! The buffer holds one byte per `(column, row-band)` cell. Bit `b` of the
//! cell at `(x, band)` is the lit state of physical row `band * 8 + b`,
//! bit 0 being the top row of the band. Two bands stack to form the full
//! 16-pixel-tall display.
//!
//! All writes are bounds-checked and silently dropped outside the display,
//! so layout code never has to guard against partially off-screen glyphs.

/// Display width in logical pixels (columns).
pub const WIDTH: usize = 32;

/// Number of stacked 8-pixel row-bands.
pub const BANDS: usize = 2;

/// Display height in logical pixels.
pub const HEIGHT: usize = BANDS * 8;

/// Total number of framebuffer cells.
pub const CELLS: usize = WIDTH * BANDS;

/// The logical framebuffer: 32 columns × 2 row-bands of vertical bit masks.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Framebuffer {
    cells: [u8; CELLS],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an all-dark framebuffer.
    pub const fn new() -> Self {
        Self { cells: [0; CELLS] }
    }

    /// Set the full 8-bit vertical mask of one cell.
    ///
    /// Out-of-range coordinates are dropped without effect.
    pub fn set_column(&mut self, x: usize, band: usize, mask: u8) {
        if x < WIDTH && band < BANDS {
            // Index bounded by the check above; CELLS == WIDTH * BANDS.
            if let Some(cell) = self.cells.get_mut(band * WIDTH + x) {
                *cell = mask;
            }
        }
    }

    /// Read the vertical mask of one cell, `None` outside the display.
    pub fn column(&self, x: usize, band: usize) -> Option<u8> {
        if x < WIDTH && band < BANDS {
            self.cells.get(band * WIDTH + x).copied()
        } else {
            None
        }
    }

    /// Query a single logical pixel, `false` outside the display.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        match self.column(x, y / 8) {
            Some(mask) => mask & (1 << (y % 8)) != 0,
            None => false,
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.cells = [0; CELLS];
    }

    /// Invert every pixel.
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Shift the whole display one column to the left, feeding in a dark
    /// column on the right edge of each band.
    pub fn scroll_left(&mut self) {
        for band in 0..BANDS {
            let start = band * WIDTH;
            self.cells.copy_within(start + 1..start + WIDTH, start);
            if let Some(cell) = self.cells.get_mut(start + WIDTH - 1) {
                *cell = 0;
            }
        }
    }

    /// Borrow the raw cell array (band-major, 64 bytes).
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Copy out the raw cell array.
    pub fn to_cells(&self) -> [u8; CELLS] {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_dark() {
        let fb = Framebuffer::new();
        assert!(fb.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_set_column_round_trips() {
        let mut fb = Framebuffer::new();
        fb.set_column(3, 1, 0xA5);
        assert_eq!(fb.column(3, 1), Some(0xA5));
        assert_eq!(fb.column(3, 0), Some(0));
    }

    #[test]
    fn test_out_of_range_write_is_dropped() {
        let mut fb = Framebuffer::new();
        fb.set_column(WIDTH, 0, 0xFF);
        fb.set_column(0, BANDS, 0xFF);
        fb.set_column(usize::MAX, usize::MAX, 0xFF);
        assert!(fb.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_pixel_maps_band_and_bit() {
        let mut fb = Framebuffer::new();
        // Bit 2 of band 1 is physical row 10.
        fb.set_column(7, 1, 0b0000_0100);
        assert!(fb.pixel(7, 10));
        assert!(!fb.pixel(7, 9));
        assert!(!fb.pixel(7, 2));
    }

    #[test]
    fn test_pixel_out_of_range_is_dark() {
        let fb = Framebuffer::new();
        assert!(!fb.pixel(WIDTH, 0));
        assert!(!fb.pixel(0, HEIGHT));
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut fb = Framebuffer::new();
        fb.set_column(0, 0, 0xFF);
        fb.set_column(31, 1, 0x01);
        fb.clear();
        assert!(fb.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_invert_flips_every_cell() {
        let mut fb = Framebuffer::new();
        fb.set_column(5, 0, 0x0F);
        fb.invert();
        assert_eq!(fb.column(5, 0), Some(0xF0));
        assert_eq!(fb.column(6, 0), Some(0xFF));
    }

    #[test]
    fn test_scroll_left_moves_columns_within_band() {
        let mut fb = Framebuffer::new();
        fb.set_column(1, 0, 0x11);
        fb.set_column(0, 1, 0x22);
        fb.scroll_left();
        assert_eq!(fb.column(0, 0), Some(0x11));
        assert_eq!(fb.column(1, 0), Some(0));
        // Band 1's column 0 scrolled off; it must not wrap into band 0.
        assert_eq!(fb.column(31, 0), Some(0));
        assert_eq!(fb.column(0, 1), Some(0));
    }
}
