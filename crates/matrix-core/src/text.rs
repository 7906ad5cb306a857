//! Glyph compositor
//!
//! Draws proportional glyphs into the [`Framebuffer`] and measures text.
//! Unsupported characters contribute zero width and draw nothing; columns
//! falling outside the display are skipped individually, so a glyph
//! hanging off either edge renders as a truncated slice rather than
//! failing the whole draw.

use crate::font::Font;
use crate::framebuffer::{Framebuffer, WIDTH};

/// Pixel columns of spacing between adjacent glyphs.
pub const GLYPH_SPACING: i32 = 1;

/// Draw one glyph with its top-left at `(x, band)`.
///
/// Returns the glyph's advance width (0 for unsupported characters).
/// A zero-filled column is written at `x + width` to erase residue a
/// wider glyph may have left there on an earlier frame.
pub fn draw_glyph(fb: &mut Framebuffer, x: i32, band: usize, ch: char, font: &Font) -> u8 {
    let Some(glyph) = font.glyph(ch) else {
        return 0;
    };

    let bands = usize::from(font.bands);
    let width = i32::from(glyph.width);
    for i in 0..width {
        let col = x + i;
        if !(0..WIDTH as i32).contains(&col) {
            continue;
        }
        for j in 0..bands {
            if let Some(&mask) = glyph.columns.get(i as usize * bands + j) {
                fb.set_column(col as usize, band + j, mask);
            }
        }
    }

    // Trailing separator column, only when it lands on the display.
    let edge = x + width;
    if (0..WIDTH as i32).contains(&edge) {
        for j in 0..bands {
            fb.set_column(edge as usize, band + j, 0);
        }
    }

    glyph.width
}

/// Width in pixels of `text` in `font`, including inter-glyph spacing
/// but no trailing spacing. Unsupported characters count as zero wide.
pub fn string_width(text: &str, font: &Font) -> i32 {
    let mut width = 0;
    for ch in text.chars() {
        width += i32::from(font.char_width(ch)) + GLYPH_SPACING;
    }
    (width - GLYPH_SPACING).max(0)
}

/// Draw `text` left-to-right starting at `x` with uniform spacing.
///
/// Returns the x position following the last glyph's spacing.
pub fn draw_text(fb: &mut Framebuffer, x: i32, band: usize, text: &str, font: &Font) -> i32 {
    let mut x = x;
    for ch in text.chars() {
        x += i32::from(draw_glyph(fb, x, band, ch, font)) + GLYPH_SPACING;
    }
    x
}

/// Draw `text` horizontally centered on the display.
pub fn draw_text_centered(fb: &mut Framebuffer, band: usize, text: &str, font: &Font) {
    let width = string_width(text, font);
    let x = ((WIDTH as i32 - width) / 2).clamp(0, WIDTH as i32 - 1);
    draw_text(fb, x, band, text, font);
}
