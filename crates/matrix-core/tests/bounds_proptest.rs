//! Property-based tests for framebuffer and compositor bounds safety.
//! Verifies invariants hold for ALL inputs, not just fixed examples.

use matrix_core::fonts::{DIGITS_3X5, DIGITS_5X16, DIGITS_5X8, FONT_3X7, FONT_5X7};
use matrix_core::framebuffer::{BANDS, WIDTH};
use matrix_core::text::{draw_glyph, string_width};
use matrix_core::Framebuffer;

proptest::proptest! {
    /// set_column never panics and never touches cells outside the target.
    #[test]
    fn set_column_never_panics(x in 0usize..100, band in 0usize..10, mask in 0u8..=255) {
        let mut fb = Framebuffer::new();
        fb.set_column(x, band, mask);
        if x < WIDTH && band < BANDS {
            assert_eq!(fb.column(x, band), Some(mask));
        } else {
            assert!(fb.cells().iter().all(|&c| c == 0),
                "out-of-range write ({x}, {band}) must be dropped");
        }
    }

    /// Drawing any char of any font at any position never panics, and
    /// out-of-range codepoints always advance by zero.
    #[test]
    fn draw_glyph_never_panics(x in -64i32..64, band in 0usize..4, code in 0u32..0x250) {
        if let Some(ch) = char::from_u32(code) {
            for font in [&FONT_3X7, &DIGITS_3X5, &DIGITS_5X8, &DIGITS_5X16, &FONT_5X7] {
                let mut fb = Framebuffer::new();
                let advance = draw_glyph(&mut fb, x, band, ch, font);
                if font.glyph(ch).is_none() {
                    assert_eq!(advance, 0);
                    assert!(fb.cells().iter().all(|&c| c == 0));
                } else {
                    assert_eq!(advance, font.char_width(ch));
                }
            }
        }
    }

    /// string_width is never negative and grows monotonically with input.
    #[test]
    fn string_width_is_monotone(s in "[ -Z]{0,16}") {
        let w = string_width(&s, &FONT_3X7);
        assert!(w >= 0);
        let mut longer = s.clone();
        longer.push('0');
        assert!(string_width(&longer, &FONT_3X7) >= w);
    }
}
