//! Display colors: presets, indexed lookup, and dimming
//!
//! Colors are `embedded-graphics` [`Rgb888`] values. The external command
//! surface addresses colors by small preset indices; an out-of-range index
//! falls back to the first preset rather than erroring.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Presets selectable for the lit LED color, index order is the external
/// contract (0 = red).
pub const ON_PRESETS: [Rgb888; 8] = [
    Rgb888::new(0xFF, 0x00, 0x00), // red
    Rgb888::new(0x00, 0xFF, 0x00), // green
    Rgb888::new(0x00, 0x00, 0xFF), // blue
    Rgb888::new(0xFF, 0xFF, 0x00), // yellow
    Rgb888::new(0x00, 0xFF, 0xFF), // cyan
    Rgb888::new(0xFF, 0x00, 0xFF), // magenta
    Rgb888::new(0xFF, 0xFF, 0xFF), // white
    Rgb888::new(0xFF, 0xA5, 0x00), // orange
];

/// Presets selectable for the bezel ring (0 = white, 2 = the default
/// dark gray of an unpainted LED housing).
pub const BEZEL_PRESETS: [Rgb888; 7] = [
    Rgb888::new(0xFF, 0xFF, 0xFF), // white
    Rgb888::new(0xC0, 0xC0, 0xC0), // light gray
    Rgb888::new(0x78, 0x78, 0x78), // dark gray
    Rgb888::new(0xFF, 0x00, 0x00), // red
    Rgb888::new(0x00, 0xFF, 0x00), // green
    Rgb888::new(0x00, 0x00, 0xFF), // blue
    Rgb888::new(0xFF, 0xFF, 0x00), // yellow
];

/// Default lit color (red).
pub const DEFAULT_ON: Rgb888 = ON_PRESETS[0];

/// Default bezel color (dark gray housing).
pub const DEFAULT_BEZEL: Rgb888 = BEZEL_PRESETS[2];

/// Default background (unlit TFT glass).
pub const BACKGROUND: Rgb888 = Rgb888::new(0, 0, 0);

/// Lit-LED preset by index, falling back to the default on out-of-range.
pub fn on_preset(index: usize) -> Rgb888 {
    ON_PRESETS.get(index).copied().unwrap_or(DEFAULT_ON)
}

/// Bezel preset by index, falling back to the default on out-of-range.
pub fn bezel_preset(index: usize) -> Rgb888 {
    BEZEL_PRESETS.get(index).copied().unwrap_or(DEFAULT_BEZEL)
}

/// Dim a color by an integer divisor, preserving hue.
///
/// Each channel is divided independently, so the result can never
/// overflow or wrap. A divisor of 0 is treated as 1.
pub fn dim(color: Rgb888, divisor: u8) -> Rgb888 {
    let d = divisor.max(1);
    Rgb888::new(color.r() / d, color.g() / d, color.b() / d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup_in_range() {
        assert_eq!(on_preset(1), Rgb888::new(0, 0xFF, 0));
        assert_eq!(bezel_preset(0), Rgb888::new(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_preset_lookup_out_of_range_falls_back() {
        assert_eq!(on_preset(99), DEFAULT_ON);
        assert_eq!(bezel_preset(usize::MAX), DEFAULT_BEZEL);
    }

    #[test]
    fn test_dim_divides_each_channel() {
        let c = dim(Rgb888::new(200, 100, 9), 8);
        assert_eq!((c.r(), c.g(), c.b()), (25, 12, 1));
    }

    #[test]
    fn test_dim_by_zero_is_identity() {
        let c = Rgb888::new(10, 20, 30);
        assert_eq!(dim(c, 0), c);
        assert_eq!(dim(c, 1), c);
    }

    #[test]
    fn test_dim_never_brightens() {
        for divisor in 1..=16u8 {
            let c = dim(Rgb888::new(255, 128, 1), divisor);
            assert!(c.r() <= 255 && c.g() <= 128 && c.b() <= 1);
        }
    }
}
