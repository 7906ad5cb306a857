//! Screen layout routines
//!
//! One routine per [`ScreenKind`], plus a centered banner for transient
//! messages. Every routine starts by clearing the framebuffer and is
//! idempotent: the same clock, state and environment always produce
//! byte-identical cells. Spacing is budgeted for the 32-column display;
//! where a glyph sequence can exceed it, a fit guard drops trailing
//! glyphs instead of wrapping.

use core::fmt::Write as _;

use heapless::String;
use matrix_core::font::Font;
use matrix_core::fonts::{DIGITS_3X5, DIGITS_5X16, DIGITS_5X8, FONT_3X7, FONT_5X7};
use matrix_core::framebuffer::WIDTH;
use matrix_core::text::{draw_glyph, draw_text, draw_text_centered, string_width, GLYPH_SPACING};
use matrix_core::{DisplayState, Environment, Framebuffer, WallClock};

use crate::scheduler::ScreenKind;

/// Lay out one full frame for `kind`.
pub fn layout_screen(
    kind: ScreenKind,
    fb: &mut Framebuffer,
    clock: &WallClock,
    state: &DisplayState,
    env: &Environment,
) {
    fb.clear();
    match kind {
        ScreenKind::TimeEnv => time_env(fb, clock, state, env),
        ScreenKind::LargeTime => large_time(fb, clock, state),
        ScreenKind::TimeDate => time_date(fb, clock, state),
    }
}

/// Lay out a centered banner message on the top band.
///
/// Prefers the wide 5×7 font and falls back to 3×7 when the text would
/// not fit the display at full width.
pub fn layout_message(fb: &mut Framebuffer, text: &str) {
    fb.clear();
    let font = if string_width(text, &FONT_5X7) <= WIDTH as i32 {
        &FONT_5X7
    } else {
        &FONT_3X7
    };
    draw_text_centered(fb, 0, text, font);
}

/// Draw `text` with spacing between glyphs only, no trailing advance.
///
/// The tight variant of `draw_text`, used where the next element must
/// abut the last glyph (the colon after the hour digits).
fn compact_text(fb: &mut Framebuffer, mut x: i32, band: usize, text: &str, font: &Font) -> i32 {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        x += i32::from(draw_glyph(fb, x, band, ch, font));
        if chars.peek().is_some() {
            x += GLYPH_SPACING;
        }
    }
    x
}

/// Draw `text` left-aligned with a per-glyph fit guard: a glyph that
/// cannot start within the display is dropped rather than clipped.
fn guarded_text(fb: &mut Framebuffer, band: usize, text: &str, font: &Font) {
    let mut x = 0i32;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if x < WIDTH as i32 - 3 {
            x += i32::from(draw_glyph(fb, x, band, ch, font));
            if chars.peek().is_some() && x < WIDTH as i32 {
                x += GLYPH_SPACING;
            }
        }
    }
}

/// The hour-colon-minute row in the 5×8 digit font, starting at x = 0.
///
/// The hour carries no leading zero, so a one-digit hour frees columns
/// for the small seconds. The colon advance is identical whether the
/// glyph is drawn or blanked, keeping the minutes from jittering with
/// the blink. Returns the x position just past the last minute digit.
fn time_row_5x8(fb: &mut Framebuffer, clock: &WallClock, state: &DisplayState) -> i32 {
    let hour = if state.use_24h {
        clock.hour24
    } else {
        clock.hour12
    };
    let mut buf: String<4> = String::new();
    let _ = write!(buf, "{hour}");
    let mut x = compact_text(fb, 0, 0, &buf, &DIGITS_5X8);

    if clock.colon_visible() {
        draw_glyph(fb, x, 0, ':', &DIGITS_5X8);
    }
    x += i32::from(DIGITS_5X8.char_width(':')) + GLYPH_SPACING;

    buf.clear();
    let _ = write!(buf, "{:02}", clock.minute);
    compact_text(fb, x, 0, &buf, &DIGITS_5X8)
}

/// Two small seconds digits at `x` on the top band, glyphs dropped when
/// they would start past column 28.
fn small_seconds(fb: &mut Framebuffer, mut x: i32, second: u8, font: &Font) {
    let mut buf: String<2> = String::new();
    let _ = write!(buf, "{second:02}");
    let mut chars = buf.chars().peekable();
    while let Some(ch) = chars.next() {
        if x < WIDTH as i32 - 3 {
            x += i32::from(draw_glyph(fb, x, 0, ch, font));
            if chars.peek().is_some() && x < WIDTH as i32 - 3 {
                x += GLYPH_SPACING;
            }
        }
    }
}

/// Time on the top band, temperature and humidity (or the no-sensor
/// notice) below.
fn time_env(fb: &mut Framebuffer, clock: &WallClock, state: &DisplayState, env: &Environment) {
    let x = time_row_5x8(fb, clock, state);

    // A two-digit 24-hour hour pushes the minutes past the point where
    // two more glyphs fit, so seconds are omitted from this screen
    // entirely rather than shown only on one-digit hours' frames.
    let show_seconds = !(state.use_24h && clock.hour24 >= 10);
    if show_seconds {
        let x = x + GLYPH_SPACING;
        if x + 7 <= WIDTH as i32 {
            small_seconds(fb, x, clock.second, &DIGITS_3X5);
        }
    }

    if env.available {
        let temp = state.display_temperature(env.temperature_c);
        let mut buf: String<16> = String::new();
        let _ = write!(
            buf,
            "T{}{} H{}%",
            temp,
            state.temperature_unit(),
            env.humidity_pct
        );
        guarded_text(fb, 1, &buf, &FONT_3X7);
    } else {
        guarded_text(fb, 1, "NO SENSOR", &FONT_3X7);
    }
}

/// Double-height time across both bands, small seconds in the corner.
fn large_time(fb: &mut Framebuffer, clock: &WallClock, state: &DisplayState) {
    let hour = if state.use_24h {
        clock.hour24
    } else {
        clock.hour12
    };

    // A one-digit hour is indented so the row stays visually centered.
    let mut x = if hour > 9 { 0 } else { 3 };

    let mut buf: String<4> = String::new();
    let _ = write!(buf, "{hour}");
    x = compact_text(fb, x, 0, &buf, &DIGITS_5X16);

    // The large colon is one column wide and sits tight against the
    // digits on both sides; the advance is the same blanked or drawn.
    if clock.colon_visible() {
        draw_glyph(fb, x, 0, ':', &DIGITS_5X16);
    }
    x += i32::from(DIGITS_5X16.char_width(':'));

    buf.clear();
    let _ = write!(buf, "{:02}", clock.minute);
    x = compact_text(fb, x, 0, &buf, &DIGITS_5X16);

    small_seconds(fb, x + GLYPH_SPACING, clock.second, &FONT_3X7);
}

/// Time on the top band, `DD/MM/YY` date below.
fn time_date(fb: &mut Framebuffer, clock: &WallClock, state: &DisplayState) {
    let x = time_row_5x8(fb, clock, state);
    small_seconds(fb, x + GLYPH_SPACING, clock.second, &DIGITS_3X5);

    let mut buf: String<8> = String::new();
    let _ = write!(
        buf,
        "{:02}/{:02}/{:02}",
        clock.day,
        clock.month,
        clock.year % 100
    );
    draw_text(fb, 2, 1, &buf, &FONT_3X7);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> (DisplayState, Environment) {
        (DisplayState::default(), Environment::default())
    }

    fn band_columns(fb: &Framebuffer, band: usize, range: core::ops::Range<usize>) -> u8 {
        range.filter_map(|x| fb.column(x, band)).fold(0, |a, c| a | c)
    }

    #[test]
    fn test_layouts_are_idempotent() {
        let (state, env) = defaults();
        let clock = WallClock::new(14, 5, 0, 7, 3, 2026);
        for kind in [ScreenKind::TimeEnv, ScreenKind::LargeTime, ScreenKind::TimeDate] {
            let mut a = Framebuffer::new();
            let mut b = Framebuffer::new();
            layout_screen(kind, &mut a, &clock, &state, &env);
            layout_screen(kind, &mut b, &clock, &state, &env);
            assert_eq!(a.cells(), b.cells());
        }
    }

    #[test]
    fn test_time_env_no_sensor_scenario() {
        // 14:05:00, 12-hour, no sensor: "2:05" plus seconds on top,
        // "NO SENSOR" below.
        let (state, env) = defaults();
        let clock = WallClock::new(14, 5, 0, 1, 1, 2026);
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb, &clock, &state, &env);

        // Hour digit occupies columns 0..5, colon columns 5..7.
        assert_ne!(band_columns(&fb, 0, 0..5), 0);
        assert_ne!(band_columns(&fb, 0, 5..7), 0);
        // Minutes at 8..19, small seconds from 20.
        assert_ne!(band_columns(&fb, 0, 8..19), 0);
        assert_ne!(band_columns(&fb, 0, 20..27), 0);
        // Bottom band carries the notice from column 0.
        assert_ne!(fb.column(0, 1), Some(0));
    }

    #[test]
    fn test_colon_blink_keeps_minutes_in_place() {
        let (state, env) = defaults();
        let shown = WallClock::new(14, 5, 0, 1, 1, 2026);
        let hidden = WallClock::new(14, 5, 1, 1, 1, 2026);

        let mut fb_shown = Framebuffer::new();
        let mut fb_hidden = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb_shown, &shown, &state, &env);
        layout_screen(ScreenKind::TimeEnv, &mut fb_hidden, &hidden, &state, &env);

        // Colon columns toggle with second parity.
        assert_ne!(band_columns(&fb_shown, 0, 5..7), 0);
        assert_eq!(band_columns(&fb_hidden, 0, 5..7), 0);
        // Minute digits stay put; only the seconds value differs there.
        assert_eq!(
            (8..19).map(|x| fb_shown.column(x, 0)).collect::<std::vec::Vec<_>>(),
            (8..19).map(|x| fb_hidden.column(x, 0)).collect::<std::vec::Vec<_>>()
        );
    }

    #[test]
    fn test_hour_zero_renders_as_twelve() {
        let (state, env) = defaults();
        let midnight = WallClock::new(0, 30, 4, 1, 1, 2026);
        let noon = WallClock::new(12, 30, 4, 1, 1, 2026);
        let mut fb_mid = Framebuffer::new();
        let mut fb_noon = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb_mid, &midnight, &state, &env);
        layout_screen(ScreenKind::TimeEnv, &mut fb_noon, &noon, &state, &env);
        assert_eq!(fb_mid.cells(), fb_noon.cells());
    }

    #[test]
    fn test_hour_thirteen_renders_as_one() {
        let (state, env) = defaults();
        let pm = WallClock::new(13, 30, 4, 1, 1, 2026);
        let am = WallClock::new(1, 30, 4, 1, 1, 2026);
        let mut fb_pm = Framebuffer::new();
        let mut fb_am = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb_pm, &pm, &state, &env);
        layout_screen(ScreenKind::TimeEnv, &mut fb_am, &am, &state, &env);
        assert_eq!(fb_pm.cells(), fb_am.cells());
    }

    #[test]
    fn test_24h_two_digit_hour_omits_seconds() {
        let (mut state, env) = defaults();
        state.use_24h = true;
        let clock = WallClock::new(23, 45, 12, 1, 1, 2026);
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb, &clock, &state, &env);
        // "23:45" ends at column 25; nothing may follow it.
        assert_eq!(band_columns(&fb, 0, 26..32), 0);
    }

    #[test]
    fn test_24h_one_digit_hour_keeps_seconds() {
        let (mut state, env) = defaults();
        state.use_24h = true;
        let clock = WallClock::new(9, 5, 12, 1, 1, 2026);
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb, &clock, &state, &env);
        // "9:05" ends at column 19; seconds start at 20.
        assert_ne!(band_columns(&fb, 0, 20..27), 0);
    }

    #[test]
    fn test_time_env_sensor_row() {
        let (state, mut env) = defaults();
        env.available = true;
        env.temperature_c = 25;
        env.humidity_pct = 60;
        let clock = WallClock::new(14, 5, 0, 1, 1, 2026);
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::TimeEnv, &mut fb, &clock, &state, &env);
        // "T25C H60%" starts at column 0 of the bottom band.
        assert_ne!(fb.column(0, 1), Some(0));
    }

    #[test]
    fn test_large_time_one_digit_hour_is_indented() {
        let (state, env) = defaults();
        let clock = WallClock::new(14, 5, 0, 1, 1, 2026); // "2:05"
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::LargeTime, &mut fb, &clock, &state, &env);
        // Columns 0..3 are the indent; the hour digit fills both bands.
        assert_eq!(band_columns(&fb, 0, 0..3), 0);
        assert_ne!(band_columns(&fb, 0, 3..8), 0);
        assert_ne!(band_columns(&fb, 1, 3..8), 0);
    }

    #[test]
    fn test_large_time_two_digit_hour_fills_row() {
        let (mut state, env) = defaults();
        state.use_24h = true;
        let clock = WallClock::new(23, 45, 12, 1, 1, 2026);
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::LargeTime, &mut fb, &clock, &state, &env);
        // "23:45" starts at column 0; seconds land at 24..31.
        assert_ne!(band_columns(&fb, 0, 0..5), 0);
        assert_ne!(band_columns(&fb, 0, 24..32), 0);
    }

    #[test]
    fn test_time_date_bottom_row_is_date() {
        let (state, env) = defaults();
        let clock = WallClock::new(14, 5, 30, 7, 3, 2026); // 07/03/26
        let mut fb = Framebuffer::new();
        layout_screen(ScreenKind::TimeDate, &mut fb, &clock, &state, &env);
        // Date is indented two columns.
        assert_eq!(band_columns(&fb, 1, 0..2), 0);
        assert_ne!(fb.column(2, 1), Some(0));
        // Seconds are always attempted on this screen.
        assert_ne!(band_columns(&fb, 0, 20..27), 0);
    }

    #[test]
    fn test_message_uses_wide_font_when_it_fits() {
        let mut fb = Framebuffer::new();
        layout_message(&mut fb, "HI");
        // 5+1+5 = 11 wide, centered at column 10.
        assert_eq!(band_columns(&fb, 0, 0..10), 0);
        assert_ne!(fb.column(10, 0), Some(0));
    }

    #[test]
    fn test_message_falls_back_to_narrow_font() {
        let mut fb = Framebuffer::new();
        // Too wide for 5×7 (41 px) but fits in 3×7 (26 px, centered at 3).
        layout_message(&mut fb, "BOOT OK");
        assert_eq!(band_columns(&fb, 0, 0..3), 0);
        assert_ne!(fb.column(3, 0), Some(0));
    }

    #[test]
    fn test_layout_clears_previous_frame() {
        let (state, env) = defaults();
        let mut fb = Framebuffer::new();
        for x in 0..32 {
            fb.set_column(x, 1, 0xFF);
        }
        let clock = WallClock::new(14, 5, 0, 1, 1, 2026);
        layout_screen(ScreenKind::LargeTime, &mut fb, &clock, &state, &env);
        // Indent columns must not carry residue.
        assert_eq!(band_columns(&fb, 0, 0..3), 0);
    }
}
