//! Style renderer
//!
//! Rasterizes one logical cell (a single LED) onto any
//! `DrawTarget<Color = Rgb888>`. Two styles: flat square blocks, or a
//! simulated circular LED with a bezel ring and a visible dark housing
//! when unlit. Geometry is fixed at 10 physical pixels per LED with a
//! 4-pixel gap between the two 8-row matrix halves.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use matrix_core::framebuffer::{HEIGHT, WIDTH};
use matrix_core::{dim, DisplayState, RenderStyle};

/// Physical pixels per logical LED, both axes.
pub const LED_SIZE: i32 = 10;

/// Physical pixel gap between the upper and lower matrix halves.
pub const ROW_GAP: i32 = 4;

/// Total physical width of the rendered display.
pub const DISPLAY_PX_WIDTH: u32 = WIDTH as u32 * LED_SIZE as u32;

/// Total physical height of the rendered display, gap included.
pub const DISPLAY_PX_HEIGHT: u32 = HEIGHT as u32 * LED_SIZE as u32 + ROW_GAP as u32;

/// Divisor applied to the housing colors of an unlit LED.
const OFF_DIM_DIVISOR: u8 = 8;

/// Top-left physical pixel of the logical cell at `(x, y)`.
///
/// Rows 8..16 sit below the inter-matrix gap.
pub fn cell_origin(x: usize, y: usize) -> Point {
    let gap = if y >= 8 { ROW_GAP } else { 0 };
    Point::new(x as i32 * LED_SIZE, y as i32 * LED_SIZE + gap)
}

/// Paint the logical pixel at `(x, y)` in the active style.
pub fn paint_pixel<D>(
    target: &mut D,
    x: usize,
    y: usize,
    lit: bool,
    state: &DisplayState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    match state.style {
        RenderStyle::FlatBlock => flat_block(target, x, y, lit, state),
        RenderStyle::SimulatedLed => simulated_led(target, x, y, lit, state),
    }
}

/// Solid square of on-color or background. O(1) primitives per cell.
fn flat_block<D>(
    target: &mut D,
    x: usize,
    y: usize,
    lit: bool,
    state: &DisplayState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let color = if lit { state.on_color } else { state.background };
    Rectangle::new(cell_origin(x, y), Size::new(LED_SIZE as u32, LED_SIZE as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Circular LED: concentric body, bezel ring and background, by a
/// squared-distance test against fixed radius thresholds.
fn simulated_led<D>(
    target: &mut D,
    x: usize,
    y: usize,
    lit: bool,
    state: &DisplayState,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let origin = cell_origin(x, y);

    if lit {
        let on = state.on_color;
        let bezel = state.bezel_color;
        let background = state.background;
        target.draw_iter((0..LED_SIZE).flat_map(|py| {
            (0..LED_SIZE).map(move |px| {
                // Doubled coordinates center the disc on the 10×10 cell
                // without fractional arithmetic.
                let dx = 2 * px - 9;
                let dy = 2 * py - 9;
                let dist_sq = dx * dx + dy * dy;
                let color = if dist_sq <= 38 {
                    on
                } else if dist_sq <= 62 {
                    bezel
                } else {
                    background
                };
                Pixel(origin + Point::new(px, py), color)
            })
        }))
    } else {
        // An unlit emitter still shows its housing: background square,
        // then a faint disc and bezel inset one pixel on each side.
        Rectangle::new(origin, Size::new(LED_SIZE as u32, LED_SIZE as u32))
            .into_styled(PrimitiveStyle::with_fill(state.background))
            .draw(target)?;

        let off_led = dim(state.on_color, OFF_DIM_DIVISOR);
        let off_housing = dim(state.bezel_color, OFF_DIM_DIVISOR);
        target.draw_iter((0..8).flat_map(|cy| {
            (0..8).filter_map(move |cx| {
                let dx = 2 * cx - 7;
                let dy = 2 * cy - 7;
                let dist_sq = dx * dx + dy * dy;
                let color = if dist_sq <= 42 {
                    off_led
                } else if dist_sq <= 58 {
                    off_housing
                } else {
                    return None;
                };
                Some(Pixel(origin + Point::new(cx + 1, cy + 1), color))
            })
        }))
    }
}
