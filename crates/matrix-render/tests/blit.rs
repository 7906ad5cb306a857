//! Diff engine behavior against an instrumented canvas.
//!
//! Flat-block style paints every LED of a cell as a full 10x10 tile, so
//! one byte-column of 8 LEDs costs exactly 800 physical pixel writes.
//! That makes the write counter a precise probe of which cells the
//! blitter decided to repaint.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use matrix_core::{DisplayState, Framebuffer, RenderStyle};
use matrix_render::{Blitter, DISPLAY_PX_HEIGHT, DISPLAY_PX_WIDTH};
use matrix_testing::TestCanvas;

const WRITES_PER_CELL: u64 = 8 * 100;
const FULL_PASS_WRITES: u64 = 64 * WRITES_PER_CELL;

fn flat_state() -> DisplayState {
    DisplayState {
        style: RenderStyle::FlatBlock,
        ..DisplayState::default()
    }
}

fn canvas() -> TestCanvas {
    TestCanvas::new(DISPLAY_PX_WIDTH, DISPLAY_PX_HEIGHT)
}

#[test]
fn first_render_paints_every_cell() {
    let mut blitter = Blitter::new();
    let fb = Framebuffer::new();
    let mut canvas = canvas();

    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), FULL_PASS_WRITES);
}

#[test]
fn unchanged_frame_performs_zero_writes() {
    let mut blitter = Blitter::new();
    let fb = Framebuffer::new();
    let mut canvas = canvas();

    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    canvas.reset_writes();
    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), 0);
}

#[test]
fn changed_cell_repaints_only_that_cell() {
    let mut blitter = Blitter::new();
    let mut fb = Framebuffer::new();
    let mut canvas = canvas();

    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    canvas.reset_writes();

    fb.set_column(5, 1, 0x01);
    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), WRITES_PER_CELL);

    // The lit bit is the top row of the lower band.
    let state = flat_state();
    canvas.assert_pixel(50, 84, state.on_color).unwrap();
}

#[test]
fn mark_dirty_forces_full_repaint() {
    let mut blitter = Blitter::new();
    let fb = Framebuffer::new();
    let mut canvas = canvas();

    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    canvas.reset_writes();

    blitter.mark_dirty();
    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), FULL_PASS_WRITES);
}

#[test]
fn failed_target_is_retried_to_completion() {
    let mut blitter = Blitter::new();
    let fb = Framebuffer::new();
    let mut canvas = canvas();

    // Fail partway into the second cell of the first full pass.
    canvas.fail_after(WRITES_PER_CELL + 150);
    assert!(blitter.render(&fb, &flat_state(), &mut canvas).is_err());
    assert!(blitter.is_dirty());

    // The retry completes the pass; a third call has nothing to do.
    canvas.clear_failure();
    canvas.reset_writes();
    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), FULL_PASS_WRITES);

    canvas.reset_writes();
    blitter.render(&fb, &flat_state(), &mut canvas).unwrap();
    assert_eq!(canvas.writes(), 0);
}

#[test]
fn row_gap_is_never_painted() {
    let sentinel = Rgb888::new(1, 2, 3);
    let mut canvas = TestCanvas::filled(DISPLAY_PX_WIDTH, DISPLAY_PX_HEIGHT, sentinel);
    let mut blitter = Blitter::new();
    let mut fb = Framebuffer::new();
    for x in 0..32 {
        fb.set_column(x, 0, 0xFF);
        fb.set_column(x, 1, 0xFF);
    }

    let state = DisplayState::default(); // simulated LED
    blitter.render(&fb, &state, &mut canvas).unwrap();

    // Physical rows 80..84 separate the two matrix halves.
    canvas
        .assert_region_uniform(
            Rectangle::new(Point::new(0, 80), Size::new(DISPLAY_PX_WIDTH, 4)),
            sentinel,
        )
        .unwrap();
}
