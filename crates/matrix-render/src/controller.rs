//! Rendering controller
//!
//! [`MatrixClock`] ties the pieces together: it owns the framebuffer,
//! the scheduler, the display state and the blitter, consumes wall-clock
//! ticks, and applies configuration commands. Commands arriving from an
//! I/O context are funneled through a single-consumer queue and drained
//! on the render path, so there is never a concurrent writer to any core
//! state.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use heapless::spsc::Consumer;
use matrix_core::framebuffer::{CELLS, HEIGHT, WIDTH};
use matrix_core::{DisplayState, Environment, Framebuffer, OffSchedule, RenderStyle, WallClock};
use matrix_screens::{layout_message, layout_screen, Scheduler, ScreenKind};

use crate::blit::Blitter;

/// Capacity of the configuration command queue.
pub const COMMAND_QUEUE_DEPTH: usize = 8;

/// A single-producer single-consumer queue of [`Command`]s.
pub type CommandQueue = heapless::spsc::Queue<Command, COMMAND_QUEUE_DEPTH>;

/// Longest banner message accepted by [`Command::ShowMessage`].
pub type MessageText = heapless::String<32>;

/// A configuration command from the external control surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch the rasterization style.
    SetStyle(RenderStyle),
    /// Set the LED palette. `bezel: None` means "match the on-color".
    SetColors {
        /// Color of a lit LED.
        on: Rgb888,
        /// Bezel ring color, or `None` to reuse `on`.
        bezel: Option<Rgb888>,
    },
    /// Switch between 12- and 24-hour time.
    SetTimeFormat {
        /// 24-hour format when true.
        use_24h: bool,
    },
    /// Switch the temperature unit.
    SetTemperatureUnit {
        /// Fahrenheit when true.
        fahrenheit: bool,
    },
    /// Replace the environment snapshot wholesale.
    SetEnvironment(Environment),
    /// Jump the scheduler to a specific screen.
    SetScreen(ScreenKind),
    /// Select a timezone table index (consumed upstream).
    SetTimezone(usize),
    /// Manually switch the display on or off.
    SetDisplayPower(bool),
    /// Replace the daily blanking window.
    SetSchedule(OffSchedule),
    /// Interrupt the clock with a centered banner until the next tick.
    ShowMessage(MessageText),
}

/// Read-only export of the current frame for an external mirror.
///
/// Carries everything a remote renderer needs to reproduce the exact
/// pixel pattern with the same two-style algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct FramebufferSnapshot {
    /// The 64 byte-columns of the logical framebuffer.
    pub cells: [u8; CELLS],
    /// Active rasterization style.
    pub style: RenderStyle,
    /// Color of a lit LED.
    pub on_color: Rgb888,
    /// Bezel ring color.
    pub bezel_color: Rgb888,
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
}

/// The assembled rendering core of the simulated LED clock.
pub struct MatrixClock {
    fb: Framebuffer,
    blitter: Blitter,
    scheduler: Scheduler,
    state: DisplayState,
    env: Environment,
    clock: Option<WallClock>,
    now_ms: u64,
    lit: bool,
}

impl Default for MatrixClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixClock {
    /// A controller in its power-on state: Time+Environment screen,
    /// simulated-LED style, 12-hour format, Celsius.
    pub fn new() -> Self {
        Self {
            fb: Framebuffer::new(),
            blitter: Blitter::new(),
            scheduler: Scheduler::new(),
            state: DisplayState::default(),
            env: Environment::default(),
            clock: None,
            now_ms: 0,
            lit: true,
        }
    }

    /// A controller with a caller-provided initial configuration.
    pub fn with_state(state: DisplayState) -> Self {
        Self {
            state,
            ..Self::new()
        }
    }

    // ── Tick path ────────────────────────────────────────────────────────

    /// Advance one tick and commit the frame to `target`.
    ///
    /// Call at least once per second. Blanks the display while the
    /// off-schedule window is active or the display is switched off.
    pub fn tick<D>(
        &mut self,
        clock: WallClock,
        now_ms: u64,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.clock = Some(clock);
        self.now_ms = now_ms;

        let lit = self.state.display_on && !self.state.schedule.contains(&clock);
        if lit != self.lit {
            self.lit = lit;
            if lit {
                // Waking up: repaint the current screen without waiting
                // for the next second boundary.
                layout_screen(
                    self.scheduler.screen(),
                    &mut self.fb,
                    &clock,
                    &self.state,
                    &self.env,
                );
            } else {
                self.fb.clear();
            }
        }

        if lit {
            if let Some(screen) = self.scheduler.tick(&clock, now_ms) {
                layout_screen(screen, &mut self.fb, &clock, &self.state, &self.env);
            }
        }

        self.blitter.render(&self.fb, &self.state, target)
    }

    /// Commit the current frame outside the tick cadence.
    ///
    /// Used after configuration commands so a change is visible without
    /// waiting up to one second for the next tick.
    pub fn render_now<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.blitter.render(&self.fb, &self.state, target)
    }

    // ── Command surface ──────────────────────────────────────────────────

    /// Apply one configuration command.
    ///
    /// Updates the display state, re-runs the current screen's layout,
    /// and arms a full repaint so no pixel keeps the old palette. Commit
    /// with [`render_now`](Self::render_now) or the next tick.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetStyle(style) => self.state.style = style,
            Command::SetColors { on, bezel } => {
                self.state.on_color = on;
                self.state.bezel_color = bezel.unwrap_or(on);
            }
            Command::SetTimeFormat { use_24h } => self.state.use_24h = use_24h,
            Command::SetTemperatureUnit { fahrenheit } => self.state.fahrenheit = fahrenheit,
            Command::SetEnvironment(env) => self.env = env,
            Command::SetScreen(screen) => self.scheduler.set_screen(screen, self.now_ms),
            Command::SetTimezone(index) => self.state.timezone = index,
            Command::SetDisplayPower(on) => self.state.display_on = on,
            Command::SetSchedule(schedule) => self.state.schedule = schedule,
            Command::ShowMessage(text) => {
                layout_message(&mut self.fb, &text);
                return;
            }
        }
        self.refresh();
    }

    /// Drain and apply every queued command.
    pub fn drain_commands(&mut self, commands: &mut Consumer<'_, Command, COMMAND_QUEUE_DEPTH>) {
        while let Some(command) = commands.dequeue() {
            self.apply(command);
        }
    }

    /// Re-run the current layout against the updated state and arm a
    /// full repaint.
    fn refresh(&mut self) {
        if let Some(clock) = self.clock {
            self.lit = self.state.display_on && !self.state.schedule.contains(&clock);
            if self.lit {
                layout_screen(
                    self.scheduler.screen(),
                    &mut self.fb,
                    &clock,
                    &self.state,
                    &self.env,
                );
            } else {
                self.fb.clear();
            }
        }
        self.blitter.mark_dirty();
    }

    // ── Introspection ────────────────────────────────────────────────────

    /// The current display configuration.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// The latest environment snapshot.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The logical framebuffer as it will be committed next.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// The screen that owns the next frame.
    pub fn screen(&self) -> ScreenKind {
        self.scheduler.screen()
    }

    /// Export the frame and palette for an external mirror renderer.
    pub fn snapshot(&self) -> FramebufferSnapshot {
        FramebufferSnapshot {
            cells: self.fb.to_cells(),
            style: self.state.style,
            on_color: self.state.on_color,
            bezel_color: self.state.bezel_color,
            width: WIDTH as u32,
            height: HEIGHT as u32,
        }
    }
}
