//! Content scheduler — a free-running three-screen cycle
//!
//! Two independent clocks drive the display. A redraw is due whenever the
//! wall-clock second changes; the screen *type* advances on its own 5 s
//! timer. Keeping the triggers separate means content refreshes every
//! second even while the screen type stays put, and a mode switch only
//! takes effect at the next second boundary.

use matrix_core::WallClock;

/// Wall-clock milliseconds between automatic screen switches.
pub const MODE_SWITCH_INTERVAL_MS: u64 = 5000;

/// The three content screens, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    /// Time on the top band, temperature/humidity below.
    #[default]
    TimeEnv,
    /// Double-height time across both bands.
    LargeTime,
    /// Time on the top band, date below.
    TimeDate,
}

impl ScreenKind {
    /// The screen following `self` in the cycle.
    pub fn next(self) -> Self {
        match self {
            ScreenKind::TimeEnv => ScreenKind::LargeTime,
            ScreenKind::LargeTime => ScreenKind::TimeDate,
            ScreenKind::TimeDate => ScreenKind::TimeEnv,
        }
    }

    /// Decode an external screen index, falling back to the default.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => ScreenKind::TimeEnv,
            1 => ScreenKind::LargeTime,
            2 => ScreenKind::TimeDate,
            _ => ScreenKind::default(),
        }
    }
}

/// Mode-cycling state machine.
pub struct Scheduler {
    screen: ScreenKind,
    last_switch_ms: Option<u64>,
    last_second: Option<u8>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Start the cycle on [`ScreenKind::TimeEnv`].
    pub const fn new() -> Self {
        Self {
            screen: ScreenKind::TimeEnv,
            last_switch_ms: None,
            last_second: None,
        }
    }

    /// The screen that owns the next frame.
    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    /// Force a specific screen, restarting its 5 s dwell.
    pub fn set_screen(&mut self, screen: ScreenKind, now_ms: u64) {
        self.screen = screen;
        self.last_switch_ms = Some(now_ms);
    }

    /// Advance both clocks for one tick.
    ///
    /// Returns `Some(screen)` when the wall-clock second changed and that
    /// screen's layout routine must run. The mode switch is evaluated
    /// *after* the redraw decision, so a switch never retargets the frame
    /// already due this tick.
    pub fn tick(&mut self, clock: &WallClock, now_ms: u64) -> Option<ScreenKind> {
        let due = if self.last_second != Some(clock.second) {
            self.last_second = Some(clock.second);
            Some(self.screen)
        } else {
            None
        };

        let since = now_ms.saturating_sub(*self.last_switch_ms.get_or_insert(now_ms));
        if since >= MODE_SWITCH_INTERVAL_MS {
            self.screen = self.screen.next();
            self.last_switch_ms = Some(now_ms);
        }

        due
    }
}
