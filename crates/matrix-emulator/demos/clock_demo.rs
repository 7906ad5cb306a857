//! Live clock in an emulator window.
//!
//! ```bash
//! cargo run -p matrix-emulator --example clock_demo
//! ```
//!
//! Renders local time at 4 ticks per second until the window is closed.

use std::thread;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, Timelike};
use matrix_core::{Environment, WallClock};
use matrix_emulator::{Emulator, EmulatorConfig, EmulatorError};
use matrix_render::{Command, MatrixClock};

fn now_wall_clock() -> WallClock {
    let now = Local::now();
    WallClock::new(
        now.hour() as u8,
        now.minute() as u8,
        now.second() as u8,
        now.day() as u8,
        now.month() as u8,
        now.year() as u16,
    )
}

fn main() -> Result<(), EmulatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut emulator = Emulator::with_config(EmulatorConfig { scale: 3 })?;
    let mut clock = MatrixClock::new();

    // Pretend a sensor is attached so the environment screen has content.
    clock.apply(Command::SetEnvironment(Environment {
        available: true,
        temperature_c: 22,
        humidity_pct: 45,
        pressure_hpa: 1013,
    }));

    tracing::info!("clock demo running, close the window to exit");

    let started = Instant::now();
    while emulator.pump() {
        let now_ms = started.elapsed().as_millis() as u64;
        clock
            .tick(now_wall_clock(), now_ms, &mut emulator)
            .unwrap_or_else(|e| match e {});
        emulator.present()?;
        thread::sleep(Duration::from_millis(250));
    }

    tracing::info!("window closed, exiting");
    Ok(())
}
