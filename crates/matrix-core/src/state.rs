//! Display state and environment input
//!
//! All mutable configuration lives in one owned [`DisplayState`] value
//! that is threaded through the scheduler, the layout routines, and the
//! style renderer. There are no ambient globals; the external command
//! surface mutates this struct and nothing else.

use embedded_graphics::pixelcolor::Rgb888;

use crate::clock::WallClock;
use crate::color;

/// How a logical pixel is rasterized onto the physical screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStyle {
    /// Solid square blocks, background where unlit.
    FlatBlock,
    /// Circular LED with a bezel ring; unlit cells show a dim housing.
    #[default]
    SimulatedLed,
}

impl RenderStyle {
    /// Decode an external style index, falling back to the default.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => RenderStyle::FlatBlock,
            1 => RenderStyle::SimulatedLed,
            _ => RenderStyle::default(),
        }
    }
}

/// Latest sensor snapshot, replaced wholesale by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Environment {
    /// Whether a sensor is attached and its readings are valid.
    pub available: bool,
    /// Temperature in whole degrees Celsius.
    pub temperature_c: i16,
    /// Relative humidity in percent.
    pub humidity_pct: u8,
    /// Barometric pressure in hPa.
    pub pressure_hpa: u16,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            available: false,
            temperature_c: 0,
            humidity_pct: 0,
            pressure_hpa: 0,
        }
    }
}

/// A daily window during which the display is blanked.
///
/// The window may wrap midnight (`start > end` means "overnight").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffSchedule {
    /// Whether the schedule is applied at all.
    pub enabled: bool,
    /// Window start, hour and minute.
    pub start: (u8, u8),
    /// Window end, hour and minute.
    pub end: (u8, u8),
}

impl Default for OffSchedule {
    fn default() -> Self {
        // 23:00 to 07:00, matching the clock's factory behavior.
        Self {
            enabled: true,
            start: (23, 0),
            end: (7, 0),
        }
    }
}

impl OffSchedule {
    /// Whether `clock` falls inside the off window.
    pub fn contains(&self, clock: &WallClock) -> bool {
        if !self.enabled {
            return false;
        }
        let now = u16::from(clock.hour24) * 60 + u16::from(clock.minute);
        let start = u16::from(self.start.0) * 60 + u16::from(self.start.1);
        let end = u16::from(self.end.0) * 60 + u16::from(self.end.1);
        if start < end {
            now >= start && now < end
        } else {
            now >= start || now < end
        }
    }
}

/// The single owned configuration record of the rendering core.
///
/// No `defmt::Format` here: the color fields are foreign `Rgb888` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Active rasterization style.
    pub style: RenderStyle,
    /// Color of a lit LED.
    pub on_color: Rgb888,
    /// Color of the bezel ring around a simulated LED.
    pub bezel_color: Rgb888,
    /// Background color outside and between LEDs.
    pub background: Rgb888,
    /// 24-hour time format when true, 12-hour otherwise.
    pub use_24h: bool,
    /// Report temperature in Fahrenheit when true.
    pub fahrenheit: bool,
    /// Opaque timezone table index, consumed upstream only.
    pub timezone: usize,
    /// Whether the display is currently lit at all.
    pub display_on: bool,
    /// Daily blanking window.
    pub schedule: OffSchedule,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            on_color: color::DEFAULT_ON,
            bezel_color: color::DEFAULT_BEZEL,
            background: color::BACKGROUND,
            use_24h: false,
            fahrenheit: false,
            timezone: 0,
            display_on: true,
            schedule: OffSchedule::default(),
        }
    }
}

impl DisplayState {
    /// Temperature for display, honoring the unit flag.
    pub fn display_temperature(&self, celsius: i16) -> i16 {
        if self.fahrenheit {
            celsius * 9 / 5 + 32
        } else {
            celsius
        }
    }

    /// Unit suffix matching [`Self::display_temperature`].
    pub fn temperature_unit(&self) -> char {
        if self.fahrenheit {
            'F'
        } else {
            'C'
        }
    }
}
