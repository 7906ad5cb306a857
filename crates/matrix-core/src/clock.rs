//! Wall-clock input tuple
//!
//! Produced upstream (NTP/RTC) once per tick; the rendering core only
//! reads it. `hour12` is carried alongside `hour24` so layout code never
//! re-derives the 12-hour convention in more than one place.

/// One wall-clock sample: time of day plus calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    /// Hour in `0..24`.
    pub hour24: u8,
    /// Hour in `1..=12` (0 and 12 both map to 12).
    pub hour12: u8,
    /// Minute in `0..60`.
    pub minute: u8,
    /// Second in `0..60`.
    pub second: u8,
    /// Day of month, 1-based.
    pub day: u8,
    /// Month, 1-based.
    pub month: u8,
    /// Full year, e.g. 2026.
    pub year: u16,
}

impl WallClock {
    /// Build a sample from a 24-hour reading, deriving `hour12`.
    pub fn new(hour24: u8, minute: u8, second: u8, day: u8, month: u8, year: u16) -> Self {
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour24,
            hour12,
            minute,
            second,
            day,
            month,
            year,
        }
    }

    /// Whether the blinking separator is in its visible phase.
    pub fn colon_visible(&self) -> bool {
        self.second % 2 == 0
    }
}
