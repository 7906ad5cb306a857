//! Timezone name table
//!
//! The rendering core treats the active timezone as an opaque index; the
//! upstream time-sync collaborator resolves the POSIX TZ string. This
//! table exists so dashboards can offer named choices and so an
//! out-of-range selection degrades to a defined default.

/// One selectable timezone: display name plus POSIX TZ string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneInfo {
    /// Human-readable location name.
    pub name: &'static str,
    /// POSIX TZ string with DST rules where applicable.
    pub tz: &'static str,
}

const fn tz(name: &'static str, tz: &'static str) -> TimezoneInfo {
    TimezoneInfo { name, tz }
}

/// Selectable timezones, index 0 is the default.
pub static TIMEZONES: &[TimezoneInfo] = &[
    tz("Sydney, Australia", "AEST-10AEDT,M10.1.0,M4.1.0/3"),
    tz("Brisbane, Australia", "AEST-10"),
    tz("Adelaide, Australia", "ACST-9:30ACDT,M10.1.0,M4.1.0/3"),
    tz("Perth, Australia", "AWST-8"),
    tz("Auckland, New Zealand", "NZST-12NZDT,M9.5.0,M4.1.0/3"),
    tz("Tokyo, Japan", "JST-9"),
    tz("Shanghai, China", "CST-8"),
    tz("Singapore", "SGT-8"),
    tz("Bangkok, Thailand", "ICT-7"),
    tz("Mumbai, India", "IST-5:30"),
    tz("Dubai, UAE", "GST-4"),
    tz("Moscow, Russia", "MSK-3"),
    tz("Athens, Greece", "EET-2EEST,M3.5.0/3,M10.5.0/4"),
    tz("Berlin, Germany", "CET-1CEST,M3.5.0,M10.5.0/3"),
    tz("Paris, France", "CET-1CEST,M3.5.0,M10.5.0/3"),
    tz("London, UK", "GMT0BST,M3.5.0/1,M10.5.0"),
    tz("Reykjavik, Iceland", "GMT0"),
    tz("Sao Paulo, Brazil", "BRT3"),
    tz("Buenos Aires, Argentina", "ART3"),
    tz("New York, USA", "EST5EDT,M3.2.0,M11.1.0"),
    tz("Chicago, USA", "CST6CDT,M3.2.0,M11.1.0"),
    tz("Denver, USA", "MST7MDT,M3.2.0,M11.1.0"),
    tz("Phoenix, USA", "MST7"),
    tz("Los Angeles, USA", "PST8PDT,M3.2.0,M11.1.0"),
    tz("Anchorage, USA", "AKST9AKDT,M3.2.0,M11.1.0"),
    tz("Honolulu, USA", "HST10"),
];

/// Look up a timezone by index, falling back to index 0.
pub fn get(index: usize) -> &'static TimezoneInfo {
    TIMEZONES.get(index).unwrap_or(&TIMEZONES[0])
}
