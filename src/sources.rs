//! Collaborator boundary: the data sources the face reads every tick.
//!
//! Every collaborator is a pull-only, non-blocking snapshot query. "No data"
//! (e.g. no weather forecast received yet) is an ordinary value such as `None`,
//! never an error. The sensor subsystems themselves live outside this crate;
//! firmware and the simulator implement these traits over their own state.
//!
//! # Collaborators
//!
//! | Trait | Reports |
//! |-------|---------|
//! | [`ClockSource`] | minute-level time, sub-minute nanoseconds, date, ISO week |
//! | [`PowerSource`] | battery percent, charging flag |
//! | [`RadioSource`] | link connected, radio enabled |
//! | [`MotionSource`] | cumulative step count |
//! | [`HeartRateSource`] | beats per minute, measuring flag |
//! | [`WeatherSource`] | optional current conditions |
//! | [`NotificationSource`] | pending count, unread flag |

use crate::settings::TemperatureUnit;

// =============================================================================
// Clock Values
// =============================================================================

/// Wall-clock time truncated to the minute (minutes since the Unix epoch).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallMinute(pub u32);

impl WallMinute {
    /// Minutes in one day.
    const MINUTES_PER_DAY: u32 = 24 * 60;

    /// Hour of the day (0-23).
    #[inline]
    pub const fn hour(self) -> u8 { ((self.0 % Self::MINUTES_PER_DAY) / 60) as u8 }

    /// Minute of the hour (0-59).
    #[inline]
    pub const fn minute(self) -> u8 { (self.0 % 60) as u8 }

    /// The following minute.
    #[inline]
    pub const fn next(self) -> Self { Self(self.0.wrapping_add(1)) }
}

/// Day of the week.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Three-letter uppercase label.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
            Self::Saturday => "SAT",
            Self::Sunday => "SUN",
        }
    }

    /// ISO 8601 day number (Monday = 1 ... Sunday = 7).
    pub const fn iso_number(self) -> u8 { self as u8 + 1 }

    /// Weekday from its ISO number; out-of-range values wrap modulo 7.
    pub const fn from_iso_number(n: u8) -> Self {
        match (n % 7 + 6) % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

/// Calendar date as reported by the clock.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarDate {
    pub year: u16,
    /// 1-12.
    pub month: u8,
    /// 1-31.
    pub day: u8,
    /// 1-366, used for the stardate readout.
    pub day_of_year: u16,
    pub weekday: Weekday,
}

impl CalendarDate {
    /// Three-letter uppercase month label.
    pub const fn month_abbrev(&self) -> &'static str {
        match self.month {
            1 => "JAN",
            2 => "FEB",
            3 => "MAR",
            4 => "APR",
            5 => "MAY",
            6 => "JUN",
            7 => "JUL",
            8 => "AUG",
            9 => "SEP",
            10 => "OCT",
            11 => "NOV",
            12 => "DEC",
            _ => "---",
        }
    }
}

// =============================================================================
// Weather Values
// =============================================================================

/// Condition icon reported with the current weather.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    Sun,
    FewClouds,
    Clouds,
    HeavyClouds,
    CloudsWithRain,
    Rain,
    Thunderstorm,
    Snow,
    Smog,
    #[default]
    Unknown,
}

impl WeatherIcon {
    /// Short label drawn in place of a glyph.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "SUN",
            Self::FewClouds => "FEW",
            Self::Clouds => "CLD",
            Self::HeavyClouds => "OVC",
            Self::CloudsWithRain => "SHWR",
            Self::Rain => "RAIN",
            Self::Thunderstorm => "TSTM",
            Self::Snow => "SNOW",
            Self::Smog => "SMOG",
            Self::Unknown => "????",
        }
    }
}

/// Current conditions snapshot. Compared as one unit: a change to either field
/// is a change of the whole snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentWeather {
    /// Temperature in hundredths of a degree Celsius.
    pub temperature: i16,
    pub icon: WeatherIcon,
}

impl CurrentWeather {
    /// Temperature rounded to whole degrees in `unit`.
    pub fn display_temperature(
        &self,
        unit: TemperatureUnit,
    ) -> i16 {
        let centi = i32::from(self.temperature);
        let centi = match unit {
            TemperatureUnit::Celsius => centi,
            TemperatureUnit::Fahrenheit => centi * 9 / 5 + 3200,
        };
        round_centi(centi)
    }
}

/// Round hundredths to the nearest whole unit, halves away from zero.
fn round_centi(centi: i32) -> i16 {
    let rounded = if centi >= 0 { (centi + 50) / 100 } else { (centi - 50) / 100 };
    rounded as i16
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Wall clock and calendar.
pub trait ClockSource {
    /// Current time truncated to the minute.
    fn minute(&self) -> WallMinute;
    /// Nanoseconds elapsed since the start of the current minute.
    fn sub_minute_nanos(&self) -> u64;
    /// Current calendar date.
    fn date(&self) -> CalendarDate;
    /// ISO 8601 week number (1-53).
    fn iso_week(&self) -> u8;
}

/// Battery gauge.
pub trait PowerSource {
    /// Remaining charge, 0-100.
    fn percent_remaining(&self) -> u8;
    fn is_charging(&self) -> bool;
}

/// Radio link status.
pub trait RadioSource {
    fn is_connected(&self) -> bool;
    fn is_radio_enabled(&self) -> bool;
}

/// Step counter.
pub trait MotionSource {
    /// Steps counted today (monotonic until the daily reset).
    fn step_count(&self) -> u32;
}

/// Heart-rate sensor.
pub trait HeartRateSource {
    /// Last measured value in beats per minute; 0 until a reading is available.
    fn heart_rate(&self) -> u8;
    /// Whether the sensor is actively measuring.
    fn is_measuring(&self) -> bool;
}

/// Cached weather service.
pub trait WeatherSource {
    /// Current conditions, or `None` when no (fresh) data is available.
    fn current_weather(&self) -> Option<CurrentWeather>;
}

/// Notification queue.
pub trait NotificationSource {
    fn pending_count(&self) -> u16;
    fn has_unread(&self) -> bool;
}

/// The collaborators one face instance reads from.
///
/// Held by shared reference: the face never mutates its sources.
#[derive(Clone, Copy)]
pub struct Controllers<'a> {
    pub clock: &'a dyn ClockSource,
    pub power: &'a dyn PowerSource,
    pub radio: &'a dyn RadioSource,
    pub motion: &'a dyn MotionSource,
    pub heart_rate: &'a dyn HeartRateSource,
    pub weather: &'a dyn WeatherSource,
    pub notifications: &'a dyn NotificationSource,
}

// =============================================================================
// Unit Tests
// =============================================================================
