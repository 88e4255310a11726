//! User-facing display settings read once at construction.
//!
//! Persistence belongs to the host; the face only needs to know how to format
//! the time and the weather temperature.

/// Hour format for the time readout.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockFormat {
    /// 00:00 - 23:59, no meridiem marker.
    #[default]
    TwentyFourHour,
    /// 12:00 AM - 11:59 PM.
    TwelveHour,
}

/// Unit for the weather temperature.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Suffix drawn after the temperature value.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

/// Settings the face is constructed with.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceSettings {
    pub clock_format: ClockFormat,
    pub temperature_unit: TemperatureUnit,
}
