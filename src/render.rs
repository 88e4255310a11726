//! Field identities, dispatch order and widget updates.
//!
//! This module provides:
//! - [`Field`] - the closed set of logical fields on the face
//! - [`REFRESH_ORDER`] - the dependency order the refresh pass walks
//! - [`FaceUpdate`] - one tagged variant per widget change
//! - [`FaceView`] - the screen object that turns updates into pixels
//!
//! The core only knows *which logical field changed*; how a field is drawn is
//! entirely up to the [`FaceView`] implementation (see [`widgets`](crate::widgets)).
//!
//! # Update Strategy
//!
//! | Field | Cells | Strategy |
//! |-------|-------|----------|
//! | Date | date | On change |
//! | Week | ISO week | On change |
//! | Time | minute | On change |
//! | Seconds | sub-minute nanos (+ minute peek) | Every tick, carousel decides reset vs. step |
//! | Battery | percent + charging | One combined redraw on either change |
//! | Radio | connected + enabled | One combined redraw on either change |
//! | Notifications | count + present | One combined redraw on either change |
//! | Steps | step count | On change |
//! | Vitals | heart rate, measuring, weather | Owner change: rebuild; else owner's value only |

use crate::arbiter::VitalsOwner;
use crate::settings::{ClockFormat, TemperatureUnit};
use crate::sources::{CalendarDate, WallMinute, WeatherIcon};
use crate::thresholds::BatteryTier;

// =============================================================================
// Field Identity
// =============================================================================

/// Logical fields on the face, one per widget group.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Date,
    Week,
    Time,
    Seconds,
    Battery,
    Radio,
    Notifications,
    Steps,
    Vitals,
}

/// Number of logical fields.
pub const FIELD_COUNT: usize = 9;

/// Order of the refresh pass: coarse fields (date, minute) before the seconds
/// carousel that depends on them.
pub const REFRESH_ORDER: [Field; FIELD_COUNT] = [
    Field::Date,
    Field::Week,
    Field::Time,
    Field::Seconds,
    Field::Battery,
    Field::Radio,
    Field::Notifications,
    Field::Steps,
    Field::Vitals,
];

impl Field {
    /// Position in [`REFRESH_ORDER`], also used as a counter index.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Short label for the debug page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Week => "WEEK",
            Self::Time => "TIME",
            Self::Seconds => "SECS",
            Self::Battery => "BATT",
            Self::Radio => "RADIO",
            Self::Notifications => "NOTIF",
            Self::Steps => "STEPS",
            Self::Vitals => "VITAL",
        }
    }
}

// =============================================================================
// Derived Display Values
// =============================================================================

/// AM/PM marker for 12-hour mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// Hours and minutes formatted for the configured clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeReadout {
    /// 0-23 in 24-hour mode, 1-12 in 12-hour mode.
    pub hour: u8,
    pub minute: u8,
    /// `Some` only in 12-hour mode.
    pub meridiem: Option<Meridiem>,
}

impl TimeReadout {
    pub const fn new(
        time: WallMinute,
        format: ClockFormat,
    ) -> Self {
        let hour = time.hour();
        match format {
            ClockFormat::TwentyFourHour => Self {
                hour,
                minute: time.minute(),
                meridiem: None,
            },
            ClockFormat::TwelveHour => {
                let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
                let hour = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                Self {
                    hour,
                    minute: time.minute(),
                    meridiem: Some(meridiem),
                }
            }
        }
    }
}

/// Radio link indicator, collapsed from the two radio cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioIcon {
    /// Radio switched off; wins over the link state.
    Disabled,
    Connected,
    Disconnected,
}

impl RadioIcon {
    pub const fn from_state(
        connected: bool,
        enabled: bool,
    ) -> Self {
        if !enabled {
            Self::Disabled
        } else if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

// =============================================================================
// Widget Updates
// =============================================================================

/// One widget change requested by the refresh pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceUpdate {
    /// Stardate and weekday/date label.
    Date(CalendarDate),
    /// ISO week label.
    Week(u8),
    /// Hours, minutes and (12-hour mode) meridiem.
    Time(TimeReadout),
    /// Rebuild both seconds rings at these digits.
    SecondsReset { tens: u8, ones: u8 },
    /// Roll the ones ring to this digit.
    SecondsOnes(u8),
    /// Roll the tens ring to this digit.
    SecondsTens(u8),
    /// Battery percentage in its colour tier.
    Battery { percent: u8, tier: BatteryTier },
    Radio(RadioIcon),
    Notifications { count: u16, present: bool },
    Steps(u32),
    /// Clear `previous` owner's widgets and lay out `owner`'s presentation.
    VitalsRebuild {
        previous: Option<VitalsOwner>,
        owner: VitalsOwner,
    },
    /// Heart-rate value (0 means no reading yet).
    HeartRate { bpm: u8 },
    /// Weather temperature (whole degrees in `unit`) and condition icon.
    Weather {
        temperature: i16,
        unit: TemperatureUnit,
        icon: WeatherIcon,
    },
}

impl FaceUpdate {
    /// The logical field this update belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Self::Date(_) => Field::Date,
            Self::Week(_) => Field::Week,
            Self::Time(_) => Field::Time,
            Self::SecondsReset { .. } | Self::SecondsOnes(_) | Self::SecondsTens(_) => Field::Seconds,
            Self::Battery { .. } => Field::Battery,
            Self::Radio(_) => Field::Radio,
            Self::Notifications { .. } => Field::Notifications,
            Self::Steps(_) => Field::Steps,
            Self::VitalsRebuild { .. } | Self::HeartRate { .. } | Self::Weather { .. } => Field::Vitals,
        }
    }
}

/// The screen object that owns the widgets.
///
/// Implementations must only touch the widgets named by the update; the refresh
/// pass relies on that to keep unaffected pixels untouched.
pub trait FaceView {
    fn apply(
        &mut self,
        update: FaceUpdate,
    );
}

// =============================================================================
// Unit Tests
// =============================================================================
