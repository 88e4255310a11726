//! The full set of change-tracked cells behind the face.
//!
//! One [`DirtyValue`] per externally-sourced field. The bank owns no widgets;
//! [`pull`](FieldSnapshotBank::pull) copies one snapshot from every collaborator
//! and the refresh pass consumes the cells afterwards.

use crate::config::BATTERY_PERCENT_SENTINEL;
use crate::dirty::DirtyValue;
use crate::sources::{CalendarDate, Controllers, CurrentWeather, WallMinute};

/// Last-observed value of every tracked field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSnapshotBank {
    // Clock
    pub time: DirtyValue<WallMinute>,
    pub nanos: DirtyValue<u64>,
    pub date: DirtyValue<CalendarDate>,
    pub week: DirtyValue<u8>,

    // Power
    pub battery_percent: DirtyValue<u8>,
    pub charging: DirtyValue<bool>,

    // Radio
    pub connected: DirtyValue<bool>,
    pub radio_enabled: DirtyValue<bool>,

    // Motion
    pub steps: DirtyValue<u32>,

    // Vitals slot
    pub heart_rate: DirtyValue<u8>,
    pub heart_rate_active: DirtyValue<bool>,
    pub weather: DirtyValue<Option<CurrentWeather>>,

    // Notifications
    pub notification_count: DirtyValue<u16>,
    pub notifications_present: DirtyValue<bool>,
}

impl FieldSnapshotBank {
    /// Bank with every cell at its sentinel and pending its first draw.
    pub const fn new() -> Self {
        Self {
            time: DirtyValue::new(WallMinute(0)),
            nanos: DirtyValue::new(0),
            date: DirtyValue::new(CalendarDate {
                year: 0,
                month: 0,
                day: 0,
                day_of_year: 0,
                weekday: crate::sources::Weekday::Monday,
            }),
            week: DirtyValue::new(0),
            battery_percent: DirtyValue::new(BATTERY_PERCENT_SENTINEL),
            charging: DirtyValue::new(false),
            connected: DirtyValue::new(false),
            radio_enabled: DirtyValue::new(false),
            steps: DirtyValue::new(0),
            heart_rate: DirtyValue::new(0),
            heart_rate_active: DirtyValue::new(false),
            weather: DirtyValue::new(None),
            notification_count: DirtyValue::new(0),
            notifications_present: DirtyValue::new(false),
        }
    }

    /// Copy one snapshot from every collaborator into its cell.
    ///
    /// Only values that differ from the cached ones mark a cell dirty.
    pub fn pull(
        &mut self,
        controllers: &Controllers<'_>,
    ) {
        let clock = controllers.clock;
        self.time.set(clock.minute());
        self.nanos.set(clock.sub_minute_nanos());
        self.date.set(clock.date());
        self.week.set(clock.iso_week());

        self.battery_percent.set(controllers.power.percent_remaining());
        self.charging.set(controllers.power.is_charging());

        self.connected.set(controllers.radio.is_connected());
        self.radio_enabled.set(controllers.radio.is_radio_enabled());

        self.steps.set(controllers.motion.step_count());

        self.heart_rate.set(controllers.heart_rate.heart_rate());
        self.heart_rate_active.set(controllers.heart_rate.is_measuring());
        self.weather.set(controllers.weather.current_weather());

        self.notification_count.set(controllers.notifications.pending_count());
        self.notifications_present.set(controllers.notifications.has_unread());
    }

    /// Return every cell to its sentinel so the next pass repaints everything.
    pub fn reset(&mut self) { *self = Self::new(); }

    /// Number of cells with an unacknowledged change.
    pub fn dirty_count(&self) -> usize {
        [
            self.time.is_dirty(),
            self.nanos.is_dirty(),
            self.date.is_dirty(),
            self.week.is_dirty(),
            self.battery_percent.is_dirty(),
            self.charging.is_dirty(),
            self.connected.is_dirty(),
            self.radio_enabled.is_dirty(),
            self.steps.is_dirty(),
            self.heart_rate.is_dirty(),
            self.heart_rate_active.is_dirty(),
            self.weather.is_dirty(),
            self.notification_count.is_dirty(),
            self.notifications_present.is_dirty(),
        ]
        .iter()
        .filter(|dirty| **dirty)
        .count()
    }
}

impl Default for FieldSnapshotBank {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
