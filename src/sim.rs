//! Simulated watch hardware for the desktop simulator.
//!
//! [`SimWorld`] implements every collaborator trait over interior-mutable state,
//! so the orchestrator can hold shared references to it while the main loop
//! keeps advancing time and flipping toggles between passes.
//!
//! Continuous values (battery, heart rate, temperature, step rate) are sine
//! waves over simulation time, like the dashboard's fake sensor signals.

use std::cell::Cell;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use lcars_watchface::sources::{
    CalendarDate,
    ClockSource,
    CurrentWeather,
    HeartRateSource,
    MotionSource,
    NotificationSource,
    PowerSource,
    RadioSource,
    WallMinute,
    WeatherIcon,
    WeatherSource,
    Weekday,
};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Notifications wrap back to zero ("all read") after this many.
const MAX_NOTIFICATIONS: u16 = 5;

/// Simulated collaborators driven by wall-clock time.
pub struct SimWorld {
    /// Host wall clock at the latest tick.
    host_now: Cell<DateTime<Utc>>,
    /// Manual clock adjustment (the `T` key).
    clock_offset: Cell<Duration>,
    /// Simulation time in seconds, drives the signals.
    t: Cell<f32>,

    battery: Cell<f32>,
    charging: Cell<bool>,
    connected: Cell<bool>,
    radio_enabled: Cell<bool>,
    steps: Cell<f32>,
    bpm: Cell<u8>,
    measuring: Cell<bool>,
    weather_on: Cell<bool>,
    notifications: Cell<u16>,
}

impl SimWorld {
    /// World whose clock starts at `host_now`.
    pub fn new(host_now: DateTime<Utc>) -> Self {
        Self {
            host_now: Cell::new(host_now),
            clock_offset: Cell::new(Duration::zero()),
            t: Cell::new(0.0),
            battery: Cell::new(64.0),
            charging: Cell::new(false),
            connected: Cell::new(true),
            radio_enabled: Cell::new(true),
            steps: Cell::new(0.0),
            bpm: Cell::new(0),
            measuring: Cell::new(false),
            weather_on: Cell::new(true),
            notifications: Cell::new(0),
        }
    }

    /// Advance the world to `host_now`, updating every time-driven signal.
    pub fn tick(
        &self,
        host_now: DateTime<Utc>,
    ) {
        // Host clock stepping backwards counts as no time passing
        let elapsed = (host_now - self.host_now.get())
            .to_std()
            .map_or(0.0, |d| d.as_secs_f32());
        self.host_now.set(host_now);
        let t = self.t.get() + elapsed;
        self.t.set(t);

        // Battery: charge 1 %/s on the cable, otherwise drain slowly
        let rate = if self.charging.get() { 1.0 } else { -0.05 };
        self.battery.set((self.battery.get() + rate * elapsed).clamp(0.0, 100.0));

        self.steps.set(self.steps.get() + fake_signal(t, 0.0, 2.5, 0.05) * elapsed);

        if self.measuring.get() {
            self.bpm.set(fake_signal(t, 58.0, 142.0, 0.15) as u8);
        }
    }

    /// Shift the simulated clock by `secs`.
    pub fn jump_clock(
        &self,
        secs: i64,
    ) {
        self.clock_offset.set(self.clock_offset.get() + Duration::seconds(secs));
    }

    /// Toggle the heart-rate sensor. Returns the new state.
    pub fn toggle_heart_rate(&self) -> bool {
        let on = !self.measuring.get();
        self.measuring.set(on);
        if on {
            self.bpm.set(fake_signal(self.t.get(), 58.0, 142.0, 0.15) as u8);
        }
        on
    }

    /// Toggle weather data availability. Returns the new state.
    pub fn toggle_weather(&self) -> bool { toggle(&self.weather_on) }

    /// Toggle the charger. Returns the new state.
    pub fn toggle_charging(&self) -> bool { toggle(&self.charging) }

    /// Toggle the radio. Returns the new state.
    pub fn toggle_radio(&self) -> bool { toggle(&self.radio_enabled) }

    /// Toggle the phone link. Returns the new state.
    pub fn toggle_connected(&self) -> bool { toggle(&self.connected) }

    /// Queue one more notification, wrapping to none after [`MAX_NOTIFICATIONS`].
    /// Returns the new count.
    pub fn push_notification(&self) -> u16 {
        let count = (self.notifications.get() + 1) % (MAX_NOTIFICATIONS + 1);
        self.notifications.set(count);
        count
    }

    /// Simulated wall clock.
    fn now(&self) -> DateTime<Utc> { self.host_now.get() + self.clock_offset.get() }
}

fn toggle(cell: &Cell<bool>) -> bool {
    let on = !cell.get();
    cell.set(on);
    on
}

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// # Parameters
/// - `t`: Time parameter in seconds
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

// =============================================================================
// Collaborator Implementations
// =============================================================================

impl ClockSource for SimWorld {
    fn minute(&self) -> WallMinute { WallMinute(u32::try_from(self.now().timestamp().div_euclid(60)).unwrap_or(0)) }

    fn sub_minute_nanos(&self) -> u64 {
        let now = self.now();
        u64::from(now.second()) * NANOS_PER_SECOND + u64::from(now.nanosecond())
    }

    fn date(&self) -> CalendarDate { calendar_date(self.now().date_naive()) }

    fn iso_week(&self) -> u8 { self.now().iso_week().week() as u8 }
}

impl PowerSource for SimWorld {
    fn percent_remaining(&self) -> u8 { self.battery.get().round() as u8 }

    fn is_charging(&self) -> bool { self.charging.get() }
}

impl RadioSource for SimWorld {
    fn is_connected(&self) -> bool { self.connected.get() }

    fn is_radio_enabled(&self) -> bool { self.radio_enabled.get() }
}

impl MotionSource for SimWorld {
    fn step_count(&self) -> u32 { self.steps.get() as u32 }
}

impl HeartRateSource for SimWorld {
    fn heart_rate(&self) -> u8 { self.bpm.get() }

    fn is_measuring(&self) -> bool { self.measuring.get() }
}

impl WeatherSource for SimWorld {
    fn current_weather(&self) -> Option<CurrentWeather> {
        if !self.weather_on.get() {
            return None;
        }
        let celsius = fake_signal(self.t.get(), -8.0, 31.0, 0.02);
        // Quantize to tenths so the forecast doesn't change on every tick
        let temperature = (celsius * 10.0).round() as i16 * 10;
        Some(CurrentWeather {
            temperature,
            icon: weather_icon(celsius),
        })
    }
}

impl NotificationSource for SimWorld {
    fn pending_count(&self) -> u16 { self.notifications.get() }

    fn has_unread(&self) -> bool { self.notifications.get() > 0 }
}

fn weather_icon(celsius: f32) -> WeatherIcon {
    if celsius < 0.0 {
        WeatherIcon::Snow
    } else if celsius < 8.0 {
        WeatherIcon::CloudsWithRain
    } else if celsius < 16.0 {
        WeatherIcon::Clouds
    } else if celsius < 24.0 {
        WeatherIcon::FewClouds
    } else {
        WeatherIcon::Sun
    }
}

/// Face calendar values for a chrono date.
fn calendar_date(date: NaiveDate) -> CalendarDate {
    CalendarDate {
        year: u16::try_from(date.year()).unwrap_or(0),
        month: date.month() as u8,
        day: date.day() as u8,
        day_of_year: date.ordinal() as u16,
        weekday: Weekday::from_iso_number(date.weekday().number_from_monday() as u8),
    }
}

// =============================================================================
// Tests
// =============================================================================
