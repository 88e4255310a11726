//! The per-tick refresh pass.
//!
//! [`RefreshOrchestrator::refresh`] is the only thing the host calls on every
//! tick. It pulls one snapshot from the collaborators into the
//! [`FieldSnapshotBank`], then walks [`REFRESH_ORDER`] and emits a
//! [`FaceUpdate`] only for the fields whose cells changed.
//!
//! # Pass Algorithm
//!
//! 1. `pull`: every cell is `set` from its collaborator
//! 2. For each field in dependency order:
//!    - plain fields: if dirty, `get` the value and emit one update
//!    - seconds: evaluated every tick, the carousel decides reset vs. step
//!    - battery, radio, notifications: two cells, one combined redraw
//!    - vitals: the slot arbiter decides rebuild vs. value update
//!
//! Each pass is independent: given the same collaborator snapshot twice in a
//! row, the second pass emits nothing.
//!
//! # Concurrency
//!
//! `refresh` takes `&mut self`, so two passes over one orchestrator can never
//! overlap. A host whose tick callback may re-enter must keep the orchestrator
//! behind a mutex (e.g. `embassy_sync::blocking_mutex`) and hold it for the
//! whole pass.

use crate::arbiter::{SlotArbiter, VitalsOwner};
use crate::bank::FieldSnapshotBank;
use crate::carousel::{CarouselStep, DigitCarousel};
use crate::config::NANOS_PER_SECOND;
use crate::error::FaceError;
use crate::probe::{self, AssetProbe};
use crate::render::{FIELD_COUNT, FaceUpdate, FaceView, Field, REFRESH_ORDER, RadioIcon, TimeReadout};
use crate::settings::FaceSettings;
use crate::sources::Controllers;
use crate::thresholds::BatteryTier;

// =============================================================================
// Pass Report
// =============================================================================

/// What one refresh pass did.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PassReport {
    counts: [u8; FIELD_COUNT],
    /// The vitals slot was structurally rebuilt.
    pub vitals_rebuilt: bool,
    /// The seconds rings were rebuilt instead of stepped.
    pub seconds_reset: bool,
}

impl PassReport {
    /// Number of updates emitted for `field`.
    #[inline]
    pub const fn count(
        &self,
        field: Field,
    ) -> u8 {
        self.counts[field.index()]
    }

    /// Number of updates emitted in total.
    pub fn total(&self) -> u32 { self.counts.iter().map(|&n| u32::from(n)).sum() }

    /// Whether the pass left the screen untouched.
    pub fn is_idle(&self) -> bool { self.total() == 0 }

    fn record(
        &mut self,
        field: Field,
    ) {
        let slot = &mut self.counts[field.index()];
        *slot = slot.saturating_add(1);
    }
}

/// Forwards updates to the view while counting them.
struct Sink<'v, V: FaceView + ?Sized> {
    view: &'v mut V,
    report: PassReport,
}

impl<V: FaceView + ?Sized> Sink<'_, V> {
    fn emit(
        &mut self,
        update: FaceUpdate,
    ) {
        self.report.record(update.field());
        self.view.apply(update);
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Dirty-tracking refresh engine for one face instance.
///
/// Owns the cell bank, the vitals arbiter and the seconds carousel exclusively;
/// nothing else mutates them.
pub struct RefreshOrchestrator<'a> {
    controllers: Controllers<'a>,
    settings: FaceSettings,
    bank: FieldSnapshotBank,
    arbiter: SlotArbiter,
    carousel: DigitCarousel,
}

impl<'a> RefreshOrchestrator<'a> {
    /// Build an orchestrator for these collaborators.
    ///
    /// Assumes the capability probe already passed; see [`try_new`](Self::try_new).
    /// Every cell starts at its sentinel, so the first pass draws every field.
    pub const fn new(
        controllers: Controllers<'a>,
        settings: FaceSettings,
    ) -> Self {
        Self {
            controllers,
            settings,
            bank: FieldSnapshotBank::new(),
            arbiter: SlotArbiter::new(),
            carousel: DigitCarousel::new(),
        }
    }

    /// Run the capability probe, then build the orchestrator.
    ///
    /// # Errors
    ///
    /// [`FaceError::MissingAsset`] naming the first required asset that is absent.
    pub fn try_new(
        controllers: Controllers<'a>,
        settings: FaceSettings,
        assets: &dyn AssetProbe,
    ) -> Result<Self, FaceError> {
        probe::check(assets)?;
        Ok(Self::new(controllers, settings))
    }

    /// Run one refresh pass, sending every required widget change to `view`.
    pub fn refresh<V: FaceView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> PassReport {
        self.bank.pull(&self.controllers);

        let mut sink = Sink {
            view,
            report: PassReport::default(),
        };

        for field in REFRESH_ORDER {
            match field {
                Field::Date => {
                    if self.bank.date.is_dirty() {
                        sink.emit(FaceUpdate::Date(self.bank.date.get()));
                    }
                }
                Field::Week => {
                    if self.bank.week.is_dirty() {
                        sink.emit(FaceUpdate::Week(self.bank.week.get()));
                    }
                }
                Field::Time => {
                    if self.bank.time.is_dirty() {
                        let readout = TimeReadout::new(self.bank.time.get(), self.settings.clock_format);
                        sink.emit(FaceUpdate::Time(readout));
                    }
                }
                Field::Seconds => self.refresh_seconds(&mut sink),
                Field::Battery => {
                    if self.bank.battery_percent.is_dirty() || self.bank.charging.is_dirty() {
                        let percent = self.bank.battery_percent.get();
                        let charging = self.bank.charging.get();
                        sink.emit(FaceUpdate::Battery {
                            percent,
                            tier: BatteryTier::classify(percent, charging),
                        });
                    }
                }
                Field::Radio => {
                    if self.bank.connected.is_dirty() || self.bank.radio_enabled.is_dirty() {
                        let icon = RadioIcon::from_state(self.bank.connected.get(), self.bank.radio_enabled.get());
                        sink.emit(FaceUpdate::Radio(icon));
                    }
                }
                Field::Notifications => {
                    if self.bank.notification_count.is_dirty() || self.bank.notifications_present.is_dirty() {
                        sink.emit(FaceUpdate::Notifications {
                            count: self.bank.notification_count.get(),
                            present: self.bank.notifications_present.get(),
                        });
                    }
                }
                Field::Steps => {
                    if self.bank.steps.is_dirty() {
                        sink.emit(FaceUpdate::Steps(self.bank.steps.get()));
                    }
                }
                Field::Vitals => self.refresh_vitals(&mut sink),
            }
        }

        sink.report
    }

    /// Forget everything drawn so far; the next pass repaints every field.
    ///
    /// Call this when the screen is re-entered after something else covered it.
    pub fn invalidate(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("watch face invalidated");

        self.bank.reset();
        self.arbiter.reset();
        self.carousel.reset();
    }

    /// Owner of the vitals slot after the latest pass.
    #[inline]
    pub const fn vitals_owner(&self) -> Option<VitalsOwner> { self.arbiter.owner() }

    #[inline]
    pub const fn settings(&self) -> FaceSettings { self.settings }

    fn refresh_seconds<V: FaceView + ?Sized>(
        &mut self,
        sink: &mut Sink<'_, V>,
    ) {
        let nanos = self.bank.nanos.get();
        let second = u8::try_from(nanos / NANOS_PER_SECOND).unwrap_or(u8::MAX);

        // Minute cell belongs to the time readout; peek keeps its dirty bit intact
        match self.carousel.advance(second, self.bank.time.peek()) {
            CarouselStep::Unchanged => {}
            CarouselStep::Reset { tens, ones } => {
                sink.report.seconds_reset = true;
                sink.emit(FaceUpdate::SecondsReset { tens, ones });
            }
            CarouselStep::Advance { ones, tens } => {
                sink.emit(FaceUpdate::SecondsOnes(ones));
                if let Some(tens) = tens {
                    sink.emit(FaceUpdate::SecondsTens(tens));
                }
            }
        }
    }

    fn refresh_vitals<V: FaceView + ?Sized>(
        &mut self,
        sink: &mut Sink<'_, V>,
    ) {
        let weather = self.bank.weather.peek();
        let decision = self.arbiter.evaluate(self.bank.heart_rate_active.peek(), weather.is_some());

        if decision.rebuild {
            #[cfg(feature = "defmt")]
            defmt::debug!("vitals slot {} -> {}", decision.previous, decision.owner);

            sink.report.vitals_rebuilt = true;
            sink.emit(FaceUpdate::VitalsRebuild {
                previous: decision.previous,
                owner: decision.owner,
            });
        }

        match decision.owner {
            VitalsOwner::HeartRate => {
                if decision.rebuild || self.bank.heart_rate.is_dirty() {
                    sink.emit(FaceUpdate::HeartRate {
                        bpm: self.bank.heart_rate.get(),
                    });
                }
            }
            VitalsOwner::Weather => {
                if decision.rebuild || self.bank.weather.is_dirty() {
                    if let Some(current) = self.bank.weather.get() {
                        let unit = self.settings.temperature_unit;
                        sink.emit(FaceUpdate::Weather {
                            temperature: current.display_temperature(unit),
                            unit,
                            icon: current.icon,
                        });
                    }
                }
            }
            VitalsOwner::Vacant => {}
        }

        // Hidden owner's cells are acknowledged too; its next rebuild draws from the latest value
        self.bank.heart_rate.get();
        self.bank.heart_rate_active.get();
        self.bank.weather.get();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::settings::{ClockFormat, TemperatureUnit};
    use crate::sources::{
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

    /// 2026-10-17 13:37 UTC in minutes since the epoch.
    const START_MINUTE: u32 = 29_870_737;

    /// Collaborators backed by cells so tests can change them between passes.
    struct World {
        minute: Cell<u32>,
        nanos: Cell<u64>,
        date: Cell<CalendarDate>,
        week: Cell<u8>,
        percent: Cell<u8>,
        charging: Cell<bool>,
        connected: Cell<bool>,
        radio_enabled: Cell<bool>,
        steps: Cell<u32>,
        bpm: Cell<u8>,
        measuring: Cell<bool>,
        weather: Cell<Option<CurrentWeather>>,
        pending: Cell<u16>,
        unread: Cell<bool>,
    }

    impl World {
        fn new() -> Self {
            Self {
                minute: Cell::new(START_MINUTE),
                nanos: Cell::new(12 * NANOS_PER_SECOND),
                date: Cell::new(CalendarDate {
                    year: 2026,
                    month: 10,
                    day: 17,
                    day_of_year: 290,
                    weekday: Weekday::Saturday,
                }),
                week: Cell::new(42),
                percent: Cell::new(57),
                charging: Cell::new(false),
                connected: Cell::new(true),
                radio_enabled: Cell::new(true),
                steps: Cell::new(1234),
                bpm: Cell::new(0),
                measuring: Cell::new(false),
                weather: Cell::new(Some(CurrentWeather {
                    temperature: 1840,
                    icon: WeatherIcon::FewClouds,
                })),
                pending: Cell::new(0),
                unread: Cell::new(false),
            }
        }

        fn controllers(&self) -> Controllers<'_> {
            Controllers {
                clock: self,
                power: self,
                radio: self,
                motion: self,
                heart_rate: self,
                weather: self,
                notifications: self,
            }
        }

        fn set_second(
            &self,
            second: u64,
        ) {
            self.nanos.set(second * NANOS_PER_SECOND);
        }
    }

    impl ClockSource for World {
        fn minute(&self) -> WallMinute { WallMinute(self.minute.get()) }

        fn sub_minute_nanos(&self) -> u64 { self.nanos.get() }

        fn date(&self) -> CalendarDate { self.date.get() }

        fn iso_week(&self) -> u8 { self.week.get() }
    }

    impl PowerSource for World {
        fn percent_remaining(&self) -> u8 { self.percent.get() }

        fn is_charging(&self) -> bool { self.charging.get() }
    }

    impl RadioSource for World {
        fn is_connected(&self) -> bool { self.connected.get() }

        fn is_radio_enabled(&self) -> bool { self.radio_enabled.get() }
    }

    impl MotionSource for World {
        fn step_count(&self) -> u32 { self.steps.get() }
    }

    impl HeartRateSource for World {
        fn heart_rate(&self) -> u8 { self.bpm.get() }

        fn is_measuring(&self) -> bool { self.measuring.get() }
    }

    impl WeatherSource for World {
        fn current_weather(&self) -> Option<CurrentWeather> { self.weather.get() }
    }

    impl NotificationSource for World {
        fn pending_count(&self) -> u16 { self.pending.get() }

        fn has_unread(&self) -> bool { self.unread.get() }
    }

    /// View that records every update instead of drawing it.
    #[derive(Default)]
    struct Recorder {
        updates: heapless::Vec<FaceUpdate, 32>,
    }

    impl FaceView for Recorder {
        fn apply(
            &mut self,
            update: FaceUpdate,
        ) {
            self.updates.push(update).expect("recorder full");
        }
    }

    fn pass(orchestrator: &mut RefreshOrchestrator<'_>) -> (PassReport, Recorder) {
        let mut recorder = Recorder::default();
        let report = orchestrator.refresh(&mut recorder);
        (report, recorder)
    }

    fn warmed_up(world: &World) -> RefreshOrchestrator<'_> {
        let mut orchestrator = RefreshOrchestrator::new(world.controllers(), FaceSettings::default());
        pass(&mut orchestrator);
        orchestrator
    }

    // -------------------------------------------------------------------------
    // First tick
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_pass_draws_every_field_once() {
        let world = World::new();
        let mut orchestrator = RefreshOrchestrator::new(world.controllers(), FaceSettings::default());
        let (report, recorder) = pass(&mut orchestrator);

        for field in REFRESH_ORDER {
            if field != Field::Vitals {
                assert_eq!(report.count(field), 1, "{field:?} not drawn exactly once");
            }
        }
        assert!(report.seconds_reset);
        assert!(report.vitals_rebuilt);
        assert_eq!(report.count(Field::Vitals), 2, "Rebuild plus the weather value");

        assert!(recorder.updates.contains(&FaceUpdate::SecondsReset { tens: 1, ones: 2 }));
        assert!(recorder.updates.contains(&FaceUpdate::VitalsRebuild {
            previous: None,
            owner: VitalsOwner::Weather,
        }));
        assert!(recorder.updates.contains(&FaceUpdate::Weather {
            temperature: 18,
            unit: TemperatureUnit::Celsius,
            icon: WeatherIcon::FewClouds,
        }));
    }

    #[test]
    fn test_first_pass_follows_refresh_order() {
        let world = World::new();
        let mut orchestrator = RefreshOrchestrator::new(world.controllers(), FaceSettings::default());
        let (_, recorder) = pass(&mut orchestrator);

        let positions: heapless::Vec<usize, 32> = recorder.updates.iter().map(|u| u.field().index()).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]), "Updates out of order: {positions:?}");
    }

    #[test]
    fn test_identical_snapshot_emits_nothing() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        let (report, recorder) = pass(&mut orchestrator);
        assert!(report.is_idle());
        assert!(recorder.updates.is_empty());
    }

    // -------------------------------------------------------------------------
    // Battery
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_tiers_redraw_once_per_change() {
        let world = World::new();
        let mut orchestrator = RefreshOrchestrator::new(world.controllers(), FaceSettings::default());

        let (report, recorder) = pass(&mut orchestrator);
        assert_eq!(report.count(Field::Battery), 1);
        assert!(recorder.updates.contains(&FaceUpdate::Battery {
            percent: 57,
            tier: BatteryTier::Normal,
        }));

        world.charging.set(true);
        let (report, recorder) = pass(&mut orchestrator);
        assert_eq!(report.count(Field::Battery), 1);
        assert_eq!(report.total(), 1, "Only the battery changed");
        assert_eq!(recorder.updates[0], FaceUpdate::Battery {
            percent: 57,
            tier: BatteryTier::Charging,
        });
    }

    #[test]
    fn test_low_battery_tier() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.percent.set(12);
        let (_, recorder) = pass(&mut orchestrator);
        assert_eq!(recorder.updates[0], FaceUpdate::Battery {
            percent: 12,
            tier: BatteryTier::Low,
        });
    }

    // -------------------------------------------------------------------------
    // Seconds
    // -------------------------------------------------------------------------

    #[test]
    fn test_second_step_touches_only_ones_ring() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.set_second(13);
        let (report, recorder) = pass(&mut orchestrator);
        assert!(!report.seconds_reset);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::SecondsOnes(3)]);
    }

    #[test]
    fn test_tens_ring_rolls_on_wrap() {
        let world = World::new();
        world.set_second(19);
        let mut orchestrator = warmed_up(&world);

        world.set_second(20);
        let (_, recorder) = pass(&mut orchestrator);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::SecondsOnes(0), FaceUpdate::SecondsTens(2)]);
    }

    #[test]
    fn test_minute_rollover_is_an_increment() {
        let world = World::new();
        world.set_second(59);
        let mut orchestrator = warmed_up(&world);

        world.minute.set(START_MINUTE + 1);
        world.set_second(0);
        let (report, recorder) = pass(&mut orchestrator);

        assert!(!report.seconds_reset);
        assert_eq!(report.count(Field::Time), 1);
        assert!(recorder.updates.contains(&FaceUpdate::SecondsOnes(0)));
        assert!(recorder.updates.contains(&FaceUpdate::SecondsTens(0)));
    }

    #[test]
    fn test_clock_set_resets_seconds_once() {
        let world = World::new();
        world.set_second(5);
        let mut orchestrator = warmed_up(&world);

        world.minute.set(START_MINUTE + 37);
        world.set_second(47);
        let (report, recorder) = pass(&mut orchestrator);
        assert!(report.seconds_reset);
        assert_eq!(report.count(Field::Seconds), 1);
        assert!(recorder.updates.contains(&FaceUpdate::SecondsReset { tens: 4, ones: 7 }));

        world.set_second(48);
        let (report, _) = pass(&mut orchestrator);
        assert!(!report.seconds_reset);
    }

    #[test]
    fn test_malformed_second_blanks_to_zero() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.nanos.set(75 * NANOS_PER_SECOND);
        let (report, recorder) = pass(&mut orchestrator);
        assert!(report.seconds_reset);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::SecondsReset { tens: 0, ones: 0 }]);
    }

    // -------------------------------------------------------------------------
    // Vitals slot
    // -------------------------------------------------------------------------

    #[test]
    fn test_heart_rate_preempts_weather_with_one_rebuild() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);
        assert_eq!(orchestrator.vitals_owner(), Some(VitalsOwner::Weather));

        world.measuring.set(true);
        world.bpm.set(72);
        let (report, recorder) = pass(&mut orchestrator);
        assert!(report.vitals_rebuilt);
        assert_eq!(recorder.updates.as_slice(), &[
            FaceUpdate::VitalsRebuild {
                previous: Some(VitalsOwner::Weather),
                owner: VitalsOwner::HeartRate,
            },
            FaceUpdate::HeartRate { bpm: 72 },
        ]);

        world.bpm.set(75);
        let (report, recorder) = pass(&mut orchestrator);
        assert!(!report.vitals_rebuilt);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::HeartRate { bpm: 75 }]);
    }

    #[test]
    fn test_unchanged_heart_rate_is_not_redrawn() {
        let world = World::new();
        world.measuring.set(true);
        world.bpm.set(64);
        let mut orchestrator = warmed_up(&world);

        let (report, _) = pass(&mut orchestrator);
        assert_eq!(report.count(Field::Vitals), 0);
    }

    #[test]
    fn test_heart_rate_off_without_weather_leaves_slot_vacant() {
        let world = World::new();
        world.weather.set(None);
        world.measuring.set(true);
        world.bpm.set(80);
        let mut orchestrator = warmed_up(&world);

        world.measuring.set(false);
        world.bpm.set(0);
        let (report, recorder) = pass(&mut orchestrator);
        assert_eq!(orchestrator.vitals_owner(), Some(VitalsOwner::Vacant));
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::VitalsRebuild {
            previous: Some(VitalsOwner::HeartRate),
            owner: VitalsOwner::Vacant,
        }]);
        assert!(report.vitals_rebuilt);

        // Vacant slot stays untouched while heart rate keeps changing in the background
        world.bpm.set(90);
        let (report, _) = pass(&mut orchestrator);
        assert_eq!(report.count(Field::Vitals), 0);
    }

    #[test]
    fn test_weather_change_updates_value_in_place() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.weather.set(Some(CurrentWeather {
            temperature: -420,
            icon: WeatherIcon::Snow,
        }));
        let (report, recorder) = pass(&mut orchestrator);
        assert!(!report.vitals_rebuilt);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::Weather {
            temperature: -4,
            unit: TemperatureUnit::Celsius,
            icon: WeatherIcon::Snow,
        }]);
    }

    #[test]
    fn test_weather_expiry_rebuilds_slot() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.weather.set(None);
        let (report, _) = pass(&mut orchestrator);
        assert!(report.vitals_rebuilt);
        assert_eq!(orchestrator.vitals_owner(), Some(VitalsOwner::Vacant));
    }

    #[test]
    fn test_back_to_weather_redraws_latest_value() {
        let world = World::new();
        world.measuring.set(true);
        let mut orchestrator = warmed_up(&world);

        // Weather changes while hidden behind the heart rate
        world.weather.set(Some(CurrentWeather {
            temperature: 2500,
            icon: WeatherIcon::Sun,
        }));
        pass(&mut orchestrator);

        world.measuring.set(false);
        let (_, recorder) = pass(&mut orchestrator);
        assert!(recorder.updates.contains(&FaceUpdate::Weather {
            temperature: 25,
            unit: TemperatureUnit::Celsius,
            icon: WeatherIcon::Sun,
        }));
    }

    // -------------------------------------------------------------------------
    // Combined and derived fields
    // -------------------------------------------------------------------------

    #[test]
    fn test_radio_disabled_redraws_icon_once() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.radio_enabled.set(false);
        world.connected.set(false);
        let (report, recorder) = pass(&mut orchestrator);
        assert_eq!(report.count(Field::Radio), 1);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::Radio(RadioIcon::Disabled)]);
    }

    #[test]
    fn test_notification_arrival() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        world.pending.set(3);
        world.unread.set(true);
        let (_, recorder) = pass(&mut orchestrator);
        assert_eq!(recorder.updates.as_slice(), &[FaceUpdate::Notifications {
            count: 3,
            present: true,
        }]);
    }

    #[test]
    fn test_twelve_hour_and_fahrenheit_settings() {
        let world = World::new();
        let settings = FaceSettings {
            clock_format: ClockFormat::TwelveHour,
            temperature_unit: TemperatureUnit::Fahrenheit,
        };
        let mut orchestrator = RefreshOrchestrator::new(world.controllers(), settings);
        let (_, recorder) = pass(&mut orchestrator);

        assert!(recorder.updates.contains(&FaceUpdate::Time(TimeReadout::new(
            WallMinute(START_MINUTE),
            ClockFormat::TwelveHour,
        ))));
        // 18.4 C = 65.12 F
        assert!(recorder.updates.contains(&FaceUpdate::Weather {
            temperature: 65,
            unit: TemperatureUnit::Fahrenheit,
            icon: WeatherIcon::FewClouds,
        }));
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_invalidate_repaints_everything() {
        let world = World::new();
        let mut orchestrator = warmed_up(&world);

        orchestrator.invalidate();
        let (report, _) = pass(&mut orchestrator);
        for field in REFRESH_ORDER {
            assert!(report.count(field) >= 1, "{field:?} not repainted");
        }
        assert!(report.seconds_reset);
        assert!(report.vitals_rebuilt);
    }

    #[test]
    fn test_try_new_reports_missing_asset() {
        struct NoFonts;

        impl AssetProbe for NoFonts {
            fn exists(
                &self,
                path: &str,
            ) -> bool {
                !path.starts_with("/fonts/")
            }
        }

        let world = World::new();
        let result = RefreshOrchestrator::try_new(world.controllers(), FaceSettings::default(), &NoFonts);
        assert!(matches!(result, Err(FaceError::MissingAsset("/fonts/antonio_78.bin"))));
    }

    #[test]
    fn test_pass_report_counts() {
        let mut report = PassReport::default();
        assert!(report.is_idle());
        report.record(Field::Seconds);
        report.record(Field::Seconds);
        report.record(Field::Steps);
        assert_eq!(report.count(Field::Seconds), 2);
        assert_eq!(report.total(), 3);
    }
}
