//! LCARS screen: the [`FaceView`] that draws updates onto a display.
//!
//! Each [`FaceUpdate`] variant maps to exactly one drawing routine, and each
//! routine clears and redraws only its own region from [`config`](crate::config).
//! Nothing here decides *whether* to draw; that is the orchestrator's job.
//!
//! # Static Chrome
//!
//! The LCARS frame (elbows, sidebar segments, bar labels) never changes and is
//! drawn once by [`LcarsScreen::draw_chrome`] when the page is shown.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{
    Corner,
    center_anchor,
    clear_region,
    digit_str,
    draw_bar,
    draw_elbow,
    draw_pill,
    left_anchor,
    right_anchor,
};
use crate::arbiter::VitalsOwner;
use crate::colors::{
    BG_BLUE,
    BG_LIGHT_BLUE,
    BG_LIGHT_VIOLET,
    BG_ORANGE,
    BG_RED,
    BG_VIOLET,
    BG_YELLOW,
    BLACK,
    GRAY,
    ORANGE,
    RED,
};
use crate::config::{
    BATTERY_REGION,
    CONTENT_X,
    DATE_REGION,
    MERIDIEM_REGION,
    NOTIFICATION_REGION,
    RADIO_REGION,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SECONDS_ONES_REGION,
    SECONDS_TENS_REGION,
    SIDEBAR_WIDTH,
    STARDATE_REGION,
    STEPS_REGION,
    TIME_REGION,
    VITALS_ICON_REGION,
    VITALS_REGION,
    VITALS_VALUE_REGION,
    WEEK_REGION,
};
use crate::profiling::push_u32;
use crate::render::{FaceUpdate, FaceView, RadioIcon, TimeReadout};
use crate::settings::TemperatureUnit;
use crate::sources::{CalendarDate, WeatherIcon};
use crate::styles::{
    BAR_LABEL_STYLE,
    CENTERED,
    LABEL_STYLE_GRAY,
    LEFT_ALIGNED,
    READOUT_FONT,
    READOUT_STYLE_WHITE,
    RIGHT_ALIGNED,
    SECONDS_STYLE,
    TIME_STYLE,
    TITLE_STYLE_WHITE,
};
use crate::thresholds::BatteryTier;

// =============================================================================
// Frame Geometry
// =============================================================================

/// Thickness of the horizontal strips leaving the elbows.
const STRIP_HEIGHT: u32 = 4;

/// Top elbow, joined to the header strip.
const TOP_ELBOW: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SIDEBAR_WIDTH, 28));

/// Strip under the header readouts.
const HEADER_STRIP: Rectangle = Rectangle::new(
    Point::new(SIDEBAR_WIDTH as i32, 24),
    Size::new(SCREEN_WIDTH - SIDEBAR_WIDTH, STRIP_HEIGHT),
);

/// Bottom elbow, joined to the footer strip.
const BOTTOM_ELBOW: Rectangle = Rectangle::new(Point::new(0, 192), Size::new(SIDEBAR_WIDTH, SCREEN_HEIGHT - 192));

/// Strip under the step counter.
const FOOTER_STRIP: Rectangle = Rectangle::new(
    Point::new(SIDEBAR_WIDTH as i32, SCREEN_HEIGHT as i32 - STRIP_HEIGHT as i32),
    Size::new(SCREEN_WIDTH - SIDEBAR_WIDTH, STRIP_HEIGHT),
);

/// Sidebar segments between the elbows: (region, colour, label).
const SIDEBAR_SEGMENTS: [(Rectangle, Rgb565, &str); 4] = [
    (Rectangle::new(Point::new(0, 32), Size::new(SIDEBAR_WIDTH, 24)), BG_YELLOW, "SYS"),
    (Rectangle::new(Point::new(0, 60), Size::new(SIDEBAR_WIDTH, 52)), BG_BLUE, "TIME"),
    (Rectangle::new(Point::new(0, 116), Size::new(SIDEBAR_WIDTH, 28)), BG_VIOLET, "DATE"),
    (Rectangle::new(Point::new(0, 148), Size::new(SIDEBAR_WIDTH, 40)), BG_RED, "VIT"),
];

/// Title pill at the top of the vitals slot.
const VITALS_TITLE_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 148), Size::new(90, 14));

// =============================================================================
// Screen
// =============================================================================

/// The watch face drawn onto any RGB565 display.
pub struct LcarsScreen<'d, D> {
    display: &'d mut D,
}

impl<'d, D> LcarsScreen<'d, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub const fn new(display: &'d mut D) -> Self { Self { display } }

    /// Clear the display and draw the static LCARS frame.
    ///
    /// Dynamic regions are left blank; pair this with
    /// [`RefreshOrchestrator::invalidate`](crate::RefreshOrchestrator::invalidate).
    pub fn draw_chrome(&mut self) {
        self.display.clear(BLACK).ok();

        draw_elbow(self.display, &TOP_ELBOW, Corner::TopLeft, BG_ORANGE);
        draw_bar(self.display, &HEADER_STRIP, BG_ORANGE, None);

        for (region, color, label) in &SIDEBAR_SEGMENTS {
            draw_bar(self.display, region, *color, Some(*label));
        }

        draw_elbow(self.display, &BOTTOM_ELBOW, Corner::BottomLeft, BG_LIGHT_VIOLET);
        draw_bar(self.display, &FOOTER_STRIP, BG_LIGHT_VIOLET, None);
    }

    fn draw_date(
        &mut self,
        date: &CalendarDate,
    ) {
        // Stardate: YYYY.DDD
        let mut stardate: String<12> = String::new();
        write!(stardate, "{}.{:03}", date.year, date.day_of_year).ok();
        clear_region(self.display, &STARDATE_REGION);
        Text::with_text_style(&stardate, left_anchor(&STARDATE_REGION), TITLE_STYLE_WHITE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();

        let mut label: String<16> = String::new();
        write!(label, "{} {:02} {}", date.weekday.abbrev(), date.day, date.month_abbrev()).ok();
        clear_region(self.display, &DATE_REGION);
        Text::with_text_style(&label, left_anchor(&DATE_REGION), READOUT_STYLE_WHITE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();
    }

    fn draw_week(
        &mut self,
        week: u8,
    ) {
        let mut label: String<8> = String::new();
        write!(label, "WK {week:02}").ok();
        clear_region(self.display, &WEEK_REGION);
        Text::with_text_style(&label, right_anchor(&WEEK_REGION), MonoTextStyle::new(READOUT_FONT, GRAY), RIGHT_ALIGNED)
            .draw(self.display)
            .ok();
    }

    fn draw_time(
        &mut self,
        time: &TimeReadout,
    ) {
        let mut label: String<8> = String::new();
        write!(label, "{:02}:{:02}", time.hour, time.minute).ok();
        clear_region(self.display, &TIME_REGION);
        Text::with_text_style(&label, left_anchor(&TIME_REGION), TIME_STYLE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();

        clear_region(self.display, &MERIDIEM_REGION);
        if let Some(meridiem) = time.meridiem {
            Text::with_text_style(meridiem.label(), left_anchor(&MERIDIEM_REGION), LABEL_STYLE_GRAY, LEFT_ALIGNED)
                .draw(self.display)
                .ok();
        }
    }

    fn draw_seconds_digit(
        &mut self,
        region: &Rectangle,
        digit: u8,
    ) {
        clear_region(self.display, region);
        Text::with_text_style(digit_str(digit), center_anchor(region), SECONDS_STYLE, CENTERED)
            .draw(self.display)
            .ok();
    }

    fn draw_battery(
        &mut self,
        percent: u8,
        tier: BatteryTier,
    ) {
        let mut label: String<5> = String::new();
        push_u32(&mut label, u32::from(percent));
        label.push('%').ok();
        clear_region(self.display, &BATTERY_REGION);
        Text::with_text_style(
            &label,
            right_anchor(&BATTERY_REGION),
            MonoTextStyle::new(READOUT_FONT, tier.color()),
            RIGHT_ALIGNED,
        )
        .draw(self.display)
        .ok();
    }

    fn draw_radio(
        &mut self,
        icon: RadioIcon,
    ) {
        let color = match icon {
            RadioIcon::Connected => BG_LIGHT_BLUE,
            RadioIcon::Disconnected => GRAY,
            RadioIcon::Disabled => RED,
        };
        clear_region(self.display, &RADIO_REGION);
        let anchor = left_anchor(&RADIO_REGION);
        Text::with_text_style("BT", anchor, MonoTextStyle::new(READOUT_FONT, color), LEFT_ALIGNED)
            .draw(self.display)
            .ok();

        if icon == RadioIcon::Disabled {
            // Strike-through
            Line::new(anchor + Point::new(0, 6), anchor + Point::new(22, -6))
                .into_styled(PrimitiveStyle::with_stroke(RED, 2))
                .draw(self.display)
                .ok();
        }
    }

    fn draw_notifications(
        &mut self,
        count: u16,
        present: bool,
    ) {
        clear_region(self.display, &NOTIFICATION_REGION);
        if count == 0 && !present {
            return;
        }

        let mut label: String<10> = String::new();
        label.push_str("MSG ").ok();
        push_u32(&mut label, u32::from(count));
        let color = if present { ORANGE } else { GRAY };
        Text::with_text_style(
            &label,
            left_anchor(&NOTIFICATION_REGION),
            MonoTextStyle::new(READOUT_FONT, color),
            LEFT_ALIGNED,
        )
        .draw(self.display)
        .ok();
    }

    fn draw_steps(
        &mut self,
        steps: u32,
    ) {
        let mut label: String<18> = String::new();
        label.push_str("STEPS ").ok();
        push_u32(&mut label, steps);
        clear_region(self.display, &STEPS_REGION);
        Text::with_text_style(&label, left_anchor(&STEPS_REGION), READOUT_STYLE_WHITE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();
    }

    fn rebuild_vitals(
        &mut self,
        owner: VitalsOwner,
    ) {
        // Always cleared: after an invalidate the old owner is still on screen
        clear_region(self.display, &VITALS_REGION);

        let (color, icon) = match owner {
            VitalsOwner::HeartRate => (BG_RED, Some("HR")),
            VitalsOwner::Weather => (BG_LIGHT_BLUE, None),
            VitalsOwner::Vacant => return,
        };

        draw_pill(self.display, &VITALS_TITLE_REGION, color);
        Text::with_text_style(
            owner.title(),
            right_anchor(&VITALS_TITLE_REGION) - Point::new(6, 0),
            BAR_LABEL_STYLE,
            RIGHT_ALIGNED,
        )
        .draw(self.display)
        .ok();

        if let Some(icon) = icon {
            Text::with_text_style(icon, left_anchor(&VITALS_ICON_REGION), MonoTextStyle::new(READOUT_FONT, BG_RED), LEFT_ALIGNED)
                .draw(self.display)
                .ok();
        }
    }

    fn draw_heart_rate(
        &mut self,
        bpm: u8,
    ) {
        let mut label: String<8> = String::new();
        if bpm == 0 {
            label.push_str("---").ok();
        } else {
            push_u32(&mut label, u32::from(bpm));
            label.push_str(" BPM").ok();
        }
        clear_region(self.display, &VITALS_VALUE_REGION);
        Text::with_text_style(&label, left_anchor(&VITALS_VALUE_REGION), READOUT_STYLE_WHITE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();
    }

    fn draw_weather(
        &mut self,
        temperature: i16,
        unit: TemperatureUnit,
        icon: WeatherIcon,
    ) {
        clear_region(self.display, &VITALS_ICON_REGION);
        Text::with_text_style(
            icon.label(),
            left_anchor(&VITALS_ICON_REGION),
            MonoTextStyle::new(READOUT_FONT, BG_LIGHT_BLUE),
            LEFT_ALIGNED,
        )
        .draw(self.display)
        .ok();

        let mut label: String<10> = String::new();
        write!(label, "{temperature} {}", unit.suffix()).ok();
        clear_region(self.display, &VITALS_VALUE_REGION);
        Text::with_text_style(&label, left_anchor(&VITALS_VALUE_REGION), READOUT_STYLE_WHITE, LEFT_ALIGNED)
            .draw(self.display)
            .ok();
    }
}

impl<D> FaceView for LcarsScreen<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn apply(
        &mut self,
        update: FaceUpdate,
    ) {
        match update {
            FaceUpdate::Date(date) => self.draw_date(&date),
            FaceUpdate::Week(week) => self.draw_week(week),
            FaceUpdate::Time(time) => self.draw_time(&time),
            FaceUpdate::SecondsReset { tens, ones } => {
                self.draw_seconds_digit(&SECONDS_TENS_REGION, tens);
                self.draw_seconds_digit(&SECONDS_ONES_REGION, ones);
            }
            FaceUpdate::SecondsOnes(ones) => self.draw_seconds_digit(&SECONDS_ONES_REGION, ones),
            FaceUpdate::SecondsTens(tens) => self.draw_seconds_digit(&SECONDS_TENS_REGION, tens),
            FaceUpdate::Battery { percent, tier } => self.draw_battery(percent, tier),
            FaceUpdate::Radio(icon) => self.draw_radio(icon),
            FaceUpdate::Notifications { count, present } => self.draw_notifications(count, present),
            FaceUpdate::Steps(steps) => self.draw_steps(steps),
            FaceUpdate::VitalsRebuild { owner, .. } => self.rebuild_vitals(owner),
            FaceUpdate::HeartRate { bpm } => self.draw_heart_rate(bpm),
            FaceUpdate::Weather {
                temperature,
                unit,
                icon,
            } => self.draw_weather(temperature, unit, icon),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;

    use embedded_graphics::Pixel;

    use super::*;
    use crate::settings::FaceSettings;
    use crate::sources::{
        ClockSource,
        Controllers,
        CurrentWeather,
        HeartRateSource,
        MotionSource,
        NotificationSource,
        PowerSource,
        RadioSource,
        WallMinute,
        WeatherSource,
        Weekday,
    };
    use crate::RefreshOrchestrator;

    /// Display that remembers which pixels were written, and in which colour.
    struct Touched {
        pixels: Vec<Point>,
        colors: Vec<Rgb565>,
    }

    impl Touched {
        fn new() -> Self {
            Self {
                pixels: Vec::new(),
                colors: Vec::new(),
            }
        }

        fn any_in(
            &self,
            region: &Rectangle,
        ) -> bool {
            self.pixels.iter().any(|p| region.contains(*p))
        }
    }

    impl OriginDimensions for Touched {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for Touched {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.pixels.push(point);
                self.colors.push(color);
            }
            Ok(())
        }
    }

    fn apply(update: FaceUpdate) -> Touched {
        let mut display = Touched::new();
        LcarsScreen::new(&mut display).apply(update);
        display
    }

    #[test]
    fn test_seconds_ones_leaves_tens_untouched() {
        let display = apply(FaceUpdate::SecondsOnes(7));
        assert!(display.any_in(&SECONDS_ONES_REGION));
        assert!(!display.any_in(&SECONDS_TENS_REGION));
        assert!(!display.any_in(&TIME_REGION));
    }

    #[test]
    fn test_seconds_tens_leaves_ones_untouched() {
        let display = apply(FaceUpdate::SecondsTens(3));
        assert!(display.any_in(&SECONDS_TENS_REGION));
        assert!(!display.any_in(&SECONDS_ONES_REGION));
    }

    #[test]
    fn test_seconds_reset_touches_both_rings() {
        let display = apply(FaceUpdate::SecondsReset { tens: 0, ones: 0 });
        assert!(display.any_in(&SECONDS_TENS_REGION));
        assert!(display.any_in(&SECONDS_ONES_REGION));
    }

    #[test]
    fn test_battery_stays_in_header() {
        let display = apply(FaceUpdate::Battery {
            percent: 100,
            tier: BatteryTier::Charging,
        });
        assert!(display.any_in(&BATTERY_REGION));
        assert!(!display.any_in(&STARDATE_REGION));
        assert!(!display.any_in(&TIME_REGION));
    }

    #[test]
    fn test_date_update_skips_time() {
        let display = apply(FaceUpdate::Date(CalendarDate {
            year: 2026,
            month: 10,
            day: 17,
            day_of_year: 290,
            weekday: Weekday::Saturday,
        }));
        assert!(display.any_in(&STARDATE_REGION));
        assert!(display.any_in(&DATE_REGION));
        assert!(!display.any_in(&SECONDS_ONES_REGION));
    }

    #[test]
    fn test_heart_rate_value_keeps_slot_title() {
        let display = apply(FaceUpdate::HeartRate { bpm: 72 });
        assert!(display.any_in(&VITALS_VALUE_REGION));
        assert!(!display.any_in(&VITALS_TITLE_REGION));
    }

    #[test]
    fn test_first_vitals_build_clears_slot() {
        let display = apply(FaceUpdate::VitalsRebuild {
            previous: None,
            owner: VitalsOwner::Vacant,
        });
        assert!(display.any_in(&VITALS_ICON_REGION));
        assert!(display.pixels.iter().all(|p| VITALS_REGION.contains(*p)));
    }

    #[test]
    fn test_vitals_rebuild_clears_previous_owner() {
        let display = apply(FaceUpdate::VitalsRebuild {
            previous: Some(VitalsOwner::Weather),
            owner: VitalsOwner::Vacant,
        });
        assert!(display.any_in(&VITALS_ICON_REGION));
        assert!(display.any_in(&VITALS_VALUE_REGION));
    }

    #[test]
    fn test_chrome_leaves_content_blank() {
        let mut display = Touched::new();
        LcarsScreen::new(&mut display).draw_chrome();

        let content = [
            STARDATE_REGION,
            BATTERY_REGION,
            RADIO_REGION,
            NOTIFICATION_REGION,
            TIME_REGION,
            MERIDIEM_REGION,
            SECONDS_TENS_REGION,
            SECONDS_ONES_REGION,
            DATE_REGION,
            WEEK_REGION,
            VITALS_REGION,
            STEPS_REGION,
        ];
        let painted = display.pixels.iter().zip(&display.colors).filter(|(_, c)| **c != BLACK);
        for (point, _) in painted {
            assert!(
                !content.iter().any(|r| r.contains(*point)),
                "Frame pixel {point:?} inside a content region"
            );
        }
        assert!(display.colors.iter().any(|c| *c != BLACK), "Frame not drawn");
    }

    /// Wrist with only the heart-rate sensor switchable; everything else is static.
    struct Wrist {
        measuring: Cell<bool>,
    }

    impl ClockSource for Wrist {
        fn minute(&self) -> WallMinute { WallMinute(600) }

        fn sub_minute_nanos(&self) -> u64 { 0 }

        fn date(&self) -> CalendarDate { CalendarDate::default() }

        fn iso_week(&self) -> u8 { 1 }
    }

    impl PowerSource for Wrist {
        fn percent_remaining(&self) -> u8 { 80 }

        fn is_charging(&self) -> bool { false }
    }

    impl RadioSource for Wrist {
        fn is_connected(&self) -> bool { true }

        fn is_radio_enabled(&self) -> bool { true }
    }

    impl MotionSource for Wrist {
        fn step_count(&self) -> u32 { 0 }
    }

    impl HeartRateSource for Wrist {
        fn heart_rate(&self) -> u8 { 70 }

        fn is_measuring(&self) -> bool { self.measuring.get() }
    }

    impl WeatherSource for Wrist {
        fn current_weather(&self) -> Option<CurrentWeather> { None }
    }

    impl NotificationSource for Wrist {
        fn pending_count(&self) -> u16 { 0 }

        fn has_unread(&self) -> bool { false }
    }

    #[test]
    fn test_invalidate_then_vacant_clears_old_vitals() {
        let wrist = Wrist {
            measuring: Cell::new(true),
        };
        let controllers = Controllers {
            clock: &wrist,
            power: &wrist,
            radio: &wrist,
            motion: &wrist,
            heart_rate: &wrist,
            weather: &wrist,
            notifications: &wrist,
        };
        let mut orchestrator = RefreshOrchestrator::new(controllers, FaceSettings::default());

        let mut display = Touched::new();
        orchestrator.refresh(&mut LcarsScreen::new(&mut display));
        assert!(display.any_in(&VITALS_ICON_REGION), "Heart rate icon drawn");

        orchestrator.invalidate();
        wrist.measuring.set(false);

        let mut display = Touched::new();
        orchestrator.refresh(&mut LcarsScreen::new(&mut display));
        assert_eq!(orchestrator.vitals_owner(), Some(VitalsOwner::Vacant));
        assert!(display.any_in(&VITALS_ICON_REGION), "Old heart rate widgets left in the slot");
        assert!(
            display
                .pixels
                .iter()
                .zip(&display.colors)
                .filter(|(p, _)| VITALS_REGION.contains(**p))
                .all(|(_, c)| *c == BLACK),
            "Vacant slot must stay blank"
        );
    }
}
