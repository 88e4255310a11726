//! Debug/profiling page rendering.
//!
//! Shows how much work the dirty tracking did: pass counts and timing on the
//! left, per-field update counters on the right, and the debug log terminal
//! underneath. Press `Y` to toggle from the watch face.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ REFRESH DEBUG           UP 00:12:34  │
//! ├──────────────────────────────────────┤
//! │ PASSES             │ UPDATES         │
//! │ Total:  754        │ DATE    1       │
//! │ Idle:   12         │ WEEK    1       │
//! │ Last:   41us       │ TIME    13      │
//! │ Min:    18us       │ SECS    760     │
//! │ Max:    950us      │ ...             │
//! │ Rebld:  4          │                 │
//! │ Reset:  3          │                 │
//! ├──────────────────────────────────────┤
//! │ > Heart rate: ON                     │
//! │ > Vitals rebuilt                     │
//! └──────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use lcars_watchface::colors::{BG_LIGHT_BLUE, BG_ORANGE, BG_YELLOW, BLACK, GRAY, ORANGE};
use lcars_watchface::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use lcars_watchface::profiling::{DebugLog, RefreshMetrics, format_hms};
use lcars_watchface::render::REFRESH_ORDER;
use lcars_watchface::styles::{LABEL_FONT, LABEL_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position where section headers start
const SECTION_HEADER_Y: i32 = 30;

/// Y position where stats values start
const STATS_Y: i32 = 42;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 152;

/// Y position where log terminal starts
const LOG_Y: i32 = 164;

/// Height of each log line
const LOG_LINE_HEIGHT: i32 = 11;

/// X position for left column (pass stats)
const COL1_X: i32 = 4;

/// X position for right column (field counters)
const COL2_X: i32 = 124;

/// Line height for stats
const STAT_LINE_HEIGHT: i32 = 12;

// =============================================================================
// Colors
// =============================================================================

const HEADER_COLOR: Rgb565 = BG_ORANGE;
const SECTION_COLOR: Rgb565 = GRAY;
const HIGHLIGHT_COLOR: Rgb565 = BG_YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = BG_LIGHT_BLUE;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug page from scratch.
pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &RefreshMetrics,
    log: &DebugLog,
    uptime_secs: u64,
) {
    display.clear(BLACK).ok();

    draw_header(display, uptime_secs);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    draw_section_headers(display);
    draw_pass_column(display, metrics);
    draw_field_column(display, metrics);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    uptime_secs: u64,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = LABEL_STYLE_WHITE;

    Text::new("REFRESH DEBUG", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let mut uptime: String<16> = String::new();
    let _ = write!(uptime, "UP {}", format_hms(uptime_secs));
    Text::new(&uptime, Point::new(150, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    Text::new("PASSES", Point::new(COL1_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
    Text::new("UPDATES", Point::new(COL2_X, SECTION_HEADER_Y), style)
        .draw(display)
        .ok();
}

/// Pass counters and timing (left column).
fn draw_pass_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &RefreshMetrics,
) {
    let value_style = LABEL_STYLE_WHITE;
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let min_us = if metrics.pass_time_min_us == u32::MAX { 0 } else { metrics.pass_time_min_us };

    let rows: [(&str, u64, bool); 7] = [
        ("Total:", metrics.total_passes, false),
        ("Idle: ", metrics.idle_passes, false),
        ("Last: ", u64::from(metrics.pass_time_us), true),
        ("Min:  ", u64::from(min_us), true),
        ("Max:  ", u64::from(metrics.pass_time_max_us), true),
        ("Rebld:", u64::from(metrics.vitals_rebuilds), false),
        ("Reset:", u64::from(metrics.carousel_resets), false),
    ];

    let mut y = STATS_Y;
    for (label, value, is_time) in rows {
        let mut s: String<24> = String::new();
        if is_time {
            let _ = write!(s, "{label} {value}us");
        } else {
            let _ = write!(s, "{label} {value}");
        }
        let style = if is_time { highlight_style } else { value_style };
        Text::new(&s, Point::new(COL1_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Per-field update counters (right column).
fn draw_field_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &RefreshMetrics,
) {
    let value_style = LABEL_STYLE_WHITE;

    let mut y = STATS_Y;
    for field in REFRESH_ORDER {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{:<6}{}", field.label(), metrics.updates(field));
        Text::new(&s, Point::new(COL2_X, y), value_style).draw(display).ok();
        y += STAT_LINE_HEIGHT - 1;
    }
}

/// Draw the debug log terminal section.
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &DebugLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    // Terminal background (very dark blue tint)
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::new(1, 2, 3)))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
