//! Display, layout and sentinel configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Region rectangles for every widget group are `const`, so update routines in
//! [`widgets`](crate::widgets) never do layout arithmetic at draw time. Each
//! region is cleared and redrawn independently, which is what keeps a seconds
//! step from touching the minutes or the tens digit.
//!
//! ```text
//! ┌──────┬──────────────────────────────┐
//! │ ╭────┤ STARDATE 2026.290   BAT 57% │  0..28   header
//! │ │SYS │ BT  MSG 3                    │  32..52  system row
//! │ │    │ 13:37  PM            4  2    │  60..112 time + seconds rings
//! │ │DATE│ SAT 17 OCT          WK 42    │  118..138
//! │ │VIT │ HR  72 BPM                   │  148..188 vitals slot
//! │ ╰────┤ STEPS 1234                   │  196..222
//! └──────┴──────────────────────────────┘
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 240x240 wearable panel).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Sentinels
// =============================================================================

/// Out-of-range battery percentage; guarantees the first report is a change.
pub const BATTERY_PERCENT_SENTINEL: u8 = 101;

/// "Never drawn" marker for the seconds carousel.
pub const SECOND_SENTINEL: u8 = 60;

const _: () = assert!(BATTERY_PERCENT_SENTINEL > 100);
const _: () = assert!(SECOND_SENTINEL >= 60);

// =============================================================================
// Time Units
// =============================================================================

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Positions on the tens ring of the seconds readout (0-5).
pub const TENS_RING_SIZE: u8 = 6;

/// Positions on the ones ring of the seconds readout (0-9).
pub const ONES_RING_SIZE: u8 = 10;

// =============================================================================
// Layout: LCARS frame
// =============================================================================

/// Width of the left LCARS sidebar (elbow + segment bars).
pub const SIDEBAR_WIDTH: u32 = 44;

/// Left edge of the content area, right of the sidebar plus a gap.
pub const CONTENT_X: i32 = SIDEBAR_WIDTH as i32 + 6;

/// Width of the content area.
pub const CONTENT_WIDTH: u32 = SCREEN_WIDTH - SIDEBAR_WIDTH - 6;

// =============================================================================
// Layout: widget regions (cleared and redrawn independently)
// =============================================================================

/// Stardate readout in the header bar.
pub const STARDATE_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 4), Size::new(120, 20));

/// Battery percentage in the header bar.
pub const BATTERY_REGION: Rectangle = Rectangle::new(Point::new(176, 4), Size::new(60, 20));

/// Radio link icon.
pub const RADIO_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 32), Size::new(40, 20));

/// Notification indicator and count.
pub const NOTIFICATION_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X + 46, 32), Size::new(70, 20));

/// Hours and minutes.
pub const TIME_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 60), Size::new(110, 52));

/// AM/PM marker (12-hour mode only).
pub const MERIDIEM_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X + 112, 60), Size::new(22, 14));

/// Tens digit of the seconds readout.
pub const SECONDS_TENS_REGION: Rectangle = Rectangle::new(Point::new(196, 80), Size::new(16, 28));

/// Ones digit of the seconds readout.
pub const SECONDS_ONES_REGION: Rectangle = Rectangle::new(Point::new(214, 80), Size::new(16, 28));

/// Weekday, day and month.
pub const DATE_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 118), Size::new(120, 20));

/// ISO week number.
pub const WEEK_REGION: Rectangle = Rectangle::new(Point::new(176, 118), Size::new(60, 20));

/// Shared heart-rate / weather slot (title bar + icon + value).
pub const VITALS_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 148), Size::new(CONTENT_WIDTH, 40));

/// Icon part of the vitals slot.
pub const VITALS_ICON_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 166), Size::new(56, 20));

/// Value part of the vitals slot.
pub const VITALS_VALUE_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X + 60, 166), Size::new(100, 20));

/// Step counter.
pub const STEPS_REGION: Rectangle = Rectangle::new(Point::new(CONTENT_X, 196), Size::new(CONTENT_WIDTH, 26));
