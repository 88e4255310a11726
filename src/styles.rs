//! Pre-computed static text styles for the LCARS face.
//!
//! All `MonoTextStyle` and `TextStyle` values are `const`, so drawing an update
//! never constructs a style at runtime. Styles whose colour depends on state
//! (battery tier, radio icon) use the exposed font references with
//! `MonoTextStyle::new(FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, GRAY, ORANGE, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================
//
// Face readouts are anchored on the vertical middle of their region, so one
// anchor point works for every font size.

/// Centered on the anchor. Seconds digits.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Starts at the anchor. Most readouts.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Ends at the anchor. Battery, week and bar labels.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References (for dynamic colour styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Readout font for battery, date and vitals values (`ProFont` 14pt).
pub const READOUT_FONT: &MonoFont = &PROFONT_14_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small black text on LCARS bars.
pub const BAR_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small gray text for secondary labels (week, units).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Small white text for the debug terminal.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text for the stardate and page titles (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// White readout text.
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);

/// Large white hours and minutes (`ProFont` 24pt).
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Orange seconds digits (`ProFont` 18pt).
pub const SECONDS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, ORANGE);
