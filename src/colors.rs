//! LCARS colour palette for the watch face.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The palette below is the 8-bit LCARS palette reduced with `r >> 3`,
//! `g >> 2`, `b >> 3`, which is native to the ST7789 and needs no conversion
//! when written to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background and text on light bars.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Primary readouts.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// LCARS Text Colors
// =============================================================================

/// Gray (0x99, 0x99, 0x99). Secondary labels.
pub const GRAY: Rgb565 = Rgb565::new(19, 38, 19);

/// Orange (0xFF, 0x99, 0x33). Normal battery tier, seconds digits.
pub const ORANGE: Rgb565 = Rgb565::new(31, 38, 6);

/// Red (0xDD, 0x44, 0x44). Low battery tier, radio disabled.
pub const RED: Rgb565 = Rgb565::new(27, 17, 8);

// =============================================================================
// LCARS Bar Colors
// =============================================================================

/// Bar red (0xE6, 0x44, 0x4A). Heart-rate slot title.
pub const BG_RED: Rgb565 = Rgb565::new(28, 17, 9);

/// Bar blue (0x31, 0x69, 0xD5). Sidebar lower segment.
pub const BG_BLUE: Rgb565 = Rgb565::new(6, 26, 26);

/// Bar light blue (0x8B, 0xCE, 0xFF). Charging tier, weather slot title.
pub const BG_LIGHT_BLUE: Rgb565 = Rgb565::new(17, 51, 31);

/// Bar violet (0x9C, 0x44, 0xFF). Sidebar date segment.
pub const BG_VIOLET: Rgb565 = Rgb565::new(19, 17, 31);

/// Bar light violet (0xD5, 0x99, 0xD5). Steps segment.
pub const BG_LIGHT_VIOLET: Rgb565 = Rgb565::new(26, 38, 26);

/// Bar orange (0xFF, 0x99, 0x31). Header elbow.
pub const BG_ORANGE: Rgb565 = Rgb565::new(31, 38, 6);

/// Bar yellow (0xFF, 0xCE, 0x9C). System segment.
pub const BG_YELLOW: Rgb565 = Rgb565::new(31, 51, 19);
