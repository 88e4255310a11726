//! Battery threshold configuration and colour tiers.
//!
//! The battery readout colour depends on the joint state of the percentage and
//! the charging flag, so both cells feed one combined redraw (see
//! [`orchestrator`](crate::orchestrator)).
//!
//! # Compile-Time Validation
//!
//! The threshold carries a `const` assertion; a value outside the gauge range
//! fails compilation instead of silently disabling the warning colour.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BG_LIGHT_BLUE, ORANGE, RED};

// =============================================================================
// Battery Thresholds
// =============================================================================

/// At or below this percentage (and not charging) the readout turns RED.
pub const LOW_BATTERY_PERCENT: u8 = 20;

const _: () = assert!(LOW_BATTERY_PERCENT > 0);
const _: () = assert!(LOW_BATTERY_PERCENT < 100);

// =============================================================================
// Battery Tiers
// =============================================================================

/// Colour tier of the battery readout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryTier {
    /// Discharging with enough charge left (ORANGE).
    Normal,
    /// Discharging at or below [`LOW_BATTERY_PERCENT`] (RED).
    Low,
    /// On the charger, regardless of level (LIGHT BLUE).
    Charging,
}

impl BatteryTier {
    /// Classify the joint battery state. Charging wins over a low level.
    pub const fn classify(
        percent: u8,
        charging: bool,
    ) -> Self {
        if charging {
            Self::Charging
        } else if percent <= LOW_BATTERY_PERCENT {
            Self::Low
        } else {
            Self::Normal
        }
    }

    /// Text colour for this tier.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Normal => ORANGE,
            Self::Low => RED,
            Self::Charging => BG_LIGHT_BLUE,
        }
    }
}
