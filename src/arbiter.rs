//! Ownership of the shared vitals slot.
//!
//! Heart rate and weather share one screen region. Once per pass the
//! [`SlotArbiter`] picks the owner and compares it with the owner recorded on
//! the previous pass. The rebuild-vs-update decision is that single comparison:
//!
//! | Previous | Current | Action |
//! |----------|---------|--------|
//! | never drawn | any | Rebuild |
//! | `X` | `X` | Value update of `X`'s dirty cells |
//! | `X` | `Y != X` | Rebuild: clear `X`'s widgets, lay out `Y` |
//!
//! # Owner Priority
//!
//! 1. [`VitalsOwner::HeartRate`] while the sensor is actively measuring
//! 2. [`VitalsOwner::Weather`] while a weather snapshot is present
//! 3. [`VitalsOwner::Vacant`] otherwise

/// Producer currently shown in the vitals slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VitalsOwner {
    HeartRate,
    Weather,
    /// No source available; the slot is empty.
    Vacant,
}

impl VitalsOwner {
    /// Pick the owner from the current availability flags.
    pub const fn select(
        heart_rate_active: bool,
        weather_present: bool,
    ) -> Self {
        if heart_rate_active {
            Self::HeartRate
        } else if weather_present {
            Self::Weather
        } else {
            Self::Vacant
        }
    }

    /// Title drawn in the slot's LCARS bar.
    pub const fn title(self) -> &'static str {
        match self {
            Self::HeartRate => "VITALS",
            Self::Weather => "WEATHER",
            Self::Vacant => "",
        }
    }
}

/// Outcome of one arbitration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SlotDecision {
    pub owner: VitalsOwner,
    /// Owner shown before this pass, `None` if the slot was never drawn.
    pub previous: Option<VitalsOwner>,
    /// Whether the slot needs a structural rebuild.
    pub rebuild: bool,
}

/// Two-state machine over (current owner, previous owner).
#[derive(Clone, Copy, Debug, Default)]
pub struct SlotArbiter {
    owner: Option<VitalsOwner>,
    last_owner: Option<VitalsOwner>,
}

impl SlotArbiter {
    /// Arbiter for a slot that has never been drawn.
    pub const fn new() -> Self {
        Self {
            owner: None,
            last_owner: None,
        }
    }

    /// Recompute the owner and decide between rebuild and value update.
    pub fn evaluate(
        &mut self,
        heart_rate_active: bool,
        weather_present: bool,
    ) -> SlotDecision {
        let owner = VitalsOwner::select(heart_rate_active, weather_present);
        let previous = self.owner;

        self.last_owner = previous;
        self.owner = Some(owner);

        SlotDecision {
            owner,
            previous,
            rebuild: previous != Some(owner),
        }
    }

    /// Owner chosen on the latest pass.
    #[inline]
    pub const fn owner(&self) -> Option<VitalsOwner> { self.owner }

    /// Owner chosen on the pass before the latest one.
    #[inline]
    pub const fn last_owner(&self) -> Option<VitalsOwner> { self.last_owner }

    /// Forget what was drawn; the next evaluation always rebuilds.
    pub fn reset(&mut self) { *self = Self::new(); }
}
