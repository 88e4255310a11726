//! Simulator tick scheduling.
//!
//! The face is refreshed once per [`TICK_PERIOD`] while the window is idle, and
//! immediately after any key press (the simulator's "partial wake" event).
//! Between ticks the loop only polls window events every [`POLL_INTERVAL`].

use std::time::{Duration, Instant};

/// Refresh period while the display is active.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How often window events are polled between ticks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Clock-set jump applied by the `T` key (37 min 23 s).
pub const CLOCK_JUMP_SECS: i64 = 37 * 60 + 23;

/// Decides when the next refresh pass is due.
pub struct TickScheduler {
    next_tick: Instant,
}

impl TickScheduler {
    /// First tick is due immediately.
    pub fn new(now: Instant) -> Self { Self { next_tick: now } }

    /// Check whether a periodic tick is due at `now`.
    pub fn is_due(
        &self,
        now: Instant,
    ) -> bool {
        now >= self.next_tick
    }

    /// Record that a pass ran at `now`; the next periodic tick is one period later.
    ///
    /// On-demand passes also push the periodic tick back, so a key press never
    /// causes two passes in quick succession.
    pub fn mark_pass(
        &mut self,
        now: Instant,
    ) {
        self.next_tick = now + TICK_PERIOD;
    }

    /// Time left until the next periodic tick, capped at [`POLL_INTERVAL`].
    pub fn sleep_time(
        &self,
        now: Instant,
    ) -> Duration {
        self.next_tick.saturating_duration_since(now).min(POLL_INTERVAL)
    }
}
