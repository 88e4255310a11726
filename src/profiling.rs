//! Refresh metrics and debug logging for the debug page.
//!
//! [`RefreshMetrics`] accumulates the [`PassReport`] of every pass, so the debug
//! page can show how much redraw work the dirty tracking actually saved.
//! [`DebugLog`] is a small ring buffer of event lines.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = RefreshMetrics::new();
//! let mut log = DebugLog::new();
//!
//! // In main loop:
//! let pass_start = Instant::now();
//! let report = orchestrator.refresh(&mut screen);
//! metrics.record(&report, pass_start.elapsed());
//!
//! // Log events:
//! log.push("Clock set");
//! ```
//!
//! Timing is passed in as a [`Duration`], so the caller picks the clock
//! (`std::time::Instant` in the simulator, `embassy_time::Instant` on hardware).

use core::time::Duration;

use heapless::{Deque, String};

use crate::orchestrator::PassReport;
use crate::render::{FIELD_COUNT, Field};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 36;

// =============================================================================
// Refresh Metrics
// =============================================================================

/// Pass timing and redraw counters.
pub struct RefreshMetrics {
    // Pass timing (microseconds)
    /// Duration of the latest pass
    pub pass_time_us: u32,
    /// Shortest pass observed
    pub pass_time_min_us: u32,
    /// Longest pass observed
    pub pass_time_max_us: u32,

    // Counters
    /// Total passes since startup
    pub total_passes: u64,
    /// Passes that emitted no update at all
    pub idle_passes: u64,
    /// Updates emitted, per field
    field_updates: [u32; FIELD_COUNT],
    /// Structural rebuilds of the vitals slot
    pub vitals_rebuilds: u32,
    /// Full rebuilds of the seconds rings
    pub carousel_resets: u32,
}

impl RefreshMetrics {
    pub const fn new() -> Self {
        Self {
            pass_time_us: 0,
            pass_time_min_us: u32::MAX,
            pass_time_max_us: 0,
            total_passes: 0,
            idle_passes: 0,
            field_updates: [0; FIELD_COUNT],
            vitals_rebuilds: 0,
            carousel_resets: 0,
        }
    }

    /// Fold one pass into the totals.
    pub fn record(
        &mut self,
        report: &PassReport,
        elapsed: Duration,
    ) {
        let us = u32::try_from(elapsed.as_micros()).unwrap_or(u32::MAX);
        self.pass_time_us = us;
        self.pass_time_min_us = self.pass_time_min_us.min(us);
        self.pass_time_max_us = self.pass_time_max_us.max(us);

        for (total, field) in self.field_updates.iter_mut().zip(crate::render::REFRESH_ORDER) {
            *total = total.saturating_add(u32::from(report.count(field)));
        }
        if report.is_idle() {
            self.idle_passes += 1;
        }
        if report.vitals_rebuilt {
            self.vitals_rebuilds += 1;
        }
        if report.seconds_reset {
            self.carousel_resets += 1;
        }

        self.total_passes += 1;
    }

    /// Updates emitted for `field` since startup.
    #[inline]
    pub const fn updates(
        &self,
        field: Field,
    ) -> u32 {
        self.field_updates[field.index()]
    }

    /// Updates emitted for all fields since startup.
    pub fn total_updates(&self) -> u32 { self.field_updates.iter().fold(0u32, |acc, n| acc.saturating_add(*n)) }
}

impl Default for RefreshMetrics {
    fn default() -> Self { Self::new() }
}

/// Format seconds as HH:MM:SS.
pub fn format_hms(total_secs: u64) -> String<12> {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part as u32);
    }
    s
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages; the oldest is dropped when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate to fit the line
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================
