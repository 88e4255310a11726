//! Incremental seconds readout.
//!
//! The seconds are drawn as two rings of digit widgets: tens (0-5) and ones
//! (0-9). On an ordinary tick only the ring(s) that moved are redrawn; after a
//! discontinuity (first draw, clock set, missed ticks) both rings are rebuilt.
//!
//! # Step vs. Reset
//!
//! | Situation | Result |
//! |-----------|--------|
//! | Never drawn (`last_second == 60`) | Reset |
//! | Same second, same minute | Unchanged |
//! | Forward by 1-9 s within the expected minute | Step (ones, plus tens on a 9 -> 0 wrap) |
//! | 59 -> 0 into the next minute | Step (ones and tens both wrap) |
//! | 0 reached from anything but 59 | Reset |
//! | Backwards, more than 9 s forward, or minute jump | Reset |
//! | Second outside 0-59 | Reset to 00, back to "never drawn" |
//!
//! A step of up to nine seconds (a late tick) crosses at most one ones-ring
//! wrap, so the tens ring moves by at most one position.

use crate::config::{ONES_RING_SIZE, SECOND_SENTINEL, TENS_RING_SIZE};
use crate::sources::WallMinute;

/// Largest forward jump still drawn incrementally.
const MAX_STEP_SECONDS: u8 = ONES_RING_SIZE - 1;

/// What the seconds widgets must do this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CarouselStep {
    /// Nothing moved.
    Unchanged,
    /// Rebuild both rings at these digits.
    Reset { tens: u8, ones: u8 },
    /// Roll the ones ring; roll the tens ring too if it is `Some`.
    Advance { ones: u8, tens: Option<u8> },
}

/// Tens and ones ring positions plus the second and minute last drawn.
#[derive(Clone, Copy, Debug)]
pub struct DigitCarousel {
    tens_index: u8,
    ones_index: u8,
    last_second: u8,
    last_minute: Option<WallMinute>,
}

impl DigitCarousel {
    /// Carousel in the "never drawn" state.
    pub const fn new() -> Self {
        Self {
            tens_index: 0,
            ones_index: 0,
            last_second: SECOND_SENTINEL,
            last_minute: None,
        }
    }

    /// Feed the current second (0-59) of `minute` and get the widget work.
    pub fn advance(
        &mut self,
        second: u8,
        minute: WallMinute,
    ) -> CarouselStep {
        if second >= 60 {
            // Never show an invalid digit: blank to 00 and redraw on the next valid tick
            *self = Self::new();
            return CarouselStep::Reset { tens: 0, ones: 0 };
        }

        if self.last_second == SECOND_SENTINEL {
            return self.reset_to(second, minute);
        }

        let Some(last_minute) = self.last_minute else {
            return self.reset_to(second, minute);
        };

        if second == self.last_second {
            return if minute == last_minute {
                CarouselStep::Unchanged
            } else {
                self.reset_to(second, minute)
            };
        }

        if second == 0 && self.last_second != 59 {
            return self.reset_to(second, minute);
        }

        let wrapped = second < self.last_second;
        let delta = if wrapped { second + 60 - self.last_second } else { second - self.last_second };
        let expected_minute = if wrapped { last_minute.next() } else { last_minute };

        if delta > MAX_STEP_SECONDS || minute != expected_minute {
            return self.reset_to(second, minute);
        }

        self.step_to(second, minute)
    }

    /// Tens ring position.
    #[inline]
    pub const fn tens(&self) -> u8 { self.tens_index }

    /// Ones ring position.
    #[inline]
    pub const fn ones(&self) -> u8 { self.ones_index }

    /// Check whether the rings have been built at least once.
    #[inline]
    pub const fn is_initialized(&self) -> bool { self.last_second != SECOND_SENTINEL }

    /// Return to the "never drawn" state.
    pub fn reset(&mut self) { *self = Self::new(); }

    fn reset_to(
        &mut self,
        second: u8,
        minute: WallMinute,
    ) -> CarouselStep {
        self.tens_index = second / ONES_RING_SIZE;
        self.ones_index = second % ONES_RING_SIZE;
        self.last_second = second;
        self.last_minute = Some(minute);

        #[cfg(feature = "defmt")]
        defmt::trace!("seconds carousel reset at {}", second);

        CarouselStep::Reset {
            tens: self.tens_index,
            ones: self.ones_index,
        }
    }

    fn step_to(
        &mut self,
        second: u8,
        minute: WallMinute,
    ) -> CarouselStep {
        let ones = second % ONES_RING_SIZE;
        let tens = second / ONES_RING_SIZE;

        // Tens moves exactly when the ones ring wrapped past 9 -> 0
        let tens_moved = ones < self.ones_index;
        debug_assert_eq!(tens_moved, tens != self.tens_index);

        self.ones_index = ones;
        if tens_moved {
            self.tens_index = (self.tens_index + 1) % TENS_RING_SIZE;
        }
        self.last_second = second;
        self.last_minute = Some(minute);

        CarouselStep::Advance {
            ones,
            tens: tens_moved.then_some(self.tens_index),
        }
    }
}

impl Default for DigitCarousel {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
