//! Change-tracked value cells.
//!
//! A [`DirtyValue`] caches the last value reported by a collaborator together
//! with a flag saying whether that value has been drawn yet. The refresh pass
//! writes every cell with [`DirtyValue::set`] and the matching update routine
//! consumes it with [`DirtyValue::get`].
//!
//! # Lifecycle
//!
//! | Call | Value | Dirty flag |
//! |------|-------|------------|
//! | `new(sentinel)` | sentinel | set (never drawn) |
//! | `set(v)`, `v != value` | `v` | set |
//! | `set(v)`, `v == value` | unchanged | unchanged |
//! | `get()` | unchanged | cleared |
//! | `peek()` | unchanged | unchanged |
//!
//! A cell starts out dirty so that the first pass paints every widget even for
//! types that have no spare out-of-range value (`bool`). Numeric cells can
//! additionally be seeded with a sentinel such as
//! [`BATTERY_PERCENT_SENTINEL`](crate::config::BATTERY_PERCENT_SENTINEL).

/// A cached value plus an "unacknowledged change" flag.
#[derive(Clone, Copy, Debug)]
pub struct DirtyValue<T> {
    value: T,
    dirty: bool,
}

impl<T: Copy + PartialEq> DirtyValue<T> {
    /// Create a cell holding `initial` that is pending its first draw.
    pub const fn new(initial: T) -> Self {
        Self {
            value: initial,
            dirty: true,
        }
    }

    /// Store `value`, marking the cell dirty only if it differs from the cached one.
    ///
    /// Re-confirming the current value never touches the flag: a clean cell stays
    /// clean and a dirty cell stays dirty until it is read with [`get`](Self::get).
    #[inline]
    pub fn set(
        &mut self,
        value: T,
    ) {
        if self.value != value {
            self.value = value;
            self.dirty = true;
        }
    }

    /// Read the value and acknowledge the change.
    #[inline]
    pub fn get(&mut self) -> T {
        self.dirty = false;
        self.value
    }

    /// Read the value without acknowledging it.
    #[inline]
    pub fn peek(&self) -> T { self.value }

    /// Check whether the cached value has changed since it was last read.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Return to the construction state: `initial` value, pending first draw.
    pub fn reset(
        &mut self,
        initial: T,
    ) {
        self.value = initial;
        self.dirty = true;
    }
}

// =============================================================================
// Unit Tests (run on host with: cargo test --lib)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_dirty() {
        let cell = DirtyValue::new(101u8);
        assert!(cell.is_dirty(), "Fresh cell must force the first paint");
        assert_eq!(cell.peek(), 101);
    }

    #[test]
    fn test_set_then_get_returns_value_and_clears() {
        let mut cell = DirtyValue::new(0u32);
        cell.get();
        cell.set(1234);
        assert!(cell.is_dirty());
        assert_eq!(cell.get(), 1234);
        assert!(!cell.is_dirty(), "get() must acknowledge the change");
    }

    #[test]
    fn test_set_same_value_keeps_clean_cell_clean() {
        let mut cell = DirtyValue::new(false);
        cell.set(true);
        cell.get();

        cell.set(true);
        cell.set(true);
        assert!(!cell.is_dirty(), "Re-confirming a value must not mark it dirty");
    }

    #[test]
    fn test_set_same_value_keeps_dirty_cell_dirty() {
        let mut cell = DirtyValue::new(0u8);
        cell.get();
        cell.set(42);
        cell.set(42);
        assert!(cell.is_dirty(), "Unread change must survive a re-confirmation");
    }

    #[test]
    fn test_change_and_revert_before_read_stays_dirty() {
        let mut cell = DirtyValue::new(10u8);
        cell.get();
        cell.set(11);
        cell.set(10);
        assert!(cell.is_dirty());
        assert_eq!(cell.get(), 10);
    }

    #[test]
    fn test_peek_does_not_clear() {
        let mut cell = DirtyValue::new(5u16);
        cell.get();
        cell.set(6);
        assert_eq!(cell.peek(), 6);
        assert!(cell.is_dirty(), "peek() belongs to a different consumer");
    }

    #[test]
    fn test_optional_values_compare_whole_snapshot() {
        let mut cell: DirtyValue<Option<(i16, u8)>> = DirtyValue::new(None);
        cell.get();

        cell.set(Some((2150, 1)));
        assert!(cell.is_dirty());
        cell.get();

        cell.set(Some((2150, 2)));
        assert!(cell.is_dirty(), "A change in any sub-field counts");
        cell.get();

        cell.set(None);
        assert!(cell.is_dirty(), "Absent data is an ordinary value");
    }

    #[test]
    fn test_reset_restores_sentinel_and_dirty() {
        let mut cell = DirtyValue::new(101u8);
        cell.set(57);
        cell.get();

        cell.reset(101);
        assert!(cell.is_dirty());
        assert_eq!(cell.peek(), 101);
    }
}
