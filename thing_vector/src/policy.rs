//! Grow and shrink rules for the [`ThingVector`](crate::ThingVector) buffer.
//!
//! Growth doubles on a full buffer. Shrinking halves once fewer than a quarter
//! of the slots are live, so a push right after a shrink never has to grow.

/// Factor applied to the capacity of a full buffer.
pub const GROWTH_FACTOR: usize = 2;

/// A buffer shrinks once `len < capacity / SHRINK_TRIGGER_DIVISOR`.
pub const SHRINK_TRIGGER_DIVISOR: usize = 4;

/// Capacity to grow to from a full buffer of `capacity` slots.
///
/// Returns `None` when doubling overflows `usize`.
pub fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(GROWTH_FACTOR)
    }
}

/// Capacity to shrink to after a removal left `len` live things, if any.
pub fn shrunk_capacity(len: usize, capacity: usize) -> Option<usize> {
    if len < capacity / SHRINK_TRIGGER_DIVISOR {
        Some((capacity / GROWTH_FACTOR).max(len))
    } else {
        None
    }
}
