//! Per-thread allocation and lifetime counters for [`Thing`](crate::Thing).
//!
//! Counters are thread-local so tests running in parallel do not observe each
//! other. A `Thing` dropped on a different thread than the one that created it
//! shows up as a negative balance on the dropping thread.

use std::cell::Cell;

thread_local! {
    static LAST_ALLOC: Cell<usize> = const { Cell::new(0) };
    static LIVE_THINGS: Cell<isize> = const { Cell::new(0) };
}

/// Slot count of the most recent `Thing` buffer allocated on this thread.
pub fn last_alloc() -> usize {
    LAST_ALLOC.with(Cell::get)
}

/// Net number of `Thing`s created minus dropped on this thread.
pub fn live_things() -> isize {
    LIVE_THINGS.with(Cell::get)
}

pub(crate) fn record_alloc(slots: usize) {
    LAST_ALLOC.with(|last| last.set(slots));
}

pub(crate) fn thing_created() {
    LIVE_THINGS.with(|live| live.set(live.get() + 1));
}

pub(crate) fn thing_dropped() {
    LIVE_THINGS.with(|live| live.set(live.get() - 1));
}
