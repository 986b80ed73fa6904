use std::fmt;

use crate::stats;

/// The payload stored by [`ThingVector`](crate::ThingVector).
///
/// Construction, cloning and dropping are logged at `trace` level and counted
/// in [`stats::live_things`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Thing {
    value: i64,
}

impl Thing {
    pub fn new(value: i64) -> Self {
        stats::thing_created();
        log::trace!("construct Thing({value})");
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

impl Clone for Thing {
    fn clone(&self) -> Self {
        log::trace!("copy Thing({})", self.value);
        Thing::new(self.value)
    }
}

impl Drop for Thing {
    fn drop(&mut self) {
        stats::thing_dropped();
        log::trace!("destroy Thing({})", self.value);
    }
}

impl Default for Thing {
    fn default() -> Self {
        Thing::new(0)
    }
}

impl From<i64> for Thing {
    fn from(value: i64) -> Self {
        Thing::new(value)
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
