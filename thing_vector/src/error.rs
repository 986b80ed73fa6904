use thiserror::Error;

/// Failures reported by [`ThingVector`](crate::ThingVector).
///
/// Every variant is returned before the container is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("cannot remove from an empty container")]
    EmptyContainer,
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("capacity overflow: cannot allocate {requested} slots")]
    CapacityOverflow { requested: usize },
}
