use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingArrayError {
    #[error("ring array is empty")]
    EmptyContainer,
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("sequence of length {len} exceeds capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
}

pub type Result<T, E = RingArrayError> = std::result::Result<T, E>;
