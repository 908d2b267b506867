//! Error types for sparse vector operations

/// Errors that can occur while sizing a slot buffer
///
/// Reads never fail: an out-of-range index reads as an empty slot. The only
/// failure source is the slot allocator, plus index arithmetic that would
/// overflow `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparseError {
    /// `index + 1` or `row * cols + col` does not fit in `usize`
    IndexOverflow,
    /// Requested slot count does not fit in the address space
    CapacityOverflow,
    /// Requested slot count is above the configured ceiling
    CapacityLimit { requested: usize, limit: usize },
    /// The allocator refused to provide the buffer
    AllocationFailed { requested: usize },
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparseError::IndexOverflow => write!(f, "Index arithmetic overflow"),
            SparseError::CapacityOverflow => write!(f, "Slot buffer size overflow"),
            SparseError::CapacityLimit { requested, limit } => {
                write!(f, "Requested {requested} slots, limit is {limit}")
            }
            SparseError::AllocationFailed { requested } => {
                write!(f, "Unable to allocate {requested} slots")
            }
        }
    }
}

impl core::error::Error for SparseError {}

/// Result type for sparse vector operations
pub type Result<T> = core::result::Result<T, SparseError>;
