//! Errors reported by pool operations.

use std::collections::TryReserveError;

/// Failure of a pool operation. The pool is left exactly as it was before
/// the failing call.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// The operation needs a node but was given the empty list.
    #[error("operation requires a non-empty list")]
    EmptyList,

    /// The handle addresses a position past the end of node storage.
    #[error("index {index} is out of range for a pool of {size} nodes")]
    OutOfRange {
        /// Offending position.
        index: usize,
        /// Storage size at the time of the call.
        size: usize,
    },

    /// Node storage could not grow.
    #[error("failed to grow node storage")]
    Allocation(#[from] TryReserveError),

    /// Node storage would outgrow what the index type can address.
    #[error("node storage exceeds the range of the index type")]
    IndexOverflow,
}

/// Result alias used throughout the crate.
pub type PoolResult<T> = Result<T, PoolError>;
