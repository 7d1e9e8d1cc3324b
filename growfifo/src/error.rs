use std::collections::TryReserveError;

use thiserror::Error;

/// Errors from the fallible entry points of the crate.
///
/// `push`, `shift` and `item` never fail; only `try_push` and configured
/// construction report errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FifoError {
    #[error("cannot grow past {capacity} slots: capacity overflow")]
    CapacityOverflow { capacity: usize },

    #[error("failed to allocate fifo storage: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("invalid fifo configuration: {0}")]
    InvalidConfig(String),
}
