pub mod circular_fifo;
pub mod config;
pub mod error;
pub mod iter;
#[cfg(feature = "async")]
pub mod stream;

pub use crate::circular_fifo::CircularFifo;
pub use crate::config::{FifoConfig, GrowthPolicy};
pub use crate::error::FifoError;
