#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FifoError;

/// Capacity a buffer grows to when growing from zero slots.
pub const DEFAULT_EMPTY_GROWTH: usize = 1024;

pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// How a full buffer picks its next capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthPolicy {
    /// Capacity used when the current capacity is zero.
    pub empty_growth: usize,
    /// Multiplier applied to a non-zero capacity.
    pub growth_factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy {
            empty_growth: DEFAULT_EMPTY_GROWTH,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            self.empty_growth
        } else {
            current.saturating_mul(self.growth_factor)
        }
    }

    /// Same as [`next_capacity`](Self::next_capacity) but `None` when the
    /// result does not fit in `usize`.
    pub fn checked_next_capacity(&self, current: usize) -> Option<usize> {
        if current == 0 {
            Some(self.empty_growth)
        } else {
            current.checked_mul(self.growth_factor)
        }
    }
}

/// Settings for [`CircularFifo::with_config`](crate::CircularFifo::with_config).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FifoConfig {
    pub initial_capacity: usize,
    pub growth: GrowthPolicy,
}

impl FifoConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_empty_growth(mut self, empty_growth: usize) -> Self {
        self.growth.empty_growth = empty_growth;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth.growth_factor = growth_factor;
        self
    }

    /// Rejects policies under which a full buffer would not gain a slot.
    pub fn validate(&self) -> Result<(), FifoError> {
        if self.growth.empty_growth == 0 {
            return Err(FifoError::InvalidConfig(
                "empty_growth must be at least 1".to_string(),
            ));
        }
        if self.growth.growth_factor < 2 {
            return Err(FifoError::InvalidConfig(format!(
                "growth_factor must be at least 2, got {}",
                self.growth.growth_factor
            )));
        }
        Ok(())
    }
}
