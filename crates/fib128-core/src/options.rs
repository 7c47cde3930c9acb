//! Calculation options and configuration.

use crate::calculator::FibError;
use crate::constants::DEFAULT_MAX_INDEX;

/// Options for Fibonacci calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Highest index a request may ask for.
    pub max_index: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_index == 0 {
            self.max_index = DEFAULT_MAX_INDEX;
        }
        self
    }

    /// Accept a request index in `0..=max_index`.
    pub fn validate_index(&self, index: i64) -> Result<u64, FibError> {
        u64::try_from(index)
            .ok()
            .filter(|&k| k <= self.max_index)
            .ok_or(FibError::InvalidIndex {
                index,
                max: self.max_index,
            })
    }
}
