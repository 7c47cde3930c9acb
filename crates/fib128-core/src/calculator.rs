//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration and the device.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `FibCalculator` is a decorator that validates the request index and logs
//! the outcome.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info_span, warn};

use crate::bign::BigN;
use crate::observer::ProgressObserver;
use crate::options::Options;

/// Arithmetic primitive that reported an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Shl,
    Mul,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Shl => "left shift",
            Self::Mul => "multiplication",
        })
    }
}

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The request index is negative or above the configured ceiling.
    #[error("invalid index {index}: expected 0..={max}")]
    InvalidIndex { index: i64, max: u64 },

    /// A value the calculation needs does not fit in 128 bits.
    #[error("arithmetic overflow in {0}: result exceeds 128 bits")]
    Overflow(ArithOp),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(index) with the given options.
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        index: i64,
        opts: &Options,
    ) -> Result<BigN, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds index validation and logging.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(k) for an already validated index.
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        k: u64,
    ) -> Result<BigN, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreCalculator` with index validation and logging.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        index: i64,
        opts: &Options,
    ) -> Result<BigN, FibError> {
        let _span = info_span!("calculate", algorithm = self.inner.name(), index).entered();

        // Rejected requests never reach the arithmetic.
        let k = opts.validate_index(index)?;

        match self.inner.calculate_core(observer, calc_index, k) {
            Ok(value) => {
                debug!(bits = value.bits(), "F({k}) computed");
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "F({k}) failed");
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
