//! # fib128-core
//!
//! Fibonacci numbers up to 128-bit precision. Provides the two-word `BigN`
//! integer with overflow-reporting arithmetic, its decimal formatter, and the
//! Fast Doubling engine that drives it in O(log k) operations.

pub mod bign;
pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod format;
pub mod iterator;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod registry;

// Re-exports
pub use bign::{BigN, ParseBigNError};
pub use calculator::{ArithOp, Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, DEFAULT_MAX_INDEX, MAX_FIB_INDEX, STRING_LEN};
pub use format::{format, DecimalBuffer};
pub use observer::ProgressObserver;
pub use options::Options;
pub use progress::ProgressUpdate;
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(k) using the fast doubling algorithm.
///
/// This is a convenience function for simple use cases. For index
/// validation and progress reporting, use the `Calculator` trait directly.
///
/// # Example
/// ```
/// assert_eq!(fib128_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fib128_core::fibonacci(0).unwrap().to_string(), "0");
/// assert!(fib128_core::fibonacci(187).is_err());
/// ```
pub fn fibonacci(k: u64) -> Result<BigN, FibError> {
    fastdoubling::FastDoubling::new().compute(k)
}
