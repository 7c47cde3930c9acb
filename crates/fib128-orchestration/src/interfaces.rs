//! Orchestration interfaces.

use std::time::Duration;

use fib128_core::bign::BigN;
use fib128_core::calculator::FibError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: BigN,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison result.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<BigN, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<BigN> {
        self.outcome.as_ref().ok().copied()
    }
}
