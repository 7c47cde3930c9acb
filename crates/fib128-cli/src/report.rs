//! Machine-readable result reports.

use std::time::Duration;

use serde::Serialize;

use fib128_core::bign::BigN;
use fib128_core::format::format;
use fib128_orchestration::interfaces::CalculationResult;

/// JSON view of a single successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub algorithm: String,
    pub n: u64,
    /// Decimal digits; serialized as a string so no precision is lost.
    pub value: String,
    pub digits: usize,
    pub bits: u32,
    pub duration_ms: f64,
}

impl ResultReport {
    #[must_use]
    pub fn new(algorithm: &str, n: u64, value: BigN, duration: Duration) -> Self {
        let digits = format(value);
        Self {
            algorithm: algorithm.to_owned(),
            n,
            value: digits.as_str().to_owned(),
            digits: digits.len(),
            bits: value.bits(),
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }
}

/// JSON view of one calculator in a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub algorithm: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: f64,
}

impl From<&CalculationResult> for ComparisonEntry {
    fn from(result: &CalculationResult) -> Self {
        let (value, error) = match &result.outcome {
            Ok(v) => (Some(format(*v).as_str().to_owned()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            algorithm: result.algorithm.clone(),
            ok: result.outcome.is_ok(),
            value,
            error,
            duration_ms: result.duration.as_secs_f64() * 1000.0,
        }
    }
}

/// JSON view of a failed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_owned(),
        }
    }
}
