//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use fib128_core::calculator::{Calculator, FibError};
use fib128_core::observer::ProgressObserver;
use fib128_core::options::Options;

use crate::interfaces::CalculationResult;

/// Run every calculator for index `n`, one after another.
///
/// Each result carries its own outcome; a failing calculator does not stop
/// the others.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: i64,
    opts: &Options,
    observer: &dyn ProgressObserver,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .enumerate()
        .map(|(i, calc)| {
            let start = Instant::now();
            let outcome = calc.calculate(observer, i, n, opts);
            let duration = start.elapsed();
            debug!(
                algorithm = calc.name(),
                ok = outcome.is_ok(),
                elapsed_us = duration.as_micros(),
                "Calculator finished"
            );
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(CalculationResult::value);

    let Some(first) = values.next() else {
        return Err(FibError::Calculation("no valid results".into()));
    };

    if values.any(|value| value != first) {
        warn!("Calculators disagree");
        return Err(FibError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use fib128_core::bign::BigN;
    use fib128_core::calculator::{ArithOp, FibCalculator};
    use fib128_core::fastdoubling::FastDoubling;
    use fib128_core::iterator::IterativeAddition;
    use fib128_core::observers::NoOpObserver;
    use fib128_core::progress::ProgressUpdate;

    fn fast() -> Arc<dyn Calculator> {
        Arc::new(FibCalculator::new(Arc::new(FastDoubling::new())))
    }

    fn iterative() -> Arc<dyn Calculator> {
        Arc::new(FibCalculator::new(Arc::new(IterativeAddition::new())))
    }

    fn result(algorithm: &str, outcome: Result<BigN, FibError>) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let opts = Options::default();
        let results = execute_calculations(&[fast()], 100, &opts, &NoOpObserver::new());
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].outcome,
            Ok("354224848179261915075".parse::<BigN>().unwrap())
        );
    }

    #[test]
    fn execute_multiple_calculators() {
        let opts = Options { max_index: 186 };
        let results =
            execute_calculations(&[fast(), iterative()], 186, &opts, &NoOpObserver::new());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].algorithm, "FastDoubling");
        assert_eq!(results[1].algorithm, "IterativeAddition");
        assert!(results.iter().all(|r| r.outcome.is_ok()));
        assert_eq!(results[0].outcome, results[1].outcome);
    }

    #[test]
    fn execute_keeps_going_after_failure() {
        let opts = Options { max_index: 200 };
        let results =
            execute_calculations(&[fast(), iterative()], 187, &opts, &NoOpObserver::new());
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(matches!(r.outcome, Err(FibError::Overflow(_))), "{r:?}");
        }
    }

    #[test]
    fn execute_rejects_invalid_index() {
        let opts = Options::default();
        let results = execute_calculations(&[fast()], -1, &opts, &NoOpObserver::new());
        assert_eq!(
            results[0].outcome,
            Err(FibError::InvalidIndex { index: -1, max: 100 })
        );
    }

    #[test]
    fn execute_with_observer() {
        struct CountingObserver {
            done: AtomicUsize,
        }
        impl ProgressObserver for CountingObserver {
            fn on_progress(&self, update: &ProgressUpdate) {
                if update.done {
                    self.done.fetch_add(1, Ordering::Relaxed);
                }
            }
        }

        let observer = CountingObserver {
            done: AtomicUsize::new(0),
        };
        let opts = Options::default();
        let results = execute_calculations(&[fast(), iterative()], 50, &opts, &observer);
        assert_eq!(results.len(), 2);
        assert_eq!(observer.done.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("A", Ok(BigN::from(55u64))),
            result("B", Ok(BigN::from(55u64))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![
            result("A", Ok(BigN::from(55u64))),
            result("B", Ok(BigN::from(55u64))),
            result("C", Ok(BigN::from(56u64))),
        ];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FibError::Mismatch)
        ));
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![result("A", Err(FibError::Overflow(ArithOp::Mul)))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FibError::Calculation(_))
        ));
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FibError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![
            result("A", Ok(BigN::from(55u64))),
            result("B", Err(FibError::Overflow(ArithOp::Add))),
            result("C", Ok(BigN::from(55u64))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }
}
