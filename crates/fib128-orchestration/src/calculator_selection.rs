//! Calculator selection logic.

use std::sync::Arc;

use fib128_core::calculator::{Calculator, FibError};
use fib128_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
