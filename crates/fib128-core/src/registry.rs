//! Calculator lookup by name.

use std::sync::Arc;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::fastdoubling::FastDoubling;
use crate::iterator::IterativeAddition;

/// Canonical calculator names, in run order for `--algo all`.
const NAMES: [&str; 2] = ["fast", "iterative"];

/// Resolves calculator names to ready-to-run calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Build the calculator registered under `name`.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Factory for the built-in engines. Every lookup returns a fresh calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn wrap(core: Arc<dyn CoreCalculator>) -> Arc<dyn Calculator> {
    Arc::new(FibCalculator::new(core))
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        match name {
            "fast" | "fastdoubling" => Ok(wrap(Arc::new(FastDoubling::new()))),
            "iterative" => Ok(wrap(Arc::new(IterativeAddition::new()))),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }

    fn available(&self) -> Vec<&str> {
        NAMES.to_vec()
    }
}
