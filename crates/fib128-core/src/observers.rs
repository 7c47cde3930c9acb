//! Concrete observer implementations.

use tracing::{debug, info};

use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress updates through `tracing`.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(algorithm = %update.algorithm, "Calculation complete");
        } else {
            debug!(
                algorithm = %update.algorithm,
                progress = format!("{:.1}%", update.progress * 100.0),
                step = update.current_step,
                total = update.total_steps,
                "Progress update"
            );
        }
    }
}

/// Null object pattern — does nothing with progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
