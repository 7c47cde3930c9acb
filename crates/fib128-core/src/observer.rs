//! Observer pattern for progress tracking.

use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
///
/// The fast doubling loop reports once per bit of the index, so at most 64
/// updates arrive per calculation.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

