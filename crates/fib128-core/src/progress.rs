//! Progress tracking types.

/// Progress update sent from calculators to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Calculator index (for multi-calculator runs).
    pub calc_index: usize,
    /// Name of the algorithm producing this update.
    pub algorithm: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Current iteration/step number.
    pub current_step: u64,
    /// Total number of steps.
    pub total_steps: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create an update for step `current` of `total`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(calc_index: usize, algorithm: &'static str, current: u64, total: u64) -> Self {
        let progress = if total == 0 {
            1.0
        } else {
            current as f64 / total as f64
        };
        Self {
            calc_index,
            algorithm,
            progress,
            current_step: current,
            total_steps: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(calc_index: usize, algorithm: &'static str) -> Self {
        Self {
            calc_index,
            algorithm,
            progress: 1.0,
            current_step: 0,
            total_steps: 0,
            done: true,
        }
    }
}
