//! Lazy Fibonacci iterator using the standard additive recurrence.
//!
//! Also backs `IterativeAddition`, the O(k) reference calculator used to
//! cross-check fast doubling.

use std::iter::FusedIterator;

use crate::bign::BigN;
use crate::calculator::{ArithOp, CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0) and ends after the
/// last value that fits in 128 bits.
///
/// # Example
/// ```
/// use fib128_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// assert_eq!(FibIterator::new().count(), 187);
/// ```
pub struct FibIterator {
    a: Option<BigN>,
    b: Option<BigN>,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: Some(BigN::ZERO),
            b: Some(BigN::ONE),
            index: 0,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigN);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.a?;
        let idx = self.index;
        // None once the sum needs a 129th bit.
        let next = self.b.and_then(|b| b.checked_add(val));
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some((idx, val))
    }
}

impl FusedIterator for FibIterator {}

/// Reference calculator that walks the sequence one addition at a time.
pub struct IterativeAddition;

impl IterativeAddition {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeAddition {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for IterativeAddition {
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        k: u64,
    ) -> Result<BigN, FibError> {
        let (_, value) = FibIterator::new()
            .nth(usize::try_from(k).unwrap_or(usize::MAX))
            .ok_or(FibError::Overflow(ArithOp::Add))?;

        observer.on_progress(&ProgressUpdate::done(calc_index, self.name()));
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "IterativeAddition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FIB_INDEX;
    use crate::observers::NoOpObserver;

    #[test]
    fn first_ten() {
        let vals: Vec<u128> = FibIterator::new()
            .take(10)
            .map(|(_, v)| u128::from(v))
            .collect();
        assert_eq!(vals, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn yields_correct_indices() {
        let indices: Vec<u64> = FibIterator::new().take(5).map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn stops_after_last_representable_value() {
        let (idx, val) = FibIterator::new().last().unwrap();
        assert_eq!(idx, MAX_FIB_INDEX);
        assert_eq!(val.to_string(), "332825110087067562321196029789634457848");

        let mut iter = FibIterator::new();
        assert_eq!(iter.by_ref().count(), 187);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn iterative_calculator() {
        let calc = IterativeAddition::new();
        let observer = NoOpObserver::new();
        assert_eq!(calc.calculate_core(&observer, 0, 0).unwrap(), BigN::ZERO);
        assert_eq!(
            calc.calculate_core(&observer, 0, 20).unwrap(),
            BigN::from(6765u64)
        );
        assert_eq!(
            calc.calculate_core(&observer, 0, MAX_FIB_INDEX + 1),
            Err(FibError::Overflow(ArithOp::Add))
        );
        assert!(calc.calculate_core(&observer, 0, u64::MAX).is_err());
    }
}
