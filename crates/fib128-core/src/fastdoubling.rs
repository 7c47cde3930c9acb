//! Fast Doubling algorithm on 128-bit values.
//!
//! Uses the doubling identities:
//!   F(2j)   = F(j) * (2*F(j+1) - F(j))
//!   F(2j+1) = F(j)^2 + F(j+1)^2
//!
//! Iterates from MSB to LSB over a rolling pair, so a request never allocates
//! and never recurses. Every primitive's overflow flag is checked; the first
//! overflow of a value the result depends on aborts the calculation.

use crate::bign::BigN;
use crate::calculator::{ArithOp, CoreCalculator, FibError};
use crate::observer::ProgressObserver;
use crate::observers::NoOpObserver;
use crate::progress::ProgressUpdate;

const NAME: &str = "FastDoubling";

/// Turn an `overflowing_*` outcome into a result.
fn require((value, overflow): (BigN, bool), op: ArithOp) -> Result<BigN, FibError> {
    if overflow {
        Err(FibError::Overflow(op))
    } else {
        Ok(value)
    }
}

/// One doubling step from `(F(j), F(j+1))`.
///
/// F(2j) is always needed by the caller and fails eagerly. F(2j+1) comes
/// back as its own `Result`: after the last bit it may be the trailing
/// F(k+1), which is allowed to exceed 128 bits.
fn doubling_step(fk: BigN, fk1: BigN) -> Result<(BigN, Result<BigN, FibError>), FibError> {
    let t = require(fk1.overflowing_shl(1), ArithOp::Shl)?;
    let t = require(t.overflowing_sub(fk), ArithOp::Sub)?;
    let f2k = require(fk.overflowing_mul(t), ArithOp::Mul)?;

    let f2k1 = require(fk.overflowing_mul(fk), ArithOp::Mul).and_then(|fk_sq| {
        let fk1_sq = require(fk1.overflowing_mul(fk1), ArithOp::Mul)?;
        require(fk_sq.overflowing_add(fk1_sq), ArithOp::Add)
    });

    Ok((f2k, f2k1))
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fib128_core::fastdoubling::FastDoubling;
///
/// let value = FastDoubling::new().compute(100).unwrap();
/// assert_eq!(value.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(k), failing with [`FibError::Overflow`] when F(k) needs
    /// more than 128 bits.
    pub fn compute(&self, k: u64) -> Result<BigN, FibError> {
        self.execute_doubling_loop(k, &NoOpObserver::new(), 0)
    }

    /// Execute the doubling loop.
    fn execute_doubling_loop(
        &self,
        k: u64,
        observer: &dyn ProgressObserver,
        calc_index: usize,
    ) -> Result<BigN, FibError> {
        let num_bits = 64 - k.leading_zeros();

        // (F(j), F(j+1)) with j = 0
        let mut fk = BigN::ZERO;
        let mut fk1: Result<BigN, FibError> = Ok(BigN::ONE);

        for i in (0..num_bits).rev() {
            // F(j+1) is only pending after the final bit, never inside the loop.
            let (f2k, f2k1) = doubling_step(fk, fk1?)?;

            if (k >> i) & 1 == 1 {
                // j <- 2j + 1: the pair becomes (F(2j+1), F(2j) + F(2j+1))
                let f2k1 = f2k1?;
                fk = f2k1;
                fk1 = require(f2k.overflowing_add(f2k1), ArithOp::Add);
            } else {
                fk = f2k;
                fk1 = f2k1;
            }

            observer.on_progress(&ProgressUpdate::step(
                calc_index,
                NAME,
                u64::from(num_bits - i),
                u64::from(num_bits),
            ));
        }

        Ok(fk)
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        k: u64,
    ) -> Result<BigN, FibError> {
        let result = self.execute_doubling_loop(k, observer, calc_index)?;

        // Send completion
        observer.on_progress(&ProgressUpdate::done(calc_index, NAME));

        Ok(result)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
