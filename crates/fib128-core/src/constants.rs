//! Constants for result buffers, index ceilings and exit codes.

/// Capacity of a formatted result, terminator included.
pub const STRING_LEN: usize = 40;

/// Digits in the largest 128-bit value (2^128 - 1).
pub const MAX_DECIMAL_DIGITS: usize = 39;

/// Default ceiling on a request index.
pub const DEFAULT_MAX_INDEX: u64 = 100;

/// Largest Fibonacci index whose value fits in 128 bits.
///
/// F(186) = 332825110087067562321196029789634457848; F(187) exceeds
/// 2^128 - 1 (340282366920938463463374607431768211455).
pub const MAX_FIB_INDEX: u64 = 186;

/// Process exit codes for the `fib128` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The result does not fit in 128 bits.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Requested index outside the accepted range.
    pub const ERROR_INVALID_INDEX: i32 = 5;
    /// The device already has an open session (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
