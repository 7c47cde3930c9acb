//! Fixed-width 128-bit unsigned integer made of two 64-bit words.
//!
//! Every primitive reports overflow explicitly, either as a `(value, flag)`
//! pair (`overflowing_*`, the value wraps like the std integer methods) or as
//! an `Option` (`checked_*`). Arithmetic never relies on native 128-bit
//! integers; `u128` only shows up in the conversion impls.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::calculator::FibError;
use crate::format::format;

const HALF_BITS: u32 = 32;
const LOW_HALF: u64 = 0x0000_0000_FFFF_FFFF;

/// Unsigned integer `upper * 2^64 + lower`.
///
/// Field order matters: the derived `Ord` compares `upper` first, which is
/// numeric order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigN {
    /// Most significant word.
    pub upper: u64,
    /// Least significant word.
    pub lower: u64,
}

/// Error returned when parsing a decimal string into a [`BigN`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigNError {
    /// The input was empty.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// The input contained something other than ASCII digits.
    #[error("invalid digit {0:?} in decimal string")]
    InvalidDigit(char),

    /// The value does not fit in 128 bits.
    #[error("decimal value does not fit in 128 bits")]
    Overflow,
}

impl BigN {
    /// The value 0.
    pub const ZERO: Self = Self::new(0, 0);
    /// The value 1.
    pub const ONE: Self = Self::new(0, 1);
    /// The value 2^128 - 1.
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Build a value from its two words.
    #[must_use]
    pub const fn new(upper: u64, lower: u64) -> Self {
        Self { upper, lower }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.upper == 0 && self.lower == 0
    }

    /// Number of leading zero bits (128 for zero).
    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        if self.upper == 0 {
            64 + self.lower.leading_zeros()
        } else {
            self.upper.leading_zeros()
        }
    }

    /// Number of significant bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        128 - self.leading_zeros()
    }

    /// `self + rhs`, with the flag set when the sum exceeds 2^128 - 1.
    #[must_use]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let lower = self.lower.wrapping_add(rhs.lower);
        let carry = lower < self.lower;
        let (upper, o1) = self.upper.overflowing_add(rhs.upper);
        let (upper, o2) = upper.overflowing_add(u64::from(carry));
        (Self::new(upper, lower), o1 || o2)
    }

    /// `self - rhs`, with the flag set when `rhs > self` (the borrow ran out
    /// of the upper word). The value is meaningless in that case.
    #[must_use]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let lower = self.lower.wrapping_sub(rhs.lower);
        let borrow = lower > self.lower;
        let (upper, b1) = self.upper.overflowing_sub(rhs.upper);
        let (upper, b2) = upper.overflowing_sub(u64::from(borrow));
        (Self::new(upper, lower), b1 || b2)
    }

    /// `self << n`, with the flag set when a set bit is pushed past bit 127.
    ///
    /// Shifts of 128 or more yield zero.
    #[must_use]
    pub fn overflowing_shl(self, n: u32) -> (Self, bool) {
        if n == 0 {
            return (self, false);
        }
        // The highest set bit is at 127 - leading_zeros.
        let overflow = !self.is_zero() && n > self.leading_zeros();
        let shifted = match n {
            1..=63 => Self::new(
                (self.upper << n) | (self.lower >> (64 - n)),
                self.lower << n,
            ),
            64..=127 => Self::new(self.lower << (n - 64), 0),
            _ => Self::ZERO,
        };
        (shifted, overflow)
    }

    /// Exact 64 x 64 -> 128 bit product, built from 32-bit halves.
    #[must_use]
    pub fn widening_mul(x: u64, y: u64) -> Self {
        let (x_hi, x_lo) = (x >> HALF_BITS, x & LOW_HALF);
        let (y_hi, y_lo) = (y >> HALF_BITS, y & LOW_HALF);

        let high = x_hi * y_hi;
        let low = x_lo * y_lo;
        let (middle, middle_carry) = (x_hi * y_lo).overflowing_add(x_lo * y_hi);

        // middle is weighted 2^32; its own carry lands on bit 96
        let middle = Self::new(
            (middle >> HALF_BITS) | (u64::from(middle_carry) << HALF_BITS),
            middle << HALF_BITS,
        );
        let (product, overflow) = Self::new(high, low).overflowing_add(middle);
        debug_assert!(!overflow, "64-bit product cannot exceed 128 bits");
        product
    }

    /// `self * rhs`, with the flag set iff the product exceeds 2^128 - 1.
    #[must_use]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let base = Self::widening_mul(self.lower, rhs.lower);

        if self.upper != 0 && rhs.upper != 0 {
            // Both operands are at least 2^64.
            let upper = base
                .upper
                .wrapping_add(self.upper.wrapping_mul(rhs.lower))
                .wrapping_add(self.lower.wrapping_mul(rhs.upper));
            return (Self::new(upper, base.lower), true);
        }

        let cross = if self.upper != 0 {
            Self::widening_mul(self.upper, rhs.lower)
        } else if rhs.upper != 0 {
            Self::widening_mul(rhs.upper, self.lower)
        } else {
            return (base, false);
        };

        // The cross term is weighted 2^64: only its lower word has room.
        let (upper, carry) = base.upper.overflowing_add(cross.lower);
        (Self::new(upper, base.lower), cross.upper != 0 || carry)
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_add(rhs))
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_sub(rhs))
    }

    #[must_use]
    pub fn checked_shl(self, n: u32) -> Option<Self> {
        checked(self.overflowing_shl(n))
    }

    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_mul(rhs))
    }

    /// Divide by a 64-bit divisor, returning quotient and remainder.
    pub fn div_rem_small(self, divisor: u64) -> Result<(Self, u64), FibError> {
        let divisor = NonZeroU64::new(divisor).ok_or(FibError::DivisionByZero)?;
        Ok(self.div_rem_word(divisor))
    }

    /// Divide by a non-zero 64-bit divisor.
    ///
    /// The upper word is divided directly. Its remainder (the borrow) is then
    /// folded into the lower word through `2^64 = d * q + r`: each round adds
    /// `borrow * q` to the quotient and leaves `borrow * r + lower` to divide,
    /// until no borrow is left.
    #[must_use]
    pub fn div_rem_word(self, divisor: NonZeroU64) -> (Self, u64) {
        let d = divisor.get();
        if self.upper == 0 {
            return (Self::new(0, self.lower / d), self.lower % d);
        }
        if d == 1 {
            return (self, 0);
        }

        let upper = self.upper / d;
        let mut borrow = self.upper % d;
        let mut lower = self.lower;
        let (radix_quot, radix_rem) = word_radix_div_rem(d);

        // The partial quotients sum to the final lower quotient, which fits
        // in 64 bits because borrow < d.
        let mut quotient = 0u64;
        while borrow != 0 {
            quotient += borrow * radix_quot;
            let (folded, overflow) =
                Self::widening_mul(borrow, radix_rem).overflowing_add(Self::new(0, lower));
            debug_assert!(!overflow);
            borrow = folded.upper;
            lower = folded.lower;
        }

        (Self::new(upper, quotient + lower / d), lower % d)
    }
}

fn checked((value, overflow): (BigN, bool)) -> Option<BigN> {
    if overflow {
        None
    } else {
        Some(value)
    }
}

/// Split 2^64 as `d * q + r` with `r < d`, for `d >= 2`.
fn word_radix_div_rem(d: u64) -> (u64, u64) {
    let (q, r) = (u64::MAX / d, u64::MAX % d + 1);
    if r == d {
        (q + 1, 0)
    } else {
        (q, r)
    }
}

impl From<u64> for BigN {
    fn from(value: u64) -> Self {
        Self::new(0, value)
    }
}

impl From<u128> for BigN {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self::new((value >> 64) as u64, value as u64)
    }
}

impl From<BigN> for u128 {
    fn from(value: BigN) -> Self {
        (u128::from(value.upper) << 64) | u128::from(value.lower)
    }
}

impl fmt::Display for BigN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(format(*self).as_str())
    }
}

impl FromStr for BigN {
    type Err = ParseBigNError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigNError::Empty);
        }
        let ten = Self::from(10u64);
        s.bytes().try_fold(Self::ZERO, |acc, byte| {
            if !byte.is_ascii_digit() {
                return Err(ParseBigNError::InvalidDigit(char::from(byte)));
            }
            acc.checked_mul(ten)
                .and_then(|v| v.checked_add(Self::from(u64::from(byte - b'0'))))
                .ok_or(ParseBigNError::Overflow)
        })
    }
}
