//! Decimal rendering of [`BigN`] into a fixed-capacity buffer.

use std::fmt;
use std::num::NonZeroU64;

use crate::bign::BigN;
use crate::constants::{MAX_DECIMAL_DIGITS, STRING_LEN};

const TEN: NonZeroU64 = match NonZeroU64::new(10) {
    Some(ten) => ten,
    None => unreachable!(),
};

/// Decimal digits of one [`BigN`], most significant first.
///
/// A 128-bit value has at most 39 digits, so the 40-byte buffer always keeps
/// room for a NUL terminator.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DecimalBuffer {
    digits: [u8; STRING_LEN],
    len: usize,
}

impl DecimalBuffer {
    /// The digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// The digits as bytes, without terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: zero renders as `"0"`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The full NUL-terminated record, padded with NULs to `STRING_LEN`.
    #[must_use]
    pub fn to_record(&self) -> [u8; STRING_LEN] {
        self.digits
    }
}

impl AsRef<str> for DecimalBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for DecimalBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecimalBuffer").field(&self.as_str()).finish()
    }
}

impl fmt::Display for DecimalBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `value` in base 10.
///
/// Peels off digits with repeated division by ten, then reverses them.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format(value: BigN) -> DecimalBuffer {
    let mut buf = DecimalBuffer {
        digits: [0; STRING_LEN],
        len: 0,
    };

    if value.is_zero() {
        buf.digits[0] = b'0';
        buf.len = 1;
        return buf;
    }

    let mut rest = value;
    while !rest.is_zero() {
        debug_assert!(buf.len < MAX_DECIMAL_DIGITS);
        let (quotient, digit) = rest.div_rem_word(TEN);
        buf.digits[buf.len] = b'0' + digit as u8;
        buf.len += 1;
        rest = quotient;
    }
    buf.digits[..buf.len].reverse();
    buf
}
