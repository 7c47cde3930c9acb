//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use fib128_core::bign::BigN;
use fib128_core::format::format;

/// Decimal digits of a value.
#[must_use]
pub fn format_result(value: BigN) -> String {
    format(value).as_str().to_owned()
}

/// Hexadecimal rendering with a `0x` prefix and no leading zeros.
#[must_use]
pub fn format_hex(value: BigN) -> String {
    if value.upper == 0 {
        format!("{:#x}", value.lower)
    } else {
        format!("{:#x}{:016x}", value.upper, value.lower)
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the decimal value, newline terminated, to a file.
pub fn write_to_file(path: &Path, value: BigN) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).ends_with("µs"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_millis(3_140)), "3.140s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn format_result_digits() {
        assert_eq!(format_result(BigN::ZERO), "0");
        assert_eq!(format_result(BigN::from(12345u64)), "12345");
        assert_eq!(
            format_result(BigN::MAX),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn format_hex_words() {
        assert_eq!(format_hex(BigN::ZERO), "0x0");
        assert_eq!(format_hex(BigN::from(255u64)), "0xff");
        assert_eq!(format_hex(BigN::new(1, 2)), "0x10000000000000002");
        assert_eq!(format_hex(BigN::MAX), format!("{:#x}", u128::MAX));
    }

    #[test]
    fn write_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fib.txt");
        write_to_file(&path, BigN::from(6765u64)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "6765\n");
    }
}
