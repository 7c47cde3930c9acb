//! CLI result presenter.

use std::time::Duration;

use tracing::warn;

use fib128_core::bign::BigN;
use fib128_core::format::format;
use fib128_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_hex, format_number, format_result};
use crate::report::{ComparisonEntry, ErrorReport, ResultReport};

/// CLI result presenter.
///
/// Quiet mode prints only the number. JSON mode prints one JSON document per
/// call on stdout, errors included, and takes precedence over the human layout.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            json: false,
        }
    }

    /// Switch JSON output on or off.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn render_result(
        &self,
        algorithm: &str,
        n: u64,
        result: BigN,
        duration: Duration,
        details: bool,
    ) -> String {
        if self.json {
            return to_json(&ResultReport::new(algorithm, n, result, duration));
        }
        if self.quiet {
            return format_result(result);
        }

        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("N: {}", format_number(n)),
            format!("Duration: {}", format_duration(duration)),
        ];
        if details {
            lines.push(format!("Result bits: {}", result.bits()));
            lines.push(format!("Result digits: {}", format(result).len()));
        }
        if self.verbose {
            lines.push(format!("Hex: {}", format_hex(result)));
        }
        lines.push(format!("F({}) = {}", format_number(n), format_result(result)));
        lines.join("\n")
    }

    fn render_comparison(&self, results: &[CalculationResult]) -> Option<String> {
        if self.json {
            let entries: Vec<ComparisonEntry> = results.iter().map(ComparisonEntry::from).collect();
            return Some(to_json(&entries));
        }
        if self.quiet {
            return None;
        }

        let mut lines = vec![String::new(), "Comparison Results:".to_owned(), "-".repeat(60)];
        lines.extend(results.iter().map(|result| {
            let status = match &result.outcome {
                Ok(_) => "OK".to_owned(),
                Err(e) => format!("ERROR: {e}"),
            };
            format!(
                "  {:<20} {:>10} [{status}]",
                result.algorithm,
                format_duration(result.duration),
            )
        }));
        Some(lines.join("\n"))
    }

    fn render_error(&self, error: &str) -> String {
        if self.json {
            return to_json(&ErrorReport::new(error));
        }
        format!("Error: {error}")
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize report");
        String::from("{}")
    })
}

impl ResultPresenter for CliResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: BigN,
        duration: Duration,
        details: bool,
    ) {
        println!("{}", self.render_result(algorithm, n, result, duration, details));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if let Some(text) = self.render_comparison(results) {
            println!("{text}");
        }
    }

    fn present_error(&self, error: &str) {
        let text = self.render_error(error);
        if self.json {
            println!("{text}");
        } else {
            eprintln!("{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fib128_core::calculator::{ArithOp, FibError};

    fn f100() -> BigN {
        "354224848179261915075".parse().unwrap()
    }

    #[test]
    fn quiet_prints_number_only() {
        let presenter = CliResultPresenter::new(false, true);
        let text = presenter.render_result("FastDoubling", 100, f100(), Duration::ZERO, true);
        assert_eq!(text, "354224848179261915075");
    }

    #[test]
    fn normal_layout() {
        let presenter = CliResultPresenter::new(false, false);
        let text =
            presenter.render_result("FastDoubling", 1000, BigN::from(55u64), Duration::ZERO, false);
        assert!(text.starts_with("Algorithm: FastDoubling\nN: 1,000\n"));
        assert!(text.ends_with("F(1,000) = 55"));
        assert!(!text.contains("bits"));
        assert!(!text.contains("Hex"));
    }

    #[test]
    fn details_and_verbose() {
        let presenter = CliResultPresenter::new(true, false);
        let text = presenter.render_result("FastDoubling", 100, f100(), Duration::ZERO, true);
        assert!(text.contains("Result bits: 69"));
        assert!(text.contains("Result digits: 21"));
        assert!(text.contains("Hex: 0x1333db76a7c594bfc3"));
    }

    #[test]
    fn json_wins_over_quiet() {
        let presenter = CliResultPresenter::new(false, true).with_json(true);
        let text = presenter.render_result("FastDoubling", 10, BigN::from(55u64), Duration::ZERO, false);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["value"], "55");
    }

    fn mixed_results() -> Vec<CalculationResult> {
        vec![
            CalculationResult {
                algorithm: "FastDoubling".into(),
                outcome: Ok(BigN::from(55u64)),
                duration: Duration::from_millis(5),
            },
            CalculationResult {
                algorithm: "IterativeAddition".into(),
                outcome: Err(FibError::Overflow(ArithOp::Add)),
                duration: Duration::ZERO,
            },
        ]
    }

    #[test]
    fn comparison_table() {
        let presenter = CliResultPresenter::new(false, false);
        let text = presenter.render_comparison(&mixed_results()).unwrap();
        assert!(text.contains("Comparison Results:"));
        assert!(text.contains("FastDoubling"));
        assert!(text.contains("[OK]"));
        assert!(text.contains("[ERROR: arithmetic overflow in addition"));
    }

    #[test]
    fn comparison_quiet_is_silent() {
        let presenter = CliResultPresenter::new(false, true);
        assert!(presenter.render_comparison(&mixed_results()).is_none());
    }

    #[test]
    fn comparison_json() {
        let presenter = CliResultPresenter::new(false, false).with_json(true);
        let text = presenter.render_comparison(&mixed_results()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["ok"], true);
        assert_eq!(json[1]["ok"], false);
    }

    #[test]
    fn comparison_rows_follow_rule() {
        let presenter = CliResultPresenter::new(false, false);
        let text = presenter.render_comparison(&mixed_results()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Comparison Results:");
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(lines.len(), 5);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn error_text() {
        let presenter = CliResultPresenter::new(false, true);
        assert_eq!(presenter.render_error("device is in use"), "Error: device is in use");
    }

    #[test]
    fn error_json_document() {
        let presenter = CliResultPresenter::new(false, false).with_json(true);
        let text = presenter.render_error("arithmetic overflow in addition");
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error"], "arithmetic overflow in addition");
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CliResultPresenter::new(false, false);
        presenter.present_result("FastDoubling", 10, BigN::from(55u64), Duration::ZERO, true);
        presenter.present_comparison(&[]);
        presenter.present_error("test error message");
    }
}
