//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fib128_core::constants::DEFAULT_MAX_INDEX;
use fib128_core::options::Options;

/// fib128 — Fibonacci numbers up to 128 bits.
#[derive(Parser, Debug)]
#[command(name = "fib128", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short,
        long,
        default_value_t = 100,
        env = "FIB128_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Algorithm to use: fast, iterative, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Highest index accepted (0 selects the default).
    #[arg(long, default_value_t = DEFAULT_MAX_INDEX, env = "FIB128_MAX_INDEX")]
    pub max_index: u64,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show bit and digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Print results as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Read every index from 0 to the max index through the device.
    #[arg(long)]
    pub sequence: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Library options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            max_index: self.max_index,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fib128").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "fast");
        assert_eq!(config.options().max_index, DEFAULT_MAX_INDEX);
        assert!(!config.sequence);
    }

    #[test]
    fn negative_index_parses() {
        assert_eq!(parse(&["-n", "-1"]).n, -1);
    }

    #[test]
    fn zero_max_index_normalizes() {
        assert_eq!(parse(&["--max-index", "0"]).options().max_index, DEFAULT_MAX_INDEX);
        assert_eq!(parse(&["--max-index", "186"]).options().max_index, 186);
    }

    #[test]
    fn json_conflicts_with_quiet() {
        assert!(AppConfig::try_parse_from(["fib128", "--json", "-q"]).is_err());
    }
}
