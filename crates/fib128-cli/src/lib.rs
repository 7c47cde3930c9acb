//! # fib128-cli
//!
//! CLI output formatting, JSON reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod report;

pub use presenter::CliResultPresenter;
