//! fib128 — Fibonacci numbers up to 128 bits.

use fib128_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // RUST_LOG overrides the default level when set.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    // Failures are already presented by `app::run`.
    if let Err(err) = app::run(&config) {
        std::process::exit(errors::exit_code(&err));
    }
}
