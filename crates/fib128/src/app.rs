//! Application entry point and dispatch.

use std::io::{self, SeekFrom, Write};

use anyhow::Result;
use tracing::debug;

use fib128_cli::output::write_to_file;
use fib128_cli::presenter::CliResultPresenter;
use fib128_core::calculator::FibError;
use fib128_core::constants::STRING_LEN;
use fib128_core::observers::LoggingObserver;
use fib128_core::options::Options;
use fib128_core::registry::DefaultFactory;
use fib128_device::{FibDevice, DEVICE_NAME};
use fib128_orchestration::calculator_selection::get_calculators_to_run;
use fib128_orchestration::interfaces::{CalculationResult, ResultPresenter};
use fib128_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application. Failures are reported through the presenter before
/// being returned, so JSON runs always emit a document.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fib128_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    debug!(version = %full_version(), "Starting");
    let opts = config.options();
    let presenter = CliResultPresenter::new(config.verbose, config.quiet).with_json(config.json);

    let outcome = if config.sequence {
        run_sequence(&opts, &mut io::stdout().lock())
    } else {
        run_cli(config, &opts, &presenter)
    };
    if let Err(ref err) = outcome {
        presenter.present_error(&format!("{err:#}"));
    }
    outcome
}

fn run_cli(config: &AppConfig, opts: &Options, presenter: &dyn ResultPresenter) -> Result<()> {
    let index = opts.validate_index(config.n)?;

    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    let results = execute_calculations(&calculators, config.n, opts, &LoggingObserver::new());

    let Some((shown, value)) = results.iter().find_map(|r| r.value().map(|v| (r, v))) else {
        if results.len() > 1 {
            presenter.present_comparison(&results);
        }
        return Err(first_error(&results).into());
    };

    if results.len() > 1 {
        let verdict = analyze_comparison_results(&results);
        if !config.json {
            presenter.present_result(&shown.algorithm, index, value, shown.duration, config.details);
        }
        presenter.present_comparison(&results);
        verdict?;
    } else {
        presenter.present_result(&shown.algorithm, index, value, shown.duration, config.details);
    }

    if let Some(ref path) = config.output {
        write_to_file(path, value)?;
    }

    Ok(())
}

fn first_error(results: &[CalculationResult]) -> FibError {
    results
        .iter()
        .find_map(|r| r.outcome.clone().err())
        .unwrap_or_else(|| FibError::Calculation("no calculators selected".into()))
}

/// Open the device and read every index from 0 to its max index.
pub fn run_sequence(opts: &Options, out: &mut dyn Write) -> Result<()> {
    let device = FibDevice::register(DEVICE_NAME, *opts);
    let mut session = device.open()?;
    let mut buf = [0u8; STRING_LEN];

    for offset in 0..=device.max_index() {
        session.seek_index(SeekFrom::Start(offset));
        let len = session.read(&mut buf)?;
        let digits = std::str::from_utf8(&buf[..len])?;
        writeln!(
            out,
            "Reading from /dev/{DEVICE_NAME} at offset {offset}, returned the sequence {digits}."
        )?;
    }

    Ok(())
}
