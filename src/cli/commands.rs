//! Command implementations for the LedgerForge CLI

use std::env;
use std::io::IsTerminal;

use tracing::info;

use super::{CliError, CliResult, ExitCode};
use crate::config::{OutputFormat, RunConfig};
use crate::forge::LedgerForge;
use crate::harness::{ConsoleReporter, JsonReporter, run_suite};
use crate::selftest::ledgerforge_suite;
use crate::version::LEDGERFORGE_VERSION;

/// Colour is on only when neither `--no-color` nor `NO_COLOR` is set and stdout is a terminal.
pub fn color_enabled(no_color_flag: bool, no_color_env: bool, is_tty: bool) -> bool {
    !no_color_flag && !no_color_env && is_tty
}

/// Build a `RunConfig` from `test` flags.
pub fn config_from_flags(
    verbose: bool,
    stop_on_fail: bool,
    include_slow: bool,
    filter: Option<String>,
    collect_only: bool,
    format: OutputFormat,
    no_color: bool,
) -> RunConfig {
    let color = color_enabled(
        no_color,
        env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    );
    RunConfig::new()
        .with_verbose(verbose)
        .with_stop_on_fail(stop_on_fail)
        .with_include_slow(include_slow)
        .with_filter(filter)
        .with_collect_only(collect_only)
        .with_color(color)
        .with_format(format)
}

/// Run the built-in suite and map the summary to an exit code.
pub fn run_tests(config: &RunConfig) -> CliResult<ExitCode> {
    let suite = ledgerforge_suite()?;

    let summary = match config.format {
        OutputFormat::Console => {
            let mut reporter = ConsoleReporter::stdout(config.verbose, config.color);
            run_suite(&suite, config, &mut reporter)?
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::stdout();
            run_suite(&suite, config, &mut reporter)?
        }
    };

    info!(
        passed = summary.passed,
        failed = summary.failed,
        xpassed = summary.xpassed,
        "test session finished"
    );

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Summary already printed
        Err(CliError::new("", ExitCode(summary.exit_code())))
    }
}

/// Construct a `LedgerForge`, call `run()` and print the result.
pub fn run_forge() -> CliResult<ExitCode> {
    let forge = LedgerForge::new();
    let result = forge.run();
    println!("{}", result);
    if result {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

pub fn print_version() -> CliResult<ExitCode> {
    println!("ledgerforge {}", LEDGERFORGE_VERSION);
    Ok(ExitCode::SUCCESS)
}
