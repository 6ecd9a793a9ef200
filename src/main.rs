use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use json5lint::cli::{handle_error, Args, CliConfig, CliUtils};

fn main() -> ExitCode {
    let args = Args::parse();
    json5lint::init_tracing(CliUtils::default_log_filter(args.verbose));

    match lint(args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            handle_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn lint(args: Args) -> Result<u8> {
    let cli = CliConfig::from_args(args)?;
    tracing::debug!(
        config_dir = %cli.lint_config.config_dir.display(),
        extensions = ?cli.lint_config.extensions,
        verbose = cli.is_verbose(),
        "starting lint run"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = json5lint::run(&cli.lint_config, &mut out)?;
    out.flush().context("Failed to flush report")?;

    tracing::info!(
        checked = outcome.files_checked,
        failed = outcome.files_failed,
        "lint run finished"
    );
    Ok(outcome.exit_code())
}
