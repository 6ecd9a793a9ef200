//! Command-line interface module

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{LintError, LintResult};
use crate::lint::{LintConfig, DEFAULT_EXTENSION};

pub mod path_mapping;

/// Main CLI arguments.
///
/// Every flag is optional; a bare invocation lints `<executable dir>/../config`.
#[derive(Parser, Debug, Clone)]
#[command(name = "json5lint")]
#[command(about = "Validate the JSON5 configuration files of a project")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Configuration directory to scan (default: ../config next to the executable)
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// File extension to validate, without the dot (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub lint_config: LintConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> LintResult<Self> {
        let lint_config = Self::create_lint_config(&args)?;

        Ok(Self { args, lint_config })
    }

    /// Create lint configuration from CLI arguments
    fn create_lint_config(args: &Args) -> LintResult<LintConfig> {
        let base = match &args.config_dir {
            Some(dir) => LintConfig::new(dir.clone()),
            None => LintConfig::from_executable()?,
        };

        let config = base
            .with_extensions(args.extensions.clone())
            .with_color(!args.no_color && CliUtils::should_use_color());

        config.validate().map_err(LintError::configuration)?;

        Ok(config)
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        console::user_attended() && std::env::var_os("NO_COLOR").is_none()
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(verbose: bool) -> &'static str {
        if verbose {
            "json5lint=debug"
        } else {
            "json5lint=warn"
        }
    }
}

/// Handle CLI errors with user-friendly messages.
///
/// Fatal messages go to stdout next to the report; write failures are
/// ignored since stdout may be the thing that broke.
pub fn handle_error(error: &anyhow::Error) {
    write_error(&mut std::io::stdout(), error);
}

fn write_error<W: Write>(out: &mut W, error: &anyhow::Error) {
    let message = match error.downcast_ref::<LintError>() {
        Some(lint_err) => lint_err.user_message(),
        None => format!("Error: {:#}", error),
    };
    let _ = writeln!(out, "{}", message);

    if matches!(
        error.downcast_ref::<LintError>(),
        Some(LintError::Configuration { .. })
    ) {
        let _ = writeln!(out, "\nTry 'json5lint --help' for usage information.");
    }
    let _ = out.flush();
}
