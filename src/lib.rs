//! JSON5 configuration linter
//!
//! Finds every JSON5 file under a project's configuration directory, parses
//! each one and reports a per-file verdict plus an overall pass/fail outcome.

pub mod cli;
pub mod error;
pub mod lint;
pub mod parser;

// Re-export commonly used types
pub use error::{LintError, LintResult, ParseError};
pub use lint::{run, LintConfig, RunOutcome};
pub use parser::{validate_file, ValidationResult, Verdict};

/// Install the stderr logger. `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
