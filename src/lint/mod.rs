//! Lint run configuration and the report driver

pub mod config;
pub mod report;

pub use config::{LintConfig, CONFIG_DIR_NAME, DEFAULT_EXTENSION};
pub use report::{run, RunOutcome};
