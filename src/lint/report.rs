//! Report driver: discover, validate each file in order, print, summarize

use console::style;
use std::io::Write;
use std::path::Path;

use crate::cli::path_mapping::display_path;
use crate::error::LintResult;
use crate::lint::config::LintConfig;
use crate::parser::directory::find_candidate_files;
use crate::parser::{validate_file, ValidationResult};

/// Aggregate result of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub files_checked: usize,
    pub files_failed: usize,
}

impl RunOutcome {
    pub fn record(&mut self, result: &ValidationResult) {
        self.files_checked += 1;
        if !result.is_valid() {
            self.files_failed += 1;
        }
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Process exit code: 0 when nothing failed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

/// Lint every candidate file under `config.config_dir`, writing the report to `out`.
///
/// Returns `Err` only when the run cannot start (missing root, traversal
/// failure, broken output). Invalid files are counted in the outcome.
pub fn run<W: Write>(config: &LintConfig, out: &mut W) -> LintResult<RunOutcome> {
    let mut files = find_candidate_files(&config.config_dir, &config.extensions)?;

    if files.is_empty() {
        writeln!(out, "No JSON5 files found in config directory")?;
        return Ok(RunOutcome::default());
    }

    files.sort();
    writeln!(out, "Found {} JSON5 file(s) to validate\n", files.len())?;

    let mut outcome = RunOutcome::default();
    for file in &files {
        let result = validate_file(file);
        let shown = display_path(&config.project_root, file);
        write_result(out, &shown, &result, config.color)?;
        outcome.record(&result);
    }

    write_summary(out, &outcome, config.color)?;
    Ok(outcome)
}

fn write_result<W: Write>(
    out: &mut W,
    shown: &Path,
    result: &ValidationResult,
    color: bool,
) -> LintResult<()> {
    if result.is_valid() {
        writeln!(out, "{} {}", style("✓").green().force_styling(color), shown.display())?;
    } else {
        tracing::warn!(path = %shown.display(), "file failed validation");
        writeln!(out, "{} {}", style("✗").red().force_styling(color), shown.display())?;
        writeln!(out, "  {}\n", result.message())?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, outcome: &RunOutcome, color: bool) -> LintResult<()> {
    if outcome.has_failures() {
        let line = "❌ JSON5 linting failed - please fix the errors above";
        writeln!(out, "\n{}", style(line).red().bold().force_styling(color))?;
    } else {
        let line = format!("✅ All {} JSON5 files are valid!", outcome.files_checked);
        writeln!(out, "\n{}", style(line).green().force_styling(color))?;
    }
    Ok(())
}
