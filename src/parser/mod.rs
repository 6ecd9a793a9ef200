//! JSON5 parsing and per-file validation
//!
//! [`validate_file`] is the single place where every failure a file can
//! produce is turned into a value. Syntax problems and read problems end up
//! in different [`Verdict`] variants so the report can label them apart.

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Outcome of validating one file
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Content is well-formed JSON5
    Valid,
    /// Content was read but is not valid JSON5
    SyntaxError(ParseError),
    /// Content could not be read or decoded as UTF-8
    IoError(String),
}

/// Validation result for a single candidate file
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub path: PathBuf,
    pub verdict: Verdict,
}

impl ValidationResult {
    pub fn new(path: PathBuf, verdict: Verdict) -> Self {
        Self { path, verdict }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.verdict, Verdict::Valid)
    }

    /// Human-readable failure description; empty when the file is valid.
    pub fn message(&self) -> String {
        match &self.verdict {
            Verdict::Valid => String::new(),
            Verdict::SyntaxError(err) => format!("JSON5 parsing error: {}", err),
            Verdict::IoError(cause) => format!("Unexpected error: {}", cause),
        }
    }
}

/// Messages `json5` raises when a grammatically valid number does not fit the
/// 64-bit integer it converts to.
const NUMBER_RANGE_ERRORS: &[&str] = &["error parsing integer", "error parsing hex"];

/// Parse JSON5 text into a JSON value.
///
/// Integers outside the `i64` range fail to convert even though the grammar
/// allows them; [`check_json5`] accepts those documents.
pub fn parse_json5(content: &str) -> ParseResult<Value> {
    json5::from_str::<Value>(content).map_err(ParseError::from)
}

/// Check that `content` is well-formed JSON5, regardless of its shape.
///
/// `json5` matches the whole document against the grammar before converting
/// any value, so a number range error means the syntax itself is valid.
pub fn check_json5(content: &str) -> ParseResult<Option<Value>> {
    match parse_json5(content) {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_number_range_error(&err) => Ok(None),
        Err(err) => Err(err),
    }
}

fn is_number_range_error(err: &ParseError) -> bool {
    NUMBER_RANGE_ERRORS.contains(&err.message.as_str())
}

/// Read and parse one file. Never fails: every problem becomes a [`Verdict`].
pub fn validate_file(path: &Path) -> ValidationResult {
    let verdict = match std::fs::read_to_string(path) {
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "failed to read file");
            Verdict::IoError(e.to_string())
        }
        Ok(content) => match check_json5(&content) {
            Ok(value) => {
                let kind = value.as_ref().map_or("wide number", value_kind);
                tracing::debug!(path = %path.display(), kind, "parsed");
                Verdict::Valid
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "parse failed");
                Verdict::SyntaxError(err)
            }
        },
    };

    ValidationResult::new(path.to_path_buf(), verdict)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
