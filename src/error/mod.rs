//! Error types and handling infrastructure for JSON5 linting

use std::fmt;
use std::path::PathBuf;

/// Errors that abort a lint run before or during discovery.
///
/// Problems with individual files are not errors: they are reported through
/// [`crate::parser::Verdict`] so one bad file never stops the scan.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Config directory not found at {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to scan {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl LintError {
    pub fn directory_not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    pub fn discovery(path: PathBuf, message: String) -> Self {
        Self::Discovery { path, message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message,
                path: Some(path),
            } => format!("Error: {} ({})", message, path.display()),
            _ => format!("Error: {}", self),
        }
    }
}

impl From<std::io::Error> for LintError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<walkdir::Error> for LintError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        Self::Discovery { path, message }
    }
}

/// JSON5 parsing errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<json5::Error> for ParseError {
    fn from(err: json5::Error) -> Self {
        match err {
            json5::Error::Message { msg, location } => Self::new(
                condense_diagnostic(&msg),
                location.map(|loc| (loc.line, loc.column)),
            ),
        }
    }
}

/// Reduce a multi-line parser diagnostic to its most useful single line.
///
/// Pest-style reports end with a `= expected ...` note; that note is kept.
/// Otherwise the first non-empty line is used.
fn condense_diagnostic(msg: &str) -> String {
    let lines = || msg.lines().map(str::trim).filter(|l| !l.is_empty());

    if let Some(note) = lines().find_map(|l| l.strip_prefix("= ")) {
        return note.trim().to_string();
    }

    lines()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| "unknown parse error".to_string())
}

/// Result type for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
