//! Configuration for a lint run

use std::path::{Path, PathBuf};

use crate::error::{LintError, LintResult};

/// Name of the configuration directory, a sibling of the executable's directory
pub const CONFIG_DIR_NAME: &str = "config";

/// Extension matched when none is configured
pub const DEFAULT_EXTENSION: &str = "json5";

/// Settings for one lint run
#[derive(Debug, Clone, PartialEq)]
pub struct LintConfig {
    /// Root directory scanned for candidate files
    pub config_dir: PathBuf,
    /// Directory that reported paths are shown relative to
    pub project_root: PathBuf,
    /// File extensions (without the dot) that mark a candidate file
    pub extensions: Vec<String>,
    /// Style the status markers with ANSI colors
    pub color: bool,
}

impl LintConfig {
    /// Create a configuration scanning `config_dir`, reporting paths relative
    /// to its parent.
    pub fn new(config_dir: PathBuf) -> Self {
        let project_root = config_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config_dir.clone());

        Self {
            config_dir,
            project_root,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            color: false,
        }
    }

    /// Default layout: `<executable dir>/../config`.
    ///
    /// Resolved from the running binary, never from the working directory.
    pub fn from_executable() -> LintResult<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            LintError::io(format!("Failed to locate the running executable: {}", e), None)
        })?;
        Self::relative_to_executable(&exe)
    }

    /// Compute the default layout for an executable at `exe`.
    pub fn relative_to_executable(exe: &Path) -> LintResult<Self> {
        let project_root = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| {
                LintError::io(
                    "Executable has no parent directory to resolve the config directory from"
                        .to_string(),
                    Some(exe.to_path_buf()),
                )
            })?;

        Ok(Self::new(project_root.join(CONFIG_DIR_NAME)))
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("At least one file extension is required".to_string());
        }

        for ext in &self.extensions {
            if ext.is_empty() {
                return Err("File extensions must not be empty".to_string());
            }
            if ext.contains(['.', '/', '\\']) {
                return Err(format!(
                    "Invalid extension '{}': give the bare extension, e.g. '{}'",
                    ext, DEFAULT_EXTENSION
                ));
            }
        }

        Ok(())
    }
}
