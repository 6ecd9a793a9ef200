use std::path::{Path, PathBuf};

/// Map a discovered file to the path shown in the report.
/// Paths outside `project_root` are shown as they are.
pub fn display_path(project_root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(project_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| file.to_path_buf())
}
