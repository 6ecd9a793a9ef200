use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{LintError, LintResult};
use crate::parser::filter::is_candidate_file;

/// Find candidate files recursively under `dir`.
///
/// A missing or unreadable root is an error; an existing root with no matches
/// is not. Entries below the root that cannot be read are logged and skipped
/// so the rest of the tree is still reported. The returned order is whatever
/// the filesystem yields.
pub fn find_candidate_files(dir: &Path, extensions: &[String]) -> LintResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LintError::directory_not_found(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    path = %err.path().unwrap_or(dir).display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };
        let path = entry.path();
        if is_candidate_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    tracing::info!(dir = %dir.display(), count = files.len(), "discovered candidate files");
    Ok(files)
}
