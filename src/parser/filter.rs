use std::path::Path;

/// Return true if the path is an existing file whose extension is one of `extensions`
pub fn is_candidate_file(path: &Path, extensions: &[String]) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| extensions.iter().any(|wanted| ext == wanted.as_str()))
}
