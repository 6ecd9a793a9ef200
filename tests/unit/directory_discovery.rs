use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use json5lint::parser::directory::find_candidate_files;
use json5lint::LintError;
use tempfile::TempDir;

fn json5() -> Vec<String> {
    vec!["json5".to_string()]
}

#[test]
fn test_find_candidate_files_recursive() {
    let td = TempDir::new().unwrap();
    let deep = td.path().join("sub/deeper");
    fs::create_dir_all(&deep).unwrap();

    let mut fa = File::create(td.path().join("a.json5")).unwrap();
    write!(fa, "{{ name: 'A' }}\n").unwrap();
    let mut fb = File::create(deep.join("b.json5")).unwrap();
    write!(fb, "{{ name: 'B' }}\n").unwrap();
    fs::write(td.path().join("sub/notes.txt"), "not json5").unwrap();
    fs::write(td.path().join("sub/plain.json"), "{}").unwrap();

    let mut files = find_candidate_files(td.path(), &json5()).unwrap();
    files.sort();
    assert_eq!(
        files,
        vec![td.path().join("a.json5"), deep.join("b.json5")]
    );
}

#[test]
fn test_find_candidate_files_multiple_extensions() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("a.json5"), "{}").unwrap();
    fs::write(td.path().join("b.jsonc"), "{}").unwrap();
    fs::write(td.path().join("c.json"), "{}").unwrap();

    let exts = vec!["json5".to_string(), "jsonc".to_string()];
    let files = find_candidate_files(td.path(), &exts).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_zero_matches_is_not_an_error() {
    let td = TempDir::new().unwrap();
    fs::write(td.path().join("readme.md"), "# config").unwrap();

    let files = find_candidate_files(td.path(), &json5()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_missing_root_is_reported() {
    let td = TempDir::new().unwrap();
    let missing = PathBuf::from(td.path()).join("config");

    match find_candidate_files(&missing, &json5()) {
        Err(LintError::DirectoryNotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected DirectoryNotFound, got {:?}", other),
    }
}
