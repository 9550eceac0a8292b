use std::path::PathBuf;
use tempfile::TempDir;

/// Write a config file named `name` into `dir` and return its path.
pub(crate) fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
