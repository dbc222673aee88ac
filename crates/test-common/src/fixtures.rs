//! On-disk fixtures for tests that exercise config loading and control file writing.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Writes a control config file with the given default architecture and returns its path.
///
/// # Example
/// ```rust
/// let temp_dir = TempDir::new().unwrap();
/// let config_path = create_config_file(&temp_dir, "arm64");
/// ```
#[must_use]
pub fn create_config_file(dir: &TempDir, default_architecture: &str) -> PathBuf {
    let content = format!("default_architecture: \"{default_architecture}\"\n");

    let file_path = dir.path().join("debpkg.yaml");
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Creates the `DEBIAN` directory a control file lives in and returns the control file path.
#[must_use]
pub fn create_control_dir(dir: &TempDir) -> PathBuf {
    let control_dir = dir.path().join("DEBIAN");
    fs::create_dir_all(&control_dir).unwrap();
    control_dir.join("control")
}
