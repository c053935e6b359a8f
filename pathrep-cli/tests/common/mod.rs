//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment: a temporary directory for
//! scan fixtures and a command builder that strips the `PATHREP_*`
//! variables so the host environment cannot leak into a test's
//! encoding epoch.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with a clean encoding environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathrep").expect("Failed to find pathrep binary");
        cmd.env_remove("PATHREP_ENCODING");
        cmd.env_remove("PATHREP_ESCAPE_POLICY");
        cmd.env_remove("PATHREP_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a small file under the temp directory and return its path.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, b"fixture").expect("Failed to write fixture file");
        path
    }
}
