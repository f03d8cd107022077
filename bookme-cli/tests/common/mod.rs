//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment with a temporary data directory
//! and command builder helpers.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the bookme data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("bookme-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookme").expect("Failed to find bookme binary");
        cmd.env_remove("BOOKME_DATA_DIR")
            .env_remove("BOOKME_LOG_MODE")
            .env_remove("BOOKME_CACHE_TTL")
            .env_remove("BOOKME_BUSY_TIMEOUT")
            .env_remove("BOOKME_DISABLE_AUTOINIT");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Add a user and return its id.
    pub fn add_user(&self, name: &str, email: &str) -> String {
        let output = self
            .command()
            .args(["user", "add", "--name", name, "--email", email])
            .output()
            .expect("Failed to run user add");
        assert!(output.status.success(), "user add failed: {output:?}");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Add a room and return its id.
    pub fn add_room(&self, name: &str) -> String {
        let output = self
            .command()
            .args([
                "room", "add", "--name", name, "--capacity", "8", "--location", "HQ",
            ])
            .output()
            .expect("Failed to run room add");
        assert!(output.status.success(), "room add failed: {output:?}");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
