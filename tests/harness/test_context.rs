//! Shared testing harness for `pkgprobe` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Token exported to the binary by [`TestContext::cli`].
pub(crate) const TEST_TOKEN: &str = "test-token";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the `pkgprobe` binary with `GITHUB_TOKEN` set.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_token();
        cmd.env("GITHUB_TOKEN", TEST_TOKEN);
        cmd
    }

    /// Build a command for the `pkgprobe` binary with no credential in the environment.
    pub(crate) fn cli_without_token(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgprobe").expect("Failed to locate pkgprobe binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("GITHUB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `content` to `name` inside the work directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a probe config pointing every endpoint at `urls` (GET, expecting 200).
    pub(crate) fn write_probe_config(&self, api_url: &str, urls: &[&str]) -> PathBuf {
        let mut content = format!("timeout_ms = 2000\napi_url = \"{}\"\n", api_url);
        for url in urls {
            content.push_str(&format!("\n[[endpoint]]\nurl = \"{}\"\n", url));
        }
        self.write_file("probe.toml", &content)
    }
}
