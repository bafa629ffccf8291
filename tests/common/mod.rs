//! Shared testing utilities for promptforge CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated data directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        Self { root, data_dir }
    }

    /// Scratch directory for input files.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Value of `PROMPTFORGE_HOME` for every invocation.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Build a command for invoking the compiled `promptforge` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("promptforge").expect("Failed to locate promptforge binary");
        cmd.current_dir(self.work_dir())
            .env("PROMPTFORGE_HOME", self.data_dir())
            .env("HOME", self.work_dir())
            .env_remove("PROMPTFORGE_LOG");
        cmd
    }

    /// Write a file in the scratch directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data directory");
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Raw JSON stored under a collection key, if any.
    pub fn stored(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.data_dir.join(format!("{}.json", key))).ok()
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).output().expect("Failed to run promptforge");
        assert!(output.status.success(), "command {:?} failed: {:?}", args, output);
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }

    /// Ids printed in the first column of `history list`.
    pub fn history_ids(&self) -> Vec<String> {
        self.stdout_of(&["history", "list"])
            .lines()
            .filter(|line| !line.starts_with("No history"))
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    /// Id of the user template printed by `template save`, `duplicate` or `import`.
    pub fn saved_template_id(stdout: &str) -> String {
        stdout
            .split_whitespace()
            .find(|word| word.starts_with("custom-"))
            .expect("no template id in output")
            .to_string()
    }
}
