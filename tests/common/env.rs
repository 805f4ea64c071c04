//! Test environment for running the netrecon binary against a temp store.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a netrecon CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated working directory with a record store at `./data`.
///
/// HOME and XDG_CONFIG_HOME point inside the temp dir so no user config
/// leaks into the run.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("data/servers")).expect("Failed to create store");
        std::fs::create_dir_all(root.path().join("data/clusters")).expect("Failed to create store");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_netrecon")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn store_path(&self) -> PathBuf {
        self.path("data")
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_server(&self, id: &str, document: &Value) {
        self.write_file(
            &format!("data/servers/{id}.json"),
            &serde_json::to_string_pretty(document).expect("serialize document"),
        );
    }

    pub fn write_cluster(&self, id: &str, document: &Value) {
        self.write_file(
            &format!("data/clusters/{id}.json"),
            &serde_json::to_string_pretty(document).expect("serialize document"),
        );
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env_remove("RUST_LOG")
            .env_remove("NETRECON_STORE")
            .env_remove("NETRECON_CONCURRENCY")
            .env_remove("NETRECON_TYPES")
            .env_remove("NETRECON_RETURN_ALL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute netrecon");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
