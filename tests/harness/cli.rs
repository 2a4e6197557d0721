//! TestCli - end-to-end runs of the logidice binary
//!
//! Each instance gets its own temp directory as working directory, so a
//! stray logidice.toml never leaks into a test.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub struct TestCli {
    binary: PathBuf,
    temp_dir: TempDir,
}

impl TestCli {
    pub fn new() -> Result<Self> {
        Ok(Self {
            binary: PathBuf::from(env!("CARGO_BIN_EXE_logidice")),
            temp_dir: TempDir::new()?,
        })
    }

    /// Write a config file into the working directory and return its path
    pub fn write_config(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Run with arguments and no stdin
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {:?}", self.binary))
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<Output> {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn {:?}", self.binary))?;

        child
            .stdin
            .take()
            .context("stdin not captured")?
            .write_all(input.as_bytes())?;

        Ok(child.wait_with_output()?)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, _) in std::env::vars() {
            if key.starts_with(logidice::ENV_PREFIX) {
                cmd.env_remove(key);
            }
        }
        cmd
    }
}

/// Stdout of a run as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
