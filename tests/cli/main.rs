use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod classify;
mod extract;
mod init;
mod sync;

const BIN_NAME: &str = "harvest";

pub const USER_CARD: &str = r#"<template>
  <div class="card">
    <h2>Account settings</h2>
    <button>Save changes</button>
    <input placeholder="Search members" />
  </div>
</template>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Captured result of one command run.
pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keeps config discovery from walking above the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Run> {
        let output = self
            .command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {} {:?}", BIN_NAME, args))?;
        Ok(Run {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let run = test.run(&[])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Usage:"));
    assert!(run.stdout.contains("extract"));
    Ok(())
}
