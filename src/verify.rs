//! CMake configure check.
//!
//! Runs `cmake -DCMAKE_C_COMPILER=.. -DCMAKE_CXX_COMPILER=.. ..` inside the
//! template's `build/` directory. Only configuration is run, never a build.
//! There is no timeout; a hanging cmake hangs the run.

use crate::error::ScaffoldError;
use crate::toolchain::GccToolchain;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory inside the template that CMake is configured from
pub const BUILD_DIR: &str = "build";

/// A ready-to-run configure invocation
#[derive(Debug, Clone)]
pub struct ConfigureCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ConfigureCommand {
    pub fn new(cmake: &str, repo_dir: &Path, toolchain: &GccToolchain) -> Self {
        let mut args: Vec<String> = toolchain.cmake_defines().into();
        args.push("..".to_string());
        Self {
            program: cmake.to_string(),
            args,
            cwd: repo_dir.join(BUILD_DIR),
        }
    }

    /// The command as a single shell-like line, for display
    pub fn display_line(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }

    /// Run the configure step. Output goes straight to the terminal.
    pub fn run(&self) -> Result<(), ScaffoldError> {
        if !self.cwd.is_dir() {
            return Err(ScaffoldError::MissingBuildDir(self.cwd.clone()));
        }

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .status()?;

        if !status.success() {
            return Err(ScaffoldError::ConfigureFailed(status));
        }
        Ok(())
    }
}
