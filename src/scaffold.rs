//! Project scaffolding pipeline.
//!
//! Six steps run in a fixed order, each moving the run one [`Stage`] forward:
//!
//! ```text
//! Start -> TemplateCloned -> NamesSubstituted -> HistoryStripped
//!       -> BuildVerified -> HistoryReinitialized -> Done
//! ```
//!
//! There is no going back. Any failure stops the run and everything created
//! so far stays on disk.

use crate::error::ScaffoldError;
use crate::names::ProjectNames;
use crate::template::{self, PLACEHOLDER, TEMPLATE_URL};
use crate::toolchain::GccToolchain;
use crate::verify::ConfigureCommand;
use colored::*;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    TemplateCloned,
    NamesSubstituted,
    HistoryStripped,
    BuildVerified,
    HistoryReinitialized,
    Done,
}

impl Stage {
    /// The stage that follows this one. `Done` is terminal.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Start => Some(Stage::TemplateCloned),
            Stage::TemplateCloned => Some(Stage::NamesSubstituted),
            Stage::NamesSubstituted => Some(Stage::HistoryStripped),
            Stage::HistoryStripped => Some(Stage::BuildVerified),
            Stage::BuildVerified => Some(Stage::HistoryReinitialized),
            Stage::HistoryReinitialized => Some(Stage::Done),
            Stage::Done => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Start => "start",
            Stage::TemplateCloned => "template cloned",
            Stage::NamesSubstituted => "names substituted",
            Stage::HistoryStripped => "history stripped",
            Stage::BuildVerified => "build verified",
            Stage::HistoryReinitialized => "history reinitialized",
            Stage::Done => "done",
        };
        f.write_str(label)
    }
}

/// A failure together with the stage the run had reached
#[derive(Debug)]
pub struct StageError {
    pub reached: Stage,
    pub source: ScaffoldError,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FAILURE: {}", self.source)
    }
}

impl std::error::Error for StageError {}

/// Resolved inputs for one run
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub names: ProjectNames,
    pub toolchain: GccToolchain,
    /// Directory the project is created in
    pub base_dir: PathBuf,
    pub template_url: String,
    /// Configure tool program
    pub cmake: String,
    pub verbose: bool,
}

impl Scaffold {
    pub fn new(project_name: &str, gcc_version: Option<&str>, base_dir: &Path) -> Self {
        Self {
            names: ProjectNames::new(project_name),
            toolchain: GccToolchain::new(gcc_version),
            base_dir: base_dir.to_path_buf(),
            template_url: TEMPLATE_URL.to_string(),
            cmake: "cmake".to_string(),
            verbose: false,
        }
    }

    pub fn with_cmake(mut self, cmake: impl Into<String>) -> Self {
        self.cmake = cmake.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// `<base_dir>/<kebab name>`
    pub fn repo_dir(&self) -> PathBuf {
        self.base_dir.join(&self.names.kebab)
    }

    pub fn configure_command(&self) -> ConfigureCommand {
        ConfigureCommand::new(&self.cmake, &self.repo_dir(), &self.toolchain)
    }

    /// Describe what [`Scaffold::run`] would do, without touching anything.
    pub fn plan(&self) -> Vec<String> {
        let repo_dir = self.repo_dir();
        let mut steps = vec![
            format!("clone {} into {}", self.template_url, repo_dir.display()),
        ];
        for file in template::patched_files(&repo_dir) {
            steps.push(format!(
                "replace {} with {} in {}",
                PLACEHOLDER,
                self.names.cmake_ident,
                file.display()
            ));
        }
        steps.push(format!(
            "remove {}",
            repo_dir.join(template::HISTORY_DIR).display()
        ));
        let configure = self.configure_command();
        steps.push(format!(
            "run `{}` in {}",
            configure.display_line(),
            configure.cwd.display()
        ));
        steps.push(format!("git init {}", repo_dir.display()));
        steps
    }

    /// Run all six steps. Returns the project directory on success.
    pub fn run(&self) -> Result<PathBuf, StageError> {
        let repo_dir = self.repo_dir();
        let mut stage = Stage::Start;
        while let Some(next) = stage.next() {
            self.step(next, &repo_dir).map_err(|source| StageError {
                reached: stage,
                source,
            })?;
            stage = next;
            if self.verbose {
                println!("   {} {}", "→".dimmed(), stage.to_string().dimmed());
            }
        }
        Ok(repo_dir)
    }

    /// Perform the work that moves the run into `target`.
    fn step(&self, target: Stage, repo_dir: &Path) -> Result<(), ScaffoldError> {
        match target {
            Stage::Start => Ok(()),
            Stage::TemplateCloned => {
                println!("Getting template from {}...", self.template_url);
                template::clone_template(&self.template_url, repo_dir)
            }
            Stage::NamesSubstituted => {
                println!("Configuring project for CMake...");
                println!("{}", "-".repeat(94));
                for file in template::patched_files(repo_dir) {
                    let count = template::substitute_placeholder(
                        &file,
                        PLACEHOLDER,
                        &self.names.cmake_ident,
                    )?;
                    if count == 0 {
                        println!(
                            "{} No {} found in {}",
                            "!".yellow(),
                            PLACEHOLDER,
                            file.display()
                        );
                    }
                }
                Ok(())
            }
            Stage::HistoryStripped => template::strip_history(repo_dir).map(|_| ()),
            Stage::BuildVerified => {
                let configure = self.configure_command();
                if self.verbose {
                    println!("   {} {}", "$".dimmed(), configure.display_line());
                }
                configure.run()
            }
            Stage::HistoryReinitialized => template::init_history(repo_dir),
            Stage::Done => {
                println!("{}", "-".repeat(92));
                println!(
                    "{} Project created at {}",
                    "Success!".green().bold(),
                    repo_dir.display()
                );
                Ok(())
            }
        }
    }
}
