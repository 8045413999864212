//! # cmake-starter CLI Entry Point
//!
//! Parses arguments with clap, resolves the user configuration and hands
//! off to [`cmake_starter::scaffold::Scaffold`].

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use cmake_starter::config::{self, StarterConfig};
use cmake_starter::scaffold::Scaffold;

#[derive(Parser)]
#[command(name = "cmake-starter")]
#[command(about = "Create a C++ CMake project from a template", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// The project name
    #[arg(required_unless_present = "completions")]
    project_name: Option<String>,

    /// Specify the gcc version that should be used
    #[arg(long = "gcc-version", value_name = "VERSION")]
    gcc_version: Option<String>,

    /// Config file [default: ~/.cmake-starter/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show what would be done without doing it
    #[arg(long)]
    dry_run: bool,

    /// Show each step and the exact cmake command
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "cmake-starter", &mut std::io::stdout());
        return Ok(());
    }

    let Some(project_name) = cli.project_name.as_deref() else {
        anyhow::bail!("a project name is required");
    };

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = StarterConfig::load(&config_path)?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let scaffold = Scaffold::new(
        project_name,
        config.gcc_version(cli.gcc_version.as_deref()),
        &cwd,
    )
    .with_cmake(config.toolchain.cmake.as_str())
    .with_verbose(cli.verbose);

    if cli.dry_run {
        print_plan(&scaffold);
        return Ok(());
    }

    scaffold.run()?;
    Ok(())
}

fn print_plan(scaffold: &Scaffold) {
    println!("{} {}", "DRY RUN".yellow().bold(), scaffold.names);
    for (i, step) in scaffold.plan().iter().enumerate() {
        println!("  {}. Would {}", i + 1, step);
    }
}
