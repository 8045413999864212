//! The CMake project template.
//!
//! Every project starts from the same remote repository. After cloning, the
//! placeholder token is replaced in the files listed by [`patched_files`],
//! the template's own `.git/` is removed and a fresh, empty repository is
//! initialized in its place.

use crate::error::ScaffoldError;
use colored::*;
use git2::Repository;
use git2::build::RepoBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Remote repository every project is cloned from
pub const TEMPLATE_URL: &str = "https://github.com/sndrummer/cmake_cpp_basic_template.git";

/// Token in the template files that receives the CMake identifier
pub const PLACEHOLDER: &str = "@PROJECT_NAME@";

/// Version-control metadata directory
pub const HISTORY_DIR: &str = ".git";

/// Files rewritten after cloning, relative to the project root
pub fn patched_files(repo_dir: &Path) -> [PathBuf; 2] {
    [
        repo_dir.join("CMakeLists.txt"),
        repo_dir.join(".vscode").join("launch.json"),
    ]
}

/// Clone `url` into `dest`.
///
/// `dest` must not exist beforehand. The check is not atomic with the clone.
pub fn clone_template(url: &str, dest: &Path) -> Result<(), ScaffoldError> {
    if dest.is_dir() {
        return Err(ScaffoldError::TargetExists(dest.to_path_buf()));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""]),
    );
    pb.set_message("Receiving objects");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut callbacks = git2::RemoteCallbacks::new();
    let progress = pb.clone();
    callbacks.transfer_progress(move |stats| {
        progress.set_length(stats.total_objects() as u64);
        progress.set_position(stats.received_objects() as u64);
        true
    });

    let mut fetch = git2::FetchOptions::new();
    fetch.remote_callbacks(callbacks);

    // The handle is dropped right away so `.git/` can be removed later.
    match RepoBuilder::new().fetch_options(fetch).clone(url, dest) {
        Ok(_) => {
            pb.finish_and_clear();
            println!("{} Cloned template", "✓".green());
        }
        Err(e) => {
            pb.finish_and_clear();
            println!("{} Failed to clone template", "x".red());
            return Err(e.into());
        }
    }

    if !dest.is_dir() {
        return Err(ScaffoldError::CloneFailed(dest.to_path_buf()));
    }
    Ok(())
}

/// Replace every literal occurrence of `placeholder` in `path` with `value`
/// and write the file back. Returns how many occurrences were replaced.
///
/// Zero matches is not an error; the file is rewritten unchanged.
pub fn substitute_placeholder(
    path: &Path,
    placeholder: &str,
    value: &str,
) -> Result<usize, ScaffoldError> {
    if !path.is_file() {
        return Err(ScaffoldError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let count = content.matches(placeholder).count();
    fs::write(path, content.replace(placeholder, value))?;
    Ok(count)
}

/// Recursively delete the template's `.git/`. Returns whether anything was removed.
pub fn strip_history(repo_dir: &Path) -> Result<bool, ScaffoldError> {
    let git_dir = repo_dir.join(HISTORY_DIR);
    if !git_dir.is_dir() {
        return Ok(false);
    }
    fs::remove_dir_all(&git_dir)?;
    Ok(true)
}

/// Initialize an empty repository at `repo_dir`. No commit is created.
pub fn init_history(repo_dir: &Path) -> Result<(), ScaffoldError> {
    Repository::init(repo_dir)?;
    Ok(())
}
