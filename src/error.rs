use std::path::PathBuf;
use std::process::ExitStatus;

/// Fatal conditions raised while scaffolding a project.
/// None of them are recovered from; the run stops where it failed.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Target directory existed before the clone
    TargetExists(PathBuf),
    /// Clone returned but the target directory is not there
    CloneFailed(PathBuf),
    /// A file the template must ship is absent
    MissingFile(PathBuf),
    /// The template has no `build/` directory
    MissingBuildDir(PathBuf),
    /// The configure tool exited unsuccessfully
    ConfigureFailed(ExitStatus),
    /// IO error
    Io(std::io::Error),
    /// libgit2 error
    Git(git2::Error),
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::TargetExists(path) => write!(
                f,
                "Directory {} already exists, exiting...",
                path.display()
            ),
            ScaffoldError::CloneFailed(path) => write!(
                f,
                "failed to clone cmake template into {}",
                path.display()
            ),
            ScaffoldError::MissingFile(path) => {
                write!(f, "template file not found: {}", path.display())
            }
            ScaffoldError::MissingBuildDir(path) => {
                write!(f, "no build directory at {}", path.display())
            }
            ScaffoldError::ConfigureFailed(status) => {
                write!(f, "CMake configuration failed ({}), exiting...", status)
            }
            ScaffoldError::Io(e) => write!(f, "IO error: {}", e),
            ScaffoldError::Git(e) => write!(f, "git error: {}", e.message()),
        }
    }
}

impl std::error::Error for ScaffoldError {}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

impl From<git2::Error> for ScaffoldError {
    fn from(e: git2::Error) -> Self {
        ScaffoldError::Git(e)
    }
}
