use std::fmt;
use std::path::PathBuf;

/// Error type for scaffold operations.
///
/// Nothing in the pipeline catches or retries: the first failure propagates
/// to `main`, which prints it and exits non-zero. A failed run leaves the
/// partially scaffolded directory on disk.
#[derive(Debug)]
pub enum ScaffoldError {
    /// An interactive prompt could not be read.
    Prompt(dialoguer::Error),
    /// The folder name normalized to an empty project name.
    InvalidProjectName(String),
    /// The requested package manager is not one of npm/yarn/pnpm/bun.
    UnknownPackageManager(String),
    /// The target project directory already exists.
    DirectoryExists(PathBuf),
    /// The target project directory could not be created.
    DirectoryCreate { path: PathBuf, source: std::io::Error },
    /// An external command could not be started, usually because the
    /// executable is not installed.
    CommandLaunch { command: String, source: std::io::Error },
    /// An external command exited with a non-zero status.
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
    /// package.json was missing or not the shape the scaffold expects.
    Manifest { path: PathBuf, detail: String },
    /// Any other filesystem error.
    Io(std::io::Error),
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::Prompt(e) => write!(f, "Prompt failed: {e}"),
            ScaffoldError::InvalidProjectName(raw) => {
                write!(f, "Folder name '{raw}' normalizes to an empty project name")
            }
            ScaffoldError::UnknownPackageManager(name) => {
                write!(
                    f,
                    "Unknown package manager '{name}'. Available: npm, yarn, pnpm, bun"
                )
            }
            ScaffoldError::DirectoryExists(path) => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            ScaffoldError::DirectoryCreate { path, source } => {
                write!(f, "Failed to create directory '{}': {source}", path.display())
            }
            ScaffoldError::CommandLaunch { command, source } => {
                write!(f, "Failed to run `{command}`: {source}")
            }
            ScaffoldError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "`{command}` exited with status {code}")?,
                    None => write!(f, "`{command}` was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, "\n{stderr}")?;
                }
                Ok(())
            }
            ScaffoldError::Manifest { path, detail } => {
                write!(f, "Failed to update '{}': {detail}", path.display())
            }
            ScaffoldError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScaffoldError {}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(e: dialoguer::Error) -> Self {
        ScaffoldError::Prompt(e)
    }
}
