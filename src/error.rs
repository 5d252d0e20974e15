//! Error types for the manifest and restore engine.
//!
//! Every fallible operation in the library returns [`Result`]. Nothing is
//! recovered locally: errors travel up to the command that started the
//! operation, which aborts.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("malformed manifest {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed replace directive in go.mod: `{line}`")]
    MalformedBuildFile { line: String },

    #[error("another package named '{0}' already exists")]
    DuplicateName(String),

    #[error("invalid dependency name '{0}': must be a single directory name")]
    InvalidName(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    Process {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch '{name}': {reason}")]
    Fetch { name: String, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
