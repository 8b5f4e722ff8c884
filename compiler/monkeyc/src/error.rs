//! Driver errors.

use monkey_eval::EvalError;

/// Everything that makes a `monkey` command exit with status 1.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Reading stdin or writing the terminal failed.
    #[error("I/O error: {0}")]
    Terminal(#[from] std::io::Error),
    /// One line per diagnostic, already located.
    #[error("{}", .diagnostics.join("\n"))]
    Parse { diagnostics: Vec<String> },
    #[error("{location}: ERROR: {error}")]
    Runtime { location: String, error: EvalError },
}

impl DriverError {
    pub(crate) fn from_read(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => DriverError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read { path, source: err },
        }
    }
}
