use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the game binary and the launcher.
#[derive(Debug, Error)]
pub enum Error {
    /// Unrecognised command-line flag.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// Flag given without a value, or with one that does not parse.
    #[error("invalid value for {flag}: {value:?}")]
    InvalidArgument { flag: String, value: String },

    /// Logger could not be set up (e.g. log file not writable).
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// The selected program could not be started.
    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected program ran but exited unsuccessfully.
    #[error("{} exited with {}", .path.display(), describe_code(.code))]
    ChildFailed { path: PathBuf, code: Option<i32> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Process exit code to report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnknownArgument(_) | Error::InvalidArgument { .. } => 2,
            Error::ChildFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
