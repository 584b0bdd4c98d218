use std::io;
use std::process::ExitStatus;

/// Failure to run an external command to completion.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` failed with status: {status}")]
    Status { program: String, status: ExitStatus },

    #[error("Failed to capture output of `{program}`: {source}")]
    Capture {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ExecutionError {
    /// Exit code of the child, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutionError::Status { status, .. } => status.code(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExecutionError>;
