//! Runs an external program to completion and captures its combined output.
//!
//! Standard output and standard error of the child are both attached to the
//! write end of a single pipe, so the captured bytes keep the order in which
//! the operating system delivered the writes.

use std::ffi::OsString;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::error::{ExecutionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    // Also governs how `program` is resolved on Unix.
    pub search_path: Option<OsString>,
}

impl Invocation {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            search_path: None,
        }
    }

    pub fn search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }
}

/// Spawns `invocation`, blocks until it exits and returns everything it wrote
/// to stdout and stderr as text.
///
/// Output is discarded when the program cannot be started or exits with a
/// non-zero status. Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn execute_combined(invocation: &Invocation) -> Result<String> {
    let program = invocation.program.as_str();
    let capture_error = |source| ExecutionError::Capture {
        program: program.to_string(),
        source,
    };

    debug!(program = %program, args = ?invocation.args, "Spawning command");

    let (mut reader, writer) = io::pipe().map_err(capture_error)?;
    let stderr_writer = writer.try_clone().map_err(capture_error)?;

    let mut command = Command::new(program);
    command
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer);
    if let Some(path) = &invocation.search_path {
        command.env("PATH", path);
    }
    let spawned = command.spawn();
    // The builder still owns the parent's copies of the write end; the reader
    // only sees EOF once they are closed.
    drop(command);

    let mut child = spawned.map_err(|source| {
        warn!(program = %program, error = %source, "Failed to start command");
        ExecutionError::Spawn {
            program: program.to_string(),
            source,
        }
    })?;

    // Drain before waiting so a child filling the pipe buffer cannot block.
    let mut combined = Vec::new();
    let read = reader.read_to_end(&mut combined);
    let status = child.wait().map_err(capture_error)?;
    read.map_err(capture_error)?;

    debug!(
        program = %program,
        bytes = combined.len(),
        status = %status,
        "Command finished"
    );

    if !status.success() {
        warn!(program = %program, status = %status, "Command failed");
        return Err(ExecutionError::Status {
            program: program.to_string(),
            status,
        });
    }

    Ok(String::from_utf8_lossy(&combined).into_owned())
}
