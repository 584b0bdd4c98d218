use std::ffi::OsString;
use tracing::info;

use crate::error::Result;
use crate::executor::{execute_combined, Invocation};

pub const LIST_PROGRAM: &str = "ls";
pub const LONG_FORMAT_FLAG: &str = "-l";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    invocation: Invocation,
}

impl Listing {
    pub fn new() -> Self {
        Listing {
            invocation: Invocation::new(LIST_PROGRAM, [LONG_FORMAT_FLAG]),
        }
    }

    pub fn with_command<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Listing {
            invocation: Invocation::new(program, args),
        }
    }

    pub fn search_path(mut self, path: impl Into<OsString>) -> Self {
        self.invocation = self.invocation.search_path(path);
        self
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn run(&self) -> Result<String> {
        info!(program = %self.invocation.program, "Listing directory");
        execute_combined(&self.invocation)
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `ls -l` and returns its combined stdout and stderr.
pub fn run_listing() -> Result<String> {
    Listing::new().run()
}
