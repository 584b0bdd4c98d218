//! Long-format directory listing through the system `ls`.
//!
//! [`run_listing`] spawns `ls -l`, waits for it and hands back everything it
//! printed on stdout and stderr, or an [`ExecutionError`] when it could not be
//! started or exited unsuccessfully.

pub mod actions;
pub mod error;
pub mod executor;

pub use actions::{run_listing, Listing};
pub use error::ExecutionError;
pub use executor::{execute_combined, Invocation};
