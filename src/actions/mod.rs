pub mod list_directory;

pub use list_directory::{run_listing, Listing};
