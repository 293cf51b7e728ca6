//! Loading the export file and filter options.
//!
//! This is the only part of the crate that touches the filesystem.

mod error;
mod loader;

pub use error::InputError;
pub use loader::{load_export, parse_date, parse_exclude_list, read_exclude_file};
