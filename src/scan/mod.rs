//! Directory scanning
//!
//! This module walks a directory tree depth-first and aggregates the bytes,
//! files and subfolders found beneath each folder into a `FolderRecord` tree.
//!
//! - `config` - scan configuration (search depth, name ordering)
//! - `record` - the aggregated per-folder record
//! - `walker` - the recursive scanner

mod config;
mod record;
mod walker;

pub use config::{DEFAULT_SEARCH_DEPTH, ScanConfig};
pub use record::{FolderRecord, sort_key};
pub use walker::FolderScanner;
