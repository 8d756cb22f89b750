//! foldersize - show the file space used by folders and their subfolders

pub mod error;
pub mod output;
pub mod report;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    DetailLevel, OutputConfig, OutputFormat, Renderer, SizeScale, TextFormatter, format_bytes,
};
pub use report::report_folders;
pub use scan::{FolderRecord, FolderScanner, ScanConfig};
