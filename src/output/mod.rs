//! Folder report formatting and display
//!
//! This module renders scanned folder trees in several formats:
//! - Indented formatted text, optionally colored
//! - Comma-separated values with a header row
//! - JSON
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `size` - Byte-size and digit-grouping helpers
//! - `text` - Formatted text lines
//! - `csv` - Comma-separated rows
//! - `json` - JSON output

mod config;
mod csv;
mod json;
mod size;
mod text;

use std::io;
use termcolor::WriteColor;

use crate::scan::FolderRecord;

// Re-export public types and functions
pub use config::{DEFAULT_INDENT, DEFAULT_REPORT_DEPTH, DetailLevel, OutputConfig, OutputFormat};
pub use csv::{CSV_HEADERS, CsvFormatter, quote_field};
pub use json::{JsonFolder, write_json};
pub use size::{AUTO_SCALE_LIMIT, SizeScale, format_bytes, format_decimal, group_digits};
pub use text::TextFormatter;

/// Renders folder trees in the configured output format.
///
/// Call `begin` once before the first tree so formats with a preamble (the CSV
/// header) emit it exactly once, then `render` for each root in order.
pub struct Renderer {
    config: OutputConfig,
}

impl Renderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn begin<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Csv => CsvFormatter::new(self.config.clone()).write_header(out),
            OutputFormat::Text | OutputFormat::Json => Ok(()),
        }
    }

    pub fn render<W: WriteColor>(&self, record: &FolderRecord, out: &mut W) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => TextFormatter::new(self.config.clone()).write(record, out),
            OutputFormat::Csv => CsvFormatter::new(self.config.clone()).write(record, out),
            OutputFormat::Json => write_json(record, self.config.report_depth, out),
        }
    }
}
