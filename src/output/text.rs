//! Formatted text output
//!
//! One line per folder, indented by subfolder level:
//!
//! ```text
//! TEMP = 207.3 MB in 24 files and 3 subfolders.
//!   BACKUP = 176.7 MB in 9 files.
//!   DOWNLOAD = 80.9 KB in 8 files.
//!   UPLOAD = 196.6 KB in 2 files.
//! ```

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

use crate::scan::FolderRecord;

use super::config::{DetailLevel, OutputConfig};
use super::size::{format_bytes, group_digits};

/// Formatter for indented folder summaries.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render a folder tree to a string, without colors.
    pub fn format(&self, record: &FolderRecord) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(record, &mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Write a folder tree, one line per reported folder.
    pub fn write<W: WriteColor>(&self, record: &FolderRecord, out: &mut W) -> io::Result<()> {
        self.write_folder(record, out, 0, "")
    }

    fn write_folder<W: WriteColor>(
        &self,
        record: &FolderRecord,
        out: &mut W,
        depth: usize,
        indent: &str,
    ) -> io::Result<()> {
        write!(out, "{}", indent)?;
        if self.config.use_color {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(out, "{}", record.name)?;
        if self.config.use_color {
            out.reset()?;
        }
        writeln!(out, " = {}", self.describe(record))?;

        if record.has_subfolders() && depth < self.config.report_depth {
            let child_indent = format!("{}{}", indent, self.config.indent);
            for child in record.children() {
                self.write_folder(child, out, depth + 1, &child_indent)?;
            }
        }
        Ok(())
    }

    /// Everything after `<name> = ` on a folder's line.
    pub fn describe(&self, record: &FolderRecord) -> String {
        let size = |bytes| format_bytes(bytes, self.config.scale);

        if !record.has_subfolders() {
            return format!(
                "{} in {} files.",
                size(record.own_bytes),
                group_digits(record.own_files)
            );
        }

        match self.config.detail {
            DetailLevel::FolderOnly => format!(
                "{} in {} files with {} subfolders.",
                size(record.own_bytes),
                group_digits(record.own_files),
                group_digits(record.own_subfolders)
            ),
            DetailLevel::WithSubfolders => format!(
                "{} in {} files and {} subfolders.",
                size(record.total_bytes()),
                group_digits(record.total_files()),
                group_digits(record.total_subfolders())
            ),
            DetailLevel::Excessive => format!(
                "{} in {} files + {} in {} subfolders.",
                size(record.own_bytes),
                group_digits(record.own_files),
                size(record.descendant_bytes),
                group_digits(record.total_subfolders())
            ),
        }
    }
}
