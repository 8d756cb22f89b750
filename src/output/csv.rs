//! Comma-separated values output
//!
//! Numbers are written raw, without digit grouping, so that separators never
//! collide with the field delimiter.

use std::io::{self, Write};

use crate::scan::FolderRecord;

use super::config::OutputConfig;

const CSV_COMMA: char = ',';
const CSV_QUOTE: char = '"';

/// Column titles, in field order.
pub const CSV_HEADERS: [&str; 10] = [
    "Folder Name",
    "Folder Bytes",
    "Folder Files",
    "Folder Subfolders",
    "Subfolder Bytes",
    "Subfolder Files",
    "Subfolder Folders",
    "Total Bytes",
    "Total Files",
    "Total Subfolders",
];

/// Wrap a field in quotes, doubling any embedded quote.
pub fn quote_field(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push(CSV_QUOTE);
    for ch in input.chars() {
        if ch == CSV_QUOTE {
            quoted.push(CSV_QUOTE);
        }
        quoted.push(ch);
    }
    quoted.push(CSV_QUOTE);
    quoted
}

/// Formatter for one CSV row per reported folder.
pub struct CsvFormatter {
    config: OutputConfig,
}

impl CsvFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the header row. Call once, before any folder rows.
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let header: Vec<String> = CSV_HEADERS.iter().map(|h| quote_field(h)).collect();
        writeln!(out, "{}", header.join(&CSV_COMMA.to_string()))
    }

    /// Write rows for a folder tree, honoring the report depth.
    pub fn write<W: Write>(&self, record: &FolderRecord, out: &mut W) -> io::Result<()> {
        self.write_folder(record, out, 0, "")
    }

    fn write_folder<W: Write>(
        &self,
        record: &FolderRecord,
        out: &mut W,
        depth: usize,
        indent: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", Self::row(record, indent))?;

        if record.has_subfolders() && depth < self.config.report_depth {
            let child_indent = format!("{}{}", indent, self.config.indent);
            for child in record.children() {
                self.write_folder(child, out, depth + 1, &child_indent)?;
            }
        }
        Ok(())
    }

    fn row(record: &FolderRecord, indent: &str) -> String {
        let numbers = [
            record.own_bytes,
            record.own_files,
            record.own_subfolders,
            record.descendant_bytes,
            record.descendant_files,
            record.descendant_subfolders,
            record.total_bytes(),
            record.total_files(),
            record.total_subfolders(),
        ];
        let mut row = quote_field(&format!("{}{}", indent, record.name));
        for n in numbers {
            row.push(CSV_COMMA);
            row.push_str(&n.to_string());
        }
        row
    }
}
