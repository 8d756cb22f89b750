//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::scan::FolderRecord;

/// Serializable view of a folder record, pruned to a report depth.
#[derive(Debug, Serialize)]
pub struct JsonFolder<'a> {
    pub name: &'a str,
    pub own_bytes: u64,
    pub own_files: u64,
    pub own_subfolders: u64,
    pub descendant_bytes: u64,
    pub descendant_files: u64,
    pub descendant_subfolders: u64,
    pub total_bytes: u64,
    pub total_files: u64,
    pub total_subfolders: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonFolder<'a>>,
}

impl<'a> JsonFolder<'a> {
    /// Build the view, keeping subfolders down to `report_depth` levels.
    pub fn new(record: &'a FolderRecord, report_depth: usize) -> Self {
        Self::at_depth(record, 0, report_depth)
    }

    fn at_depth(record: &'a FolderRecord, depth: usize, report_depth: usize) -> Self {
        let children = if depth < report_depth {
            record
                .children()
                .iter()
                .map(|child| Self::at_depth(child, depth + 1, report_depth))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            name: &record.name,
            own_bytes: record.own_bytes,
            own_files: record.own_files,
            own_subfolders: record.own_subfolders,
            descendant_bytes: record.descendant_bytes,
            descendant_files: record.descendant_files,
            descendant_subfolders: record.descendant_subfolders,
            total_bytes: record.total_bytes(),
            total_files: record.total_files(),
            total_subfolders: record.total_subfolders(),
            children,
        }
    }
}

/// Write a folder tree as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(
    record: &FolderRecord,
    report_depth: usize,
    out: &mut W,
) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&JsonFolder::new(record, report_depth))
        .map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
