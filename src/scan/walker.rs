//! FolderScanner - depth-first scan that aggregates totals bottom-up

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::config::ScanConfig;
use super::record::FolderRecord;

/// Scanner that builds a `FolderRecord` tree for one root at a time.
///
/// Filesystem irregularities never abort a scan: unreadable folders count as
/// empty, entries whose metadata cannot be read are skipped, and subfolders
/// beyond the search depth are left out entirely.
pub struct FolderScanner {
    config: ScanConfig,
}

impl FolderScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan the folder at `root`.
    ///
    /// Returns `None` when the path cannot be resolved to an existing
    /// directory. No partial record is produced in that case.
    pub fn scan(&self, root: &Path) -> Option<FolderRecord> {
        let canonical = fs::canonicalize(root).ok()?;
        if !canonical.is_dir() {
            return None;
        }
        let mut ancestors = Vec::new();
        Some(self.scan_dir(canonical, 0, &mut ancestors))
    }

    fn scan_dir(
        &self,
        canonical: PathBuf,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
    ) -> FolderRecord {
        let mut record = FolderRecord::new(folder_name(&canonical));
        let entries = read_entries(&canonical);
        ancestors.push(canonical);

        // Canonical paths of subfolders already counted in this folder
        let mut visited = HashSet::new();

        for entry in entries {
            let entry_path = entry.path();
            // Follows symlinks, so a link to a folder counts as a folder
            let Ok(meta) = fs::metadata(&entry_path) else {
                continue;
            };

            if meta.is_dir() {
                if depth >= self.config.search_depth {
                    continue;
                }
                let Ok(sub_path) = fs::canonicalize(&entry_path) else {
                    continue;
                };
                if ancestors.contains(&sub_path) {
                    debug!(
                        path = %entry_path.display(),
                        "skipping folder that loops back to an ancestor"
                    );
                    continue;
                }
                if !visited.insert(sub_path.clone()) {
                    debug!(
                        path = %entry_path.display(),
                        target = %sub_path.display(),
                        "skipping second link to an already counted folder"
                    );
                    continue;
                }
                let sub = self.scan_dir(sub_path, depth + 1, ancestors);
                record.add_subfolder(sub, self.config.case_sensitive);
            } else if meta.is_file() {
                record.add_file(meta.len());
            }
        }

        ancestors.pop();
        trace!(
            name = %record.name,
            depth,
            bytes = record.own_bytes,
            files = record.own_files,
            subfolders = record.own_subfolders,
            "scanned folder"
        );
        record
    }
}

/// Display name for a canonical folder path: its last component, or the whole
/// path for a filesystem root.
fn folder_name(canonical: &Path) -> String {
    canonical
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| canonical.display().to_string())
}

/// Read the entries of a folder, sorted by file name.
/// An unreadable folder yields no entries.
fn read_entries(path: &Path) -> Vec<fs::DirEntry> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "folder listing unavailable");
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());
    entries
}
