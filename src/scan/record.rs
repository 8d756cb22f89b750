//! Aggregated folder records

/// Compute the key a subfolder is ordered by within its parent.
///
/// Case-sensitive ordering uses the name itself. Otherwise the key is the
/// lowercased name followed by a space and the original name, which groups
/// names case-insensitively while still telling `Docs` and `docs` apart.
pub fn sort_key(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        format!("{} {}", name.to_lowercase(), name)
    }
}

/// Totals for one folder, plus the records of the subfolders beneath it.
///
/// "Own" fields count what sits directly in this folder. "Descendant" fields
/// sum everything in all subfolders at any depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderRecord {
    pub name: String,
    pub own_bytes: u64,
    pub own_files: u64,
    pub own_subfolders: u64,
    pub descendant_bytes: u64,
    pub descendant_files: u64,
    pub descendant_subfolders: u64,
    sort_key: String,
    children: Vec<FolderRecord>,
}

impl FolderRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Count one regular file of `len` bytes directly inside this folder.
    pub fn add_file(&mut self, len: u64) {
        self.own_bytes += len;
        self.own_files += 1;
    }

    /// Builder form of repeated `add_file` calls, for fixtures.
    pub fn with_files(mut self, bytes: u64, files: u64) -> Self {
        self.own_bytes += bytes;
        self.own_files += files;
        self
    }

    /// Attach a scanned subfolder, folding its totals into this folder's
    /// descendant totals.
    ///
    /// Every child is counted. Children sharing a sort key (two names that
    /// display the same) keep the order they were added in.
    pub fn add_subfolder(&mut self, mut child: FolderRecord, case_sensitive: bool) {
        let key = sort_key(&child.name, case_sensitive);
        let pos = self
            .children
            .partition_point(|c| c.sort_key.as_str() <= key.as_str());

        self.own_subfolders += 1;
        self.descendant_bytes += child.total_bytes();
        self.descendant_files += child.total_files();
        self.descendant_subfolders += child.total_subfolders();

        child.sort_key = key;
        self.children.insert(pos, child);
    }

    /// Builder form of `add_subfolder` using case-insensitive ordering.
    pub fn with_subfolder(mut self, child: FolderRecord) -> Self {
        self.add_subfolder(child, false);
        self
    }

    /// Subfolders in sort-key order.
    pub fn children(&self) -> &[FolderRecord] {
        &self.children
    }

    pub fn has_subfolders(&self) -> bool {
        self.own_subfolders > 0
    }

    pub fn total_bytes(&self) -> u64 {
        self.own_bytes + self.descendant_bytes
    }

    pub fn total_files(&self) -> u64 {
        self.own_files + self.descendant_files
    }

    pub fn total_subfolders(&self) -> u64 {
        self.own_subfolders + self.descendant_subfolders
    }
}
