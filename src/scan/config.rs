//! Configuration types for the folder scanner

/// Default maximum subfolder depth to search.
pub const DEFAULT_SEARCH_DEPTH: usize = 99;

/// Configuration for scanning behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum recursion depth. The root is depth 0; a subfolder found while
    /// scanning a folder at depth D is only entered when D < search_depth.
    pub search_depth: usize,
    /// Order subfolders by exact code points instead of ignoring case.
    pub case_sensitive: bool,
}

impl ScanConfig {
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            case_sensitive: false,
        }
    }
}
