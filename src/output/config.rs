//! Output configuration types

use super::size::SizeScale;

/// Default maximum subfolder depth to report.
pub const DEFAULT_REPORT_DEPTH: usize = 9;

/// Default incremental left indent for each subfolder level.
pub const DEFAULT_INDENT: &str = "  ";

/// How much detail a formatted-text line gives for a folder with subfolders.
/// Folders without subfolders always get the short form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailLevel {
    /// Own totals only, plus the count of immediate subfolders
    FolderOnly,
    /// Own totals plus everything beneath
    #[default]
    WithSubfolders,
    /// Own totals and subfolder totals side by side
    Excessive,
}

impl DetailLevel {
    /// Map the numeric `-m` level (0, 1, 2) to a detail level.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => DetailLevel::FolderOnly,
            2 => DetailLevel::Excessive,
            _ => DetailLevel::WithSubfolders,
        }
    }
}

/// Output format for rendered folders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented human-readable lines
    #[default]
    Text,
    /// Raw comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON tree per root
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Maximum subfolder depth to render; the root is depth 0
    pub report_depth: usize,
    /// Appended to the left indent at each subfolder level
    pub indent: String,
    pub detail: DetailLevel,
    pub scale: SizeScale,
    pub format: OutputFormat,
    pub use_color: bool,
}

impl OutputConfig {
    /// Indent unit of `width` spaces.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    pub fn with_report_depth(mut self, depth: usize) -> Self {
        self.report_depth = depth;
        self
    }

    pub fn with_detail(mut self, detail: DetailLevel) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_scale(mut self, scale: SizeScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_depth: DEFAULT_REPORT_DEPTH,
            indent: DEFAULT_INDENT.to_string(),
            detail: DetailLevel::default(),
            scale: SizeScale::default(),
            format: OutputFormat::default(),
            use_color: false,
        }
    }
}
