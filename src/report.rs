//! Scan and render a list of root folders in order

use std::io::Write;
use std::path::PathBuf;

use termcolor::WriteColor;
use tracing::info;

use crate::error::{Error, Result};
use crate::output::{OutputConfig, Renderer};
use crate::scan::{FolderScanner, ScanConfig};

/// Scan each root and render it, in the order given.
///
/// Stops at the first root that does not resolve to a folder and returns
/// `Error::NotFound` for it. Output already written for earlier roots is
/// flushed first.
pub fn report_folders<W: WriteColor>(
    roots: &[PathBuf],
    scan_config: &ScanConfig,
    output_config: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    let scanner = FolderScanner::new(scan_config.clone());
    let renderer = Renderer::new(output_config.clone());

    let result = render_roots(roots, &scanner, &renderer, out);
    out.flush()?;
    result
}

fn render_roots<W: WriteColor>(
    roots: &[PathBuf],
    scanner: &FolderScanner,
    renderer: &Renderer,
    out: &mut W,
) -> Result<()> {
    renderer.begin(out)?;
    for root in roots {
        info!(root = %root.display(), "scanning folder");
        let record = scanner.scan(root).ok_or_else(|| Error::NotFound {
            path: root.clone(),
        })?;
        info!(
            root = %root.display(),
            bytes = record.total_bytes(),
            files = record.total_files(),
            subfolders = record.total_subfolders(),
            "scan complete"
        );
        renderer.render(&record, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;
    use crate::output::OutputFormat;
    use crate::test_utils::TestTree;

    fn run(roots: &[PathBuf], output_config: &OutputConfig) -> (Result<()>, String) {
        let mut out = NoColor::new(Vec::new());
        let result = report_folders(roots, &ScanConfig::default(), output_config, &mut out);
        (result, String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn test_reports_scenario_tree() {
        let tree = TestTree::new();
        tree.add_file("T/a.bin", 400);
        tree.add_file("T/b.bin", 300);
        tree.add_file("T/c.bin", 200);
        tree.add_file("T/d.bin", 50);
        tree.add_file("T/e.bin", 50);
        tree.add_file("T/S/f.bin", 1000);
        tree.add_file("T/S/g.bin", 1000);

        let (result, output) = run(&[tree.path().join("T")], &OutputConfig::default());
        assert!(result.is_ok());
        assert_eq!(
            output,
            "T = 2.9 KB in 7 files and 1 subfolders.\n  S = 2.0 KB in 2 files.\n"
        );
    }

    #[test]
    fn test_missing_root_stops_after_earlier_output() {
        let tree = TestTree::new();
        tree.add_dir("first");
        let roots = [
            tree.path().join("first"),
            tree.path().join("missing"),
            tree.path().join("first"),
        ];

        let (result, output) = run(&roots, &OutputConfig::default());
        match result {
            Err(Error::NotFound { path }) => assert_eq!(path, roots[1]),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(output, "first = 0.0 KB in 0 files.\n");
    }

    #[test]
    fn test_csv_header_precedes_all_roots() {
        let tree = TestTree::new();
        tree.add_file("one/x.bin", 10);
        tree.add_file("two/y.bin", 20);
        let roots = [tree.path().join("one"), tree.path().join("two")];
        let config = OutputConfig::default().with_format(OutputFormat::Csv);

        let (result, output) = run(&roots, &config);
        assert!(result.is_ok());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Folder Name\""));
        assert_eq!(lines[1], "\"one\",10,1,0,0,0,0,10,1,0");
        assert_eq!(lines[2], "\"two\",20,1,0,0,0,0,20,1,0");
    }
}
