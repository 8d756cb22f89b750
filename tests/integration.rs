//! Integration tests for foldersize


use harness::{TestTree, run_foldersize, scenario_tree};

#[test]
fn test_scenario_output() {
    let tree = scenario_tree();
    let (stdout, _stderr, success) = run_foldersize(tree.path(), &["T"]);
    assert!(success, "foldersize should succeed");
    assert_eq!(
        stdout,
        "T = 2.9 KB in 7 files and 1 subfolders.\n  S = 2.0 KB in 2 files.\n"
    );
}

#[test]
fn test_detail_levels() {
    let tree = scenario_tree();

    let (stdout, _, success) = run_foldersize(tree.path(), &["-m0", "T"]);
    assert!(success);
    assert!(
        stdout.starts_with("T = 1.0 KB in 5 files with 1 subfolders.\n"),
        "unexpected -m0 output: {}",
        stdout
    );

    let (stdout, _, success) = run_foldersize(tree.path(), &["-m2", "T"]);
    assert!(success);
    assert!(
        stdout.starts_with("T = 1.0 KB in 5 files + 2.0 KB in 1 subfolders.\n"),
        "unexpected -m2 output: {}",
        stdout
    );
}

#[test]
fn test_report_depth_zero_shows_root_only() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["-r0", "T"]);
    assert!(success);
    assert_eq!(stdout, "T = 2.9 KB in 7 files and 1 subfolders.\n");
}

#[test]
fn test_search_depth_zero_ignores_subfolders() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["-s0", "T"]);
    assert!(success);
    assert_eq!(stdout, "T = 1.0 KB in 5 files.\n");
}

#[test]
fn test_indent_option() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["-i4", "T"]);
    assert!(success);
    assert!(stdout.contains("\n    S = 2.0 KB in 2 files.\n"), "{}", stdout);
}

#[test]
fn test_forced_units() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["-u", "b", "T"]);
    assert!(success);
    assert!(
        stdout.starts_with("T = 3,000 bytes in 7 files and 1 subfolders.\n"),
        "{}",
        stdout
    );
}

#[test]
fn test_csv_output() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["-v", "T"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\"Folder Name\",\"Folder Bytes\""));
    assert_eq!(lines[1], "\"T\",1000,5,1,2000,2,0,3000,7,1");
    assert_eq!(lines[2], "\"  S\",2000,2,0,0,0,0,2000,2,0");
}

#[test]
fn test_json_output() {
    let tree = scenario_tree();
    let (stdout, _, success) = run_foldersize(tree.path(), &["--json", "T"]);
    assert!(success);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["name"], "T");
    assert_eq!(json["total_bytes"], 3000);
    assert_eq!(json["children"][0]["name"], "S");
}

#[test]
fn test_multiple_roots_in_given_order() {
    let tree = TestTree::new();
    tree.add_file("zeta/a.bin", 10);
    tree.add_file("alpha/b.bin", 10);

    let (stdout, _, success) = run_foldersize(tree.path(), &["zeta", "alpha"]);
    assert!(success);
    let names: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(" = ").next().unwrap())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn test_subfolder_order_by_case_option() {
    let tree = TestTree::new();
    tree.add_dir("root/B");
    tree.add_dir("root/a");

    let (stdout, _, success) = run_foldersize(tree.path(), &["root"]);
    assert!(success);
    let a = stdout.find("  a = ").expect("a listed");
    let b = stdout.find("  B = ").expect("B listed");
    assert!(a < b, "case-insensitive order should put a first: {}", stdout);

    let (stdout, _, success) = run_foldersize(tree.path(), &["-c", "root"]);
    assert!(success);
    let a = stdout.find("  a = ").expect("a listed");
    let b = stdout.find("  B = ").expect("B listed");
    assert!(b < a, "case-sensitive order should put B first: {}", stdout);
}

#[test]
fn test_missing_folder_fails_after_earlier_output() {
    let tree = scenario_tree();
    let (stdout, stderr, success) = run_foldersize(tree.path(), &["T", "nope", "T"]);
    assert!(!success, "missing folder should fail");
    assert!(
        stderr.contains("Folder does not exist: nope"),
        "stderr: {}",
        stderr
    );
    // The first root was reported, the third never reached
    assert_eq!(stdout.matches("T = ").count(), 1);
}
