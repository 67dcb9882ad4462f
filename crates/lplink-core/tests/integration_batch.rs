//! Integration test: run the batch over a temp upload tree with one present
//! and one missing derivative, then check files and report.

use lplink_core::batch::{self, BatchOptions, EntryOutcome};
use lplink_core::mapping;
use lplink_core::project::Project;
use std::fs;
use tempfile::tempdir;

const OLD: &str = "https://old.example/lp/";

#[test]
fn present_and_missing_derivatives() {
    let base = tempdir().unwrap();
    let mapping = mapping::from_pairs([
        ("derivative-1", "https://example.com/a"),
        ("derivative-2", "https://example.com/b"),
    ])
    .unwrap();
    let project = Project::new("demo", "xserver-upload", "index.html", OLD, mapping).unwrap();

    let dir1 = base.path().join("xserver-upload").join("derivative-1");
    fs::create_dir_all(&dir1).unwrap();
    let index1 = dir1.join("index.html");
    fs::write(
        &index1,
        format!("<a href=\"{OLD}\">buy</a>\n<p>text</p>\n<a href=\"{OLD}\">again</a>\n"),
    )
    .unwrap();

    let opts = BatchOptions {
        base_dir: base.path().to_path_buf(),
        dry_run: false,
    };
    let mut out = Vec::new();
    let report = batch::run_batch(&project, &opts, &mut out).expect("run_batch");

    assert_eq!(report.total, 2);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].folder, "derivative-1");
    assert_eq!(report.entries[0].outcome, EntryOutcome::Replaced { count: 2 });
    assert_eq!(report.entries[1].folder, "derivative-2");
    assert_eq!(report.entries[1].outcome, EntryOutcome::Missing);
    assert_eq!(report.missing().count(), 1);
    assert_eq!(report.failed().count(), 0);

    let after = fs::read_to_string(&index1).unwrap();
    assert_eq!(after.matches(OLD).count(), 0);
    assert_eq!(after.matches("https://example.com/a").count(), 2);
    assert!(!base
        .path()
        .join("xserver-upload")
        .join("derivative-2")
        .exists());

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("⚠ warning: ").count(), 1);
    assert!(text.contains("derivative-2"));
    assert!(text.contains("Processing: derivative-1/index.html"));
    assert!(text.contains(&format!("  before: {OLD}")));
    assert!(text.contains("  after:  https://example.com/a"));
    assert!(text.contains("✓ index.html: replaced 2 link(s)"));
    assert!(text.contains("Done: replaced 2 link(s) in total"));
    assert!(text.contains("http://localhost:8000/xserver-upload/derivative-2/"));
}

#[test]
fn second_run_finds_nothing_left() {
    let base = tempdir().unwrap();
    let project = Project::new(
        "demo",
        "up",
        "index.html",
        OLD,
        mapping::from_pairs([("d", "https://example.com/d")]).unwrap(),
    )
    .unwrap();
    let dir = base.path().join("up").join("d");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), OLD).unwrap();

    let opts = BatchOptions {
        base_dir: base.path().to_path_buf(),
        dry_run: false,
    };
    let first = batch::run_batch(&project, &opts, &mut std::io::sink()).unwrap();
    let second = batch::run_batch(&project, &opts, &mut std::io::sink()).unwrap();
    assert_eq!(first.total, 1);
    assert_eq!(second.total, 0);
    assert_eq!(
        fs::read_to_string(dir.join("index.html")).unwrap(),
        "https://example.com/d"
    );
}
