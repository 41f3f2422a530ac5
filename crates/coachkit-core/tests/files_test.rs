// ABOUTME: Tests for the file-level fix/format wrappers and batch operation
// ABOUTME: Covers status reporting, output-path resolution, and per-file error capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use coachkit_core::{fix_all_text_files, fix_text_file, format_text_file, FileStatus};
use tempfile::TempDir;

const MISALIGNED: &str = "┌──┬────┐\n│X│YY│\n└──┴────┘\n";
const ALIGNED: &str = "┌──┬────┐\n│X │YY  │\n└──┴────┘\n";
const OVERFLOW: &str = "┌────────┬──┐\n│ThisIsWayTooLongForItsColumn│ok│\n└────────┴──┘\n";

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_fix_file_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", MISALIGNED);

    let report = fix_text_file(&path, None, true).unwrap();

    assert_eq!(report.status, FileStatus::Fixed);
    assert_eq!(report.output_path.as_deref(), Some(path.to_str().unwrap()));
    assert_eq!(fs::read_to_string(&path).unwrap(), ALIGNED);
    assert!(report.message.contains("Fixed 2 issue(s) on 1 line(s)"));
}

#[test]
fn test_fix_file_suffix_output() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", MISALIGNED);

    let report = fix_text_file(&path, None, false).unwrap();

    let fixed_path = dir.path().join("plan_fixed.txt");
    assert_eq!(
        report.output_path.as_deref(),
        Some(fixed_path.to_str().unwrap())
    );
    assert_eq!(fs::read_to_string(&fixed_path).unwrap(), ALIGNED);
    // Input untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), MISALIGNED);
}

#[test]
fn test_fix_file_explicit_output() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", MISALIGNED);
    let target = dir.path().join("out.txt");

    let report = fix_text_file(&path, Some(&target), true).unwrap();
    assert_eq!(report.status, FileStatus::Fixed);
    assert!(target.exists());
}

#[test]
fn test_fix_file_no_changes_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", ALIGNED);

    let report = fix_text_file(&path, None, false).unwrap();

    assert_eq!(report.status, FileStatus::NoChanges);
    assert!(report.output_path.is_none());
    assert_eq!(report.message, "No alignment issues found");
    assert!(!dir.path().join("plan_fixed.txt").exists());
}

#[test]
fn test_fix_file_warnings_only_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", OVERFLOW);

    let report = fix_text_file(&path, None, true).unwrap();

    assert_eq!(report.status, FileStatus::WarningsOnly);
    assert!(report.output_path.is_none());
    assert!(report.message.contains("need manual attention"));
    assert_eq!(fs::read_to_string(&path).unwrap(), OVERFLOW);
}

#[test]
fn test_fix_file_missing_input_errors() {
    let result = fix_text_file(Path::new("/nonexistent/plan.txt"), None, true);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("failed to read"));
}

#[test]
fn test_format_file_no_changes() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", "short prose\n");

    let report = format_text_file(&path, None, true, None).unwrap();

    assert_eq!(report.status, FileStatus::NoChanges);
    assert!(report.output_path.is_none());
    assert_eq!(report.message, "No changes needed");
}

#[test]
fn test_format_file_fixes_and_wraps() {
    let long = "word ".repeat(30);
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", &format!("{MISALIGNED}{long}\n"));

    let report = format_text_file(&path, None, true, Some(40)).unwrap();

    assert_eq!(report.status, FileStatus::Formatted);
    assert!(!report.fixes.is_empty());
    assert!(!report.wraps.is_empty());
    assert!(report.message.contains("table alignment issue(s)"));
    assert!(report.message.contains("long line(s)"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("│X │YY  │"));
    assert!(written
        .split('\n')
        .filter(|l| !coachkit_core::detect::is_table_line(l))
        .all(|l| l.chars().count() <= 40));
}

#[test]
fn test_format_file_suffix_is_formatted() {
    let long = "word ".repeat(30);
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.txt", &format!("{long}\n"));

    let report = format_text_file(&path, None, false, Some(40)).unwrap();
    assert_eq!(
        report.output_path.as_deref(),
        Some(dir.path().join("plan_formatted.txt").to_str().unwrap())
    );
}

#[test]
fn test_batch_processes_matching_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.txt", MISALIGNED);
    write(&dir, "b.txt", ALIGNED);
    write(&dir, "ignored.md", MISALIGNED);

    let reports = fix_all_text_files(dir.path(), "*.txt", true).unwrap();

    assert_eq!(reports.len(), 2);
    let statuses: Vec<FileStatus> = reports.iter().map(|r| r.status).collect();
    assert!(statuses.contains(&FileStatus::Fixed));
    assert!(statuses.contains(&FileStatus::NoChanges));
}

#[test]
fn test_batch_captures_per_file_errors() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.txt", MISALIGNED);
    // Invalid UTF-8 makes the read fail for this file only
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

    let reports = fix_all_text_files(dir.path(), "*.txt", true).unwrap();

    assert_eq!(reports.len(), 2);
    let error_report = reports
        .iter()
        .find(|r| r.status == FileStatus::Error)
        .unwrap();
    assert!(error_report.error.is_some());
    assert!(reports.iter().any(|r| r.status == FileStatus::Fixed));
}

#[test]
fn test_batch_empty_directory() {
    let dir = TempDir::new().unwrap();
    let reports = fix_all_text_files(dir.path(), "*.txt", true).unwrap();
    assert!(reports.is_empty());
}
