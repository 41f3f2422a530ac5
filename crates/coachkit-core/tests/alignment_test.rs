// ABOUTME: Tests for table detection, grid extraction, and row alignment
// ABOUTME: Covers cascading fixes, mismatch gating, overflow warnings, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use coachkit_core::{detect, fix_alignment, ColumnGrid};

#[test]
fn test_border_line_detection() {
    assert!(detect::is_border_line("┌──┬────┐"));
    assert!(detect::is_border_line("└──┴────┘"));
    assert!(detect::is_border_line("├──┼────┤"));
    assert!(detect::is_border_line("  ╭────╮"));
    // Titled separator rows stay borders as long as rules dominate
    assert!(detect::is_border_line("├── Warm-Up ──────────┤"));
    assert!(!detect::is_border_line(""));
    assert!(!detect::is_border_line("   "));
    assert!(!detect::is_border_line("│ data │"));
    assert!(!detect::is_border_line("plain text"));
    // Starts with a corner but is mostly label: not a border
    assert!(!detect::is_border_line("└ see the notes below for details"));
}

#[test]
fn test_data_line_detection() {
    assert!(detect::is_data_line("│ A │ B │"));
    assert!(detect::is_data_line("  ┃ x ┃  "));
    assert!(!detect::is_data_line("│ unterminated"));
    assert!(!detect::is_data_line("┌──┐"));
    assert!(!detect::is_data_line(""));
}

#[test]
fn test_grid_extraction_offsets() {
    let grid = ColumnGrid::from_border_line("┌──┬────┐");
    assert_eq!(grid.offsets(), &[0, 3, 8]);

    let grid = ColumnGrid::from_border_line("├──┼──┼──┤");
    assert_eq!(grid.offsets(), &[0, 3, 6, 9]);
}

#[test]
fn test_grid_refinement_keeps_fuller_border() {
    let mut grid = ColumnGrid::from_border_line("┌────────┐");
    grid.refine(ColumnGrid::from_border_line("├──┬──┬──┤"));
    assert_eq!(grid.len(), 4);

    // Equal counts keep the first grid seen
    let mut grid = ColumnGrid::from_border_line("┌──┬──┐");
    let first = grid.clone();
    grid.refine(ColumnGrid::from_border_line("┌───┬──┐"));
    assert_eq!(grid, first);
}

#[test]
fn test_fix_misaligned_row() {
    let text = "┌──┬────┐\n│ A│ BB │\n│X│YY│\n└──┴────┘";
    let outcome = fix_alignment(text);

    assert_eq!(
        outcome.text,
        "┌──┬────┐\n│ A│ BB │\n│X │YY  │\n└──┴────┘"
    );
    assert_eq!(outcome.fixes.len(), 1);
    assert_eq!(outcome.fixes[0].line, 3);
    assert_eq!(
        outcome.fixes[0].fixes,
        vec!["col 2: added 1 space(s)", "col 3: added 2 space(s)"]
    );
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_removes_excess_spaces() {
    let text = "┌──┬────┐\n│A   │BB   │\n└──┴────┘";
    let outcome = fix_alignment(text);

    assert_eq!(outcome.text, "┌──┬────┐\n│A │BB  │\n└──┴────┘");
    assert_eq!(outcome.fixes.len(), 1);
    assert_eq!(
        outcome.fixes[0].fixes,
        vec!["col 2: removed 2 space(s)", "col 3: removed 1 space(s)"]
    );
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_column_count_mismatch_leaves_line_untouched() {
    let text = "┌──┬────┐\n│ A │\n└──┴────┘";
    let outcome = fix_alignment(text);

    // The damaged row is byte-identical and carries exactly one warning
    assert!(outcome.text.contains("│ A │"));
    assert!(outcome.fixes.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].line, 2);
    assert_eq!(
        outcome.warnings[0].warnings,
        vec!["column count mismatch: expected 3, got 2"]
    );
}

#[test]
fn test_content_overflow_warns_with_shortfall() {
    let text = "┌────────┬──┐\n│ThisIsWayTooLongForItsColumn│ok│\n└────────┴──┘";
    let outcome = fix_alignment(text);

    // No spaces available to remove: the segment stays and the deficit is
    // reported instead of silently hidden
    assert!(outcome
        .text
        .contains("│ThisIsWayTooLongForItsColumn│ok│"));
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].warnings[0]
        .contains("col 2: content 20 char(s) too long (manual fix needed)"));
}

#[test]
fn test_partial_fix_still_applies_to_other_columns() {
    // Column 2 cannot shrink (no spaces), but column 3 can still be fixed
    let text = "┌───┬───┬───┐\n│abcdef│x │y│\n└───┴───┴───┘";
    let outcome = fix_alignment(text);

    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].warnings[0].contains("too long"));
    assert_eq!(outcome.fixes.len(), 1);
}

#[test]
fn test_sparse_header_aligned_against_fuller_separator() {
    // The top border shows two columns; the separator row reveals three.
    // Rows collected before the fuller grid still align against it.
    let text = concat!(
        "┌───────────┐\n",
        "│ Session   │\n",
        "├───┬───┬───┤\n",
        "│ A │ B │ C │\n",
        "└───┴───┴───┘"
    );
    let outcome = fix_alignment(text);

    // The one-column header row mismatches the refined three-column grid
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].line, 2);
    assert!(outcome.warnings[0].warnings[0].contains("column count mismatch"));
}

#[test]
fn test_non_table_lines_byte_identical() {
    let text = "Session plan for U12.\n\n┌──┬──┐\n│a │b │\n└──┴──┘\n\n  trailing notes   ";
    let outcome = fix_alignment(text);
    assert_eq!(outcome.text, text);
    assert!(outcome.is_clean());
}

#[test]
fn test_idempotence() {
    let text = "┌──┬────┐\n│X│YY│\n└──┴────┘";
    let first = fix_alignment(text);
    assert!(!first.fixes.is_empty());

    let second = fix_alignment(&first.text);
    assert!(second.fixes.is_empty());
    assert!(second.warnings.is_empty());
    assert_eq!(second.text, first.text);
}

#[test]
fn test_multiple_tables_fixed_independently() {
    let text = concat!(
        "┌──┬──┐\n│a│b │\n└──┴──┘\n",
        "between\n",
        "┌────┬────┐\n│cc│dd│\n└────┴────┘"
    );
    let outcome = fix_alignment(text);
    assert_eq!(outcome.fixes.len(), 2);
    assert_eq!(outcome.fixes[0].line, 2);
    assert_eq!(outcome.fixes[1].line, 6);
}

#[test]
fn test_alignment_preserves_line_count() {
    let text = "intro\n┌──┬──┐\n│a│b│\n└──┴──┘\noutro";
    let outcome = fix_alignment(text);
    assert_eq!(
        outcome.text.split('\n').count(),
        text.split('\n').count()
    );
}

#[test]
fn test_content_tokens_unchanged() {
    let text = "┌────┬────┐\n│ax │  by│\n└────┴────┘";
    let outcome = fix_alignment(text);
    let strip = |s: &str| s.replace([' ', '\n'], "");
    assert_eq!(strip(&outcome.text), strip(text));
}
