// ABOUTME: Tests for width-budgeted line wrapping
// ABOUTME: Covers defaults, bullet prefixes, table pass-through, and degenerate widths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use coachkit_core::{format_text, wrap_long_lines, DEFAULT_MAX_WIDTH};

fn long_sentence(words: usize) -> String {
    std::iter::repeat("coaching")
        .take(words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_lines_within_budget_untouched() {
    let text = "short line\nanother short line";
    let outcome = wrap_long_lines(text, Some(80));
    assert_eq!(outcome.text, text);
    assert!(outcome.changes.is_empty());
}

#[test]
fn test_default_width_without_tables_is_120() {
    let line = long_sentence(13); // 116 chars, under the default
    let outcome = wrap_long_lines(&line, None);
    assert_eq!(outcome.text, line);
    assert!(outcome.changes.is_empty());

    let line = long_sentence(15); // 134 chars, over the default
    let outcome = wrap_long_lines(&line, None);
    assert!(outcome.changes.len() == 1);
    assert!(outcome
        .text
        .split('\n')
        .all(|l| l.chars().count() <= DEFAULT_MAX_WIDTH));
}

#[test]
fn test_default_width_follows_widest_table() {
    let table = "┌────────────────────────────┬──┐\n│ a                          │b │\n└────────────────────────────┴──┘";
    let prose = long_sentence(6); // 53 chars, wider than the 33-char table
    let text = format!("{table}\n{prose}");
    let outcome = wrap_long_lines(&text, None);

    assert_eq!(outcome.changes.len(), 1);
    for line in outcome.text.split('\n') {
        assert!(line.chars().count() <= 33);
    }
}

#[test]
fn test_tables_never_wrapped() {
    let wide_row = format!("│ {} │", "x".repeat(120));
    let wide_border_body = "─".repeat(122);
    let text = format!("┌{wide_border_body}┐\n{wide_row}\n└{wide_border_body}┘");
    let outcome = wrap_long_lines(&text, Some(40));

    assert_eq!(outcome.text, text);
    assert!(outcome.changes.is_empty());
}

#[test]
fn test_blank_lines_untouched() {
    let text = "\n\n   \n";
    let outcome = wrap_long_lines(text, Some(40));
    assert_eq!(outcome.text, text);
}

#[test]
fn test_bullet_prefix_continuation_indent() {
    let line = format!("- {}", long_sentence(16)); // well over 80
    let outcome = wrap_long_lines(&line, Some(80));

    let lines: Vec<&str> = outcome.text.split('\n').collect();
    assert!(lines.len() >= 2);
    assert!(lines[0].starts_with("- "));
    for continuation in &lines[1..] {
        assert!(continuation.starts_with("  "));
        assert!(!continuation.starts_with("   "));
    }
    for line in &lines {
        assert!(line.chars().count() <= 80);
    }
    assert_eq!(outcome.changes.len(), 1);
    assert_eq!(outcome.changes[0].line, 1);
    assert_eq!(outcome.changes[0].wrapped_to, lines.len());
}

#[test]
fn test_numeric_ordinal_prefix() {
    let line = format!("12. {}", long_sentence(16));
    let outcome = wrap_long_lines(&line, Some(80));

    let lines: Vec<&str> = outcome.text.split('\n').collect();
    assert!(lines.len() >= 2);
    assert!(lines[0].starts_with("12. "));
    for continuation in &lines[1..] {
        assert!(continuation.starts_with("    "));
    }
}

#[test]
fn test_indent_preserved_on_continuations() {
    let line = format!("    {}", long_sentence(16));
    let outcome = wrap_long_lines(&line, Some(60));

    for out_line in outcome.text.split('\n') {
        assert!(out_line.starts_with("    "));
        assert!(out_line.chars().count() <= 60);
    }
}

#[test]
fn test_narrow_budget_gives_up() {
    // Deep indent leaves under 20 columns of room: pass through unwrapped
    let line = format!("{}{}", " ".repeat(25), long_sentence(10));
    let outcome = wrap_long_lines(&line, Some(40));
    assert_eq!(outcome.text, line);
    assert!(outcome.changes.is_empty());
}

#[test]
fn test_single_unbreakable_token_passes_through() {
    let line = "x".repeat(100);
    let outcome = wrap_long_lines(&line, Some(40));
    assert_eq!(outcome.text, line);
    assert!(outcome.changes.is_empty());
}

#[test]
fn test_wrap_change_records_original_length() {
    let line = long_sentence(15);
    let original_length = line.chars().count();
    let outcome = wrap_long_lines(&line, Some(50));
    assert_eq!(outcome.changes[0].original_length, original_length);
    assert!(outcome.changes[0].wrapped_to >= 2);
}

#[test]
fn test_format_text_fixes_then_wraps() {
    let prose = long_sentence(15);
    let text = format!("┌──┬────┐\n│X│YY│\n└──┴────┘\n{prose}");
    let outcome = format_text(&text, Some(60));

    assert_eq!(outcome.fixes.len(), 1);
    assert!(outcome.warnings.is_empty());
    assert!(!outcome.wraps.is_empty());
    assert!(outcome.text.contains("│X │YY  │"));
}
