// ABOUTME: Width-budgeted reflow of non-table lines
// ABOUTME: Preserves indentation and list-bullet prefixes; never touches tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Line wrapping.
//!
//! Reflows lines that exceed a width budget into continuation lines.
//! Table lines pass through untouched regardless of width; the default
//! budget is the widest table line in the document so prose lines up with
//! the tables around it.

use textwrap::{Options, WordSplitter};

use crate::detect;
use crate::report::{WrapChange, WrapOutcome};

/// Fallback width when the document contains no tables.
pub const DEFAULT_MAX_WIDTH: usize = 120;

/// Below this much room per line, wrapping would produce degenerate
/// fragments and the line is passed through instead.
pub const MIN_CONTENT_WIDTH: usize = 20;

/// Reflow lines longer than `max_width` (default: widest table line, or
/// [`DEFAULT_MAX_WIDTH`] with no tables present).
#[must_use]
pub fn wrap_long_lines(text: &str, max_width: Option<usize>) -> WrapOutcome {
    let width = max_width.unwrap_or_else(|| {
        let widest = max_table_width(text);
        if widest == 0 {
            DEFAULT_MAX_WIDTH
        } else {
            widest
        }
    });

    let mut result: Vec<String> = Vec::new();
    let mut changes = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        if detect::is_table_line(line) || line.trim().is_empty() {
            result.push(line.to_owned());
            continue;
        }
        let original_length = line.chars().count();
        if original_length <= width {
            result.push(line.to_owned());
            continue;
        }

        let indent = leading_indent(line);
        let content = line.trim();
        let (prefix, body) = match split_list_prefix(content) {
            Some((prefix, body)) => (prefix, body),
            None => ("", content),
        };
        let continuation = format!("{indent}{}", " ".repeat(prefix.chars().count()));

        let first_width = width.saturating_sub(indent.chars().count() + prefix.chars().count());
        let continuation_width = width.saturating_sub(continuation.chars().count());
        if first_width < MIN_CONTENT_WIDTH || continuation_width < MIN_CONTENT_WIDTH {
            result.push(line.to_owned());
            continue;
        }

        let options = Options::new(first_width)
            .break_words(false)
            .word_splitter(WordSplitter::HyphenSplitter);
        let pieces = textwrap::wrap(body, options);
        if pieces.len() <= 1 {
            // A single unbreakable token; nothing was actually reducible.
            result.push(line.to_owned());
            continue;
        }

        changes.push(WrapChange {
            line: idx + 1,
            original_length,
            wrapped_to: pieces.len(),
        });
        result.push(format!("{indent}{prefix}{}", pieces[0]));
        for piece in &pieces[1..] {
            result.push(format!("{continuation}{piece}"));
        }
    }

    WrapOutcome {
        text: result.join("\n"),
        changes,
    }
}

/// Width of the widest line belonging to any table, 0 with no tables.
fn max_table_width(text: &str) -> usize {
    text.split('\n')
        .filter(|line| detect::is_table_line(line))
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Leading whitespace of a line.
fn leading_indent(line: &str) -> &str {
    let content_start = line.len() - line.trim_start().len();
    &line[..content_start]
}

/// Split a leading list marker off trimmed content: a bullet glyph or a
/// numeric ordinal (`<digits>.`), each together with the spaces that
/// follow it. Returns `(prefix, rest)`.
fn split_list_prefix(content: &str) -> Option<(&str, &str)> {
    let first = content.chars().next()?;
    if matches!(first, '-' | '*' | '●' | '├' | '└') {
        let marker_end = first.len_utf8();
        Some(split_after_spaces(content, marker_end))
    } else if first.is_ascii_digit() {
        let digits_end = content
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(content.len());
        if content[digits_end..].starts_with('.') {
            Some(split_after_spaces(content, digits_end + 1))
        } else {
            None
        }
    } else {
        None
    }
}

/// Extend a prefix past any whitespace following the marker.
fn split_after_spaces(content: &str, marker_end: usize) -> (&str, &str) {
    let rest = &content[marker_end..];
    let ws_len = rest.len() - rest.trim_start().len();
    content.split_at(marker_end + ws_len)
}
