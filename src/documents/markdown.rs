// ABOUTME: Line-based markdown block parser for the direct PDF layout path
// ABOUTME: Produces headings, paragraphs, bullets, rules, and box-drawn tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Markdown block parsing for PDF layout.
//!
//! The PDF builder lays blocks out itself, so it only needs a coarse
//! block structure, not a full event stream. Pipe tables are converted to
//! box-drawing tables rendered in the monospace font, which keeps their
//! grid exact across page breaks.

use regex::Regex;

/// One block of a markdown document, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1-3
    Heading {
        /// 1 for `#`, 2 for `##`, 3 for `###`
        level: u8,
        /// Heading text with inline markers stripped
        text: String,
    },
    /// A body paragraph (one source line)
    Paragraph(String),
    /// A bulleted list item
    Bullet(String),
    /// Horizontal rule
    Rule,
    /// Blank separator line
    Spacer,
    /// A pipe table converted to box-drawing lines
    Table(Vec<String>),
}

/// Parse markdown into layout blocks.
#[must_use]
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let stripped = lines[i].trim();

        if stripped.starts_with('|') && i + 1 < lines.len() {
            let mut table_lines = vec![stripped];
            let mut j = i + 1;
            while j < lines.len() && lines[j].trim().starts_with('|') {
                table_lines.push(lines[j].trim());
                j += 1;
            }
            if let Some(rendered) = render_pipe_table(&table_lines) {
                blocks.push(Block::Table(rendered));
                i = j;
                continue;
            }
        }

        if matches!(stripped, "---" | "***" | "___") {
            blocks.push(Block::Rule);
        } else if stripped.is_empty() {
            blocks.push(Block::Spacer);
        } else if let Some(text) = stripped.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                text: strip_inline_markers(text),
            });
        } else if let Some(text) = stripped.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                text: strip_inline_markers(text),
            });
        } else if let Some(text) = stripped.strip_prefix("# ") {
            blocks.push(Block::Heading {
                level: 1,
                text: strip_inline_markers(text),
            });
        } else if let Some(item) = stripped
            .strip_prefix("- ")
            .or_else(|| stripped.strip_prefix("* "))
        {
            blocks.push(Block::Bullet(strip_inline_markers(item)));
        } else {
            blocks.push(Block::Paragraph(strip_inline_markers(stripped)));
        }
        i += 1;
    }

    blocks
}

/// Drop `**bold**` and `*italic*` markers; the direct PDF path renders a
/// single text run per line.
#[must_use]
pub fn strip_inline_markers(text: &str) -> String {
    // Patterns are fixed; failure is impossible at runtime
    let mut out = text.to_owned();
    if let Ok(re) = Regex::new(r"\*\*(.+?)\*\*") {
        out = re.replace_all(&out, "$1").into_owned();
    }
    if let Ok(re) = Regex::new(r"\*(.+?)\*") {
        out = re.replace_all(&out, "$1").into_owned();
    }
    out
}

/// Render pipe-table lines as a box-drawing table, or `None` when the
/// lines are not a valid table (no `|---|` separator row).
fn render_pipe_table(lines: &[&str]) -> Option<Vec<String>> {
    if lines.len() < 2 {
        return None;
    }
    if !is_separator_row(lines[1]) {
        return None;
    }

    let header = parse_row(lines[0]);
    let mut rows: Vec<Vec<String>> = Vec::new();
    for line in &lines[2..] {
        if !line.starts_with('|') {
            break;
        }
        let mut row = parse_row(line);
        row.resize(header.len(), String::new());
        row.truncate(header.len());
        rows.push(row);
    }

    // Column width = widest cell, header included
    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push(border(&widths, '┌', '┬', '┐'));
    out.push(data_row(&widths, &header));
    out.push(border(&widths, '├', '┼', '┤'));
    for row in &rows {
        out.push(data_row(&widths, row));
    }
    out.push(border(&widths, '└', '┴', '┘'));
    Some(out)
}

/// A markdown separator row: pipes, dashes, colons, and whitespace only
fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|')
        && trimmed.ends_with('|')
        && trimmed
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
        && trimmed.contains('-')
}

fn parse_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| strip_inline_markers(cell.trim()))
        .collect()
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..(width + 2) {
            out.push('─');
        }
    }
    out.push(right);
    out
}

fn data_row(widths: &[usize], cells: &[String]) -> String {
    let mut out = String::new();
    out.push('│');
    for (width, cell) in widths.iter().zip(cells.iter()) {
        let pad = width.saturating_sub(cell.chars().count());
        out.push(' ');
        out.push_str(cell);
        for _ in 0..pad {
            out.push(' ');
        }
        out.push(' ');
        out.push('│');
    }
    out
}
