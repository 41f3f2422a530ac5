// ABOUTME: Core text-layout engine: ASCII table realignment and text reflow
// ABOUTME: Detects box-drawing tables, repairs drifted data rows, wraps long prose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # CoachKit Core
//!
//! Text-layout engine for coaching documents: detects box-drawing-character
//! tables embedded in plain text, recovers their column grid from border
//! rows, repairs data rows whose separators have drifted out of alignment,
//! and reflow-wraps long non-table lines to a width budget without
//! disturbing tables.
//!
//! The engine is synchronous, purely CPU-bound, and owns no state between
//! invocations. Each call operates on one in-memory document; callers that
//! share an output path must serialize writes themselves.
//!
//! ## Operations
//!
//! - [`fix_alignment`] - realign every table data row to its block grid
//! - [`wrap_long_lines`] - reflow over-width prose, leaving tables alone
//! - [`format_text`] - alignment followed by reflow
//! - [`fix_text_file`] / [`format_text_file`] / [`fix_all_text_files`] -
//!   file-level wrappers with structured [`FileReport`] results

pub mod boxdraw;
pub mod detect;
pub mod grid;

mod align;
mod error;
mod files;
mod report;
mod wrap;

pub use align::fix_alignment;
pub use error::{CoreError, CoreResult};
pub use files::{fix_all_text_files, fix_text_file, format_text_file};
pub use grid::ColumnGrid;
pub use report::{
    AlignmentOutcome, FileReport, FileStatus, FormatOutcome, LineFixes, LineWarnings, WrapChange,
    WrapOutcome,
};
pub use wrap::{wrap_long_lines, DEFAULT_MAX_WIDTH, MIN_CONTENT_WIDTH};

/// Fix table alignment, then wrap long non-table lines.
///
/// The wrap pass runs on the aligned text, so its default width budget
/// reflects corrected table widths.
#[must_use]
pub fn format_text(text: &str, max_width: Option<usize>) -> FormatOutcome {
    let aligned = fix_alignment(text);
    let wrapped = wrap_long_lines(&aligned.text, max_width);
    FormatOutcome {
        text: wrapped.text,
        fixes: aligned.fixes,
        warnings: aligned.warnings,
        wraps: wrapped.changes,
    }
}
