// ABOUTME: Structured records describing alignment fixes, warnings, and wraps
// ABOUTME: Defines the per-operation outcomes and the file-level report type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Outcome and report types.
//!
//! Every transformation returns its rewritten text together with ordered,
//! line-addressed records of what changed and what could not be corrected.
//! All types serialize to the JSON shapes the tool layer returns to
//! clients.

use serde::{Deserialize, Serialize};

/// Corrections applied to one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFixes {
    /// 1-based line number in the input document.
    pub line: usize,
    /// Human-readable description of each correction, in column order.
    pub fixes: Vec<String>,
}

/// Alignment defects on one line that could not be corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWarnings {
    /// 1-based line number in the input document.
    pub line: usize,
    /// Human-readable description of each unresolved defect.
    pub warnings: Vec<String>,
}

/// Record of one over-width line split into continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapChange {
    /// 1-based line number in the input document.
    pub line: usize,
    /// Character count of the original line.
    pub original_length: usize,
    /// Number of lines the content was wrapped onto.
    pub wrapped_to: usize,
}

/// Result of [`fix_alignment`](crate::fix_alignment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentOutcome {
    /// The realigned document text.
    pub text: String,
    /// Fixes applied, ordered by line number.
    pub fixes: Vec<LineFixes>,
    /// Unresolved defects, ordered by line number.
    pub warnings: Vec<LineWarnings>,
}

impl AlignmentOutcome {
    /// Total number of individual corrections across all lines.
    #[must_use]
    pub fn total_fixes(&self) -> usize {
        self.fixes.iter().map(|f| f.fixes.len()).sum()
    }

    /// Total number of individual warnings across all lines.
    #[must_use]
    pub fn total_warnings(&self) -> usize {
        self.warnings.iter().map(|w| w.warnings.len()).sum()
    }

    /// True when the document was already fully aligned.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.fixes.is_empty() && self.warnings.is_empty()
    }
}

/// Result of [`wrap_long_lines`](crate::wrap_long_lines).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapOutcome {
    /// The reflowed document text.
    pub text: String,
    /// One record per wrapped input line.
    pub changes: Vec<WrapChange>,
}

/// Result of [`format_text`](crate::format_text): alignment then reflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOutcome {
    /// The fully formatted document text.
    pub text: String,
    /// Alignment fixes applied.
    pub fixes: Vec<LineFixes>,
    /// Unresolved alignment defects.
    pub warnings: Vec<LineWarnings>,
    /// Lines reflowed after alignment.
    pub wraps: Vec<WrapChange>,
}

/// Per-file status for the file-level wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Nothing to correct; no output written.
    NoChanges,
    /// Corrections applied and written.
    Fixed,
    /// Corrections written, but some defects remain as warnings.
    Partial,
    /// Only uncorrectable defects were found; nothing written.
    WarningsOnly,
    /// Formatting (alignment and/or reflow) applied and written.
    Formatted,
    /// The file could not be processed at all.
    Error,
}

/// Structured result of one file-level operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Outcome classification.
    pub status: FileStatus,
    /// Path of the file that was read.
    pub input_path: String,
    /// Path written, absent when nothing was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Alignment fixes applied, by line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<LineFixes>,
    /// Unresolved alignment defects, by line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LineWarnings>,
    /// Reflowed lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wraps: Vec<WrapChange>,
    /// Human-readable summary of what happened.
    pub message: String,
    /// Error detail when `status` is [`FileStatus::Error`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Build an error-status report for a file that failed to process.
    #[must_use]
    pub fn from_error(input_path: impl Into<String>, error: &crate::CoreError) -> Self {
        let message = error.to_string();
        Self {
            status: FileStatus::Error,
            input_path: input_path.into(),
            output_path: None,
            fixes: Vec::new(),
            warnings: Vec::new(),
            wraps: Vec::new(),
            message: message.clone(),
            error: Some(message),
        }
    }
}
