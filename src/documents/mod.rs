// ABOUTME: Document builders: session plans to PDF/HTML, fixed-width text to PDF
// ABOUTME: Shared output-path helpers for timestamped and versioned artifact names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Document Builders
//!
//! Compiles ordered [`Section`](crate::models::Section) lists into PDF or
//! standalone HTML documents, and converts fixed-width text files (with
//! box-drawing tables) into PDFs that preserve their exact layout.

pub mod fonts;
pub mod html;
pub mod markdown;
pub mod pdf;
pub mod text_pdf;

pub use fonts::FontBook;
pub use html::compile_html;
pub use pdf::compile_pdf;
pub use text_pdf::{batch_text_to_pdf, text_to_pdf, ConversionReport, ConversionStatus};

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::constants::limits::MAX_TITLE_IN_FILENAME;

/// Title fragment safe for use in a file name
#[must_use]
pub fn safe_title(title: &str) -> String {
    title
        .replace(' ', "_")
        .chars()
        .take(MAX_TITLE_IN_FILENAME)
        .collect()
}

/// `{dir}/{safe_title}_{timestamp}.{ext}` for freshly generated artifacts
#[must_use]
pub fn timestamped_path(dir: &Path, title: &str, ext: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{timestamp}.{ext}", safe_title(title)))
}

/// Return `base` unchanged when free, otherwise the first free versioned
/// sibling (`plan.pdf` -> `plan_v1.pdf` -> `plan_v2.pdf` ...). An existing
/// `_vN` suffix continues counting from `N`.
#[must_use]
pub fn versioned_path(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    let (base_stem, mut version) = split_version_suffix(&stem);
    loop {
        version += 1;
        let name = match &ext {
            Some(ext) => format!("{base_stem}_v{version}.{ext}"),
            None => format!("{base_stem}_v{version}"),
        };
        let candidate = base.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
    }
}

/// Split a trailing `_v<digits>` suffix off a file stem
fn split_version_suffix(stem: &str) -> (&str, u32) {
    if let Some(idx) = stem.rfind("_v") {
        let digits = &stem[idx + 2..];
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(version) = digits.parse::<u32>() {
                return (&stem[..idx], version);
            }
        }
    }
    (stem, 0)
}
