// ABOUTME: File-level wrappers around the alignment and reflow operations
// ABOUTME: Reads UTF-8 text files, applies fixes, and writes results with status reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! File operations.
//!
//! Each wrapper reads a whole UTF-8 file, transforms it in memory, and
//! writes the result back in place or to a suffix-qualified sibling. No
//! output file is written when nothing changed. The batch variant captures
//! per-file failures as `error` status entries so sibling files still
//! process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::align::fix_alignment;
use crate::error::{CoreError, CoreResult};
use crate::report::{FileReport, FileStatus};
use crate::wrap::wrap_long_lines;

/// Fix table alignment in one text file.
///
/// With no explicit `output_path`, the result overwrites the input when
/// `in_place` is set and otherwise lands next to it with a `_fixed`
/// suffix. Nothing is written when there are no fixes.
///
/// # Errors
///
/// Returns [`CoreError`] when the file cannot be read (missing, permission
/// denied, or not valid UTF-8) or the output cannot be written.
pub fn fix_text_file(
    input_path: &Path,
    output_path: Option<&Path>,
    in_place: bool,
) -> CoreResult<FileReport> {
    let original = read_file(input_path)?;
    let outcome = fix_alignment(&original);
    let input_display = input_path.display().to_string();

    if outcome.is_clean() {
        return Ok(FileReport {
            status: FileStatus::NoChanges,
            input_path: input_display,
            output_path: None,
            fixes: Vec::new(),
            warnings: Vec::new(),
            wraps: Vec::new(),
            message: "No alignment issues found".to_owned(),
            error: None,
        });
    }

    let target = resolve_output(input_path, output_path, in_place, "_fixed");
    let wrote = if outcome.fixes.is_empty() {
        // Warnings alone apply no correction, so there is nothing to write.
        false
    } else {
        write_file(&target, &outcome.text)?;
        true
    };

    let status = match (outcome.fixes.is_empty(), outcome.warnings.is_empty()) {
        (false, false) => FileStatus::Partial,
        (false, true) => FileStatus::Fixed,
        _ => FileStatus::WarningsOnly,
    };

    let mut messages = Vec::new();
    if !outcome.fixes.is_empty() {
        messages.push(format!(
            "Fixed {} issue(s) on {} line(s)",
            outcome.total_fixes(),
            outcome.fixes.len()
        ));
    }
    if !outcome.warnings.is_empty() {
        messages.push(format!(
            "{} unfixable issue(s) on {} line(s) need manual attention",
            outcome.total_warnings(),
            outcome.warnings.len()
        ));
    }

    Ok(FileReport {
        status,
        input_path: input_display,
        output_path: wrote.then(|| target.display().to_string()),
        fixes: outcome.fixes,
        warnings: outcome.warnings,
        wraps: Vec::new(),
        message: messages.join("; "),
        error: None,
    })
}

/// Fix table alignment and wrap long lines in one text file.
///
/// Runs [`fix_alignment`] first so the wrapper sees corrected tables, then
/// reflows over-width prose to `max_width` (default: widest table line).
/// Nothing is written when there are zero fixes and zero wraps.
///
/// # Errors
///
/// Returns [`CoreError`] on read or write failure.
pub fn format_text_file(
    input_path: &Path,
    output_path: Option<&Path>,
    in_place: bool,
    max_width: Option<usize>,
) -> CoreResult<FileReport> {
    let original = read_file(input_path)?;
    let aligned = fix_alignment(&original);
    let wrapped = wrap_long_lines(&aligned.text, max_width);
    let input_display = input_path.display().to_string();

    if aligned.is_clean() && wrapped.changes.is_empty() {
        return Ok(FileReport {
            status: FileStatus::NoChanges,
            input_path: input_display,
            output_path: None,
            fixes: Vec::new(),
            warnings: Vec::new(),
            wraps: Vec::new(),
            message: "No changes needed".to_owned(),
            error: None,
        });
    }

    let target = resolve_output(input_path, output_path, in_place, "_formatted");
    let wrote = if aligned.fixes.is_empty() && wrapped.changes.is_empty() {
        false
    } else {
        write_file(&target, &wrapped.text)?;
        true
    };

    let mut messages = Vec::new();
    if !aligned.fixes.is_empty() {
        messages.push(format!(
            "Fixed {} table alignment issue(s)",
            aligned.total_fixes()
        ));
    }
    if !aligned.warnings.is_empty() {
        messages.push(format!(
            "{} unfixable table issue(s)",
            aligned.total_warnings()
        ));
    }
    if !wrapped.changes.is_empty() {
        messages.push(format!("Wrapped {} long line(s)", wrapped.changes.len()));
    }

    Ok(FileReport {
        status: FileStatus::Formatted,
        input_path: input_display,
        output_path: wrote.then(|| target.display().to_string()),
        fixes: aligned.fixes,
        warnings: aligned.warnings,
        wraps: wrapped.changes,
        message: messages.join("; "),
        error: None,
    })
}

/// Fix table alignment in every file matching `pattern` under `directory`.
///
/// Failures on individual files become `error` status entries; sibling
/// files still process.
///
/// # Errors
///
/// Returns [`CoreError::Pattern`] only when the glob pattern itself does
/// not parse.
pub fn fix_all_text_files(
    directory: &Path,
    pattern: &str,
    in_place: bool,
) -> CoreResult<Vec<FileReport>> {
    let full_pattern = directory.join(pattern).display().to_string();
    let paths = glob::glob(&full_pattern).map_err(|source| CoreError::Pattern {
        pattern: full_pattern.clone(),
        source,
    })?;

    let mut results = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                debug!(path = %path.display(), "fixing table alignment");
                match fix_text_file(&path, None, in_place) {
                    Ok(report) => results.push(report),
                    Err(err) => {
                        results.push(FileReport::from_error(path.display().to_string(), &err));
                    }
                }
            }
            Err(err) => {
                let path = err.path().display().to_string();
                let core_err = CoreError::Read {
                    path: path.clone(),
                    source: err.into_error(),
                };
                results.push(FileReport::from_error(path, &core_err));
            }
        }
    }
    Ok(results)
}

fn read_file(path: &Path) -> CoreResult<String> {
    fs::read_to_string(path).map_err(|source| CoreError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, text: &str) -> CoreResult<()> {
    fs::write(path, text).map_err(|source| CoreError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Decide where output goes: explicit path, in-place, or a suffixed
/// sibling (`plan.txt` -> `plan_fixed.txt`).
fn resolve_output(
    input_path: &Path,
    output_path: Option<&Path>,
    in_place: bool,
    suffix: &str,
) -> PathBuf {
    if let Some(explicit) = output_path {
        return explicit.to_path_buf();
    }
    if in_place {
        return input_path.to_path_buf();
    }
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input_path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input_path.with_file_name(name)
}
