// ABOUTME: Converts fixed-width text files to PDF with exact layout preservation
// ABOUTME: Fits font size to the longest line, switching to landscape for wide documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Text-to-PDF Conversion
//!
//! Renders a text file line by line in a monospace font, preserving every
//! column position, which is what keeps realigned box-drawing tables
//! intact in the PDF. The font size is fitted so the longest line spans
//! the page; documents wider than the landscape threshold flip the page.
//! Existing outputs are never overwritten: the writer picks the next free
//! `_vN` sibling instead.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{Mm, PdfDocument};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::limits::{
    DEFAULT_FONT_SIZE, LANDSCAPE_THRESHOLD_CHARS, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use crate::errors::{AppError, AppResult};

use super::fonts::FontBook;
use super::versioned_path;

/// Page margin in millimeters
const MARGIN_MM: f32 = 15.0;
/// US Letter portrait dimensions in millimeters
const LETTER_MM: (f32, f32) = (215.9, 279.4);
/// Points to millimeters
const PT_TO_MM: f32 = 0.352_778;
/// Monospace advance width as a fraction of font size
const CHAR_WIDTH_RATIO: f32 = 0.6;

/// Outcome of one file conversion in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    /// The PDF was written
    Success,
    /// The file could not be converted
    Error,
}

/// Per-file record for [`batch_text_to_pdf`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Outcome classification
    pub status: ConversionStatus,
    /// Source text file
    pub input_path: String,
    /// Target PDF path
    pub output_path: String,
    /// Error detail when `status` is `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Convert a text file to PDF with a fixed-width font.
///
/// With no `output_path`, the PDF lands next to the input with a `.pdf`
/// extension. The returned path may carry a `_vN` suffix when the target
/// already existed.
///
/// # Errors
///
/// Returns an error when the input cannot be read, fonts cannot be
/// registered, or the PDF cannot be written.
pub fn text_to_pdf(
    input_path: &Path,
    output_path: Option<&Path>,
    fonts: &FontBook,
) -> AppResult<PathBuf> {
    let text = fs::read_to_string(input_path)
        .map_err(|e| AppError::io(format!("failed to read {}: {e}", input_path.display())))?;

    let base = output_path.map_or_else(|| input_path.with_extension("pdf"), Path::to_path_buf);
    let target = versioned_path(&base);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(AppError::from)?;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let max_line_chars = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    // Landscape when lines are long, or when portrait would force the font
    // below the minimum and landscape buys a larger size
    let (portrait_w, portrait_h) = LETTER_MM;
    let (landscape_w, landscape_h) = (portrait_h, portrait_w);
    let mut page = (portrait_w, portrait_h);
    let mut font_size = fitted_font_size(max_line_chars, portrait_w);
    if max_line_chars > LANDSCAPE_THRESHOLD_CHARS {
        page = (landscape_w, landscape_h);
        font_size = fitted_font_size(max_line_chars, landscape_w);
    } else if font_size <= MIN_FONT_SIZE {
        let landscape_size = fitted_font_size(max_line_chars, landscape_w);
        if landscape_size > font_size {
            page = (landscape_w, landscape_h);
            font_size = landscape_size;
        }
    }
    let (page_w, page_h) = page;

    let title = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_owned());
    let (doc, first_page, first_layer) =
        PdfDocument::new(title.as_str(), Mm(page_w), Mm(page_h), "Layer 1");
    let mono = fonts.register_mono(&doc)?;

    let line_height_mm = font_size * 1.2 * PT_TO_MM;
    let usable_height = page_h - 2.0 * MARGIN_MM;
    let lines_per_page = (usable_height / line_height_mm).floor().max(1.0) as usize;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = page_h - MARGIN_MM - font_size * PT_TO_MM;
    let mut lines_on_page = 0_usize;

    for line in &lines {
        if lines_on_page == lines_per_page {
            let (page_idx, layer_idx) = doc.add_page(Mm(page_w), Mm(page_h), "Layer 1");
            layer = doc.get_page(page_idx).get_layer(layer_idx);
            y = page_h - MARGIN_MM - font_size * PT_TO_MM;
            lines_on_page = 0;
        }
        layer.use_text(*line, font_size, Mm(MARGIN_MM), Mm(y), &mono);
        y -= line_height_mm;
        lines_on_page += 1;
    }

    let file = File::create(&target).map_err(AppError::from)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::internal(format!("PDF generation failed: {e}")))?;
    debug!(
        input = %input_path.display(),
        output = %target.display(),
        font_size,
        landscape = max_line_chars > LANDSCAPE_THRESHOLD_CHARS,
        "converted text file to PDF"
    );
    Ok(target)
}

/// Convert every matching text file in a directory to PDF.
///
/// Per-file failures become `error` entries; sibling files still convert.
///
/// # Errors
///
/// Returns an error only when the glob pattern itself does not parse.
pub fn batch_text_to_pdf(
    input_dir: &Path,
    output_dir: Option<&Path>,
    pattern: &str,
    fonts: &FontBook,
) -> AppResult<Vec<ConversionReport>> {
    let full_pattern = input_dir.join(pattern).display().to_string();
    let paths = glob::glob(&full_pattern)
        .map_err(|e| AppError::invalid_input(format!("invalid glob pattern '{full_pattern}': {e}")))?;

    let target_dir = output_dir.unwrap_or(input_dir);
    let mut results = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                results.push(ConversionReport {
                    status: ConversionStatus::Error,
                    input_path: err.path().display().to_string(),
                    output_path: String::new(),
                    error: Some(err.to_string()),
                });
                continue;
            }
        };
        let pdf_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let target = target_dir.join(format!("{pdf_name}.pdf"));
        match text_to_pdf(&path, Some(&target), fonts) {
            Ok(written) => results.push(ConversionReport {
                status: ConversionStatus::Success,
                input_path: path.display().to_string(),
                output_path: written.display().to_string(),
                error: None,
            }),
            Err(err) => results.push(ConversionReport {
                status: ConversionStatus::Error,
                input_path: path.display().to_string(),
                output_path: target.display().to_string(),
                error: Some(err.to_string()),
            }),
        }
    }
    Ok(results)
}

/// Font size (points) that fits `max_line_chars` into the page width,
/// clamped to the readable range
fn fitted_font_size(max_line_chars: usize, page_width_mm: f32) -> f32 {
    if max_line_chars == 0 {
        return DEFAULT_FONT_SIZE;
    }
    let available_mm = page_width_mm - 2.0 * MARGIN_MM;
    let required = available_mm / (max_line_chars as f32 * CHAR_WIDTH_RATIO * PT_TO_MM);
    required.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}
