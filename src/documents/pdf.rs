// ABOUTME: Compiles session-plan sections into A4 PDF documents
// ABOUTME: Direct block layout with a page cursor; pipe tables render as box-drawn grids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # PDF Builder
//!
//! Lays markdown blocks out onto A4 pages with a descending cursor:
//! headings, wrapped paragraphs, bullets, and tables, plus embedded
//! PNG/JPEG images scaled to the text column. Pipe tables are converted
//! to box-drawing grids and set in the monospace font, so their structure
//! is exact regardless of column content.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex,
};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::models::Section;

use super::fonts::FontBook;
use super::markdown::{parse_blocks, Block};
use super::timestamped_path;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

/// Points to millimeters
const PT_TO_MM: f32 = 0.352_778;
/// Approximate Helvetica advance width as a fraction of font size
const BODY_CHAR_RATIO: f32 = 0.5;
/// Monospace advance width as a fraction of font size
const MONO_CHAR_RATIO: f32 = 0.6;

const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 8.5;
const CAPTION_SIZE: f32 = 9.0;

/// Compile sections into a PDF.
///
/// With no explicit `output_path`, the file lands under `default_dir` with
/// a timestamped name. Returns the written path. Missing or undecodable
/// images are skipped with a warning, not fatal.
///
/// # Errors
///
/// Returns an error when fonts cannot be registered or the file cannot be
/// written.
pub fn compile_pdf(
    title: &str,
    sections: &[Section],
    output_path: Option<&Path>,
    default_dir: &Path,
    fonts: &FontBook,
) -> AppResult<PathBuf> {
    let path = match output_path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            fs::create_dir_all(default_dir).map_err(AppError::from)?;
            timestamped_path(default_dir, title, "pdf")
        }
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(AppError::from)?;
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let faces = Faces {
        heading: fonts.register_heading(&doc)?,
        body: fonts.register_body(&doc)?,
        mono: fonts.register_mono(&doc)?,
    };

    let mut cursor = PageCursor {
        doc: &doc,
        page: first_page,
        layer: first_layer,
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    // Document title
    cursor.write_line(title, &faces.heading, 22.0);
    cursor.gap(6.0);

    for section in sections {
        match section {
            Section::Markdown { content } => {
                for block in parse_blocks(content) {
                    render_block(&mut cursor, &faces, &block);
                }
            }
            Section::Image { content, caption } => {
                embed_image(&mut cursor, &faces, content, caption.as_deref());
            }
        }
    }

    let file = File::create(&path).map_err(AppError::from)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::internal(format!("PDF generation failed: {e}")))?;
    debug!(path = %path.display(), sections = sections.len(), "compiled PDF document");
    Ok(path)
}

/// Registered fonts for one document
struct Faces {
    heading: IndirectFontRef,
    body: IndirectFontRef,
    mono: IndirectFontRef,
}

/// Descending layout cursor over the current page
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    y_mm: f32,
}

impl PageCursor<'_> {
    fn layer_ref(&self) -> PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer)
    }

    /// Start a fresh page when fewer than `needed` millimeters remain
    fn ensure_room(&mut self, needed: f32) {
        if self.y_mm - needed < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.page = page;
            self.layer = layer;
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    /// Write one line at the left margin and advance
    fn write_line(&mut self, text: &str, font: &IndirectFontRef, size_pt: f32) {
        self.write_line_at(MARGIN_MM, text, font, size_pt);
    }

    /// Write one line at an explicit x offset and advance
    fn write_line_at(&mut self, x_mm: f32, text: &str, font: &IndirectFontRef, size_pt: f32) {
        let line_height = size_pt * 1.25 * PT_TO_MM;
        self.ensure_room(line_height);
        let baseline = self.y_mm - size_pt * PT_TO_MM;
        self.layer_ref()
            .use_text(text, size_pt, Mm(x_mm), Mm(baseline), font);
        self.y_mm -= line_height;
    }

    /// Vertical whitespace
    fn gap(&mut self, mm: f32) {
        self.y_mm -= mm;
    }
}

/// Characters that fit the content column at a given size and ratio
fn chars_per_line(size_pt: f32, ratio: f32) -> usize {
    let char_width_mm = size_pt * ratio * PT_TO_MM;
    (CONTENT_WIDTH_MM / char_width_mm).floor() as usize
}

fn render_block(cursor: &mut PageCursor<'_>, faces: &Faces, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let (size, before) = match *level {
                1 => (22.0, 8.0),
                2 => (14.0, 6.0),
                _ => (12.0, 4.0),
            };
            cursor.gap(before);
            cursor.write_line(text, &faces.heading, size);
            cursor.gap(2.0);
        }
        Block::Paragraph(text) => {
            for piece in textwrap::wrap(text, chars_per_line(BODY_SIZE, BODY_CHAR_RATIO)) {
                cursor.write_line(&piece, &faces.body, BODY_SIZE);
            }
            cursor.gap(2.0);
        }
        Block::Bullet(text) => {
            let budget = chars_per_line(BODY_SIZE, BODY_CHAR_RATIO).saturating_sub(2);
            let mut first = true;
            for piece in textwrap::wrap(text, budget.max(20)) {
                let indent = if first { 0.0 } else { 4.0 };
                let line = if first {
                    format!("• {piece}")
                } else {
                    piece.into_owned()
                };
                cursor.write_line_at(MARGIN_MM + indent, &line, &faces.body, BODY_SIZE);
                first = false;
            }
        }
        Block::Rule => cursor.gap(4.0),
        Block::Spacer => cursor.gap(2.0),
        Block::Table(lines) => {
            cursor.gap(2.0);
            // Shrink wide tables so the grid stays inside the margins
            let widest = lines
                .iter()
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0)
                .max(1);
            let fitted = CONTENT_WIDTH_MM / (widest as f32 * MONO_CHAR_RATIO * PT_TO_MM);
            let size = fitted.clamp(4.0, TABLE_SIZE);
            for line in lines {
                cursor.write_line(line, &faces.mono, size);
            }
            cursor.gap(2.0);
        }
    }
}

/// Decode a PNG or JPEG file into a PDF image
fn decode_image(path: &Path) -> Option<Image> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())?;
    let file = File::open(path).ok()?;
    let decoded = match extension.as_str() {
        "png" => PngDecoder::new(file).ok().and_then(|d| Image::try_from(d).ok()),
        "jpg" | "jpeg" => JpegDecoder::new(file)
            .ok()
            .and_then(|d| Image::try_from(d).ok()),
        _ => None,
    };
    decoded
}

/// Decode and place an image scaled to the content column
fn embed_image(cursor: &mut PageCursor<'_>, faces: &Faces, path: &str, caption: Option<&str>) {
    let path = Path::new(path);
    if !path.exists() {
        debug!(path = %path.display(), "skipping missing image section");
        return;
    }
    let Some(image) = decode_image(path) else {
        warn!(path = %path.display(), "skipping unsupported or undecodable image");
        return;
    };

    let width_px = image.image.width.0;
    let height_px = image.image.height.0;
    if width_px == 0 || height_px == 0 {
        return;
    }

    let dpi = 150.0_f32;
    let native_w_mm = width_px as f32 / dpi * 25.4;
    let native_h_mm = height_px as f32 / dpi * 25.4;
    let scale = CONTENT_WIDTH_MM / native_w_mm;
    let display_h_mm = native_h_mm * scale;

    cursor.ensure_room(display_h_mm + 4.0);
    let y_bottom = cursor.y_mm - display_h_mm;

    image.add_to_layer(
        cursor.layer_ref(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_MM)),
            translate_y: Some(Mm(y_bottom)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(dpi),
            ..ImageTransform::default()
        },
    );
    cursor.y_mm = y_bottom - 3.0;

    if let Some(caption) = caption {
        // Approximate centering from the advance-width estimate
        let text_w_mm = caption.chars().count() as f32 * CAPTION_SIZE * BODY_CHAR_RATIO * PT_TO_MM;
        let x = ((PAGE_WIDTH_MM - text_w_mm) / 2.0).max(MARGIN_MM);
        cursor.write_line_at(x, caption, &faces.body, CAPTION_SIZE);
    }
    cursor.gap(4.0);
}
