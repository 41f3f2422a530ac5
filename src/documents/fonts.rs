// ABOUTME: Font discovery and registration for PDF generation
// ABOUTME: Caller-owned FontBook built once at startup; no hidden global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Font Configuration
//!
//! PDF output needs a monospace font with Unicode box-drawing coverage so
//! realigned tables survive the conversion. [`FontBook`] probes a list of
//! platform font paths once, keeps the chosen font's bytes in memory, and
//! registers fonts into each document on demand. It is constructed by the
//! caller at process start and passed by reference wherever PDFs are
//! built; there is no lazily-initialized global.

use std::fs;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Candidate monospace fonts with box-drawing glyph coverage, probed in
/// order. Paths for other platforms simply fail the existence check.
const MONO_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "C:/Windows/Fonts/consola.ttf",
    "C:/Windows/Fonts/lucon.ttf",
    "C:/Windows/Fonts/cour.ttf",
];

/// The monospace font a `FontBook` resolved at startup
#[derive(Debug, Clone)]
enum MonoFont {
    /// A TTF read from disk, embedded into each document
    Embedded {
        /// Path the font was loaded from, for logging
        path: String,
        /// Raw TTF bytes
        bytes: Vec<u8>,
    },
    /// Built-in Courier fallback; box-drawing glyphs will not render
    BuiltinCourier,
}

/// Fonts available for document generation.
///
/// Construct once with [`FontBook::discover`] and share by reference.
#[derive(Debug, Clone)]
pub struct FontBook {
    mono: MonoFont,
}

impl FontBook {
    /// Probe for a usable monospace font.
    ///
    /// An explicit path (from configuration) wins over the platform
    /// candidates. Falls back to built-in Courier with a warning when
    /// nothing is found; Courier lacks box-drawing glyphs, so tables in
    /// converted documents will degrade.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Self {
        let candidates = explicit
            .into_iter()
            .map(Path::to_path_buf)
            .chain(MONO_CANDIDATES.iter().copied().map(std::path::PathBuf::from));

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match fs::read(&candidate) {
                Ok(bytes) => {
                    debug!(path = %candidate.display(), "monospace font resolved");
                    return Self {
                        mono: MonoFont::Embedded {
                            path: candidate.display().to_string(),
                            bytes,
                        },
                    };
                }
                Err(err) => {
                    warn!(path = %candidate.display(), error = %err, "font unreadable, trying next candidate");
                }
            }
        }

        warn!("no Unicode monospace font found; falling back to built-in Courier (box-drawing glyphs will not render)");
        Self {
            mono: MonoFont::BuiltinCourier,
        }
    }

    /// True when an embedded TTF with box-drawing coverage was found
    #[must_use]
    pub const fn has_unicode_mono(&self) -> bool {
        matches!(self.mono, MonoFont::Embedded { .. })
    }

    /// Path of the embedded monospace font, if any
    #[must_use]
    pub fn mono_source(&self) -> Option<&str> {
        match &self.mono {
            MonoFont::Embedded { path, .. } => Some(path),
            MonoFont::BuiltinCourier => None,
        }
    }

    /// Register the monospace font into a document
    ///
    /// # Errors
    ///
    /// Returns an internal error if the font data is rejected by the PDF
    /// writer.
    pub fn register_mono(&self, doc: &PdfDocumentReference) -> AppResult<IndirectFontRef> {
        match &self.mono {
            MonoFont::Embedded { bytes, .. } => doc
                .add_external_font(bytes.as_slice())
                .map_err(|e| AppError::internal(format!("failed to embed monospace font: {e}"))),
            MonoFont::BuiltinCourier => doc
                .add_builtin_font(BuiltinFont::Courier)
                .map_err(|e| AppError::internal(format!("failed to register Courier: {e}"))),
        }
    }

    /// Register the body text font into a document
    ///
    /// # Errors
    ///
    /// Returns an internal error if the built-in font cannot be registered.
    pub fn register_body(&self, doc: &PdfDocumentReference) -> AppResult<IndirectFontRef> {
        doc.add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::internal(format!("failed to register Helvetica: {e}")))
    }

    /// Register the heading font into a document
    ///
    /// # Errors
    ///
    /// Returns an internal error if the built-in font cannot be registered.
    pub fn register_heading(&self, doc: &PdfDocumentReference) -> AppResult<IndirectFontRef> {
        doc.add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::internal(format!("failed to register Helvetica-Bold: {e}")))
    }
}
