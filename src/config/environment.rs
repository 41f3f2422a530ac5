// ABOUTME: Environment-variable driven server configuration
// ABOUTME: Resolves output directories and formatting defaults once at process start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Environment Configuration
//!
//! Environment-only configuration, resolved once at startup and shared via
//! [`ServerResources`](crate::mcp::resources::ServerResources). Nothing in
//! the server reads the environment after construction.

use std::env;
use std::path::PathBuf;

use crate::errors::AppResult;

/// Output directory layout for generated artifacts
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Root directory for all generated output
    pub root: PathBuf,
    /// Directory for rendered diagrams
    pub diagrams_dir: PathBuf,
    /// Directory for compiled PDFs
    pub pdfs_dir: PathBuf,
    /// Directory for compiled HTML documents
    pub html_dir: PathBuf,
}

impl OutputConfig {
    /// Build the directory layout under a root
    #[must_use]
    pub fn under_root(root: PathBuf) -> Self {
        let diagrams_dir = root.join("diagrams");
        let pdfs_dir = root.join("pdfs");
        let html_dir = root.join("html");
        Self {
            root,
            diagrams_dir,
            pdfs_dir,
            html_dir,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Where generated artifacts land
    pub output: OutputConfig,
    /// Explicit monospace font file for PDF generation, if configured
    pub mono_font_path: Option<PathBuf>,
    /// Default maximum width for text formatting when the caller passes none
    pub default_max_width: Option<usize>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `COACHKIT_OUTPUT_DIR` - root for generated artifacts (default `output`)
    /// - `COACHKIT_MONO_FONT` - path to a monospace TTF for PDF output
    /// - `COACHKIT_MAX_WIDTH` - default wrap width override
    ///
    /// # Errors
    ///
    /// Returns a config error when `COACHKIT_MAX_WIDTH` is set but not a
    /// positive integer.
    pub fn from_env() -> AppResult<Self> {
        let root = env::var("COACHKIT_OUTPUT_DIR")
            .map_or_else(|_| PathBuf::from("output"), PathBuf::from);

        let mono_font_path = env::var("COACHKIT_MONO_FONT").ok().map(PathBuf::from);

        let default_max_width = match env::var("COACHKIT_MAX_WIDTH") {
            Ok(raw) => Some(raw.parse::<usize>().map_err(|_| {
                crate::errors::AppError::config(format!(
                    "COACHKIT_MAX_WIDTH must be a positive integer, got '{raw}'"
                ))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            output: OutputConfig::under_root(root),
            mono_font_path,
            default_max_width,
        })
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "output_root={} mono_font={} default_max_width={}",
            self.output.root.display(),
            self.mono_font_path
                .as_ref()
                .map_or_else(|| "auto".to_owned(), |p| p.display().to_string()),
            self.default_max_width
                .map_or_else(|| "auto".to_owned(), |w| w.to_string()),
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::under_root(PathBuf::from("output")),
            mono_font_path: None,
            default_max_width: None,
        }
    }
}
