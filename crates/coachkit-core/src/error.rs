// ABOUTME: Error types for the text-layout engine
// ABOUTME: Only I/O and pattern failures are fatal; malformed tables never error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Engine errors.
//!
//! The transformation functions themselves never fail: damaged tables are
//! expected in hand-edited coaching documents and degrade to warnings.
//! Errors exist only at the file boundary.

use thiserror::Error;

/// Errors raised by the file-level wrappers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input file could not be read or was not valid UTF-8.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the file that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the file that failed to write.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The batch glob pattern did not parse.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying pattern error.
        #[source]
        source: glob::PatternError,
    },
}

/// Result alias for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;
