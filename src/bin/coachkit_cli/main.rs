// ABOUTME: Command-line interface for the text formatting and conversion operations
// ABOUTME: Subcommands fix, format, wrap, batch, and to-pdf printing JSON reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # CoachKit CLI
//!
//! Runs the file-level formatting operations without an MCP client:
//! table-alignment fixes, full formatting, batch fixes over a directory,
//! and fixed-width text-to-PDF conversion. Every subcommand prints its
//! structured report as JSON; a failed or error-status run exits 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coachkit_core::{fix_all_text_files, fix_text_file, format_text_file, FileStatus};
use coachkit_mcp_server::config::environment::ServerConfig;
use coachkit_mcp_server::documents::{batch_text_to_pdf, text_to_pdf, FontBook};
use coachkit_mcp_server::logging;

#[derive(Parser)]
#[command(name = "coachkit-cli")]
#[command(about = "CoachKit text formatting and conversion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fix ASCII table alignment in a text file
    Fix {
        /// Input text file
        path: PathBuf,
        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave the input untouched and write a _fixed sibling
        #[arg(long)]
        no_in_place: bool,
    },
    /// Fix table alignment and wrap long lines in a text file
    Format {
        /// Input text file
        path: PathBuf,
        /// Write the result here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave the input untouched and write a _formatted sibling
        #[arg(long)]
        no_in_place: bool,
        /// Maximum line width (default: widest table in the file)
        #[arg(short = 'w', long)]
        max_width: Option<usize>,
    },
    /// Fix table alignment in every matching file in a directory
    Batch {
        /// Directory containing text files
        directory: PathBuf,
        /// Glob pattern for input files
        #[arg(short, long, default_value = "*.txt")]
        pattern: String,
        /// Leave inputs untouched and write _fixed siblings
        #[arg(long)]
        no_in_place: bool,
    },
    /// Convert a fixed-width text file to PDF
    ToPdf {
        /// Input text file
        path: PathBuf,
        /// Output PDF path (default: input with .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Convert every matching file in a directory instead
        #[arg(long)]
        batch: bool,
        /// Glob pattern for batch conversion
        #[arg(short, long, default_value = "*.txt")]
        pattern: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    logging::init_from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Fix {
            path,
            output,
            no_in_place,
        } => {
            let report = fix_text_file(&path, output.as_deref(), !no_in_place)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(report.status != FileStatus::Error)
        }
        Command::Format {
            path,
            output,
            no_in_place,
            max_width,
        } => {
            let report = format_text_file(&path, output.as_deref(), !no_in_place, max_width)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(report.status != FileStatus::Error)
        }
        Command::Batch {
            directory,
            pattern,
            no_in_place,
        } => {
            let reports = fix_all_text_files(&directory, &pattern, !no_in_place)?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
            Ok(reports.iter().all(|r| r.status != FileStatus::Error))
        }
        Command::ToPdf {
            path,
            output,
            batch,
            pattern,
        } => {
            let config = ServerConfig::from_env()?;
            let fonts = FontBook::discover(config.mono_font_path.as_deref());
            if batch {
                let reports = batch_text_to_pdf(&path, output.as_deref(), &pattern, &fonts)?;
                println!("{}", serde_json::to_string_pretty(&reports)?);
                Ok(reports.iter().all(|r| {
                    r.status == coachkit_mcp_server::documents::ConversionStatus::Success
                }))
            } else {
                let written = text_to_pdf(&path, output.as_deref(), &fonts)?;
                println!("{}", written.display());
                Ok(true)
            }
        }
    }
}
