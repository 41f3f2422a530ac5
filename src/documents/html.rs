// ABOUTME: Compiles session-plan sections into standalone HTML documents
// ABOUTME: Markdown via pulldown-cmark with tables; images embedded as base64 data URIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HTML Builder
//!
//! Compiles an ordered section list into one self-contained HTML file:
//! markdown converted with table support, status icons replaced by styled
//! text, and every referenced image inlined as a base64 data URI so the
//! file travels without siblings.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pulldown_cmark::{html as cmark_html, Options, Parser};
use regex::Regex;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Section;

use super::timestamped_path;

/// Stylesheet shared by the HTML output and its print rendering
pub const DOCUMENT_STYLESHEET: &str = r"
@page {
    size: A4;
    margin: 18mm;
}

body {
    font-family: Helvetica, Arial, sans-serif;
    font-size: 10pt;
    line-height: 1.4;
    color: #212121;
}

h1 {
    font-size: 20pt;
    color: #1565C0;
    margin-bottom: 10pt;
    border-bottom: 2px solid #1565C0;
    padding-bottom: 5pt;
}

h2 {
    font-size: 14pt;
    color: #1976D2;
    margin-top: 14pt;
    margin-bottom: 8pt;
}

h3 {
    font-size: 12pt;
    color: #424242;
    margin-top: 10pt;
    margin-bottom: 6pt;
}

p {
    margin-bottom: 6pt;
}

ul, ol {
    margin-bottom: 8pt;
    padding-left: 18pt;
}

li {
    margin-bottom: 3pt;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 8pt 0;
    font-size: 9pt;
}

th, td {
    border: 1px solid #9e9e9e;
    padding: 5pt 6pt;
    text-align: left;
    vertical-align: top;
}

th {
    background-color: #e3f2fd;
    font-weight: bold;
    color: #1565C0;
}

.status-pass {
    color: #2e7d32;
    font-weight: bold;
}

.status-fail {
    color: #c62828;
    font-weight: bold;
}

.status-warning {
    color: #f57c00;
    font-weight: bold;
}

.figure {
    margin: 12pt 0;
    text-align: center;
}

.figure img {
    max-width: 100%;
}

.figcaption {
    font-size: 8pt;
    color: #757575;
    font-style: italic;
    margin-top: 5pt;
}

hr {
    border: none;
    border-top: 1px solid #e0e0e0;
    margin: 12pt 0;
}
";

/// Additional styles for on-screen viewing of the standalone file
const SCREEN_STYLES: &str = r"
body {
    max-width: 800px;
    margin: 40px auto;
    padding: 20px;
    background-color: #fff;
}
@media print {
    body { margin: 0; padding: 0; max-width: none; }
}
";

/// Compile sections into a standalone HTML file.
///
/// With no explicit `output_path`, the file lands under `default_dir` with
/// a timestamped name. Returns the written path.
///
/// # Errors
///
/// Returns an I/O error when the output directory cannot be created or
/// the file cannot be written. Missing images are skipped, not fatal.
pub fn compile_html(
    title: &str,
    sections: &[Section],
    output_path: Option<&Path>,
    default_dir: &Path,
) -> AppResult<PathBuf> {
    let path = match output_path {
        Some(explicit) => explicit.to_path_buf(),
        None => {
            fs::create_dir_all(default_dir).map_err(AppError::from)?;
            timestamped_path(default_dir, title, "html")
        }
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(AppError::from)?;
    }

    let body = render_sections(title, sections);
    let body = embed_images_base64(&body, None);

    let document = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n    <style>\n{DOCUMENT_STYLESHEET}\n{SCREEN_STYLES}\n    </style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = html_escape::encode_text(title),
    );

    fs::write(&path, document).map_err(AppError::from)?;
    debug!(path = %path.display(), sections = sections.len(), "compiled HTML document");
    Ok(path)
}

/// Title heading plus each section in order
fn render_sections(title: &str, sections: &[Section]) -> String {
    let mut parts = vec![format!("<h1>{}</h1>", html_escape::encode_text(title))];

    for section in sections {
        match section {
            Section::Markdown { content } => {
                parts.push(format!(
                    "<div class=\"section\">{}</div>",
                    markdown_to_html(content)
                ));
            }
            Section::Image { content, caption } => {
                if !Path::new(content).exists() {
                    debug!(path = %content, "skipping missing image section");
                    continue;
                }
                let caption_html = caption.as_ref().map_or_else(String::new, |c| {
                    format!(
                        "<div class=\"figcaption\">{}</div>",
                        html_escape::encode_text(c)
                    )
                });
                parts.push(format!(
                    "<div class=\"figure\">\n    <img src=\"{content}\">\n    {caption_html}\n</div>"
                ));
            }
        }
    }

    parts.join("\n")
}

/// Convert markdown to HTML with table support, then swap emoji status
/// icons for styled text that survives print rendering.
#[must_use]
pub fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 2);
    cmark_html::push_html(&mut out, parser);
    replace_status_icons(&out)
}

fn replace_status_icons(html: &str) -> String {
    let replacements = [
        ("✅", r#"<span class="status-pass">[PASS]</span>"#),
        ("❌", r#"<span class="status-fail">[FAIL]</span>"#),
        ("⚠️", r#"<span class="status-warning">[WARN]</span>"#),
        ("⚠", r#"<span class="status-warning">[WARN]</span>"#),
    ];
    let mut out = html.to_owned();
    for (icon, styled) in replacements {
        out = out.replace(icon, styled);
    }
    out
}

/// Rewrite every `<img>` src to a base64 data URI.
///
/// Already-embedded and remote sources pass through; unreadable files keep
/// their original src.
#[must_use]
pub fn embed_images_base64(html: &str, base_path: Option<&Path>) -> String {
    let Ok(img_tag) = Regex::new(r"<img[^>]+>") else {
        return html.to_owned();
    };
    let Ok(src_attr) = Regex::new(r#"src=["']([^"']+)["']"#) else {
        return html.to_owned();
    };

    img_tag
        .replace_all(html, |caps: &regex::Captures<'_>| {
            let tag = &caps[0];
            let Some(src_caps) = src_attr.captures(tag) else {
                return tag.to_owned();
            };
            let src = &src_caps[1];
            if src.starts_with("data:") || src.starts_with("http") {
                return tag.to_owned();
            }

            let img_path = match base_path {
                Some(base) if !Path::new(src).is_absolute() => base.join(src),
                _ => PathBuf::from(src),
            };
            let Ok(bytes) = fs::read(&img_path) else {
                return tag.to_owned();
            };

            let mime = mime_for_extension(&img_path);
            let data_uri = format!("data:{mime};base64,{}", BASE64.encode(bytes));
            tag.replace(&src_caps[0], &format!("src=\"{data_uri}\""))
        })
        .into_owned()
}

fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}
