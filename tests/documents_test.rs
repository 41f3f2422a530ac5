// ABOUTME: Tests for document builders: HTML, PDF, text-to-PDF, and path helpers
// ABOUTME: Covers markdown conversion, image embedding, versioned outputs, and batch conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use coachkit_mcp_server::documents::markdown::{parse_blocks, Block};
use coachkit_mcp_server::documents::{
    batch_text_to_pdf, compile_html, compile_pdf, text_to_pdf, versioned_path, ConversionStatus,
    FontBook,
};
use coachkit_mcp_server::models::Section;
use tempfile::TempDir;

fn markdown_section(content: &str) -> Section {
    Section::Markdown {
        content: content.to_owned(),
    }
}

// ============================================================================
// Markdown block parsing
// ============================================================================

#[test]
fn test_parse_blocks_headings_and_bullets() {
    let blocks = parse_blocks("## Warm-Up\n- Jog around pitch\n- Dynamic stretches");
    assert_eq!(
        blocks[0],
        Block::Heading {
            level: 2,
            text: "Warm-Up".to_owned()
        }
    );
    assert_eq!(blocks[1], Block::Bullet("Jog around pitch".to_owned()));
    assert_eq!(blocks[2], Block::Bullet("Dynamic stretches".to_owned()));
}

#[test]
fn test_parse_blocks_strips_inline_markers() {
    let blocks = parse_blocks("Play with **high** *tempo*.");
    assert_eq!(blocks[0], Block::Paragraph("Play with high tempo.".to_owned()));
}

#[test]
fn test_pipe_table_renders_as_box_table() {
    let blocks = parse_blocks("| Phase | Minutes |\n|---|---|\n| Warm-up | 15 |\n| Match | 30 |");
    let Block::Table(lines) = &blocks[0] else {
        panic!("expected a table block, got {:?}", blocks[0]);
    };
    assert!(lines[0].starts_with('┌'));
    assert!(lines[0].contains('┬'));
    assert!(lines[1].contains("│ Phase"));
    assert!(lines[2].starts_with('├'));
    assert!(lines.last().unwrap().starts_with('└'));
    // All lines share one width
    let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]));
}

#[test]
fn test_pipe_lines_without_separator_are_not_a_table() {
    let blocks = parse_blocks("| not | a table\nplain");
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

// ============================================================================
// HTML compilation
// ============================================================================

#[test]
fn test_compile_html_markdown_only() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("plan.html");
    let path = compile_html(
        "Test Session",
        &[
            markdown_section("## Warm-Up\n- Jog around pitch"),
            markdown_section("| A | B |\n|---|---|\n| 1 | 2 |"),
        ],
        Some(&target),
        dir.path(),
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<h1>Test Session</h1>"));
    assert!(html.contains("<h2>Warm-Up</h2>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<li>Jog around pitch</li>"));
}

#[test]
fn test_compile_html_replaces_status_icons() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("plan.html");
    let path = compile_html(
        "Status",
        &[markdown_section("Drill check: ✅ done, ❌ missed")],
        Some(&target),
        dir.path(),
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains(r#"<span class="status-pass">[PASS]</span>"#));
    assert!(html.contains(r#"<span class="status-fail">[FAIL]</span>"#));
    assert!(!html.contains('✅'));
}

#[test]
fn test_compile_html_embeds_images_as_base64() {
    let dir = TempDir::new().unwrap();
    let image_path = dir.path().join("diagram.png");
    fs::write(&image_path, b"fake png bytes").unwrap();

    let target = dir.path().join("plan.html");
    let path = compile_html(
        "With Image",
        &[Section::Image {
            content: image_path.display().to_string(),
            caption: Some("Figure 1".to_owned()),
        }],
        Some(&target),
        dir.path(),
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("Figure 1"));
    // The raw path is gone from the img src
    assert!(!html.contains(&format!("src=\"{}\"", image_path.display())));
}

#[test]
fn test_compile_html_skips_missing_images() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("plan.html");
    let path = compile_html(
        "Missing",
        &[
            markdown_section("Some text"),
            Section::Image {
                content: "/nonexistent/image.png".to_owned(),
                caption: Some("Gone".to_owned()),
            },
        ],
        Some(&target),
        dir.path(),
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Some text"));
    assert!(!html.contains("/nonexistent/image.png"));
}

#[test]
fn test_compile_html_default_path_is_timestamped() {
    let dir = TempDir::new().unwrap();
    let path = compile_html(
        "Auto Path Test",
        &[markdown_section("Hello")],
        None,
        dir.path(),
    )
    .unwrap();
    assert!(path.exists());
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Auto_Path_Test_"));
    assert!(name.ends_with(".html"));
}

// ============================================================================
// PDF compilation
// ============================================================================

#[test]
fn test_compile_pdf_markdown_only() {
    let dir = TempDir::new().unwrap();
    let fonts = FontBook::discover(None);
    let target = dir.path().join("plan.pdf");
    let path = compile_pdf(
        "Test Session",
        &[
            markdown_section("## Warm-Up\n- Jog around pitch\n- Dynamic stretches"),
            markdown_section("## Main Activity\nPassing drill in 20x15m grid."),
        ],
        Some(&target),
        dir.path(),
        &fonts,
    )
    .unwrap();

    assert!(path.exists());
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn test_compile_pdf_with_missing_image() {
    let dir = TempDir::new().unwrap();
    let fonts = FontBook::discover(None);
    let target = dir.path().join("plan.pdf");
    let path = compile_pdf(
        "Test",
        &[
            markdown_section("Some text"),
            Section::Image {
                content: "/nonexistent/image.png".to_owned(),
                caption: Some("Missing".to_owned()),
            },
        ],
        Some(&target),
        dir.path(),
        &fonts,
    )
    .unwrap();
    assert!(path.exists());
}

#[test]
fn test_compile_pdf_with_markdown_table() {
    let dir = TempDir::new().unwrap();
    let fonts = FontBook::discover(None);
    let target = dir.path().join("table.pdf");
    let path = compile_pdf(
        "Table",
        &[markdown_section("| A | B |\n|---|---|\n| 1 | 2 |")],
        Some(&target),
        dir.path(),
        &fonts,
    )
    .unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

// ============================================================================
// Text-to-PDF
// ============================================================================

#[test]
fn test_text_to_pdf_creates_pdf() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "Session notes\nLine two\nLine three\n").unwrap();

    let fonts = FontBook::discover(None);
    let path = text_to_pdf(&input, None, &fonts).unwrap();

    assert_eq!(path, dir.path().join("notes.pdf"));
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_text_to_pdf_never_overwrites() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "content\n").unwrap();

    let fonts = FontBook::discover(None);
    let first = text_to_pdf(&input, None, &fonts).unwrap();
    let second = text_to_pdf(&input, None, &fonts).unwrap();
    let third = text_to_pdf(&input, None, &fonts).unwrap();

    assert_eq!(first, dir.path().join("notes.pdf"));
    assert_eq!(second, dir.path().join("notes_v1.pdf"));
    assert_eq!(third, dir.path().join("notes_v2.pdf"));
}

#[test]
fn test_text_to_pdf_missing_input_errors() {
    let fonts = FontBook::discover(None);
    let result = text_to_pdf(Path::new("/nonexistent/notes.txt"), None, &fonts);
    assert!(result.is_err());
}

#[test]
fn test_text_to_pdf_wide_document() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("wide.txt");
    let wide_line = "x".repeat(180);
    fs::write(&input, format!("{wide_line}\nshort\n")).unwrap();

    let fonts = FontBook::discover(None);
    let path = text_to_pdf(&input, None, &fonts).unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_batch_text_to_pdf() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(dir.path().join("b.txt"), "beta\n").unwrap();
    fs::write(dir.path().join("skip.md"), "gamma\n").unwrap();

    let out = TempDir::new().unwrap();
    let fonts = FontBook::discover(None);
    let reports = batch_text_to_pdf(dir.path(), Some(out.path()), "*.txt", &fonts).unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports
        .iter()
        .all(|r| r.status == ConversionStatus::Success));
    assert!(out.path().join("a.pdf").exists());
    assert!(out.path().join("b.pdf").exists());
}

// ============================================================================
// Path helpers
// ============================================================================

#[test]
fn test_versioned_path_free_path_unchanged() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("plan.pdf");
    assert_eq!(versioned_path(&base), base);
}

#[test]
fn test_versioned_path_continues_existing_suffix() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("plan_v3.pdf");
    fs::write(&base, b"x").unwrap();
    assert_eq!(versioned_path(&base), dir.path().join("plan_v4.pdf"));
}
