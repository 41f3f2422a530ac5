// ABOUTME: Minimal SVG document builder used by the diagram renderer
// ABOUTME: Emits escaped elements into a single document string, no external state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! SVG assembly.
//!
//! A small append-only builder over the handful of SVG elements the pitch
//! renderer needs. All text content is escaped; attribute values are
//! produced only from numeric or constant inputs.

use std::fmt::Write as _;

/// Append-only SVG document builder
#[derive(Debug)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    body: String,
}

impl SvgBuilder {
    /// Start a document of the given pixel size
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Filled rectangle with optional rounded corners and stroke
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: &str,
        fill_opacity: f64,
        stroke: Option<(&str, f64)>,
        rx: f64,
    ) {
        let stroke_attrs = stroke.map_or_else(
            || r#" stroke="none""#.to_owned(),
            |(color, width)| format!(r#" stroke="{color}" stroke-width="{width}""#),
        );
        let _ = write!(
            self.body,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="{fill}" fill-opacity="{fill_opacity}"{stroke_attrs}/>"#,
        );
        self.body.push('\n');
    }

    /// Circle with optional fill and stroke
    pub fn circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        fill: &str,
        fill_opacity: f64,
        stroke: Option<(&str, f64)>,
    ) {
        let stroke_attrs = stroke.map_or_else(
            || r#" stroke="none""#.to_owned(),
            |(color, width)| format!(r#" stroke="{color}" stroke-width="{width}""#),
        );
        let _ = write!(
            self.body,
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{fill}" fill-opacity="{fill_opacity}"{stroke_attrs}/>"#,
        );
        self.body.push('\n');
    }

    /// Straight line with an optional dash pattern
    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        dash: Option<&str>,
    ) {
        let dash_attr = dash.map_or_else(String::new, |d| format!(r#" stroke-dasharray="{d}""#));
        let _ = write!(
            self.body,
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{width}"{dash_attr}/>"#,
        );
        self.body.push('\n');
    }

    /// Quadratic bezier path with an optional dash pattern
    pub fn quad_path(
        &mut self,
        x1: f64,
        y1: f64,
        cx: f64,
        cy: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        dash: Option<&str>,
    ) {
        let dash_attr = dash.map_or_else(String::new, |d| format!(r#" stroke-dasharray="{d}""#));
        let _ = write!(
            self.body,
            r#"<path d="M {x1:.1} {y1:.1} Q {cx:.1} {cy:.1} {x2:.1} {y2:.1}" fill="none" stroke="{stroke}" stroke-width="{width}"{dash_attr}/>"#,
        );
        self.body.push('\n');
    }

    /// Filled polygon from a point list
    pub fn polygon(&mut self, points: &[(f64, f64)], fill: &str) {
        let point_list = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            self.body,
            r#"<polygon points="{point_list}" fill="{fill}"/>"#
        );
        self.body.push('\n');
    }

    /// Centered text; the content is escaped
    pub fn text(&mut self, x: f64, y: f64, content: &str, size: f64, fill: &str, bold: bool) {
        let weight = if bold { "bold" } else { "normal" };
        let escaped = html_escape::encode_text(content);
        let _ = write!(
            self.body,
            r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="{size:.0}" font-weight="{weight}" fill="{fill}">{escaped}</text>"#,
        );
        self.body.push('\n');
    }

    /// Finish the document
    #[must_use]
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}
