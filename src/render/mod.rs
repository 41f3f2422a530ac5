// ABOUTME: Tactical diagram renderer producing SVG pitch images
// ABOUTME: Draws pitch markings, zones, markers, and action arrows from a DrillDefinition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Diagram Renderer
//!
//! Renders a [`DrillDefinition`] onto a grass pitch as a standalone SVG
//! document. Draw order matches how coaches read diagrams: zones first
//! (background), then action arrows, then markers and labels on top.
//!
//! Coordinates are in meters with the origin at the bottom-left corner of
//! the pitch; the renderer maps them into SVG pixel space. `half` and
//! `attacking_third` views draw the attacking (right) half only.

mod svg;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::constants::limits::MAX_TITLE_IN_FILENAME;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Action, ActionType, DrillDefinition, MarkerType, PitchView, PlayerMarker, Team, Zone, ZoneType,
};
use svg::SvgBuilder;

/// Pixels per meter
const SCALE: f64 = 10.0;
/// Margin around the pitch, in pixels
const MARGIN: f64 = 40.0;
/// Extra band above the pitch for the title, in pixels
const TITLE_BAND: f64 = 36.0;

const PITCH_GREEN: &str = "#3a8f3f";
const LINE_WHITE: &str = "#ffffff";

/// Default marker colors per team
const fn team_color(team: Team) -> &'static str {
    match team {
        Team::Home => "#1565C0",
        Team::Away => "#C62828",
        Team::Neutral => "#F9A825",
    }
}

/// Default stroke color and dash pattern per action type
const fn action_style(action_type: ActionType) -> (&'static str, Option<&'static str>) {
    match action_type {
        ActionType::Pass => ("#1565C0", None),
        ActionType::Run => ("#2E7D32", Some("8 5")),
        ActionType::Dribble => ("#F57F17", Some("10 4 2 4")),
        ActionType::Shot => ("#C62828", None),
        ActionType::CurvedRun => ("#6A1B9A", Some("8 5")),
    }
}

/// Pixel-space mapping for one rendered pitch
struct PitchFrame {
    /// Meter coordinate of the left edge of the drawn area
    x_min: f64,
    /// Pitch width in meters
    width_m: f64,
    /// Pitch length in meters (full pitch, even for half views)
    length_m: f64,
    /// Total SVG width in pixels
    px_width: f64,
    /// Total SVG height in pixels
    px_height: f64,
}

impl PitchFrame {
    fn new(drill: &DrillDefinition) -> Self {
        let length_m = drill.meta.pitch_length;
        let width_m = drill.meta.pitch_width;
        let (x_min, visible_length) = match drill.meta.pitch_view {
            PitchView::Full => (0.0, length_m),
            PitchView::Half | PitchView::AttackingThird => (length_m / 2.0, length_m / 2.0),
        };
        Self {
            x_min,
            width_m,
            length_m,
            px_width: visible_length * SCALE + 2.0 * MARGIN,
            px_height: width_m * SCALE + 2.0 * MARGIN + TITLE_BAND,
        }
    }

    /// Map a pitch x (meters) to SVG pixels
    fn px(&self, x: f64) -> f64 {
        MARGIN + (x - self.x_min) * SCALE
    }

    /// Map a pitch y (meters) to SVG pixels; pitch y points up, SVG y down
    fn py(&self, y: f64) -> f64 {
        TITLE_BAND + MARGIN + (self.width_m - y) * SCALE
    }
}

/// Render a drill to an SVG document string
#[must_use]
pub fn render_svg(drill: &DrillDefinition) -> String {
    let frame = PitchFrame::new(drill);
    let mut doc = SvgBuilder::new(frame.px_width, frame.px_height);

    draw_pitch(&mut doc, &frame, drill.meta.pitch_view);
    doc.text(
        frame.px_width / 2.0,
        TITLE_BAND * 0.7,
        &drill.meta.title,
        20.0,
        "#212121",
        true,
    );

    for zone in &drill.zones {
        draw_zone(&mut doc, &frame, zone);
    }

    let elements_by_id: HashMap<&str, &PlayerMarker> = drill
        .elements
        .iter()
        .map(|e| (e.id.as_str(), e))
        .collect();

    for action in &drill.actions {
        draw_action(&mut doc, &frame, action, &elements_by_id);
    }

    for element in &drill.elements {
        draw_marker(&mut doc, &frame, element);
    }

    doc.finish()
}

/// Render a drill and write it under `output_dir` with a timestamped name.
///
/// # Errors
///
/// Returns an I/O error when the output directory cannot be created or the
/// file cannot be written.
pub fn render(drill: &DrillDefinition, output_dir: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(AppError::from)?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let safe_title: String = drill
        .meta
        .title
        .replace(' ', "_")
        .chars()
        .take(MAX_TITLE_IN_FILENAME)
        .collect();
    let path = output_dir.join(format!("{safe_title}_{timestamp}.svg"));
    render_to_file(drill, &path)?;
    Ok(path)
}

/// Render a drill and write it to an explicit path.
///
/// # Errors
///
/// Returns an I/O error when the file cannot be written.
pub fn render_to_file(drill: &DrillDefinition, path: &Path) -> AppResult<()> {
    let document = render_svg(drill);
    fs::write(path, document).map_err(AppError::from)?;
    debug!(path = %path.display(), "rendered tactical diagram");
    Ok(())
}

/// Grass, outline, and standard markings for the selected view
fn draw_pitch(doc: &mut SvgBuilder, frame: &PitchFrame, view: PitchView) {
    let length = frame.length_m;
    let width = frame.width_m;
    let half = !matches!(view, PitchView::Full);
    let left = if half { length / 2.0 } else { 0.0 };

    // Grass background over the whole canvas
    doc.rect(
        0.0,
        0.0,
        frame.px_width,
        frame.px_height,
        PITCH_GREEN,
        1.0,
        None,
        0.0,
    );

    // Outline
    doc.rect(
        frame.px(left),
        frame.py(width),
        (length - left) * SCALE,
        width * SCALE,
        "none",
        0.0,
        Some((LINE_WHITE, 2.0)),
        0.0,
    );

    // Halfway line and center circle
    doc.line(
        frame.px(length / 2.0),
        frame.py(0.0),
        frame.px(length / 2.0),
        frame.py(width),
        LINE_WHITE,
        2.0,
        None,
    );
    doc.circle(
        frame.px(length / 2.0),
        frame.py(width / 2.0),
        9.15 * SCALE,
        "none",
        0.0,
        Some((LINE_WHITE, 2.0)),
    );
    doc.circle(
        frame.px(length / 2.0),
        frame.py(width / 2.0),
        2.0,
        LINE_WHITE,
        1.0,
        None,
    );

    // Penalty and goal areas; the left end is only drawn on the full view
    if !half {
        draw_end_markings(doc, frame, 0.0, 1.0, width);
    }
    draw_end_markings(doc, frame, length, -1.0, width);
}

/// Penalty area, goal area, and penalty spot for one end of the pitch
fn draw_end_markings(doc: &mut SvgBuilder, frame: &PitchFrame, edge: f64, dir: f64, width: f64) {
    // Penalty area: 16.5m deep, 40.32m wide
    draw_area_box(doc, frame, edge, dir, 16.5, 40.32, width);
    // Goal area: 5.5m deep, 18.32m wide
    draw_area_box(doc, frame, edge, dir, 5.5, 18.32, width);
    // Penalty spot at 11m
    doc.circle(
        frame.px(edge + dir * 11.0),
        frame.py(width / 2.0),
        2.0,
        LINE_WHITE,
        1.0,
        None,
    );
}

fn draw_area_box(
    doc: &mut SvgBuilder,
    frame: &PitchFrame,
    edge: f64,
    dir: f64,
    depth: f64,
    box_width: f64,
    pitch_width: f64,
) {
    let y_low = (pitch_width - box_width) / 2.0;
    let x_left = if dir > 0.0 { edge } else { edge - depth };
    doc.rect(
        frame.px(x_left),
        frame.py(y_low + box_width),
        depth * SCALE,
        box_width * SCALE,
        "none",
        0.0,
        Some((LINE_WHITE, 2.0)),
        0.0,
    );
}

fn draw_zone(doc: &mut SvgBuilder, frame: &PitchFrame, zone: &Zone) {
    match zone.zone_type {
        ZoneType::Rect => {
            let (Some(w), Some(h)) = (zone.width, zone.height) else {
                return;
            };
            doc.rect(
                frame.px(zone.x),
                frame.py(zone.y + h),
                w * SCALE,
                h * SCALE,
                &zone.color,
                zone.alpha,
                None,
                8.0,
            );
            if let Some(label) = &zone.label {
                doc.text(
                    frame.px(zone.x + w / 2.0),
                    frame.py(zone.y + h / 2.0),
                    label,
                    11.0,
                    LINE_WHITE,
                    true,
                );
            }
        }
        ZoneType::Circle => {
            let Some(r) = zone.radius else {
                return;
            };
            doc.circle(
                frame.px(zone.x),
                frame.py(zone.y),
                r * SCALE,
                &zone.color,
                zone.alpha,
                None,
            );
            if let Some(label) = &zone.label {
                doc.text(
                    frame.px(zone.x),
                    frame.py(zone.y),
                    label,
                    11.0,
                    LINE_WHITE,
                    true,
                );
            }
        }
    }
}

fn draw_marker(doc: &mut SvgBuilder, frame: &PitchFrame, element: &PlayerMarker) {
    let color = element
        .color
        .clone()
        .unwrap_or_else(|| team_color(element.team).to_owned());
    let cx = frame.px(element.x);
    let cy = frame.py(element.y);

    match element.marker {
        MarkerType::Jersey => {
            doc.circle(cx, cy, 9.0, &color, 1.0, Some((LINE_WHITE, 1.5)));
        }
        MarkerType::Cone => {
            doc.polygon(
                &[(cx, cy - 7.0), (cx - 6.0, cy + 5.0), (cx + 6.0, cy + 5.0)],
                &color,
            );
        }
        MarkerType::Ball => {
            doc.circle(cx, cy, 5.0, LINE_WHITE, 1.0, Some(("#212121", 1.5)));
        }
        MarkerType::Dot => {
            doc.circle(cx, cy, 3.0, &color, 1.0, None);
        }
    }

    if let Some(label) = &element.label {
        doc.text(cx, cy - 13.0, label, 11.0, LINE_WHITE, true);
    }
}

fn draw_action(
    doc: &mut SvgBuilder,
    frame: &PitchFrame,
    action: &Action,
    elements_by_id: &HashMap<&str, &PlayerMarker>,
) {
    let Some(source) = elements_by_id.get(action.from_id.as_str()) else {
        return;
    };
    let Some((to_x, to_y)) = resolve_target(action, elements_by_id) else {
        return;
    };

    let (default_color, dash) = action_style(action.action_type);
    let color = action.color.as_deref().unwrap_or(default_color);

    let (x1, y1) = (frame.px(source.x), frame.py(source.y));
    let (x2, y2) = (frame.px(to_x), frame.py(to_y));

    if action.action_type == ActionType::CurvedRun {
        // Control point perpendicular to the chord, mirroring an arc bend
        let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
        let (dx, dy) = (x2 - x1, y2 - y1);
        let (cx, cy) = (mx - dy * 0.3, my + dx * 0.3);
        doc.quad_path(x1, y1, cx, cy, x2, y2, color, 2.0, dash);
        draw_arrowhead(doc, cx, cy, x2, y2, color);
    } else {
        doc.line(x1, y1, x2, y2, color, 2.0, dash);
        draw_arrowhead(doc, x1, y1, x2, y2, color);
    }

    if let Some(label) = &action.label {
        doc.text((x1 + x2) / 2.0, (y1 + y2) / 2.0 - 4.0, label, 10.0, color, false);
    }
}

/// Arrowhead at `(x2, y2)`, oriented along the incoming direction
fn draw_arrowhead(doc: &mut SvgBuilder, from_x: f64, from_y: f64, x2: f64, y2: f64, color: &str) {
    let (dx, dy) = (x2 - from_x, y2 - from_y);
    let len = dx.hypot(dy);
    if len < f64::EPSILON {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let size = 8.0;
    let base_x = x2 - ux * size;
    let base_y = y2 - uy * size;
    let (px, py) = (-uy, ux);
    doc.polygon(
        &[
            (x2, y2),
            (base_x + px * size / 2.0, base_y + py * size / 2.0),
            (base_x - px * size / 2.0, base_y - py * size / 2.0),
        ],
        color,
    );
}

fn resolve_target(
    action: &Action,
    elements_by_id: &HashMap<&str, &PlayerMarker>,
) -> Option<(f64, f64)> {
    if let Some(to_id) = &action.to_id {
        if let Some(target) = elements_by_id.get(to_id.as_str()) {
            return Some((target.x, target.y));
        }
    }
    match (action.to_x, action.to_y) {
        (Some(x), Some(y)) => Some((x, y)),
        _ => None,
    }
}
