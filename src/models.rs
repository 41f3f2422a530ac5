// ABOUTME: Domain models for drill definitions and document sections
// ABOUTME: Strongly-typed schema validated at the protocol boundary before core logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Domain Models
//!
//! Typed definitions for tactical drills and document sections. All
//! protocol input is deserialized into these types at the tool boundary;
//! free-form JSON never reaches the renderer or the document builders.

use serde::{Deserialize, Serialize};

/// Which part of the pitch a diagram shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchView {
    /// The whole pitch
    #[default]
    Full,
    /// One half of the pitch
    Half,
    /// The attacking third (drawn as a half pitch)
    AttackingThird,
}

/// Team a marker belongs to, selecting its default color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// The coached team
    #[default]
    Home,
    /// Opposition players
    Away,
    /// Neutral players (e.g. floaters in a rondo)
    Neutral,
}

/// Visual marker shape for a pitch element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerType {
    /// A player, drawn as a filled jersey circle
    #[default]
    Jersey,
    /// A training cone
    Cone,
    /// The ball
    Ball,
    /// A plain dot
    Dot,
}

/// Kind of movement or ball action an arrow represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// A pass (solid line)
    Pass,
    /// An off-ball run (dashed line)
    Run,
    /// A dribble (dash-dot line)
    Dribble,
    /// A shot (solid line, shot color)
    Shot,
    /// A curved off-ball run (dashed arc)
    CurvedRun,
}

/// Shape of a highlighted zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    /// Axis-aligned rectangle
    Rect,
    /// Circle
    Circle,
}

/// Diagram metadata: title, view, and pitch dimensions in meters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Diagram title, drawn above the pitch
    pub title: String,
    /// Which part of the pitch to show
    #[serde(default)]
    pub pitch_view: PitchView,
    /// Pitch length in meters
    #[serde(default = "default_pitch_length")]
    pub pitch_length: f64,
    /// Pitch width in meters
    #[serde(default = "default_pitch_width")]
    pub pitch_width: f64,
}

fn default_pitch_length() -> f64 {
    105.0
}

fn default_pitch_width() -> f64 {
    68.0
}

/// A player, cone, ball, or dot placed on the pitch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMarker {
    /// Identifier actions reference as source/target
    pub id: String,
    /// Position along the pitch length, in meters
    pub x: f64,
    /// Position along the pitch width, in meters
    pub y: f64,
    /// Team, selecting the default color
    #[serde(default)]
    pub team: Team,
    /// Optional label drawn above the marker
    #[serde(default)]
    pub label: Option<String>,
    /// Marker shape
    #[serde(default)]
    pub marker: MarkerType,
    /// Explicit color overriding the team default
    #[serde(default)]
    pub color: Option<String>,
}

/// A movement or ball action between elements or to a free position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Kind of action
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// Identifier of the source element
    pub from_id: String,
    /// Identifier of the target element, if the arrow ends at one
    #[serde(default)]
    pub to_id: Option<String>,
    /// Explicit target x, used when `to_id` is absent
    #[serde(default)]
    pub to_x: Option<f64>,
    /// Explicit target y, used when `to_id` is absent
    #[serde(default)]
    pub to_y: Option<f64>,
    /// Explicit color overriding the action-type default
    #[serde(default)]
    pub color: Option<String>,
    /// Optional label drawn at the arrow midpoint
    #[serde(default)]
    pub label: Option<String>,
}

/// A highlighted area of the pitch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone shape
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Rect: left edge; circle: center x (meters)
    pub x: f64,
    /// Rect: bottom edge; circle: center y (meters)
    pub y: f64,
    /// Rect width in meters
    #[serde(default)]
    pub width: Option<f64>,
    /// Rect height in meters
    #[serde(default)]
    pub height: Option<f64>,
    /// Circle radius in meters
    #[serde(default)]
    pub radius: Option<f64>,
    /// Fill color
    #[serde(default = "default_zone_color")]
    pub color: String,
    /// Fill opacity, 0.0-1.0
    #[serde(default = "default_zone_alpha")]
    pub alpha: f64,
    /// Optional label drawn at the zone center
    #[serde(default)]
    pub label: Option<String>,
}

fn default_zone_color() -> String {
    "#2196F3".to_owned()
}

fn default_zone_alpha() -> f64 {
    0.2
}

/// A complete drill definition: metadata plus pitch contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillDefinition {
    /// Title, view, and pitch dimensions
    pub meta: Meta,
    /// Players, cones, balls, and dots
    #[serde(default)]
    pub elements: Vec<PlayerMarker>,
    /// Movement and ball-action arrows
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Highlighted areas, drawn behind everything else
    #[serde(default)]
    pub zones: Vec<Zone>,
}

/// One section of a compiled document.
///
/// Deserialized from the wire shape `{"type": ..., "content": ...}` into a
/// tagged union at the protocol boundary; invalid variants are rejected
/// before any document building starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Markdown text rendered into the document flow
    Markdown {
        /// The markdown source
        content: String,
    },
    /// An image embedded into the document
    Image {
        /// Path to the image file
        content: String,
        /// Optional caption below the image
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}
