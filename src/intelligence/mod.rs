// ABOUTME: Session-plan evaluation: spatial density metrics and recommendations
// ABOUTME: Categorizes area-per-player against coaching thresholds per activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Session Evaluation
//!
//! Computes area-per-player for every activity in a session plan,
//! categorizes each against coaching spacing thresholds, and produces
//! per-activity and session-level recommendations plus an intensity
//! profile. Activity fields left out of the request fall back to the
//! session-level pitch dimensions and player count.

use serde::{Deserialize, Serialize};

/// Spacing category for an activity, by area per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceCategory {
    /// Under 20 m²/player
    VeryTight,
    /// 20-50 m²/player
    Possession,
    /// 50-100 m²/player
    GameLike,
    /// 100-200 m²/player
    Transitions,
    /// Over 200 m²/player
    Fitness,
}

impl SpaceCategory {
    /// Coaching description of what the spacing suits
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::VeryTight => "Very Tight — suited for 1v1/close-quarters technique drills",
            Self::Possession => "Possession — good for rondos, small-sided possession games",
            Self::GameLike => "Game-Like — realistic match spacing, SSGs",
            Self::Transitions => "Transitions — good for counter-attacks, transition exercises",
            Self::Fitness => {
                "Fitness/Open — large area, consider if players need more constraint"
            }
        }
    }
}

/// Upper bounds (exclusive) for each spacing category, in m² per player
const THRESHOLDS: [(f64, SpaceCategory); 5] = [
    (20.0, SpaceCategory::VeryTight),
    (50.0, SpaceCategory::Possession),
    (100.0, SpaceCategory::GameLike),
    (200.0, SpaceCategory::Transitions),
    (f64::INFINITY, SpaceCategory::Fitness),
];

/// Reported activity intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Recovery / technical work
    Low,
    /// Standard training intensity
    Medium,
    /// Match-level or above
    High,
}

impl Intensity {
    const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One activity as received on the wire; unset fields default to
/// session-level values
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySpec {
    /// Activity name
    pub name: String,
    /// Playing-area length in meters
    #[serde(default)]
    pub area_length: Option<f64>,
    /// Playing-area width in meters
    #[serde(default)]
    pub area_width: Option<f64>,
    /// Players taking part
    #[serde(default)]
    pub num_players: Option<u32>,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    /// Reported intensity
    #[serde(default)]
    pub intensity: Option<Intensity>,
}

/// A fully-resolved activity ready for evaluation
#[derive(Debug, Clone)]
pub struct ActivityInput {
    /// Activity name
    pub name: String,
    /// Playing-area length in meters
    pub area_length: f64,
    /// Playing-area width in meters
    pub area_width: f64,
    /// Players taking part
    pub num_players: u32,
    /// Planned duration in minutes
    pub duration_minutes: f64,
    /// Reported intensity, if any
    pub intensity: Option<Intensity>,
}

/// Computed metrics for one activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// Activity name
    pub name: String,
    /// Playing area in m²
    pub area_sqm: f64,
    /// Area per player in m²
    pub area_per_player: f64,
    /// Spacing category
    pub category: SpaceCategory,
    /// Coaching description of the category
    pub category_description: String,
    /// Per-activity recommendations, empty when spacing is sound
    pub recommendations: Vec<String>,
}

/// Evaluation of a whole session plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvaluation {
    /// Per-activity metrics, in plan order
    pub activities: Vec<ActivityMetrics>,
    /// Session-level recommendations
    pub overall_recommendations: Vec<String>,
    /// One intensity summary line per activity
    pub intensity_profile: Vec<String>,
}

fn categorize(area_per_player: f64) -> SpaceCategory {
    for (threshold, category) in THRESHOLDS {
        if area_per_player < threshold {
            return category;
        }
    }
    SpaceCategory::Fitness
}

fn recommend(activity: &ActivityInput, area_per_player: f64, category: SpaceCategory) -> Vec<String> {
    let mut recs = Vec::new();
    if area_per_player < 15.0 {
        recs.push(format!(
            "Very cramped ({area_per_player:.0}m²/player). \
             Consider enlarging the area or reducing player count."
        ));
    }
    if area_per_player > 250.0 {
        recs.push(format!(
            "Very spacious ({area_per_player:.0}m²/player). \
             Consider shrinking the area to increase engagement."
        ));
    }
    if activity.duration_minutes > 20.0 && category == SpaceCategory::VeryTight {
        recs.push(
            "Long duration in a tight space may cause fatigue and reduce quality. \
             Consider splitting into shorter bouts."
                .to_owned(),
        );
    }
    recs
}

/// Evaluate one activity
#[must_use]
pub fn evaluate_activity(activity: &ActivityInput) -> ActivityMetrics {
    let area = activity.area_length * activity.area_width;
    let area_per_player = area / f64::from(activity.num_players.max(1));
    let category = categorize(area_per_player);
    let recommendations = recommend(activity, area_per_player, category);
    ActivityMetrics {
        name: activity.name.clone(),
        area_sqm: area,
        area_per_player,
        category,
        category_description: category.description().to_owned(),
        recommendations,
    }
}

/// Evaluate a whole session plan.
///
/// Activity fields that were omitted on the wire fall back to the
/// session-level pitch dimensions and player count.
#[must_use]
pub fn evaluate_session(
    pitch_length: f64,
    pitch_width: f64,
    num_players: u32,
    activities: &[ActivitySpec],
) -> SessionEvaluation {
    let mut results = Vec::with_capacity(activities.len());
    let mut intensity_profile = Vec::with_capacity(activities.len());

    for spec in activities {
        let activity = ActivityInput {
            name: spec.name.clone(),
            area_length: spec.area_length.unwrap_or(pitch_length),
            area_width: spec.area_width.unwrap_or(pitch_width),
            num_players: spec.num_players.unwrap_or(num_players),
            duration_minutes: spec.duration_minutes.unwrap_or(10.0),
            intensity: spec.intensity,
        };
        let metrics = evaluate_activity(&activity);
        intensity_profile.push(format!(
            "{}: {} intensity, {}min, {}",
            activity.name,
            activity.intensity.unwrap_or(Intensity::Medium).label(),
            activity.duration_minutes,
            serde_variant_name(metrics.category),
        ));
        results.push(metrics);
    }

    let mut overall = Vec::new();
    let first_category = results.first().map(|r| r.category);
    if let Some(category) = first_category {
        if results.iter().all(|r| r.category == category) && !results.is_empty() {
            overall.push(
                "All activities use similar spacing. Consider varying area sizes \
                 to challenge players differently."
                    .to_owned(),
            );
        }
    }
    let reported: Vec<Intensity> = activities.iter().filter_map(|a| a.intensity).collect();
    if !reported.is_empty() && reported.iter().all(|i| *i == Intensity::High) {
        overall.push(
            "All activities are high intensity. Include recovery or technical \
             activities to manage load."
                .to_owned(),
        );
    }

    SessionEvaluation {
        activities: results,
        overall_recommendations: overall,
        intensity_profile,
    }
}

/// Snake-case name of a category, matching its serde representation
fn serde_variant_name(category: SpaceCategory) -> &'static str {
    match category {
        SpaceCategory::VeryTight => "very_tight",
        SpaceCategory::Possession => "possession",
        SpaceCategory::GameLike => "game_like",
        SpaceCategory::Transitions => "transitions",
        SpaceCategory::Fitness => "fitness",
    }
}
