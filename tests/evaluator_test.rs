// ABOUTME: Tests for session-plan evaluation metrics
// ABOUTME: Covers category thresholds, fallbacks, and recommendation triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use coachkit_mcp_server::intelligence::{
    evaluate_activity, evaluate_session, ActivityInput, ActivitySpec, Intensity, SpaceCategory,
};

fn activity(name: &str, length: f64, width: f64, players: u32) -> ActivityInput {
    ActivityInput {
        name: name.to_owned(),
        area_length: length,
        area_width: width,
        num_players: players,
        duration_minutes: 10.0,
        intensity: None,
    }
}

fn spec(name: &str, length: f64, width: f64, players: u32, intensity: Option<Intensity>) -> ActivitySpec {
    ActivitySpec {
        name: name.to_owned(),
        area_length: Some(length),
        area_width: Some(width),
        num_players: Some(players),
        duration_minutes: None,
        intensity,
    }
}

#[test]
fn test_tight_space() {
    let metrics = evaluate_activity(&activity("1v1", 10.0, 10.0, 8));
    assert_eq!(metrics.area_per_player, 12.5);
    assert_eq!(metrics.category, SpaceCategory::VeryTight);
}

#[test]
fn test_possession_space() {
    let metrics = evaluate_activity(&activity("Rondo", 20.0, 15.0, 8));
    assert!(metrics.area_per_player >= 20.0 && metrics.area_per_player < 50.0);
    assert_eq!(metrics.category, SpaceCategory::Possession);
}

#[test]
fn test_game_like_space() {
    let metrics = evaluate_activity(&activity("SSG", 40.0, 30.0, 16));
    assert!(metrics.area_per_player >= 50.0 && metrics.area_per_player < 100.0);
    assert_eq!(metrics.category, SpaceCategory::GameLike);
}

#[test]
fn test_fitness_space() {
    let metrics = evaluate_activity(&activity("Sprints", 105.0, 68.0, 10));
    assert_eq!(metrics.category, SpaceCategory::Fitness);
}

#[test]
fn test_zero_players_does_not_divide_by_zero() {
    let metrics = evaluate_activity(&activity("Empty", 30.0, 20.0, 0));
    assert_eq!(metrics.area_per_player, 600.0);
}

#[test]
fn test_cramped_recommendation() {
    let metrics = evaluate_activity(&activity("Tight", 5.0, 5.0, 10));
    assert!(metrics
        .recommendations
        .iter()
        .any(|r| r.to_lowercase().contains("cramped") || r.to_lowercase().contains("enlarg")));
}

#[test]
fn test_spacious_recommendation() {
    let metrics = evaluate_activity(&activity("Open play", 105.0, 68.0, 8));
    assert!(metrics
        .recommendations
        .iter()
        .any(|r| r.contains("spacious")));
}

#[test]
fn test_long_tight_bout_recommendation() {
    let mut tight = activity("Grind", 10.0, 10.0, 8);
    tight.duration_minutes = 25.0;
    let metrics = evaluate_activity(&tight);
    assert!(metrics
        .recommendations
        .iter()
        .any(|r| r.contains("shorter bouts")));
}

#[test]
fn test_session_evaluation() {
    let evaluation = evaluate_session(
        105.0,
        68.0,
        16,
        &[
            spec("Warm-up Rondo", 15.0, 15.0, 6, Some(Intensity::Low)),
            spec("Passing Drill", 30.0, 20.0, 12, Some(Intensity::Medium)),
            spec("Match", 60.0, 44.0, 16, Some(Intensity::High)),
        ],
    );
    assert_eq!(evaluation.activities.len(), 3);
    assert_eq!(evaluation.intensity_profile.len(), 3);
    assert_eq!(evaluation.activities[0].category, SpaceCategory::Possession);
    assert!(evaluation.intensity_profile[0].contains("low intensity"));
}

#[test]
fn test_session_defaults_to_pitch_dimensions() {
    let evaluation = evaluate_session(
        105.0,
        68.0,
        16,
        &[ActivitySpec {
            name: "Full pitch game".to_owned(),
            area_length: None,
            area_width: None,
            num_players: None,
            duration_minutes: None,
            intensity: None,
        }],
    );
    assert_eq!(evaluation.activities[0].area_sqm, 105.0 * 68.0);
}

#[test]
fn test_uniform_spacing_overall_recommendation() {
    let evaluation = evaluate_session(
        105.0,
        68.0,
        10,
        &[
            spec("A", 20.0, 15.0, 8, None),
            spec("B", 22.0, 15.0, 8, None),
        ],
    );
    assert!(evaluation
        .overall_recommendations
        .iter()
        .any(|r| r.contains("similar spacing")));
}

#[test]
fn test_all_high_intensity_overall_recommendation() {
    let evaluation = evaluate_session(
        105.0,
        68.0,
        10,
        &[
            spec("A", 20.0, 15.0, 8, Some(Intensity::High)),
            spec("B", 60.0, 40.0, 8, Some(Intensity::High)),
        ],
    );
    assert!(evaluation
        .overall_recommendations
        .iter()
        .any(|r| r.contains("high intensity")));
}

#[test]
fn test_mixed_intensity_no_load_warning() {
    let evaluation = evaluate_session(
        105.0,
        68.0,
        10,
        &[
            spec("A", 20.0, 15.0, 8, Some(Intensity::High)),
            spec("B", 60.0, 40.0, 8, Some(Intensity::Low)),
        ],
    );
    assert!(!evaluation
        .overall_recommendations
        .iter()
        .any(|r| r.contains("high intensity")));
}
