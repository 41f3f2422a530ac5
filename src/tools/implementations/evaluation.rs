// ABOUTME: Session-plan evaluation tool
// ABOUTME: Computes spatial and intensity metrics with coaching recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Evaluation Tool
//!
//! `evaluate_session_plan` parses the session payload and delegates to the
//! evaluator in `crate::intelligence`.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::constants::tools::EVALUATE_SESSION_PLAN;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{evaluate_session, ActivitySpec};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

use super::required_value;

/// Evaluate spatial and intensity metrics for a session plan
pub struct EvaluateSessionPlanTool;

#[async_trait]
impl McpTool for EvaluateSessionPlanTool {
    fn name(&self) -> &'static str {
        EVALUATE_SESSION_PLAN
    }

    fn description(&self) -> &'static str {
        "Evaluate spatial and intensity metrics for a session plan. Calculates \
         area-per-player for each activity and provides recommendations. \
         Thresholds: <20m²=very tight, 20-50=possession, 50-100=game-like, \
         100-200=transitions, >200=fitness."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "pitch_length".to_owned(),
            PropertySchema::new("number", "Pitch length in meters"),
        );
        properties.insert(
            "pitch_width".to_owned(),
            PropertySchema::new("number", "Pitch width in meters"),
        );
        properties.insert(
            "num_players".to_owned(),
            PropertySchema::new("integer", "Total number of players"),
        );
        properties.insert(
            "activities".to_owned(),
            PropertySchema::new(
                "array",
                "List of activities; each has name and optional area_length, \
                 area_width, num_players, duration_minutes, intensity",
            ),
        );
        JsonSchema::object(
            properties,
            Some(vec![
                "pitch_length".to_owned(),
                "pitch_width".to_owned(),
                "num_players".to_owned(),
                "activities".to_owned(),
            ]),
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS
    }

    async fn execute(&self, args: Value, _context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let pitch_length = required_number(&args, "pitch_length")?;
        let pitch_width = required_number(&args, "pitch_width")?;
        let num_players = required_value(&args, EVALUATE_SESSION_PLAN, "num_players")?
            .as_u64()
            .ok_or_else(|| AppError::invalid_input("num_players must be a positive integer"))?;
        let activities: Vec<ActivitySpec> =
            serde_json::from_value(required_value(&args, EVALUATE_SESSION_PLAN, "activities")?.clone())
                .map_err(|e| AppError::invalid_input(format!("invalid activities: {e}")))?;

        let evaluation = evaluate_session(
            pitch_length,
            pitch_width,
            u32::try_from(num_players)
                .map_err(|_| AppError::invalid_input("num_players out of range"))?,
            &activities,
        );
        ToolResult::from_serializable(&evaluation).map_err(AppError::from)
    }
}

fn required_number(args: &Value, key: &'static str) -> AppResult<f64> {
    required_value(args, EVALUATE_SESSION_PLAN, key)?
        .as_f64()
        .ok_or_else(|| AppError::invalid_input(format!("{key} must be a number")))
}
