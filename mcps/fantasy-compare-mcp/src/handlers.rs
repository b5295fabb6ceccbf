//! Tool handlers
//!
//! Handlers are thin: they resolve defaults from [`Config`], call into the
//! pure [`crate::fantasy`] core and shape the response.

use mcp_common::{invalid_params_with, json_success, CallToolResult, McpError};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::fantasy::{
    self,
    scoring::{overflow_errors, Contribution},
    validate_record, DashboardData, FantasyScore, RecordSlot, ScoringWeights, StatRecord,
    ValidationErrors,
};
use crate::params::*;

/// Content type the host uses to pick a rendering surface for the artifact.
pub const ARTIFACT_CONTENT_TYPE: &str = "application/vnd.ant.react";

/// What `compare_players` returns: dashboard data plus rendering metadata.
#[derive(Debug, Serialize)]
pub struct ComparisonArtifact {
    pub content_type: &'static str,
    pub title: String,
    pub data: DashboardData,
}

impl ComparisonArtifact {
    pub fn new(data: DashboardData) -> Self {
        Self {
            content_type: ARTIFACT_CONTENT_TYPE,
            title: format!("{} vs {} Fantasy Comparison", data.player1.name, data.player2.name),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerScoreReport {
    pub player: StatRecord,
    pub score: FantasyScore,
    pub breakdown: Vec<Contribution>,
}

#[derive(Debug, Serialize)]
pub struct WeightsReport {
    pub default_season: String,
    pub weights: ScoringWeights,
    pub formula: String,
}

fn validation_to_mcp(errors: ValidationErrors) -> McpError {
    tracing::warn!(errors = %errors, "Rejected player stats");
    let data = serde_json::to_value(&errors).unwrap_or(Value::Null);
    invalid_params_with(format!("Invalid player stats: {errors}"), data)
}

/// Human-readable form of the active formula, e.g.
/// `1*ppg + 1.2*rpg + ... - 1*tov`.
pub fn formula(weights: &ScoringWeights) -> String {
    let mut out = String::new();
    for (i, category) in ScoringWeights::SCORED.into_iter().enumerate() {
        let Some(weight) = weights.weight(category) else {
            continue;
        };
        let sign = if weight < 0.0 { '-' } else { '+' };
        if i == 0 {
            if weight < 0.0 {
                out.push('-');
            }
        } else {
            out.push(' ');
            out.push(sign);
            out.push(' ');
        }
        out.push_str(&format!("{}*{}", weight.abs(), category.key()));
    }
    out
}

/// Pick the request's season, falling back to the configured default.
fn resolve_season(requested: Option<String>, config: &Config) -> String {
    requested
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| config.season.default.clone())
}

/// Validate both records and return the dashboard as a [`ComparisonArtifact`].
///
/// A blank or absent season falls back to the configured default.
pub fn compare_players(
    config: &Config,
    params: ComparePlayersParams,
) -> Result<CallToolResult, McpError> {
    let season = resolve_season(params.season, config);

    let data = fantasy::compare(&params.player1, &params.player2, &season, &config.weights)
        .map_err(validation_to_mcp)?;

    tracing::info!(
        season = %data.season,
        player1 = %data.player1.name,
        player2 = %data.player2.name,
        score1 = %data.scores.player1.display,
        score2 = %data.scores.player2.display,
        winner = ?data.winner.outcome,
        "Compared players"
    );

    json_success(&ComparisonArtifact::new(data))
}

/// Score one record and list each weighted term.
///
/// Problems are reported under the `player1` slot.
pub fn score_player(
    config: &Config,
    params: ScorePlayerParams,
) -> Result<CallToolResult, McpError> {
    let player = validate_record(RecordSlot::Player1, &params.player).map_err(validation_to_mcp)?;
    ValidationErrors::from_vec(overflow_errors(&player, RecordSlot::Player1, &config.weights))
        .map_err(validation_to_mcp)?;
    let score = fantasy::score(&player, &config.weights);

    tracing::debug!(player = %player.name, score = %score.display, "Scored player");

    json_success(&PlayerScoreReport {
        breakdown: fantasy::scoring::contributions(&player, &config.weights),
        score,
        player,
    })
}

/// Report the active weights, the default season, and the formula they give.
pub fn get_scoring_weights(config: &Config) -> Result<CallToolResult, McpError> {
    json_success(&WeightsReport {
        default_season: config.season.default.clone(),
        weights: config.weights,
        formula: formula(&config.weights),
    })
}
