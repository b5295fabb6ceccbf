//! Parameter types for Fantasy Compare MCP tools
//!
//! Player records are taken as raw JSON so that a missing or malformed stat
//! is reported per record and field by the validator, instead of failing
//! deserialization as a whole. An absent record becomes `null` and is
//! reported as missing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ComparePlayersParams {
    #[schemars(
        description = "First player's per-game stats: name, ppg, rpg, apg, spg, bpg, fg_pct, ft_pct, three_pm, tov, gp (required); team, position (optional). Percentages are 0-100."
    )]
    #[serde(default)]
    pub player1: Value,

    #[schemars(description = "Second player's per-game stats, same shape as player1")]
    #[serde(default)]
    pub player2: Value,

    #[schemars(description = "Season label, e.g. \"2024-25\" (optional, defaults to the configured season)")]
    #[serde(default)]
    pub season: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ScorePlayerParams {
    #[schemars(
        description = "Player per-game stats: name, ppg, rpg, apg, spg, bpg, fg_pct, ft_pct, three_pm, tov, gp"
    )]
    #[serde(default)]
    pub player: Value,
}
