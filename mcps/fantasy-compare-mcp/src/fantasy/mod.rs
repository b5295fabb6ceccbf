//! Fantasy basketball comparison core
//!
//! Pure and synchronous: validate two records, score them, decide winners and
//! derive dashboard data. No I/O happens below this module.

pub mod category;
pub mod compare;
pub mod dashboard;
pub mod record;
pub mod scoring;

use serde_json::Value;

pub use category::Category;
pub use compare::{compare_category, CategoryResult, CategoryTally, Outcome, OverallWinner};
pub use dashboard::{build_dashboard, DashboardData, HeadToHeadPoint, RadarPoint};
pub use record::{
    validate_pair, validate_record, Problem, RecordSlot, StatRecord, ValidationError,
    ValidationErrors,
};
pub use scoring::{overflow_errors, score, FantasyScore, ScoringWeights};

/// Validate both raw records and build the dashboard.
///
/// Nothing is scored unless both records pass validation.
pub fn compare(
    player1: &Value,
    player2: &Value,
    season: &str,
    weights: &ScoringWeights,
) -> Result<DashboardData, ValidationErrors> {
    let (first, second) = validate_pair(player1, player2)?;
    compare_records(first, second, season, weights)
}

/// Build the dashboard from typed records.
///
/// Both records are checked with [`StatRecord::check`] and must be scorable
/// under `weights`, so every number in the result is finite.
pub fn compare_records(
    first: StatRecord,
    second: StatRecord,
    season: &str,
    weights: &ScoringWeights,
) -> Result<DashboardData, ValidationErrors> {
    let mut errors = Vec::new();
    for (slot, record) in [(RecordSlot::Player1, &first), (RecordSlot::Player2, &second)] {
        match record.check(slot) {
            Ok(()) => errors.extend(scoring::overflow_errors(record, slot, weights)),
            Err(e) => errors.extend(e.into_vec()),
        }
    }

    // Each score can be finite while their difference is not.
    if errors.is_empty() {
        let margin = score(&first, weights).raw - score(&second, weights).raw;
        if !margin.is_finite() {
            for slot in [RecordSlot::Player1, RecordSlot::Player2] {
                errors.push(ValidationError {
                    record: slot,
                    field: "score",
                    problem: Problem::TooLarge,
                });
            }
        }
    }

    ValidationErrors::from_vec(errors)?;
    Ok(build_dashboard(first, second, season, weights))
}
