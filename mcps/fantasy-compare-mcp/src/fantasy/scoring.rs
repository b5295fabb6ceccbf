//! Fantasy score calculation
//!
//! The score is a weighted sum over the seven counting categories:
//!
//! ```text
//! score = ppg*1.0 + rpg*1.2 + apg*1.5 + spg*3.0 + bpg*3.0 + three_pm*1.0 - tov*1.0
//! ```
//!
//! Weights live in [`ScoringWeights`] so a league can override them from
//! config. The turnover weight is stored signed (`-1.0`), so every term is a
//! plain product.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::record::{Problem, RecordSlot, StatRecord, ValidationError};

/// Per-category weights applied by [`score`].
///
/// Deserializes with per-field defaults, so a config file that sets only
/// `spg = 2.0` keeps the standard weights for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
    pub three_pm: f64,
    pub tov: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ppg: 1.0,
            rpg: 1.2,
            apg: 1.5,
            spg: 3.0,
            bpg: 3.0,
            three_pm: 1.0,
            tov: -1.0,
        }
    }
}

impl ScoringWeights {
    /// Categories that contribute to the score, in formula order.
    pub const SCORED: [Category; 7] = [
        Category::Ppg,
        Category::Rpg,
        Category::Apg,
        Category::Spg,
        Category::Bpg,
        Category::ThreePm,
        Category::Tov,
    ];

    /// Weight for `category`, or `None` for the shooting percentages,
    /// which are displayed but never scored.
    pub fn weight(&self, category: Category) -> Option<f64> {
        match category {
            Category::Ppg => Some(self.ppg),
            Category::Rpg => Some(self.rpg),
            Category::Apg => Some(self.apg),
            Category::Spg => Some(self.spg),
            Category::Bpg => Some(self.bpg),
            Category::ThreePm => Some(self.three_pm),
            Category::Tov => Some(self.tov),
            Category::FgPct | Category::FtPct => None,
        }
    }

    /// All weights must be finite for scores to stay finite.
    pub fn non_finite(&self) -> Option<Category> {
        Self::SCORED
            .into_iter()
            .find(|&c| self.weight(c).is_some_and(|w| !w.is_finite()))
    }
}

/// Round half up to one decimal place.
///
/// Values too large to scale by ten have no fractional digits left and are
/// returned unchanged.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / 10.0
}

/// A player's fantasy score.
///
/// `raw` is what comparisons use; `rounded` and `display` are for
/// presentation only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FantasyScore {
    pub raw: f64,
    pub rounded: f64,
    pub display: String,
}

impl FantasyScore {
    fn from_raw(raw: f64) -> Self {
        let rounded = round1(raw);
        Self {
            raw,
            rounded,
            display: format!("{rounded:.1}"),
        }
    }
}

/// One term of the score formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub category: Category,
    pub value: f64,
    pub weight: f64,
    pub points: f64,
}

/// Each scored category's term of the formula, in formula order.
/// The shooting percentages are skipped.
pub fn contributions(record: &StatRecord, weights: &ScoringWeights) -> Vec<Contribution> {
    ScoringWeights::SCORED
        .into_iter()
        .filter_map(|category| {
            let weight = weights.weight(category)?;
            let value = category.value(record);
            Some(Contribution {
                category,
                value,
                weight,
                points: value * weight,
            })
        })
        .collect()
}

/// Weighted fantasy score of one record.
///
/// Assumes the record is scorable; see [`overflow_errors`].
pub fn score(record: &StatRecord, weights: &ScoringWeights) -> FantasyScore {
    let raw: f64 = contributions(record, weights).iter().map(|c| c.points).sum();
    FantasyScore::from_raw(raw)
}

/// Terms, or the total, that overflow `f64` under `weights`.
///
/// Finite stats near `f64::MAX` pass validation but cannot be scored. An
/// overflowing term is reported on its own field, an overflowing total on
/// `score`.
pub fn overflow_errors(
    record: &StatRecord,
    slot: RecordSlot,
    weights: &ScoringWeights,
) -> Vec<ValidationError> {
    let parts = contributions(record, weights);
    let mut errors: Vec<ValidationError> = parts
        .iter()
        .filter(|c| !c.points.is_finite())
        .map(|c| ValidationError {
            record: slot,
            field: c.category.key(),
            problem: Problem::TooLarge,
        })
        .collect();

    if errors.is_empty() && !parts.iter().map(|c| c.points).sum::<f64>().is_finite() {
        errors.push(ValidationError {
            record: slot,
            field: "score",
            problem: Problem::TooLarge,
        });
    }
    errors
}
