//! Chart-ready data for the comparison dashboard
//!
//! Everything a renderer needs is derived here: both score cards, the
//! winner banner, the category breakdown, a radar series normalized to
//! `[0, 100]` and raw head-to-head bar pairs. The renderer gets a complete
//! [`DashboardData`] or nothing.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::Category;
use super::compare::{
    category_results, overall_winner, CategoryResult, CategoryTally, OverallWinner,
};
use super::record::StatRecord;
use super::scoring::{score, FantasyScore, ScoringWeights};

/// Headroom above the larger of the two values, so the leader's point
/// sits inside the radar's outer ring.
const RADAR_HEADROOM: f64 = 1.2;

/// Key of the category label in a serialized [`HeadToHeadPoint`].
const LABEL_KEY: &str = "stat";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RadarPoint {
    pub category: Category,
    pub stat: &'static str,
    /// Normalized to `[0, 100]`
    pub player1: f64,
    pub player2: f64,
    pub player1_raw: f64,
    pub player2_raw: f64,
}

/// Normalize a pair against `max(a, b) * RADAR_HEADROOM`. Both zero maps to zero.
///
/// Divides by the max before applying the headroom so values near
/// `f64::MAX` stay finite.
///
/// # Example
/// ```
/// use fantasy_compare_mcp::fantasy::dashboard::normalize_pair;
///
/// let (a, b) = normalize_pair(6.0, 12.0);
/// assert!((b - 100.0 / 1.2).abs() < 1e-9);
/// assert!((a - 50.0 / 1.2).abs() < 1e-9);
/// ```
pub fn normalize_pair(a: f64, b: f64) -> (f64, f64) {
    let max = a.max(b);
    if max <= 0.0 {
        return (0.0, 0.0);
    }
    (
        a / max / RADAR_HEADROOM * 100.0,
        b / max / RADAR_HEADROOM * 100.0,
    )
}

/// One radar point per charted category, in chart order.
pub fn radar_series(first: &StatRecord, second: &StatRecord) -> Vec<RadarPoint> {
    Category::CHARTED
        .into_iter()
        .map(|category| {
            let (a, b) = (category.value(first), category.value(second));
            let (player1, player2) = normalize_pair(a, b);
            RadarPoint {
                category,
                stat: category.short_label(),
                player1,
                player2,
                player1_raw: a,
                player2_raw: b,
            }
        })
        .collect()
}

/// One bar pair. Serializes as `{"stat": "PTS", "<player1>": 26.4, "<player2>": 34.7}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadPoint {
    pub category: Category,
    pub stat: &'static str,
    pub series: [(String, f64); 2],
}

impl Serialize for HeadToHeadPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(LABEL_KEY, self.stat)?;
        for (name, value) in &self.series {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// `name`, suffixed with ` (n)` until it collides with neither the label key
/// nor any key in `taken`.
fn unique_key(name: &str, n: usize, taken: &[&str]) -> String {
    let mut key = name.to_string();
    while key == LABEL_KEY || taken.contains(&key.as_str()) {
        key = format!("{key} ({n})");
    }
    key
}

/// Series keys for the bar chart, one per player and distinct from the
/// `stat` label. A second player with the same name gets a ` (2)` suffix
/// so neither bar is lost.
pub fn series_keys(first: &StatRecord, second: &StatRecord) -> [String; 2] {
    let a = unique_key(&first.name, 1, &[]);
    let b = unique_key(&second.name, 2, &[a.as_str()]);
    [a, b]
}

/// One bar pair per charted category, keyed by [`series_keys`].
pub fn head_to_head_series(first: &StatRecord, second: &StatRecord) -> Vec<HeadToHeadPoint> {
    let [a, b] = series_keys(first, second);
    Category::CHARTED
        .into_iter()
        .map(|category| HeadToHeadPoint {
            category,
            stat: category.short_label(),
            series: [
                (a.clone(), category.value(first)),
                (b.clone(), category.value(second)),
            ],
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoreBoard {
    pub player1: FantasyScore,
    pub player2: FantasyScore,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DashboardData {
    pub season: String,
    pub player1: StatRecord,
    pub player2: StatRecord,
    pub scores: ScoreBoard,
    pub winner: OverallWinner,
    pub categories: Vec<CategoryResult>,
    pub tally: CategoryTally,
    pub radar: Vec<RadarPoint>,
    pub head_to_head: Vec<HeadToHeadPoint>,
    /// Series keys used in `head_to_head`, in player order
    pub series_keys: [String; 2],
}

/// Build the dashboard from two already-validated records.
pub fn build_dashboard(
    first: StatRecord,
    second: StatRecord,
    season: impl Into<String>,
    weights: &ScoringWeights,
) -> DashboardData {
    let first_score = score(&first, weights);
    let second_score = score(&second, weights);
    let winner = overall_winner(&first, &first_score, &second, &second_score);
    let categories = category_results(&first, &second);
    let tally = CategoryTally::count(&categories);

    DashboardData {
        season: season.into(),
        radar: radar_series(&first, &second),
        head_to_head: head_to_head_series(&first, &second),
        series_keys: series_keys(&first, &second),
        scores: ScoreBoard {
            player1: first_score,
            player2: second_score,
        },
        winner,
        categories,
        tally,
        player1: first,
        player2: second,
    }
}
