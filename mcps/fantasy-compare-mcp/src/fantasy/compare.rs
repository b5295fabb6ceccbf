//! Category and overall winners

use serde::Serialize;

use super::category::Category;
use super::record::StatRecord;
use super::scoring::{round1, FantasyScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    First,
    Second,
    Tie,
}

fn better(a: f64, b: f64, lower_is_better: bool) -> Outcome {
    let (a, b) = if lower_is_better { (b, a) } else { (a, b) };
    if a > b {
        Outcome::First
    } else if b > a {
        Outcome::Second
    } else {
        Outcome::Tie
    }
}

/// Which side wins one category. Turnovers go to the lower value.
pub fn compare_category(category: Category, first: &StatRecord, second: &StatRecord) -> Outcome {
    better(
        category.value(first),
        category.value(second),
        category.lower_is_better(),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    pub label: &'static str,
    pub player1: f64,
    pub player2: f64,
    pub winner: Outcome,
}

/// One result per display category, in display order.
/// Results for all nine display categories, in display order.
pub fn category_results(first: &StatRecord, second: &StatRecord) -> Vec<CategoryResult> {
    Category::DISPLAY
        .into_iter()
        .map(|category| CategoryResult {
            category,
            label: category.label(),
            player1: category.value(first),
            player2: category.value(second),
            winner: compare_category(category, first, second),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub player1: usize,
    pub player2: usize,
    pub ties: usize,
}

impl CategoryTally {
    pub fn count(results: &[CategoryResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut tally, r| {
                match r.winner {
                    Outcome::First => tally.player1 += 1,
                    Outcome::Second => tally.player2 += 1,
                    Outcome::Tie => tally.ties += 1,
                }
                tally
            })
    }
}

/// Winner banner. Decided on score alone, whatever the category tally says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallWinner {
    pub outcome: Outcome,
    /// Winning player's name; `None` on an exact tie
    pub name: Option<String>,
    /// Absolute score difference, rounded to one decimal
    pub margin: f64,
}

/// Compare unrounded scores. An exact tie is reported as [`Outcome::Tie`]
/// rather than credited to the first player.
pub fn overall_winner(
    first: &StatRecord,
    first_score: &FantasyScore,
    second: &StatRecord,
    second_score: &FantasyScore,
) -> OverallWinner {
    let outcome = better(first_score.raw, second_score.raw, false);
    let name = match outcome {
        Outcome::First => Some(first.name.clone()),
        Outcome::Second => Some(second.name.clone()),
        Outcome::Tie => None,
    };
    OverallWinner {
        outcome,
        name,
        margin: round1((first_score.raw - second_score.raw).abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fantasy::record::tests::{embiid, jokic};
    use crate::fantasy::scoring::{score, ScoringWeights};

    #[test]
    fn test_fewer_turnovers_win() {
        // 3.0 vs 3.4
        assert_eq!(
            compare_category(Category::Tov, &jokic(), &embiid()),
            Outcome::First
        );
        assert_eq!(
            compare_category(Category::Tov, &embiid(), &jokic()),
            Outcome::Second
        );
    }

    #[test]
    fn test_higher_wins_elsewhere() {
        let (j, e) = (jokic(), embiid());
        assert_eq!(compare_category(Category::Ppg, &j, &e), Outcome::Second);
        assert_eq!(compare_category(Category::Rpg, &j, &e), Outcome::First);
        assert_eq!(compare_category(Category::FtPct, &j, &e), Outcome::Second);
    }

    #[test]
    fn test_equal_values_tie() {
        let j = jokic();
        let mut other = embiid();
        other.ppg = j.ppg;
        other.tov = j.tov;
        assert_eq!(compare_category(Category::Ppg, &j, &other), Outcome::Tie);
        assert_eq!(compare_category(Category::Tov, &j, &other), Outcome::Tie);
    }

    #[test]
    fn test_tally_for_jokic_vs_embiid() {
        let results = category_results(&jokic(), &embiid());
        assert_eq!(results.len(), 9);

        let jokic_wins: Vec<_> = results
            .iter()
            .filter(|r| r.winner == Outcome::First)
            .map(|r| r.category)
            .collect();
        assert_eq!(
            jokic_wins,
            vec![Category::Rpg, Category::Apg, Category::Spg, Category::FgPct, Category::Tov]
        );

        let tally = CategoryTally::count(&results);
        assert_eq!(
            tally,
            CategoryTally {
                player1: 5,
                player2: 4,
                ties: 0
            }
        );
    }

    #[test]
    fn test_overall_winner_is_score_based() {
        let weights = ScoringWeights::default();
        let (j, e) = (jokic(), embiid());
        let (js, es) = (score(&j, &weights), score(&e, &weights));

        let winner = overall_winner(&j, &js, &e, &es);
        assert_eq!(winner.outcome, Outcome::Second);
        assert_eq!(winner.name.as_deref(), Some("Joel Embiid"));
        assert!((winner.margin - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_exact_score_tie_is_not_a_win() {
        let weights = ScoringWeights::default();
        let j = jokic();
        let mut twin = j.clone();
        twin.name = "Nikola Jokic (2023-24)".to_string();
        let s = score(&j, &weights);

        let winner = overall_winner(&j, &s, &twin, &score(&twin, &weights));
        assert_eq!(winner.outcome, Outcome::Tie);
        assert!(winner.name.is_none());
        assert_eq!(winner.margin, 0.0);
    }
}
