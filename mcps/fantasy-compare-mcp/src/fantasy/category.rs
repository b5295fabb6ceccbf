//! The stat categories a comparison is made over

use serde::Serialize;

use super::record::StatRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ppg,
    Rpg,
    Apg,
    Spg,
    Bpg,
    ThreePm,
    FgPct,
    FtPct,
    Tov,
}

impl Category {
    /// Every category shown in the category-by-category breakdown.
    pub const DISPLAY: [Category; 9] = [
        Category::Ppg,
        Category::Rpg,
        Category::Apg,
        Category::Spg,
        Category::Bpg,
        Category::ThreePm,
        Category::FgPct,
        Category::FtPct,
        Category::Tov,
    ];

    /// Counting stats plotted on the radar and the head-to-head bars.
    pub const CHARTED: [Category; 6] = [
        Category::Ppg,
        Category::Rpg,
        Category::Apg,
        Category::Spg,
        Category::Bpg,
        Category::ThreePm,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Ppg => "ppg",
            Category::Rpg => "rpg",
            Category::Apg => "apg",
            Category::Spg => "spg",
            Category::Bpg => "bpg",
            Category::ThreePm => "three_pm",
            Category::FgPct => "fg_pct",
            Category::FtPct => "ft_pct",
            Category::Tov => "tov",
        }
    }

    /// Box-score abbreviation used as a chart axis label.
    pub fn short_label(self) -> &'static str {
        match self {
            Category::Ppg => "PTS",
            Category::Rpg => "REB",
            Category::Apg => "AST",
            Category::Spg => "STL",
            Category::Bpg => "BLK",
            Category::ThreePm => "3PM",
            Category::FgPct => "FG%",
            Category::FtPct => "FT%",
            Category::Tov => "TO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ppg => "Points",
            Category::Rpg => "Rebounds",
            Category::Apg => "Assists",
            Category::Spg => "Steals",
            Category::Bpg => "Blocks",
            Category::ThreePm => "3-Pointers Made",
            Category::FgPct => "Field Goal %",
            Category::FtPct => "Free Throw %",
            Category::Tov => "Turnovers",
        }
    }

    /// Turnovers are the only category where less is better.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Category::Tov)
    }

    pub fn value(self, record: &StatRecord) -> f64 {
        match self {
            Category::Ppg => record.ppg,
            Category::Rpg => record.rpg,
            Category::Apg => record.apg,
            Category::Spg => record.spg,
            Category::Bpg => record.bpg,
            Category::ThreePm => record.three_pm,
            Category::FgPct => record.fg_pct,
            Category::FtPct => record.ft_pct,
            Category::Tov => record.tov,
        }
    }
}
