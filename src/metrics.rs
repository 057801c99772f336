use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Offensive,
    Defensive,
    Goalkeeping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    HigherBetter,
    LowerBetter,
}

impl Direction {
    pub fn higher_is_better(self) -> bool {
        matches!(self, Direction::HigherBetter)
    }

    pub fn apply(self, v: f64) -> f64 {
        match self {
            Direction::HigherBetter => v,
            Direction::LowerBetter => -v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub direction: Direction,
    pub default_value: f64,
}

impl MetricDescriptor {
    const fn higher(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            direction: Direction::HigherBetter,
            default_value: 0.0,
        }
    }

    const fn lower(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            direction: Direction::LowerBetter,
            default_value: 0.0,
        }
    }

    pub fn higher_is_better(&self) -> bool {
        self.direction.higher_is_better()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub numerator: &'static str,
    pub denominator: &'static [&'static str],
}

impl EfficiencyDescriptor {
    const fn new(
        key: &'static str,
        label: &'static str,
        numerator: &'static str,
        denominator: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            numerator,
            denominator,
        }
    }
}

pub const MINUTES_PLAYED: &str = "minutesPlayed";
pub const APPEARANCES: &str = "appearances";
pub const MATCHES_PLAYED: &str = "matches_played";
pub const GOALS: &str = "goals";
pub const ASSISTS: &str = "assists";
pub const EXPECTED_GOALS: &str = "expectedGoals";

pub const OFFENSIVE_METRICS: &[MetricDescriptor] = &[
    MetricDescriptor::higher(GOALS, "Goals"),
    MetricDescriptor::higher(ASSISTS, "Assists"),
    MetricDescriptor::higher(EXPECTED_GOALS, "xG"),
    MetricDescriptor::higher("shotsOnTarget", "Shots on Target"),
    MetricDescriptor::higher("keyPasses", "Key Passes"),
    MetricDescriptor::higher("successfulDribbles", "Dribbles"),
];

pub const OFFENSIVE_EFFICIENCY: &[EfficiencyDescriptor] = &[
    EfficiencyDescriptor::new("shotAccuracy", "Shot Accuracy %", "shotsOnTarget", &["totalShots"]),
    EfficiencyDescriptor::new("goalConversion", "Goal Conversion %", GOALS, &["totalShots"]),
    EfficiencyDescriptor::new(
        "dribbleSuccess",
        "Dribble Success %",
        "successfulDribbles",
        &["dribbleAttempts"],
    ),
    EfficiencyDescriptor::new("passAccuracy", "Pass Accuracy %", "accuratePasses", &["totalPasses"]),
];

pub const DEFENSIVE_METRICS: &[MetricDescriptor] = &[
    MetricDescriptor::higher("tackles", "Tackles"),
    MetricDescriptor::higher("interceptions", "Interceptions"),
    MetricDescriptor::higher("clearances", "Clearances"),
    MetricDescriptor::higher("totalDuelsWon", "Duels Won"),
    MetricDescriptor::higher("aerialDuelsWon", "Aerials Won"),
    MetricDescriptor::lower("fouls", "Fouls"),
    MetricDescriptor::lower("yellowCards", "Yellow Cards"),
];

pub const DEFENSIVE_EFFICIENCY: &[EfficiencyDescriptor] = &[
    EfficiencyDescriptor::new(
        "duelWinPercentage",
        "Duels Won %",
        "totalDuelsWon",
        &["totalDuelsWon", "duelLost"],
    ),
    EfficiencyDescriptor::new(
        "aerialWinPercentage",
        "Aerials Won %",
        "aerialDuelsWon",
        &["aerialDuelsWon", "aerialLost"],
    ),
    EfficiencyDescriptor::new(
        "groundWinPercentage",
        "Ground Duels Won %",
        "groundDuelsWon",
        &["groundDuelsWon", "groundDuelsLost"],
    ),
];

pub const GOALKEEPING_METRICS: &[MetricDescriptor] = &[
    MetricDescriptor::higher("saves", "Saves"),
    MetricDescriptor::higher("highClaims", "High Claims"),
    MetricDescriptor::higher("punches", "Punches"),
    MetricDescriptor::higher("runsOut", "Runs Out"),
    MetricDescriptor::lower("goalsConceded", "Goals Conceded"),
    MetricDescriptor::lower("errorLeadToGoal", "Errors Leading to Goal"),
];

pub const GOALKEEPING_EFFICIENCY: &[EfficiencyDescriptor] = &[
    EfficiencyDescriptor::new("savePercentage", "Save %", "saves", &["saves", "goalsConceded"]),
    EfficiencyDescriptor::new(
        "runsOutSuccess",
        "Successful Runs Out %",
        "successfulRunsOut",
        &["runsOut"],
    ),
];

pub const PLAYER_EXTRA_METRICS: &[MetricDescriptor] = &[
    MetricDescriptor::higher(MINUTES_PLAYED, "Minutes"),
    MetricDescriptor::higher(APPEARANCES, "Appearances"),
    MetricDescriptor::higher("totalShots", "Shots"),
    MetricDescriptor::higher("expectedAssists", "xA"),
    MetricDescriptor::higher("accuratePasses", "Accurate Passes"),
    MetricDescriptor::lower("bigChancesMissed", "Big Chances Missed"),
    MetricDescriptor::lower("redCards", "Red Cards"),
    MetricDescriptor::lower("dribbledPast", "Dribbled Past"),
];

pub const TEAM_METRICS: &[MetricDescriptor] = &[
    MetricDescriptor::higher("points", "Points"),
    MetricDescriptor::higher(MATCHES_PLAYED, "Played"),
    MetricDescriptor::higher("wins", "Wins"),
    MetricDescriptor::higher("draws", "Draws"),
    MetricDescriptor::lower("losses", "Losses"),
    MetricDescriptor::higher("goals_for", "Goals For"),
    MetricDescriptor::lower("goals_against", "Goals Against"),
];

static DESCRIPTOR_INDEX: Lazy<HashMap<&'static str, &'static MetricDescriptor>> = Lazy::new(|| {
    [
        OFFENSIVE_METRICS,
        DEFENSIVE_METRICS,
        GOALKEEPING_METRICS,
        PLAYER_EXTRA_METRICS,
        TEAM_METRICS,
    ]
    .into_iter()
    .flatten()
    .map(|d| (d.key, d))
    .collect()
});

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Offensive,
        Category::Defensive,
        Category::Goalkeeping,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Offensive => "Offensive",
            Category::Defensive => "Defensive",
            Category::Goalkeeping => "Goalkeeping",
        }
    }

    pub fn raw_metrics(self) -> &'static [MetricDescriptor] {
        match self {
            Category::Offensive => OFFENSIVE_METRICS,
            Category::Defensive => DEFENSIVE_METRICS,
            Category::Goalkeeping => GOALKEEPING_METRICS,
        }
    }

    pub fn efficiency_metrics(self) -> &'static [EfficiencyDescriptor] {
        match self {
            Category::Offensive => OFFENSIVE_EFFICIENCY,
            Category::Defensive => DEFENSIVE_EFFICIENCY,
            Category::Goalkeeping => GOALKEEPING_EFFICIENCY,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Offensive => "offensive",
            Category::Defensive => "defensive",
            Category::Goalkeeping => "goalkeeping",
        })
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "offensive" | "attack" | "attacking" => Ok(Category::Offensive),
            "defensive" | "defence" | "defense" | "defending" => Ok(Category::Defensive),
            "goalkeeping" | "goalkeeper" | "gk" => Ok(Category::Goalkeeping),
            other => Err(anyhow!("unknown category: {other}")),
        }
    }
}

pub fn descriptor(key: &str) -> Option<&'static MetricDescriptor> {
    DESCRIPTOR_INDEX.get(key).copied()
}

pub fn direction_for(key: &str) -> Direction {
    descriptor(key).map_or(Direction::HigherBetter, |d| d.direction)
}

pub fn default_for(key: &str) -> f64 {
    descriptor(key).map_or(0.0, |d| d.default_value)
}

pub fn label_for(key: &str) -> &str {
    descriptor(key).map_or(key, |d| d.label)
}
