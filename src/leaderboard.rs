use serde::Serialize;

use crate::derived::{self, per_appearance};
use crate::metrics::{self, ASSISTS, Category, Direction, GOALS};
use crate::normalize::{percentile_of_value, z_score};
use crate::range::{RangeMode, range_of_values, values_of};
use crate::record::{self, StatRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderEntry {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub team_name: Option<String>,
    pub value: f64,
}

pub fn top_players(
    players: &[StatRecord],
    key: &str,
    n: usize,
    direction: Direction,
) -> Vec<LeaderEntry> {
    let default = metrics::default_for(key);
    let mut rows: Vec<(&StatRecord, f64)> = players
        .iter()
        .map(|p| (p, record::get(p, key, default)))
        .collect();
    rows.sort_by(|(pa, va), (pb, vb)| {
        direction
            .apply(*vb)
            .total_cmp(&direction.apply(*va))
            .then_with(|| pa.display_name().cmp(pb.display_name()))
    });
    rows.into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, (p, value))| LeaderEntry {
            rank: idx + 1,
            id: p.id.clone(),
            name: p.display_name().to_string(),
            team_name: p.team_name.clone(),
            value,
        })
        .collect()
}

// One entry per row, in row order. Ids are not unique (transfers, id-less rows).
pub fn percentile_table(players: &[StatRecord], key: &str) -> Vec<f64> {
    let values = values_of(players, key);
    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    values
        .into_iter()
        .map(|v| percentile_of_value(&sorted, v))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricStanding {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub per90: f64,
    pub percentile: f64,
    pub z_score: f64,
    pub league_mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyValue {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub team_name: Option<String>,
    pub position: Option<String>,
    pub category: Category,
    pub appearances: f64,
    pub minutes_played: f64,
    pub goals: f64,
    pub assists: f64,
    pub contributions: f64,
    pub goals_per_appearance: f64,
    pub assists_per_appearance: f64,
    pub contributions_per_appearance: f64,
    pub league_avg_goals: f64,
    pub league_avg_assists: f64,
    pub clinicality: f64,
    pub metrics: Vec<MetricStanding>,
    pub efficiency: Vec<EfficiencyValue>,
}

pub fn player_profile(
    players: &[StatRecord],
    player: &StatRecord,
    category: Category,
) -> PlayerProfile {
    let appearances = derived::appearances(player);
    let goals = record::get(player, GOALS, 0.0);
    let assists = record::get(player, ASSISTS, 0.0);
    let contributions = derived::goal_contribution(player);
    let league_mean =
        |key: &str| range_of_values(key, &values_of(players, key), RangeMode::Full).mean;

    let metrics = category
        .raw_metrics()
        .iter()
        .map(|m| {
            let mut values = values_of(players, m.key);
            let range = range_of_values(m.key, &values, RangeMode::Full);
            values.sort_by(f64::total_cmp);
            let value = record::get(player, m.key, m.default_value);
            MetricStanding {
                key: m.key,
                label: m.label,
                value,
                per90: derived::per90_of(player, m.key),
                percentile: percentile_of_value(&values, value),
                z_score: z_score(value, range.mean, range.std_dev),
                league_mean: range.mean,
            }
        })
        .collect();

    let efficiency = category
        .efficiency_metrics()
        .iter()
        .map(|m| EfficiencyValue {
            key: m.key,
            label: m.label,
            value: derived::efficiency_value(player, m),
        })
        .collect();

    PlayerProfile {
        id: player.id.clone(),
        name: player.display_name().to_string(),
        team_name: player.team_name.clone(),
        position: player.position.clone(),
        category,
        appearances,
        minutes_played: derived::minutes_played(player),
        goals,
        assists,
        contributions,
        goals_per_appearance: per_appearance(goals, appearances),
        assists_per_appearance: per_appearance(assists, appearances),
        contributions_per_appearance: per_appearance(contributions, appearances),
        league_avg_goals: league_mean(GOALS),
        league_avg_assists: league_mean(ASSISTS),
        clinicality: derived::clinicality(player),
        metrics,
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::percentile;

    fn squad() -> Vec<StatRecord> {
        vec![
            StatRecord::new("1", "Alpha").with("goals", 9).with("fouls", 30),
            StatRecord::new("2", "Bravo").with("goals", 12).with("fouls", 12),
            StatRecord::new("3", "Charlie").with("goals", 9).with("fouls", 20),
            StatRecord::new("4", "Delta").with("fouls", "15"),
        ]
    }

    #[test]
    fn top_players_higher_is_better_with_name_tiebreak() {
        let rows = top_players(&squad(), "goals", 3, Direction::HigherBetter);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bravo", "Alpha", "Charlie"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].value, 12.0);
    }

    #[test]
    fn top_players_lower_is_better() {
        let rows = top_players(&squad(), "fouls", 2, Direction::LowerBetter);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[test]
    fn top_players_handles_n_larger_than_population() {
        assert_eq!(top_players(&squad(), "goals", 50, Direction::HigherBetter).len(), 4);
        assert!(top_players(&[], "goals", 5, Direction::HigherBetter).is_empty());
    }

    #[test]
    fn percentile_table_matches_single_lookups() {
        let players = squad();
        let table = percentile_table(&players, "goals");
        assert_eq!(table.len(), players.len());
        for (p, pct) in players.iter().zip(&table) {
            assert_eq!(*pct, percentile(&players, p, "goals"), "{}", p.id);
        }
    }

    #[test]
    fn percentile_table_keeps_rows_with_shared_or_missing_ids() {
        let players = vec![
            StatRecord::new("7", "Mover").with_team("A").with("goals", 1),
            StatRecord::new("7", "Mover").with_team("B").with("goals", 9),
            StatRecord::new("", "NoId1").with("goals", 3),
            StatRecord::new("", "NoId2").with("goals", 5),
        ];
        let table = percentile_table(&players, "goals");
        assert_eq!(table, [0.0, 75.0, 25.0, 50.0]);
        for (p, pct) in players.iter().zip(&table) {
            assert_eq!(*pct, percentile(&players, p, "goals"));
        }
    }
}
