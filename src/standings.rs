use std::cmp::Ordering;

use serde::Serialize;

use crate::derived::{per_appearance, ratio_percent};
use crate::metrics::MATCHES_PLAYED;
use crate::record::{self, StatRecord};

const POINTS_PER_WIN: f64 = 3.0;

fn field(team: &StatRecord, key: &str) -> f64 {
    record::get(team, key, 0.0)
}

pub fn goal_difference(team: &StatRecord) -> f64 {
    field(team, "goals_for") - field(team, "goals_against")
}

// Points, goal difference, goals for (all desc), then name. Upstream `rank` is ignored.
pub fn standings_order(a: &StatRecord, b: &StatRecord) -> Ordering {
    let desc = |key: fn(&StatRecord) -> f64| key(b).total_cmp(&key(a));
    desc(|t| field(t, "points"))
        .then_with(|| desc(goal_difference))
        .then_with(|| desc(|t| field(t, "goals_for")))
        .then_with(|| a.display_name().cmp(b.display_name()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub played: f64,
    pub wins: f64,
    pub draws: f64,
    pub losses: f64,
    pub goals_for: f64,
    pub goals_against: f64,
    pub goal_difference: f64,
    pub points: f64,
    pub points_per_game: f64,
    pub record_consistent: bool,
    pub display_rank_hint: Option<f64>,
}

pub fn standings(teams: &[StatRecord]) -> Vec<StandingRow> {
    let mut sorted: Vec<&StatRecord> = teams.iter().collect();
    sorted.sort_by(|a, b| standings_order(a, b));
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, team)| {
            let played = field(team, MATCHES_PLAYED);
            let wins = field(team, "wins");
            let draws = field(team, "draws");
            let losses = field(team, "losses");
            let points = field(team, "points");
            let record_consistent = wins + draws + losses == played;
            if !record_consistent {
                log::debug!(
                    "{}: W{wins}+D{draws}+L{losses} != played {played}",
                    team.display_name()
                );
            }
            StandingRow {
                position: idx + 1,
                id: team.id.clone(),
                name: team.display_name().to_string(),
                played,
                wins,
                draws,
                losses,
                goals_for: field(team, "goals_for"),
                goals_against: field(team, "goals_against"),
                goal_difference: goal_difference(team),
                points,
                points_per_game: if played > 0.0 { points / played } else { 0.0 },
                record_consistent,
                display_rank_hint: team.stat("rank"),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub id: String,
    pub name: String,
    pub position: Option<usize>,
    pub goals_for_per_game: f64,
    pub goals_against_per_game: f64,
    pub goal_difference: f64,
    pub win_rate: f64,
    pub points_share: f64,
}

pub fn team_profile(teams: &[StatRecord], team: &StatRecord) -> TeamProfile {
    let played = field(team, MATCHES_PLAYED);
    let per_game = |key: &str| {
        if played > 0.0 {
            per_appearance(field(team, key), played)
        } else {
            0.0
        }
    };
    let position = standings(teams)
        .iter()
        .find(|row| row.id == team.id)
        .map(|row| row.position);
    TeamProfile {
        id: team.id.clone(),
        name: team.display_name().to_string(),
        position,
        goals_for_per_game: per_game("goals_for"),
        goals_against_per_game: per_game("goals_against"),
        goal_difference: goal_difference(team),
        win_rate: ratio_percent(field(team, "wins"), played),
        points_share: ratio_percent(field(team, "points"), POINTS_PER_WIN * played),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResultsDistribution {
    pub wins: f64,
    pub draws: f64,
    pub losses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    pub total_goals: f64,
    pub total_matches: f64,
    pub avg_goals_per_match: f64,
    pub total_teams: usize,
    pub total_players: usize,
    pub results: ResultsDistribution,
}

pub fn league_summary(players: &[StatRecord], teams: &[StatRecord]) -> LeagueSummary {
    let total_goals: f64 = teams.iter().map(|t| field(t, "goals_for")).sum();
    let total_matches = teams.iter().map(|t| field(t, MATCHES_PLAYED)).sum::<f64>() / 2.0;
    let results = teams
        .iter()
        .fold(ResultsDistribution::default(), |mut acc, t| {
            acc.wins += field(t, "wins");
            acc.draws += field(t, "draws");
            acc.losses += field(t, "losses");
            acc
        });
    LeagueSummary {
        total_goals,
        total_matches,
        avg_goals_per_match: if teams.is_empty() {
            0.0
        } else {
            total_goals / total_matches.max(1.0)
        },
        total_teams: teams.len(),
        total_players: players.len(),
        results,
    }
}
