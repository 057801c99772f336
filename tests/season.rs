use std::fs;
use std::path::PathBuf;

use league_stats::Season;
use league_stats::derived::{appearances, efficiency_value, per90_of};
use league_stats::leaderboard::{percentile_table, player_profile, top_players};
use league_stats::metrics::{Category, Direction, OFFENSIVE_EFFICIENCY};
use league_stats::standings::{league_summary, standings, team_profile};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn small_season() -> Season {
    Season::from_json(&read_fixture("season_small.json")).expect("fixture should parse")
}

#[test]
fn fixture_parses_with_aliases_and_loose_values() {
    let season = small_season();
    assert_eq!(season.label.as_deref(), Some("2024/25"));
    assert_eq!(season.players.len(), 5);
    assert_eq!(season.teams.len(), 4);

    let bravo = season.find_player("102").expect("aliased id");
    assert_eq!(bravo.name, "Bravo Winger");
    assert_eq!(bravo.stat("accuratePasses"), Some(81.0));

    let alpha = season.find_player("alpha striker").expect("lookup by name");
    assert_eq!(alpha.stat("expectedGoals"), Some(3.8));

    let bench = season.find_player("105").unwrap();
    assert_eq!(bench.stat("goals"), None);
    assert_eq!(bench.stat("assists"), None);
    assert_eq!(appearances(bench), 0.0);
    // zero minutes floors to one: raw * 90
    assert_eq!(per90_of(bench, "goals"), 0.0);
}

#[test]
fn load_reports_missing_file() {
    let err = Season::load(&PathBuf::from("tests/fixtures/no_such_season.json")).unwrap_err();
    assert!(format!("{err:#}").contains("no_such_season.json"));
}

#[test]
fn standings_ignore_upstream_rank() {
    let season = small_season();
    let rows = standings(&season.teams);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    // Arsenal and Liverpool are level on points; Arsenal has the better goal difference.
    assert_eq!(names, ["Arsenal", "Liverpool", "Chelsea", "Everton"]);
    assert_eq!(rows[0].display_rank_hint, Some(2.0));
    assert_eq!(rows[0].goal_difference, 7.0);
    assert_eq!(rows[0].points_per_game, 2.5);

    let everton = &rows[3];
    assert_eq!(everton.points, 0.0);
    assert_eq!(everton.played, 4.0);
    assert!(everton.record_consistent);
}

#[test]
fn team_profile_rates() {
    let season = small_season();
    let chelsea = season.find_team("Chelsea").unwrap();
    let profile = team_profile(&season.teams, chelsea);
    assert_eq!(profile.position, Some(3));
    assert_eq!(profile.goals_for_per_game, 1.0);
    assert_eq!(profile.goals_against_per_game, 1.5);
    assert_eq!(profile.win_rate, 25.0);
    assert_eq!(profile.goal_difference, -2.0);
}

#[test]
fn league_summary_counts_each_match_once() {
    let season = small_season();
    let summary = league_summary(&season.players, &season.teams);
    assert_eq!(summary.total_goals, 23.0);
    assert_eq!(summary.total_matches, 8.0);
    assert_eq!(summary.avg_goals_per_match, 23.0 / 8.0);
    assert_eq!(summary.total_teams, 4);
    assert_eq!(summary.total_players, 5);
    assert_eq!(summary.results.wins, 7.0);
    assert_eq!(summary.results.draws, 4.0);

    let empty = league_summary(&[], &[]);
    assert_eq!(empty.avg_goals_per_match, 0.0);
}

#[test]
fn leaders_and_percentiles_agree() {
    let season = small_season();
    let top = top_players(&season.players, "goals", 2, Direction::HigherBetter);
    assert_eq!(top[0].name, "Alpha Striker");
    assert_eq!(top[1].name, "Bravo Winger");

    let cleanest = top_players(&season.players, "fouls", 1, Direction::LowerBetter);
    // missing fouls default to 0
    assert_eq!(cleanest[0].value, 0.0);

    let table = percentile_table(&season.players, "goals");
    assert_eq!(table, [80.0, 60.0, 0.0, 0.0, 0.0]);
}

#[test]
fn player_profile_covers_category() {
    let season = small_season();
    let alpha = season.find_player("101").unwrap();
    let profile = player_profile(&season.players, alpha, Category::Offensive);

    assert_eq!(profile.contributions, 6.0);
    assert_eq!(profile.goals_per_appearance, 1.25);
    assert!((profile.clinicality - 1.2).abs() < 1e-9);
    assert_eq!(profile.metrics.len(), Category::Offensive.raw_metrics().len());
    assert_eq!(profile.efficiency.len(), OFFENSIVE_EFFICIENCY.len());

    let goals = profile.metrics.iter().find(|m| m.key == "goals").unwrap();
    assert_eq!(goals.percentile, 80.0);
    assert!(goals.z_score > 0.0);
    assert!((goals.per90 - 1.25).abs() < 1e-9);

    let accuracy = efficiency_value(alpha, &OFFENSIVE_EFFICIENCY[0]);
    assert!((accuracy - 8.0 / 14.0 * 100.0).abs() < 1e-9);
}
