use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn run(args: &[&str], log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_league_stats"));
    cmd.args(args).env_remove("LEAGUE_STATS_SEASON");
    match log {
        Some(level) => cmd.env("LEAGUE_STATS_LOG", level),
        None => cmd.env_remove("LEAGUE_STATS_LOG"),
    };
    cmd.output().expect("binary should start")
}

#[test]
fn log_level_comes_from_env() {
    let season = fixture_path("season_small.json");
    let season = season.to_str().expect("utf-8 fixture path");

    let quiet = run(&["summary", "--season", season], None);
    assert!(quiet.status.success());
    let stderr = String::from_utf8_lossy(&quiet.stderr);
    assert!(!stderr.contains("loaded season"), "{stderr}");

    let verbose = run(&["summary", "--season", season], Some("debug"));
    assert!(verbose.status.success());
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("DEBUG"), "{stderr}");
    assert!(stderr.contains("loaded season"), "{stderr}");

    let stdout = String::from_utf8_lossy(&verbose.stdout);
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("json on stdout");
    assert_eq!(summary["totalTeams"], 4);
}

#[test]
fn unknown_player_warns_and_degrades() {
    let out = run(&["compare", "--fake", "--seed", "3", "--p1", "101", "--p2", "nobody"], None);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[WARN] player nobody not found"));
    let data: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json on stdout");
    assert_eq!(data["winners"].as_object().map(|w| w.len()), Some(0));
    assert!(data["radarSeries"][0]["value2"].is_null());
}

#[test]
fn leaders_requires_metric() {
    let out = run(&["leaders", "--fake"], None);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--metric"));
}
