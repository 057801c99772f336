use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use env_logger::Env;
use serde::Serialize;

use league_stats::comparison::build_comparison;
use league_stats::fake_season::fake_season;
use league_stats::leaderboard::{player_profile, top_players};
use league_stats::metrics::{self, Category, Direction};
use league_stats::season::Season;
use league_stats::standings::{league_summary, standings};

const DEFAULT_TOP_N: usize = 5;
const DEFAULT_FAKE_SEED: u64 = 2024;
const DEFAULT_FAKE_SQUAD: usize = 22;

const USAGE: &str = "usage: league_stats <compare|standings|summary|leaders|profile> \
[--season <path> | --fake [--seed N] [--players N]] \
[--p1 ID] [--p2 ID] [--player ID] [--category offensive|defensive|goalkeeping] \
[--metric KEY] [--top N] [--asc]";

fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or("LEAGUE_STATS_LOG", "warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let command = args
        .first()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with('-'))
        .unwrap_or("summary");

    let season = load_season(&args)?;
    let category = parse_str_arg(&args, "--category")
        .map(|raw| raw.parse::<Category>())
        .transpose()?
        .unwrap_or(Category::Offensive);

    match command {
        "compare" => {
            let p1 = lookup_player(&season, parse_str_arg(&args, "--p1"));
            let p2 = lookup_player(&season, parse_str_arg(&args, "--p2"));
            print_json(&build_comparison(&season.players, p1, p2, category))
        }
        "standings" => print_json(&standings(&season.teams)),
        "summary" => print_json(&league_summary(&season.players, &season.teams)),
        "leaders" => {
            let metric = parse_str_arg(&args, "--metric")
                .ok_or_else(|| anyhow!("leaders needs --metric <key>"))?;
            let top = parse_usize_arg(&args, "--top")
                .or_else(|| env_usize("LEAGUE_STATS_TOP_N"))
                .unwrap_or(DEFAULT_TOP_N)
                .clamp(1, 50);
            let direction = if has_flag(&args, "--asc") {
                Direction::LowerBetter
            } else {
                metrics::direction_for(&metric)
            };
            print_json(&top_players(&season.players, &metric, top, direction))
        }
        "profile" => {
            let id = parse_str_arg(&args, "--player")
                .ok_or_else(|| anyhow!("profile needs --player <id>"))?;
            let player = season
                .find_player(&id)
                .ok_or_else(|| anyhow!("player {id} not found"))?;
            print_json(&player_profile(&season.players, player, category))
        }
        other => Err(anyhow!("unknown command: {other}\n{USAGE}")),
    }
}

fn load_season(args: &[String]) -> Result<Season> {
    if has_flag(args, "--fake") {
        let seed = parse_u64_arg(args, "--seed").unwrap_or(DEFAULT_FAKE_SEED);
        let squad = parse_usize_arg(args, "--players")
            .unwrap_or(DEFAULT_FAKE_SQUAD)
            .clamp(1, 60);
        return Ok(fake_season(seed, squad));
    }
    let path = parse_str_arg(args, "--season")
        .or_else(|| env::var("LEAGUE_STATS_SEASON").ok())
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .context("no season: pass --season <path>, set LEAGUE_STATS_SEASON, or use --fake")?;
    Season::load(&path)
}

// Unknown ids degrade to an absent side rather than failing the whole comparison.
fn lookup_player(season: &Season, id: Option<String>) -> Option<&league_stats::StatRecord> {
    let id = id?;
    let found = season.find_player(&id);
    if found.is_none() {
        eprintln!("[WARN] player {id} not found in season");
    }
    found
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&format!("{name}=")) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

fn parse_usize_arg(args: &[String], name: &str) -> Option<usize> {
    parse_str_arg(args, name).and_then(|raw| raw.parse::<usize>().ok())
}

fn parse_u64_arg(args: &[String], name: &str) -> Option<u64> {
    parse_str_arg(args, name).and_then(|raw| raw.parse::<u64>().ok())
}

fn env_usize(name: &str) -> Option<usize> {
    env::var(name).ok().and_then(|val| val.trim().parse::<usize>().ok())
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|arg| arg == name)
}
