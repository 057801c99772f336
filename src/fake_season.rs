use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::record::StatRecord;
use crate::season::Season;

const MATCHES_PER_TEAM: u32 = 38;

const TEAM_NAMES: [&str; 20] = [
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Burnley",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Leeds United",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Newcastle United",
    "Nottingham Forest",
    "Sunderland",
    "Tottenham Hotspur",
    "West Ham United",
    "Wolverhampton",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Role {
    fn for_slot(slot: usize) -> Self {
        match slot % 11 {
            0 => Role::Goalkeeper,
            1..=4 => Role::Defender,
            5..=7 => Role::Midfielder,
            _ => Role::Attacker,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Role::Goalkeeper => "Goalkeeper",
            Role::Defender => "Defender",
            Role::Midfielder => "Midfielder",
            Role::Attacker => "Attacker",
        }
    }
}

pub fn fake_season(seed: u64, players_per_team: usize) -> Season {
    let mut rng = StdRng::seed_from_u64(seed);
    let teams: Vec<StatRecord> = TEAM_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| fake_team(&mut rng, idx, name))
        .collect();

    let mut players = Vec::with_capacity(TEAM_NAMES.len() * players_per_team);
    for (team_idx, team) in TEAM_NAMES.iter().enumerate() {
        for slot in 0..players_per_team {
            let id = team_idx * 100 + slot + 1;
            players.push(fake_player(&mut rng, id, team, Role::for_slot(slot)));
        }
    }

    Season {
        label: Some(format!("synthetic-{seed}")),
        players,
        teams,
    }
}

fn fake_team(rng: &mut StdRng, idx: usize, name: &str) -> StatRecord {
    let wins = rng.gen_range(4..=28);
    let draws = rng.gen_range(0..=(MATCHES_PER_TEAM - wins).min(14));
    let losses = MATCHES_PER_TEAM - wins - draws;
    let goals_for = wins * 2 + draws + rng.gen_range(0..=12);
    let goals_against = losses * 2 + draws + rng.gen_range(0..=12);
    StatRecord {
        id: format!("t{}", idx + 1),
        team_name: Some(name.to_string()),
        ..Default::default()
    }
    .with("matches_played", MATCHES_PER_TEAM)
    .with("wins", wins)
    .with("draws", draws)
    .with("losses", losses)
    .with("goals_for", goals_for)
    .with("goals_against", goals_against)
    .with("points", wins * 3 + draws)
    .with("rank", idx as u64 + 1)
}

fn fake_player(rng: &mut StdRng, id: usize, team: &str, role: Role) -> StatRecord {
    let unused = rng.gen_bool(0.08);
    let appearances: u32 = if unused { 0 } else { rng.gen_range(1..=MATCHES_PER_TEAM) };
    let minutes = appearances * rng.gen_range(20..=90);

    let mut p = StatRecord::new(id.to_string(), format!("{} #{id}", role.label()))
        .with_team(team)
        .with_position(role.label())
        .with("appearances", appearances)
        .with("minutesPlayed", minutes);
    if appearances == 0 {
        return p;
    }

    let apps = f64::from(appearances);

    match role {
        Role::Goalkeeper => {
            let saves = scaled(rng, apps, 2.8);
            let conceded = scaled(rng, apps, 1.3);
            let runs_out = scaled(rng, apps, 0.6);
            p = p
                .with("saves", saves)
                .with("goalsConceded", conceded)
                .with("highClaims", scaled(rng, apps, 0.9))
                .with("punches", scaled(rng, apps, 0.4))
                .with("runsOut", runs_out)
                .with("successfulRunsOut", rng.gen_range(0..=runs_out))
                .with("errorLeadToGoal", rng.gen_range(0..=2));
        }
        Role::Defender | Role::Midfielder | Role::Attacker => {
            let (shot_rate, goal_share, def_rate) = match role {
                Role::Defender => (0.4, 0.08, 2.5),
                Role::Midfielder => (1.2, 0.10, 1.6),
                _ => (2.6, 0.14, 0.6),
            };
            let shots = scaled(rng, apps, shot_rate);
            let on_target = rng.gen_range(0..=shots);
            let goals = ((f64::from(shots) * goal_share * rng.gen_range(0.5..1.8)).round() as u32)
                .min(on_target);
            let dribble_attempts = scaled(rng, apps, 1.4);
            let duels_won = scaled(rng, apps, def_rate * 2.0);
            let aerial_won = scaled(rng, apps, def_rate * 0.8);
            let ground_won = duels_won.saturating_sub(aerial_won);
            let passes = scaled(rng, apps, 38.0);
            p = p
                .with("goals", goals)
                .with("assists", scaled(rng, apps, goal_share * 1.5))
                .with("totalShots", shots)
                .with("shotsOnTarget", on_target)
                .with("keyPasses", scaled(rng, apps, shot_rate * 0.5))
                .with("dribbleAttempts", dribble_attempts)
                .with("successfulDribbles", rng.gen_range(0..=dribble_attempts))
                .with("totalPasses", passes)
                .with("accuratePasses", (f64::from(passes) * rng.gen_range(0.6..0.93)).round())
                .with("tackles", scaled(rng, apps, def_rate))
                .with("interceptions", scaled(rng, apps, def_rate * 0.6))
                .with("clearances", scaled(rng, apps, def_rate * 1.2))
                .with("totalDuelsWon", duels_won)
                .with("duelLost", scaled(rng, apps, def_rate * 1.8))
                .with("aerialDuelsWon", aerial_won)
                .with("aerialLost", scaled(rng, apps, def_rate * 0.7))
                .with("groundDuelsWon", ground_won)
                .with("groundDuelsLost", scaled(rng, apps, def_rate))
                .with("fouls", scaled(rng, apps, 0.9))
                .with("yellowCards", scaled(rng, apps, 0.12))
                .with("bigChancesMissed", scaled(rng, apps, shot_rate * 0.15));

            let xg = f64::from(goals) * rng.gen_range(0.6..1.4);
            // Upstream sometimes ships xG as a string.
            let xg = if rng.gen_bool(0.2) {
                Value::String(format!("{xg:.2}"))
            } else {
                Value::from((xg * 100.0).round() / 100.0)
            };
            p = p.with("expectedGoals", xg);
        }
    }

    if rng.gen_bool(0.05) {
        p.stats.remove("assists");
    }
    p
}

fn scaled(rng: &mut StdRng, appearances: f64, per_game: f64) -> u32 {
    (appearances * per_game * rng.gen_range(0.3..1.7)).round() as u32
}
