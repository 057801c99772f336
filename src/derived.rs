use crate::metrics::{
    self, APPEARANCES, ASSISTS, EXPECTED_GOALS, EfficiencyDescriptor, GOALS, MATCHES_PLAYED,
    MINUTES_PLAYED,
};
use crate::record::{self, StatRecord};

pub const MINUTES_PER_MATCH: f64 = 90.0;

/// `raw` scaled to a 90-minute equivalent.
///
/// Minutes below 1 (including 0 / missing) are floored to 1, so a player with
/// no minutes gets `raw * 90`. Unrounded; use [`round2`] for display.
pub fn per90(raw: f64, minutes_played: f64) -> f64 {
    raw / minutes_played.max(1.0) * MINUTES_PER_MATCH
}

pub fn per_appearance(raw: f64, appearances: f64) -> f64 {
    raw / appearances.max(1.0)
}

pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let pct = numerator / denominator * 100.0;
        if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
    } else {
        log::trace!("ratio {numerator}/{denominator}: zero denominator, using 0%");
        0.0
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn minutes_played(player: &StatRecord) -> f64 {
    record::get(player, MINUTES_PLAYED, 0.0)
}

pub fn appearances(player: &StatRecord) -> f64 {
    record::get_first(player, &[APPEARANCES, MATCHES_PLAYED], 0.0)
}

fn stat(player: &StatRecord, key: &str) -> f64 {
    record::get(player, key, metrics::default_for(key))
}

pub fn per90_of(player: &StatRecord, key: &str) -> f64 {
    per90(stat(player, key), minutes_played(player))
}

pub fn per_appearance_of(player: &StatRecord, key: &str) -> f64 {
    per_appearance(stat(player, key), appearances(player))
}

pub fn efficiency_value(player: &StatRecord, metric: &EfficiencyDescriptor) -> f64 {
    let numerator = stat(player, metric.numerator);
    let denominator = metric.denominator.iter().map(|k| stat(player, k)).sum::<f64>();
    ratio_percent(numerator, denominator)
}

pub fn clinicality(player: &StatRecord) -> f64 {
    stat(player, GOALS) - stat(player, EXPECTED_GOALS)
}

pub fn goal_contribution(player: &StatRecord) -> f64 {
    stat(player, GOALS) + stat(player, ASSISTS)
}
