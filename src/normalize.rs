use crate::metrics;
use crate::range::{self, MetricRange};
use crate::record::{self, StatRecord};

/// Returned when a range has no spread: "no discriminating signal".
pub const MIDPOINT: f64 = 50.0;

/// Min-max scale onto 0..=100. Values outside the range are clamped.
pub fn normalize(value: f64, range: &MetricRange) -> f64 {
    if range.max == range.min {
        log::debug!("{}: degenerate range at {}, using midpoint", range.metric, range.min);
        return MIDPOINT;
    }
    let scaled = 100.0 * (value - range.min) / range.span();
    if scaled.is_nan() {
        return 0.0;
    }
    scaled.clamp(0.0, 100.0)
}

// Ties do not count as below, so everyone tied at the minimum gets 0.
pub fn percentile<'a, I>(entities: I, entity: &StatRecord, key: &str) -> f64
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let value = record::get(entity, key, metrics::default_for(key));
    let mut total = 0usize;
    let mut below = 0usize;
    for v in range::values_of(entities, key) {
        total += 1;
        if v < value {
            below += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    100.0 * below as f64 / total as f64
}

pub fn percentile_of_value(sorted: &[f64], value: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let below = sorted.partition_point(|v| *v < value);
    100.0 * below as f64 / sorted.len() as f64
}

pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return 0.0;
    }
    (value - mean) / std_dev
}
