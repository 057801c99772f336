use serde::Serialize;

use crate::metrics;
use crate::record::{self, StatRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRange {
    pub metric: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeMode {
    #[default]
    Full,
    // min/max over values > 0 only; 0..1 when there are none.
    PositiveOnly,
}

impl MetricRange {
    pub fn empty(metric: &str) -> Self {
        Self {
            metric: metric.to_string(),
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

pub fn values_of<'a, I>(entities: I, key: &str) -> Vec<f64>
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let default = metrics::default_for(key);
    entities
        .into_iter()
        .map(|e| record::get(e, key, default))
        .collect()
}

pub fn metric_range<'a, I>(entities: I, key: &str, mode: RangeMode) -> MetricRange
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    range_of_values(key, &values_of(entities, key), mode)
}

// Mean and std dev always use the full set; `mode` only affects min/max.
pub fn range_of_values(metric: &str, values: &[f64], mode: RangeMode) -> MetricRange {
    if values.is_empty() {
        return MetricRange::empty(metric);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    let (min, max) = match mode {
        RangeMode::Full => min_max(values.iter().copied()).unwrap_or((0.0, 0.0)),
        RangeMode::PositiveOnly => {
            min_max(values.iter().copied().filter(|v| *v > 0.0)).unwrap_or_else(|| {
                log::debug!("{metric}: no positive values, using fallback range 0..1");
                (0.0, 1.0)
            })
        }
    };

    MetricRange {
        metric: metric.to_string(),
        min,
        max,
        mean,
        std_dev: var.sqrt(),
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_collection_is_all_zero() {
        for mode in [RangeMode::Full, RangeMode::PositiveOnly] {
            let r = range_of_values("goals", &[], mode);
            assert_eq!(r, MetricRange::empty("goals"));
        }
    }

    #[test]
    fn full_range_includes_zeros_and_uses_population_std() {
        let r = range_of_values("goals", &[0.0, 2.0, 4.0, 6.0], RangeMode::Full);
        assert_eq!((r.min, r.max), (0.0, 6.0));
        assert!(close(r.mean, 3.0));
        // population variance = (9 + 1 + 1 + 9) / 4 = 5
        assert!(close(r.std_dev, 5.0_f64.sqrt()));
    }

    #[test]
    fn positive_only_skips_zero_and_negative_for_bounds_only() {
        let r = range_of_values("goals", &[0.0, 0.0, -1.0, 3.0, 9.0], RangeMode::PositiveOnly);
        assert_eq!((r.min, r.max), (3.0, 9.0));
        assert!(close(r.mean, 11.0 / 5.0));
    }

    #[test]
    fn positive_only_without_positives_falls_back() {
        let r = range_of_values("saves", &[0.0, 0.0], RangeMode::PositiveOnly);
        assert_eq!((r.min, r.max), (0.0, 1.0));
        assert_eq!(r.mean, 0.0);
        assert_eq!(r.std_dev, 0.0);
    }

    #[test]
    fn metric_range_defaults_missing_fields() {
        let players = vec![
            StatRecord::new("1", "A").with("goals", 4),
            StatRecord::new("2", "B"),
            StatRecord::new("3", "C").with("goals", "bad"),
        ];
        let r = metric_range(&players, "goals", RangeMode::Full);
        assert_eq!((r.min, r.max), (0.0, 4.0));
        assert!(close(r.mean, 4.0 / 3.0));
    }
}
