use std::collections::BTreeMap;

use serde::Serialize;

use crate::compare::{Winner, compare_metric};
use crate::derived::{self, round2};
use crate::metrics::{Category, Direction, MetricDescriptor};
use crate::normalize::normalize;
use crate::range::{MetricRange, RangeMode, metric_range};
use crate::record::{self, StatRecord};

pub const RADAR_FULL_MARK: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub key: &'static str,
    pub subject: &'static str,
    pub full_mark: f64,
    pub value1: Option<f64>,
    pub value2: Option<f64>,
    pub normalized1: Option<f64>,
    pub normalized2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub key: &'static str,
    pub label: &'static str,
    pub value1: Option<f64>,
    pub value2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Per90Point {
    pub key: &'static str,
    pub label: &'static str,
    pub value1: Option<f64>,
    pub value2: Option<f64>,
    pub display1: Option<f64>,
    pub display2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub key: &'static str,
    pub subject: &'static str,
    pub value1: f64,
    pub value2: f64,
    pub normalized1: f64,
    pub normalized2: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinTally {
    pub entity1: usize,
    pub entity2: usize,
    pub draws: usize,
}

impl WinTally {
    fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Entity1 => self.entity1 += 1,
            Winner::Entity2 => self.entity2 += 1,
            Winner::Draw => self.draws += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDataset {
    pub category: Category,
    pub radar_series: Vec<RadarPoint>,
    pub bar_series: Vec<SeriesPoint>,
    pub per90_series: Vec<Per90Point>,
    pub efficiency_series: Vec<SeriesPoint>,
    pub winners: BTreeMap<String, Winner>,
    pub results: Vec<ComparisonResult>,
    pub tally: WinTally,
}

impl ComparisonDataset {
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            radar_series: Vec::new(),
            bar_series: Vec::new(),
            per90_series: Vec::new(),
            efficiency_series: Vec::new(),
            winners: BTreeMap::new(),
            results: Vec::new(),
            tally: WinTally::default(),
        }
    }
}

/// Radar axis for `key`: the positive-only range anchored at zero, so the
/// radius reads as "share of the best positive value in the population".
pub fn radar_range<'a, I>(entities: I, key: &str) -> MetricRange
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let range = metric_range(entities, key, RangeMode::PositiveOnly);
    MetricRange {
        min: range.min.min(0.0),
        ..range
    }
}

fn raw(entity: &StatRecord, metric: &MetricDescriptor) -> f64 {
    record::get(entity, metric.key, metric.default_value)
}

pub fn build_comparison(
    entities: &[StatRecord],
    entity1: Option<&StatRecord>,
    entity2: Option<&StatRecord>,
    category: Category,
) -> ComparisonDataset {
    if entity1.is_none() && entity2.is_none() {
        return ComparisonDataset::empty(category);
    }

    let mut out = ComparisonDataset::empty(category);

    for metric in category.raw_metrics() {
        let range = radar_range(entities, metric.key);
        let v1 = entity1.map(|e| raw(e, metric));
        let v2 = entity2.map(|e| raw(e, metric));
        let n1 = v1.map(|v| normalize(v, &range));
        let n2 = v2.map(|v| normalize(v, &range));

        out.radar_series.push(RadarPoint {
            key: metric.key,
            subject: metric.label,
            full_mark: RADAR_FULL_MARK,
            value1: v1,
            value2: v2,
            normalized1: n1,
            normalized2: n2,
        });
        out.bar_series.push(SeriesPoint {
            key: metric.key,
            label: metric.label,
            value1: v1,
            value2: v2,
        });

        let p1 = entity1.map(|e| derived::per90_of(e, metric.key));
        let p2 = entity2.map(|e| derived::per90_of(e, metric.key));
        out.per90_series.push(Per90Point {
            key: metric.key,
            label: metric.label,
            value1: p1,
            value2: p2,
            display1: p1.map(round2),
            display2: p2.map(round2),
        });

        if let (Some(value1), Some(value2), Some(normalized1), Some(normalized2)) = (v1, v2, n1, n2) {
            let winner = compare_metric(value1, value2, metric.direction);
            out.winners.insert(metric.key.to_string(), winner);
            out.tally.record(winner);
            out.results.push(ComparisonResult {
                key: metric.key,
                subject: metric.label,
                value1,
                value2,
                normalized1,
                normalized2,
                winner,
            });
        }
    }

    for metric in category.efficiency_metrics() {
        let v1 = entity1.map(|e| derived::efficiency_value(e, metric));
        let v2 = entity2.map(|e| derived::efficiency_value(e, metric));
        out.efficiency_series.push(SeriesPoint {
            key: metric.key,
            label: metric.label,
            value1: v1,
            value2: v2,
        });
        if let (Some(value1), Some(value2)) = (v1, v2) {
            let winner = compare_metric(value1, value2, Direction::HigherBetter);
            out.winners.insert(metric.key.to_string(), winner);
            out.tally.record(winner);
        }
    }

    out
}
