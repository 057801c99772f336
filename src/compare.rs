use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::metrics::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Entity1,
    Entity2,
    Draw,
}

impl Winner {
    pub fn flipped(self) -> Self {
        match self {
            Winner::Entity1 => Winner::Entity2,
            Winner::Entity2 => Winner::Entity1,
            Winner::Draw => Winner::Draw,
        }
    }
}

pub fn compare(value1: f64, value2: f64, higher_is_better: bool) -> Winner {
    let ord = match value1.partial_cmp(&value2) {
        Some(ord) => ord,
        None => return Winner::Draw,
    };
    match (ord, higher_is_better) {
        (Ordering::Equal, _) => Winner::Draw,
        (Ordering::Greater, true) | (Ordering::Less, false) => Winner::Entity1,
        (Ordering::Less, true) | (Ordering::Greater, false) => Winner::Entity2,
    }
}

pub fn compare_metric(value1: f64, value2: f64, direction: Direction) -> Winner {
    compare(value1, value2, direction.higher_is_better())
}
