use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::record::StatRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub players: Vec<StatRecord>,
    #[serde(default)]
    pub teams: Vec<StatRecord>,
}

impl Season {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str::<Season>(raw).context("parse season json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read season file {}", path.display()))?;
        let season = Self::from_json(&raw).with_context(|| format!("in {}", path.display()))?;
        log::debug!(
            "loaded season {:?}: {} players, {} teams",
            season.label,
            season.players.len(),
            season.teams.len()
        );
        Ok(season)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize season")
    }

    pub fn find_player(&self, id: &str) -> Option<&StatRecord> {
        find_by_id(&self.players, id)
    }

    pub fn find_team(&self, id: &str) -> Option<&StatRecord> {
        find_by_id(&self.teams, id)
    }
}

pub fn find_by_id<'a>(records: &'a [StatRecord], needle: &str) -> Option<&'a StatRecord> {
    let needle = needle.trim();
    records.iter().find(|r| r.id == needle).or_else(|| {
        records
            .iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collections_default_to_empty() {
        let season = Season::from_json("{}").unwrap();
        assert!(season.players.is_empty());
        assert!(season.teams.is_empty());
    }

    #[test]
    fn non_array_collection_is_an_error() {
        assert!(Season::from_json(r#"{"players": 3}"#).is_err());
        assert!(Season::from_json(r#"{"teams": {"a": 1}}"#).is_err());
        assert!(Season::from_json(r#"{"players": [1, 2]}"#).is_err());
    }

    #[test]
    fn lookup_by_id_then_name() {
        let season = Season {
            players: vec![
                StatRecord::new("10", "Bukayo Saka"),
                StatRecord::new("11", "Declan Rice"),
            ],
            ..Default::default()
        };
        assert_eq!(season.find_player("11").unwrap().name, "Declan Rice");
        assert_eq!(season.find_player("bukayo saka").unwrap().id, "10");
        assert!(season.find_player("12").is_none());
    }

    #[test]
    fn json_round_trip_keeps_stats() {
        let season = Season {
            label: Some("2024/25".to_string()),
            players: vec![StatRecord::new("1", "P").with("goals", 3).with("xg", "2.5")],
            teams: Vec::new(),
        };
        let back = Season::from_json(&season.to_json().unwrap()).unwrap();
        assert_eq!(back, season);
    }
}
