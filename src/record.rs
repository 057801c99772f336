use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StatRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(flatten)]
    pub stats: HashMap<String, Value>,
}

pub type PlayerRecord = StatRecord;
pub type TeamRecord = StatRecord;

impl StatRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.stats.insert(key.to_string(), value.into());
        self
    }

    pub fn with_team(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn stat(&self, key: &str) -> Option<f64> {
        self.stats.get(key).and_then(coerce_number)
    }

    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }
        match self.team_name.as_deref() {
            Some(team) if !team.trim().is_empty() => team,
            _ => self.id.as_str(),
        }
    }
}

impl From<Map<String, Value>> for StatRecord {
    fn from(mut raw: Map<String, Value>) -> Self {
        let id = take_identity(&mut raw, &["id", "player_id"]).unwrap_or_default();
        let name = take_identity(&mut raw, &["name", "player_name"]).unwrap_or_default();
        let team_name = take_identity(&mut raw, &["team_name"]);
        let position = take_identity(&mut raw, &["position"]);
        Self {
            id,
            name,
            team_name,
            position,
            stats: raw.into_iter().collect(),
        }
    }
}

// First non-empty alias wins; the rest are dropped so they do not leak into `stats`.
fn take_identity(raw: &mut Map<String, Value>, aliases: &[&str]) -> Option<String> {
    let mut found = None;
    for alias in aliases {
        let Some(value) = raw.remove(*alias) else {
            continue;
        };
        if found.is_some() {
            continue;
        }
        found = match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };
    }
    found
}

pub fn get(record: &StatRecord, key: &str, default: f64) -> f64 {
    match record.stats.get(key) {
        None | Some(Value::Null) => default,
        Some(raw) => coerce_number(raw).unwrap_or_else(|| {
            log::trace!("{}: field {key} = {raw} not numeric, using {default}", record.id);
            default
        }),
    }
}

pub fn get_first(record: &StatRecord, keys: &[&str], default: f64) -> f64 {
    keys.iter()
        .find_map(|key| record.stat(key))
        .unwrap_or(default)
}

pub fn coerce_number(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_number(s)?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    let s = s.trim_end_matches('%').trim();
    if s.is_empty() {
        return None;
    }
    if s.contains(',') {
        return ungroup_thousands(s)?.parse::<f64>().ok();
    }
    s.parse::<f64>().ok()
}

// "1,204" and "-12,345.6" are grouped; "12,5" or "1,20" are not and get rejected.
fn ungroup_thousands(s: &str) -> Option<String> {
    let (int_part, frac) = match s.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (s, None),
    };
    if frac.is_some_and(|f| f.contains(',')) {
        return None;
    }
    let digits = int_part.trim_start_matches(['-', '+']);
    let mut groups = digits.split(',');
    let lead = groups.next()?;
    let is_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    if lead.is_empty() || lead.len() > 3 || !is_digits(lead) {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && is_digits(g)) {
        return None;
    }
    Some(s.replace(',', ""))
}
