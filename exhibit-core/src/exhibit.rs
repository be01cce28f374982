//! Landmarks, personas and the stats a visitor spends while exploring.

use crate::character::{CharacterConfig, UnknownLiteral};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

pub const STAT_MAX: i32 = 100;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse exhibit data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Luzon,
    Visayas,
    Mindanao,
}

impl Region {
    pub const ALL: [Self; 3] = [Self::Luzon, Self::Visayas, Self::Mindanao];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Luzon => "luzon",
            Self::Visayas => "visayas",
            Self::Mindanao => "mindanao",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownLiteral {
                kind: "region",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Stairs,
    Distance,
    Seating,
    Shade,
    Accessibility,
    Transport,
    Crowd,
    Terrain,
    Weather,
    Cost,
    Safety,
    Wildlife,
    Altitude,
    Water,
    Vendors,
    Signage,
    Restroom,
}

impl ConditionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stairs => "stairs",
            Self::Distance => "distance",
            Self::Seating => "seating",
            Self::Shade => "shade",
            Self::Accessibility => "accessibility",
            Self::Transport => "transport",
            Self::Crowd => "crowd",
            Self::Terrain => "terrain",
            Self::Weather => "weather",
            Self::Cost => "cost",
            Self::Safety => "safety",
            Self::Wildlife => "wildlife",
            Self::Altitude => "altitude",
            Self::Water => "water",
            Self::Vendors => "vendors",
            Self::Signage => "signage",
            Self::Restroom => "restroom",
        }
    }
}

/// Per-persona scaling of a condition's impact. Missing factors mean 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Multiplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<f64>,
}

/// Stat deltas. Negative values cost the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Impact {
    pub health: i32,
    pub stamina: i32,
    pub money: i32,
}

impl std::ops::Add for Impact {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            health: self.health.saturating_add(rhs.health),
            stamina: self.stamina.saturating_add(rhs.stamina),
            money: self.money.saturating_add(rhs.money),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenCondition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    pub label: String,
    pub description: String,
    pub health_impact: i32,
    pub stamina_impact: i32,
    pub money_impact: i32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub persona_multipliers: BTreeMap<String, Multiplier>,
}

#[allow(clippy::cast_possible_truncation)]
fn scale(base: i32, factor: Option<f64>) -> i32 {
    match factor {
        Some(f) => (f64::from(base) * f).round() as i32,
        None => base,
    }
}

impl HiddenCondition {
    #[must_use]
    pub const fn base_impact(&self) -> Impact {
        Impact {
            health: self.health_impact,
            stamina: self.stamina_impact,
            money: self.money_impact,
        }
    }

    /// Impact on the given persona after applying its multipliers.
    #[must_use]
    pub fn impact_for(&self, persona_id: &str) -> Impact {
        let Some(m) = self.persona_multipliers.get(persona_id) else {
            return self.base_impact();
        };
        Impact {
            health: scale(self.health_impact, m.health),
            stamina: scale(self.stamina_impact, m.stamina),
            money: scale(self.money_impact, m.money),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: String,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub description: String,
    pub image_url: String,
    /// `[lat, lng]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_zoom: Option<u8>,
    #[serde(default)]
    pub hidden_conditions: Vec<HiddenCondition>,
}

impl Landmark {
    /// Summed impact of every hidden condition for `persona_id`.
    #[must_use]
    pub fn total_impact(&self, persona_id: &str) -> Impact {
        self.hidden_conditions
            .iter()
            .map(|c| c.impact_for(persona_id))
            .fold(Impact::default(), |acc, i| acc + i)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapKnowledge {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub avatar: String,
    pub initial_health: i32,
    pub initial_stamina: i32,
    pub initial_money: i32,
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
    #[serde(default)]
    pub map_knowledge: MapKnowledge,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_config: Option<CharacterConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub stamina: i32,
    pub money: i32,
}

impl PlayerStats {
    #[must_use]
    pub fn from_persona(persona: &Persona) -> Self {
        Self {
            health: persona.initial_health.clamp(0, STAT_MAX),
            stamina: persona.initial_stamina.clamp(0, STAT_MAX),
            money: persona.initial_money.max(0),
        }
    }

    /// Apply `impact`. Health and stamina stay within `0..=100`; money never
    /// goes negative.
    pub fn apply(&mut self, impact: &Impact) {
        self.health = self.health.saturating_add(impact.health).clamp(0, STAT_MAX);
        self.stamina = self.stamina.saturating_add(impact.stamina).clamp(0, STAT_MAX);
        self.money = self.money.saturating_add(impact.money).max(0);
    }

    /// Apply each hidden condition of `landmark` in order.
    pub fn reveal(&mut self, landmark: &Landmark, persona_id: &str) {
        for condition in &landmark.hidden_conditions {
            self.apply(&condition.impact_for(persona_id));
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.health == 0 || self.stamina == 0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExhibitData {
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub personas: Vec<Persona>,
}

impl ExhibitData {
    /// Parse exhibit data, rejecting duplicate landmark or persona ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an id repeats.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(json)?;
        check_unique("landmark", data.landmarks.iter().map(|l| l.id.as_str()))?;
        check_unique("persona", data.personas.iter().map(|p| p.id.as_str()))?;
        Ok(data)
    }

    #[must_use]
    pub fn landmark(&self, id: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn persona(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
