//! Level layouts: which entity kinds spawn where.
//!
//! A layout is raw data (possibly read from JSON) keyed by kind name.
//! `validate` resolves every kind and checks the player count up front so the
//! director can apply a level without ever failing halfway through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SPAWN_COORD;
use crate::enums::SpawnKind;
use crate::error::LevelError;
use crate::types::Vec2;

/// Mapping from kind name to spawn coordinates.
///
/// JSON form: `{"Player": [[400, 400]], "Grunt": [[20, 20], [200, 20]]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelLayout {
    pub spawns: BTreeMap<String, Vec<Vec2>>,
}

/// A layout that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLevel {
    pub player: Vec2,
    /// Every non-player spawn, grouped by kind in layout order.
    pub spawns: Vec<(SpawnKind, Vec2)>,
}

impl LevelLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON layout.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder: append spawn points for a known kind.
    pub fn with(mut self, kind: SpawnKind, points: impl IntoIterator<Item = Vec2>) -> Self {
        self.insert(kind.name(), points);
        self
    }

    /// Append spawn points under a raw kind name.
    pub fn insert(&mut self, kind: &str, points: impl IntoIterator<Item = Vec2>) {
        self.spawns.entry(kind.to_string()).or_default().extend(points);
    }

    /// Total number of spawn points across all kinds.
    pub fn len(&self) -> usize {
        self.spawns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the whole layout without side effects.
    pub fn validate(&self) -> Result<ValidatedLevel, LevelError> {
        let players = self
            .spawns
            .get(SpawnKind::Player.name())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let player = match players {
            [only] => *only,
            _ => {
                return Err(LevelError::PlayerCount {
                    found: players.len(),
                })
            }
        };

        let mut spawns = Vec::with_capacity(self.len().saturating_sub(1));
        for (name, points) in &self.spawns {
            let kind: SpawnKind = name.parse()?;
            if points.iter().any(|p| !p.is_finite()) {
                return Err(LevelError::NonFiniteSpawn { kind: name.clone() });
            }
            if points.iter().any(|p| p.abs().max_element() > MAX_SPAWN_COORD) {
                return Err(LevelError::SpawnOutOfRange {
                    kind: name.clone(),
                    limit: MAX_SPAWN_COORD,
                });
            }
            if kind == SpawnKind::Player {
                continue;
            }
            spawns.extend(points.iter().map(|&p| (kind, p)));
        }

        Ok(ValidatedLevel { player, spawns })
    }
}
