use std::fmt;
use std::path::Path;

use anyhow::Context;
use chrono::Duration;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChallengeError;
use crate::models::{Entry, Participant, MAX_WEEKLY_STEPS, SEED_WEEKS};

pub const ROSTER: [(&str, &str); 6] = [
    ("Riad", "#3B82F6"),
    ("Keith", "#10B981"),
    ("Hari", "#F59E0B"),
    ("Victoria", "#EF4444"),
    ("Leigeme", "#8B5CF6"),
    ("Derek", "#EC4899"),
];

/// Weekly totals for `SEED_WEEKS`, in roster order.
const SEED_STEPS: [[u64; 3]; 6] = [
    [28_000, 32_500, 25_000],
    [35_000, 42_000, 38_000],
    [21_000, 24_500, 28_000],
    [45_000, 52_000, 48_000],
    [18_000, 22_000, 19_500],
    [31_000, 29_000, 35_000],
];

/// Participants in a fixed iteration order. Serialized as a JSON object keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    participants: Vec<Participant>,
}

impl Store {
    pub fn empty_roster() -> Self {
        Self {
            participants: ROSTER
                .iter()
                .map(|(name, color)| Participant::new(name, color))
                .collect(),
        }
    }

    pub fn seed() -> Self {
        let mut store = Self::empty_roster();
        for (participant, weekly) in store.participants.iter_mut().zip(SEED_STEPS) {
            participant.entries = SEED_WEEKS
                .iter()
                .zip(weekly)
                .map(|(week_start, steps)| Entry {
                    week_start: *week_start,
                    week_end: *week_start + Duration::days(6),
                    steps,
                })
                .collect();
        }
        store
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Participant, ChallengeError> {
        self.participants
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| ChallengeError::UnknownParticipant(name.to_string()))
    }

    pub fn add_entry(&mut self, name: &str, entry: Entry) -> Result<(), ChallengeError> {
        if entry.steps == 0 {
            return Err(ChallengeError::ZeroSteps);
        }
        if entry.steps > MAX_WEEKLY_STEPS {
            return Err(ChallengeError::TooManySteps {
                steps: entry.steps,
                max: MAX_WEEKLY_STEPS,
            });
        }
        if entry.week_end < entry.week_start {
            return Err(ChallengeError::InvertedWeek {
                week_start: entry.week_start,
                week_end: entry.week_end,
            });
        }
        if !entry.within_challenge() {
            tracing::warn!(
                participant = name,
                week_start = %entry.week_start,
                week_end = %entry.week_end,
                "entry falls outside the challenge window"
            );
        }

        let participant = self.get_mut(name)?;
        tracing::info!(participant = name, steps = entry.steps, "adding entry");
        participant.entries.push(entry);
        Ok(())
    }

    /// Removes the entry at `index` in insertion order.
    pub fn delete_entry(&mut self, name: &str, index: usize) -> Result<Entry, ChallengeError> {
        let participant = self.get_mut(name)?;
        let len = participant.entries.len();
        if index >= len {
            return Err(ChallengeError::EntryOutOfRange {
                name: name.to_string(),
                index,
                len,
            });
        }
        let removed = participant.entries.remove(index);
        tracing::info!(participant = name, index, steps = removed.steps, "deleted entry");
        Ok(removed)
    }

    pub fn reset(&mut self) {
        *self = Self::empty_roster();
    }

    pub fn export_json(&self) -> Result<String, ChallengeError> {
        serde_json::to_string_pretty(self).map_err(ChallengeError::Serialize)
    }

    pub fn from_json(text: &str) -> Result<Self, ChallengeError> {
        serde_json::from_str(text).map_err(ChallengeError::InvalidBackup)
    }

    /// Replaces the whole store. On failure the current contents are kept.
    pub fn import_json(&mut self, text: &str) -> Result<(), ChallengeError> {
        let imported = Self::from_json(text)?;
        tracing::info!(participants = imported.participants.len(), "imported backup");
        *self = imported;
        Ok(())
    }
}

pub fn load_or_seed(path: &Path) -> anyhow::Result<Store> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no session file, loading seed data");
        let store = Store::seed();
        save(&store, path)?;
        return Ok(store);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    let store = Store::from_json(&text)
        .with_context(|| format!("session file {} is not a valid backup", path.display()))?;
    tracing::debug!(path = %path.display(), participants = store.participants.len(), "loaded session");
    Ok(store)
}

pub fn save(store: &Store, path: &Path) -> anyhow::Result<()> {
    let json = store.export_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write session file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved session");
    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Serialize)]
struct ParticipantRef<'a> {
    color: &'a str,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ParticipantRecord {
    color: String,
    entries: Vec<Entry>,
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.participants.len()))?;
        for participant in &self.participants {
            map.serialize_entry(
                &participant.name,
                &ParticipantRef {
                    color: &participant.color,
                    entries: &participant.entries,
                },
            )?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping participant names to {color, entries}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Store, A::Error> {
        let mut participants: Vec<Participant> = Vec::new();

        while let Some((name, record)) = access.next_entry::<String, ParticipantRecord>()? {
            if name.trim().is_empty() {
                return Err(de::Error::custom("participant name must not be empty"));
            }
            if participants.iter().any(|p| p.name == name) {
                return Err(de::Error::custom(format!("duplicate participant {name:?}")));
            }
            if !is_hex_color(&record.color) {
                return Err(de::Error::custom(format!(
                    "{name}: color {:?} is not #RRGGBB",
                    record.color
                )));
            }
            if let Some(entry) = record.entries.iter().find(|e| e.week_end < e.week_start) {
                return Err(de::Error::custom(format!(
                    "{name}: week ending {} starts after it ends",
                    entry.week_end
                )));
            }

            if let Some(entry) = record.entries.iter().find(|e| e.steps > MAX_WEEKLY_STEPS) {
                return Err(de::Error::custom(format!(
                    "{name}: {} steps in the week of {} is more than {MAX_WEEKLY_STEPS}",
                    entry.steps, entry.week_start
                )));
            }

            participants.push(Participant {
                name,
                color: record.color,
                entries: record.entries,
            });
        }

        Ok(Store { participants })
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Store, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}
