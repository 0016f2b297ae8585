//! The `/move/{id or name}` resource.

use serde::Deserialize;

use super::NamedRef;

/// A move record.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub damage_class: Option<NamedRef>,
    #[serde(rename = "type", default)]
    pub type_: Option<NamedRef>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl MoveData {
    /// First English short effect description.
    pub fn english_effect(&self) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|e| e.language.as_ref().is_some_and(|l| l.name == "en"))
            .map(|e| e.short_effect.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    #[serde(default)]
    pub language: Option<NamedRef>,
}
