//! The `/pokemon-species/{id or name}` resource.

use serde::Deserialize;

use super::{NamedRef, UrlRef};

/// Species-level metadata: dex text, classification, evolution pointer.
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub capture_rate: Option<u32>,
    #[serde(default)]
    pub base_happiness: Option<u32>,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub evolution_chain: Option<UrlRef>,
    #[serde(default)]
    pub evolves_from_species: Option<NamedRef>,
    #[serde(default)]
    pub habitat: Option<NamedRef>,
    #[serde(default)]
    pub generation: Option<NamedRef>,
    #[serde(default)]
    pub color: Option<NamedRef>,
}

impl Species {
    /// Id of the evolution chain this species belongs to, if the API
    /// provided one.
    pub fn evolution_chain_id(&self) -> Option<u32> {
        self.evolution_chain.as_ref().and_then(|r| r.id())
    }

    /// First English flavor text, newline noise collapsed to spaces.
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.as_ref().is_some_and(|l| l.name == "en"))
            .map(|e| {
                e.flavor_text
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
    }

    /// English genus ("Mouse Pokemon"), if present.
    pub fn english_genus(&self) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.as_ref().is_some_and(|l| l.name == "en"))
            .map(|g| g.genus.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub language: Option<NamedRef>,
    #[serde(default)]
    pub version: Option<NamedRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    #[serde(default)]
    pub genus: String,
    #[serde(default)]
    pub language: Option<NamedRef>,
}
