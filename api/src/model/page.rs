//! Paginated list resources and the enriched list entry.

use serde::{Deserialize, Serialize};

use super::{NamedRef, Pokemon};
use crate::types::TypeName;

/// The raw `/pokemon?offset=&limit=` page as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedRef>,
}

/// A lightweight list entry, enriched with sprite and types where the
/// per-entry fetch succeeded. Also what the trainer store persists for
/// recently-viewed entries and the daily pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeName>,
}

impl PokemonSummary {
    /// A bare entry carrying only identity, for when enrichment failed.
    pub fn bare(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: None,
            types: Vec::new(),
        }
    }

    /// Build the enriched form from a full record.
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            sprite: pokemon.sprite(false).map(str::to_owned),
            types: pokemon.type_names(),
        }
    }
}

/// An enriched page of list entries.
#[derive(Debug, Clone)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub entries: Vec<PokemonSummary>,
}
