//! Resource models for the PokeAPI v2 JSON schema.
//!
//! The schema is not under our control, so every field that could be absent
//! or null is an `Option` or carries `#[serde(default)]`.

mod tests;

pub mod evolution;
pub mod moves;
pub mod page;
pub mod pokemon;
pub mod species;
pub mod type_info;

pub use evolution::{ChainLink, EvolutionChain};
pub use moves::{EffectEntry, MoveData};
pub use page::{PokemonPage, PokemonSummary, ResourcePage};
pub use pokemon::{AbilitySlot, Artwork, LearnableMove, Pokemon, Sprites, StatValue, TypeSlot};
pub use species::{FlavorText, Genus, Species};
pub use type_info::{DamageRelations, TypeInfo, TypeMember};

use serde::Deserialize;

use crate::util::id_from_url;

/// The API's named pointer to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedRef {
    /// Numeric id of the referenced resource, parsed from its URL.
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

/// An unnamed pointer (the API uses these for evolution chains).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlRef {
    #[serde(default)]
    pub url: String,
}

impl UrlRef {
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

/// A Pokemon, its species metadata, and (best-effort) its evolution chain,
/// fetched as one logical unit.
#[derive(Debug, Clone)]
pub struct Composite {
    pub pokemon: Pokemon,
    pub species: Species,
    /// `None` when the evolution-chain fetch failed or the species has none.
    pub evolution: Option<EvolutionChain>,
}
