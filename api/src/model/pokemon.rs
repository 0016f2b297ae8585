//! The `/pokemon/{id or name}` resource.

use serde::Deserialize;

use super::NamedRef;
use crate::types::TypeName;

/// A single Pokemon record. Treated as read-only external data once fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<LearnableMove>,
    #[serde(default)]
    pub species: Option<NamedRef>,
}

impl Pokemon {
    /// Parsed type names, slot order preserved. Unknown type strings
    /// (future generations, glitches) are skipped rather than failing.
    pub fn type_names(&self) -> Vec<TypeName> {
        self.types
            .iter()
            .filter_map(|slot| TypeName::from_name(&slot.type_.name))
            .collect()
    }

    /// Best sprite URL: official artwork first, plain front sprite as
    /// fallback. Shiny requests fall back to the non-shiny art.
    pub fn sprite(&self, shiny: bool) -> Option<&str> {
        let art = self
            .sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref());

        if shiny {
            art.and_then(|a| a.front_shiny.as_deref())
                .or(self.sprites.front_shiny.as_deref())
                .or(art.and_then(|a| a.front_default.as_deref()))
                .or(self.sprites.front_default.as_deref())
        } else {
            art.and_then(|a| a.front_default.as_deref())
                .or(self.sprites.front_default.as_deref())
        }
    }

    /// Base stat by API name ("hp", "attack", "speed", ...).
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    /// Sum of the six base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }

    /// Move slugs in moveset order.
    pub fn move_names(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.move_.name.as_str()).collect()
    }
}

/// Sprite URLs. The API makes every one of them nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

/// One of a Pokemon's (at most two) type slots.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedRef,
}

/// A base stat entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StatValue {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedRef,
}

/// An ability slot.
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
    pub ability: NamedRef,
}

/// One entry of the learnable moveset.
#[derive(Debug, Clone, Deserialize)]
pub struct LearnableMove {
    #[serde(rename = "move")]
    pub move_: NamedRef,
}
