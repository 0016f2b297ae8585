//! The fixed set of Pokemon type names as PokeAPI spells them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 18 Pokemon types (Gen 6+ set, including Fairy).
///
/// Serialized in the API's lowercase form ("fire", "water", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeName {
    /// All 18 types, in National Dex chart order.
    pub const ALL: [TypeName; 18] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Electric,
        TypeName::Grass,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    pub fn all() -> &'static [TypeName] {
        &Self::ALL
    }

    /// The API's spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Normal => "normal",
            TypeName::Fire => "fire",
            TypeName::Water => "water",
            TypeName::Electric => "electric",
            TypeName::Grass => "grass",
            TypeName::Ice => "ice",
            TypeName::Fighting => "fighting",
            TypeName::Poison => "poison",
            TypeName::Ground => "ground",
            TypeName::Flying => "flying",
            TypeName::Psychic => "psychic",
            TypeName::Bug => "bug",
            TypeName::Rock => "rock",
            TypeName::Ghost => "ghost",
            TypeName::Dragon => "dragon",
            TypeName::Dark => "dark",
            TypeName::Steel => "steel",
            TypeName::Fairy => "fairy",
        }
    }

    /// Parse a type name, case-insensitively. Unknown names yield `None`.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Some(TypeName::Normal),
            "fire" => Some(TypeName::Fire),
            "water" => Some(TypeName::Water),
            "electric" => Some(TypeName::Electric),
            "grass" => Some(TypeName::Grass),
            "ice" => Some(TypeName::Ice),
            "fighting" => Some(TypeName::Fighting),
            "poison" => Some(TypeName::Poison),
            "ground" => Some(TypeName::Ground),
            "flying" => Some(TypeName::Flying),
            "psychic" => Some(TypeName::Psychic),
            "bug" => Some(TypeName::Bug),
            "rock" => Some(TypeName::Rock),
            "ghost" => Some(TypeName::Ghost),
            "dragon" => Some(TypeName::Dragon),
            "dark" => Some(TypeName::Dark),
            "steel" => Some(TypeName::Steel),
            "fairy" => Some(TypeName::Fairy),
            _ => None,
        }
    }
}

impl FromStr for TypeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::from_name(s).ok_or(())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
