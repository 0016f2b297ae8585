//! The `/type/{name}` resource: members and API-side damage relations.

use serde::Deserialize;

use super::NamedRef;

#[derive(Debug, Clone, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

/// The API's own statement of this type's matchups, usable as a
/// cross-check against the static chart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedRef>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedRef>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedRef>,
}

/// A Pokemon belonging to this type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedRef,
}
