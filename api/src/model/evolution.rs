//! The `/evolution-chain/{id}` resource.

use serde::Deserialize;

use super::NamedRef;

/// A full evolution chain, rooted at the base species.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

impl EvolutionChain {
    /// Species slugs in the chain, depth-first from the base form.
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.chain.collect_names(&mut names);
        names
    }
}

/// One node of the chain; branches are possible (Eevee).
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedRef,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(self.species.name.as_str());
        for next in &self.evolves_to {
            next.collect_names(out);
        }
    }
}
