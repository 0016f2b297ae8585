//! Opposing-roster generation from the Gen 1 pool.

use rand::Rng;
use rand::seq::SliceRandom;

use rotomdex_api::Pokemon;
use rotomdex_client::Client;

use crate::engine::Combatant;

/// Target roster size; network failures can leave the result shorter.
pub const ROSTER_SIZE: usize = 6;

/// Ids are sampled from the original 150.
const ID_POOL: u32 = 150;

/// Moves are drawn from the head of the moveset only.
const MOVE_POOL_WINDOW: usize = 20;

const LEVEL_MIN: u8 = 45;
const LEVEL_MAX: u8 = 59;

/// Build an opposing roster: six distinct random ids, fetched concurrently
/// and best-effort (an id whose fetch fails is dropped, not fatal), each
/// member levelled at random and given up to four moves sampled from its
/// known moveset.
pub async fn generate_opposing_roster(client: &Client, rng: &mut impl Rng) -> Vec<Combatant> {
    let ids = sample_distinct_ids(rng, ID_POOL, ROSTER_SIZE);
    let fetched = client.fetch_many(&ids).await;

    if fetched.len() < ids.len() {
        tracing::warn!(
            requested = ids.len(),
            got = fetched.len(),
            "opposing roster came up short"
        );
    }

    fetched
        .iter()
        .map(|pokemon| combatant_from_pokemon(pokemon, rng))
        .collect()
}

/// Derive a battle-ready combatant from a fetched record: random level in
/// 45..=59, up to four moves sampled without replacement from the first
/// twenty of its moveset (fewer when the moveset is smaller).
pub fn combatant_from_pokemon(pokemon: &Pokemon, rng: &mut impl Rng) -> Combatant {
    let pool: Vec<&str> = pokemon
        .move_names()
        .into_iter()
        .take(MOVE_POOL_WINDOW)
        .collect();
    let moves: Vec<String> = pool
        .choose_multiple(rng, 4)
        .map(|name| (*name).to_string())
        .collect();
    let level = rng.gen_range(LEVEL_MIN..=LEVEL_MAX);

    Combatant::new(pokemon.id, pokemon.name.clone(), level, moves)
}

fn sample_distinct_ids(rng: &mut impl Rng, pool: u32, count: usize) -> Vec<u32> {
    let mut ids: Vec<u32> = (1..=pool).collect();
    let (sampled, _) = ids.partial_shuffle(rng, count);
    sampled.to_vec()
}
