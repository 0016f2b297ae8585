//! Cached async client for the PokeAPI v2 REST interface.
//!
//! `rotomdex-client` sits between `rotomdex-api` (resource models) and
//! higher-level components:
//!
//! ```text
//! rotomdex-api (models + errors)
//!        │
//!        ▼
//! rotomdex-client (HTTP + request cache) ← THIS CRATE
//!        │
//!        ├─> rotomdex-trainer (user state built from fetched data)
//!        └─> rotomdex-battle (opposing roster generation)
//! ```
//!
//! Every accessor is layered on a per-resource [`Cache`]: identical logical
//! requests within the freshness window are served from memory, and a failed
//! refresh degrades to the stale entry instead of surfacing an error.
//! Batch operations are best-effort: individual failures are logged and
//! dropped rather than failing the batch.

pub mod cache;

use std::fmt;
use std::time::Duration;

use futures_util::future::join_all;
use rand::Rng;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use cache::Cache;

pub use rotomdex_api::{
    ApiError, Composite, DamageRelations, EvolutionChain, MoveData, NamedRef, Pokemon,
    PokemonPage, PokemonSummary, ResourcePage, Species, TypeInfo, TypeName,
};

/// Public PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Highest id `fetch_random` will pick (the API's current dex ceiling).
pub const MAX_POKEMON_ID: u32 = 1010;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
const SEARCH_POOL_SIZE: u32 = 1000;
const TYPE_MEMBER_CAP: usize = 100;

/// Cached PokeAPI client. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    pokemon: Cache<Pokemon>,
    species: Cache<Species>,
    evolution: Cache<EvolutionChain>,
    moves: Cache<MoveData>,
    pages: Cache<PokemonPage>,
    name_index: Cache<ResourcePage>,
    search_results: Cache<Vec<PokemonSummary>>,
    types: Cache<TypeInfo>,
}

impl Client {
    /// Client against the public API with the default timeout.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            pokemon: Cache::new(CACHE_TTL),
            species: Cache::new(CACHE_TTL),
            evolution: Cache::new(CACHE_TTL),
            moves: Cache::new(CACHE_TTL),
            pages: Cache::new(CACHE_TTL),
            name_index: Cache::new(CACHE_TTL),
            search_results: Cache::new(CACHE_TTL),
            types: Cache::new(CACHE_TTL),
        })
    }

    /// Fetch a single Pokemon by id or name.
    pub async fn fetch_pokemon(&self, pokemon: impl fmt::Display) -> Result<Pokemon, ApiError> {
        let path = format!("pokemon/{pokemon}");
        self.pokemon.get(&path, || self.get_json(&path)).await
    }

    /// Fetch species metadata by id or name.
    pub async fn fetch_species(&self, species: impl fmt::Display) -> Result<Species, ApiError> {
        let path = format!("pokemon-species/{species}");
        self.species.get(&path, || self.get_json(&path)).await
    }

    /// Fetch an evolution chain by chain id.
    pub async fn fetch_evolution_chain(&self, id: u32) -> Result<EvolutionChain, ApiError> {
        let path = format!("evolution-chain/{id}");
        self.evolution.get(&path, || self.get_json(&path)).await
    }

    /// Fetch a move by id or name.
    pub async fn fetch_move(&self, mv: impl fmt::Display) -> Result<MoveData, ApiError> {
        let path = format!("move/{mv}");
        self.moves.get(&path, || self.get_json(&path)).await
    }

    /// Fetch a page of the Pokemon list, enriching every entry with sprite
    /// and types. Enrichment runs concurrently; an entry whose detail fetch
    /// fails is kept in bare id+name form rather than failing the page.
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, ApiError> {
        let path = format!("pokemon?offset={offset}&limit={limit}");
        self.pages
            .get(&path, || async {
                let raw: ResourcePage = self.get_json(&path).await?;
                let entries =
                    join_all(raw.results.iter().map(|entry| self.enrich_entry(entry))).await;
                Ok(PokemonPage {
                    count: raw.count,
                    next: raw.next,
                    previous: raw.previous,
                    entries,
                })
            })
            .await
    }

    /// Search by name substring (case-insensitive), client-side over a
    /// baseline list of up to 1000 entries (the API has no search endpoint).
    /// Returns at most `limit` matches, enriched best-effort.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<PokemonSummary>, ApiError> {
        let needle = query.trim().to_lowercase();
        let key = format!("search:{needle}:{limit}");

        self.search_results
            .get(&key, || async {
                let index = self.fetch_name_index().await?;
                let matches: Vec<&NamedRef> = index
                    .results
                    .iter()
                    .filter(|entry| entry.name.contains(&needle))
                    .take(limit)
                    .collect();

                Ok(join_all(matches.into_iter().map(|entry| self.enrich_entry(entry))).await)
            })
            .await
    }

    /// All members of a type, sorted by id, capped at 100 entries.
    pub async fn fetch_by_type(&self, type_name: TypeName) -> Result<Vec<PokemonSummary>, ApiError> {
        let info = self.fetch_type(type_name).await?;

        let mut entries: Vec<PokemonSummary> = info
            .pokemon
            .iter()
            .filter_map(|member| {
                member
                    .pokemon
                    .id()
                    .map(|id| PokemonSummary::bare(id, member.pokemon.name.as_str()))
            })
            .collect();
        entries.sort_by_key(|entry| entry.id);
        entries.truncate(TYPE_MEMBER_CAP);

        Ok(entries)
    }

    /// The `/type/{name}` record.
    pub async fn fetch_type(&self, type_name: TypeName) -> Result<TypeInfo, ApiError> {
        let path = format!("type/{type_name}");
        self.types.get(&path, || self.get_json(&path)).await
    }

    /// The API's own damage relations for a type.
    pub async fn fetch_type_matchups(
        &self,
        type_name: TypeName,
    ) -> Result<DamageRelations, ApiError> {
        Ok(self.fetch_type(type_name).await?.damage_relations)
    }

    /// Fetch a uniformly random Pokemon (ids 1..=1010).
    ///
    /// Bypasses the cache read so repeated calls always hit the network;
    /// the fresh result still overwrites the cached entry for that id.
    pub async fn fetch_random(&self) -> Result<Pokemon, ApiError> {
        let id = rand::thread_rng().gen_range(1..=MAX_POKEMON_ID);
        let path = format!("pokemon/{id}");

        let pokemon: Pokemon = self.get_json(&path).await?;
        self.pokemon.insert(&path, pokemon.clone());
        Ok(pokemon)
    }

    /// Fetch many Pokemon concurrently, best-effort: ids that fail are
    /// logged and dropped, and the order of surviving ids is preserved.
    pub async fn fetch_many(&self, ids: &[u32]) -> Vec<Pokemon> {
        let results = join_all(ids.iter().map(|id| self.fetch_pokemon(id))).await;

        results
            .into_iter()
            .zip(ids)
            .filter_map(|(result, id)| match result {
                Ok(pokemon) => Some(pokemon),
                Err(err) => {
                    tracing::warn!(id = *id, error = %err, "dropping failed fetch from batch");
                    None
                }
            })
            .collect()
    }

    /// Fetch a Pokemon together with its species and (best-effort) its
    /// evolution chain. A failed chain fetch yields `evolution: None`
    /// rather than failing the composite.
    pub async fn fetch_composite(&self, pokemon: impl fmt::Display) -> Result<Composite, ApiError> {
        let key = pokemon.to_string();

        let pokemon = self.fetch_pokemon(&key).await?;
        let species = self.fetch_species(&key).await?;

        let evolution = match species.evolution_chain_id() {
            Some(chain_id) => match self.fetch_evolution_chain(chain_id).await {
                Ok(chain) => Some(chain),
                Err(err) => {
                    tracing::warn!(chain_id, error = %err, "evolution chain fetch failed");
                    None
                }
            },
            None => None,
        };

        Ok(Composite {
            pokemon,
            species,
            evolution,
        })
    }

    async fn fetch_name_index(&self) -> Result<ResourcePage, ApiError> {
        let path = format!("pokemon?offset=0&limit={SEARCH_POOL_SIZE}");
        self.name_index.get(&path, || self.get_json(&path)).await
    }

    async fn enrich_entry(&self, entry: &NamedRef) -> PokemonSummary {
        match self.fetch_pokemon(&entry.name).await {
            Ok(pokemon) => PokemonSummary::from_pokemon(&pokemon),
            Err(err) => {
                tracing::warn!(name = %entry.name, error = %err, "enrichment failed, keeping bare entry");
                PokemonSummary::bare(entry.id().unwrap_or(0), entry.name.as_str())
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unknown(e.to_string()))
    }
}

/// Map a non-success HTTP status onto the error taxonomy.
fn status_error(status: StatusCode) -> ApiError {
    match status.as_u16() {
        404 => ApiError::NotFound,
        429 => ApiError::RateLimited,
        code @ 500..=599 => ApiError::ServerError(code),
        code => ApiError::Unknown(format!("unexpected status {code}")),
    }
}
