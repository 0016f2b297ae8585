use thiserror::Error;

pub mod model;
pub mod types;
pub mod util;

pub use model::{
    AbilitySlot, Artwork, ChainLink, Composite, DamageRelations, EffectEntry, EvolutionChain,
    FlavorText, Genus, LearnableMove, MoveData, NamedRef, Pokemon, PokemonPage, PokemonSummary,
    ResourcePage, Species, Sprites, StatValue, TypeInfo, TypeMember, TypeSlot, UrlRef,
};
pub use types::TypeName;
pub use util::{display_name, generation_of, id_from_url};

/// Failure taxonomy for remote data access, derived from transport status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("rate limited by the remote API")]
    RateLimited,

    #[error("server error (status {0})")]
    ServerError(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Short message suitable for showing to a user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Pokemon not found",
            ApiError::RateLimited => "Too many requests. Please try again later.",
            ApiError::ServerError(_) => "Server error. Please try again later.",
            ApiError::Network(_) => "Network error. Please check your connection.",
            ApiError::Unknown(_) => "An unexpected error occurred",
        }
    }
}
