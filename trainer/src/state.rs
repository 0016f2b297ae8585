//! The trainer state snapshot and its reducer.

use serde::{Deserialize, Serialize};

use rotomdex_api::{Pokemon, PokemonSummary, TypeName};

/// A team holds at most six members.
pub const TEAM_CAP: usize = 6;

/// A member knows at most four moves.
pub const MOVE_CAP: usize = 4;

const RECENT_CAP: usize = 10;
const SEARCH_HISTORY_CAP: usize = 20;

/// One slot of the trainer's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeName>,
    pub level: u8,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl TeamMember {
    /// Build a member from a fetched record, with an empty move list.
    pub fn from_pokemon(pokemon: &Pokemon, level: u8) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            sprite: pokemon.sprite(false).map(str::to_owned),
            types: pokemon.type_names(),
            level: level.clamp(1, 100),
            moves: Vec::new(),
            nickname: None,
        }
    }

    /// Display name: nickname when set, species name otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }

    fn normalized(mut self) -> Self {
        self.level = self.level.clamp(1, 100);
        self.moves.truncate(MOVE_CAP);
        self
    }
}

/// Everything the trainer has accumulated this session (and across
/// sessions, via persistence).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerState {
    pub favorites: Vec<u32>,
    pub team: Vec<TeamMember>,
    pub recently_viewed: Vec<PokemonSummary>,
    pub search_history: Vec<String>,
    pub type_filters: Vec<TypeName>,
    pub shiny_sprites: bool,
    pub daily_pick: Option<PokemonSummary>,
}

/// A single state transition. One action in, one new snapshot out.
#[derive(Debug, Clone)]
pub enum Action {
    AddFavorite(u32),
    RemoveFavorite(u32),
    AddToTeam(TeamMember),
    RemoveFromTeam(usize),
    UpdateTeamMember { index: usize, member: TeamMember },
    ClearTeam,
    View(PokemonSummary),
    RecordSearch(String),
    SetTypeFilters(Vec<TypeName>),
    ToggleShinySprites,
    SetDailyPick(PokemonSummary),
}

impl TrainerState {
    /// Apply one action, producing the next snapshot. Invalid actions
    /// (full team, out-of-range index, duplicate favorite) are no-ops.
    pub fn apply(&self, action: Action) -> TrainerState {
        let mut next = self.clone();

        match action {
            Action::AddFavorite(id) => {
                if !next.favorites.contains(&id) {
                    next.favorites.push(id);
                }
            }
            Action::RemoveFavorite(id) => {
                next.favorites.retain(|fav| *fav != id);
            }
            Action::AddToTeam(member) => {
                if next.team.len() < TEAM_CAP {
                    next.team.push(member.normalized());
                }
            }
            Action::RemoveFromTeam(index) => {
                if index < next.team.len() {
                    next.team.remove(index);
                }
            }
            Action::UpdateTeamMember { index, member } => {
                if let Some(slot) = next.team.get_mut(index) {
                    *slot = member.normalized();
                }
            }
            Action::ClearTeam => {
                next.team.clear();
            }
            Action::View(summary) => {
                next.recently_viewed.retain(|entry| entry.id != summary.id);
                next.recently_viewed.insert(0, summary);
                next.recently_viewed.truncate(RECENT_CAP);
            }
            Action::RecordSearch(query) => {
                let query = query.trim().to_string();
                if !query.is_empty() && !next.search_history.iter().any(|q| *q == query) {
                    next.search_history.insert(0, query);
                    next.search_history.truncate(SEARCH_HISTORY_CAP);
                }
            }
            Action::SetTypeFilters(filters) => {
                next.type_filters = filters;
            }
            Action::ToggleShinySprites => {
                next.shiny_sprites = !next.shiny_sprites;
            }
            Action::SetDailyPick(summary) => {
                next.daily_pick = Some(summary);
            }
        }

        next
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    pub fn team_is_full(&self) -> bool {
        self.team.len() >= TEAM_CAP
    }
}
