//! User-side application state: favorites, team, recently viewed, search
//! history, sprite preferences, and the daily featured pick.
//!
//! State changes flow through a single dispatch contract: an [`Action`]
//! applied to a [`TrainerState`] yields a new immutable snapshot, and the
//! owning [`Store`] persists every snapshot through an injected [`Storage`]
//! port. Malformed or absent persisted data degrades to the default state.

pub mod state;
pub mod storage;
pub mod store;

pub use state::{Action, TeamMember, TrainerState, MOVE_CAP, TEAM_CAP};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{Store, DAILY_DATE_KEY, STATE_KEY};
