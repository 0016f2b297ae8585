//! Type matchups and the battle simulator.
//!
//! This crate sits on top of the rest of the workspace:
//!
//! ```text
//! rotomdex-api (models)
//!        │
//!        ├─> rotomdex-client (fetching)    ┐
//!        └─> rotomdex-trainer (team state) ├─> rotomdex-battle ← THIS CRATE
//!                                          ┘
//! ```
//!
//! # Main pieces
//!
//! - [`Effectiveness`] and the chart functions in [`effectiveness`]: the
//!   complete 18-type matchup table with dual-type composition.
//! - [`Battle`]: the Setup -> InProgress -> Concluded turn machine. Damage is
//!   a flat random roll; the type chart deliberately plays no part in it
//!   (this is a casual simulator, not a mechanics model).
//! - [`roster`]: opposing-roster generation from randomly sampled Gen 1
//!   Pokemon, best-effort over the network.
//! - [`driver`]: the delayed opponent turn as a scheduled task, guarded by
//!   a battle generation id so callbacks from a superseded battle are
//!   discarded instead of corrupting the new one.

pub mod driver;
pub mod effectiveness;
pub mod engine;
pub mod roster;

pub use driver::{schedule_opponent_turn, SharedBattle, OPPONENT_DELAY};
pub use effectiveness::{
    dual_effectiveness, effectiveness, immunities, resistances, weaknesses, Effectiveness,
};
pub use engine::{
    Battle, BattleError, BattleEvent, BattleId, BattlePhase, Combatant, Side, BATTLE_HP,
};
pub use roster::{combatant_from_pokemon, generate_opposing_roster};

pub use rotomdex_api::TypeName;
