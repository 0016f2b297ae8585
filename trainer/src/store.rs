//! The store: owns the current snapshot, persists every transition.

use rand::Rng;

use rotomdex_api::PokemonSummary;

use crate::state::{Action, TrainerState};
use crate::storage::Storage;

/// Storage key for the whole-state JSON blob.
pub const STATE_KEY: &str = "trainer-state";

/// Storage key for the calendar date of the current daily pick.
pub const DAILY_DATE_KEY: &str = "daily-pick-date";

/// Ids eligible for the daily pick.
const DAILY_POOL_SIZE: u32 = 1010;

/// Single authoritative writer for [`TrainerState`].
///
/// Loaded from storage at construction (tolerating absent or malformed
/// data) and written back after every dispatch. Storage failures are
/// logged, never fatal: persistence is best-effort.
pub struct Store {
    state: TrainerState,
    storage: Box<dyn Storage>,
}

impl Store {
    /// Restore state from `storage`, falling back to defaults when the
    /// persisted blob is missing or unreadable.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let state = storage
            .read(STATE_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(state) => Some(state),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted trainer state unreadable, starting fresh");
                    None
                }
            })
            .unwrap_or_default();

        Self { state, storage }
    }

    /// The current snapshot.
    pub fn state(&self) -> &TrainerState {
        &self.state
    }

    /// Apply an action and persist the resulting snapshot.
    pub fn dispatch(&mut self, action: Action) -> &TrainerState {
        self.state = self.state.apply(action);
        self.persist();
        &self.state
    }

    /// Ensure there is a daily pick for `today` (any stable calendar-date
    /// string). A pick from an earlier date, or no pick at all, is replaced
    /// with a fresh uniform draw and the date key is updated; reruns on the
    /// same date leave the pick untouched.
    pub fn refresh_daily_pick(&mut self, today: &str, rng: &mut impl Rng) -> &TrainerState {
        let stored_date = self.storage.read(DAILY_DATE_KEY);
        let stale = self.state.daily_pick.is_none() || stored_date.as_deref() != Some(today);

        if stale {
            let id = rng.gen_range(1..=DAILY_POOL_SIZE);
            let pick = PokemonSummary::bare(id, format!("pokemon-{id}"));
            self.dispatch(Action::SetDailyPick(pick));

            if let Err(err) = self.storage.write(DAILY_DATE_KEY, today) {
                tracing::warn!(error = %err, "failed to persist daily-pick date");
            }
        }

        &self.state
    }

    fn persist(&self) {
        match serde_json::to_string(&self.state) {
            Ok(raw) => {
                if let Err(err) = self.storage.write(STATE_KEY, &raw) {
                    tracing::warn!(error = %err, "failed to persist trainer state");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize trainer state");
            }
        }
    }
}
