//! The delayed opponent turn, as a scheduled task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::engine::{Battle, BattleError, BattleId};

/// Fixed thinking delay before the opponent acts.
pub const OPPONENT_DELAY: Duration = Duration::from_secs(2);

/// A battle shared between the driving task and scheduled turns.
pub type SharedBattle = Arc<Mutex<Battle>>;

/// Resolve the opponent's turn after `delay`.
///
/// The scheduled callback cannot be cancelled, so it is guarded by `token`
/// instead: if the battle was reset or replaced while the delay ran, the
/// engine rejects the turn as stale and the callback discards it rather
/// than mutating the newer battle.
pub fn schedule_opponent_turn(
    battle: SharedBattle,
    token: BattleId,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let mut battle = battle.lock().await;
        let mut rng = rand::thread_rng();
        match battle.opponent_turn(token, &mut rng) {
            Ok(()) => {}
            Err(BattleError::StaleTurn | BattleError::NotInProgress) => {
                tracing::debug!("discarding opponent turn for a superseded battle");
            }
            Err(err) => {
                tracing::warn!(error = %err, "opponent turn could not be resolved");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{BattlePhase, Combatant, Side, BATTLE_HP};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(prefix: &str, size: usize) -> Vec<Combatant> {
        (0..size)
            .map(|i| {
                Combatant::new(
                    i as u32 + 1,
                    format!("{prefix}-{i}"),
                    50,
                    vec!["tackle".to_string()],
                )
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_turn_applies_after_delay() {
        let shared: SharedBattle = Arc::new(Mutex::new(Battle::new()));
        let mut rng = StdRng::seed_from_u64(3);

        let token = {
            let mut battle = shared.lock().await;
            battle.start(roster("player", 1), roster("rival", 1)).unwrap();
            battle.play_move(0, &mut rng).unwrap()
        };

        schedule_opponent_turn(shared.clone(), token, OPPONENT_DELAY)
            .await
            .unwrap();

        let battle = shared.lock().await;
        assert_eq!(battle.turn, Side::Player);
        assert!(battle.player[0].hp < BATTLE_HP);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_callback_discarded_after_reset() {
        let shared: SharedBattle = Arc::new(Mutex::new(Battle::new()));
        let mut rng = StdRng::seed_from_u64(3);

        let token = {
            let mut battle = shared.lock().await;
            battle.start(roster("player", 1), roster("rival", 1)).unwrap();
            battle.play_move(0, &mut rng).unwrap()
        };

        let handle = schedule_opponent_turn(shared.clone(), token, OPPONENT_DELAY);

        // Reset before the delay elapses; the new battle must stay clean.
        {
            let mut battle = shared.lock().await;
            battle.reset();
            battle.start(roster("player", 2), roster("rival", 2)).unwrap();
        }

        handle.await.unwrap();

        let battle = shared.lock().await;
        assert_eq!(battle.phase, BattlePhase::InProgress);
        assert_eq!(battle.turn, Side::Player);
        assert_eq!(battle.player_hp(), vec![BATTLE_HP, BATTLE_HP]);
        assert_eq!(battle.log.len(), 1);
    }
}
