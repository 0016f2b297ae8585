//! The turn-based battle state machine.
//!
//! Three phases: Setup -> InProgress -> Concluded. Every mutation goes
//! through the turn-resolution methods, and every battle carries a
//! generation id so a delayed opponent turn scheduled against an older
//! battle is detected and discarded.
//!
//! Damage is a flat random roll per side; the type chart is deliberately
//! not consulted here. This is a casual simulator.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use rotomdex_trainer::TeamMember;

/// Every slot starts each battle at this HP; real stat formulas are not
/// used.
pub const BATTLE_HP: u32 = 100;

const PLAYER_DAMAGE_MIN: u32 = 10;
const PLAYER_DAMAGE_MAX: u32 = 39;
const OPPONENT_DAMAGE_MIN: u32 = 8;
const OPPONENT_DAMAGE_MAX: u32 = 32;

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("cannot start a battle with an empty roster")]
    EmptyRoster,

    #[error("battle already started")]
    AlreadyStarted,

    #[error("no battle in progress")]
    NotInProgress,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("it is not the opponent's turn")]
    NotOpponentsTurn,

    #[error("turn belongs to a superseded battle")]
    StaleTurn,
}

/// Which side of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Generation counter identifying one battle instance. Reset bumps it, so
/// tokens handed out for scheduling go stale with the battle they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Setup,
    InProgress,
    Concluded { winner: Side },
}

/// Append-only battle log entries.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    Started,
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
        damage: u32,
    },
    Fainted {
        side: Side,
        name: String,
    },
    Concluded {
        winner: Side,
    },
}

/// One roster slot, snapshotted at battle start.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: u32,
    pub name: String,
    pub level: u8,
    pub moves: Vec<String>,
    pub hp: u32,
    pub max_hp: u32,
}

impl Combatant {
    pub fn new(id: u32, name: impl Into<String>, level: u8, moves: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            moves,
            hp: BATTLE_HP,
            max_hp: BATTLE_HP,
        }
    }

    /// Snapshot a team slot into battle form.
    pub fn from_team_member(member: &TeamMember) -> Self {
        Self::new(
            member.id,
            member.display_name(),
            member.level,
            member.moves.clone(),
        )
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }
}

/// The battle machine. Create with [`Battle::new`], feed rosters through
/// [`Battle::start`], then alternate [`Battle::play_move`] and
/// [`Battle::opponent_turn`].
#[derive(Debug, Clone)]
pub struct Battle {
    id: BattleId,
    pub phase: BattlePhase,
    pub player: Vec<Combatant>,
    pub opponent: Vec<Combatant>,
    pub active_player: usize,
    pub active_opponent: usize,
    pub turn: Side,
    pub log: Vec<BattleEvent>,
}

impl Battle {
    pub fn new() -> Self {
        Self {
            id: BattleId(1),
            phase: BattlePhase::Setup,
            player: Vec::new(),
            opponent: Vec::new(),
            active_player: 0,
            active_opponent: 0,
            turn: Side::Player,
            log: Vec::new(),
        }
    }

    /// This battle instance's generation token.
    pub fn id(&self) -> BattleId {
        self.id
    }

    /// Begin a battle from Setup. Both rosters must be non-empty; every
    /// slot's HP is reset to [`BATTLE_HP`] and the player moves first.
    /// Returns the generation token to use for scheduled opponent turns.
    pub fn start(
        &mut self,
        player: Vec<Combatant>,
        opponent: Vec<Combatant>,
    ) -> Result<BattleId, BattleError> {
        if self.phase != BattlePhase::Setup {
            return Err(BattleError::AlreadyStarted);
        }
        if player.is_empty() || opponent.is_empty() {
            return Err(BattleError::EmptyRoster);
        }

        self.player = player;
        self.opponent = opponent;
        for slot in self.player.iter_mut().chain(self.opponent.iter_mut()) {
            slot.hp = slot.max_hp;
        }
        self.active_player = 0;
        self.active_opponent = 0;
        self.turn = Side::Player;
        self.log.clear();
        self.log.push(BattleEvent::Started);
        self.phase = BattlePhase::InProgress;

        Ok(self.id)
    }

    /// Resolve the player's turn: the chosen move strikes the opposing
    /// active slot for a uniform roll in 10..=39, clamped at 0 HP, and the
    /// turn passes to the opponent. A move index beyond the known moves
    /// gets a placeholder label rather than failing.
    pub fn play_move(
        &mut self,
        move_index: usize,
        rng: &mut impl Rng,
    ) -> Result<BattleId, BattleError> {
        if self.phase != BattlePhase::InProgress {
            return Err(BattleError::NotInProgress);
        }
        if self.turn != Side::Player {
            return Err(BattleError::NotPlayersTurn);
        }

        let attacker = &self.player[self.active_player];
        let move_name = attacker
            .moves
            .get(move_index)
            .cloned()
            .unwrap_or_else(|| format!("Move {}", move_index + 1));
        let attacker_name = attacker.name.clone();

        let damage = rng.gen_range(PLAYER_DAMAGE_MIN..=PLAYER_DAMAGE_MAX);
        let target = &mut self.opponent[self.active_opponent];
        target.hp = target.hp.saturating_sub(damage);

        self.log.push(BattleEvent::MoveUsed {
            side: Side::Player,
            attacker: attacker_name,
            move_name,
            damage,
        });
        self.turn = Side::Opponent;

        Ok(self.id)
    }

    /// Resolve the opponent's turn. `expected` must match the current
    /// battle generation; a token from before a reset is rejected with
    /// [`BattleError::StaleTurn`] and the state is left untouched.
    ///
    /// If the opposing active slot already fainted, the opponent spends the
    /// turn advancing to its next living slot (or the battle concludes with
    /// a player win). Otherwise it attacks with a random known move for a
    /// uniform roll in 8..=32, after which the player side gets the same
    /// faint-advance-or-conclude treatment.
    pub fn opponent_turn(
        &mut self,
        expected: BattleId,
        rng: &mut impl Rng,
    ) -> Result<(), BattleError> {
        if expected != self.id {
            return Err(BattleError::StaleTurn);
        }
        if self.phase != BattlePhase::InProgress {
            return Err(BattleError::NotInProgress);
        }
        if self.turn != Side::Opponent {
            return Err(BattleError::NotOpponentsTurn);
        }

        // A slot the player just knocked out faints now; advancing (or
        // conceding) consumes the opponent's action this turn.
        if self.opponent[self.active_opponent].is_fainted() {
            let name = self.opponent[self.active_opponent].name.clone();
            self.log.push(BattleEvent::Fainted {
                side: Side::Opponent,
                name,
            });

            match self.next_living(&self.opponent, self.active_opponent) {
                Some(index) => {
                    self.active_opponent = index;
                    self.turn = Side::Player;
                }
                None => self.conclude(Side::Player),
            }
            return Ok(());
        }

        let attacker = &self.opponent[self.active_opponent];
        let move_name = attacker
            .moves
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Tackle".to_string());
        let attacker_name = attacker.name.clone();

        let damage = rng.gen_range(OPPONENT_DAMAGE_MIN..=OPPONENT_DAMAGE_MAX);
        let target = &mut self.player[self.active_player];
        target.hp = target.hp.saturating_sub(damage);

        self.log.push(BattleEvent::MoveUsed {
            side: Side::Opponent,
            attacker: attacker_name,
            move_name,
            damage,
        });
        self.turn = Side::Player;

        if self.player[self.active_player].is_fainted() {
            let name = self.player[self.active_player].name.clone();
            self.log.push(BattleEvent::Fainted {
                side: Side::Player,
                name,
            });

            match self.next_living(&self.player, self.active_player) {
                Some(index) => self.active_player = index,
                None => self.conclude(Side::Opponent),
            }
        }

        Ok(())
    }

    /// Discard all battle state and return to Setup. The generation bumps,
    /// so any opponent turn still scheduled against the old battle will be
    /// rejected as stale.
    pub fn reset(&mut self) -> BattleId {
        self.id = BattleId(self.id.0 + 1);
        self.phase = BattlePhase::Setup;
        self.player.clear();
        self.opponent.clear();
        self.active_player = 0;
        self.active_opponent = 0;
        self.turn = Side::Player;
        self.log.clear();
        self.id
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            BattlePhase::Concluded { winner } => Some(winner),
            _ => None,
        }
    }

    /// Current HP of every player slot, roster order.
    pub fn player_hp(&self) -> Vec<u32> {
        self.player.iter().map(|c| c.hp).collect()
    }

    /// Current HP of every opposing slot, roster order.
    pub fn opponent_hp(&self) -> Vec<u32> {
        self.opponent.iter().map(|c| c.hp).collect()
    }

    fn next_living(&self, roster: &[Combatant], after: usize) -> Option<usize> {
        roster
            .iter()
            .enumerate()
            .skip(after + 1)
            .find(|(_, slot)| !slot.is_fainted())
            .map(|(index, _)| index)
    }

    fn conclude(&mut self, winner: Side) {
        self.phase = BattlePhase::Concluded { winner };
        self.log.push(BattleEvent::Concluded { winner });
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}
