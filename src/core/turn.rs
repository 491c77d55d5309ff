//! Turn resolution: whose shot it is, what a shot does, and who has won.

use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::{ShotOutcome, Side, TurnError};
use super::config::{CellSet, BOARD_SIZE};

/// Where a match stands between shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    WaitingForPlayerShot,
    WaitingForOpponentShot,
    GameOver { winner: Side },
}

impl TurnState {
    /// Side expected to fire next, if any.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            TurnState::WaitingForPlayerShot => Some(Side::Player),
            TurnState::WaitingForOpponentShot => Some(Side::Opponent),
            TurnState::GameOver { .. } => None,
        }
    }
}

/// Indices the automated opponent has already fired at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotLog {
    tried: CellSet,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.tried.contains(index)
    }

    /// Record `index`. Returns `false` if it was already present or out of range.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.tried.contains(index) {
            return false;
        }
        self.tried.set(index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.tried.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.tried.is_empty()
    }

    pub fn clear(&mut self) {
        self.tried.clear_all();
    }

    /// Uniformly random index not yet in the log.
    pub fn pick_untried<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.tried.is_full() {
            return None;
        }
        let free = BOARD_SIZE - self.len();
        let nth = rng.random_range(0..free);
        (0..BOARD_SIZE).filter(|i| !self.contains(*i)).nth(nth)
    }
}

/// What a resolved shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub index: usize,
    pub outcome: ShotOutcome,
    /// State after the shot.
    pub state: TurnState,
}

/// Alternating-turn state machine over the two boards.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    state: TurnState,
    shot_log: ShotLog,
    player_shots: usize,
    opponent_shots: usize,
}

impl TurnEngine {
    /// A fresh engine waiting for the player's first shot.
    pub fn new() -> Self {
        Self {
            state: TurnState::WaitingForPlayerShot,
            shot_log: ShotLog::new(),
            player_shots: 0,
            opponent_shots: 0,
        }
    }

    /// Engine resuming with an existing opponent shot log.
    pub fn with_shot_log(shot_log: ShotLog) -> Self {
        Self {
            shot_log,
            ..Self::new()
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn shot_log(&self) -> &ShotLog {
        &self.shot_log
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_shots,
            Side::Opponent => self.opponent_shots,
        }
    }

    fn expect_turn(&self, side: Side) -> Result<(), TurnError> {
        match self.state.to_move() {
            None => Err(TurnError::GameOver),
            Some(s) if s == side => Ok(()),
            Some(_) => Err(TurnError::NotYourTurn(side)),
        }
    }

    /// Resolve the player's shot at `index` on the opponent board.
    ///
    /// A repeated or out-of-range target is refused without changing state.
    pub fn player_shot(
        &mut self,
        opponent_board: &mut Board,
        index: usize,
    ) -> Result<ShotReport, TurnError> {
        self.expect_turn(Side::Player)?;
        let outcome = opponent_board.mark_shot(index)?;
        self.player_shots += 1;
        self.state = if opponent_board.is_defeated() {
            TurnState::GameOver {
                winner: Side::Player,
            }
        } else {
            TurnState::WaitingForOpponentShot
        };
        debug!("player fired at {}: {:?} -> {:?}", index, outcome, self.state);
        Ok(ShotReport {
            shooter: Side::Player,
            index,
            outcome,
            state: self.state,
        })
    }

    /// Let the opponent pick an untried cell of the player board and fire.
    pub fn opponent_shot<R: Rng + ?Sized>(
        &mut self,
        player_board: &mut Board,
        rng: &mut R,
    ) -> Result<ShotReport, TurnError> {
        self.expect_turn(Side::Opponent)?;
        let index = self
            .shot_log
            .pick_untried(rng)
            .ok_or(TurnError::NoTargetLeft)?;
        self.shot_log.insert(index);
        let outcome = player_board.mark_shot(index)?;
        self.opponent_shots += 1;
        self.state = if player_board.is_defeated() {
            TurnState::GameOver {
                winner: Side::Opponent,
            }
        } else {
            TurnState::WaitingForPlayerShot
        };
        debug!("opponent fired at {}: {:?} -> {:?}", index, outcome, self.state);
        Ok(ShotReport {
            shooter: Side::Opponent,
            index,
            outcome,
            state: self.state,
        })
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
