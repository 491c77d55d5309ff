//! Match orchestration: board generation, start/reset lifecycle and the
//! hand-off between the player's shot and the opponent's delayed reply.
//!
//! The controller is synchronous. A player shot that leaves the match open
//! yields a [`PendingReply`]; whoever schedules events hands it back to
//! [`GameController::opponent_reply`] after the reply delay. Replies minted
//! for an earlier match, or arriving after the match ended, are dropped.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::{
    populate_with_retries, Board, MatchConfig, PlacementError, ShotOutcome, ShotReport, Side,
    TurnEngine, TurnState, BOARD_SIZE,
};
use crate::render::{status, visual_state, BoardId, Renderer};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Boards are drawn, shots are not accepted yet.
    NotStarted,
    InProgress,
    /// One fleet is gone.
    Finished,
}

/// Token for an opponent reply that is due after the reply delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    match_id: u64,
}

impl PendingReply {
    /// Match the reply was scheduled for.
    pub fn match_id(&self) -> u64 {
        self.match_id
    }
}

pub struct GameController<R: Renderer> {
    renderer: R,
    rng: SmallRng,
    config: MatchConfig,
    player: Board,
    opponent: Board,
    turns: TurnEngine,
    phase: Phase,
    match_id: u64,
}

impl<R: Renderer> GameController<R> {
    /// Build a controller and lay out the first match.
    pub fn new(renderer: R, config: MatchConfig, rng: SmallRng) -> Result<Self, PlacementError> {
        let mut controller = Self {
            renderer,
            rng,
            config,
            player: Board::new(),
            opponent: Board::new(),
            turns: TurnEngine::new(),
            phase: Phase::NotStarted,
            match_id: 0,
        };
        controller.new_match()?;
        Ok(controller)
    }

    /// Build a controller whose RNG comes from `config.seed`, or from the
    /// thread RNG when no seed is set.
    #[cfg(feature = "std")]
    pub fn from_config(renderer: R, config: MatchConfig) -> Result<Self, PlacementError> {
        use rand::SeedableRng;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::new(renderer, config, rng)
    }

    /// Lay out fresh boards for both sides and redraw them. Input stays
    /// disabled until [`start`](Self::start).
    pub fn new_match(&mut self) -> Result<(), PlacementError> {
        let player = populate_with_retries(&mut self.rng, self.config.max_populate_attempts)?;
        let opponent = populate_with_retries(&mut self.rng, self.config.max_populate_attempts)?;
        self.player = Board::from_layout(player);
        self.opponent = Board::from_layout(opponent);
        self.turns = TurnEngine::new();
        self.phase = Phase::NotStarted;
        self.match_id += 1;
        info!("match {} laid out", self.match_id);

        self.redraw();
        self.renderer.set_input_enabled(BoardId::Opponent, false);
        self.renderer.render_status(status::READY);
        Ok(())
    }

    /// Open the match for shots. A match that has already been played (or is
    /// being played) is replaced by a fresh one first.
    pub fn start(&mut self) -> Result<(), PlacementError> {
        if self.phase != Phase::NotStarted {
            self.new_match()?;
        }
        self.phase = Phase::InProgress;
        info!("match {} started", self.match_id);
        self.renderer.set_input_enabled(BoardId::Opponent, true);
        self.renderer.render_status(status::STARTED);
        Ok(())
    }

    /// Abandon the current match and lay out a new one, not started.
    pub fn reset(&mut self) -> Result<(), PlacementError> {
        info!("match {} reset", self.match_id);
        self.new_match()
    }

    /// Handle a click on `board` at `index`.
    ///
    /// Only shots at the opponent board during the player's turn count;
    /// anything else is ignored. Returns the reply to schedule, if any.
    pub fn on_cell_activated(&mut self, board: BoardId, index: usize) -> Option<PendingReply> {
        if board != BoardId::Opponent {
            debug!("ignoring activation on own board at {}", index);
            return None;
        }
        if self.phase != Phase::InProgress {
            debug!("ignoring shot at {} while {:?}", index, self.phase);
            return None;
        }
        let report = match self.turns.player_shot(&mut self.opponent, index) {
            Ok(report) => report,
            Err(e) => {
                debug!("ignoring shot at {}: {}", index, e);
                return None;
            }
        };
        self.show_shot(&report);
        match report.state {
            TurnState::GameOver { winner } => {
                self.finish(winner);
                None
            }
            _ => Some(PendingReply {
                match_id: self.match_id,
            }),
        }
    }

    /// Fire the opponent's reply. Returns `false` without touching anything
    /// when the reply is stale or the match is no longer in play.
    pub fn opponent_reply(&mut self, reply: PendingReply) -> bool {
        if reply.match_id != self.match_id || self.phase != Phase::InProgress {
            debug!(
                "dropping stale reply for match {} (current {}, {:?})",
                reply.match_id, self.match_id, self.phase
            );
            return false;
        }
        let report = match self.turns.opponent_shot(&mut self.player, &mut self.rng) {
            Ok(report) => report,
            Err(e) => {
                debug!("opponent reply refused: {}", e);
                return false;
            }
        };
        self.show_shot(&report);
        if let TurnState::GameOver { winner } = report.state {
            self.finish(winner);
        }
        true
    }

    fn show_shot(&mut self, report: &ShotReport) {
        let (board, cells, reveal) = match report.shooter {
            Side::Player => (BoardId::Opponent, &self.opponent, false),
            Side::Opponent => (BoardId::Player, &self.player, true),
        };
        if let Ok(cell) = cells.cell_state(report.index) {
            self.renderer
                .render_cell(board, report.index, visual_state(cell, reveal));
        }
        let message = match (report.shooter, report.outcome) {
            (Side::Player, ShotOutcome::Miss) => status::PLAYER_MISS,
            (Side::Player, ShotOutcome::Hit) => status::PLAYER_HIT,
            (Side::Player, ShotOutcome::Sunk(_)) => status::PLAYER_SUNK,
            (Side::Opponent, ShotOutcome::Miss) => status::OPPONENT_MISS,
            (Side::Opponent, _) => status::OPPONENT_HIT,
        };
        self.renderer.render_status(message);
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Finished;
        info!(
            "match {} won by {:?} after {} player shots",
            self.match_id,
            winner,
            self.turns.shots_fired(Side::Player)
        );
        self.renderer.set_input_enabled(BoardId::Opponent, false);
        self.renderer.render_status(match winner {
            Side::Player => status::PLAYER_WON,
            Side::Opponent => status::PLAYER_LOST,
        });
    }

    fn redraw(&mut self) {
        for index in 0..BOARD_SIZE {
            if let Ok(cell) = self.player.cell_state(index) {
                self.renderer
                    .render_cell(BoardId::Player, index, visual_state(cell, true));
            }
            if let Ok(cell) = self.opponent.cell_state(index) {
                self.renderer
                    .render_cell(BoardId::Opponent, index, visual_state(cell, false));
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn_state(&self) -> TurnState {
        self.turns.state()
    }

    pub fn turns(&self) -> &TurnEngine {
        &self.turns
    }

    pub fn winner(&self) -> Option<Side> {
        self.turns.winner()
    }

    /// Identifier of the current match; bumped by every layout.
    pub fn match_id(&self) -> u64 {
        self.match_id
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn board(&self, board: BoardId) -> &Board {
        match board {
            BoardId::Player => &self.player,
            BoardId::Opponent => &self.opponent,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
