//! Game engine: board, turn and score state transitions
//!
//! [`GameEngine`] owns everything the rules need and nothing the window
//! needs. Every operation is a synchronous state transition:
//!
//! 1. **Validate**: the index must name one of the nine cells
//! 2. **Place**: an empty cell takes the current mark (occupied cells are ignored)
//! 3. **Evaluate**: win first, then draw, otherwise the turn passes
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, Mark, MoveResult};
//!
//! let mut engine = GameEngine::new();
//! for idx in [0, 1, 3, 2] {
//!     engine.apply_move(idx).unwrap();
//! }
//! let result = engine.apply_move(6).unwrap();
//! assert_eq!(result, MoveResult::Win { winner: Mark::X, line: [0, 3, 6] });
//! assert_eq!(engine.display_score(), (1, 0));
//! ```

use crate::board::{Board, Mark, Pos};
use crate::error::EngineError;
use crate::players::PlayerNames;
use crate::rules::find_winning_line;
use crate::score::Scoreboard;
use tracing::{debug, info, instrument, warn};

/// Outcome of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Cell already taken, or the game is over. Nothing changed.
    Ignored,
    /// Move placed; `next` is now to play
    Continue { next: Mark },
    /// Move completed a line; the winner's tally went up
    Win { winner: Mark, line: [usize; 3] },
    /// Move filled the last cell without completing a line
    Draw,
}

impl MoveResult {
    /// Whether the game ended on this move
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Draw)
    }
}

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Mark),
    Drawn,
}

/// Rules engine for one table: the current game plus the running tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    status: GameStatus,
    scores: Scoreboard,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            scores: Scoreboard::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    /// Moves placed in the current game
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.board.mark_count()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Place the current mark at `index` (0-8, row-major).
    ///
    /// Out-of-range indices fail with [`EngineError::InvalidIndex`] and leave
    /// the engine untouched. Occupied cells, and any move after the game has
    /// ended, return [`MoveResult::Ignored`].
    pub fn apply_move<I>(&mut self, index: I) -> Result<MoveResult, EngineError>
    where
        I: TryInto<Pos, Error = EngineError>,
    {
        let pos = index.try_into().inspect_err(|err| {
            warn!(%err, "rejected move");
        })?;
        Ok(self.place(pos))
    }

    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    fn place(&mut self, pos: Pos) -> MoveResult {
        if self.is_over() {
            debug!(status = ?self.status, "move after game end ignored");
            return MoveResult::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!("cell occupied, move ignored");
            return MoveResult::Ignored;
        }

        let mark = self.turn;
        self.board.place(pos, mark);
        debug!(index = pos.to_index(), "mark placed");

        if let Some((line, winner)) = find_winning_line(&self.board) {
            self.scores.record_win(winner);
            self.status = GameStatus::Won(winner);
            info!(%winner, ?line, score = %self.scores, "game won");
            return MoveResult::Win { winner, line };
        }

        if self.board.is_full() {
            self.status = GameStatus::Drawn;
            info!("game drawn");
            return MoveResult::Draw;
        }

        self.turn = mark.opponent();
        MoveResult::Continue { next: self.turn }
    }

    /// Start a new game. The scoreboard is kept.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
        info!(score = %self.scores, "new game");
    }

    /// `(wins_x, wins_o)` snapshot
    #[inline]
    pub fn display_score(&self) -> (u32, u32) {
        self.scores.as_tuple()
    }

    /// Display name for `mark`, falling back to "Player X"/"Player O"
    pub fn winner_label(&self, mark: Mark, names: &PlayerNames) -> String {
        names.label(mark).to_string()
    }
}
