//! Game state management for the Tic-Tac-Toe GUI
//!
//! Dispatch layer between widgets and the engine: clicks come in as cell
//! indices, results go out as an announcement for the Game Over dialog.

use crate::{EngineError, GameEngine, Mark, MoveResult, PlayerNames};
use tracing::{info, warn};

/// Pending Game Over dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub message: String,
    /// Winning triple to highlight while the dialog is open
    pub winning_line: Option<[usize; 3]>,
}

impl Announcement {
    fn win(name: &str, line: [usize; 3]) -> Self {
        Self {
            title: "Game Over".to_string(),
            message: format!("{} wins!", name),
            winning_line: Some(line),
        }
    }

    fn tie() -> Self {
        Self {
            title: "Game Over".to_string(),
            message: "It's a tie!".to_string(),
            winning_line: None,
        }
    }
}

/// UI-side state: the engine plus what the widgets edit and display
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub engine: GameEngine,
    pub names: PlayerNames,
    pub announcement: Option<Announcement>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(names: PlayerNames) -> Self {
        Self {
            engine: GameEngine::new(),
            names,
            announcement: None,
            message: None,
        }
    }

    /// Whether the board accepts clicks
    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.announcement.is_none()
    }

    /// Handle a click on cell `index`
    pub fn click_cell(&mut self, index: usize) -> Result<MoveResult, EngineError> {
        if !self.accepts_input() {
            return Ok(MoveResult::Ignored);
        }

        let result = match self.engine.apply_move(index) {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "bad cell index from UI");
                self.message = Some(err.to_string());
                return Err(err);
            }
        };

        self.message = None;
        match result {
            MoveResult::Win { winner, line } => {
                let name = self.engine.winner_label(winner, &self.names);
                info!(%winner, %name, "announcing win");
                self.announcement = Some(Announcement::win(&name, line));
            }
            MoveResult::Draw => {
                info!("announcing tie");
                self.announcement = Some(Announcement::tie());
            }
            MoveResult::Continue { .. } | MoveResult::Ignored => {}
        }
        Ok(result)
    }

    /// Close the Game Over dialog and start the next game
    pub fn acknowledge(&mut self) {
        if self.announcement.take().is_some() {
            self.engine.reset();
        }
    }

    /// Restart button: new game, scores kept
    pub fn restart(&mut self) {
        self.announcement = None;
        self.message = None;
        self.engine.reset();
    }

    /// Display name of the player to move
    pub fn current_player_name(&self) -> &str {
        self.names.label(self.engine.turn())
    }

    /// Header score line
    pub fn score_text(&self) -> String {
        self.engine.scoreboard().to_string()
    }

    /// Winning triple to highlight, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.announcement.as_ref().and_then(|a| a.winning_line)
    }

    /// Mark at a cell, for rendering
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.engine.board().get_index(index)
    }
}
