//! Two-player Tic-Tac-Toe
//!
//! A hotseat Tic-Tac-Toe game with a running scoreboard:
//! - Standard 3x3 board, X moves first
//! - Three in a row (row, column or diagonal) wins
//! - Full board without a line is a draw
//! - Wins are tallied across games for the life of the process
//!
//! # Architecture
//!
//! The rules are kept apart from the window so they can be tested headless:
//! - [`board`]: Board, marks and positions
//! - [`rules`]: Win and draw detection
//! - [`engine`]: Game engine (moves, turns, scores, reset)
//! - [`clock`]: Cancellable wall-clock ticker for the header
//! - [`config`]: Command-line configuration
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameEngine, Mark, MoveResult};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.apply_move(4).unwrap(), MoveResult::Continue { next: Mark::O });
//! // Clicking a taken cell does nothing
//! assert_eq!(engine.apply_move(4).unwrap(), MoveResult::Ignored);
//! assert!(engine.apply_move(9).is_err());
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod players;
pub mod rules;
pub mod score;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use clock::Clock;
pub use config::Config;
pub use engine::{GameEngine, GameStatus, MoveResult};
pub use error::EngineError;
pub use players::PlayerNames;
pub use score::Scoreboard;
