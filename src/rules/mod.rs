//! Game rules for Tic-Tac-Toe
//!
//! This module implements the rule set:
//! - Win conditions (three in a row over the 8 fixed lines)
//! - Draw detection (full board, no line)

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, is_draw, WIN_LINES};
