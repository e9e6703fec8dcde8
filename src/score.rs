//! Running win tally
//!
//! The tally lives as long as the engine that owns it. Starting a new game
//! never touches it, so it can only grow.

use crate::board::Mark;

/// Wins per player across every game played in this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one win to `mark`
    #[inline]
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.wins_x = self.wins_x.saturating_add(1),
            Mark::O => self.wins_o = self.wins_o.saturating_add(1),
        }
    }

    /// Wins for one player
    #[inline]
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// `(wins_x, wins_o)`
    #[inline]
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.wins_x, self.wins_o)
    }

    /// Total decided games
    #[inline]
    pub fn total(&self) -> u32 {
        self.wins_x.saturating_add(self.wins_o)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: X - {} | O - {}", self.wins_x, self.wins_o)
    }
}
