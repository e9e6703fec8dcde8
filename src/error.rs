//! Error types for the game engine

use derive_more::{Display, Error};

/// Errors returned by [`GameEngine`](crate::GameEngine) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index outside the 3x3 board (0-8)
    #[display("cell index {index} is outside the board (expected 0-8)")]
    InvalidIndex { index: i64 },
}

impl EngineError {
    #[inline]
    pub(crate) fn invalid_index(index: impl TryInto<i64>) -> Self {
        Self::InvalidIndex {
            index: index.try_into().unwrap_or(i64::MAX),
        }
    }
}
