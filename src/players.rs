//! Player display names

use crate::board::Mark;

pub const DEFAULT_NAME_X: &str = "Player X";
pub const DEFAULT_NAME_O: &str = "Player O";

/// Names typed into the two name fields.
///
/// Raw text is kept as entered so the fields can be edited in place;
/// [`PlayerNames::label`] trims it and falls back to the default name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Raw field text for a mark
    pub fn raw(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Mutable field text, for binding to a text edit
    pub fn raw_mut(&mut self, mark: Mark) -> &mut String {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Display name: trimmed text, or the default when blank
    pub fn label(&self, mark: Mark) -> &str {
        match self.raw(mark).trim() {
            "" => default_name(mark),
            name => name,
        }
    }
}

/// Fallback name for a mark
#[inline]
pub fn default_name(mark: Mark) -> &'static str {
    match mark {
        Mark::X => DEFAULT_NAME_X,
        Mark::O => DEFAULT_NAME_O,
    }
}
