//! 3x3 board storage

use super::{Mark, Pos, TOTAL_CELLS};

/// Game board: nine cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        self.cells[pos.to_index()]
    }

    /// Get mark by raw index (None for out-of-range indices and empty cells)
    #[inline]
    pub fn get_index(&self, idx: usize) -> Option<Mark> {
        self.cells.get(idx).copied().flatten()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a mark, overwriting whatever was there.
    /// Use `GameEngine::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.to_index()] = Some(mark);
    }

    /// Clear a single cell
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    /// All cells in index order
    #[inline]
    pub fn cells(&self) -> &[Option<Mark>; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of occupied cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl std::fmt::Display for Board {
    /// Renders rows as `X|O|.` separated by newlines
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let symbol = cell.map_or(".", Mark::symbol);
            f.write_str(symbol)?;
            if i % 3 < 2 {
                f.write_str("|")?;
            } else if i + 1 < TOTAL_CELLS {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
