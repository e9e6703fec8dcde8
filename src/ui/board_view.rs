//! Board rendering for the Tic-Tac-Toe GUI

use crate::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 150.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        cells: &[Option<Mark>; TOTAL_CELLS],
        winning_line: Option<[usize; 3]>,
        interactive: bool,
    ) -> Option<usize> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y).min(BOARD_MAX);
        self.cell_size = (board_size - CELL_GAP * (BOARD_SIZE as f32 + 1.0)) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        // Board background
        painter.rect_filled(self.board_rect, CornerRadius::same(CELL_ROUNDING), BOARD_BG);

        let hovered = if interactive {
            response.hover_pos().and_then(|p| self.screen_to_cell(p))
        } else {
            None
        };

        // Cells and marks
        for (idx, cell) in cells.iter().enumerate() {
            let highlight = hovered == Some(idx) && cell.is_none();
            self.draw_cell(&painter, idx, *cell, highlight);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw one cell with its mark
    fn draw_cell(&self, painter: &Painter, idx: usize, mark: Option<Mark>, hovered: bool) {
        let rect = self.cell_rect(idx);
        let fill = match (mark, hovered) {
            (Some(_), _) => CELL_FILLED,
            (None, true) => CELL_HOVER,
            (None, false) => CELL_EMPTY,
        };
        painter.rect_filled(rect, CornerRadius::same(CELL_ROUNDING), fill);

        if let Some(mark) = mark {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                mark.symbol(),
                FontId::proportional(MARK_SIZE),
                mark_color(mark),
            );
        }
    }

    /// Outline the winning cells and strike through them
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(WIN_STROKE, WIN_HIGHLIGHT);
        for idx in line {
            painter.rect_stroke(
                self.cell_rect(idx),
                CornerRadius::same(CELL_ROUNDING),
                stroke,
                egui::StrokeKind::Inside,
            );
        }
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let step = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(CELL_GAP + pos.col as f32 * step, CELL_GAP + pos.row as f32 * step);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index (gaps map to None)
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        (0..TOTAL_CELLS).find(|&idx| self.cell_rect(idx).contains(screen_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(360.0)),
        }
    }

    #[test]
    fn test_cell_rect_layout() {
        let view = view();
        let first = view.cell_rect(0);
        assert_eq!(first.min, Pos2::new(15.0, 15.0));
        assert_eq!(first.size(), Vec2::splat(100.0));

        let center = view.cell_rect(4);
        assert_eq!(center.min, Pos2::new(130.0, 130.0));
    }

    #[test]
    fn test_screen_to_cell() {
        let view = view();
        assert_eq!(view.screen_to_cell(Pos2::new(60.0, 60.0)), Some(0));
        assert_eq!(view.screen_to_cell(Pos2::new(180.0, 180.0)), Some(4));
        assert_eq!(view.screen_to_cell(Pos2::new(300.0, 60.0)), Some(2));
        assert_eq!(view.screen_to_cell(Pos2::new(60.0, 300.0)), Some(6));
        // Gap between cells
        assert_eq!(view.screen_to_cell(Pos2::new(120.0, 60.0)), None);
        // Outside the board
        assert_eq!(view.screen_to_cell(Pos2::new(500.0, 500.0)), None);
    }
}
