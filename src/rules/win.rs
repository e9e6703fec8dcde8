//! Win and draw detection
//!
//! A line wins when all three of its cells hold the same mark. Lines are
//! scanned in a fixed order (rows, columns, diagonals) and the scan stops at
//! the first match. A single move can complete at most one new line, so the
//! order never changes the verdict.

use crate::board::{Board, Mark};

/// The 8 winning triples, in scan order
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first uniformly-marked line, with its owner
pub fn find_winning_line(board: &Board) -> Option<([usize; 3], Mark)> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get_index(a)?;
        (board.get_index(b) == Some(mark) && board.get_index(c) == Some(mark))
            .then_some((line, mark))
    })
}

/// Check if either player has three in a row
#[inline]
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|(_, mark)| mark)
}

/// Full board and nobody has a line
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (i, ch) in cells.chars().enumerate() {
            match ch {
                'X' => board.place(Pos::from_index(i), Mark::X),
                'O' => board.place(Pos::from_index(i), Mark::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for idx in line {
                    board.place(Pos::from_index(idx), mark);
                }
                assert_eq!(find_winning_line(&board), Some((line, mark)));
            }
        }
    }

    #[test]
    fn test_winner_column() {
        let board = board_from("XO.XO.X..");
        assert_eq!(find_winning_line(&board), Some(([0, 3, 6], Mark::X)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from("XXO.O.O.X");
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from("XXO......");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from("XX.......");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order() {
        // Both the top row and the left column are X
        let board = board_from("XXXX..X..");
        assert_eq!(find_winning_line(&board), Some(([0, 1, 2], Mark::X)));
    }

    #[test]
    fn test_draw_full_board() {
        let board = board_from("XOXOXOOXO");
        assert_eq!(check_winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from("XXXOOXXOO");
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_verdict_independent_of_fill_order() {
        let target = [(0, Mark::X), (1, Mark::O), (4, Mark::X), (2, Mark::O), (8, Mark::X)];
        let mut forward = Board::new();
        let mut backward = Board::new();
        for &(idx, mark) in &target {
            forward.place(Pos::from_index(idx), mark);
        }
        for &(idx, mark) in target.iter().rev() {
            backward.place(Pos::from_index(idx), mark);
        }
        assert_eq!(forward, backward);
        assert_eq!(check_winner(&forward), Some(Mark::X));
        assert_eq!(check_winner(&backward), Some(Mark::X));
    }
}
