use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_try_from_index() {
    assert_eq!(Pos::try_from(0usize), Ok(Pos::new(0, 0)));
    assert_eq!(Pos::try_from(8usize), Ok(Pos::new(2, 2)));
    assert_eq!(
        Pos::try_from(9usize),
        Err(EngineError::InvalidIndex { index: 9 })
    );
    assert_eq!(
        Pos::try_from(-1i32),
        Err(EngineError::InvalidIndex { index: -1 })
    );
    assert_eq!(Pos::try_from(5i32), Ok(Pos::new(1, 2)));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
    assert_eq!(Pos::all().count(), 9);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
}

#[test]
fn test_board_place_and_clear() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place(Pos::new(1, 1), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1)), Some(Mark::X));
    assert_eq!(board.get_index(4), Some(Mark::X));
    assert_eq!(board.mark_count(), 1);
    assert!(!board.is_empty(Pos::new(1, 1)));

    board.clear(Pos::new(1, 1));
    assert!(board.is_board_empty());
    assert_eq!(board.get_index(42), None);
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        assert!(!board.is_full());
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place(pos, mark);
    }
    assert!(board.is_full());
    assert_eq!(board.mark_count(), 9);
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Mark::X);
    board.place(Pos::new(2, 2), Mark::O);
    assert_eq!(board.to_string(), "X|.|.\n.|.|.\n.|.|O");
}
