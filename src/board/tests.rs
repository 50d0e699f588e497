use super::*;
use crate::error::BoardError;

fn pos(label: &str) -> Pos {
    let (row, col) = parse_label(label).unwrap();
    Pos::new(row as u8, col as u8)
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_stone_chars() {
    for stone in [Stone::Empty, Stone::White, Stone::Black] {
        assert_eq!(Stone::from_char(stone.to_char()), Some(stone));
    }
    assert_eq!(Stone::from_char('w'), Some(Stone::White));
    assert_eq!(Stone::from_char('.'), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 19);
    assert_eq!(Board::new().remaining_empty(), 361);
}

#[test]
fn test_center_label() {
    let board = Board::new();
    let center = board.parse_position("J10").unwrap();
    assert_eq!(center, board.grid().center());
    assert_eq!(center, Pos::new(9, 9));
    assert_eq!(center.to_string(), "J10");
}

#[test]
fn test_label_round_trip_all_positions() {
    let board = Board::new();
    for p in board.grid().positions() {
        assert_eq!(board.parse_position(&p.to_string()), Ok(p));
    }
    assert_eq!(pos("A1"), Pos::new(0, 0));
    assert_eq!(pos("s19"), Pos::new(18, 18));
}

#[test]
fn test_off_board_position_is_refused() {
    let mut board = Board::new();
    // Column 19 is past S; row-major indexing would wrap or overrun
    for off in [Pos::new(5, 19), Pos::new(18, 19), Pos::new(19, 0), Pos::new(200, 200)] {
        assert_eq!(board.can_place(off), Err(BoardError::OutOfBounds));
        assert_eq!(board.place_at(Side::White, off), Err(BoardError::OutOfBounds));
    }
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.get(Pos::new(6, 0)), Stone::Empty);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_label("J"), Err(ParsePosError::Length));
    assert_eq!(parse_label("J100"), Err(ParsePosError::Length));
    assert_eq!(parse_label("JX"), Err(ParsePosError::Row));
    assert_eq!(parse_label("1A"), Err(ParsePosError::Row));
    assert_eq!(parse_label("?10"), Err(ParsePosError::Column));

    let board = Board::new();
    assert_eq!(board.parse_position("T1"), Err(BoardError::OutOfBounds));
    assert_eq!(board.parse_position("A0"), Err(BoardError::OutOfBounds));
    assert_eq!(board.parse_position("A20"), Err(BoardError::OutOfBounds));
    assert!(matches!(board.parse_position("1"), Err(BoardError::Parse(_))));
}

#[test]
fn test_chebyshev_distance() {
    let grid = Grid::new(BOARD_SIZE);
    assert_eq!(grid.distance_from_center(9, 9), 0);
    assert_eq!(grid.distance_from_center(12, 10), 3);
    assert_eq!(grid.distance_from_center(0, 18), 9);
    assert!(grid.is_valid(18, 0));
    assert!(!grid.is_valid(19, 0));
    assert!(!grid.is_valid(0, -1));
}

#[test]
fn test_place_and_query() {
    let mut board = Board::new();
    board.place(Side::White, "J10").unwrap();

    assert_eq!(board.get(pos("J10")), Stone::White);
    assert_eq!(board.remaining_empty(), BOARD_SIZE * BOARD_SIZE - 1);
    assert_eq!(board.last_move_position(), Some(pos("J10")));
    assert_eq!(board.history_len(), 1);
    assert!(!board.is_game_over());

    assert_eq!(board.place(Side::Black, "J10"), Err(BoardError::Occupied));
    assert_eq!(board.place(Side::Black, "Z10"), Err(BoardError::OutOfBounds));
    assert!(matches!(board.place(Side::Black, "10"), Err(BoardError::Parse(_))));
    // Rejections leave the board untouched
    assert_eq!(board.history_len(), 1);
}

#[test]
fn test_center_only_bounds() {
    let mut board = Board::new();
    board.set_bounds(0, 0).unwrap();

    let center = board.grid().center();
    for p in board.grid().positions().filter(|&p| p != center) {
        assert_eq!(board.place_at(Side::White, p), Err(BoardError::BoundsRestricted));
    }
    assert_eq!(board.place_at(Side::White, center), Ok(()));
}

#[test]
fn test_inner_bound_rejects_near_center() {
    let mut board = Board::new();
    board.set_bounds(3, BOARD_SIZE).unwrap();
    assert_eq!(board.place(Side::White, "K11"), Err(BoardError::BoundsRestricted));
    assert_eq!(board.place(Side::White, "L12"), Err(BoardError::BoundsRestricted));
    assert_eq!(board.place(Side::White, "M10"), Ok(()));
}

#[test]
fn test_set_bounds_range() {
    let mut board = Board::new();
    assert_eq!(board.set_bounds(0, BOARD_SIZE + 1), Err(BoardError::InvalidBounds));
    assert_eq!(board.set_bounds(BOARD_SIZE + 1, 0), Err(BoardError::InvalidBounds));
    assert_eq!(board.inner_bounds(), 0);
    assert_eq!(board.outer_bounds(), BOARD_SIZE);
}

#[test]
fn test_win_ends_game() {
    let mut board = Board::new();
    for label in ["A1", "B1", "C1", "D1"] {
        board.place(Side::Black, label).unwrap();
    }
    assert!(!board.is_winner());
    board.place(Side::Black, "E1").unwrap();

    assert!(board.is_winner());
    assert!(board.is_game_over());
    assert_eq!(board.winning_lines_of_last_move(), 1);
    assert_eq!(board.get(pos("E1")), Stone::Black);
    assert_eq!(board.place(Side::White, "J10"), Err(BoardError::GameAlreadyOver));

    // Taking back the winning stone reopens the game
    board.undo().unwrap();
    assert!(!board.is_game_over());
    assert!(!board.is_winner());
    assert_eq!(board.last_move_position(), Some(pos("D1")));
    assert_eq!(board.place(Side::White, "E1"), Ok(()));
}

#[test]
fn test_occupied_checked_before_game_over() {
    let mut board = Board::new();
    for label in ["A1", "B1", "C1", "D1", "E1"] {
        board.place(Side::White, label).unwrap();
    }
    assert_eq!(board.place(Side::Black, "A1"), Err(BoardError::Occupied));
}

#[test]
fn test_capture_then_rescan() {
    let mut board = Board::new();
    board.place(Side::White, "A1").unwrap();
    board.place(Side::Black, "B1").unwrap();
    board.place(Side::Black, "C1").unwrap();
    board.place(Side::White, "D1").unwrap();

    assert_eq!(board.captured_pairs_of_last_move(), 1);
    assert_eq!(board.get(pos("B1")), Stone::Empty);
    assert_eq!(board.get(pos("C1")), Stone::Empty);
    assert_eq!(board.get(pos("A1")), Stone::White);
    assert_eq!(board.get(pos("D1")), Stone::White);
    assert_eq!(board.remaining_empty(), BOARD_SIZE * BOARD_SIZE - 2);
    assert!(crate::rules::get_captured_positions(board.grid(), pos("D1"), Stone::White).is_empty());
}

#[test]
fn test_undo_restores_captured_pair() {
    let mut board = Board::new();
    board.place(Side::White, "J10").unwrap();
    board.place(Side::Black, "K10").unwrap();
    board.place(Side::Black, "L10").unwrap();
    let before = board.snapshot_grid();
    let empty = board.remaining_empty();

    board.place(Side::White, "M10").unwrap();
    assert_eq!(board.captured_pairs_of_last_move(), 1);

    board.undo().unwrap();
    assert_eq!(board.snapshot_grid(), before);
    assert_eq!(board.remaining_empty(), empty);
    assert_eq!(board.captured_pairs_of_last_move(), 0);
    assert_eq!(board.last_move_position(), Some(pos("L10")));
}

#[test]
fn test_undo_round_trip() {
    let mut board = Board::new();
    board.place(Side::Black, "C3").unwrap();
    let before = board.snapshot_grid();
    let empty = board.remaining_empty();
    let depth = board.history_len();

    let moves = [
        (Side::White, "J10"),
        (Side::Black, "K11"),
        (Side::Black, "L12"),
        (Side::White, "M13"), // captures K11, L12
        (Side::Black, "K10"),
        (Side::White, "H10"),
        (Side::Black, "K11"),
    ];
    for &(side, label) in &moves {
        board.place(side, label).unwrap();
    }
    for _ in &moves {
        board.undo().unwrap();
    }

    assert_eq!(board.snapshot_grid(), before);
    assert_eq!(board.remaining_empty(), empty);
    assert_eq!(board.history_len(), depth);
    assert_eq!(board.remaining_empty() + board.stone_count(), BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_undo_restores_bounds() {
    let mut board = Board::new();
    board.set_bounds(0, 0).unwrap();
    board.place(Side::White, "J10").unwrap();
    board.set_bounds(0, BOARD_SIZE).unwrap();
    board.place(Side::Black, "A1").unwrap();

    board.undo().unwrap();
    board.undo().unwrap();
    assert_eq!(board.outer_bounds(), 0);
    assert_eq!(board.undo(), Err(BoardError::NoPriorMoves));
    assert_eq!(board.last_move_position(), None);
}

#[test]
fn test_set_board_rejections_are_transactional() {
    let mut board = Board::new();
    board.place(Side::White, "J10").unwrap();
    let before = board.snapshot_grid();

    let short = vec![vec![Stone::Empty; BOARD_SIZE]; BOARD_SIZE - 1];
    assert_eq!(board.set_board(&short), Err(BoardError::InvalidBoardShape));

    let mut ragged = vec![vec![Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
    ragged[4].pop();
    assert_eq!(board.set_board(&ragged), Err(BoardError::InvalidBoardShape));

    let mut winning = vec![vec![Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
    for row in winning.iter_mut().take(5) {
        row[3] = Stone::Black;
    }
    assert_eq!(board.set_board(&winning), Err(BoardError::AlreadyWinningBoard));

    // Runs of two along rows, no longer runs in any other lane
    let full: Vec<Vec<Stone>> = (0..BOARD_SIZE)
        .map(|r| {
            (0..BOARD_SIZE)
                .map(|c| if (c + 2 * r) % 4 < 2 { Stone::White } else { Stone::Black })
                .collect()
        })
        .collect();
    assert_eq!(board.set_board(&full), Err(BoardError::FullBoard));

    assert_eq!(board.snapshot_grid(), before);
    assert_eq!(board.history_len(), 1);
}

#[test]
fn test_set_board_replaces_state() {
    let mut board = Board::new();
    board.place(Side::White, "J10").unwrap();
    board.set_bounds(0, 0).unwrap();

    let mut rows = vec![vec![Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
    rows[0][0] = Stone::Black;
    rows[18][18] = Stone::White;
    rows[5][7] = Stone::White;
    board.set_board(&rows).unwrap();

    assert_eq!(board.snapshot_grid(), rows);
    assert_eq!(board.remaining_empty(), BOARD_SIZE * BOARD_SIZE - 3);
    assert_eq!(board.history_len(), 0);
    assert_eq!(board.last_move_position(), None);
    assert_eq!(board.outer_bounds(), 0);
    assert_eq!(board.undo(), Err(BoardError::NoPriorMoves));
}

#[test]
fn test_full_board_is_over() {
    let mut board = Board::with_size(5);
    // Two-by-two blocks of alternating colour, leaving the far corner open
    let mut rows: Vec<Vec<Stone>> = (0..5)
        .map(|r| {
            (0..5)
                .map(|c| if (r / 2 + c / 2) % 2 == 0 { Stone::White } else { Stone::Black })
                .collect()
        })
        .collect();
    rows[4][4] = Stone::Empty;
    board.set_board(&rows).unwrap();
    assert!(!board.is_board_full());

    board.place(Side::Black, "E5").unwrap();
    assert!(board.is_board_full());
    assert!(board.is_game_over());
    assert!(!board.is_winner());
    assert_eq!(board.place(Side::White, "A1"), Err(BoardError::Occupied));
}

#[test]
fn test_uninterrupted_through_board() {
    let mut board = Board::new();
    for label in ["C5", "D5", "E5", "F5"] {
        board.place(Side::White, label).unwrap();
    }
    assert_eq!(board.count_uninterrupted(4, Side::White), 1);
    assert_eq!(board.count_uninterrupted(4, Side::Black), 0);
    assert_eq!(board.count_lines_at(4, pos("C5")), 1);
}
