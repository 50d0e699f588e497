//! Pair capture rules
//!
//! Capture pattern: X-O-O-X where X is the stone just placed and O is the
//! opponent. Exactly two stones are removed; the bracketing stones stay.

use crate::board::scan::{scan_directional, scan_ray};
use crate::board::{Direction, Grid, Pos, Stone};

/// Length of a capture bracket: mover, other, other, mover
pub const CAPTURE_SPAN: usize = 4;
/// Stones removed by one capture
pub const PAIR: usize = 2;

/// Find positions that would be captured by the stone placed at `pos`.
///
/// Each of the eight directions is checked on its own, since a bracket on one
/// side of the stone is unrelated to the other side.
///
/// # Returns
/// Vector of captured positions (always even, pairs of stones)
pub fn get_captured_positions(grid: &Grid, pos: Pos, stone: Stone) -> Vec<Pos> {
    let opponent = stone.opponent();
    let mut captured = Vec::new();

    for dir in Direction::ALL {
        let seq = scan_ray(grid, CAPTURE_SPAN, pos, dir);
        if seq.len() != CAPTURE_SPAN {
            continue;
        }
        if seq[0] == seq[3] && seq[1] == opponent && seq[2] == opponent {
            captured.extend((1..=PAIR).filter_map(|step| grid.offset(pos, dir.delta(), step)));
        }
    }

    captured
}

/// Remove every pair bracketed by the stone at `pos`.
///
/// The stone must already be on the grid. Returns the removed positions.
pub fn execute_captures(grid: &mut Grid, pos: Pos) -> Vec<Pos> {
    let stone = grid.get(pos);
    if stone == Stone::Empty {
        return Vec::new();
    }

    let captured = get_captured_positions(grid, pos, stone);
    for &cap in &captured {
        grid.set(cap, Stone::Empty);
    }
    captured
}

/// Count the lanes through `pos` where `stone` has a pair that the opponent
/// could capture on their next move.
///
/// A pair is exposed when it is flanked by an opponent stone on one end and
/// an empty intersection on the other, e.g. `W B B _` for black.
pub fn count_potential_captures(grid: &Grid, stone: Stone, pos: Pos) -> usize {
    let opponent = stone.opponent();
    let seqs = scan_directional(grid, PAIR + 1, pos);

    (0..Direction::LANES)
        .filter(|&lane| {
            // Read continuously through the intersection: far end of the
            // opposite ray first, then the intersection, then outward.
            let mut line: Vec<Stone> = seqs[lane + Direction::LANES].iter().rev().copied().collect();
            line.extend(seqs[lane].iter().skip(1));

            line.windows(CAPTURE_SPAN).any(|w| {
                w[1] == stone
                    && w[2] == stone
                    && ((w[0] == opponent && w[3] == Stone::Empty)
                        || (w[0] == Stone::Empty && w[3] == opponent))
            })
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn grid_with(stones: &[((u8, u8), Stone)]) -> Grid {
        let mut grid = Grid::new(BOARD_SIZE);
        for &((row, col), stone) in stones {
            grid.set(Pos::new(row, col), stone);
        }
        grid
    }

    #[test]
    fn test_capture_horizontal() {
        // W _ B B W  (W places at _, captures B B)
        let grid = grid_with(&[
            ((9, 5), Stone::White),
            ((9, 7), Stone::Black),
            ((9, 8), Stone::Black),
            ((9, 9), Stone::White),
        ]);

        let captured = get_captured_positions(&grid, Pos::new(9, 6), Stone::White);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Pos::new(9, 7)));
        assert!(captured.contains(&Pos::new(9, 8)));
    }

    #[test]
    fn test_capture_diagonal() {
        let grid = grid_with(&[
            ((5, 9), Stone::Black),
            ((7, 7), Stone::White),
            ((8, 6), Stone::White),
            ((9, 5), Stone::Black),
        ]);

        let captured = get_captured_positions(&grid, Pos::new(6, 8), Stone::Black);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Pos::new(7, 7)));
        assert!(captured.contains(&Pos::new(8, 6)));
    }

    #[test]
    fn test_no_capture_single_or_triple() {
        // W _ B W
        let grid = grid_with(&[((9, 5), Stone::White), ((9, 7), Stone::Black), ((9, 8), Stone::White)]);
        assert!(get_captured_positions(&grid, Pos::new(9, 6), Stone::White).is_empty());

        // W _ B B B W
        let grid = grid_with(&[
            ((9, 5), Stone::White),
            ((9, 7), Stone::Black),
            ((9, 8), Stone::Black),
            ((9, 9), Stone::Black),
            ((9, 10), Stone::White),
        ]);
        assert!(get_captured_positions(&grid, Pos::new(9, 6), Stone::White).is_empty());
    }

    #[test]
    fn test_no_capture_of_own_stones() {
        let grid = grid_with(&[
            ((9, 5), Stone::White),
            ((9, 7), Stone::White),
            ((9, 8), Stone::White),
            ((9, 9), Stone::White),
        ]);
        assert!(get_captured_positions(&grid, Pos::new(9, 6), Stone::White).is_empty());
    }

    #[test]
    fn test_execute_captures_two_directions() {
        //     W
        //     B
        //     B
        // W B B * ...
        let mut grid = grid_with(&[
            ((9, 3), Stone::White),
            ((9, 4), Stone::Black),
            ((9, 5), Stone::Black),
            ((12, 6), Stone::White),
            ((11, 6), Stone::Black),
            ((10, 6), Stone::Black),
            ((9, 6), Stone::White),
        ]);

        let captured = execute_captures(&mut grid, Pos::new(9, 6));
        assert_eq!(captured.len(), 4);
        assert_eq!(grid.count(Stone::Black), 0);
        // Bracketing stones stay
        assert_eq!(grid.get(Pos::new(9, 3)), Stone::White);
        assert_eq!(grid.get(Pos::new(12, 6)), Stone::White);
    }

    #[test]
    fn test_capture_at_board_edge() {
        let grid = grid_with(&[((0, 0), Stone::Black), ((0, 2), Stone::White), ((0, 3), Stone::White)]);
        let captured = get_captured_positions(&grid, Pos::new(0, 4), Stone::Black);
        assert!(captured.is_empty());

        let grid = grid_with(&[((0, 0), Stone::Black), ((0, 1), Stone::White), ((0, 2), Stone::White)]);
        let captured = get_captured_positions(&grid, Pos::new(0, 3), Stone::Black);
        assert_eq!(captured.len(), 2);
    }

    #[test]
    fn test_potential_capture_exposed_pair() {
        // W B B _  with the second B being the evaluated intersection
        let grid = grid_with(&[((9, 7), Stone::White), ((9, 8), Stone::Black), ((9, 9), Stone::Black)]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 1);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 8)), 1);
    }

    #[test]
    fn test_potential_capture_mirrored() {
        // _ B B W
        let grid = grid_with(&[((9, 9), Stone::Black), ((9, 10), Stone::Black), ((9, 11), Stone::White)]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 1);
    }

    #[test]
    fn test_potential_capture_safe_shapes() {
        // _ B B _  nobody flanks the pair
        let grid = grid_with(&[((9, 9), Stone::Black), ((9, 10), Stone::Black)]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 0);

        // W B B W  already blocked on both ends
        let grid = grid_with(&[
            ((9, 8), Stone::White),
            ((9, 9), Stone::Black),
            ((9, 10), Stone::Black),
            ((9, 11), Stone::White),
        ]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 0);

        // W B B B _  three stones cannot be captured
        let grid = grid_with(&[
            ((9, 8), Stone::White),
            ((9, 9), Stone::Black),
            ((9, 10), Stone::Black),
            ((9, 11), Stone::Black),
        ]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 0);
    }

    #[test]
    fn test_potential_capture_counts_lanes() {
        // Black pairs through (9, 9): one along the row flanked by W on the
        // west end, one up the column flanked by W on the north end
        let grid = grid_with(&[
            ((9, 9), Stone::Black),
            ((9, 8), Stone::Black),
            ((9, 7), Stone::White),
            ((10, 9), Stone::Black),
            ((11, 9), Stone::White),
        ]);
        assert_eq!(count_potential_captures(&grid, Stone::Black, Pos::new(9, 9)), 2);
    }
}
