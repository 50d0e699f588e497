//! Radial sequence scanning
//!
//! Every rule check is built on the same primitive: read the stones radiating
//! out from one intersection along the eight compass directions, then count how
//! many leading stones share the colour of the first one.

use super::{Grid, Pos, Stone};

/// Compass directions, in the fixed scan order.
///
/// Row indices grow towards North (row 0 is the bottom row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions; entry `i` and entry `i + 4` are opposites
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Number of straight lines through an intersection
    pub const LANES: usize = 4;

    /// `(row, col)` step
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }
}

/// Stones read outward from a starting intersection (start included)
pub type Sequence = Vec<Stone>;

/// Read up to `n` stones from `pos` outward along `dir`.
///
/// The sequence is shorter than `n` when it would step off the board.
pub fn scan_ray(grid: &Grid, n: usize, pos: Pos, dir: Direction) -> Sequence {
    (0..n)
        .map_while(|step| grid.offset(pos, dir.delta(), step))
        .map(|p| grid.get(p))
        .collect()
}

/// Read the `n`-long sequences in all eight directions, in [`Direction::ALL`] order.
pub fn scan_directional(grid: &Grid, n: usize, pos: Pos) -> [Sequence; 8] {
    Direction::ALL.map(|dir| scan_ray(grid, n, pos, dir))
}

/// Write previously scanned sequences back onto the grid.
///
/// The sequences must have been produced by [`scan_directional`] at the same
/// position; they never reach off the board.
pub fn restore_directional(grid: &mut Grid, pos: Pos, seqs: &[Sequence; 8]) {
    for (dir, seq) in Direction::ALL.iter().zip(seqs) {
        for (step, &stone) in seq.iter().enumerate() {
            if let Some(p) = grid.offset(pos, dir.delta(), step) {
                grid.set(p, stone);
            }
        }
    }
}

/// Count the leading stones equal to the first one.
///
/// The first stone is always counted; the run stops at the first mismatch or
/// at the first empty intersection after it.
pub fn count_run(seq: &[Stone]) -> usize {
    let Some((&first, rest)) = seq.split_first() else {
        return 0;
    };
    1 + rest
        .iter()
        .take_while(|&&stone| stone == first && stone != Stone::Empty)
        .count()
}

/// Run lengths of opposite directions added together, one total per lane.
///
/// Both halves include the starting stone, so a lane total counts it twice.
pub fn lane_totals(grid: &Grid, n: usize, pos: Pos) -> [usize; Direction::LANES] {
    let seqs = scan_directional(grid, n, pos);
    std::array::from_fn(|lane| count_run(&seqs[lane]) + count_run(&seqs[lane + Direction::LANES]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_scan_stops_at_edge() {
        let grid = Grid::new(BOARD_SIZE);
        let seqs = scan_directional(&grid, 5, Pos::new(0, 0));

        assert_eq!(seqs[Direction::North.index()].len(), 5);
        assert_eq!(seqs[Direction::NorthEast.index()].len(), 5);
        assert_eq!(seqs[Direction::East.index()].len(), 5);
        assert_eq!(seqs[Direction::South.index()].len(), 1);
        assert_eq!(seqs[Direction::West.index()].len(), 1);
        assert_eq!(seqs[Direction::SouthWest.index()].len(), 1);
    }

    #[test]
    fn test_scan_reads_outward() {
        let mut grid = Grid::new(BOARD_SIZE);
        grid.set(Pos::new(9, 9), Stone::White);
        grid.set(Pos::new(9, 10), Stone::Black);
        grid.set(Pos::new(9, 12), Stone::White);

        let east = scan_ray(&grid, 4, Pos::new(9, 9), Direction::East);
        assert_eq!(east, vec![Stone::White, Stone::Black, Stone::Empty, Stone::White]);
    }

    #[test]
    fn test_count_run() {
        use Stone::*;
        assert_eq!(count_run(&[]), 0);
        assert_eq!(count_run(&[White]), 1);
        assert_eq!(count_run(&[White, White, White, Black, White]), 3);
        assert_eq!(count_run(&[Black, Black, Empty, Black]), 2);
        // The start is counted once even when empty
        assert_eq!(count_run(&[Empty, Empty, Empty]), 1);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut grid = Grid::new(BOARD_SIZE);
        let pos = Pos::new(9, 9);
        grid.set(pos, Stone::White);
        grid.set(Pos::new(10, 9), Stone::Black);
        grid.set(Pos::new(9, 11), Stone::Black);
        let before = grid.clone();

        let seqs = scan_directional(&grid, 5, pos);
        grid.set(Pos::new(10, 9), Stone::Empty);
        grid.set(Pos::new(9, 11), Stone::White);
        restore_directional(&mut grid, pos, &seqs);

        assert_eq!(grid, before);
    }
}
