//! Line counting: completed n-in-a-rows and uninterrupted structures
//!
//! Both counts are read from lane totals (a run in one direction plus the run
//! in the opposite direction, sharing the starting stone).

use crate::board::scan::lane_totals;
use crate::board::{Grid, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Count the independent `n`-in-a-rows passing through `pos`.
///
/// Each direction is read at most `n` stones deep. A lane total of `2n`
/// means two full runs meet at `pos`; otherwise the shared centre is
/// subtracted before the integer division, so one long run never counts twice
/// while a run of exactly `2n - 1` through the middle counts as two.
pub fn count_lines_at(grid: &Grid, n: usize, pos: Pos) -> usize {
    if n < 2 {
        return 0;
    }

    lane_totals(grid, n, pos)
        .into_iter()
        .map(|mut total| {
            if total > 0 && (total / 2) % n != 0 {
                total -= 1;
            }
            total / n
        })
        .sum()
}

/// Check whether any stone on the grid is part of a winning line
pub fn has_winning_line(grid: &Grid) -> bool {
    grid.positions()
        .any(|pos| !grid.is_empty(pos) && count_lines_at(grid, WIN_LENGTH, pos) > 0)
}

/// Count structures of exactly `n` uninterrupted `stone`s.
///
/// For every stone of that colour each lane is read `n + 1` deep; a lane
/// holding exactly `n` stones (after removing the shared centre) is one
/// sighting. Every stone of such a run sights it once, so the total is divided
/// by `n`. Longer runs, including winning fives, never match.
pub fn count_uninterrupted(grid: &Grid, n: usize, stone: Stone) -> usize {
    if n < 1 || n + 1 > grid.size() || stone == Stone::Empty {
        return 0;
    }

    let sightings: usize = grid
        .positions()
        .filter(|&pos| grid.get(pos) == stone)
        .map(|pos| {
            lane_totals(grid, n + 1, pos)
                .into_iter()
                .filter(|&total| total - 1 == n)
                .count()
        })
        .sum();

    sightings / n
}
