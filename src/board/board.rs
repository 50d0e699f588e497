//! Board engine: placement, captures, win detection and exact undo

use tracing::{debug, info, trace};

use super::scan::{restore_directional, scan_directional};
use super::{parse_label, Grid, Pos, Sequence, Side, Stone, BOARD_SIZE};
use crate::error::BoardError;
use crate::rules::{capture, win};

/// Allowed Chebyshev distance from the centre, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    inner: usize,
    outer: usize,
}

impl Bounds {
    /// Bounds that allow every intersection of a `size` board
    fn unrestricted(size: usize) -> Self {
        Self { inner: 0, outer: size }
    }

    #[inline]
    fn contains(self, distance: usize) -> bool {
        distance >= self.inner && distance <= self.outer
    }
}

/// Snapshot of one committed placement, enough to take it back
#[derive(Debug, Clone)]
struct MoveRecord {
    pos: Pos,
    bounds: Bounds,
    captured_pairs: usize,
    winning_lines: usize,
    /// Rays around `pos` read before captures were applied
    prev_rays: [Sequence; 8],
}

/// Game board with move history
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    bounds: Bounds,
    empty: usize,
    last_pos: Option<Pos>,
    last_winning_lines: usize,
    last_captured_pairs: usize,
    history: Vec<MoveRecord>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            bounds: Bounds::unrestricted(size),
            empty: size * size,
            last_pos: None,
            last_winning_lines: 0,
            last_captured_pairs: 0,
            history: Vec::with_capacity(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.grid.get(pos)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Parse a label and check that it names an intersection on this board
    pub fn parse_position(&self, label: &str) -> Result<Pos, BoardError> {
        let (row, col) = parse_label(label)?;
        self.grid.pos(row, col).ok_or(BoardError::OutOfBounds)
    }

    /// Check whether a stone could be played at `pos` right now.
    ///
    /// Checks run in a fixed order: on the board, distance restriction,
    /// occupancy, finished game, full board.
    pub fn can_place(&self, pos: Pos) -> Result<(), BoardError> {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        let pos = self.grid.pos(row, col).ok_or(BoardError::OutOfBounds)?;
        let distance = self.grid.distance_from_center(row, col);
        if !self.bounds.contains(distance) {
            return Err(BoardError::BoundsRestricted);
        }
        if !self.grid.is_empty(pos) {
            return Err(BoardError::Occupied);
        }
        if self.is_winner() {
            return Err(BoardError::GameAlreadyOver);
        }
        if self.is_board_full() {
            return Err(BoardError::FullBoard);
        }
        Ok(())
    }

    /// Place a stone for `side` at a labelled intersection such as `J10`
    pub fn place(&mut self, side: Side, label: &str) -> Result<(), BoardError> {
        let pos = self.parse_position(label)?;
        self.place_at(side, pos)
    }

    /// Place a stone for `side` at `pos`, then resolve wins and captures.
    ///
    /// # Returns
    /// `Ok(())` when the stone was committed; the outcome of the move is read
    /// back through [`Board::winning_lines_of_last_move`] and
    /// [`Board::captured_pairs_of_last_move`].
    pub fn place_at(&mut self, side: Side, pos: Pos) -> Result<(), BoardError> {
        self.can_place(pos)?;

        let stone = side.stone();
        self.grid.set(pos, stone);
        let prev_rays = scan_directional(&self.grid, win::WIN_LENGTH, pos);
        self.empty -= 1;
        self.last_pos = Some(pos);

        // A five completed by this stone cannot be broken by its own captures
        self.last_winning_lines = win::count_lines_at(&self.grid, win::WIN_LENGTH, pos);

        let captured = capture::execute_captures(&mut self.grid, pos);
        self.last_captured_pairs = captured.len() / capture::PAIR;
        self.empty += captured.len();

        if !captured.is_empty() {
            debug!(%side, pos = %pos, pairs = self.last_captured_pairs, "captured");
        }
        trace!(%side, pos = %pos, lines = self.last_winning_lines, empty = self.empty, "placed");

        self.history.push(MoveRecord {
            pos,
            bounds: self.bounds,
            captured_pairs: self.last_captured_pairs,
            winning_lines: self.last_winning_lines,
            prev_rays,
        });
        Ok(())
    }

    /// Take back the most recent placement, including any stones it captured.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        let record = self.history.pop().ok_or(BoardError::NoPriorMoves)?;

        restore_directional(&mut self.grid, record.pos, &record.prev_rays);
        self.grid.set(record.pos, Stone::Empty);
        self.empty += 1 + capture::PAIR * record.captured_pairs;
        self.bounds = record.bounds;

        // No move is "at" the restored state, so its outcome is unknown
        self.last_winning_lines = 0;
        self.last_captured_pairs = 0;
        self.last_pos = self.history.last().map(|prev| prev.pos);

        trace!(pos = %record.pos, lines = record.winning_lines, empty = self.empty, "undone");
        Ok(())
    }

    /// Replace the whole grid, row 0 first.
    ///
    /// Nothing changes unless the grid is square of this board's size, holds
    /// no five in a row, and has at least one empty intersection. History and
    /// last-move data are cleared; bounds are kept.
    pub fn set_board(&mut self, rows: &[Vec<Stone>]) -> Result<(), BoardError> {
        let grid = Grid::from_rows(self.size(), rows).ok_or(BoardError::InvalidBoardShape)?;
        if win::has_winning_line(&grid) {
            return Err(BoardError::AlreadyWinningBoard);
        }
        let empty = grid.count(Stone::Empty);
        if empty == 0 {
            return Err(BoardError::FullBoard);
        }

        self.grid = grid;
        self.empty = empty;
        self.history.clear();
        self.last_pos = None;
        self.last_winning_lines = 0;
        self.last_captured_pairs = 0;

        info!(stones = self.stone_count(), "board replaced");
        Ok(())
    }

    /// Restrict moves to a Chebyshev distance from the centre in `[inner, outer]`
    pub fn set_bounds(&mut self, inner: usize, outer: usize) -> Result<(), BoardError> {
        let size = self.size();
        if inner > size || outer > size {
            return Err(BoardError::InvalidBounds);
        }
        self.bounds = Bounds { inner, outer };
        Ok(())
    }

    #[inline]
    pub fn inner_bounds(&self) -> usize {
        self.bounds.inner
    }

    #[inline]
    pub fn outer_bounds(&self) -> usize {
        self.bounds.outer
    }

    /// The last move completed a five, or no intersection is left
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_board_full() || self.is_winner()
    }

    #[inline]
    pub fn is_board_full(&self) -> bool {
        self.empty == 0
    }

    /// The last move completed at least one winning line
    #[inline]
    pub fn is_winner(&self) -> bool {
        self.last_winning_lines > 0
    }

    #[inline]
    pub fn remaining_empty(&self) -> usize {
        self.empty
    }

    #[inline]
    pub fn stone_count(&self) -> usize {
        self.size() * self.size() - self.empty
    }

    #[inline]
    pub fn winning_lines_of_last_move(&self) -> usize {
        self.last_winning_lines
    }

    #[inline]
    pub fn captured_pairs_of_last_move(&self) -> usize {
        self.last_captured_pairs
    }

    #[inline]
    pub fn last_move_position(&self) -> Option<Pos> {
        self.last_pos
    }

    /// Number of committed placements that can still be undone
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Copy of the grid as rows, row 0 (label row 1) first
    pub fn snapshot_grid(&self) -> Vec<Vec<Stone>> {
        self.grid.to_rows()
    }

    /// Independent `n`-in-a-rows passing through `pos`
    pub fn count_lines_at(&self, n: usize, pos: Pos) -> usize {
        win::count_lines_at(&self.grid, n, pos)
    }

    /// Lanes through `pos` where a pair of `side` is exposed to capture
    pub fn count_potential_captures(&self, side: Side, pos: Pos) -> usize {
        capture::count_potential_captures(&self.grid, side.stone(), pos)
    }

    /// Structures of exactly `n` uninterrupted stones of `side`
    pub fn count_uninterrupted(&self, n: usize, side: Side) -> usize {
        win::count_uninterrupted(&self.grid, n, side.stone())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
