//! Square grid of intersections. Storage only, no game rules.

use super::{Pos, Stone};

/// Fixed-size square grid of tri-state cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Stone>,
}

impl Grid {
    /// Create an empty grid of `size` x `size` intersections.
    ///
    /// Sizes above 26 cannot be addressed by letter labels.
    pub fn new(size: usize) -> Self {
        debug_assert!((1..=26).contains(&size));
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Build a grid from rows (row 0 first). Returns `None` unless the rows
    /// form a `size` x `size` square.
    pub fn from_rows(size: usize, rows: &[Vec<Stone>]) -> Option<Self> {
        if rows.len() != size || rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Both coordinates lie in `[0, size)`
    #[inline]
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Checked conversion from raw coordinates
    #[inline]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        self.is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Index of the centre row and column
    #[inline]
    pub fn center_index(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn center(&self) -> Pos {
        let c = self.center_index() as u8;
        Pos::new(c, c)
    }

    /// Chebyshev distance of `(row, col)` from the centre
    #[inline]
    pub fn distance_from_center(&self, row: i32, col: i32) -> usize {
        let c = self.center_index() as i32;
        (row - c).unsigned_abs().max((col - c).unsigned_abs()) as usize
    }

    /// Step `steps` times from `pos` along `(dr, dc)`, if still on the grid
    #[inline]
    pub fn offset(&self, pos: Pos, (dr, dc): (i32, i32), steps: usize) -> Option<Pos> {
        let steps = steps as i32;
        self.pos(i32::from(pos.row) + dr * steps, i32::from(pos.col) + dc * steps)
    }

    /// Iterate over every position, row 0 first
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Number of cells holding `stone`
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Copy of the grid as rows, row 0 first
    pub fn to_rows(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(<[Stone]>::to_vec).collect()
    }
}
