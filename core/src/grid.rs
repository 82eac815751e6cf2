//! Rectangular grid of four-walled cells
//!
//! Walls are stored per cell, so every passage is recorded twice: once on
//! each side. `carve` keeps both sides in step; `set_wall` writes a single
//! side and is only meant for decoding and hand-built fixtures.

use alloc::vec::Vec;
use core::{fmt, mem};

use crate::error::MazeError;

/// Movement direction, indexed the way the persisted format orders walls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Canonical iteration order, also the tie-break order for the solver
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// `(d + 2) mod 4`
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// `(row, col)` step taken when moving in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// 0-indexed cell position; row grows downward, col grows rightward
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A cell with walls in four directions
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    walls: [bool; 4], // [UP, RIGHT, DOWN, LEFT]
    pub(crate) visited: bool,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            walls: [true, true, true, true],
            visited: false,
        }
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, present: bool) {
        self.walls[dir.index()] = present;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

// The visited flag is generation scratch state, not part of the maze.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.walls == other.walls
    }
}

impl Eq for Cell {}

/// `rows x cols` cells in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid with every wall present
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }

        // The solver keeps a parent index per cell, the largest per-cell
        // allocation made for a grid; it must stay addressable too.
        let len = rows
            .checked_mul(cols)
            .filter(|&len| {
                len.checked_mul(mem::size_of::<Option<usize>>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, Cell::new());

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True iff `0 <= row < rows` and `0 <= col < cols`
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub(crate) fn index_of(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn pos_of(&self, index: usize) -> Pos {
        Pos::new(index / self.cols, index % self.cols)
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self.cells[self.index_of(pos)])
    }

    pub(crate) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Out-of-bounds positions report every wall as present
    pub fn has_wall(&self, pos: Pos, dir: Direction) -> bool {
        self.cell(pos).map_or(true, |cell| cell.has_wall(dir))
    }

    /// The in-bounds position one step from `pos` in `dir`
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Open the wall between `pos` and its neighbor in `dir`, on both sides.
    ///
    /// Returns the neighbor, or `None` without touching anything when the
    /// neighbor is outside the grid.
    pub fn carve(&mut self, pos: Pos, dir: Direction) -> Option<Pos> {
        if !self.contains(pos) {
            return None;
        }
        let next = self.neighbor(pos, dir)?;
        self.cell_mut(pos).set_wall(dir, false);
        self.cell_mut(next).set_wall(dir.opposite(), false);
        Some(next)
    }

    /// Write a single wall flag on one cell; the neighbor is left alone
    pub fn set_wall(&mut self, pos: Pos, dir: Direction, present: bool) {
        if self.contains(pos) {
            self.cell_mut(pos).set_wall(dir, present);
        }
    }

    /// Open, in-bounds neighbors of `pos` in `Direction::ALL` order
    pub fn passages(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            if self.has_wall(pos, dir) {
                return None;
            }
            self.neighbor(pos, dir).map(|next| (dir, next))
        })
    }

    /// Number of open passages, each edge counted once
    pub fn open_passage_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Pos::new(row, col);
                for dir in [Direction::Right, Direction::Down] {
                    if self.neighbor(pos, dir).is_some() && !self.has_wall(pos, dir) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// True iff every open wall is matched by an open wall on the other side
    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|index| {
            let pos = self.pos_of(index);
            Direction::ALL.into_iter().all(|dir| match self.neighbor(pos, dir) {
                Some(next) => self.has_wall(pos, dir) == self.has_wall(next, dir.opposite()),
                None => true,
            })
        })
    }

    /// Close every wall and clear every visited flag
    pub(crate) fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_rejects_unaddressable_dimensions() {
        let cols = usize::MAX / 2;
        assert_eq!(
            Grid::new(1, cols),
            Err(MazeError::InvalidDimensions { rows: 1, cols })
        );

        // Fits the cells but not a parent index per cell
        let rows = usize::MAX / mem::size_of::<Option<usize>>() + 1;
        assert!(Grid::new(rows, 1).is_err());
        assert!(Grid::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(1, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, 3));
    }

    #[test]
    fn test_opposite_direction() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().index(), (dir.index() + 2) % 4);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::from_index(2), Some(Direction::Down));
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_new_grid_is_closed() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(grid.cells().all(|cell| cell.walls() == [true; 4]));
        assert_eq!(grid.open_passage_count(), 0);
    }

    #[test]
    fn test_carve_is_symmetric() {
        let mut grid = Grid::new(2, 2).unwrap();
        let next = grid.carve(Pos::new(0, 0), Direction::Right);
        assert_eq!(next, Some(Pos::new(0, 1)));
        assert!(!grid.has_wall(Pos::new(0, 0), Direction::Right));
        assert!(!grid.has_wall(Pos::new(0, 1), Direction::Left));
        assert!(grid.is_symmetric());
        assert_eq!(grid.open_passage_count(), 1);
    }

    #[test]
    fn test_carve_off_grid_is_noop() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.carve(Pos::new(0, 0), Direction::Up), None);
        assert_eq!(grid.carve(Pos::new(1, 1), Direction::Right), None);
        assert!(grid.cells().all(|cell| cell.walls() == [true; 4]));
    }

    #[test]
    fn test_one_sided_wall_breaks_symmetry() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_wall(Pos::new(1, 0), Direction::Up, false);
        assert!(!grid.is_symmetric());
    }

    #[test]
    fn test_passages_follow_direction_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Pos::new(1, 1);
        grid.carve(center, Direction::Left);
        grid.carve(center, Direction::Up);
        grid.carve(center, Direction::Down);

        let dirs: Vec<Direction> = grid.passages(center).map(|(dir, _)| dir).collect();
        assert_eq!(dirs, [Direction::Up, Direction::Down, Direction::Left]);
    }

    #[test]
    fn test_passages_ignore_open_border() {
        // A border wall cleared by hand still leads nowhere
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set_wall(Pos::new(0, 0), Direction::Up, false);
        assert_eq!(grid.passages(Pos::new(0, 0)).count(), 0);
        assert_eq!(grid.open_passage_count(), 0);
    }

    #[test]
    fn test_cell_equality_ignores_visited() {
        let mut a = Cell::new();
        let b = Cell::new();
        a.visited = true;
        assert_eq!(a, b);
    }
}
