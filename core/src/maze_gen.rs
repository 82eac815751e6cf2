//! Maze generation using the Recursive Backtracker algorithm
//!
//! Algorithm: Recursive Backtracker (DFS with backtracking, explicit stack)
//! 1. Close every wall, start at (0, 0), mark it visited, push it
//! 2. While the stack is not empty:
//!    - Peek the top cell and collect its unvisited neighbors
//!    - If neighbors exist:
//!      * Choose one uniformly at random
//!      * Remove the wall between current and neighbor
//!      * Mark neighbor as visited, push to stack
//!    - Else: backtrack (pop from stack)
//!
//! Every cell is visited exactly once and each visit after the first opens
//! one passage, so the result is a spanning tree: `rows * cols - 1`
//! passages and exactly one simple path between any two cells.

use alloc::vec::Vec;

use rand::Rng;

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Pos};
use crate::rng::SimpleLCG;

/// Generate a `rows x cols` perfect maze from the given random source
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols)?;
    recursive_backtracker(&mut grid, rng);
    Ok(grid)
}

/// Generate a maze deterministically from a `u32` seed
///
/// The same seed and dimensions always produce the same maze.
pub fn generate_seeded(rows: usize, cols: usize, seed: u32) -> Result<Grid, MazeError> {
    let mut rng = SimpleLCG::new(seed);
    generate(rows, cols, &mut rng)
}

/// Carve a perfect maze into `grid`, discarding whatever walls it had
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.reset();

    let start = Pos::new(0, 0);
    grid.cell_mut(start).visited = true;

    let mut stack = Vec::new();
    stack.push(start);

    while let Some(&current) = stack.last() {
        let (neighbors, count) = unvisited_neighbors(grid, current);

        if count == 0 {
            // Dead end
            stack.pop();
            continue;
        }

        let (dir, next) = neighbors[rng.gen_range(0..count)];
        grid.carve(current, dir);
        grid.cell_mut(next).visited = true;
        stack.push(next);
    }
}

/// In-bounds, unvisited neighbors in `Direction::ALL` order
///
/// Returns a fixed array plus count instead of a Vec; there are at most four.
fn unvisited_neighbors(grid: &Grid, pos: Pos) -> ([(Direction, Pos); 4], usize) {
    let mut neighbors = [(Direction::Up, pos); 4];
    let mut count = 0;

    for dir in Direction::ALL {
        let Some(next) = grid.neighbor(pos, dir) else {
            continue;
        };
        if grid.cell(next).is_some_and(|cell| !cell.visited) {
            neighbors[count] = (dir, next);
            count += 1;
        }
    }

    (neighbors, count)
}
