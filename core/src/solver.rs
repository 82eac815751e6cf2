//! Shortest paths through a grid
//!
//! Breadth-first search over open passages. Neighbors are expanded in
//! `Direction::ALL` order, so among several shortest paths the one found is
//! fixed by that order and the FIFO queue.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Pos};

/// Find a shortest path from `start` to `end`, both ends included.
///
/// Returns an empty path when `end` cannot be reached, which only happens on
/// hand-built or corrupted grids. `start == end` yields `[start]`.
pub fn solve(grid: &Grid, start: Pos, end: Pos) -> Result<Vec<Pos>, MazeError> {
    check_bounds(grid, start)?;
    check_bounds(grid, end)?;

    let mut visited = vec![false; grid.len()];
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut queue = VecDeque::new();

    let start_idx = grid.index_of(start);
    let end_idx = grid.index_of(end);

    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }

        let current_idx = grid.index_of(current);
        for (_, next) in grid.passages(current) {
            let next_idx = grid.index_of(next);
            if visited[next_idx] {
                continue;
            }
            visited[next_idx] = true;
            parent[next_idx] = Some(current_idx);
            queue.push_back(next);
        }
    }

    if !visited[end_idx] {
        return Ok(Vec::new());
    }

    let mut path = vec![end];
    let mut idx = end_idx;
    while let Some(prev) = parent[idx] {
        path.push(grid.pos_of(prev));
        idx = prev;
    }
    path.reverse();

    Ok(path)
}

/// Check that `path` is a walk from `start` to `end` through open passages
pub fn verify_path(grid: &Grid, start: Pos, end: Pos, path: &[Pos]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if first != start || last != end || !path.iter().all(|&pos| grid.contains(pos)) {
        return false;
    }

    path.windows(2).all(|step| {
        grid.passages(step[0]).any(|(_, next)| next == step[1])
    })
}

/// Directions taken between consecutive positions of `path`
///
/// `None` if two consecutive positions are not adjacent.
pub fn path_to_moves(path: &[Pos]) -> Option<Vec<Direction>> {
    path.windows(2)
        .map(|step| direction_between(step[0], step[1]))
        .collect()
}

/// Follow `moves` from `start`, returning where they end up
///
/// Fails with `MazeError::Blocked` on the first move into a wall or off the
/// grid.
pub fn walk(grid: &Grid, start: Pos, moves: &[Direction]) -> Result<Pos, MazeError> {
    check_bounds(grid, start)?;

    let mut pos = start;
    for (step, &dir) in moves.iter().enumerate() {
        let next = grid
            .neighbor(pos, dir)
            .filter(|_| !grid.has_wall(pos, dir))
            .ok_or(MazeError::Blocked { pos, dir, step })?;
        pos = next;
    }

    Ok(pos)
}

fn direction_between(from: Pos, to: Pos) -> Option<Direction> {
    Direction::ALL.into_iter().find(|dir| {
        let (dr, dc) = dir.delta();
        from.row.checked_add_signed(dr) == Some(to.row)
            && from.col.checked_add_signed(dc) == Some(to.col)
    })
}

fn check_bounds(grid: &Grid, pos: Pos) -> Result<(), MazeError> {
    if grid.contains(pos) {
        return Ok(());
    }
    Err(MazeError::InvalidArgument {
        pos,
        rows: grid.rows(),
        cols: grid.cols(),
    })
}
