//! ASCII-art rendering of a maze and an optional solution
//!
//! ```text
//! +---+---+---+
//! | S   * |   |
//! +---+   +   +
//! |     *   E |
//! +---+---+---+
//! ```

use std::collections::HashSet;

use maze_core::{Direction, Grid, Pos};

/// Render `grid`, marking `start` with `S`, `end` with `E` and other path
/// cells with `*`
pub fn render(grid: &Grid, path: &[Pos], start: Option<Pos>, end: Option<Pos>) -> String {
    let on_path: HashSet<Pos> = path.iter().copied().collect();
    let mut out = String::new();

    for row in 0..grid.rows() {
        // Top borders of the row
        for col in 0..grid.cols() {
            out.push('+');
            out.push_str(wall_segment(grid, Pos::new(row, col), Direction::Up));
        }
        out.push_str("+\n");

        // Cell contents and vertical walls; the left border is always drawn
        out.push('|');
        for col in 0..grid.cols() {
            let pos = Pos::new(row, col);
            let content = if Some(pos) == start {
                " S "
            } else if Some(pos) == end {
                " E "
            } else if on_path.contains(&pos) {
                " * "
            } else {
                "   "
            };
            out.push_str(content);
            out.push(if grid.has_wall(pos, Direction::Right) { '|' } else { ' ' });
        }
        out.push('\n');
    }

    // Bottom border of the last row
    let last = grid.rows() - 1;
    for col in 0..grid.cols() {
        out.push('+');
        out.push_str(wall_segment(grid, Pos::new(last, col), Direction::Down));
    }
    out.push_str("+\n");

    out
}

fn wall_segment(grid: &Grid, pos: Pos, dir: Direction) -> &'static str {
    if grid.has_wall(pos, dir) {
        "---"
    } else {
        "   "
    }
}
