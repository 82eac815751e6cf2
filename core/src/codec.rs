//! Text encoding of a grid
//!
//! ```text
//! <rows> <cols>
//! <up> <right> <down> <left> <up> ...   (row-major, 4 tokens per cell)
//! ```
//!
//! Wall tokens are `1` (present) or `0` (open). Only the token sequence
//! matters when decoding; any whitespace separates tokens.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{FormatError, MazeError};
use crate::grid::{Direction, Grid, Pos};

const HEADER_TOKENS: usize = 2;

/// Encode `grid` as a header line followed by one line per grid row
pub fn serialize(grid: &Grid) -> String {
    let mut out = String::with_capacity(16 + grid.len() * 8 + grid.rows());

    out.push_str(&grid.rows().to_string());
    out.push(' ');
    out.push_str(&grid.cols().to_string());
    out.push('\n');

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Pos::new(row, col);
            for dir in Direction::ALL {
                if col > 0 || dir != Direction::Up {
                    out.push(' ');
                }
                out.push(if grid.has_wall(pos, dir) { '1' } else { '0' });
            }
        }
        out.push('\n');
    }

    out
}

/// Decode text produced by [`serialize`] (or any whitespace layout of it)
pub fn deserialize(text: &str) -> Result<Grid, MazeError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < HEADER_TOKENS {
        return Err(FormatError::MissingHeader.into());
    }

    let rows = parse_header(tokens[0], 0)?;
    let cols = parse_header(tokens[1], 1)?;
    if rows <= 0 || cols <= 0 {
        return Err(FormatError::NonPositiveDimensions { rows, cols }.into());
    }

    let expected = usize::try_from(rows)
        .ok()
        .zip(usize::try_from(cols).ok())
        .and_then(|(r, c)| r.checked_mul(c))
        .and_then(|cells| cells.checked_mul(4))
        .and_then(|walls| walls.checked_add(HEADER_TOKENS))
        .ok_or(FormatError::TooLarge { rows, cols })?;
    if tokens.len() != expected {
        return Err(FormatError::TokenCount {
            expected,
            found: tokens.len(),
        }
        .into());
    }

    let (rows, cols) = (rows as usize, cols as usize);
    let mut grid = Grid::new(rows, cols)?;

    for (offset, chunk) in tokens[HEADER_TOKENS..].chunks_exact(4).enumerate() {
        let pos = Pos::new(offset / cols, offset % cols);
        for (dir, token) in Direction::ALL.into_iter().zip(chunk) {
            let present = match *token {
                "0" => false,
                "1" => true,
                _ => {
                    return Err(FormatError::InvalidWall {
                        index: HEADER_TOKENS + offset * 4 + dir.index(),
                    }
                    .into())
                }
            };
            grid.set_wall(pos, dir, present);
        }
    }

    Ok(grid)
}

fn parse_header(token: &str, index: usize) -> Result<i64, FormatError> {
    token
        .parse::<i64>()
        .map_err(|_| FormatError::InvalidHeader { token: index })
}
