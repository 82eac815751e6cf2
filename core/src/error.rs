//! Error types shared by every maze operation

use core::fmt;

use crate::grid::{Direction, Pos};

/// Errors produced by grid construction, decoding and solving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns were zero
    InvalidDimensions { rows: usize, cols: usize },

    /// The persisted maze text could not be decoded
    Format(FormatError),

    /// A position handed to the solver lies outside the grid
    InvalidArgument { pos: Pos, rows: usize, cols: usize },

    /// A move walked into a wall or off the grid
    Blocked { pos: Pos, dir: Direction, step: usize },
}

/// Why a token stream was rejected by the codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than two tokens, so no `rows cols` header
    MissingHeader,

    /// A header token is not an integer
    InvalidHeader { token: usize },

    /// Header declares zero or negative dimensions
    NonPositiveDimensions { rows: i64, cols: i64 },

    /// `4 * rows * cols` does not fit in memory addressing
    TooLarge { rows: i64, cols: i64 },

    /// Total token count differs from `2 + 4 * rows * cols`
    TokenCount { expected: usize, found: usize },

    /// A wall token other than `0` or `1`, at this token index
    InvalidWall { index: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid dimensions {}x{}: rows and columns must be positive",
                rows, cols
            ),
            MazeError::Format(e) => write!(f, "malformed maze data: {}", e),
            MazeError::InvalidArgument { pos, rows, cols } => {
                write!(f, "position {} is outside the {}x{} grid", pos, rows, cols)
            }
            MazeError::Blocked { pos, dir, step } => {
                write!(f, "move {} ({}) from {} is blocked", step, dir, pos)
            }
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingHeader => write!(f, "missing `rows cols` header"),
            FormatError::InvalidHeader { token } => {
                write!(f, "header token {} is not an integer", token)
            }
            FormatError::NonPositiveDimensions { rows, cols } => {
                write!(f, "header declares non-positive dimensions {}x{}", rows, cols)
            }
            FormatError::TooLarge { rows, cols } => {
                write!(f, "header dimensions {}x{} are too large", rows, cols)
            }
            FormatError::TokenCount { expected, found } => {
                write!(f, "expected {} tokens, found {}", expected, found)
            }
            FormatError::InvalidWall { index } => {
                write!(f, "token {} is not a wall flag (0 or 1)", index)
            }
        }
    }
}

impl core::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MazeError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl core::error::Error for FormatError {}

impl From<FormatError> for MazeError {
    fn from(e: FormatError) -> Self {
        MazeError::Format(e)
    }
}
