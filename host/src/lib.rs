//! Maze files, solution reports and rendering around `maze-core`
//!
//! Everything that touches the outside world lives here: reading and writing
//! maze files, timing and logging the algorithms, the JSON solution report,
//! and the ASCII renderer used by the `maze` binary.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use maze_core::{codec, maze_gen, solver, Direction, Grid, MazeError, Pos};
use serde::{Deserialize, Serialize};

pub mod render;

pub use render::render;

/// Errors surfaced by the host layer
#[derive(Debug)]
pub enum HostError {
    /// Reading or writing a file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Maze construction, decoding or solving failed
    Maze(MazeError),

    /// A solution report could not be encoded
    Json(serde_json::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            HostError::Maze(e) => write!(f, "{}", e),
            HostError::Json(e) => write!(f, "failed to encode report: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io { source, .. } => Some(source),
            HostError::Maze(e) => Some(e),
            HostError::Json(e) => Some(e),
        }
    }
}

impl From<MazeError> for HostError {
    fn from(e: MazeError) -> Self {
        HostError::Maze(e)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        HostError::Json(e)
    }
}

/// Result of solving a maze between two cells
///
/// Serialized as JSON by `maze solve --output`. Positions are `[row, col]`
/// pairs and moves are direction indices (0=UP, 1=RIGHT, 2=DOWN, 3=LEFT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub rows: usize,
    pub cols: usize,
    pub start: (usize, usize),
    pub end: (usize, usize),

    /// Whether a path exists at all
    pub found: bool,

    /// Number of cells on the path, both ends included (0 when not found)
    pub length: usize,

    pub path: Vec<(usize, usize)>,
    pub moves: Vec<u8>,
}

impl SolutionReport {
    /// Path as grid positions
    pub fn positions(&self) -> Vec<Pos> {
        self.path.iter().copied().map(Pos::from).collect()
    }
}

/// Default file name for a generated maze, e.g. `maze_10x12.txt`
pub fn default_maze_filename(rows: usize, cols: usize) -> String {
    format!("maze_{}x{}.txt", rows, cols)
}

/// Generate a maze from a seed, logging the seed so the maze can be rebuilt
pub fn generate_maze(rows: usize, cols: usize, seed: u32) -> Result<Grid, HostError> {
    tracing::info!("Generating {}x{} maze with seed {}", rows, cols, seed);

    let start = Instant::now();
    let grid = maze_gen::generate_seeded(rows, cols, seed)?;

    tracing::info!(
        "Maze generated in {:.2?} ({} passages)",
        start.elapsed(),
        grid.open_passage_count()
    );
    Ok(grid)
}

/// Write `grid` to `path` in the maze text format
pub fn save_maze(grid: &Grid, path: impl AsRef<Path>) -> Result<(), HostError> {
    let path = path.as_ref();
    fs::write(path, codec::serialize(grid)).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Maze saved to {}", path.display());
    Ok(())
}

/// Read a maze file written by [`save_maze`]
pub fn load_maze(path: impl AsRef<Path>) -> Result<Grid, HostError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = codec::deserialize(&text)?;
    tracing::info!(
        "Maze loaded from {} ({}x{})",
        path.display(),
        grid.rows(),
        grid.cols()
    );
    Ok(grid)
}

/// Solve `grid` from `start` to `end` and summarise the result
pub fn solve_maze(grid: &Grid, start: Pos, end: Pos) -> Result<SolutionReport, HostError> {
    tracing::info!("Solving from {} to {}", start, end);

    let timer = Instant::now();
    let path = solver::solve(grid, start, end)?;
    let elapsed = timer.elapsed();

    if path.is_empty() {
        tracing::warn!("No path from {} to {}", start, end);
    } else {
        tracing::info!("Solved in {:.2?}, path length {} cells", elapsed, path.len());
    }

    // BFS output is always a valid walk, so the conversion cannot fail
    let moves: Vec<Direction> = solver::path_to_moves(&path).unwrap_or_default();
    tracing::debug!("Moves: {:?}", moves);

    Ok(SolutionReport {
        rows: grid.rows(),
        cols: grid.cols(),
        start: (start.row, start.col),
        end: (end.row, end.col),
        found: !path.is_empty(),
        length: path.len(),
        path: path.iter().map(|pos| (pos.row, pos.col)).collect(),
        moves: moves.into_iter().map(|dir| dir as u8).collect(),
    })
}

/// Write a solution report as pretty-printed JSON
pub fn save_report(report: &SolutionReport, path: impl AsRef<Path>) -> Result<(), HostError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Solution report saved to {}", path.display());
    Ok(())
}
