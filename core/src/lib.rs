//! Perfect-maze generation, persistence and solving
//!
//! This crate holds the maze model and the algorithms around it: the grid
//! of four-walled cells, the recursive-backtracker generator, the text
//! codec used for maze files, and the breadth-first solver. It does no I/O
//! and never logs; the host crate handles files, rendering and the CLI.
//!
//! The crate is no_std compatible (it only needs `alloc`), and all
//! randomness comes from a caller-supplied `rand::Rng`.

#![no_std]

extern crate alloc;

pub mod codec;
pub mod error;
pub mod grid;
pub mod maze_gen;
pub mod rng;
pub mod solver;

// Re-export commonly used types for convenience
pub use error::{FormatError, MazeError};
pub use grid::{Cell, Direction, Grid, Pos};
pub use rng::SimpleLCG;
