use std::fs;
use std::path::{Path, PathBuf};

use host::{
    generate_maze, load_maze, save_maze, save_report, solve_maze, HostError, SolutionReport,
};
use maze_core::{codec, FormatError, MazeError, Pos};

/// The known maze seed for testing
const MAZE_SEED: u32 = 2918957128;

/// Scratch file under the system temp dir, removed when dropped
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        let file_name = format!("maze-host-tests-{}-{}", std::process::id(), name);
        TempFile(std::env::temp_dir().join(file_name))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_save_load_round_trip() {
    let grid = generate_maze(12, 17, MAZE_SEED).expect("Maze generation failed");
    let file = TempFile::new("round_trip.txt");

    save_maze(&grid, &file).expect("Saving maze failed");
    let loaded = load_maze(&file).expect("Loading maze failed");

    assert_eq!(loaded, grid, "Maze changed after save/load");
    assert_eq!(loaded.open_passage_count(), 12 * 17 - 1);
}

#[test]
fn test_generate_save_load_solve() {
    let grid = generate_maze(20, 20, MAZE_SEED).expect("Maze generation failed");
    let file = TempFile::new("pipeline.txt");
    save_maze(&grid, &file).expect("Saving maze failed");

    // Solve in a "new run" from the file alone
    let loaded = load_maze(&file).expect("Loading maze failed");
    let report = solve_maze(&loaded, Pos::new(0, 0), Pos::new(19, 19)).expect("Solving failed");

    assert!(report.found, "Generated maze should always be solvable");
    let direct = maze_core::solver::solve(&grid, Pos::new(0, 0), Pos::new(19, 19)).unwrap();
    assert_eq!(report.positions(), direct);
}

#[test]
fn test_report_file_round_trip() {
    let grid = generate_maze(5, 8, 77).expect("Maze generation failed");
    let report = solve_maze(&grid, Pos::new(4, 0), Pos::new(0, 7)).expect("Solving failed");
    let file = TempFile::new("report.json");

    save_report(&report, &file).expect("Saving report failed");
    let text = fs::read_to_string(&file).unwrap();
    let decoded: SolutionReport = serde_json::from_str(&text).unwrap();

    assert_eq!(decoded, report);
}

#[test]
fn test_reads_single_line_maze_file() {
    // 1x2 maze with the single passage, all tokens on one line
    let file = TempFile::new("single_line.txt");
    fs::write(&file, "1 2\n1 0 1 1 1 1 1 0 ").unwrap();

    let grid = load_maze(&file).expect("Loading maze failed");
    let report = solve_maze(&grid, Pos::new(0, 0), Pos::new(0, 1)).unwrap();
    assert_eq!(report.path, vec![(0, 0), (0, 1)]);
}

#[test]
fn test_truncated_file_is_format_error() {
    let grid = generate_maze(3, 3, MAZE_SEED).unwrap();
    let text = codec::serialize(&grid);
    let truncated: Vec<&str> = text.split_whitespace().take(20).collect();

    let file = TempFile::new("truncated.txt");
    fs::write(&file, truncated.join(" ")).unwrap();

    match load_maze(&file) {
        Err(HostError::Maze(MazeError::Format(FormatError::TokenCount { expected, found }))) => {
            assert_eq!(expected, 38);
            assert_eq!(found, 20);
        }
        other => panic!("Expected a token count error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let file = TempFile::new("does_not_exist.txt");
    let _ = fs::remove_file(&file);

    match load_maze(&file) {
        Err(HostError::Io { path, source }) => {
            assert_eq!(path, file.path());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    assert!(matches!(
        generate_maze(0, 4, MAZE_SEED),
        Err(HostError::Maze(MazeError::InvalidDimensions { rows: 0, cols: 4 }))
    ));
}

#[test]
fn test_temp_files_are_removed() {
    let file = TempFile::new("cleanup.txt");
    let path = file.path().to_path_buf();
    save_maze(&generate_maze(2, 2, MAZE_SEED).unwrap(), &file).expect("Saving maze failed");
    assert!(path.exists());

    drop(file);
    assert!(!path.exists(), "Scratch file left behind");
}
