use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use host::{
    default_maze_filename, generate_maze, load_maze, render, save_maze, save_report, solve_maze,
    HostError,
};
use maze_core::Pos;

/// Generate perfect mazes and solve them
#[derive(Parser, Debug)]
#[command(name = "maze", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and save it to a file
    Generate {
        /// Number of cell rows
        rows: usize,

        /// Number of cell columns
        cols: usize,

        /// Seed for the generator; random when omitted
        #[arg(long, env = "MAZE_SEED")]
        seed: Option<u32>,

        /// Output file, defaults to maze_<rows>x<cols>.txt
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the generated maze
        #[arg(long)]
        no_print: bool,
    },

    /// Load a maze file and find the shortest path between two cells
    Solve {
        /// Maze file written by `maze generate`
        file: PathBuf,

        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,

        /// Write the solution as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not print the solved maze
        #[arg(long)]
        no_print: bool,
    },

    /// Print a stored maze
    Show {
        /// Maze file written by `maze generate`
        file: PathBuf,
    },
}

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        tracing::error!("{}", e);
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), HostError> {
    match command {
        Command::Generate {
            rows,
            cols,
            seed,
            output,
            no_print,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let grid = generate_maze(rows, cols, seed)?;

            let file = output.unwrap_or_else(|| PathBuf::from(default_maze_filename(rows, cols)));
            save_maze(&grid, &file)?;

            println!("💾 Maze saved to: {} (seed {})", file.display(), seed);
            if !no_print {
                println!();
                print!("{}", render(&grid, &[], None, None));
            }
        }

        Command::Solve {
            file,
            start_row,
            start_col,
            end_row,
            end_col,
            output,
            no_print,
        } => {
            let grid = load_maze(&file)?;
            let start = Pos::new(start_row, start_col);
            let end = Pos::new(end_row, end_col);

            let report = solve_maze(&grid, start, end)?;
            if let Some(output) = output {
                save_report(&report, &output)?;
            }

            if !report.found {
                println!("No solution exists from {} to {}.", start, end);
                return Ok(());
            }

            println!("✅ Solution path length: {} cells", report.length);
            if !no_print {
                println!();
                print!("{}", render(&grid, &report.positions(), Some(start), Some(end)));
            }
        }

        Command::Show { file } => {
            let grid = load_maze(&file)?;
            print!("{}", render(&grid, &[], None, None));
        }
    }

    Ok(())
}
