//! Batch solving command line tool.
//!
//! Reads a puzzle file with one sudoku per line in the line format,
//! solves them all and reports tallies and throughput.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{info, warn};

use sudoku_solver::parse_errors::LineParseError;
use sudoku_solver::{Board, Sudoku};

/// Solves every sudoku in a puzzle file.
///
/// Each non-comment line of the file holds one sudoku: 81 characters,
/// the digits 1-9 for clues and '.', '0' or '_' for empty cells. Lines
/// starting with '#' and blank lines are skipped.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version)]
struct Cli {
    /// Puzzle file to solve
    input: PathBuf,

    /// Write the results to this file, one 81-character line per puzzle
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Check every puzzle for solution uniqueness
    #[arg(long)]
    check_unique: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .map_err(|err| format!("failed to open `{}`: {}", cli.input.display(), err))?;
    let puzzles = parse_puzzles(&text, &cli.input)?;

    match puzzles.len() {
        1 => println!("Loaded a puzzle from `{}`", cli.input.display()),
        n => println!("Loaded {} puzzles from `{}`", n, cli.input.display()),
    }

    let mut results = Vec::with_capacity(puzzles.len());
    let mut unsolvable = 0usize;
    let mut invalid = 0usize;
    let mut non_unique = 0usize;

    let start = Instant::now();
    for (nr, sudoku) in puzzles.iter().enumerate() {
        let mut board = Board::new();
        let mut clues_rejected = false;
        for (cell, digit) in sudoku.clues() {
            if let Err(err) = board.insert(cell, digit) {
                warn!("puzzle {}: {}", nr + 1, err);
                clues_rejected = true;
            }
        }
        if clues_rejected {
            invalid += 1;
        }

        if cli.check_unique && board.count_at_most(2) > 1 {
            non_unique += 1;
        }

        if board.solve().is_err() {
            unsolvable += 1;
        }
        // unsolvable boards are written out as is, open cells become '.'
        results.push(board.to_sudoku());
    }
    let elapsed = start.elapsed();
    info!("solved {} puzzles in {:.3}s", results.len(), elapsed.as_secs_f64());

    println!(
        "Solving speed: {:.2} puzzles/s",
        puzzles.len() as f64 / elapsed.as_secs_f64()
    );
    match unsolvable {
        0 => {}
        1 => println!("A puzzle can't be solved"),
        n => println!("{} puzzles can't be solved", n),
    }
    match invalid {
        0 => {}
        1 => println!("A puzzle is invalid"),
        n => println!("{} puzzles are invalid", n),
    }
    match non_unique {
        0 => {}
        1 => println!("A puzzle has more than one solution"),
        n => println!("{} puzzles have more than one solution", n),
    }

    if let Some(output) = &cli.output {
        let mut lines = String::with_capacity(results.len() * 82);
        for sudoku in &results {
            lines.push_str(&sudoku.to_str_line());
            lines.push('\n');
        }
        fs::write(output, &lines)
            .map_err(|err| format!("failed to write `{}`: {}", output.display(), err))?;
        println!("Results saved to `{}`", output.display());
    } else if results.len() == 1 {
        println!("{}", results[0]);
    }

    Ok(())
}

/// Parses the loaded puzzle file. A single malformed line fails the whole
/// file; the error names the offending position as `path:line:column`.
fn parse_puzzles(text: &str, path: &Path) -> Result<Vec<Sudoku>, Box<dyn Error>> {
    let mut puzzles = Vec::new();
    for (nr, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let sudoku = Sudoku::from_str_line(line).map_err(|err| match err {
            LineParseError::InvalidEntry(entry) => format!(
                "{}:{}:{}: invalid character '{}'",
                path.display(),
                nr + 1,
                entry.cell as usize + 1,
                entry.ch,
            ),
            err => format!("{}:{}: {}", path.display(), nr + 1, err),
        })?;
        puzzles.push(sudoku);
    }
    Ok(puzzles)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_puzzles_and_skips_comments_and_blank_lines() {
        let text = "\
# easy samples
..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..

4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......
";
        let puzzles = parse_puzzles(text, Path::new("puzzles.txt")).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].n_clues(), 32);
    }

    #[test]
    fn reports_position_of_malformed_line() {
        let text = "# header\n.................................................................................\n....x............................................................................\n";
        let err = parse_puzzles(text, Path::new("puzzles.txt")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "puzzles.txt:3:5: invalid character 'x'"
        );
    }

    #[test]
    fn short_line_fails_with_line_number() {
        let err = parse_puzzles("123\n", Path::new("p.txt")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "p.txt:1: sudoku contains 3 cells instead of required 81"
        );
    }
}
