use sudoku_solver::parse_errors::LineParseError;
use sudoku_solver::{Board, Sudoku};

fn read_sudokus(sudokus_str: &str) -> Vec<Sudoku> {
    sudokus_str
        .lines()
        .map(|line| Sudoku::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

#[test]
fn correct_solution_easy_sudokus() {
    let sudokus = read_sudokus(include_str!("../sudokus/easy_sudokus.txt"));
    let solved_sudokus = read_sudokus(include_str!("../sudokus/solved_easy_sudokus.txt"));
    for (i, (sudoku, solved_sudoku)) in sudokus.into_iter().zip(solved_sudokus).enumerate() {
        let solutions = sudoku.solve_at_most(2);
        match solutions.len() {
            1 => assert_eq!(solved_sudoku, solutions[0]),
            0 => panic!("Found no solution for {}. sudoku:\n{}", i + 1, sudoku),
            _ => panic!("Found multiple solutions for {}. sudoku:\n{}", i + 1, sudoku),
        }
    }
}

#[test]
fn solutionless_sudokus() {
    let sudokus = read_sudokus(include_str!("../sudokus/unsolvable_sudokus.txt"));
    for sudoku in sudokus {
        assert_eq!(sudoku.solve_one(), None);
        assert_eq!(sudoku.count_at_most(4), 0);
    }
}

#[test]
fn is_solved_on_unsolved() {
    let sudokus = read_sudokus(include_str!("../sudokus/easy_sudokus.txt"));
    for sudoku in sudokus {
        assert!(!sudoku.is_solved(), "unsolved sudoku counted as solved: {}", sudoku);
    }
}

#[test]
fn is_solved_on_solved() {
    let solved_sudokus = read_sudokus(include_str!("../sudokus/solved_easy_sudokus.txt"));
    for sudoku in solved_sudokus {
        assert!(sudoku.is_solved(), "solved sudoku counted as unsolved: {}", sudoku);
    }
}

// two completions, differing in an unavoidable rectangle in the last band
const TWO_SOLUTION_SUDOKU: &str =
    "534678912672195348198342567859761423426853791713924856961.3728.287.1963.345286179";

#[test]
fn finds_and_counts_both_solutions() {
    let sudoku = Sudoku::from_str_line(TWO_SOLUTION_SUDOKU).unwrap();
    assert_eq!(sudoku.count_at_most(1), 1);
    assert_eq!(sudoku.count_at_most(2), 2);
    assert_eq!(sudoku.count_at_most(3), 2);

    let solutions = sudoku.solve_at_most(3);
    assert_eq!(solutions.len(), 2);
    for solution in &solutions {
        assert!(solution.is_solved());
    }
    let expected = [
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        "534678912672195348198342567859761423426853791713924856961437285287519634345286179",
    ];
    for line in &expected {
        let solution = Sudoku::from_str_line(line).unwrap();
        assert!(solutions.contains(&solution));
    }
}

#[test]
fn solve_unique_rejects_ambiguous_sudoku() {
    let sudoku = Sudoku::from_str_line(TWO_SOLUTION_SUDOKU).unwrap();
    assert_eq!(sudoku.solve_unique(), None);
}

// failed unwrap. As long as it doesn't panic for other reasons it's fine
#[test]
#[should_panic]
fn solve_unique_empty_grid() {
    let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
    sudoku.solve_unique().unwrap();
}

#[test]
fn solve_on_solved_sudoku_returns_it_unchanged() {
    let solved_sudokus = read_sudokus(include_str!("../sudokus/solved_easy_sudokus.txt"));
    for sudoku in solved_sudokus {
        assert_eq!(sudoku.n_clues(), 81);
        assert_eq!(sudoku.solve_one(), Some(sudoku));
        assert_eq!(sudoku.count_at_most(2), 1);
    }
}

#[test]
fn board_solves_inserted_clues() {
    let sudoku = Sudoku::from_str_line(
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    )
    .unwrap();

    let mut board = Board::new();
    for (cell, digit) in sudoku.clues() {
        board.insert(cell, digit).unwrap();
    }
    assert_eq!(board.count_at_most(2), 1);
    board.solve().unwrap();

    let solution = board.to_sudoku();
    assert!(solution.is_solved());
    assert_eq!(
        solution.to_str_line().as_str(),
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    );
}

#[test]
fn roundtrip_line_format() {
    let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    let sudoku = Sudoku::from_str_line(line).unwrap();
    assert_eq!(sudoku.n_clues(), 32);
    let printed = sudoku.to_str_line();
    let dereffed_line: &str = &printed;
    assert_eq!(dereffed_line, line);
}

#[test]
fn alternate_blanks_and_comments_are_accepted() {
    let canonical =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
    let with_underscores =
        "4_____8_5_3__________7______2_____6_____8_4______1_______6_3_7_5__2_____1_4______";
    let with_zeros =
        "400000805030000000000700000020000060000080400000010000000603070500200000104000000";

    let sudoku = Sudoku::from_str_line(canonical).unwrap();
    assert_eq!(sudoku, Sudoku::from_str_line(with_underscores).unwrap());
    assert_eq!(sudoku, Sudoku::from_str_line(with_zeros).unwrap());

    for comment_line in [
        format!("{} this is a comment", canonical),
        format!("{}\tcomment", canonical),
        format!("{},comment", canonical),
        format!("{};comment", canonical),
    ] {
        assert_eq!(sudoku, Sudoku::from_str_line(&comment_line).unwrap());
    }
}

#[test]
fn line_parse_errors() {
    let line80 = ".".repeat(80);
    match Sudoku::from_str_line(&line80) {
        Err(LineParseError::NotEnoughCells(80)) => {}
        other => panic!("expected NotEnoughCells(80), got {:?}", other),
    }

    let early_space = format!("{} {}", ".".repeat(60), ".".repeat(20));
    match Sudoku::from_str_line(&early_space) {
        Err(LineParseError::NotEnoughCells(60)) => {}
        other => panic!("expected NotEnoughCells(60), got {:?}", other),
    }

    let bad_char = format!("..3x{}", ".".repeat(77));
    match Sudoku::from_str_line(&bad_char) {
        Err(LineParseError::InvalidEntry(entry)) => {
            assert_eq!(entry.cell, 3);
            assert_eq!(entry.ch, 'x');
        }
        other => panic!("expected InvalidEntry, got {:?}", other),
    }

    let line82 = ".".repeat(82);
    match Sudoku::from_str_line(&line82) {
        Err(LineParseError::TooManyCells) => {}
        other => panic!("expected TooManyCells, got {:?}", other),
    }

    let glued_comment = format!("{}comment", ".".repeat(81));
    match Sudoku::from_str_line(&glued_comment) {
        Err(LineParseError::MissingCommentDelimiter) => {}
        other => panic!("expected MissingCommentDelimiter, got {:?}", other),
    }
}
