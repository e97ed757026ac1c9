/*
* Copyright (C) 2025  Henrique Almeida
* This file is part of WASudoku.
*
* WASudoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* WASudoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with WASudoku.  If not, see <https://www.gnu.org/licenses/>.
*/

use wasudoku_deduce::board::Board;
use wasudoku_deduce::error::Contradiction;
use wasudoku_deduce::grid::{ALL_CANDIDATES, Grid, NOT_SOLVED, digit_bit, mask_to_vec};

const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn grid_from_str(s: &str) -> Grid {
    Grid::from_board(&s.parse::<Board>().unwrap()).unwrap()
}

#[test]
fn test_candidate_initialization() {
    let grid = grid_from_str(HARD);

    assert_eq!(grid.cell(0).value(), Some(4));
    // r1c2 sees 4, 8, 5 in its row, 3, 2 in its column.
    assert_eq!(grid.cell(1).digits(), vec![1, 6, 7, 9]);
    assert_eq!(grid.cell(2).digits(), vec![1, 2, 6, 7, 9]);
    assert!(grid.cells_in_row(0).all(|c| c.is_solved() || !c.has(8)));
    assert_eq!(grid.cell_at(8, 2).value(), Some(4));
    // Seventeen givens and no forced cells.
    assert_eq!((0..81).filter(|&i| grid.is_solved_cell(i)).count(), 17);
}

#[test]
fn test_givens_can_solve_the_whole_grid() {
    let grid = grid_from_str(CLASSIC);
    assert!(grid.is_solved());
}

#[test]
fn test_empty_board_has_every_candidate() {
    let grid = Grid::from_board(&Board::empty()).unwrap();
    assert!((0..81).all(|i| grid.candidates(i) == ALL_CANDIDATES));
    assert_eq!(grid.elimination_count(), 0);
    assert!(!grid.is_solved());
    assert_eq!(grid.serialize(), NOT_SOLVED);
    assert_eq!(grid.to_board(), Board::empty());
    assert!(!grid.to_board().is_complete());
}

#[test]
fn test_single_given_removes_digit_from_twenty_peers() {
    let mut line = ".".repeat(81);
    line.replace_range(40..41, "5");
    let grid = grid_from_str(&line);

    // Eight removals from the given itself, one from each peer.
    assert_eq!(grid.elimination_count(), 8 + 20);
    let without_five = (0..81)
        .filter(|&i| i != 40 && grid.candidates(i) & digit_bit(5) == 0)
        .count();
    assert_eq!(without_five, 20);
    assert!(grid.cells_in_box(4).all(|c| c.index == 40 || !c.has(5)));
    assert!(grid.cells_in_column(4).all(|c| c.index == 40 || !c.has(5)));
}

#[test]
fn test_last_candidate_in_row_cascades() {
    let mut grid = Grid::from_board(&Board::empty()).unwrap();
    for col in 0..8 {
        grid.solve_cell(col, col as u8 + 1).unwrap();
    }
    // r1c9 was left with 9 alone and must already be placed.
    assert_eq!(grid.cell(8).value(), Some(9));
    assert!(grid.cells_in_column(8).skip(1).all(|c| !c.has(9)));
}

#[test]
fn test_eliminations_never_empty_a_cell() {
    let mut grid = Grid::from_board(&Board::empty()).unwrap();
    assert!(grid.eliminate_many(0, ALL_CANDIDATES & !digit_bit(1)).unwrap());
    // A solved cell is protected, even against its own digit.
    assert!(!grid.eliminate_many(0, ALL_CANDIDATES).unwrap());
    assert_eq!(mask_to_vec(grid.candidates(0)), vec![1]);
}

#[test]
fn test_conflicting_givens_name_the_cell() {
    let mut line = ".".repeat(81);
    line.replace_range(0..1, "4");
    line.replace_range(80..81, "4");
    line.replace_range(8..9, "4");
    let err = Grid::from_board(&line.parse().unwrap()).unwrap_err();
    assert_eq!(err, Contradiction { index: 8, digit: 4 });
    assert_eq!(
        err.to_string(),
        "no candidates left for r1c9 after removing 4"
    );
}

#[test]
fn test_solved_grid_serializes_digits() {
    let solution =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let grid = grid_from_str(solution);
    assert!(grid.is_solved());
    assert!(grid.to_board().is_complete());
    assert_eq!(grid.serialize(), solution);
    assert_eq!(grid.solution().as_deref(), Some(solution));
}

#[test]
fn test_digits_outside_one_to_nine_are_never_candidates() {
    let mut grid = Grid::from_board(&Board::empty()).unwrap();
    assert!(!grid.eliminate(0, 0).unwrap());
    assert!(!grid.eliminate(0, 10).unwrap());
    assert_eq!(grid.candidates(0), ALL_CANDIDATES);
    assert_eq!(grid.solve_cell(0, 0), Err(Contradiction { index: 0, digit: 0 }));

    let mut board = Board::empty();
    board.cells[5] = 12;
    let err = Grid::from_board(&board).unwrap_err();
    assert_eq!(err, Contradiction { index: 5, digit: 12 });
}
