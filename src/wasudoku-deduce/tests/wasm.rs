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

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wasudoku_deduce::wasm::{grade_sudoku, solve_sudoku};

const SWORDFISH_PUZZLE: &str =
    "4..6...95.2..95478.954..6..........2.125.7.3.3..2......417.256.26795....53..64..7";

#[wasm_bindgen_test]
fn solve_returns_an_outcome_object() {
    let value = solve_sudoku(SWORDFISH_PUZZLE).unwrap();
    assert!(value.is_object());
}

#[wasm_bindgen_test]
fn malformed_puzzles_are_rejected() {
    assert!(solve_sudoku("123").is_err());
    assert!(grade_sudoku("x".repeat(81).as_str()).is_err());
}

#[wasm_bindgen_test]
fn grading_names_the_hardest_level() {
    assert_eq!(grade_sudoku(SWORDFISH_PUZZLE).unwrap(), "Advanced");
}
