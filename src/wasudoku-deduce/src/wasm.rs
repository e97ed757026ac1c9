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

//! JavaScript bindings.

use crate::board::Board;
use crate::logical_solver::{self, SolverOptions};
use wasm_bindgen::prelude::*;

/// Installs the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_board(puzzle: &str) -> Result<Board, JsValue> {
    puzzle
        .parse::<Board>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Solves an 81 character puzzle and returns the outcome with every step taken.
#[wasm_bindgen]
pub fn solve_sudoku(puzzle: &str) -> Result<JsValue, JsValue> {
    let board = parse_board(puzzle)?;
    let outcome = logical_solver::solve_with_steps(&board, &SolverOptions::default());
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Returns the name of the hardest technique level the puzzle needs.
#[wasm_bindgen]
pub fn grade_sudoku(puzzle: &str) -> Result<String, JsValue> {
    let board = parse_board(puzzle)?;
    let (level, _) = logical_solver::get_difficulty(&board, &SolverOptions::default());
    Ok(format!("{:?}", level))
}
