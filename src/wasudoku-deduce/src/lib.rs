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

//! Pure-deduction Sudoku engine.
//!
//! A [`Grid`](grid::Grid) tracks the candidates of all 81 cells. Removing a
//! candidate goes through a single propagation path that cascades every forced
//! assignment, and [`logical_solver`] applies singles, naked subsets,
//! intersection removal and fish patterns until the puzzle is solved, stuck, or
//! shown to be contradictory. No guessing is ever performed.

pub mod board;
pub mod error;
pub mod grid;
pub mod logical_solver;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{Contradiction, ParseBoardError};
pub use grid::Grid;
pub use logical_solver::{LogicalSolver, SolverOptions, solve_with_steps};
pub use types::{SolveOutcome, SolvingStep, Status};
