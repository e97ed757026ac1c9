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

//! The candidate grid: 81 cells, each holding the set of digits it may still take.

mod propagate;
mod units;

pub use units::{House, HouseKind, box_of, col_of, row_of};
pub(crate) use units::{ALL_HOUSES, PEER_MAP, cell_name};

use crate::board::Board;
use crate::error::Contradiction;

/// Bitmask representing all candidates (1-9) for a cell.
pub const ALL_CANDIDATES: u16 = 0b111111111;

/// Returned by [`Grid::serialize`] while any cell is still open.
pub const NOT_SOLVED: &str = "Not solved";

/// The candidate bit of a digit, or an empty mask for anything outside 1-9.
#[inline]
pub fn digit_bit(digit: u8) -> u16 {
    match digit {
        1..=9 => 1 << (digit - 1),
        _ => 0,
    }
}

/// Convert a bitmask of candidates into a `Vec` of digits, ascending.
#[inline]
pub fn mask_to_vec(mask: u16) -> Vec<u8> {
    (1..=9)
        .filter(|&num| (mask >> (num - 1)) & 1 == 1)
        .collect()
}

/// Convert digits back into a candidate bitmask.
#[inline]
pub(crate) fn digits_to_mask(digits: &[u8]) -> u16 {
    digits.iter().fold(0, |mask, &d| mask | digit_bit(d))
}

/// A snapshot of one cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub candidates: u16,
}

impl Cell {
    pub fn row(&self) -> usize {
        row_of(self.index)
    }

    pub fn col(&self) -> usize {
        col_of(self.index)
    }

    pub fn box_index(&self) -> usize {
        box_of(self.index)
    }

    pub fn is_solved(&self) -> bool {
        self.candidates.count_ones() == 1
    }

    /// The digit of a solved cell.
    pub fn value(&self) -> Option<u8> {
        self.is_solved()
            .then(|| (self.candidates.trailing_zeros() + 1) as u8)
    }

    /// Whether the cell is still open and may take `digit`.
    pub fn has(&self, digit: u8) -> bool {
        !self.is_solved() && self.candidates & digit_bit(digit) != 0
    }

    pub fn digits(&self) -> Vec<u8> {
        mask_to_vec(self.candidates)
    }
}

/// A Sudoku grid with candidate tracking for logical solving.
///
/// Candidate sets only ever shrink, and only through the propagation methods
/// in `propagate.rs`, which keep every solved digit out of its peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    candidates: [u16; 81],
    eliminations: usize,
}

impl Grid {
    /// Builds a grid from a board, assigning every given and propagating it to its peers.
    ///
    /// A cell value above 9 is not a candidate of any cell, so it fails the same
    /// way a clashing given does: as a [`Contradiction`] on that cell.
    pub fn from_board(board: &Board) -> Result<Self, Contradiction> {
        let mut grid = Grid {
            candidates: [ALL_CANDIDATES; 81],
            eliminations: 0,
        };
        for (index, &value) in board.cells.iter().enumerate() {
            if value != 0 {
                grid.solve_cell(index, value)?;
            }
        }
        Ok(grid)
    }

    /// The candidate bitmask of a cell.
    #[inline]
    pub fn candidates(&self, index: usize) -> u16 {
        self.candidates[index]
    }

    pub fn cell(&self, index: usize) -> Cell {
        Cell {
            index,
            candidates: self.candidates[index],
        }
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cell(row * 9 + col)
    }

    /// The nine cells of a house, in a stable order.
    pub fn cells_in(&self, house: House) -> impl Iterator<Item = Cell> + '_ {
        house.cells().iter().map(move |&i| self.cell(i))
    }

    pub fn cells_in_row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells_in(House::row(row))
    }

    pub fn cells_in_column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells_in(House::column(col))
    }

    pub fn cells_in_box(&self, index: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells_in(House::boxed(index))
    }

    #[inline]
    pub fn is_solved_cell(&self, index: usize) -> bool {
        self.candidates[index].count_ones() == 1
    }

    /// Whether every cell holds exactly one candidate.
    pub fn is_solved(&self) -> bool {
        self.candidates.iter().all(|c| c.count_ones() == 1)
    }

    /// The number of candidate removals performed on this grid so far.
    pub fn elimination_count(&self) -> usize {
        self.eliminations
    }

    /// The 81 digit solution, or [`NOT_SOLVED`].
    pub fn serialize(&self) -> String {
        self.solution().unwrap_or_else(|| NOT_SOLVED.to_string())
    }

    pub fn solution(&self) -> Option<String> {
        self.is_solved().then(|| self.to_board().to_string())
    }

    /// The digits placed so far, `0` for open cells.
    pub fn to_board(&self) -> Board {
        let mut board = Board::empty();
        for (index, cell) in board.cells.iter_mut().enumerate() {
            *cell = self.cell(index).value().unwrap_or(0);
        }
        board
    }

    /// Pre-calculates fish masks for all digits at once in a single pass.
    /// Returns ([digit][row] -> column mask, [digit][col] -> row mask), open cells only.
    pub(crate) fn fish_masks(&self) -> ([[u16; 9]; 10], [[u16; 9]; 10]) {
        let mut row_masks = [[0u16; 9]; 10];
        let mut col_masks = [[0u16; 9]; 10];

        for i in 0..81 {
            if !self.is_solved_cell(i) {
                let r = row_of(i);
                let c = col_of(i);
                let mut val = self.candidates[i];
                while val > 0 {
                    let trailing = val.trailing_zeros();
                    let num = (trailing + 1) as usize;
                    row_masks[num][r] |= 1 << c;
                    col_masks[num][c] |= 1 << r;
                    val &= !(1 << trailing);
                }
            }
        }
        (row_masks, col_masks)
    }
}
