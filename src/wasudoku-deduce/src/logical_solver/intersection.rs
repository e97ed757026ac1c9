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

use crate::grid::{Grid, House, box_of, col_of, digit_bit, row_of};
use crate::types::{CauseCell, Elimination, SolvingStep};

// --- Pointing ---

/// Boxes in order, digits ascending: when the two or three open cells of a box
/// holding a digit share a line, the digit leaves the rest of that line.
pub fn find_pointing_pair(grid: &Grid) -> Option<SolvingStep> {
    for box_idx in 0..9 {
        let box_house = House::boxed(box_idx);
        for num in 1..=9 {
            let cells = cells_with_candidate(grid, box_house, num);

            if cells.len() < 2 || cells.len() > 3 {
                continue;
            }

            if let Some(step) = check_pointing_alignment(grid, &cells, box_house, num) {
                return Some(step);
            }
        }
    }
    None
}

/// Tries the shared row first, then the shared column.
#[inline]
fn check_pointing_alignment(
    grid: &Grid,
    cells: &[usize],
    box_house: House,
    num: u8,
) -> Option<SolvingStep> {
    let row0 = row_of(cells[0]);
    let col0 = col_of(cells[0]);

    let lines = [
        (cells.iter().all(|&c| row_of(c) == row0), House::row(row0)),
        (cells.iter().all(|&c| col_of(c) == col0), House::column(col0)),
    ];
    for (aligned, line) in lines {
        if !aligned {
            continue;
        }
        // Eliminate from the line where it leaves the source box
        let elims = collect_elims_outside(grid, line, box_house, num);
        if !elims.is_empty() {
            let technique = if cells.len() == 2 {
                "PointingPair"
            } else {
                "PointingTriple"
            };
            return Some(build_intersection_step(
                technique,
                num,
                [box_house, line],
                cells,
                elims,
            ));
        }
    }
    None
}

// --- Box-Line Reduction ---

/// Rows, then columns: when every open cell of a line holding a digit sits in
/// one box, the digit leaves the rest of that box.
pub fn find_box_line_reduction(grid: &Grid) -> Option<SolvingStep> {
    // Check Rows, then Columns
    let lines = (0..9).map(House::row).chain((0..9).map(House::column));
    for line in lines {
        if let Some(step) = find_box_line_in_unit(grid, line) {
            return Some(step);
        }
    }
    None
}

/// Generic check for Box-Line Reduction in a linear unit (row or col).
#[inline]
fn find_box_line_in_unit(grid: &Grid, line: House) -> Option<SolvingStep> {
    for num in 1..=9 {
        // Find all open cells in this line with the candidate
        let cells = cells_with_candidate(grid, line, num);
        let Some(&first) = cells.first() else {
            continue;
        };

        let box_idx = box_of(first);
        if cells.iter().all(|&c| box_of(c) == box_idx) {
            let box_house = House::boxed(box_idx);
            let elims = collect_elims_outside(grid, box_house, line, num);

            if !elims.is_empty() {
                return Some(build_intersection_step(
                    "BoxLineReduction",
                    num,
                    [line, box_house],
                    &cells,
                    elims,
                ));
            }
        }
    }
    None
}

/// The open cells of `house` that still carry `num`.
#[inline]
fn cells_with_candidate(grid: &Grid, house: House, num: u8) -> Vec<usize> {
    let mask = digit_bit(num);
    house
        .cells()
        .iter()
        .copied()
        .filter(|&i| !grid.is_solved_cell(i) && (grid.candidates(i) & mask) != 0)
        .collect()
}

/// Eliminations of `num` from the open cells of `target` that lie outside `source`.
#[inline]
fn collect_elims_outside(grid: &Grid, target: House, source: House, num: u8) -> Vec<Elimination> {
    let mask = digit_bit(num);
    target
        .cells()
        .iter()
        .copied()
        .filter(|&idx| {
            !source.contains(idx) && !grid.is_solved_cell(idx) && (grid.candidates(idx) & mask) != 0
        })
        .map(|idx| Elimination {
            index: idx,
            value: num,
        })
        .collect()
}

#[inline]
fn build_intersection_step(
    technique: &str,
    num: u8,
    houses: [House; 2],
    cells: &[usize],
    elims: Vec<Elimination>,
) -> SolvingStep {
    SolvingStep {
        technique: technique.to_string(),
        digits: vec![num],
        houses: houses.to_vec(),
        placements: vec![],
        eliminations: elims,
        cause: cells
            .iter()
            .map(|&i| CauseCell {
                index: i,
                candidates: vec![num],
            })
            .collect(),
    }
}
