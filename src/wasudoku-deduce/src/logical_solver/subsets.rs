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

use super::find_combination;
use crate::grid::{ALL_HOUSES, Grid, House, digits_to_mask, mask_to_vec};
use crate::types::{CauseCell, Elimination, SolvingStep};

// --- Naked Subsets ---

/// Searches rows, then columns, then boxes for a naked subset of any size that
/// removes at least one candidate. Within a house, smaller subsets come first.
pub fn find_naked_subset(grid: &Grid) -> Option<SolvingStep> {
    ALL_HOUSES
        .iter()
        .find_map(|&house| find_naked_subset_in_house(grid, house))
}

/// Tries every r-combination of the digits still open in the house, for r from 2
/// up to one less than the number of those digits.
pub fn find_naked_subset_in_house(grid: &Grid, house: House) -> Option<SolvingStep> {
    let open_cells: Vec<usize> = house
        .cells()
        .iter()
        .copied()
        .filter(|&i| !grid.is_solved_cell(i))
        .collect();
    let open_digits = mask_to_vec(
        open_cells
            .iter()
            .fold(0, |mask, &i| mask | grid.candidates(i)),
    );

    for size in 2..open_digits.len() {
        let step = find_combination(&open_digits, size, |combo| {
            check_naked_subset(grid, house, &open_cells, digits_to_mask(combo))
        });
        if step.is_some() {
            return step;
        }
    }
    None
}

/// The subset holds when exactly as many cells as digits are confined to `mask`.
#[inline]
fn check_naked_subset(
    grid: &Grid,
    house: House,
    open_cells: &[usize],
    mask: u16,
) -> Option<SolvingStep> {
    let members: Vec<usize> = open_cells
        .iter()
        .copied()
        .filter(|&i| grid.candidates(i) & !mask == 0)
        .collect();

    if members.len() != mask.count_ones() as usize {
        return None;
    }
    construct_naked_subset_step(grid, house, open_cells, &members, mask)
}

fn construct_naked_subset_step(
    grid: &Grid,
    house: House,
    open_cells: &[usize],
    members: &[usize],
    mask: u16,
) -> Option<SolvingStep> {
    let mut eliminations = Vec::new();
    let cands = mask_to_vec(mask);

    for &idx in open_cells {
        if !members.contains(&idx) && (grid.candidates(idx) & mask) != 0 {
            for &val in &cands {
                if (grid.candidates(idx) & (1 << (val - 1))) != 0 {
                    eliminations.push(Elimination {
                        index: idx,
                        value: val,
                    });
                }
            }
        }
    }

    if eliminations.is_empty() {
        return None;
    }

    Some(SolvingStep {
        technique: naked_subset_name(members.len()),
        digits: cands,
        houses: vec![house],
        placements: vec![],
        eliminations,
        cause: members
            .iter()
            .map(|&i| CauseCell {
                index: i,
                candidates: grid.cell(i).digits(),
            })
            .collect(),
    })
}

fn naked_subset_name(size: usize) -> String {
    match size {
        2 => "NakedPair".to_string(),
        3 => "NakedTriple".to_string(),
        4 => "NakedQuad".to_string(),
        n => format!("NakedSubset-{}", n),
    }
}
