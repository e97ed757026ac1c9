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

use crate::error::Contradiction;
use crate::grid::{ALL_HOUSES, Grid, House, digit_bit};
use crate::types::{Placement, SolvingStep};
use log::debug;

/// Places every digit that has a single possible cell left in some house.
///
/// Scans all 27 houses and all nine digits in one pass, solving each single as
/// soon as it is seen, so later houses observe earlier placements. Returns true
/// if anything was placed.
pub fn apply_singles(grid: &mut Grid, steps: &mut Vec<SolvingStep>) -> Result<bool, Contradiction> {
    let mut found = false;
    for &house in ALL_HOUSES.iter() {
        for num in 1..=9 {
            if let Some(target_idx) = find_unique_position_in_house(grid, house, num) {
                grid.solve_cell(target_idx, num)?;
                let step = SolvingStep {
                    technique: "HiddenSingle".to_string(),
                    digits: vec![num],
                    houses: vec![house],
                    placements: vec![Placement {
                        index: target_idx,
                        value: num,
                    }],
                    eliminations: vec![],
                    cause: vec![],
                };
                debug!("{}", step);
                steps.push(step);
                found = true;
            }
        }
    }
    Ok(found)
}

/// Helper to find the single open cell in a house where `num` is a candidate.
#[inline]
pub(crate) fn find_unique_position_in_house(grid: &Grid, house: House, num: u8) -> Option<usize> {
    let mask = digit_bit(num);
    let mut count = 0;
    let mut target_idx = 0;

    for &idx in house.cells() {
        if !grid.is_solved_cell(idx) && (grid.candidates(idx) & mask) != 0 {
            count += 1;
            target_idx = idx;
            if count > 1 {
                return None; // Optimization: exit early if not unique
            }
        }
    }

    if count == 1 { Some(target_idx) } else { None }
}
