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
use crate::grid::{Grid, House, digit_bit};
use crate::types::{CauseCell, Elimination, SolvingStep};

/// `size` base lines of one orientation whose candidates for a digit all fall
/// into `size` cover lines of the other.
struct FishPattern<'a> {
    digit: u8,
    rows_are_base: bool,
    base: &'a [usize],
    cover: Vec<usize>,
}

impl FishPattern<'_> {
    fn cell(&self, base_line: usize, cover_line: usize) -> usize {
        if self.rows_are_base {
            base_line * 9 + cover_line
        } else {
            cover_line * 9 + base_line
        }
    }

    fn line(&self, base: bool, index: usize) -> House {
        if base == self.rows_are_base {
            House::row(index)
        } else {
            House::column(index)
        }
    }

    fn holds(&self, grid: &Grid, cell: usize) -> bool {
        !grid.is_solved_cell(cell) && grid.candidates(cell) & digit_bit(self.digit) != 0
    }

    /// Cover-line cells outside the base lines that still carry the digit.
    fn eliminations(&self, grid: &Grid) -> Vec<Elimination> {
        self.cover
            .iter()
            .flat_map(|&cover_line| {
                (0..9)
                    .filter(move |line| !self.base.contains(line))
                    .map(move |base_line| self.cell(base_line, cover_line))
            })
            .filter(|&cell| self.holds(grid, cell))
            .map(|index| Elimination {
                index,
                value: self.digit,
            })
            .collect()
    }

    fn into_step(self, grid: &Grid) -> Option<SolvingStep> {
        let eliminations = self.eliminations(grid);
        if eliminations.is_empty() {
            return None;
        }

        let cause = self
            .base
            .iter()
            .flat_map(|&base_line| self.cover.iter().map(move |&c| (base_line, c)))
            .map(|(base_line, cover_line)| self.cell(base_line, cover_line))
            .filter(|&cell| self.holds(grid, cell))
            .map(|index| CauseCell {
                index,
                candidates: vec![self.digit],
            })
            .collect();
        let houses = self
            .base
            .iter()
            .map(|&i| self.line(true, i))
            .chain(self.cover.iter().map(|&i| self.line(false, i)))
            .collect();

        Some(SolvingStep {
            technique: fish_name(self.base.len()),
            digits: vec![self.digit],
            houses,
            placements: vec![],
            eliminations,
            cause,
        })
    }
}

/// Generalized fish of `size` lines (X-Wing, Swordfish, Jellyfish, ...).
///
/// For each digit in ascending order, looks for `size` rows whose candidate
/// columns union to exactly `size` columns, then for the mirrored pattern on
/// columns. The first pattern that eliminates anything wins.
pub fn find_fish(grid: &Grid, size: usize) -> Option<SolvingStep> {
    if size < 2 {
        return None;
    }

    let (row_masks, col_masks) = grid.fish_masks();
    (1..=9u8).find_map(|digit| {
        let d = digit as usize;
        find_fish_on(grid, digit, &row_masks[d], true, size)
            .or_else(|| find_fish_on(grid, digit, &col_masks[d], false, size))
    })
}

/// `masks[line]` holds the cross positions of the digit on each base line.
fn find_fish_on(
    grid: &Grid,
    digit: u8,
    masks: &[u16; 9],
    rows_are_base: bool,
    size: usize,
) -> Option<SolvingStep> {
    // A base line may hold the digit anywhere from once up to `size` times.
    let candidates: Vec<usize> = (0..9)
        .filter(|&line| (1..=size).contains(&(masks[line].count_ones() as usize)))
        .collect();

    find_combination(&candidates, size, |base| {
        let union = base.iter().fold(0u16, |acc, &line| acc | masks[line]);
        if union.count_ones() as usize != size {
            return None;
        }
        FishPattern {
            digit,
            rows_are_base,
            base,
            cover: (0..9).filter(|&x| union & (1 << x) != 0).collect(),
        }
        .into_step(grid)
    })
}

fn fish_name(size: usize) -> String {
    match size {
        2 => "X-Wing".to_string(),
        3 => "Swordfish".to_string(),
        4 => "Jellyfish".to_string(),
        n => format!("Fish-{}", n),
    }
}
