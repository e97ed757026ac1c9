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

//! The single choke point through which candidates are removed.
//!
//! Removals are processed through a worklist: when a cell collapses to one
//! candidate its digit is queued for removal from every peer, and the queue is
//! drained before control returns to the caller.

use super::{Grid, PEER_MAP, cell_name, digit_bit};
use crate::error::Contradiction;
use log::trace;
use std::collections::VecDeque;

/// Pending `(cell, digit)` removals.
type Worklist = VecDeque<(usize, u8)>;

impl Grid {
    /// Assigns `digit` to a cell and removes it from every peer.
    ///
    /// Returns `Ok(false)` if the cell already held exactly that digit. Assigning a
    /// digit the cell no longer has is a contradiction.
    pub fn solve_cell(&mut self, index: usize, digit: u8) -> Result<bool, Contradiction> {
        let mask = self.candidates[index];
        let bit = digit_bit(digit);
        if mask & bit == 0 {
            return Err(Contradiction::new(index, digit));
        }
        if mask == bit {
            return Ok(false);
        }

        let mut pending = Worklist::new();
        self.assign(index, digit, &mut pending);
        self.propagate(&mut pending)?;
        Ok(true)
    }

    /// Removes `digit` from an open cell, cascading if the cell collapses.
    ///
    /// Solved cells are never touched: their digit is protected and the call is a
    /// no-op returning `Ok(false)`, as is removing a digit the cell does not hold
    /// (anything outside 1-9 included).
    pub fn eliminate(&mut self, index: usize, digit: u8) -> Result<bool, Contradiction> {
        let mask = self.candidates[index];
        if mask.count_ones() <= 1 || mask & digit_bit(digit) == 0 {
            return Ok(false);
        }

        let mut pending = Worklist::from([(index, digit)]);
        self.propagate(&mut pending)?;
        Ok(true)
    }

    /// Removes every digit of `mask` from a cell. Returns true if any removal happened.
    pub fn eliminate_many(&mut self, index: usize, mask: u16) -> Result<bool, Contradiction> {
        let mut changed = false;
        for digit in 1..=9 {
            if mask & digit_bit(digit) != 0 && self.eliminate(index, digit)? {
                changed = true;
            }
        }
        Ok(changed)
    }

    fn assign(&mut self, index: usize, digit: u8, pending: &mut Worklist) {
        let bit = digit_bit(digit);
        self.eliminations += (self.candidates[index] & !bit).count_ones() as usize;
        self.candidates[index] = bit;
        pending.extend(PEER_MAP[index].iter().map(|&peer| (peer, digit)));
    }

    fn propagate(&mut self, pending: &mut Worklist) -> Result<(), Contradiction> {
        while let Some((index, digit)) = pending.pop_front() {
            let bit = digit_bit(digit);
            let mask = self.candidates[index];
            if mask & bit == 0 {
                continue;
            }
            // A solved peer holding the same digit would be left empty.
            if mask == bit {
                return Err(Contradiction::new(index, digit));
            }

            let remaining = mask & !bit;
            self.candidates[index] = remaining;
            self.eliminations += 1;

            if remaining.count_ones() == 1 {
                let value = (remaining.trailing_zeros() + 1) as u8;
                trace!("{} collapses to {}", cell_name(index), value);
                self.assign(index, value, pending);
            }
        }
        Ok(())
    }
}
