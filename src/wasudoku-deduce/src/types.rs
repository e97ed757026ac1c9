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

use crate::board::Board;
use crate::grid::{House, cell_name};
use serde::Serialize;
use std::fmt;

/// A digit placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub value: u8,
}

/// A candidate removed from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Elimination {
    pub index: usize,
    pub value: u8,
}

/// A cell that takes part in the pattern justifying a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseCell {
    pub index: usize,
    pub candidates: Vec<u8>,
}

/// One successful application of a technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolvingStep {
    pub technique: String,
    /// The digits the pattern is about.
    pub digits: Vec<u8>,
    /// The houses the pattern lives in (for fish: base lines, then cover lines).
    pub houses: Vec<House>,
    pub placements: Vec<Placement>,
    pub eliminations: Vec<Elimination>,
    pub cause: Vec<CauseCell>,
}

impl fmt::Display for SolvingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.technique)?;
        if !self.digits.is_empty() {
            let digits: Vec<String> = self.digits.iter().map(u8::to_string).collect();
            write!(f, " {}", digits.join(""))?;
        }
        if !self.houses.is_empty() {
            let houses: Vec<String> = self.houses.iter().map(House::to_string).collect();
            write!(f, " in {}", houses.join(", "))?;
        }
        for placement in &self.placements {
            write!(f, " => {}={}", cell_name(placement.index), placement.value)?;
        }
        if !self.eliminations.is_empty() {
            let removed: Vec<String> = self
                .eliminations
                .iter()
                .map(|e| format!("{}#{}", cell_name(e.index), e.value))
                .collect();
            write!(f, ", removes {}", removed.join(" "))?;
        }
        Ok(())
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Every cell holds exactly one digit.
    Solved,
    /// No technique can change anything, but open cells remain.
    Stuck,
    /// A removal would have emptied a cell; the input has no solution.
    Contradiction,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Solved => "solved",
            Status::Stuck => "stuck",
            Status::Contradiction => "contradiction",
        };
        f.write_str(s)
    }
}

/// The result of driving a puzzle to its terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    pub status: Status,
    /// The digits placed when the run stopped.
    pub board: Board,
    pub steps: Vec<SolvingStep>,
}

impl SolveOutcome {
    /// The 81 digit solution, if the run ended solved.
    pub fn solution(&self) -> Option<String> {
        (self.status == Status::Solved).then(|| self.board.to_string())
    }
}
