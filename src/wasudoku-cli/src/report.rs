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

//! Human-readable output of a batch run.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use wasudoku_deduce::grid::Grid;
use wasudoku_deduce::logical_solver::{TechniqueLevel, analyze_difficulty};
use wasudoku_deduce::types::{SolveOutcome, Status};

/// Lays the candidates of every cell out as a 9x9 table, boxes separated by `|`
/// and bands by a rule.
pub(crate) fn render_grid(grid: &Grid) -> String {
    let entries: Vec<String> = (0..81)
        .map(|i| grid.cell(i).digits().iter().map(u8::to_string).collect())
        .collect();
    let width = entries.iter().map(String::len).max().unwrap_or(1);

    let segment_width = 3 * width + 2;
    let rule = vec!["-".repeat(segment_width); 3].join("-+-");

    let mut lines = Vec::with_capacity(11);
    for row in 0..9 {
        if row == 3 || row == 6 {
            lines.push(rule.clone());
        }
        let segments: Vec<String> = (0..3)
            .map(|band| {
                (0..3)
                    .map(|c| format!("{:<width$}", entries[row * 9 + band * 3 + c]))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        lines.push(segments.join(" | "));
    }
    lines.join("\n")
}

fn status_char(status: Status) -> char {
    match status {
        Status::Solved => 'S',
        Status::Stuck => '.',
        Status::Contradiction => '!',
    }
}

/// Fails if a solved puzzle disagrees with its expected solution.
pub(crate) fn check_expected(
    index: usize,
    outcome: &SolveOutcome,
    expected: Option<&[String]>,
) -> Result<()> {
    let (Some(solution), Some(want)) = (
        outcome.solution(),
        expected.and_then(|lines| lines.get(index)),
    ) else {
        return Ok(());
    };
    if solution != *want {
        bail!(
            "incorrect solution in puzzle {}\n{}\n{}",
            index + 1,
            solution,
            want
        );
    }
    Ok(())
}

/// Totals over the whole batch.
#[derive(Debug, Default)]
pub(crate) struct Summary {
    solved: usize,
    total: usize,
    levels: BTreeMap<TechniqueLevel, usize>,
    strip: String,
}

impl Summary {
    pub fn record(&mut self, outcome: &SolveOutcome) {
        self.total += 1;
        if outcome.status == Status::Solved {
            self.solved += 1;
            let level = analyze_difficulty(&outcome.steps).max_level;
            *self.levels.entry(level).or_default() += 1;
        }
        self.strip.push(status_char(outcome.status));
        if self.total % 10 == 0 {
            self.strip.push('\n');
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solved {} out of {}", self.solved, self.total)?;
        for (level, count) in &self.levels {
            writeln!(f, "  {:?}: {}", level, count)?;
        }
        write!(f, "{}", self.strip)
    }
}
