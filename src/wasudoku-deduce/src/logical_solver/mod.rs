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

//! The dispatcher: runs the deduction techniques in a fixed order until the
//! grid is solved, stuck, or contradictory.

pub mod basic;
pub mod fish;
pub mod intersection;
pub mod subsets;

use crate::board::Board;
use crate::error::Contradiction;
use crate::grid::Grid;
use crate::types::{SolveOutcome, SolvingStep, Status};
use log::{debug, info, warn};

/// The largest fish tried by default (Jellyfish).
pub const DEFAULT_MAX_FISH_SIZE: usize = 4;

/// Tunables for a solving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Largest fish pattern tried, Fish(2) up to and including this size.
    /// Anything below 2 disables fish entirely.
    pub max_fish_size: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            max_fish_size: DEFAULT_MAX_FISH_SIZE,
        }
    }
}

/// A deduction technique known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    Singles,
    NakedSubset,
    PointingPair,
    BoxLineReduction,
    Fish(usize),
}

impl Technique {
    /// The techniques in the order the dispatcher tries them.
    pub fn ordered(options: &SolverOptions) -> Vec<Technique> {
        let mut techniques = vec![
            Technique::Singles,
            Technique::NakedSubset,
            Technique::PointingPair,
            Technique::BoxLineReduction,
        ];
        techniques.extend((2..=options.max_fish_size).map(Technique::Fish));
        techniques
    }

    /// Applies the technique once. Returns true if the grid changed.
    fn apply(self, grid: &mut Grid, steps: &mut Vec<SolvingStep>) -> Result<bool, Contradiction> {
        match self {
            Technique::Singles => basic::apply_singles(grid, steps),
            Technique::NakedSubset => try_apply_step(grid, steps, subsets::find_naked_subset),
            Technique::PointingPair => {
                try_apply_step(grid, steps, intersection::find_pointing_pair)
            }
            Technique::BoxLineReduction => {
                try_apply_step(grid, steps, intersection::find_box_line_reduction)
            }
            Technique::Fish(size) => try_apply_step(grid, steps, |g| fish::find_fish(g, size)),
        }
    }
}

/// How demanding a technique is, used to grade puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum TechniqueLevel {
    None,         // No technique needed
    Basic,        // Singles
    Intermediate, // Naked subsets, Pointing Pairs/Triples, Box-Line Reduction
    Advanced,     // X-Wing, Swordfish
    Master,       // Jellyfish and larger fish
}

impl TechniqueLevel {
    pub fn of(technique: &str) -> Self {
        match technique {
            "HiddenSingle" => TechniqueLevel::Basic,
            "PointingPair" | "PointingTriple" | "BoxLineReduction" => TechniqueLevel::Intermediate,
            t if t.starts_with("Naked") => TechniqueLevel::Intermediate,
            "X-Wing" | "Swordfish" => TechniqueLevel::Advanced,
            "Jellyfish" => TechniqueLevel::Master,
            t if t.starts_with("Fish-") => TechniqueLevel::Master,
            _ => TechniqueLevel::None,
        }
    }
}

/// Summary of the techniques one run needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyStats {
    pub max_level: TechniqueLevel,
    pub intermediate_count: usize,
    pub advanced_count: usize,
    pub master_count: usize,
}

/// Drives one grid through the techniques until it is solved or stuck.
pub struct LogicalSolver {
    grid: Grid,
    techniques: Vec<Technique>,
    steps: Vec<SolvingStep>,
}

impl LogicalSolver {
    /// Builds the grid from the board's givens.
    pub fn new(board: &Board, options: &SolverOptions) -> Result<Self, Contradiction> {
        Ok(LogicalSolver {
            grid: Grid::from_board(board)?,
            techniques: Technique::ordered(options),
            steps: Vec::new(),
        })
    }

    /// Continues from a grid that is already partly worked.
    pub fn from_grid(grid: Grid, options: &SolverOptions) -> Self {
        LogicalSolver {
            grid,
            techniques: Technique::ordered(options),
            steps: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn steps(&self) -> &[SolvingStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<SolvingStep> {
        self.steps
    }

    /// One dispatch: tries each technique in order and stops at the first that
    /// changes the grid. Returns false at a fixpoint.
    pub fn step(&mut self) -> Result<bool, Contradiction> {
        for &technique in &self.techniques {
            if technique.apply(&mut self.grid, &mut self.steps)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Dispatches until the grid is solved, stuck, or contradictory.
    pub fn run(&mut self) -> Status {
        self.run_with_reporter(|_, _| {})
    }

    /// Like [`run`](Self::run), handing every new step to `reporter` together with
    /// the grid as it stands after the dispatch that produced it.
    pub fn run_with_reporter<F>(&mut self, mut reporter: F) -> Status
    where
        F: FnMut(&SolvingStep, &Grid),
    {
        let status = loop {
            if self.grid.is_solved() {
                break Status::Solved;
            }
            let reported = self.steps.len();
            let result = self.step();
            for step in &self.steps[reported..] {
                reporter(step, &self.grid);
            }
            match result {
                Ok(true) => {}
                Ok(false) => break Status::Stuck,
                Err(contradiction) => {
                    warn!("aborting: {}", contradiction);
                    break Status::Contradiction;
                }
            }
        };
        info!("finished after {} steps: {}", self.steps.len(), status);
        status
    }
}

/// Solves a board with the default reporter, returning status, final board and steps.
pub fn solve_with_steps(initial_board: &Board, options: &SolverOptions) -> SolveOutcome {
    solve_with_reporter(initial_board, options, |_, _| {})
}

/// Like [`solve_with_steps`], reporting progress as it goes.
pub fn solve_with_reporter<F>(
    initial_board: &Board,
    options: &SolverOptions,
    reporter: F,
) -> SolveOutcome
where
    F: FnMut(&SolvingStep, &Grid),
{
    let mut solver = match LogicalSolver::new(initial_board, options) {
        Ok(solver) => solver,
        Err(contradiction) => {
            warn!("givens are inconsistent: {}", contradiction);
            return SolveOutcome {
                status: Status::Contradiction,
                board: *initial_board,
                steps: Vec::new(),
            };
        }
    };
    let status = solver.run_with_reporter(reporter);
    SolveOutcome {
        status,
        board: solver.grid().to_board(),
        steps: solver.into_steps(),
    }
}

/// Runs a finder and applies the step it returns, recording it only if the grid changed.
fn try_apply_step<F>(
    grid: &mut Grid,
    steps: &mut Vec<SolvingStep>,
    finder: F,
) -> Result<bool, Contradiction>
where
    F: Fn(&Grid) -> Option<SolvingStep>,
{
    let Some(step) = finder(grid) else {
        return Ok(false);
    };

    let mut changed = false;
    for placement in &step.placements {
        changed |= grid.solve_cell(placement.index, placement.value)?;
    }
    for elim in &step.eliminations {
        // An earlier removal of this step may have forced the target to this very digit.
        if grid.cell(elim.index).value() == Some(elim.value) {
            return Err(Contradiction::new(elim.index, elim.value));
        }
        changed |= grid.eliminate(elim.index, elim.value)?;
    }
    if changed {
        debug!("{}", step);
        steps.push(step);
    }
    Ok(changed)
}

/// Searches `size`-combinations of `items` in lexicographic order, returning the
/// first result `check` produces.
pub(crate) fn find_combination<T, R, F>(items: &[T], size: usize, mut check: F) -> Option<R>
where
    T: Copy,
    F: FnMut(&[T]) -> Option<R>,
{
    if size == 0 || size > items.len() {
        return None;
    }
    let mut combo = Vec::with_capacity(size);
    extend_combination(items, size, 0, &mut combo, &mut check)
}

fn extend_combination<T, R, F>(
    items: &[T],
    size: usize,
    start: usize,
    combo: &mut Vec<T>,
    check: &mut F,
) -> Option<R>
where
    T: Copy,
    F: FnMut(&[T]) -> Option<R>,
{
    if combo.len() == size {
        return check(combo);
    }

    // Leave room for the remaining picks.
    let last = items.len() - (size - combo.len());
    for i in start..=last {
        combo.push(items[i]);
        if let Some(found) = extend_combination(items, size, i + 1, combo, check) {
            return Some(found);
        }
        combo.pop();
    }
    None
}

/// Tallies the levels of the techniques a run used.
pub fn analyze_difficulty(steps: &[SolvingStep]) -> DifficultyStats {
    let empty = DifficultyStats {
        max_level: TechniqueLevel::None,
        intermediate_count: 0,
        advanced_count: 0,
        master_count: 0,
    };
    steps.iter().fold(empty, |mut stats, step| {
        let level = TechniqueLevel::of(&step.technique);
        stats.max_level = stats.max_level.max(level);
        match level {
            TechniqueLevel::Intermediate => stats.intermediate_count += 1,
            TechniqueLevel::Advanced => stats.advanced_count += 1,
            TechniqueLevel::Master => stats.master_count += 1,
            TechniqueLevel::None | TechniqueLevel::Basic => {}
        }
        stats
    })
}

/// Solves the board and returns the hardest level it needed with the final board.
pub fn get_difficulty(board: &Board, options: &SolverOptions) -> (TechniqueLevel, Board) {
    let outcome = solve_with_steps(board, options);
    let stats = analyze_difficulty(&outcome.steps);
    (stats.max_level, outcome.board)
}
