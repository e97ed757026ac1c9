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

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rayon::prelude::*;
use wasudoku_deduce::board::Board;
use wasudoku_deduce::logical_solver::{SolverOptions, solve_with_reporter, solve_with_steps};
use wasudoku_deduce::types::SolveOutcome;

use crate::options::Options;
use crate::report::Summary;

mod options;
mod report;
mod source;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();

    let puzzles = source::read_puzzles(source::open(&options.puzzles)?)?;
    info!("read {} puzzles from {}", puzzles.len(), options.puzzles.display());
    let expected = match &options.expected {
        Some(path) => Some(source::read_solutions(source::open(path)?)?),
        None => None,
    };
    let expected = expected.as_deref();
    let solver_options = options.solver_options();

    let mut summary = Summary::default();
    if options.verbose {
        for (index, board) in puzzles.iter().enumerate() {
            print_header(index, board);
            let outcome = solve_with_reporter(board, &solver_options, |step, grid| {
                println!("{}", step);
                println!("{}\n", report::render_grid(grid));
            });
            print_outcome(&outcome);
            report::check_expected(index, &outcome, expected)?;
            summary.record(&outcome);
        }
    } else {
        let outcomes = solve_batch(&puzzles, &solver_options, options.jobs)?;
        for (index, (board, outcome)) in puzzles.iter().zip(&outcomes).enumerate() {
            print_header(index, board);
            print_outcome(outcome);
            report::check_expected(index, outcome, expected)?;
            summary.record(outcome);
        }
    }

    println!("{}", summary);
    Ok(())
}

/// Solves every puzzle on the worker pool, keeping input order.
fn solve_batch(
    puzzles: &[Board],
    options: &SolverOptions,
    jobs: Option<usize>,
) -> Result<Vec<SolveOutcome>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("cannot start worker threads")?;
    Ok(pool.install(|| {
        puzzles
            .par_iter()
            .map(|board| solve_with_steps(board, options))
            .collect()
    }))
}

fn print_header(index: usize, board: &Board) {
    println!("### Puzzle {} ###", index + 1);
    println!("{}", board);
}

fn print_outcome(outcome: &SolveOutcome) {
    println!("{}", outcome.board);
    println!("{}", outcome.status);
}
