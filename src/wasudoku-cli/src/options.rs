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

use std::path::PathBuf;

use clap::Parser;
use wasudoku_deduce::logical_solver::{DEFAULT_MAX_FISH_SIZE, SolverOptions};

/// Solves a file of Sudoku puzzles by pure deduction, without guessing.
#[derive(Debug, Parser)]
#[command(name = "wasudoku", version, about)]
pub(crate) struct Options {
    /// File with one 81 character puzzle per line.
    #[arg(value_name = "PUZZLES")]
    pub puzzles: PathBuf,

    /// File with the expected solution of each puzzle, in the same order.
    #[arg(long, value_name = "PATH")]
    pub expected: Option<PathBuf>,

    /// Largest fish to try: 2 is X-Wing, 3 Swordfish, 4 Jellyfish. Below 2 disables fish.
    #[arg(long = "max-fish", value_name = "N", default_value_t = DEFAULT_MAX_FISH_SIZE)]
    pub max_fish: usize,

    /// Number of worker threads. Defaults to one per core.
    #[arg(long, short, value_name = "N")]
    pub jobs: Option<usize>,

    /// Print every step and the candidate grid after it. Solves one puzzle at a time.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Options {
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            max_fish_size: self.max_fish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["wasudoku", "top95.txt"]).unwrap();
        assert_eq!(options.puzzles, PathBuf::from("top95.txt"));
        assert_eq!(options.expected, None);
        assert_eq!(options.solver_options(), SolverOptions::default());
        assert_eq!(options.jobs, None);
        assert!(!options.verbose);
    }

    #[test]
    fn all_flags() {
        let options = Options::try_parse_from([
            "wasudoku",
            "--expected",
            "top95expected.txt",
            "--max-fish",
            "2",
            "-j",
            "3",
            "-v",
            "top95.txt",
        ])
        .unwrap();
        assert_eq!(options.expected, Some(PathBuf::from("top95expected.txt")));
        assert_eq!(options.solver_options().max_fish_size, 2);
        assert_eq!(options.jobs, Some(3));
        assert!(options.verbose);
    }

    #[test]
    fn puzzle_file_is_required() {
        assert!(Options::try_parse_from(["wasudoku"]).is_err());
    }
}
