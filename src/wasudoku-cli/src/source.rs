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

//! Puzzle and expected-solution files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use wasudoku_deduce::board::Board;

const LINE_LENGTH: usize = 81;

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Collects lines until end of input or the first line too short to hold a grid.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.chars().count() < LINE_LENGTH {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

pub(crate) fn read_puzzles<R: BufRead>(reader: R) -> Result<Vec<Board>> {
    read_lines(reader)?
        .iter()
        .enumerate()
        .map(|(index, line)| {
            line.parse::<Board>()
                .with_context(|| format!("puzzle {} is malformed", index + 1))
        })
        .collect()
}

/// Expected solutions are compared as text, line by line.
pub(crate) fn read_solutions<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(read_lines(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PUZZLE: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn short_line_ends_the_input() {
        let text = format!("{PUZZLE}\n{PUZZLE}\n\n{PUZZLE}\n");
        let puzzles = read_puzzles(Cursor::new(text)).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].to_string(), PUZZLE);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let text = format!("{PUZZLE}\r\n{PUZZLE}");
        assert_eq!(read_puzzles(Cursor::new(text)).unwrap().len(), 2);
    }

    #[test]
    fn malformed_puzzle_names_its_line() {
        let bad = PUZZLE.replace('5', "x");
        let text = format!("{PUZZLE}\n{bad}\n");
        let err = read_puzzles(Cursor::new(text)).unwrap_err();
        assert_eq!(err.to_string(), "puzzle 2 is malformed");
    }

    #[test]
    fn solutions_are_kept_verbatim() {
        let solution =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        let solutions = read_solutions(Cursor::new(format!("{solution}\n"))).unwrap();
        assert_eq!(solutions, vec![solution.to_string()]);
    }
}
