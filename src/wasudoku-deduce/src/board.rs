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

use crate::error::ParseBoardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A plain 9x9 board holding only placed digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Row-major digits, `0` for an empty cell.
    #[serde(serialize_with = "cells_serde::serialize")]
    pub cells: [u8; 81],
}

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Board { cells: [0; 81] }
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parses an 81 character line. Digits `1`-`9` are givens, `.` and `0` are blanks.
/// Trailing whitespace (such as the newline of a puzzle file) is ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end();
        let length = s.chars().count();
        if length != 81 {
            return Err(ParseBoardError::InvalidLength { length });
        }

        let mut cells = [0; 81];
        for (index, (cell, character)) in cells.iter_mut().zip(s.chars()).enumerate() {
            *cell = match character {
                '1'..='9' => character as u8 - b'0',
                '.' | '0' => 0,
                _ => return Err(ParseBoardError::InvalidCharacter { index, character }),
            };
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in &self.cells {
            let c = if value == 0 { '.' } else { (b'0' + value) as char };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// serde only derives arrays up to 32 elements.
mod cells_serde {
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(cells: &[u8; 81], serializer: S) -> Result<S::Ok, S::Error> {
        cells.as_slice().serialize(serializer)
    }
}
