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

//! Error types surfaced by the engine.

use thiserror::Error;

/// The puzzle text could not be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 81 cells but got {length}")]
    InvalidLength { length: usize },
    #[error("invalid character {character:?} at position {index}")]
    InvalidCharacter { index: usize, character: char },
}

/// A removal that would leave a cell without any candidate.
///
/// Raised when a digit is assigned to a cell that no longer holds it, or when a
/// cascade tries to strip the last candidate of an already solved peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no candidates left for r{}c{} after removing {digit}", .index / 9 + 1, .index % 9 + 1)]
pub struct Contradiction {
    pub index: usize,
    pub digit: u8,
}

impl Contradiction {
    pub(crate) fn new(index: usize, digit: u8) -> Self {
        Self { index, digit }
    }
}
