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

//! Static lookup tables for rows, columns, boxes and peers.

use serde::Serialize;
use std::fmt;

// Pre-calculate and cache indices for all rows, columns, boxes, and peer cells.
lazy_static::lazy_static! {
    pub(crate) static ref ROW_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, row) in units.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = i * 9 + j;
            }
        }
        units
    };
    pub(crate) static ref COL_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, col) in units.iter_mut().enumerate() {
            for (j, cell) in col.iter_mut().enumerate() {
                *cell = j * 9 + i;
            }
        }
        units
    };
    pub(crate) static ref BOX_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, unit) in units.iter_mut().enumerate() {
            let start_row = (i / 3) * 3;
            let start_col = (i % 3) * 3;
            for (j, cell) in unit.iter_mut().enumerate() {
                *cell = (start_row + j / 3) * 9 + (start_col + j % 3);
            }
        }
        units
    };
    /// All 27 houses: rows first, then columns, then boxes.
    pub(crate) static ref ALL_HOUSES: Vec<House> = {
        let mut houses = Vec::with_capacity(27);
        for kind in [HouseKind::Row, HouseKind::Column, HouseKind::Box] {
            houses.extend((0..9).map(|index| House { kind, index }));
        }
        houses
    };
    /// A map from a cell index to its 20 peers, in ascending index order.
    pub(crate) static ref PEER_MAP: [Vec<usize>; 81] = {
        let mut map = [(); 81].map(|_| Vec::with_capacity(20));
        for (i, peers) in map.iter_mut().enumerate() {
            peers.extend_from_slice(&ROW_UNITS[row_of(i)]);
            peers.extend_from_slice(&COL_UNITS[col_of(i)]);
            peers.extend_from_slice(&BOX_UNITS[box_of(i)]);
            peers.sort_unstable();
            peers.dedup();
            peers.retain(|&peer| peer != i);
        }
        map
    };
}

#[inline]
pub fn row_of(index: usize) -> usize {
    index / 9
}

#[inline]
pub fn col_of(index: usize) -> usize {
    index % 9
}

#[inline]
pub fn box_of(index: usize) -> usize {
    (row_of(index) / 3) * 3 + col_of(index) / 3
}

/// Formats a cell index as `r{row}c{col}`, both 1-based.
pub(crate) fn cell_name(index: usize) -> String {
    format!("r{}c{}", row_of(index) + 1, col_of(index) + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseKind {
    Row,
    Column,
    Box,
}

/// One of the 27 groups of nine cells that must hold each digit once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct House {
    pub kind: HouseKind,
    pub index: usize,
}

impl House {
    pub fn row(index: usize) -> Self {
        House { kind: HouseKind::Row, index }
    }

    pub fn column(index: usize) -> Self {
        House { kind: HouseKind::Column, index }
    }

    pub fn boxed(index: usize) -> Self {
        House { kind: HouseKind::Box, index }
    }

    /// The nine member cell indices, in row-major order within the house.
    pub fn cells(&self) -> &'static [usize; 9] {
        match self.kind {
            HouseKind::Row => &ROW_UNITS[self.index],
            HouseKind::Column => &COL_UNITS[self.index],
            HouseKind::Box => &BOX_UNITS[self.index],
        }
    }

    /// Whether the house contains the given cell.
    pub fn contains(&self, cell: usize) -> bool {
        match self.kind {
            HouseKind::Row => row_of(cell) == self.index,
            HouseKind::Column => col_of(cell) == self.index,
            HouseKind::Box => box_of(cell) == self.index,
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            HouseKind::Row => "row",
            HouseKind::Column => "col",
            HouseKind::Box => "box",
        };
        write!(f, "{} {}", name, self.index + 1)
    }
}
