/*
grid.rs

Copyright 2026 Hervé Quatremain

This file is part of Sopaletras.

Sopaletras is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sopaletras is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sopaletras. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Letter grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color components, between 0 and 255.
pub type Color = (u8, u8, u8, u8);

/// Position of a cell in the grid.
///
/// Coordinates are signed because a path resolved from a drag gesture can step one cell outside
/// of the grid. [`Grid::get`] returns [`None`] for such coordinates.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    /// Letter displayed in the cell.
    letter: char,

    /// Whether the cell is part of a found word.
    found: bool,

    /// Color of the found word that covers the cell.
    /// When several found words cross on the cell, the last one wins.
    color: Option<Color>,
}

impl Cell {
    fn new(letter: char) -> Self {
        Self {
            letter,
            found: false,
            color: None,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

/// Square matrix of [`Cell`] objects.
///
/// The letters never change once the grid is built. Only the found status and the color of the
/// cells are updated, through [`Grid::mark_found`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(try_from = "GridData")]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Cell>,
}

/// Unchecked form of a [`Grid`], as read from JSON.
#[derive(Deserialize)]
struct GridData {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = String;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        if data.size.checked_mul(data.size) != Some(data.cells.len()) {
            return Err(format!(
                "a {0}x{0} grid needs {1} cells, got {2}",
                data.size,
                data.size.saturating_mul(data.size),
                data.cells.len()
            ));
        }
        Ok(Self {
            size: data.size,
            cells: data.cells,
        })
    }
}

impl Grid {
    /// Create a [`Grid`] object from its rows of letters.
    ///
    /// Returns [`None`] if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<char>]) -> Option<Self> {
        let size: usize = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flatten().map(|c| Cell::new(*c)).collect(),
        })
    }

    /// Create a [`Grid`] object from rows given as strings, such as `["ABC", "DEF", "GHI"]`.
    pub fn from_strs(rows: &[&str]) -> Option<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Self::from_rows(&rows)
    }

    /// Create a [`Grid`] object from `size * size` letters given row by row.
    pub(crate) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self {
            size,
            cells: letters.into_iter().map(Cell::new).collect(),
        }
    }

    /// Return the number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let size: i32 = self.size as i32;
        if coord.row < 0 || coord.col < 0 || coord.row >= size || coord.col >= size {
            None
        } else {
            Some(coord.row as usize * self.size + coord.col as usize)
        }
    }

    /// Whether the coordinate is inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// Return the cell at the given coordinate, or None when the coordinate is outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Return the letter at the given coordinate.
    pub fn letter(&self, coord: Coordinate) -> Option<char> {
        self.get(coord).map(|c| c.letter)
    }

    /// Return the letters along the path, or None if the path leaves the grid.
    pub fn letters(&self, path: &[Coordinate]) -> Option<Vec<char>> {
        path.iter().map(|c| self.letter(*c)).collect()
    }

    /// Set the found status and the color of a cell.
    pub(crate) fn mark_found(&mut self, coord: Coordinate, color: Color) {
        if let Some(i) = self.index(coord) {
            self.cells[i].found = true;
            self.cells[i].color = Some(color);
        }
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| {
                    if c.found {
                        c.letter.to_lowercase().to_string()
                    } else {
                        c.letter.to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
