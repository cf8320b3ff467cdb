/*
placement.rs

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

//! Words placed in the grid.

use serde::Serialize;
use strum_macros::FromRepr;

use super::grid::{Color, Coordinate};

/// Directions in which a word can be written in the grid.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: u8 = 4;

    /// Return the (row, column) step for the direction.
    pub fn step(&self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Return the coordinates of a run of `len` cells starting at `start`.
    pub fn walk(&self, start: Coordinate, len: usize) -> Vec<Coordinate> {
        let (dr, dc) = self.step();
        (0..len as i32)
            .map(|i| Coordinate::new(start.row + dr * i, start.col + dc * i))
            .collect()
    }
}

/// Word committed to the grid.
///
/// The coordinates are never rewritten once the placement is created: reading the grid letters
/// at [`WordPlacement::coordinates`] always gives back [`WordPlacement::word`].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WordPlacement {
    /// The word, one `char` per letter.
    word: Vec<char>,

    /// One coordinate per letter, in the order of the letters.
    coordinates: Vec<Coordinate>,

    /// Direction used to place the word.
    direction: Direction,

    /// Whether the player found the word.
    found: bool,

    /// Color assigned when the word is found.
    color: Option<Color>,
}

impl WordPlacement {
    /// Create a [`WordPlacement`] object.
    pub fn new(word: Vec<char>, coordinates: Vec<Coordinate>, direction: Direction) -> Self {
        Self {
            word,
            coordinates,
            direction,
            found: false,
            color: None,
        }
    }

    /// Return the word as a [`String`].
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    /// Return the letters of the word.
    pub fn letters(&self) -> &[char] {
        &self.word
    }

    /// Return the number of letters.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Mark the word as found and give it its color.
    pub(crate) fn mark_found(&mut self, color: Color) {
        self.found = true;
        self.color = Some(color);
    }
}
