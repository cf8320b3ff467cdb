/*
selection.rs

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

//! Convert the player's drag gesture into a path of cells.
//!
//! While the player drags the pointer, the interface calls [`Selection::update`] with the cell
//! under the pointer, and highlights the returned path.
//! When the player releases the pointer, [`Selection::finish`] returns a [`Gesture`] object,
//! which is the only thing that can be evaluated against the words of the level.
//!
//! Only straight lines are valid: horizontal, vertical, and diagonal.
//! A gesture in any other direction resolves to the starting cell alone.

use chrono::{DateTime, Utc};

use crate::generator::grid::Coordinate;
use crate::telemetry::InputModality;

/// Shape of a gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GestureKind {
    Horizontal,
    Vertical,
    Diagonal,
    Invalid,
}

/// Classify the gesture from `start` to `end`.
///
/// A gesture is diagonal when the difference between the horizontal and the vertical distances
/// is less than two cells. This forgives the pointer drifting by one cell during the drag.
pub fn classify(start: Coordinate, end: Coordinate) -> GestureKind {
    let dx: i32 = end.col - start.col;
    let dy: i32 = end.row - start.row;

    if dy == 0 {
        GestureKind::Horizontal
    } else if dx == 0 {
        GestureKind::Vertical
    } else if (dx.abs() - dy.abs()).abs() < 2 {
        GestureKind::Diagonal
    } else {
        GestureKind::Invalid
    }
}

/// Return the cells from `start` to `end`, both included, in the drag direction.
///
/// For a diagonal gesture, the path has `max(|dx|, |dy|) + 1` cells, so it can end one cell
/// away from `end` (and even outside the grid) when the gesture is not exactly diagonal.
/// Bounds are the caller's business.
pub fn resolve(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    let dx: i32 = end.col - start.col;
    let dy: i32 = end.row - start.row;

    let (steps, step_row, step_col) = match classify(start, end) {
        GestureKind::Horizontal => (dx.abs(), 0, dx.signum()),
        GestureKind::Vertical => (dy.abs(), dy.signum(), 0),
        GestureKind::Diagonal => (dx.abs().max(dy.abs()), dy.signum(), dx.signum()),
        GestureKind::Invalid => (0, 0, 0),
    };

    (0..=steps)
        .map(|i| Coordinate::new(start.row + step_row * i, start.col + step_col * i))
        .collect()
}

/// Drag released by the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// Final path.
    pub path: Vec<Coordinate>,

    /// Time when the player pressed the pointer.
    pub started_at: DateTime<Utc>,

    /// Time when the player released the pointer.
    pub ended_at: DateTime<Utc>,

    /// Device used for the drag.
    pub modality: InputModality,
}

impl Gesture {
    /// Return the duration of the drag in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.ended_at - self.started_at).num_milliseconds().max(0)
    }
}

/// Drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Cell where the drag started.
    start: Coordinate,

    /// Current path.
    path: Vec<Coordinate>,

    /// Device used for the drag.
    modality: InputModality,

    /// Time when the drag started.
    started_at: DateTime<Utc>,
}

impl Selection {
    /// Start a selection on the given cell.
    pub fn begin(start: Coordinate, modality: InputModality, at: DateTime<Utc>) -> Self {
        Self {
            start,
            path: vec![start],
            modality,
            started_at: at,
        }
    }

    /// Move the end of the selection to the given cell and return the new path.
    pub fn update(&mut self, current: Coordinate) -> &[Coordinate] {
        self.path = resolve(self.start, current);
        &self.path
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Release the selection.
    pub fn finish(self, at: DateTime<Utc>) -> Gesture {
        Gesture {
            path: self.path,
            started_at: self.started_at,
            ended_at: at,
            modality: self.modality,
        }
    }
}
