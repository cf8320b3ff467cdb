/*
highscores.rs

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

//! Manage high scores.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each grid size.
//! This object is saved when the game is over and the player makes it to the scoreboard.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Final score of the game.
    pub points: u64,

    /// Number of levels cleared during the game.
    pub levels_cleared: usize,

    /// Completion timestamp.
    pub when: DateTime<Utc>,
}

/// Sorted list of the top scores for a grid size.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct HighScoreBoard {
    /// Sorted list of the top scores, best first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl HighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score ranks after the older scores
    /// with the same points.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let position: usize = self.top.iter().take_while(|s| s.points >= score.points).count();
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(position, score);
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }
}

/// List of the scoreboards for the grid sizes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`HighScoreBoard`] scoreboards indexed by the grid size.
    ///
    /// The index is a string in the format "<size>x<size>".
    board: HashMap<String, HighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(grid_size: usize) -> String {
        format!("{grid_size}x{grid_size}")
    }

    /// Add a score to the scoreboard of the grid size and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        grid_size: usize,
        points: u64,
        levels_cleared: usize,
        when: DateTime<Utc>,
    ) -> Option<usize> {
        self.board
            .entry(Self::build_key(grid_size))
            .or_default()
            .add_score(Score {
                points,
                levels_cleared,
                when,
            })
    }

    /// Return the list of [`Score`] for the given grid size.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_scores(&self, grid_size: usize) -> Option<&Vec<Score>> {
        self.board.get(&Self::build_key(grid_size)).map(|b| &b.top)
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any grid size).
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_sorted() {
        let now = Utc::now();
        let mut hs = HighScores::new();
        assert!(hs.is_empty());
        assert_eq!(hs.add_score(12, 500, 1, now), Some(1));
        assert_eq!(hs.add_score(12, 900, 2, now), Some(1));
        assert_eq!(hs.add_score(12, 700, 1, now), Some(2));
        assert_eq!(hs.add_score(12, 700, 0, now), Some(3));
        let points: Vec<u64> = hs.get_scores(12).unwrap().iter().map(|s| s.points).collect();
        assert_eq!(points, vec![900, 700, 700, 500]);
        assert!(hs.get_scores(10).is_none());
    }

    #[test]
    fn board_is_limited() {
        let now = Utc::now();
        let mut hs = HighScores::new();
        for i in 0..BOARD_SIZE as u64 {
            assert!(hs.add_score(8, 100 + i, 0, now).is_some());
        }
        assert_eq!(hs.add_score(8, 50, 0, now), None);
        assert_eq!(hs.add_score(8, 1000, 3, now), Some(1));
        let scores = hs.get_scores(8).unwrap();
        assert_eq!(scores.len(), BOARD_SIZE);
        assert_eq!(scores.last().unwrap().points, 101);
    }
}
