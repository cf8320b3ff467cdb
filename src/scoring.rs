/*
scoring.rs

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

//! Match a released gesture against the remaining words and compute the score.
//!
//! The letters under the path are read in path order, and also backward, so a word can be
//! selected from either end.
//! The remaining words are tried in placement order (longest first) and the first one that
//! matches wins.
//!
//! A found word is worth `letters * 10 * seconds_remaining` points.
//! In the last [`config::BONUS_WINDOW_SECONDS`] seconds, the points are multiplied by
//! [`config::BONUS_MULTIPLIER`].

use log::debug;

use crate::config;
use crate::generator::grid::{Color, Coordinate};
use crate::generator::level::Level;
use crate::selection::Gesture;
use crate::telemetry::TelemetryRecord;

/// Word found by a gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundWord {
    /// Position of the word in the level's word list.
    pub index: usize,

    /// The word.
    pub word: String,

    /// Points awarded.
    pub points: u64,

    /// Whether the word was found in the bonus window.
    pub bonus: bool,

    /// Color given to the word.
    pub color: Color,

    /// Record for the host.
    pub telemetry: TelemetryRecord,
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// The gesture does not spell any remaining word. Nothing changed.
    NoMatch,

    /// The gesture spells a remaining word, which is now marked as found.
    Found(FoundWord),
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    /// Return the points awarded, or 0.
    pub fn points(&self) -> u64 {
        match self {
            MatchResult::Found(f) => f.points,
            MatchResult::NoMatch => 0,
        }
    }
}

/// Return the color for the word at the given position in the level's word list.
pub fn palette_color(index: usize) -> Color {
    config::PALETTE[index % config::PALETTE.len()]
}

/// Return the points for a word of `len` letters found with `seconds_remaining` seconds left,
/// and whether the bonus multiplier was applied.
pub fn word_points(len: usize, seconds_remaining: u32) -> (u64, bool) {
    let points: u64 = len as u64 * config::POINTS_PER_LETTER * u64::from(seconds_remaining);
    if seconds_remaining <= config::BONUS_WINDOW_SECONDS {
        (points * config::BONUS_MULTIPLIER, true)
    } else {
        (points, false)
    }
}

/// Return the bonus awarded when the last word of a level is found.
pub fn level_clear_bonus(seconds_remaining: u32) -> u64 {
    u64::from(seconds_remaining) * config::LEVEL_CLEAR_MULTIPLIER
}

/// Return the position of the first remaining word spelled by the path, forward or backward.
///
/// Return None for an empty path or a path that leaves the grid.
pub fn find_match(path: &[Coordinate], level: &Level) -> Option<usize> {
    if path.is_empty() {
        return None;
    }
    let forward: Vec<char> = level.grid().letters(path)?;
    let reverse: Vec<char> = forward.iter().rev().copied().collect();

    level
        .unfound()
        .find(|(_, w)| w.letters() == forward.as_slice() || w.letters() == reverse.as_slice())
        .map(|(i, _)| i)
}

/// Evaluate a released gesture.
///
/// On a match, the word and the cells it covers are marked as found and colored, and the
/// points and the telemetry record are returned. Otherwise the level is left untouched.
pub fn evaluate(gesture: &Gesture, level: &mut Level, seconds_remaining: u32) -> MatchResult {
    let index: usize = match find_match(&gesture.path, level) {
        Some(i) => i,
        None => return MatchResult::NoMatch,
    };

    let color: Color = palette_color(index);
    let (grid, words) = level.parts_mut();
    let placement = &mut words[index];
    placement.mark_found(color);
    for c in placement.coordinates() {
        grid.mark_found(*c, color);
    }

    let word: String = placement.word();
    let (points, bonus) = word_points(placement.len(), seconds_remaining);
    debug!("Found {word} with {seconds_remaining}s left: {points} points (bonus = {bonus})");

    MatchResult::Found(FoundWord {
        index,
        word: word.clone(),
        points,
        bonus,
        color,
        telemetry: TelemetryRecord {
            word,
            points,
            timestamp: gesture.ended_at,
            drag_duration_ms: gesture.duration_ms(),
            drag_started_at: gesture.started_at,
            modality: gesture.modality,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_outside_bonus_window() {
        assert_eq!(word_points(5, 30), (1500, false));
        assert_eq!(word_points(3, 6), (180, false));
    }

    #[test]
    fn points_in_bonus_window() {
        assert_eq!(word_points(5, 4), (2000, true));
        assert_eq!(word_points(5, 5), (2500, true));
        assert_eq!(word_points(4, 0), (0, true));
    }

    #[test]
    fn clear_bonus() {
        assert_eq!(level_clear_bonus(42), 420);
        assert_eq!(level_clear_bonus(0), 0);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), config::PALETTE[0]);
        assert_eq!(palette_color(config::PALETTE.len() + 2), config::PALETTE[2]);
    }
}
