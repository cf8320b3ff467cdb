/*
scoring_tests.rs

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

//! Matching and scoring tests on hand-made levels.

use chrono::{Duration, TimeZone, Utc};

use sopaletras::config;
use sopaletras::scoring::{self, palette_color};
use sopaletras::{
    Coordinate, Direction, Gesture, Grid, InputModality, Level, MatchResult, WordPlacement,
    evaluate, resolve,
};

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn placement(word: &str, start: Coordinate, direction: Direction) -> WordPlacement {
    let letters: Vec<char> = word.chars().collect();
    let coords = direction.walk(start, letters.len());
    WordPlacement::new(letters, coords, direction)
}

/// P E R R O
/// A X X X X
/// S O L X X
/// A X X X X
/// X X X X X
fn level() -> Level {
    let grid = Grid::from_strs(&["PERRO", "AXXXX", "SOLXX", "AXXXX", "XXXXX"]).unwrap();
    Level::new(
        grid,
        vec![
            placement("PERRO", c(0, 0), Direction::Horizontal),
            placement("PASA", c(0, 0), Direction::Vertical),
            placement("SOL", c(2, 0), Direction::Horizontal),
        ],
    )
    .unwrap()
}

fn gesture(start: Coordinate, end: Coordinate) -> Gesture {
    let t = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
    Gesture {
        path: resolve(start, end),
        started_at: t,
        ended_at: t + Duration::milliseconds(640),
        modality: InputModality::Pointer,
    }
}

#[test]
fn test_forward_match_scores() {
    let mut level = level();
    match evaluate(&gesture(c(0, 0), c(0, 4)), &mut level, 30) {
        MatchResult::Found(f) => {
            assert_eq!(f.index, 0);
            assert_eq!(f.word, "PERRO");
            assert_eq!(f.points, 1500);
            assert!(!f.bonus);
            assert_eq!(f.color, palette_color(0));
            assert_eq!(f.telemetry.word, "PERRO");
            assert_eq!(f.telemetry.points, 1500);
            assert_eq!(f.telemetry.drag_duration_ms, 640);
            assert_eq!(f.telemetry.modality, InputModality::Pointer);
        }
        MatchResult::NoMatch => panic!("PERRO not found"),
    }
    assert!(level.words()[0].is_found());
    for col in 0..5 {
        let cell = level.grid().get(c(0, col)).unwrap();
        assert!(cell.is_found());
        assert_eq!(cell.color(), Some(palette_color(0)));
    }
    assert!(!level.grid().get(c(1, 0)).unwrap().is_found());
}

#[test]
fn test_reversed_match_scores_the_same() {
    let mut forward = level();
    let mut backward = level();
    let a = evaluate(&gesture(c(0, 0), c(0, 4)), &mut forward, 30);
    let b = evaluate(&gesture(c(0, 4), c(0, 0)), &mut backward, 30);
    assert!(b.is_found());
    assert_eq!(a.points(), b.points());
    assert_eq!(forward.words(), backward.words());
}

#[test]
fn test_bonus_window() {
    let mut level = level();
    match evaluate(&gesture(c(0, 0), c(0, 4)), &mut level, 4) {
        MatchResult::Found(f) => {
            assert_eq!(f.points, 2000);
            assert!(f.bonus);
        }
        MatchResult::NoMatch => panic!("PERRO not found"),
    }
}

#[test]
fn test_no_match_changes_nothing() {
    let mut level = level();
    let before = level.clone();
    assert_eq!(
        evaluate(&gesture(c(1, 1), c(1, 3)), &mut level, 30),
        MatchResult::NoMatch
    );
    // Only part of a word
    assert_eq!(
        evaluate(&gesture(c(0, 0), c(0, 3)), &mut level, 30),
        MatchResult::NoMatch
    );
    assert_eq!(level, before);
}

#[test]
fn test_empty_and_outside_paths() {
    let mut level = level();
    let before = level.clone();
    let mut g = gesture(c(0, 0), c(0, 4));
    g.path.clear();
    assert_eq!(evaluate(&g, &mut level, 30), MatchResult::NoMatch);
    g.path = vec![c(2, -1), c(2, 0), c(2, 1)];
    assert_eq!(evaluate(&g, &mut level, 30), MatchResult::NoMatch);
    assert_eq!(level, before);
}

#[test]
fn test_found_word_cannot_be_found_again() {
    let mut level = level();
    assert!(evaluate(&gesture(c(2, 0), c(2, 2)), &mut level, 30).is_found());
    assert_eq!(
        evaluate(&gesture(c(2, 2), c(2, 0)), &mut level, 30),
        MatchResult::NoMatch
    );
    assert_eq!(level.found_count(), 1);
}

#[test]
fn test_color_follows_word_position() {
    let mut level = level();
    match evaluate(&gesture(c(3, 0), c(0, 0)), &mut level, 20) {
        MatchResult::Found(f) => {
            assert_eq!(f.word, "PASA");
            assert_eq!(f.index, 1);
            assert_eq!(f.color, palette_color(1));
            assert_eq!(f.points, 4 * 10 * 20);
        }
        MatchResult::NoMatch => panic!("PASA not found"),
    }
    assert_eq!(level.words()[1].color(), Some(palette_color(1)));
    assert_eq!(
        level.grid().get(c(2, 0)).unwrap().color(),
        Some(palette_color(1))
    );
}

#[test]
fn test_level_cleared_after_last_word() {
    let mut level = level();
    assert!(evaluate(&gesture(c(0, 0), c(0, 4)), &mut level, 30).is_found());
    assert!(evaluate(&gesture(c(0, 0), c(3, 0)), &mut level, 30).is_found());
    assert!(!level.is_cleared());
    assert!(evaluate(&gesture(c(2, 0), c(2, 2)), &mut level, 30).is_found());
    assert!(level.is_cleared());
    assert_eq!(scoring::level_clear_bonus(30), 300);
}

#[test]
fn test_first_word_in_list_wins() {
    // ROMA across the first row, AMOR down the last column
    let grid = Grid::from_strs(&["ROMA", "XXXM", "XXXO", "XXXR"]).unwrap();
    let roma = placement("ROMA", c(0, 0), Direction::Horizontal);
    let amor = placement("AMOR", c(0, 3), Direction::Vertical);

    // Dragging right to left spells AMOR, and ROMA backward: ROMA comes first in the list
    let mut level = Level::new(grid.clone(), vec![roma.clone(), amor.clone()]).unwrap();
    match evaluate(&gesture(c(0, 3), c(0, 0)), &mut level, 30) {
        MatchResult::Found(f) => assert_eq!(f.word, "ROMA"),
        MatchResult::NoMatch => panic!("no match"),
    }

    // With AMOR first, the same drag finds AMOR and colors its own cells
    let mut level = Level::new(grid, vec![amor, roma]).unwrap();
    match evaluate(&gesture(c(0, 3), c(0, 0)), &mut level, 30) {
        MatchResult::Found(f) => assert_eq!(f.word, "AMOR"),
        MatchResult::NoMatch => panic!("no match"),
    }
    assert!(level.grid().get(c(3, 3)).unwrap().is_found());
    assert!(!level.grid().get(c(0, 0)).unwrap().is_found());
}

#[test]
fn test_word_points_formula() {
    assert_eq!(
        scoring::word_points(5, 30),
        (5 * config::POINTS_PER_LETTER * 30, false)
    );
    assert_eq!(scoring::word_points(5, 4), (2000, true));
}
