/*
generator_tests.rs

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

//! Level generator tests.

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;

use sopaletras::config;
use sopaletras::{Coordinate, Level, LevelGenerator, WordPool, generate};

fn levels(pool: &WordPool, word_count: usize, grid_size: usize) -> Vec<Level> {
    (0..50)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate(pool, word_count, grid_size, &mut rng)
        })
        .collect()
}

#[test]
fn test_grid_is_square() {
    for size in [1, 5, 12, 15] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let level = generate(&WordPool::builtin(), 8, size, &mut rng);
        assert_eq!(level.grid().size(), size);
        assert_eq!(level.grid().rows().count(), size);
        for row in level.grid().rows() {
            assert_eq!(row.len(), size);
        }
    }
}

#[test]
fn test_words_read_back_from_grid() {
    for level in levels(&WordPool::builtin(), 10, 10) {
        assert!(level.is_consistent());
        for w in level.words() {
            let read: String = w
                .coordinates()
                .iter()
                .map(|c| level.grid().letter(*c).unwrap())
                .collect();
            assert_eq!(read, w.word());
        }
    }
}

#[test]
fn test_shared_cells_hold_same_letter() {
    for level in levels(&WordPool::builtin(), 12, 8) {
        let mut seen: HashMap<Coordinate, char> = HashMap::new();
        for w in level.words() {
            for (c, letter) in w.coordinates().iter().zip(w.letters()) {
                if let Some(previous) = seen.insert(*c, *letter) {
                    assert_eq!(previous, *letter, "conflict at {c}");
                }
            }
        }
    }
}

#[test]
fn test_placements_are_straight_lines() {
    for level in levels(&WordPool::builtin(), 8, 12) {
        for w in level.words() {
            let (dr, dc) = w.direction().step();
            for pair in w.coordinates().windows(2) {
                assert_eq!(pair[1].row - pair[0].row, dr);
                assert_eq!(pair[1].col - pair[0].col, dc);
            }
            assert_eq!(w.coordinates().len(), w.len());
        }
    }
}

#[test]
fn test_words_are_distinct_sorted_and_fit() {
    for level in levels(&WordPool::builtin(), 8, 6) {
        assert!(level.words().len() <= 8);
        let lens: Vec<usize> = level.words().iter().map(|w| w.len()).collect();
        assert!(lens.windows(2).all(|p| p[0] >= p[1]), "{lens:?}");
        assert!(lens.iter().all(|l| *l <= 6));
        let distinct: HashSet<String> = level.words().iter().map(|w| w.word()).collect();
        assert_eq!(distinct.len(), level.words().len());
        assert!(level.words().iter().all(|w| !w.is_found()));
    }
}

#[test]
fn test_grid_uses_alphabet() {
    for level in levels(&WordPool::builtin(), 4, 12) {
        for row in level.grid().rows() {
            for cell in row {
                assert!(config::in_alphabet(cell.letter()));
                assert!(!cell.is_found());
                assert_eq!(cell.color(), None);
            }
        }
    }
}

#[test]
fn test_same_seed_same_level() {
    let pool = WordPool::builtin();
    let a = generate(&pool, 8, 12, &mut StdRng::seed_from_u64(99));
    let b = generate(&pool, 8, 12, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_long_words_are_skipped() {
    let pool = WordPool::from_words(["ELEFANTE", "MARIPOSA", "SOL", "MAR"]);
    for level in levels(&pool, 4, 4) {
        let words: HashSet<String> = level.words().iter().map(|w| w.word()).collect();
        assert!(words.is_subset(&HashSet::from(["SOL".to_string(), "MAR".to_string()])));
    }
}

#[test]
fn test_generator_reports_dropped_words() {
    // Nine 3-letter words with distinct letters cannot all fit in a 3x3 grid
    let pool = WordPool::from_words([
        "ABC", "DEF", "GHI", "JKL", "MNO", "PQR", "STU", "VWX", "YZÑ",
    ]);
    let mut generator = LevelGenerator::new(&pool, 9, 3);
    let level = generator.generate(&mut StdRng::seed_from_u64(7));
    assert!(level.words().len() <= 3);
    assert_eq!(level.words().len() + generator.dropped.len(), 9);
    assert!(generator.iteration >= generator.dropped.len() * config::MAX_PLACEMENT_ATTEMPTS);
}

#[test]
fn test_empty_pool_gives_empty_level() {
    let pool = WordPool::from_words(Vec::<String>::new());
    let level = generate(&pool, 8, 5, &mut StdRng::seed_from_u64(0));
    assert!(level.words().is_empty());
    assert_eq!(level.grid().size(), 5);
    assert!(!level.is_cleared());
}
