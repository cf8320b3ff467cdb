/*
level.rs

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

//! Generate a random level.

use log::{Level as LogLevel, debug, log_enabled};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::time::Instant;

use super::grid::{Coordinate, Grid};
use super::placement::{Direction, WordPlacement};
use super::word_pool::WordPool;
use crate::config;

/// A grid and the words hidden in it.
///
/// The words are kept in placement order: longer words first, then in the order they were
/// drawn from the pool. That order decides which word wins when a selection matches several
/// words.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Level {
    grid: Grid,
    words: Vec<WordPlacement>,
}

impl Level {
    /// Create a [`Level`] object from a grid and the words hidden in it.
    ///
    /// Return None if one of the words cannot be read in the grid at its coordinates.
    pub fn new(grid: Grid, words: Vec<WordPlacement>) -> Option<Self> {
        let level: Level = Self { grid, words };
        if level.is_consistent() { Some(level) } else { None }
    }

    /// Whether reading the grid at the coordinates of each word gives back the word.
    pub fn is_consistent(&self) -> bool {
        self.words.iter().all(|w| {
            w.len() == w.coordinates().len()
                && self.grid.letters(w.coordinates()).as_deref() == Some(w.letters())
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[WordPlacement] {
        &self.words
    }

    /// Return the words that the player has not found yet, with their position in the
    /// word list, in placement order.
    pub fn unfound(&self) -> impl Iterator<Item = (usize, &WordPlacement)> {
        self.words.iter().enumerate().filter(|(_, w)| !w.is_found())
    }

    /// Return the number of words found so far.
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_found()).count()
    }

    /// Whether all the words are found.
    ///
    /// A level without any word is never cleared: there would be nothing for the player to do.
    pub fn is_cleared(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|w| w.is_found())
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Grid, &mut [WordPlacement]) {
        (&mut self.grid, &mut self.words)
    }
}

/// [`LevelGenerator`] object.
pub struct LevelGenerator<'a> {
    /// Candidate words.
    pool: &'a WordPool,

    /// Number of words to try to place.
    pub word_count: usize,

    /// Number of rows and columns of the grid.
    pub grid_size: usize,

    /// Number of placement attempts for the last generated level.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last level.
    pub duration: f32,

    /// Words that were selected for the last level but could not be placed.
    pub dropped: Vec<String>,
}

impl<'a> LevelGenerator<'a> {
    /// Create the object.
    pub fn new(pool: &'a WordPool, word_count: usize, grid_size: usize) -> Self {
        Self {
            pool,
            word_count,
            grid_size,
            iteration: 0,
            duration: 0.0,
            dropped: Vec::new(),
        }
    }

    /// Generate and return a random level.
    ///
    /// The returned level may hold fewer words than requested: words longer than the grid, and
    /// words that do not fit after [`config::MAX_PLACEMENT_ATTEMPTS`] random tries, are
    /// silently dropped.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Level {
        self.iteration = 0;
        self.duration = 0.0;
        self.dropped.clear();
        let start: Instant = Instant::now();

        let mut board: Vec<Vec<Option<char>>> = vec![vec![None; self.grid_size]; self.grid_size];
        let mut words: Vec<WordPlacement> = Vec::with_capacity(self.word_count);

        for word in self.select_words(rng) {
            match self.place_word(&mut board, &word, rng) {
                Some(p) => {
                    debug!(
                        "Placed {} at {} going {:?}",
                        p.word(),
                        p.coordinates()[0],
                        p.direction()
                    );
                    words.push(p);
                }
                None => {
                    let w: String = word.iter().collect();
                    debug!(
                        "Dropping {w}: no room after {} attempts",
                        config::MAX_PLACEMENT_ATTEMPTS
                    );
                    self.dropped.push(w);
                }
            }
        }

        // Fill the remaining cells with random letters
        let mut letters: Vec<char> = Vec::with_capacity(self.grid_size * self.grid_size);
        for cell in board.into_iter().flatten() {
            letters.push(match cell {
                Some(c) => c,
                None => config::ALPHABET[rng.random_range(0..config::ALPHABET.len())],
            });
        }
        let grid: Grid = Grid::from_letters(self.grid_size, letters);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Placed {}/{} words  Iterations = {}  Duration = {}",
            words.len(),
            self.word_count,
            self.iteration,
            self.duration
        );
        if log_enabled!(LogLevel::Debug) {
            debug!("Grid:\n{grid}");
        }
        Level { grid, words }
    }

    /// Draw the words to place: at most [`LevelGenerator::word_count`] distinct words that fit
    /// in the grid, longest first.
    fn select_words<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vec<char>> {
        let mut indices: Vec<usize> = (0..self.pool.len()).collect();
        indices.shuffle(rng);

        let mut selected: Vec<Vec<char>> = indices
            .into_iter()
            .map(|i| &self.pool.words()[i])
            .filter(|w| w.len() <= self.grid_size)
            .take(self.word_count)
            .cloned()
            .collect();

        // Stable sort: words with the same length keep their drawing order
        selected.sort_by(|a, b| b.len().cmp(&a.len()));
        selected
    }

    /// Try to place a word at random positions. On success the letters are written to the
    /// board and the placement is returned.
    fn place_word<R: Rng + ?Sized>(
        &mut self,
        board: &mut [Vec<Option<char>>],
        word: &[char],
        rng: &mut R,
    ) -> Option<WordPlacement> {
        for _ in 0..config::MAX_PLACEMENT_ATTEMPTS {
            self.iteration += 1;
            let start: Coordinate = Coordinate::new(
                rng.random_range(0..self.grid_size) as i32,
                rng.random_range(0..self.grid_size) as i32,
            );
            let direction: Direction =
                match Direction::from_repr(rng.random_range(0..Direction::COUNT)) {
                    Some(d) => d,
                    None => continue,
                };
            let coordinates: Vec<Coordinate> = direction.walk(start, word.len());
            if !Self::fits(board, word, &coordinates) {
                continue;
            }
            for (c, letter) in coordinates.iter().zip(word) {
                board[c.row as usize][c.col as usize] = Some(*letter);
            }
            return Some(WordPlacement::new(word.to_vec(), coordinates, direction));
        }
        None
    }

    /// Whether the word can be written at the given coordinates: all the cells must be in the
    /// board, and be empty or already hold the same letter.
    fn fits(board: &[Vec<Option<char>>], word: &[char], coordinates: &[Coordinate]) -> bool {
        let size: i32 = board.len() as i32;
        coordinates.iter().zip(word).all(|(c, letter)| {
            if c.row < 0 || c.col < 0 || c.row >= size || c.col >= size {
                return false;
            }
            match board[c.row as usize][c.col as usize] {
                None => true,
                Some(existing) => existing == *letter,
            }
        })
    }
}

/// Generate a level of `grid_size` by `grid_size` cells with up to `word_count` words from
/// the pool.
pub fn generate<R: Rng + ?Sized>(
    pool: &WordPool,
    word_count: usize,
    grid_size: usize,
    rng: &mut R,
) -> Level {
    LevelGenerator::new(pool, word_count, grid_size).generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fits_allows_crossing_on_same_letter() {
        let mut board = vec![vec![None; 3]; 3];
        board[0][1] = Some('A');
        let word = ['C', 'A', 'S'];
        let across = Direction::Horizontal.walk(Coordinate::new(0, 0), 3);
        assert!(LevelGenerator::fits(&board, &word, &across));

        board[0][1] = Some('X');
        assert!(!LevelGenerator::fits(&board, &word, &across));
    }

    #[test]
    fn fits_rejects_out_of_board() {
        let board = vec![vec![None; 3]; 3];
        let word = ['C', 'A', 'S'];
        let coords = Direction::Horizontal.walk(Coordinate::new(0, 1), 3);
        assert!(!LevelGenerator::fits(&board, &word, &coords));
        let coords = Direction::DiagonalDownLeft.walk(Coordinate::new(0, 1), 3);
        assert!(!LevelGenerator::fits(&board, &word, &coords));
    }

    #[test]
    fn selected_words_are_sorted_and_fit() {
        let pool = WordPool::from_words(["AB", "ABCDEFGHIJ", "ABCD", "ABC", "ABCDE"]);
        let generator = LevelGenerator::new(&pool, 10, 5);
        let mut rng = StdRng::seed_from_u64(3);
        let words = generator.select_words(&mut rng);
        let lens: Vec<usize> = words.iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![5, 4, 3, 2]);
    }

    #[test]
    fn word_count_limits_selection() {
        let pool = WordPool::builtin();
        let generator = LevelGenerator::new(&pool, 3, 12);
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(generator.select_words(&mut rng).len(), 3);
    }

    #[test]
    fn too_long_word_is_skipped() {
        let pool = WordPool::from_words(["AB"]);
        let mut generator = LevelGenerator::new(&pool, 1, 1);
        let mut rng = StdRng::seed_from_u64(5);
        let level = generator.generate(&mut rng);
        assert!(level.words().is_empty());
        assert!(generator.dropped.is_empty());
        assert_eq!(level.grid().size(), 1);
    }

    #[test]
    fn word_without_room_is_dropped() {
        // A 2x2 grid has room for two 2-letter words with distinct letters, never three
        let pool = WordPool::from_words(["AB", "CD", "EF"]);
        let mut generator = LevelGenerator::new(&pool, 3, 2);
        let mut rng = StdRng::seed_from_u64(8);
        let level = generator.generate(&mut rng);
        assert!(!generator.dropped.is_empty());
        assert!(level.words().len() <= 2);
        assert_eq!(level.words().len() + generator.dropped.len(), 3);
        assert!(level.is_consistent());
    }

    #[test]
    fn zero_sized_grid() {
        let pool = WordPool::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let level = generate(&pool, 5, 0, &mut rng);
        assert_eq!(level.grid().size(), 0);
        assert!(level.words().is_empty());
        assert!(!level.is_cleared());
    }

    #[test]
    fn level_new_checks_consistency() {
        let grid = Grid::from_strs(&["SOL", "XXX", "XXX"]).unwrap();
        let good = WordPlacement::new(
            vec!['S', 'O', 'L'],
            Direction::Horizontal.walk(Coordinate::new(0, 0), 3),
            Direction::Horizontal,
        );
        assert!(Level::new(grid.clone(), vec![good]).is_some());
        let bad = WordPlacement::new(
            vec!['S', 'O', 'L'],
            Direction::Vertical.walk(Coordinate::new(0, 0), 3),
            Direction::Vertical,
        );
        assert!(Level::new(grid, vec![bad]).is_none());
    }
}
