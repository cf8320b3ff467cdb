/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A game is a sequence of levels. Each level has its own countdown. When the player finds all
//! the words of a level, the remaining seconds give a bonus and a new level is generated.
//! When the countdown of a level expires, the game is over.

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;

use crate::audio::{AudioCue, AudioService};
use crate::config;
use crate::generator::grid::Coordinate;
use crate::generator::level::{Level, LevelGenerator};
use crate::generator::word_pool::WordPool;
use crate::host_message::HostMessage;
use crate::scoring::{self, MatchResult};
use crate::selection::{Gesture, Selection};
use crate::settings::Settings;
use crate::telemetry::{InputModality, TelemetryLog};

/// Game phases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The game has not started yet.
    Ready,

    /// The player is playing.
    Playing,

    /// The countdown is stopped and the grid should be hidden.
    Paused,

    /// The countdown expired.
    Over,
}

/// Outcome of a released drag.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Result of matching the path against the remaining words.
    pub result: MatchResult,

    /// Bonus awarded if the found word was the last of the level.
    pub clear_bonus: Option<u64>,
}

impl TurnOutcome {
    fn no_match() -> Self {
        Self {
            result: MatchResult::NoMatch,
            clear_bonus: None,
        }
    }

    /// Whether the level was cleared, and so replaced by a new one.
    pub fn level_cleared(&self) -> bool {
        self.clear_bonus.is_some()
    }
}

/// Manage the status of the game in progress.
pub struct Game<R: Rng> {
    /// Game parameters.
    settings: Settings,

    /// Candidate words.
    pool: WordPool,

    /// Random number generator for the levels.
    rng: R,

    /// Level in progress.
    level: Level,

    /// Level number, starting at 1.
    level_number: usize,

    /// Seconds remaining before the end of the level.
    seconds_remaining: u32,

    /// Total score.
    score: u64,

    /// Records of the found words.
    telemetry: TelemetryLog,

    /// Drag in progress.
    selection: Option<Selection>,

    /// Current phase.
    phase: Phase,

    /// Optional sound service.
    audio: Option<Box<dyn AudioService>>,
}

impl<R: Rng> Game<R> {
    /// Create a [`Game`] object. The game starts with [`Game::start`].
    pub fn new(settings: Settings, pool: WordPool, rng: R) -> Self {
        let seconds_remaining: u32 = settings.level_seconds;
        Self {
            settings,
            pool,
            rng,
            level: Level::default(),
            level_number: 0,
            seconds_remaining,
            score: 0,
            telemetry: TelemetryLog::new(),
            selection: None,
            phase: Phase::Ready,
            audio: None,
        }
    }

    /// Provide the service that plays the sound cues.
    pub fn with_audio(mut self, audio: Box<dyn AudioService>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Start a new game, discarding any game in progress.
    pub fn start(&mut self) -> HostMessage {
        self.score = 0;
        self.level_number = 0;
        self.telemetry = TelemetryLog::new();
        self.next_level();
        self.phase = Phase::Playing;
        HostMessage::GameStart
    }

    /// Replace the level with a new one and restart the countdown.
    ///
    /// A level with fewer than [`Settings::min_words`] words is generated again, up to
    /// [`config::MAX_LEVEL_ATTEMPTS`] times. If no attempt succeeds, the last level is kept.
    fn next_level(&mut self) {
        let mut generator: LevelGenerator =
            LevelGenerator::new(&self.pool, self.settings.word_count, self.settings.grid_size);
        let mut level: Level = generator.generate(&mut self.rng);
        let mut attempt: usize = 1;
        while level.words().len() < self.settings.min_words && attempt < config::MAX_LEVEL_ATTEMPTS
        {
            debug!(
                "Level has {} words, less than {}: generating again",
                level.words().len(),
                self.settings.min_words
            );
            level = generator.generate(&mut self.rng);
            attempt += 1;
        }
        self.level = level;
        self.level_number += 1;
        self.seconds_remaining = self.settings.level_seconds;
        self.selection = None;
        debug!(
            "Level {} with {} words",
            self.level_number,
            self.level.words().len()
        );
    }

    fn play(&mut self, cue: AudioCue) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play(cue);
        }
    }

    /// Start a drag on the given cell.
    ///
    /// Return `false`, and ignore the drag, if the game is not in progress, if another drag
    /// is in progress, or if the cell is outside the grid.
    pub fn begin_drag(
        &mut self,
        start: Coordinate,
        modality: InputModality,
        at: DateTime<Utc>,
    ) -> bool {
        if self.phase != Phase::Playing
            || self.selection.is_some()
            || !self.level.grid().contains(start)
        {
            return false;
        }
        self.selection = Some(Selection::begin(start, modality, at));
        true
    }

    /// Move the end of the drag in progress to the given cell and return the cells to
    /// highlight.
    pub fn update_drag(&mut self, current: Coordinate) -> Vec<Coordinate> {
        match self.selection.as_mut() {
            Some(s) => {
                s.update(current);
            }
            None => return Vec::new(),
        }
        self.highlighted()
    }

    /// Return the cells of the drag in progress that are inside the grid.
    pub fn highlighted(&self) -> Vec<Coordinate> {
        match &self.selection {
            Some(s) => s
                .path()
                .iter()
                .copied()
                .filter(|c| self.level.grid().contains(*c))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Cancel the drag in progress.
    pub fn cancel_drag(&mut self) {
        self.selection = None;
    }

    /// Release the drag in progress and evaluate it.
    pub fn end_drag(&mut self, at: DateTime<Utc>) -> TurnOutcome {
        let selection: Selection = match self.selection.take() {
            Some(s) => s,
            None => return TurnOutcome::no_match(),
        };
        if self.phase != Phase::Playing {
            return TurnOutcome::no_match();
        }
        self.evaluate(&selection.finish(at))
    }

    /// Evaluate a released gesture against the level in progress.
    pub fn evaluate(&mut self, gesture: &Gesture) -> TurnOutcome {
        if self.phase != Phase::Playing {
            return TurnOutcome::no_match();
        }
        let result: MatchResult =
            scoring::evaluate(gesture, &mut self.level, self.seconds_remaining);
        let found = match &result {
            MatchResult::Found(f) => f,
            MatchResult::NoMatch => return TurnOutcome::no_match(),
        };

        self.score += found.points;
        self.telemetry.record(found.telemetry.clone());
        let cue: AudioCue = if found.bonus {
            AudioCue::Bonus
        } else {
            AudioCue::Found
        };
        self.play(cue);

        let mut clear_bonus: Option<u64> = None;
        if self.level.is_cleared() {
            let bonus: u64 = scoring::level_clear_bonus(self.seconds_remaining);
            debug!(
                "Level {} cleared with {}s left: bonus {bonus}",
                self.level_number, self.seconds_remaining
            );
            self.score += bonus;
            clear_bonus = Some(bonus);
            self.telemetry.close_level();
            self.play(AudioCue::LevelClear);
            self.next_level();
        }

        TurnOutcome {
            result,
            clear_bonus,
        }
    }

    /// Count down one second.
    ///
    /// Return the game over message when the countdown expires. The message is returned only
    /// once.
    pub fn tick(&mut self) -> Option<HostMessage> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining > 0 {
            return None;
        }
        Some(self.game_over())
    }

    /// End the game now, as if the countdown expired.
    ///
    /// Return None if the game is not in progress.
    pub fn expire(&mut self) -> Option<HostMessage> {
        match self.phase {
            Phase::Playing | Phase::Paused => Some(self.game_over()),
            Phase::Ready | Phase::Over => None,
        }
    }

    /// Stop the game and return the game over message.
    fn game_over(&mut self) -> HostMessage {
        debug!(
            "Game over at level {} with score {}",
            self.level_number, self.score
        );
        self.phase = Phase::Over;
        self.selection = None;
        self.play(AudioCue::GameOver);
        HostMessage::GameOver {
            total_score: self.score,
            levels: std::mem::take(&mut self.telemetry).into_levels(),
        }
    }

    /// Pause the game: the countdown stops and drags are ignored.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
            self.selection = None;
        }
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Playing;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_number(&self) -> usize {
        self.level_number
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the records of the game in progress.
    pub fn telemetry(&self) -> &TelemetryLog {
        &self.telemetry
    }

    /// Replace the level in progress. Used to play prepared levels.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.seconds_remaining = self.settings.level_seconds;
        self.selection = None;
    }

    /// Number of levels cleared so far.
    pub fn levels_cleared(&self) -> usize {
        self.level_number.saturating_sub(1)
    }
}
