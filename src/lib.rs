/*
lib.rs

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

//! Timed word-search puzzle.
//!
//! The player drags across a square grid of letters to select a straight line of cells.
//! When the letters, read in either direction, spell one of the hidden words, the word is
//! found and scores points. The fewer seconds remain, the fewer points a word is worth, except
//! in the last seconds of a level where a bonus multiplier applies.
//!
//! - [`generator`] builds the levels: the grid and the hidden words.
//! - [`selection`] turns a drag gesture into a path of cells.
//! - [`scoring`] matches a path against the remaining words and computes the points.
//! - [`game`] chains the levels, runs the countdown, and produces the messages for the host.

pub mod audio;
pub mod cli_options;
pub mod config;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod host_message;
pub mod saver;
pub mod scoring;
pub mod selection;
pub mod settings;
pub mod telemetry;

pub use game::{Game, Phase, TurnOutcome};
pub use generator::grid::{Cell, Color, Coordinate, Grid};
pub use generator::level::{Level, LevelGenerator, generate};
pub use generator::placement::{Direction, WordPlacement};
pub use generator::word_pool::WordPool;
pub use host_message::HostMessage;
pub use scoring::{MatchResult, evaluate};
pub use selection::{Gesture, Selection, resolve};
pub use settings::Settings;
pub use telemetry::{InputModality, TelemetryRecord};
