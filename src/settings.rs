/*
settings.rs

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

//! Game settings.
//!
//! The settings can be read from a JSON file, such as:
//!
//! ```json
//! {"grid_size": 10, "word_count": 6, "level_seconds": 90}
//! ```
//!
//! Missing fields get their default value from [`crate::config`].
//! Command-line options override the values from the file (see [`crate::cli_options`]).

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// The grid must have at least one cell.
    GridSize,

    /// At least one word must be requested.
    WordCount,

    /// A level must last at least one second.
    LevelSeconds,

    /// A level cannot require more words than the number of words requested.
    MinWords,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::GridSize => write!(f, "the grid size must be at least 1"),
            SettingsError::WordCount => write!(f, "the number of words must be at least 1"),
            SettingsError::LevelSeconds => write!(f, "a level must last at least 1 second"),
            SettingsError::MinWords => write!(
                f,
                "the minimum number of words cannot exceed the number of words per level"
            ),
        }
    }
}

impl Error for SettingsError {}

/// Game settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of rows and columns of the grid.
    pub grid_size: usize,

    /// Number of words to hide in each level.
    pub word_count: usize,

    /// Duration of each level in seconds.
    pub level_seconds: u32,

    /// Minimum number of words a level must hold. A level with fewer words is generated again,
    /// up to [`config::MAX_LEVEL_ATTEMPTS`] times.
    pub min_words: usize,

    /// Seed for the random number generator. When not set, levels are different every time.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: config::DEFAULT_GRID_SIZE,
            word_count: config::DEFAULT_WORD_COUNT,
            level_seconds: config::DEFAULT_LEVEL_SECONDS,
            min_words: 1,
            seed: None,
        }
    }
}

impl Settings {
    /// Read the settings from a JSON file.
    ///
    /// Return None if the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, Box<dyn Error>> {
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        debug!("Settings from {path:?}: {settings:?}");
        Ok(Some(settings))
    }

    /// Verify that the settings can be used to play.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size == 0 {
            return Err(SettingsError::GridSize);
        }
        if self.word_count == 0 {
            return Err(SettingsError::WordCount);
        }
        if self.level_seconds == 0 {
            return Err(SettingsError::LevelSeconds);
        }
        if self.min_words > self.word_count {
            return Err(SettingsError::MinWords);
        }
        Ok(())
    }
}
