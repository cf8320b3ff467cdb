/*
telemetry.rs

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

//! Records of the words that the player found.
//!
//! A [`TelemetryRecord`] object is created for each found word. The records are grouped by
//! level in a [`TelemetryLog`] object, which is sent to the host when the game is over (see
//! [`crate::host_message`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Device used for a drag gesture.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputModality {
    Pointer,
    Touch,
    Pen,
    #[default]
    Unknown,
}

impl InputModality {
    /// Return the modality for a pointer type name, as reported by the host ("mouse", "touch",
    /// "pen"). Other names give [`InputModality::Unknown`].
    pub fn from_pointer_type(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "mouse" | "pointer" => InputModality::Pointer,
            "touch" => InputModality::Touch,
            "pen" => InputModality::Pen,
            _ => InputModality::Unknown,
        }
    }
}

/// Found word.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    /// Word that was found.
    pub word: String,

    /// Points awarded for the word, not including the level clear bonus.
    pub points: u64,

    /// Time when the word was found.
    pub timestamp: DateTime<Utc>,

    /// Duration of the drag in milliseconds.
    pub drag_duration_ms: i64,

    /// Time when the drag started.
    pub drag_started_at: DateTime<Utc>,

    /// Device used for the drag.
    pub modality: InputModality,
}

/// Records grouped by level.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TelemetryLog {
    /// Records of the finished levels.
    levels: Vec<Vec<TelemetryRecord>>,

    /// Records of the level in progress.
    current: Vec<TelemetryRecord>,
}

impl TelemetryLog {
    /// Create a [`TelemetryLog`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the level in progress.
    pub fn record(&mut self, record: TelemetryRecord) {
        self.current.push(record);
    }

    /// Close the level in progress. The next records go to a new level.
    pub fn close_level(&mut self) {
        self.levels.push(std::mem::take(&mut self.current));
    }

    /// Return the records of the level in progress.
    pub fn current(&self) -> &[TelemetryRecord] {
        &self.current
    }

    /// Return the records of the finished levels.
    pub fn levels(&self) -> &[Vec<TelemetryRecord>] {
        &self.levels
    }

    /// Close the level in progress and return all the records, one list per level.
    pub fn into_levels(mut self) -> Vec<Vec<TelemetryRecord>> {
        self.close_level();
        self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str) -> TelemetryRecord {
        let now: DateTime<Utc> = Utc::now();
        TelemetryRecord {
            word: word.to_string(),
            points: 100,
            timestamp: now,
            drag_duration_ms: 300,
            drag_started_at: now,
            modality: InputModality::Pen,
        }
    }

    #[test]
    fn modality_names() {
        assert_eq!(InputModality::from_pointer_type("Mouse"), InputModality::Pointer);
        assert_eq!(InputModality::from_pointer_type("touch"), InputModality::Touch);
        assert_eq!(InputModality::from_pointer_type("pen"), InputModality::Pen);
        assert_eq!(InputModality::from_pointer_type("kinect"), InputModality::Unknown);
        assert_eq!(InputModality::Touch.to_string(), "touch");
        assert_eq!(
            serde_json::to_string(&InputModality::Pointer).unwrap(),
            "\"pointer\""
        );
    }

    #[test]
    fn records_are_grouped_by_level() {
        let mut log = TelemetryLog::new();
        log.record(record("SOL"));
        log.record(record("LUNA"));
        log.close_level();
        log.record(record("MAR"));
        assert_eq!(log.levels().len(), 1);
        assert_eq!(log.current().len(), 1);

        let levels = log.into_levels();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].len(), 2);
        assert_eq!(levels[1][0].word, "MAR");
    }
}
