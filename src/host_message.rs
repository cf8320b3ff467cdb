/*
host_message.rs

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

//! Messages sent to the application hosting the game.
//!
//! The messages are serialized in JSON, with a `type` field:
//!
//! ```json
//! {"type":"session_start"}
//! {"type":"game_start"}
//! {"type":"game_over","total_score":1520,"levels":[[{"word":"SOL", ...}]]}
//! ```

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryRecord;

/// Message for the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// The game is loaded and ready.
    SessionStart,

    /// The player started a game.
    GameStart,

    /// The countdown expired.
    GameOver {
        /// Final score.
        total_score: u64,

        /// Records of the found words, one list per level, in level order.
        levels: Vec<Vec<TelemetryRecord>>,
    },
}

impl HostMessage {
    /// Return the JSON representation of the message.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
