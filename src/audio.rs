/*
audio.rs

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

//! Sound cues.
//!
//! The game does not produce sound itself. It notifies an [`AudioService`] object, provided by
//! the interface, of the events that deserve a sound.

use log::debug;
use strum_macros::Display;

/// Events that deserve a sound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum AudioCue {
    /// A word was found.
    Found,

    /// A word was found in the bonus window.
    Bonus,

    /// All the words of the level were found.
    LevelClear,

    /// The countdown expired.
    GameOver,
}

/// Service that plays the sound cues.
pub trait AudioService {
    fn play(&mut self, cue: AudioCue);
}

/// [`AudioService`] that only logs the cues.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioService for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        debug!("Audio cue: {cue}");
    }
}
