/*
config.rs

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

//! Build-time constants.
//!
//! The values that the player cannot change live here. The values that can be tuned at run time
//! (grid size, number of words, level duration) have their default here and are managed by
//! [`crate::settings::Settings`].

pub const APPLICATION_NAME: &str = "Sopaletras";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = "
Copyright 2026 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Default number of rows and columns of the grid.
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Default number of words to hide in each level.
pub const DEFAULT_WORD_COUNT: usize = 8;

/// Default duration of a level, in seconds.
pub const DEFAULT_LEVEL_SECONDS: u32 = 60;

/// Number of random positions and directions tried for a word before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Number of times a level is regenerated when not enough words could be placed.
pub const MAX_LEVEL_ATTEMPTS: usize = 10;

/// Points per letter of a found word, before the time multiplier.
pub const POINTS_PER_LETTER: u64 = 10;

/// Matches with this many seconds remaining, or fewer, get the bonus multiplier.
pub const BONUS_WINDOW_SECONDS: u32 = 5;

/// Multiplier applied to the points of a match in the bonus window.
pub const BONUS_MULTIPLIER: u64 = 10;

/// Points per remaining second when the level is cleared.
pub const LEVEL_CLEAR_MULTIPLIER: u64 = 10;

/// Letters used for the grid. Ñ is part of the alphabet.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Colors given to the found words, in order of placement, as RGBA components.
pub const PALETTE: [(u8, u8, u8, u8); 8] = [
    (0xe0, 0x1b, 0x24, 0xff),
    (0x26, 0xa2, 0x69, 0xff),
    (0x1c, 0x71, 0xd8, 0xff),
    (0xf5, 0xc2, 0x11, 0xff),
    (0x91, 0x41, 0xac, 0xff),
    (0xe6, 0x61, 0x00, 0xff),
    (0x2a, 0xc3, 0xde, 0xff),
    (0x86, 0x5e, 0x3c, 0xff),
];

/// Whether the character is part of [`ALPHABET`].
pub fn in_alphabet(c: char) -> bool {
    ALPHABET.contains(&c)
}
