/*
generator.rs

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

//! Generate random levels.
//!
//! A level is a [`level::Level`] object: a square [`grid::Grid`] of letters and the list of the
//! [`placement::WordPlacement`] objects hidden in it.
//!
//! The words come from a [`word_pool::WordPool`] object, which is either the built-in list or a
//! list loaded from a text file.
//!
//! You create a level by creating a [`level::LevelGenerator`] object and by using its
//! [`level::LevelGenerator::generate`] method.
//! The generator draws the words at random, sorts them from the longest to the shortest, and
//! then tries random positions and directions for each word.
//! Words can cross when they share the letter at the crossing.
//! A word that cannot be placed after a fixed number of tries is dropped, so a level may hold
//! fewer words than requested.
//! Finally, the empty cells are filled with random letters.
//!
//! The random number generator is provided by the caller. Use a seeded generator, such as
//! [`rand::rngs::StdRng`], to get the same level every time.

pub mod grid;
pub mod level;
pub mod placement;
pub mod word_pool;
