/*
word_pool.rs

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

//! List of the words that can be hidden in the grid.
//!
//! A built-in list is provided. Players can also provide their own list in a text file, with
//! one word per line. Blank lines and lines starting with `#` are ignored.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config;

const BUILTIN_WORDS: &[&str] = &[
    "ARBOL", "CASA", "PERRO", "GATO", "MONTAÑA", "RIO", "CIELO", "NUBE", "LUNA", "SOL",
    "ESTRELLA", "PLAYA", "ARENA", "BOSQUE", "FLOR", "JARDIN", "CAMINO", "PUENTE", "CIUDAD",
    "PUEBLO", "NIÑO", "AÑO", "SUEÑO", "ESPAÑA", "MAÑANA", "OTOÑO", "PIÑA", "CABAÑA", "VIENTO",
    "LLUVIA", "NIEVE", "FUEGO", "AGUA", "TIERRA", "VERANO", "INVIERNO", "LIBRO", "ESCUELA",
    "MAESTRO", "AMIGO", "FAMILIA", "CORAZON", "GUITARRA", "MUSICA", "BAILE", "FIESTA",
    "COMIDA", "QUESO", "PAN", "LECHE", "NARANJA", "MANZANA", "PLATANO", "TOMATE", "CEBOLLA",
    "BARCO", "AVION", "TREN", "COCHE", "BICICLETA", "VENTANA", "PUERTA", "MESA", "SILLA",
    "CAMA", "ESPEJO", "RELOJ", "TELEFONO", "PAJARO", "CABALLO", "TORTUGA", "CONEJO", "RATON",
    "LEON", "TIGRE", "ELEFANTE", "JIRAFA", "DELFIN", "BALLENA", "PULPO", "ARAÑA", "MARIPOSA",
    "PEQUEÑO", "DISEÑO", "COMPAÑERO", "SEÑAL", "BAÑO", "LEÑA", "UÑA", "OSO", "ZORRO", "LOBO",
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WordPoolError {
    /// No usable word in the list.
    Empty,
}

impl fmt::Display for WordPoolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordPoolError::Empty => write!(f, "the word list does not contain any usable word"),
        }
    }
}

impl Error for WordPoolError {}

/// List of candidate words.
///
/// Words are stored uppercase, as lists of `char` so that letters such as `Ñ` count as one
/// cell. All the letters are part of [`config::ALPHABET`] and there are no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPool {
    words: Vec<Vec<char>>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordPool {
    /// Create a [`WordPool`] object with the built-in list.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().copied())
    }

    /// Create a [`WordPool`] object from a list of words.
    ///
    /// The words are trimmed and converted to uppercase. Empty words, words with letters
    /// outside of the alphabet, and duplicates are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<Vec<char>> = Vec::new();
        for w in words {
            let word: Vec<char> = w.as_ref().trim().to_uppercase().chars().collect();
            if word.is_empty() {
                continue;
            }
            if !word.iter().all(|c| config::in_alphabet(*c)) {
                debug!("Ignoring word {:?}: not in the alphabet", w.as_ref());
                continue;
            }
            if list.contains(&word) {
                continue;
            }
            list.push(word);
        }
        Self { words: list }
    }

    /// Create a [`WordPool`] object from a text file.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read, or if it does not contain any
    /// usable word.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading the word list from {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let mut lines: Vec<String> = Vec::new();
        for line in reader.lines() {
            let line: String = line?;
            if line.trim_start().starts_with('#') {
                continue;
            }
            lines.push(line);
        }
        let pool: WordPool = Self::from_words(lines);
        if pool.is_empty() {
            return Err(Box::new(WordPoolError::Empty));
        }
        debug!("{} words loaded", pool.len());
        Ok(pool)
    }

    /// Return the words.
    pub fn words(&self) -> &[Vec<char>] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
