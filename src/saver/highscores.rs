/*
highscores.rs

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


//! Keep the high scores between games.
//!
//! The scoreboards are stored as a single JSON document in the data directory given with
//! `--data-dir`. The directory is created on the first save.

use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::highscores::HighScores;

/// Name of the high scores file in the data directory.
const HIGHSCORES_FILE: &str = "highscores.json";

/// Reads and writes the [`HighScores`] file of a data directory.
pub struct SaverHighScores {
    data_dir: PathBuf,
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object for the given data directory.
    ///
    /// The directory does not need to exist yet.
    pub fn new(data_dir: PathBuf) -> Self {
        let save_file: PathBuf = data_dir.join(HIGHSCORES_FILE);
        debug!("High scores file: {save_file:?}");
        Self {
            data_dir,
            save_file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Load the scoreboards.
    ///
    /// A missing file is not an error: no game was saved yet, and None is returned.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        match File::open(&self.save_file) {
            Ok(f) => Ok(Some(serde_json::from_reader(BufReader::new(f))?)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Box::new(error)),
        }
    }

    /// Write the scoreboards, creating the data directory if needed.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.data_dir)?;
        let mut writer: BufWriter<File> = BufWriter::new(File::create(&self.save_file)?);
        serde_json::to_writer_pretty(&mut writer, highscores)?;
        writer.flush()?;
        debug!("High scores saved to {:?}", self.save_file);
        Ok(())
    }

    /// Remove the high scores file. A missing file is ignored.
    pub fn delete_save(&self) -> Result<(), Box<dyn Error>> {
        match fs::remove_file(&self.save_file) {
            Err(error) if error.kind() != ErrorKind::NotFound => Err(Box::new(error)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sopaletras-{name}-{}", std::process::id()))
    }

    #[test]
    fn save_and_restore() {
        let dir = temp_dir("scores");
        let saver = SaverHighScores::new(dir.clone());
        assert!(saver.get_highscores().unwrap().is_none());

        let mut hs = HighScores::new();
        hs.add_score(12, 4200, 2, Utc::now());
        saver.save_highscores(&hs).unwrap();

        let restored = saver.get_highscores().unwrap().unwrap();
        assert_eq!(restored.get_scores(12).unwrap()[0].points, 4200);

        saver.delete_save().unwrap();
        assert!(saver.get_highscores().unwrap().is_none());
        assert!(saver.delete_save().is_ok());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_creates_missing_data_dir() {
        let dir = temp_dir("nested").join("a").join("b");
        let saver = SaverHighScores::new(dir.clone());
        assert!(!dir.exists());

        let mut hs = HighScores::new();
        hs.add_score(8, 10, 0, Utc::now());
        saver.save_highscores(&hs).unwrap();
        assert!(saver.path().is_file());
        assert_eq!(saver.path(), dir.join(HIGHSCORES_FILE));

        fs::remove_dir_all(temp_dir("nested")).unwrap();
    }
}
