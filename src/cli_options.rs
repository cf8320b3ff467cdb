/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Sopaletras generates levels and prints them. This is useful to check a word
//! list or the effect of the grid size on the number of words that can be placed.
//! With `--play`, a game is played in the terminal: each line gives the start and the end
//! cells of a selection, as `row col row col`.
//!
//! # Examples
//!
//! Generate three 10x10 levels with the words from a file, and print some statistics:
//!
//! ```text
//! $ sopaletras -s 10 -c 3 -l animales.txt --summary
//! ```
//!
//! Play a game with a fixed seed, and keep the high scores in the `~/.local/share/sopaletras`
//! directory:
//!
//! ```text
//! $ sopaletras --play --seed 42 --data-dir ~/.local/share/sopaletras
//! ```

use chrono::Utc;
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::audio::LogAudio;
use crate::config::{self, COPYRIGHT_NOTICE};
use crate::game::{Game, TurnOutcome};
use crate::generator::grid::Coordinate;
use crate::generator::level::{Level, LevelGenerator};
use crate::generator::word_pool::WordPool;
use crate::highscores::HighScores;
use crate::host_message::HostMessage;
use crate::saver::highscores::SaverHighScores;
use crate::scoring::MatchResult;
use crate::settings::Settings;
use crate::telemetry::InputModality;

/// Timed word-search puzzle.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows and columns of the grid
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of words to hide in each level
    #[arg(short, long)]
    words: Option<usize>,

    /// Duration of each level in seconds
    #[arg(short = 't', long)]
    seconds: Option<u32>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Text file with the words to hide, one per line
    #[arg(short = 'l', long)]
    word_list: Option<PathBuf>,

    /// JSON file with the game settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Directory where the high scores are kept
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1, conflicts_with = "play")]
    count: usize,

    /// Print the levels in JSON format
    #[arg(short, long, default_value_t = false, conflicts_with = "play")]
    json: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    summary: bool,

    /// Play a game in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Build the settings from the settings file and the command-line options.
fn build_settings(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings: Settings = match &args.settings {
        Some(path) => match Settings::from_file(path)? {
            Some(s) => s,
            None => {
                debug!("Settings file {path:?} not found: using the defaults");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    if let Some(v) = args.size {
        settings.grid_size = v;
    }
    if let Some(v) = args.words {
        settings.word_count = v;
    }
    if let Some(v) = args.seconds {
        settings.level_seconds = v;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;
    Ok(settings)
}

/// Parse and process command-line options, and return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: Settings = match build_settings(&args) {
        Ok(s) => s,
        Err(error) => {
            eprintln!("Invalid settings: {error}");
            return 1;
        }
    };
    debug!("Settings: {settings:?}");

    let pool: WordPool = match &args.word_list {
        Some(path) => match WordPool::from_file(path) {
            Ok(p) => p,
            Err(error) => {
                eprintln!("Cannot read the word list {}: {error}", path.display());
                return 1;
            }
        },
        None => WordPool::builtin(),
    };

    let rng: StdRng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    if args.play {
        play(settings, pool, rng, args.data_dir)
    } else {
        print_levels(&settings, &pool, rng, args.count, args.json, args.summary)
    }
}

/// Print the words of a level, with the found words in lowercase.
fn print_words(level: &Level) {
    let words: Vec<String> = level
        .words()
        .iter()
        .map(|w| {
            if w.is_found() {
                w.word().to_lowercase()
            } else {
                w.word()
            }
        })
        .collect();
    println!("{}", words.join(" "));
}

/// Generate `count` levels and print them.
fn print_levels(
    settings: &Settings,
    pool: &WordPool,
    mut rng: StdRng,
    count: usize,
    json: bool,
    summary: bool,
) -> u8 {
    let mut generator: LevelGenerator =
        LevelGenerator::new(pool, settings.word_count, settings.grid_size);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut placed: usize = 0;
    let mut dropped: usize = 0;

    for i in 0..count {
        debug!("Level {i}");
        let level: Level = generator.generate(&mut rng);
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        placed += level.words().len();
        dropped += generator.dropped.len();

        if json {
            match serde_json::to_string_pretty(&level) {
                Ok(s) => println!("{s}"),
                Err(error) => {
                    eprintln!("Cannot serialize the level: {error}");
                    return 1;
                }
            }
        } else {
            print!("{}", level.grid());
            print_words(&level);
            println!();
        }
    }

    if summary && count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
   requested words = {}
      placed words = {}
     dropped words = {}",
            total,
            total / count as f32,
            max,
            iterations / count,
            settings.word_count * count,
            placed,
            dropped
        );
    }
    0
}

/// Parse a selection line: `row col row col`, separated by spaces or commas.
fn parse_selection(line: &str) -> Option<(Coordinate, Coordinate)> {
    let values: Vec<i32> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .ok()?;
    match values.as_slice() {
        [r1, c1, r2, c2] => Some((Coordinate::new(*r1, *c1), Coordinate::new(*r2, *c2))),
        _ => None,
    }
}

/// Print a host message as a JSON line.
fn emit(message: &HostMessage) {
    match message.to_json() {
        Ok(s) => println!("{s}"),
        Err(error) => eprintln!("Cannot serialize the message: {error}"),
    }
}

/// Print the outcome of a selection.
fn print_outcome(outcome: &TurnOutcome) {
    match &outcome.result {
        MatchResult::NoMatch => println!("No word there."),
        MatchResult::Found(f) => {
            if f.bonus {
                println!("Found {}: {} points (bonus!)", f.word, f.points);
            } else {
                println!("Found {}: {} points", f.word, f.points);
            }
        }
    }
    if let Some(bonus) = outcome.clear_bonus {
        println!("Level cleared: {bonus} bonus points. New level!");
    }
}

/// Write the input prompt. The prompt has no end of line, so the output is flushed.
fn show_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Play a game on the terminal.
fn play(settings: Settings, pool: WordPool, rng: StdRng, data_dir: Option<PathBuf>) -> u8 {
    emit(&HostMessage::SessionStart);
    let mut game: Game<StdRng> = Game::new(settings, pool, rng).with_audio(Box::new(LogAudio));
    emit(&game.start());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_tick: Instant = Instant::now();
    let mut game_over: Option<HostMessage> = None;

    while game_over.is_none() {
        println!();
        println!(
            "Level {}  Score {}  Time {}s",
            game.level_number(),
            game.score(),
            game.seconds_remaining()
        );
        print!("{}", game.level().grid());
        print_words(game.level());
        if let Err(error) = show_prompt(&mut io::stdout()) {
            debug!("Error writing the prompt: {error}");
        }
        let prompt_time = Utc::now();

        let line: String = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(error)) => {
                eprintln!("Cannot read the input: {error}");
                break;
            }
            None => break,
        };

        // Follow the wall clock
        let elapsed: u64 = last_tick.elapsed().as_secs();
        for _ in 0..elapsed {
            if let Some(m) = game.tick() {
                game_over = Some(m);
                break;
            }
        }
        last_tick += std::time::Duration::from_secs(elapsed);
        if game_over.is_some() {
            println!("Time is up!");
            break;
        }

        let line: &str = line.trim();
        if line == "q" || line == "quit" {
            break;
        }
        let (start, end) = match parse_selection(line) {
            Some(s) => s,
            None => {
                println!("Enter the start and end cells as: row col row col (or q to quit)");
                continue;
            }
        };
        if !game.begin_drag(start, InputModality::Unknown, prompt_time) {
            println!("The start cell {start} is outside the grid.");
            continue;
        }
        game.update_drag(end);
        print_outcome(&game.end_drag(Utc::now()));
    }

    if game_over.is_none() {
        game_over = game.expire();
    }
    if let Some(m) = &game_over {
        emit(m);
    }
    println!(
        "Final score: {} ({} levels cleared)",
        game.score(),
        game.levels_cleared()
    );

    if let Some(dir) = data_dir {
        save_score(
            dir,
            game.settings().grid_size,
            game.score(),
            game.levels_cleared(),
        );
    }
    0
}

/// Add the score to the high scores and save them.
fn save_score(data_dir: PathBuf, grid_size: usize, score: u64, levels_cleared: usize) {
    let saver: SaverHighScores = SaverHighScores::new(data_dir);
    let mut highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(error) => {
            debug!("Error getting the high scores from {:?}: {error}", saver.path());
            // The unreadable file is replaced by the new scoreboards
            if let Err(error) = saver.delete_save() {
                debug!("Error deleting the high scores: {error}");
            }
            HighScores::new()
        }
    };
    match highscores.add_score(grid_size, score, levels_cleared, Utc::now()) {
        Some(position) => println!("New high score for {grid_size}x{grid_size}: #{position}"),
        None => return,
    }
    match saver.save_highscores(&highscores) {
        Ok(()) => debug!("{} v{}: high scores saved", config::APPLICATION_NAME, config::VERSION),
        Err(error) => eprintln!("Cannot save the high scores: {error}"),
    }
}
