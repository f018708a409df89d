/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Escaperoom.

Escaperoom is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Escaperoom is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Escaperoom. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Without any utility option, Escaperoom starts the interactive game.
//! The other options are intended for developers and for inspecting the leaderboards.
//!
//! # Examples
//!
//! List the scored puzzles:
//!
//! ```
//! $ escaperoom --ls
//! hanoi    Tower of Hanoi
//! lights   Lights Out
//! sliding  Sliding Puzzle
//! ```
//!
//! Generate three 4x4 sliding puzzles and print some statistics:
//!
//! ```
//! $ escaperoom --generate 4 -c 3 -s
//! [3, 9, 1, 15, 14, 11, 4, 6, 13, 0, 10, 12, 2, 7, 8, 5]
//! [7, 12, 4, 2, 8, 0, 13, 3, 15, 9, 6, 1, 14, 10, 11, 5]
//! [11, 3, 14, 6, 1, 0, 10, 8, 13, 7, 12, 9, 5, 15, 4, 2]
//!
//!         total time = 0.000041s
//!       average time = 0.0000137s
//!           max time = 0.000018s
//! average iterations = 2
//! ```
//!
//! Print the Lights Out leaderboard as JSON:
//!
//! ```
//! $ escaperoom --scores lights --json
//! {"top_times":[{"player_name":"ANN","time":12.5,"moves":0}],"top_moves":[]}
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::draw;
use crate::generator::sliding::{SlidingGenerator, is_solvable};
use crate::highscores::Leaderboard;
use crate::puzzles::PuzzleKind;
use crate::saver::leaderboard::LeaderboardStore;

/// Escape room puzzles in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the scored puzzles
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate solvable sliding puzzles of the given size
    #[arg(short, long, group = "gen", value_name = "SIZE")]
    generate: Option<usize>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, requires = "gen")]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false, requires = "gen")]
    summary: bool,

    /// Print the leaderboard of a puzzle
    #[arg(value_enum, long, group = "board", value_name = "PUZZLE")]
    scores: Option<PuzzleKind>,

    /// Print the leaderboard as JSON
    #[arg(short, long, default_value_t = false, requires = "board")]
    json: bool,

    /// Directory for the leaderboard files
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What the program does after parsing the command line.
pub enum Command {
    /// Start the interactive game.
    Play { data_dir: PathBuf },

    /// A utility option already ran. Exit with the given code.
    Exit(u8),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.ls {
        for kind in PuzzleKind::ALL {
            let name: String = kind
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            println!("{name:<8} {kind}");
        }
        return Command::Exit(0);
    }

    if let Some(grid_size) = args.generate {
        return Command::Exit(generate(grid_size, args.count, args.summary));
    }

    if let Some(kind) = args.scores {
        return Command::Exit(print_scores(args.data_dir, kind, args.json));
    }

    Command::Play {
        data_dir: args.data_dir,
    }
}

/// Print `count` sliding puzzle layouts, one per line.
fn generate(grid_size: usize, count: usize, summary: bool) -> u8 {
    let mut generator: SlidingGenerator = match SlidingGenerator::new(grid_size) {
        Ok(g) => g,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    for i in 0..count {
        debug!("Iteration {i}");
        let tiles: Vec<usize> = generator.generate();

        // Verify the generated layout
        if !is_solvable(&tiles, grid_size) {
            eprintln!("Unsolvable layout: {tiles:?}");
            return 2;
        }
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        println!("{tiles:?}");
    }

    if summary && count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}",
            total,
            total / count as f32,
            max,
            iterations / count,
        );
    }
    0
}

/// Print the leaderboard of a puzzle.
fn print_scores(data_dir: PathBuf, kind: PuzzleKind, json: bool) -> u8 {
    let mut store: LeaderboardStore = LeaderboardStore::new(data_dir, kind);
    if let Err(error) = store.try_load() {
        eprintln!("Error: {error}");
        return 1;
    }
    let board: &Leaderboard = store.board();

    if json {
        match serde_json::to_string(board) {
            Ok(s) => println!("{s}"),
            Err(error) => {
                eprintln!("Error: {error}");
                return 1;
            }
        }
    } else {
        print!("{}", draw::leaderboard(kind, board));
    }
    0
}
