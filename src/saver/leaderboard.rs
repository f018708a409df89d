/*
leaderboard.rs

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

//! Save and restore the leaderboard of a puzzle.
//!
//! The file is plain text, one file per puzzle:
//!
//! ```text
//! Best Times:
//! 1. ANN, 12.50s
//! 2. BOB, 20.00s
//! -------------------------
//! Best Moves:
//! 1. BOB, 31 moves
//! ```
//!
//! Each section has at most [`crate::highscores::BOARD_SIZE`] lines.
//! Reading the file is lenient: blank lines, the divider, and lines that cannot be parsed are
//! skipped, and lines before the first header are ignored.
//!
//! Failing to read or write the file does not stop the game: the error is logged and the
//! leaderboard in memory stays valid.

use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::str;
use std::sync::Mutex;
use thiserror::Error;

use crate::highscores::{Leaderboard, Qualification};
use crate::puzzles::PuzzleKind;

/// Header of the time section.
const TIMES_HEADER: &str = "Best Times:";

/// Header of the moves section.
const MOVES_HEADER: &str = "Best Moves:";

/// Line between the two sections.
const DIVIDER: &str = "-------------------------";

/// Type of errors.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// The file cannot be read or written.
    #[error("leaderboard file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Section of the file being read.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Times,
    Moves,
}

/// Write the leaderboard in the text format.
pub fn write_leaderboard<W: Write>(board: &Leaderboard, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{TIMES_HEADER}")?;
    for (i, entry) in board.top_times().iter().enumerate() {
        writeln!(writer, "{}. {}, {:.2}s", i + 1, entry.player_name, entry.time)?;
    }
    writeln!(writer, "{DIVIDER}")?;
    writeln!(writer, "{MOVES_HEADER}")?;
    for (i, entry) in board.top_moves().iter().enumerate() {
        writeln!(writer, "{}. {}, {} moves", i + 1, entry.player_name, entry.moves)?;
    }
    Ok(())
}

/// Read a leaderboard in the text format.
///
/// # Errors
///
/// Only read errors are returned. Lines that cannot be parsed, including lines that are not
/// valid UTF-8, are skipped.
pub fn read_leaderboard<R: BufRead>(mut reader: R) -> io::Result<Leaderboard> {
    let mut board: Leaderboard = Leaderboard::new();
    let mut section: Option<Section> = None;
    let mut buffer: Vec<u8> = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let trimmed: &str = match str::from_utf8(&buffer) {
            Ok(line) => line.trim(),
            Err(error) => {
                debug!("Skipping leaderboard line: {error}");
                continue;
            }
        };

        if trimmed.starts_with(TIMES_HEADER) {
            section = Some(Section::Times);
        } else if trimmed.starts_with(MOVES_HEADER) {
            section = Some(Section::Moves);
        } else if trimmed.is_empty() || trimmed == DIVIDER {
            continue;
        } else if let Some(s) = section {
            parse_entry(trimmed, s, &mut board);
        }
    }
    Ok(board)
}

/// Parse a `<rank>. <name>, <value>` line and add it to the board.
fn parse_entry(line: &str, section: Section, board: &mut Leaderboard) {
    // Remove the rank
    let data: &str = match line.find(". ") {
        Some(i) => line[i + 2..].trim(),
        None => line,
    };
    let parts: Vec<&str> = data
        .trim_matches(|c| c == '(' || c == ')')
        .split(',')
        .collect();
    if parts.len() != 2 {
        debug!("Skipping leaderboard line {line:?}");
        return;
    }
    let player_name: &str = parts[0].trim();
    let value: &str = parts[1].trim();

    match section {
        Section::Times => match value.trim_end_matches('s').trim().parse::<f64>() {
            Ok(time) if time.is_finite() => {
                board.add_time_entry(player_name, time);
            }
            _ => debug!("Skipping leaderboard time {line:?}"),
        },
        Section::Moves => match value.trim_end_matches("moves").trim().parse::<i64>() {
            Ok(moves) => {
                board.add_moves_entry(player_name, moves);
            }
            Err(_) => debug!("Skipping leaderboard moves {line:?}"),
        },
    }
}

/// Leaderboard of a puzzle and the file where it is saved.
pub struct LeaderboardStore {
    /// Absolute path to the save file.
    save_file: PathBuf,

    /// Rankings in memory.
    board: Leaderboard,

    /// Held while the file is written.
    file_lock: Mutex<()>,
}

impl LeaderboardStore {
    /// Create a [`LeaderboardStore`] object for the given puzzle.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the leaderboard files are
    /// saved. The rankings are empty until [`LeaderboardStore::load`] is called.
    pub fn new(mut data_dir: PathBuf, kind: PuzzleKind) -> Self {
        data_dir.push(kind.leaderboard_file());
        debug!("{kind} leaderboard file: {data_dir:?}");
        Self::with_file(data_dir)
    }

    /// Create a [`LeaderboardStore`] object that uses the given file.
    pub fn with_file(save_file: PathBuf) -> Self {
        Self {
            save_file,
            board: Leaderboard::new(),
            file_lock: Mutex::new(()),
        }
    }

    /// Replace the rankings with the content of the file.
    ///
    /// Return false when the file does not exist, in which case the rankings are not changed.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file exists but cannot be read. The rankings are not
    /// changed.
    pub fn try_load(&mut self) -> Result<bool, LeaderboardError> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(false),
                _ => return Err(self.io_error(error)),
            },
        };
        let board: Leaderboard =
            read_leaderboard(BufReader::new(file)).map_err(|e| self.io_error(e))?;
        self.board = board;
        Ok(true)
    }

    /// Same as [`LeaderboardStore::try_load`], but errors are logged and ignored.
    pub fn load(&mut self) {
        match self.try_load() {
            Ok(true) => debug!("Leaderboard loaded from {:?}", self.save_file),
            Ok(false) => debug!("No leaderboard file {:?}", self.save_file),
            Err(error) => warn!("Cannot load the leaderboard: {error}"),
        }
    }

    /// Write the rankings to the file, replacing its content.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be written.
    pub fn try_save(&self) -> Result<(), LeaderboardError> {
        let _guard = self.file_lock.lock().unwrap_or_else(|e| e.into_inner());

        let file: File = File::create(&self.save_file).map_err(|e| self.io_error(e))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        write_leaderboard(&self.board, &mut writer).map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    /// Same as [`LeaderboardStore::try_save`], but errors are logged and ignored.
    pub fn save(&self) {
        match self.try_save() {
            Ok(()) => debug!("Leaderboard saved to {:?}", self.save_file),
            Err(error) => warn!("Cannot save the leaderboard: {error}"),
        }
    }

    fn io_error(&self, source: io::Error) -> LeaderboardError {
        LeaderboardError::Io {
            path: self.save_file.clone(),
            source,
        }
    }

    /// Rankings in memory.
    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    #[cfg(test)]
    pub fn add_time_entry(&mut self, player_name: &str, time: f64) -> Option<usize> {
        self.board.add_time_entry(player_name, time)
    }

    #[cfg(test)]
    pub fn add_moves_entry(&mut self, player_name: &str, moves: i64) -> Option<usize> {
        self.board.add_moves_entry(player_name, moves)
    }

    /// See [`Leaderboard::qualify`].
    pub fn qualify(&self, time: f64, moves: i64) -> Option<Qualification> {
        self.board.qualify(time, moves)
    }

    /// Record a result, then save and reload the file.
    pub fn record(&mut self, player_name: &str, time: f64, moves: i64, qualification: Qualification) {
        self.board.record(player_name, time, moves, qualification);
        self.save();
        self.load();
    }
}
