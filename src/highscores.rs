/*
highscores.rs

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

//! Manage the leaderboard of a puzzle.
//!
//! The main object, [`Leaderboard`], keeps two rankings for one puzzle: the best times and the
//! lowest move counts, each limited to [`BOARD_SIZE`] entries.
//! The [`crate::saver::leaderboard`] module saves and restores the [`Leaderboard`] object in a
//! text file.

use serde::{Deserialize, Serialize};

/// Number of entries per ranking (number of top scores to keep).
pub const BOARD_SIZE: usize = 3;

/// Object that represents a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Name the player entered.
    pub player_name: String,

    /// Seconds it took to solve the puzzle, rounded to two decimals.
    pub time: f64,

    /// Number of moves it took to solve the puzzle.
    pub moves: i64,
}

/// Which rankings a solved puzzle made it to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub enum Qualification {
    Both,
    Time,
    Moves,
}

impl Qualification {
    /// Whether the time ranking is concerned.
    pub fn includes_time(&self) -> bool {
        matches!(self, Qualification::Both | Qualification::Time)
    }

    /// Whether the moves ranking is concerned.
    pub fn includes_moves(&self) -> bool {
        matches!(self, Qualification::Both | Qualification::Moves)
    }
}

/// Round a time to two decimals, which is the precision of the leaderboard file.
pub fn round_time(time: f64) -> f64 {
    (time * 100.0).round() / 100.0
}

/// Remove the characters that the leaderboard file uses as separators.
fn clean_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '\n' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sorted lists of the top scores for a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    /// Best times, fastest first.
    top_times: Vec<LeaderboardEntry>,

    /// Best move counts, lowest first.
    top_moves: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty [`Leaderboard`] object.
    pub fn new() -> Self {
        Self {
            top_times: Vec::with_capacity(BOARD_SIZE + 1),
            top_moves: Vec::with_capacity(BOARD_SIZE + 1),
        }
    }

    /// Add a time to the time ranking and return the position in the ranking, or None if the
    /// time does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). Equal times keep their arrival order.
    pub fn add_time_entry(&mut self, player_name: &str, time: f64) -> Option<usize> {
        self.top_times.push(LeaderboardEntry {
            player_name: clean_name(player_name),
            time: round_time(time),
            moves: 0,
        });
        let new_index: usize = self.top_times.len() - 1;
        Self::rank(&mut self.top_times, new_index, |a, b| a.time.total_cmp(&b.time))
    }

    /// Add a move count to the moves ranking and return the position in the ranking, or None if
    /// it does not make it to the board.
    ///
    /// Counts of zero or less are ignored.
    pub fn add_moves_entry(&mut self, player_name: &str, moves: i64) -> Option<usize> {
        if moves <= 0 {
            return None;
        }
        self.top_moves.push(LeaderboardEntry {
            player_name: clean_name(player_name),
            time: 0.0,
            moves,
        });
        let new_index: usize = self.top_moves.len() - 1;
        Self::rank(&mut self.top_moves, new_index, |a, b| a.moves.cmp(&b.moves))
    }

    /// Sort the ranking, cut it to [`BOARD_SIZE`] entries, and return the 1-based position of
    /// the entry that was at `new_index`.
    fn rank<F>(entries: &mut Vec<LeaderboardEntry>, new_index: usize, compare: F) -> Option<usize>
    where
        F: Fn(&LeaderboardEntry, &LeaderboardEntry) -> std::cmp::Ordering,
    {
        let mut indexed: Vec<(usize, LeaderboardEntry)> = entries.drain(..).enumerate().collect();
        // Stable sort: equal scores keep their arrival order
        indexed.sort_by(|(_, a), (_, b)| compare(a, b));
        indexed.truncate(BOARD_SIZE);

        let position: Option<usize> = indexed
            .iter()
            .position(|(i, _)| *i == new_index)
            .map(|p| p + 1);
        entries.extend(indexed.into_iter().map(|(_, e)| e));
        position
    }

    /// Whether the time would enter the time ranking.
    ///
    /// True when the ranking is not full, or when the time is strictly better than the worst
    /// time of the ranking.
    pub fn is_top_time(&self, time: f64) -> bool {
        if self.top_times.len() < BOARD_SIZE {
            return true;
        }
        let worst: f64 = self
            .top_times
            .iter()
            .map(|e| e.time)
            .fold(f64::NEG_INFINITY, f64::max);
        time < worst
    }

    /// Whether the move count would enter the moves ranking.
    pub fn is_top_move(&self, moves: i64) -> bool {
        match self.top_moves.iter().map(|e| e.moves).max() {
            Some(worst) if self.top_moves.len() >= BOARD_SIZE => moves < worst,
            _ => true,
        }
    }

    /// Which rankings the result makes it to, or None.
    ///
    /// A move count that [`Leaderboard::add_moves_entry`] would ignore never qualifies.
    pub fn qualify(&self, time: f64, moves: i64) -> Option<Qualification> {
        let top_time: bool = self.is_top_time(round_time(time));
        let top_move: bool = moves > 0 && self.is_top_move(moves);

        match (top_time, top_move) {
            (true, true) => Some(Qualification::Both),
            (true, false) => Some(Qualification::Time),
            (false, true) => Some(Qualification::Moves),
            (false, false) => None,
        }
    }

    /// Add the result to the rankings given by `qualification`.
    pub fn record(&mut self, player_name: &str, time: f64, moves: i64, qualification: Qualification) {
        if qualification.includes_time() {
            self.add_time_entry(player_name, time);
        }
        if qualification.includes_moves() {
            self.add_moves_entry(player_name, moves);
        }
    }

    /// Best times, fastest first.
    pub fn top_times(&self) -> &[LeaderboardEntry] {
        &self.top_times
    }

    /// Best move counts, lowest first.
    pub fn top_moves(&self) -> &[LeaderboardEntry] {
        &self.top_moves
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.top_times.is_empty() && self.top_moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player_name.as_str()).collect()
    }

    #[test]
    fn times_are_sorted_and_capped() {
        let mut board: Leaderboard = Leaderboard::new();
        assert_eq!(board.add_time_entry("A", 10.0), Some(1));
        assert_eq!(board.add_time_entry("B", 5.0), Some(1));
        assert_eq!(board.add_time_entry("C", 20.0), Some(3));
        assert_eq!(board.add_time_entry("D", 1.0), Some(1));
        assert_eq!(names(board.top_times()), vec!["D", "B", "A"]);
        assert!(!board.is_top_time(20.0));
        assert!(!board.is_top_time(10.0));
        assert!(board.is_top_time(4.0));
        assert_eq!(board.add_time_entry("E", 30.0), None);
        assert_eq!(board.top_times().len(), BOARD_SIZE);
    }

    #[test]
    fn equal_times_keep_arrival_order() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time_entry("first", 3.0);
        board.add_time_entry("second", 3.0);
        assert_eq!(board.add_time_entry("third", 3.0), Some(3));
        assert_eq!(board.add_time_entry("fourth", 3.0), None);
        assert_eq!(names(board.top_times()), vec!["first", "second", "third"]);
    }

    #[test]
    fn non_positive_moves_are_ignored() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_moves_entry("A", 12);
        let before: Leaderboard = board.clone();
        assert_eq!(board.add_moves_entry("B", 0), None);
        assert_eq!(board.add_moves_entry("C", -5), None);
        assert_eq!(board, before);
    }

    #[test]
    fn moves_are_sorted_and_capped() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_moves_entry("A", 40);
        board.add_moves_entry("B", 31);
        board.add_moves_entry("C", 63);
        assert!(board.is_top_move(62));
        assert!(!board.is_top_move(63));
        assert_eq!(board.add_moves_entry("D", 35), Some(2));
        assert_eq!(names(board.top_moves()), vec!["B", "D", "A"]);
    }

    #[test]
    fn empty_board_accepts_anything() {
        let board: Leaderboard = Leaderboard::new();
        assert!(board.is_top_time(1e9));
        assert!(board.is_top_move(1_000_000));
        assert!(board.is_empty());
    }

    #[test]
    fn qualification() {
        let mut board: Leaderboard = Leaderboard::new();
        for (name, time, moves) in [("A", 10.0, 10), ("B", 20.0, 20), ("C", 30.0, 30)] {
            board.add_time_entry(name, time);
            board.add_moves_entry(name, moves);
        }
        assert_eq!(board.qualify(5.0, 5), Some(Qualification::Both));
        assert_eq!(board.qualify(5.0, 50), Some(Qualification::Time));
        assert_eq!(board.qualify(50.0, 5), Some(Qualification::Moves));
        assert_eq!(board.qualify(50.0, 50), None);
        // Lights Out can be solved with the click that opens it
        assert_eq!(board.qualify(50.0, 0), None);

        board.record("Z", 5.0, 50, Qualification::Time);
        assert_eq!(names(board.top_times()), vec!["Z", "A", "B"]);
        assert_eq!(names(board.top_moves()), vec!["A", "B", "C"]);
    }

    #[test]
    fn times_are_rounded_and_names_cleaned() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time_entry(" Ann, the 2nd\n", 12.345_6);
        assert_eq!(board.top_times()[0].player_name, "Ann the 2nd");
        assert_eq!(board.top_times()[0].time, 12.35);
        board.add_time_entry("(Amy)", 20.0);
        assert_eq!(board.top_times()[1].player_name, "Amy");
    }
}
