/*
stopwatch.rs

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

//! Measure the time spent on a puzzle.
//!
//! The host reports the time that passed with [`Stopwatch::advance`]. The paused periods do
//! not count.

use std::time::Duration;

use crate::highscores::round_time;

/// Elapsed play time.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Time counted so far.
    elapsed: Duration,

    /// Whether [`Stopwatch::advance`] is ignored.
    paused: bool,
}

impl Stopwatch {
    /// Create a running [`Stopwatch`] object at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start again from zero.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.paused = false;
    }

    /// Stop counting.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Count again, the paused period excluded.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Add the time reported by the host. Ignored while paused.
    pub fn advance(&mut self, ms: u64) {
        if !self.is_paused() {
            self.elapsed += Duration::from_millis(ms);
        }
    }

    /// Elapsed time.
    pub fn duration(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed seconds, rounded to two decimals.
    pub fn seconds(&self) -> f64 {
        round_time(self.duration().as_secs_f64())
    }

    /// Elapsed time in minutes and seconds.
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let duration: u64 = self.duration().as_secs();
        (duration / 60, duration % 60)
    }
}
