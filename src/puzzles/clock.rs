/*
clock.rs

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

//! Wall clock puzzle.
//!
//! The player sets the clock to a target time with the hour and minute hands.
//! The minute hand is missing until the player fixes the clock, so only the hour hand moves
//! before that.

use log::debug;

/// Hour hand positions on the dial.
const HOUR_STEPS: u8 = 12;

/// Minute hand positions on the dial.
const MINUTE_STEPS: u8 = 60;

/// Which hand the arrows move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hand {
    Hour,
    Minute,
}

/// Clock state.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Hour hand position, `0` pointing at twelve.
    hour: u8,

    /// Minute hand position, `0` pointing at twelve.
    minute: u8,

    /// Hand moved by [`Clock::increment`] and [`Clock::decrement`].
    selected: Hand,

    /// Whether the minute hand is installed.
    fixed: bool,

    /// Whether the clock showed the target time. Stays set until [`Clock::reset`].
    solved: bool,

    /// Time to show, as (hour, minute).
    target: (u8, u8),
}

impl Clock {
    /// Create a [`Clock`] object set to twelve o'clock.
    ///
    /// `target` is the (hour, minute) to reach, hour between 1 and 12.
    pub fn new(target: (u8, u8), fixed: bool) -> Self {
        Self {
            hour: 0,
            minute: 0,
            selected: Hand::Hour,
            fixed,
            solved: false,
            target: (target.0 % HOUR_STEPS, target.1 % MINUTE_STEPS),
        }
    }

    /// Move the selected hand one step clockwise.
    pub fn increment(&mut self) {
        match self.selected {
            Hand::Hour => self.hour = (self.hour + 1) % HOUR_STEPS,
            Hand::Minute => self.minute = (self.minute + 1) % MINUTE_STEPS,
        }
        self.check();
    }

    /// Move the selected hand one step counterclockwise.
    pub fn decrement(&mut self) {
        match self.selected {
            Hand::Hour => self.hour = (self.hour + HOUR_STEPS - 1) % HOUR_STEPS,
            Hand::Minute => self.minute = (self.minute + MINUTE_STEPS - 1) % MINUTE_STEPS,
        }
        self.check();
    }

    /// Switch between the hour and the minute hands. Only possible once the clock is fixed.
    pub fn toggle_hand(&mut self) {
        if !self.fixed {
            return;
        }
        self.selected = match self.selected {
            Hand::Hour => Hand::Minute,
            Hand::Minute => Hand::Hour,
        };
    }

    fn check(&mut self) {
        if !self.solved && (self.hour, self.minute) == self.target {
            debug!("Clock: set to the target time");
            self.solved = true;
        }
    }

    /// Install the minute hand.
    pub fn fix(&mut self) {
        debug!("Clock: minute hand installed");
        self.fixed = true;
    }

    /// Whether the minute hand is installed.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Whether the clock has shown the target time.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Hand moved by the arrows.
    pub fn selected_hand(&self) -> Hand {
        self.selected
    }

    /// Time on the dial as (hour between 1 and 12, minute).
    pub fn time(&self) -> (u8, u8) {
        let hour: u8 = if self.hour == 0 { HOUR_STEPS } else { self.hour };
        (hour, self.minute)
    }

    /// Put both hands back on twelve and remove the minute hand.
    pub fn reset(&mut self) {
        self.hour = 0;
        self.minute = 0;
        self.selected = Hand::Hour;
        self.fixed = false;
        self.solved = false;
    }
}
