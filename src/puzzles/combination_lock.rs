/*
combination_lock.rs

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

//! Three-dial combination lock of the safe.

use log::debug;

/// Number of dials.
pub const NUM_DIALS: usize = 3;

/// Combination lock state.
#[derive(Debug, Clone)]
pub struct CombinationLock {
    /// Digit shown by each dial.
    dials: [u8; NUM_DIALS],

    /// Dial changed by [`CombinationLock::increment`] and [`CombinationLock::decrement`].
    selected: usize,

    /// Digits that open the lock.
    combination: [u8; NUM_DIALS],

    /// Once open, the lock stays open.
    open: bool,
}

impl CombinationLock {
    /// Create a [`CombinationLock`] object with all dials on 0.
    pub fn new(combination: [u8; NUM_DIALS]) -> Self {
        Self {
            dials: [0; NUM_DIALS],
            selected: 0,
            combination: combination.map(|d| d % 10),
            open: false,
        }
    }

    /// Select the dial on the right, wrapping to the first dial.
    pub fn next_dial(&mut self) {
        self.selected = (self.selected + 1) % NUM_DIALS;
    }

    /// Select the dial on the left, wrapping to the last dial.
    pub fn previous_dial(&mut self) {
        self.selected = (self.selected + NUM_DIALS - 1) % NUM_DIALS;
    }

    /// Turn the selected dial up, 9 wrapping to 0.
    pub fn increment(&mut self) {
        self.dials[self.selected] = (self.dials[self.selected] + 1) % 10;
        self.check();
    }

    /// Turn the selected dial down, 0 wrapping to 9.
    pub fn decrement(&mut self) {
        self.dials[self.selected] = (self.dials[self.selected] + 9) % 10;
        self.check();
    }

    fn check(&mut self) {
        if !self.open && self.dials == self.combination {
            debug!("Lock: open");
            self.open = true;
        }
    }

    /// Digits on the dials.
    pub fn dials(&self) -> [u8; NUM_DIALS] {
        self.dials
    }

    /// Index of the selected dial.
    pub fn selected_dial(&self) -> usize {
        self.selected
    }

    /// Whether the lock has been opened.
    pub fn is_open(&self) -> bool {
        self.open
    }
}
