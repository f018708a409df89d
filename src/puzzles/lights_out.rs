/*
lights_out.rs

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

//! Lights Out puzzle.
//!
//! Toggling a light also toggles the lights directly above, below, left, and right of it.
//! Neighbors outside the grid are skipped; the grid does not wrap around.
//! The puzzle is solved when every light is off (`false`).
//!
//! The starting layout is built by toggling random lights of a grid that is all off.
//! Because a toggle undoes itself, replaying the same toggles solves the puzzle, so every
//! generated layout can be solved.

use log::debug;
use rand::Rng;

use super::{Puzzle, PuzzleError, PuzzleKind};

/// Offsets of the lights toggled by a click, the clicked light included.
const STENCIL: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Lights Out puzzle state.
#[derive(Debug, Clone)]
pub struct LightsOut {
    /// Number of rows (and columns).
    grid_size: usize,

    /// Light states in row-major order. `true` is on.
    lights: Vec<bool>,

    /// Number of player toggles.
    /// Starts at -1 because the click that opens the puzzle is counted as a toggle.
    move_count: i64,
}

impl LightsOut {
    /// Create a [`LightsOut`] object with a random layout.
    pub fn new(grid_size: usize) -> Result<Self, PuzzleError> {
        Self::with_rng(grid_size, &mut rand::rng())
    }

    /// Same as [`LightsOut::new`], but draw the random numbers from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(grid_size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        if grid_size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }
        let mut puzzle: LightsOut = Self {
            grid_size,
            lights: vec![false; grid_size * grid_size],
            move_count: -1,
        };
        puzzle.scramble(rng);
        Ok(puzzle)
    }

    /// Create a [`LightsOut`] object from the given row-major light states.
    #[cfg(test)]
    pub fn from_lights(grid_size: usize, lights: Vec<bool>) -> Result<Self, PuzzleError> {
        if grid_size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }
        if lights.len() != grid_size * grid_size {
            return Err(PuzzleError::InvalidLayout(grid_size * grid_size));
        }
        Ok(Self {
            grid_size,
            lights,
            move_count: -1,
        })
    }

    /// Toggle a random number of random lights, starting from the current state.
    ///
    /// The number of toggles is between `grid_size² / 2` (included) and `grid_size²` (excluded).
    /// A larger grid that ends up all off is scrambled again, so the player always gets
    /// something to solve.
    fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cells: usize = self.grid_size * self.grid_size;

        loop {
            let toggle_count: usize = rng.random_range(cells / 2..cells);
            for _ in 0..toggle_count {
                let row: usize = rng.random_range(0..self.grid_size);
                let col: usize = rng.random_range(0..self.grid_size);
                self.flip(row, col);
            }
            debug!("Lights Out: scrambled with {toggle_count} toggle(s)");
            if self.grid_size == 1 || !self.is_solved() {
                break;
            }
        }
    }

    /// Flip the given light and its neighbors inside the grid.
    fn flip(&mut self, row: usize, col: usize) {
        for (dr, dc) in STENCIL {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < self.grid_size && c < self.grid_size {
                let i: usize = r * self.grid_size + c;
                self.lights[i] = !self.lights[i];
            }
        }
    }

    /// Player click on a light: flip it and its neighbors, and count the move.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::OutOfBounds`] if the position is outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), PuzzleError> {
        if row >= self.grid_size || col >= self.grid_size {
            return Err(PuzzleError::OutOfBounds { row, col });
        }
        self.flip(row, col);
        self.move_count += 1;
        Ok(())
    }

    /// Number of rows (and columns).
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Whether the given light is on, or None if outside the grid.
    pub fn is_on(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.grid_size || col >= self.grid_size {
            return None;
        }
        Some(self.lights[row * self.grid_size + col])
    }
}

impl Puzzle for LightsOut {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Lights
    }

    fn is_solved(&self) -> bool {
        self.lights.iter().all(|on| !*on)
    }

    fn move_count(&self) -> i64 {
        self.move_count
    }
}
