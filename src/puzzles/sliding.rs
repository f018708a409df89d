/*
sliding.rs

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

//! Sliding tile puzzle.
//!
//! The grid holds the values `0..grid_size²` in row-major order, `0` being the blank.
//! The player selects a tile next to the blank (no diagonals) and the tile slides into the blank.
//! The puzzle is solved when the tiles read `1, 2, ..., grid_size² - 1` with the blank last.

use log::debug;

use super::{Puzzle, PuzzleError, PuzzleKind};
use crate::generator::sliding::SlidingGenerator;

/// Sliding puzzle state.
#[derive(Debug, Clone)]
pub struct Sliding {
    /// Number of rows (and columns).
    grid_size: usize,

    /// Tile values in row-major order.
    tiles: Vec<usize>,

    /// Row and column of the blank.
    blank: (usize, usize),

    /// Number of tiles the player moved.
    move_count: i64,
}

impl Sliding {
    /// Create a [`Sliding`] object with a random layout that can be solved.
    pub fn new(grid_size: usize) -> Result<Self, PuzzleError> {
        let mut generator: SlidingGenerator =
            SlidingGenerator::new(grid_size).map_err(|_| PuzzleError::InvalidGridSize)?;
        Self::from_layout(grid_size, generator.generate())
    }

    /// Create a [`Sliding`] object from a given row-major layout.
    ///
    /// The layout is not checked for solvability.
    pub fn from_layout(grid_size: usize, tiles: Vec<usize>) -> Result<Self, PuzzleError> {
        if grid_size == 0 {
            return Err(PuzzleError::InvalidGridSize);
        }
        let cells: usize = grid_size * grid_size;
        let mut seen: Vec<bool> = vec![false; cells];
        if tiles.len() != cells {
            return Err(PuzzleError::InvalidLayout(cells));
        }
        for t in &tiles {
            if *t >= cells || seen[*t] {
                return Err(PuzzleError::InvalidLayout(cells));
            }
            seen[*t] = true;
        }

        let blank_index: usize = tiles
            .iter()
            .position(|t| *t == 0)
            .ok_or(PuzzleError::InvalidLayout(cells))?;

        Ok(Self {
            grid_size,
            tiles,
            blank: (blank_index / grid_size, blank_index % grid_size),
            move_count: 0,
        })
    }

    /// Number of rows (and columns).
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[cfg(test)]
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    /// Value of the tile at the given position, or None if outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.grid_size || col >= self.grid_size {
            return None;
        }
        Some(self.tiles[row * self.grid_size + col])
    }

    /// Whether the tile at the given position shares an edge with the blank.
    fn is_adjacent_to_blank(&self, row: usize, col: usize) -> bool {
        let (blank_row, blank_col) = self.blank;
        (blank_row.abs_diff(row) == 1 && blank_col == col)
            || (blank_col.abs_diff(col) == 1 && blank_row == row)
    }

    /// Slide the tile at the given position into the blank.
    ///
    /// Return whether the tile moved. Selecting the blank, a tile that is not next to the blank,
    /// or any tile once the puzzle is solved does nothing.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::OutOfBounds`] if the position is outside the grid.
    pub fn try_select_tile(&mut self, row: usize, col: usize) -> Result<bool, PuzzleError> {
        if row >= self.grid_size || col >= self.grid_size {
            return Err(PuzzleError::OutOfBounds { row, col });
        }
        if self.is_solved() || !self.is_adjacent_to_blank(row, col) {
            return Ok(false);
        }

        let (blank_row, blank_col) = self.blank;
        self.tiles.swap(
            blank_row * self.grid_size + blank_col,
            row * self.grid_size + col,
        );
        self.blank = (row, col);
        self.move_count += 1;
        debug!("Sliding: tile at ({row}, {col}) moved, {} move(s)", self.move_count);
        Ok(true)
    }
}

impl Puzzle for Sliding {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Sliding
    }

    fn is_solved(&self) -> bool {
        let last: usize = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(i, t)| *t == i + 1)
    }

    fn move_count(&self) -> i64 {
        self.move_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_layout_is_a_full_permutation() {
        let sliding: Sliding = Sliding::new(3).unwrap();
        let mut sorted: Vec<usize> = sliding.tiles().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<usize>>());
        assert_eq!(sliding.move_count(), 0);
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        assert_eq!(
            Sliding::from_layout(0, vec![]).err(),
            Some(PuzzleError::InvalidGridSize)
        );
        assert_eq!(
            Sliding::from_layout(2, vec![0, 1, 2]).err(),
            Some(PuzzleError::InvalidLayout(4))
        );
        assert_eq!(
            Sliding::from_layout(2, vec![0, 1, 1, 3]).err(),
            Some(PuzzleError::InvalidLayout(4))
        );
        assert_eq!(
            Sliding::from_layout(2, vec![0, 1, 2, 4]).err(),
            Some(PuzzleError::InvalidLayout(4))
        );
    }

    #[test]
    fn only_tiles_next_to_the_blank_move() {
        let mut sliding: Sliding =
            Sliding::from_layout(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();

        // Diagonal and far tiles do not move
        assert!(!sliding.try_select_tile(1, 0).unwrap());
        assert!(!sliding.try_select_tile(0, 1).unwrap());
        // The blank itself does not move
        assert!(!sliding.try_select_tile(2, 1).unwrap());
        assert_eq!(sliding.move_count(), 0);

        assert!(sliding.try_select_tile(2, 2).unwrap());
        assert_eq!(sliding.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(sliding.move_count(), 1);
        assert!(sliding.is_solved());
    }

    #[test]
    fn solved_puzzle_ignores_selection() {
        let mut sliding: Sliding = Sliding::from_layout(2, vec![1, 2, 3, 0]).unwrap();
        assert!(sliding.is_solved());
        assert!(!sliding.try_select_tile(1, 0).unwrap());
        assert_eq!(sliding.tiles(), &[1, 2, 3, 0]);
        assert_eq!(sliding.move_count(), 0);
    }

    #[test]
    fn out_of_bounds_selection_is_an_error() {
        let mut sliding: Sliding = Sliding::from_layout(2, vec![1, 0, 3, 2]).unwrap();
        assert_eq!(
            sliding.try_select_tile(2, 0),
            Err(PuzzleError::OutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(sliding.tile(5, 5), None);
        assert_eq!(sliding.tile(0, 1), Some(0));
    }

    #[test]
    fn single_cell_grid_is_solved() {
        let sliding: Sliding = Sliding::new(1).unwrap();
        assert!(sliding.is_solved());
    }

    #[test]
    fn moves_count_up_and_down_the_grid() {
        let mut sliding: Sliding =
            Sliding::from_layout(3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert!(!sliding.is_solved());
        assert!(sliding.try_select_tile(2, 1).unwrap());
        // Move 5 down and back up
        assert!(sliding.try_select_tile(1, 1).unwrap());
        assert_eq!(sliding.tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert!(sliding.try_select_tile(2, 1).unwrap());
        assert!(sliding.try_select_tile(2, 2).unwrap());
        assert!(sliding.is_solved());
        assert_eq!(sliding.move_count(), 4);
    }
}
