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

//! Generate a random, solvable sliding puzzle layout.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;
use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum GeneratorError {
    /// A grid needs at least one row.
    #[error("the grid size must be at least 1")]
    InvalidGridSize,
}

/// [`SlidingGenerator`] object.
pub struct SlidingGenerator {
    /// Number of rows (and columns) in the grid.
    pub grid_size: usize,

    /// Number of shuffles it took to generate the last layout.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last layout.
    pub duration: f32,
}

impl SlidingGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The method returns an error if `grid_size` is 0.
    pub fn new(grid_size: usize) -> Result<Self, GeneratorError> {
        if grid_size == 0 {
            return Err(GeneratorError::InvalidGridSize);
        }
        Ok(Self {
            grid_size,
            iteration: 0,
            duration: 0.0,
        })
    }

    /// Generate and return a random layout that can be solved.
    ///
    /// The layout is a row-major list of the values `0..grid_size²`, where `0` is the blank.
    pub fn generate(&mut self) -> Vec<usize> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Same as [`SlidingGenerator::generate`], but draw the random numbers from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<usize> {
        let start: Instant = Instant::now();
        let mut tiles: Vec<usize> = (0..self.grid_size * self.grid_size).collect();

        // About half the permutations are solvable, so this loop is short
        self.iteration = 0;
        loop {
            tiles.shuffle(rng);
            self.iteration += 1;
            if is_solvable(&tiles, self.grid_size) {
                break;
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Sliding layout {tiles:?} after {} shuffle(s) in {}s",
            self.iteration, self.duration
        );
        tiles
    }
}

/// Return the number of pairs of numbered tiles that are out of order.
///
/// The blank (`0`) is ignored.
pub fn count_inversions(tiles: &[usize]) -> usize {
    let mut inversions: usize = 0;

    for (i, a) in tiles.iter().enumerate() {
        if *a == 0 {
            continue;
        }
        inversions += tiles[i + 1..].iter().filter(|b| **b != 0 && *b < a).count();
    }
    inversions
}

/// Whether the row-major layout `tiles` can be brought back to `1, 2, ..., 0` by sliding tiles
/// into the blank.
///
/// With an odd width, the layout is solvable when the number of inversions is even.
/// With an even width, the parity of the blank row, counted from the bottom starting at 1, also
/// matters: on an even row the inversions must be odd, on an odd row they must be even.
pub fn is_solvable(tiles: &[usize], grid_size: usize) -> bool {
    let inversions: usize = count_inversions(tiles);

    if grid_size % 2 != 0 {
        return inversions % 2 == 0;
    }

    let blank_index: usize = match tiles.iter().position(|t| *t == 0) {
        Some(i) => i,
        None => return false,
    };
    let blank_row_from_bottom: usize = grid_size - blank_index / grid_size;

    if blank_row_from_bottom % 2 == 0 {
        inversions % 2 != 0
    } else {
        inversions % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_grid_size_is_rejected() {
        assert_eq!(
            SlidingGenerator::new(0).err(),
            Some(GeneratorError::InvalidGridSize)
        );
    }

    #[test]
    fn single_cell_grid_is_the_blank() {
        let mut generator: SlidingGenerator = SlidingGenerator::new(1).unwrap();
        assert_eq!(generator.generate(), vec![0]);
        assert!(is_solvable(&[0], 1));
    }

    #[test]
    fn generated_3x3_layouts_are_permutations_and_solvable() {
        let mut generator: SlidingGenerator = SlidingGenerator::new(3).unwrap();

        for _ in 0..2000 {
            let tiles: Vec<usize> = generator.generate();
            let mut sorted: Vec<usize> = tiles.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<usize>>());
            assert_eq!(tiles.iter().filter(|t| **t == 0).count(), 1);
            assert!(is_solvable(&tiles, 3), "unsolvable layout {tiles:?}");
        }
    }

    #[test]
    fn generated_4x4_layouts_are_solvable() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut generator: SlidingGenerator = SlidingGenerator::new(4).unwrap();

        for _ in 0..10_000 {
            let tiles: Vec<usize> = generator.generate_with_rng(&mut rng);
            assert!(is_solvable(&tiles, 4), "unsolvable layout {tiles:?}");
        }
    }

    #[test]
    fn about_half_of_raw_shuffles_are_solvable() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);

        for grid_size in [3, 4] {
            let mut tiles: Vec<usize> = (0..grid_size * grid_size).collect();
            let mut solvable: usize = 0;
            for _ in 0..10_000 {
                tiles.shuffle(&mut rng);
                if is_solvable(&tiles, grid_size) {
                    solvable += 1;
                }
            }
            assert!(
                (4000..6000).contains(&solvable),
                "{solvable} solvable shuffles out of 10000 for size {grid_size}"
            );
        }
    }

    #[test]
    fn inversions_ignore_the_blank() {
        assert_eq!(count_inversions(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 0);
        assert_eq!(count_inversions(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), 0);
        assert_eq!(count_inversions(&[2, 1, 3, 4, 5, 6, 7, 8, 0]), 1);
        assert_eq!(count_inversions(&[8, 7, 6, 5, 4, 3, 2, 1, 0]), 28);
    }

    #[test]
    fn parity_rules() {
        // Odd width: swapping two tiles of the solved layout makes it unsolvable
        assert!(is_solvable(&[1, 2, 3, 4, 5, 6, 7, 8, 0], 3));
        assert!(!is_solvable(&[2, 1, 3, 4, 5, 6, 7, 8, 0], 3));

        // Even width: the solved layout has the blank on row 1 from the bottom
        let solved: Vec<usize> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];
        assert!(is_solvable(&solved, 4));

        // The famous 14-15 swap cannot be solved
        let swapped: Vec<usize> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0];
        assert!(!is_solvable(&swapped, 4));

        // Sliding tile 12 down adds three inversions and puts the blank on row 2
        let moved_up: Vec<usize> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12];
        assert!(is_solvable(&moved_up, 4));
    }
}
