/*
puzzles.rs

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

//! Puzzle models.
//!
//! The three scored puzzles, [`sliding::Sliding`], [`lights_out::LightsOut`], and
//! [`hanoi::TowerOfHanoi`], implement the [`Puzzle`] trait so that the session can ask whether
//! they are solved and how many moves the player made, without knowing which puzzle it is.
//!
//! The room also has two puzzles that are not scored: the wall [`clock::Clock`] and the
//! [`combination_lock::CombinationLock`] of the safe.

pub mod clock;
pub mod combination_lock;
pub mod hanoi;
pub mod lights_out;
pub mod sliding;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;
use thiserror::Error;

use crate::config;

/// Errors raised when building or playing a grid puzzle.
#[derive(Error, Debug, PartialEq)]
pub enum PuzzleError {
    /// A grid needs at least one row.
    #[error("the grid size must be at least 1")]
    InvalidGridSize,

    /// The layout does not hold each value of `0..size²` exactly once.
    #[error("the layout is not a permutation of 0..{0}")]
    InvalidLayout(usize),

    /// The cell is outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// The scored puzzles. Each one has its own leaderboard.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr,
)]
#[repr(u8)]
pub enum PuzzleKind {
    Hanoi,
    Lights,
    Sliding,
}

impl PuzzleKind {
    /// All the puzzle kinds, in menu order.
    pub const ALL: [PuzzleKind; 3] = [PuzzleKind::Hanoi, PuzzleKind::Lights, PuzzleKind::Sliding];

    /// Name of the leaderboard file for this puzzle.
    pub fn leaderboard_file(&self) -> &'static str {
        match self {
            PuzzleKind::Hanoi => config::HANOI_LEADERBOARD,
            PuzzleKind::Lights => config::LIGHTS_LEADERBOARD,
            PuzzleKind::Sliding => config::SLIDING_LEADERBOARD,
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleKind::Hanoi => write!(f, "Tower of Hanoi"),
            PuzzleKind::Lights => write!(f, "Lights Out"),
            PuzzleKind::Sliding => write!(f, "Sliding Puzzle"),
        }
    }
}

/// What the session needs to know about a scored puzzle.
pub trait Puzzle {
    /// Which puzzle this is.
    fn kind(&self) -> PuzzleKind;

    /// Whether the puzzle is solved.
    fn is_solved(&self) -> bool;

    /// Number of moves the player made so far.
    fn move_count(&self) -> i64;
}
