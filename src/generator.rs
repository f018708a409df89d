/*
generator.rs

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

//! Generate random starting layouts for the puzzles.
//!
//! The sliding puzzle cannot start from any permutation of its tiles: half of them cannot be
//! solved with single slides into the blank.
//! A [`sliding::SlidingGenerator`] object shuffles the tiles and keeps shuffling until the
//! inversion parity says that the layout can be solved.
//! Use its [`sliding::SlidingGenerator::generate`] method to get a new layout.
//!
//! The Lights Out puzzle does not need a generator: its layout is built by replaying random
//! toggles from the solved state (see [`crate::puzzles::lights_out`]).

pub mod sliding;
