/*
config.rs

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

//! Build constants and default puzzle parameters.

pub static PKGNAME: &str = env!("CARGO_PKG_NAME");
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Leaderboard file for the Tower of Hanoi.
pub static HANOI_LEADERBOARD: &str = "hanoi_leaderboard.txt";

/// Leaderboard file for Lights Out.
pub static LIGHTS_LEADERBOARD: &str = "lights_leaderboard.txt";

/// Leaderboard file for the sliding puzzle.
pub static SLIDING_LEADERBOARD: &str = "sliding_leaderboard.txt";

/// Number of rows (and columns) of the sliding puzzle.
pub const SLIDING_GRID_SIZE: usize = 3;

/// Number of rows (and columns) of the Lights Out puzzle.
pub const LIGHTS_GRID_SIZE: usize = 5;

/// Number of rings in the Tower of Hanoi.
pub const HANOI_RING_COUNT: usize = 6;

/// Longest player name or passcode that the prompt accepts.
pub const MAX_INPUT_LEN: usize = 10;

/// Digits that open the safe in the room.
pub const LOCK_COMBINATION: [u8; 3] = [3, 1, 4];

/// Passcode for the door.
pub static DOOR_PASSCODE: &str = "BOLT";

/// Time the wall clock must show, as (hour, minute).
pub const CLOCK_TARGET: (u8, u8) = (8, 20);
