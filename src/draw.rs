/*
draw.rs

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

//! Render the game screens as plain text.
//!
//! Each function returns the text of one element, lines separated by `\n`. [`screen`] builds
//! the full screen for the current state of a [`Session`] object.

use crate::highscores::Leaderboard;
use crate::puzzles::clock::{Clock, Hand};
use crate::puzzles::combination_lock::CombinationLock;
use crate::puzzles::hanoi::{MIDDLE_POLE, TowerOfHanoi};
use crate::puzzles::lights_out::LightsOut;
use crate::puzzles::sliding::Sliding;
use crate::puzzles::{Puzzle, PuzzleKind};
use crate::session::{GameState, Item, Mode, Prompt, Session};

/// Sliding puzzle grid. The blank is shown as dots.
pub fn sliding(puzzle: &Sliding) -> String {
    let n: usize = puzzle.grid_size();
    let width: usize = (n * n - 1).to_string().len();
    let mut out: String = String::new();

    for row in 0..n {
        let cells: Vec<String> = (0..n)
            .map(|col| match puzzle.tile(row, col) {
                Some(0) | None => ".".repeat(width),
                Some(v) => format!("{v:>width$}"),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Lights Out grid: `#` for lights on, `.` for lights off.
pub fn lights(puzzle: &LightsOut) -> String {
    let n: usize = puzzle.grid_size();
    let mut out: String = String::new();

    for row in 0..n {
        out.extend((0..n).map(|col| match puzzle.is_on(row, col) {
            Some(true) => '#',
            _ => '.',
        }));
        out.push('\n');
    }
    out
}

/// Tower of Hanoi, one line per pole with the rings from bottom to top.
pub fn hanoi(puzzle: &TowerOfHanoi) -> String {
    let mut out: String = String::new();

    for (i, pole) in puzzle.poles().iter().enumerate() {
        let marker: char = if puzzle.selected_pole() == Some(i) { '*' } else { ' ' };
        if i == MIDDLE_POLE && !puzzle.is_middle_pole_fixed() {
            out.push_str(&format!("{marker}{i} (missing)\n"));
            continue;
        }
        let rings: Vec<String> = pole.rings().iter().map(|r| r.size.to_string()).collect();
        out.push_str(&format!("{marker}{i} |{}\n", rings.join(" ")));
    }
    out
}

/// Wall clock time and selected hand.
pub fn clock(clock: &Clock) -> String {
    let (hour, minute) = clock.time();
    let hand: &str = match (clock.is_fixed(), clock.selected_hand()) {
        (false, _) => "hour hand, the minute hand is missing",
        (true, Hand::Hour) => "hour hand",
        (true, Hand::Minute) => "minute hand",
    };
    format!("{hour:>2}:{minute:02} ({hand})\n")
}

/// Dials of the safe, the selected one between brackets.
pub fn lock(lock: &CombinationLock) -> String {
    let dials: Vec<String> = lock
        .dials()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            if i == lock.selected_dial() {
                format!("[{d}]")
            } else {
                format!(" {d} ")
            }
        })
        .collect();
    let state: &str = if lock.is_open() { "open" } else { "closed" };
    format!("Safe ({state}): {}\n", dials.join(""))
}

/// Both rankings of a puzzle.
pub fn leaderboard(kind: PuzzleKind, board: &Leaderboard) -> String {
    let mut out: String = format!("{kind}\n  Best times:\n");

    if board.top_times().is_empty() {
        out.push_str("    none\n");
    }
    for (i, e) in board.top_times().iter().enumerate() {
        out.push_str(&format!("    {}. {:<10} {:>8.2}s\n", i + 1, e.player_name, e.time));
    }
    out.push_str("  Best moves:\n");
    if board.top_moves().is_empty() {
        out.push_str("    none\n");
    }
    for (i, e) in board.top_moves().iter().enumerate() {
        out.push_str(&format!("    {}. {:<10} {:>8} moves\n", i + 1, e.player_name, e.moves));
    }
    out
}

/// Puzzle title, moves, and elapsed time.
fn status(session: &Session, puzzle: &dyn Puzzle) -> String {
    let (minutes, seconds) = session.stopwatch().minutes_seconds();
    let moves: i64 = puzzle.move_count().max(0);
    format!("{}  Moves: {moves}  Time: {minutes:02}:{seconds:02}\n", puzzle.kind())
}

/// The full screen for the session state, followed by the available commands.
pub fn screen(session: &Session) -> String {
    let mut out: String = String::new();

    match session.state() {
        GameState::Menu => {
            out.push_str("ESCAPE ROOM\n\n");
            if session.can_resume() {
                out.push_str("Commands: continue, new, play, scores, quit\n");
            } else {
                out.push_str("Commands: new, play, scores, quit\n");
            }
        }
        GameState::Instructions => {
            out.push_str(
                "You are locked in a room. Find the four letters of the door passcode.\n\
                 Each puzzle you solve reveals one letter. Some of them need repairs first.\n\n",
            );
            out.push_str("Commands: continue, back\n");
        }
        GameState::PuzzleMenu => {
            if let Some(r) = session.last_result() {
                out.push_str(&format!(
                    "{} solved in {:.2}s and {} moves.\n\n",
                    r.kind, r.time, r.moves
                ));
            }
            for (i, kind) in PuzzleKind::ALL.iter().enumerate() {
                out.push_str(&format!("{}. {kind}\n", i + 1));
            }
            out.push_str("\nCommands: <number>, back\n");
        }
        GameState::Leaderboard => {
            for kind in PuzzleKind::ALL {
                out.push_str(&leaderboard(kind, session.leaderboard(kind)));
                out.push('\n');
            }
            out.push_str("Commands: back\n");
        }
        GameState::Room => {
            out.push_str(&format!("Passcode: {}\n", session.passcode_hint()));
            out.push_str(&lock(session.lock()));
            let holding: String = match session.held_item() {
                Some(item) => item.to_string(),
                None => "nothing".to_string(),
            };
            out.push_str(&format!("Carrying: {holding}\n\n"));
            out.push_str(
                "Commands: hanoi, lights, sliding, clock, door, \
                 left, right, up, down, take hand, take pole, back\n",
            );
        }
        GameState::Sliding => {
            out.push_str(&status(session, session.puzzle(PuzzleKind::Sliding)));
            out.push_str(&sliding(session.sliding()));
            out.push_str("\nCommands: <row> <col>, back\n");
        }
        GameState::Lights => {
            out.push_str(&status(session, session.puzzle(PuzzleKind::Lights)));
            out.push_str(&lights(session.lights()));
            out.push_str("\nCommands: <row> <col>, back\n");
        }
        GameState::Hanoi => {
            out.push_str(&status(session, session.puzzle(PuzzleKind::Hanoi)));
            out.push_str(&hanoi(session.hanoi()));
            out.push_str("\nCommands: <pole>");
            if session.mode() == Mode::Campaign && session.held_item() == Some(Item::Pole) {
                out.push_str(", use");
            }
            out.push_str(", back\n");
        }
        GameState::Clock => {
            out.push_str(&clock(session.clock()));
            out.push_str("\nCommands: up, down, switch");
            if session.held_item() == Some(Item::ClockHand) {
                out.push_str(", use");
            }
            out.push_str(", back\n");
        }
        GameState::Prompting => {
            let label: &str = match session.prompt() {
                Some(Prompt::Passcode) => "Passcode",
                _ => "New top score! Your name",
            };
            out.push_str(&format!("{label}: {}\n", session.input_text()));
            out.push_str("Commands: <text>, :erase, :ok, :back\n");
        }
        GameState::Victory => {
            let (minutes, seconds) = session.stopwatch().minutes_seconds();
            out.push_str(&format!(
                "The door opens. You escaped in {minutes:02}:{seconds:02}!\n\n"
            ));
            out.push_str("Commands: continue\n");
        }
    }
    out
}
