/*
application.rs

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

//! Interactive game in the terminal.
//!
//! The application reads one command per line, turns it into an [`Action`] for the current
//! [`GameState`], and prints the new screen.

use log::{debug, info};
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config;
use crate::draw;
use crate::puzzles::PuzzleKind;
use crate::session::{Action, GameState, Item, Session, SessionConfig};

/// Terminal front end of a [`Session`] object.
pub struct EscaperoomApplication {
    session: Session,
}

impl EscaperoomApplication {
    /// Create an [`EscaperoomApplication`] object that stores the leaderboards in `data_dir`.
    pub fn new(data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        info!("{} {}", config::PKGNAME, config::VERSION);
        debug!("Data directory: {data_dir:?}");
        Ok(Self {
            session: Session::new(SessionConfig::new(data_dir))?,
        })
    }

    /// Play until the input ends or the player quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), Box<dyn Error>> {
        write!(output, "{}", draw::screen(&self.session))?;
        output.flush()?;

        let mut last_input: Instant = Instant::now();
        for line in input.lines() {
            let line: String = line?;
            let now: Instant = Instant::now();
            let elapsed: u64 = u64::try_from(now.duration_since(last_input).as_millis())
                .unwrap_or(u64::MAX);
            self.session.advance(elapsed);
            last_input = now;

            let command: &str = line.trim();
            if command.is_empty() {
                continue;
            }
            if is_quit(self.session.state(), command) {
                info!("Quitting");
                break;
            }

            match parse_command(self.session.state(), command) {
                Some(action) => {
                    if let Err(error) = self.session.apply(action) {
                        writeln!(output, "{error}")?;
                    }
                }
                None => writeln!(output, "Unknown command: {command}")?,
            }
            if let Some(message) = self.session.take_message() {
                writeln!(output, "{message}")?;
            }
            writeln!(output)?;
            write!(output, "{}", draw::screen(&self.session))?;
            output.flush()?;
        }
        Ok(())
    }
}

/// Whether the command ends the game. At the prompt every word is text, so only the menu
/// accepts `quit`.
fn is_quit(state: GameState, command: &str) -> bool {
    state == GameState::Menu && matches!(command, "quit" | "q" | "exit")
}

/// Parse two numbers separated by spaces.
fn parse_cell(command: &str) -> Option<(usize, usize)> {
    let mut words = command.split_whitespace();
    let row: usize = words.next()?.parse().ok()?;
    let col: usize = words.next()?.parse().ok()?;
    match words.next() {
        Some(_) => None,
        None => Some((row, col)),
    }
}

/// Turn a command line into an [`Action`] for the given state.
///
/// At the prompt, the commands start with `:` so that any word can be typed.
pub fn parse_command(state: GameState, command: &str) -> Option<Action> {
    if matches!(command, "back" | "b") && state != GameState::Prompting {
        return Some(Action::Back);
    }

    match state {
        GameState::Menu => match command {
            "new" => Some(Action::NewGame),
            "play" => Some(Action::FreePlay),
            "scores" => Some(Action::ShowLeaderboard),
            "continue" | "c" => Some(Action::Continue),
            _ => None,
        },
        GameState::Instructions | GameState::Victory => match command {
            "continue" | "c" => Some(Action::Continue),
            _ => None,
        },
        GameState::PuzzleMenu => {
            let index: usize = command.parse().ok()?;
            let kind: PuzzleKind = PuzzleKind::from_repr(u8::try_from(index.checked_sub(1)?).ok()?)?;
            Some(Action::Play(kind))
        }
        GameState::Leaderboard => None,
        GameState::Room => match command {
            "hanoi" => Some(Action::Play(PuzzleKind::Hanoi)),
            "lights" => Some(Action::Play(PuzzleKind::Lights)),
            "sliding" => Some(Action::Play(PuzzleKind::Sliding)),
            "clock" => Some(Action::OpenClock),
            "door" => Some(Action::OpenDoor),
            "left" => Some(Action::LockPreviousDial),
            "right" => Some(Action::LockNextDial),
            "up" => Some(Action::LockUp),
            "down" => Some(Action::LockDown),
            "take hand" => Some(Action::PickUp(Item::ClockHand)),
            "take pole" => Some(Action::PickUp(Item::Pole)),
            _ => None,
        },
        GameState::Sliding => {
            parse_cell(command).map(|(row, col)| Action::SelectTile { row, col })
        }
        GameState::Lights => {
            parse_cell(command).map(|(row, col)| Action::ToggleLight { row, col })
        }
        GameState::Hanoi => match command {
            "use" => Some(Action::UseItem),
            _ => command.parse().ok().map(Action::ClickPole),
        },
        GameState::Clock => match command {
            "up" | "+" => Some(Action::ClockUp),
            "down" | "-" => Some(Action::ClockDown),
            "switch" => Some(Action::ClockToggleHand),
            "use" => Some(Action::UseItem),
            _ => None,
        },
        GameState::Prompting => match command {
            ":ok" => Some(Action::Submit),
            ":erase" => Some(Action::Backspace),
            ":back" => Some(Action::Back),
            _ => Some(Action::Type(command.to_string())),
        },
    }
}
