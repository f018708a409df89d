/*
main.rs

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

mod application;
mod cli_options;
mod config;
mod draw;
mod generator;
mod highscores;
mod puzzles;
mod saver;
mod session;
mod stopwatch;
mod text_input;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use self::application::EscaperoomApplication;
use self::cli_options::Command;

fn main() -> ExitCode {
    let data_dir: PathBuf = match cli_options::parse() {
        Command::Exit(ret) => return ExitCode::from(ret),
        Command::Play { data_dir } => data_dir,
    };

    let mut app: EscaperoomApplication = match EscaperoomApplication::new(data_dir) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let stdin: io::Stdin = io::stdin();
    let mut stdout: io::Stdout = io::stdout();
    match app.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
