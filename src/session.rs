/*
session.rs

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

//! Game state machine.
//!
//! A [`Session`] object owns the puzzle models, the leaderboards, and the current
//! [`GameState`]. The host feeds it [`Action`] values with [`Session::apply`] and renders the
//! state it returns.
//!
//! There are two ways to play:
//!
//! * Free play, from the puzzle menu. Each scored puzzle starts fresh with its own stopwatch.
//!   When the puzzle is solved, the result goes to the puzzle leaderboard if it qualifies, after
//!   the player enters a name.
//! * The escape room campaign. The puzzles keep their state between visits, and solving them
//!   reveals the letters of the door passcode. Some puzzles need repairs first:
//!   the safe holds the minute hand of the wall clock, and the clock, once set to the right
//!   time, releases the missing middle pole of the Tower of Hanoi.

use log::debug;
use std::fmt;
use std::path::PathBuf;
use strum_macros::Display;
use thiserror::Error;

use crate::config;
use crate::highscores::{Leaderboard, Qualification};
use crate::puzzles::clock::Clock;
use crate::puzzles::combination_lock::CombinationLock;
use crate::puzzles::hanoi::{ClickOutcome, MIDDLE_POLE, PoleError, TowerOfHanoi};
use crate::puzzles::lights_out::LightsOut;
use crate::puzzles::sliding::Sliding;
use crate::puzzles::{Puzzle, PuzzleError, PuzzleKind};
use crate::saver::leaderboard::LeaderboardStore;
use crate::stopwatch::Stopwatch;
use crate::text_input::TextInput;

/// Errors returned by [`Session::apply`]. The session stays usable.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Pole(#[from] PoleError),
}

/// Screens of the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    PuzzleMenu,
    Room,
    Leaderboard,
    Hanoi,
    Lights,
    Sliding,
    Clock,
    Prompting,
    Instructions,
    Victory,
}

impl From<PuzzleKind> for GameState {
    fn from(kind: PuzzleKind) -> Self {
        match kind {
            PuzzleKind::Hanoi => GameState::Hanoi,
            PuzzleKind::Lights => GameState::Lights,
            PuzzleKind::Sliding => GameState::Sliding,
        }
    }
}

/// How the puzzles are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    FreePlay,
    Campaign,
}

/// Objects the player can carry in the room. One at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    ClockHand,
    Pole,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Item::ClockHand => write!(f, "minute hand"),
            Item::Pole => write!(f, "pole"),
        }
    }
}

/// What the text field is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    PlayerName,
    Passcode,
}

/// Player actions. Actions that do not apply to the current state are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start the campaign (main menu).
    NewGame,
    /// Open the puzzle menu (main menu).
    FreePlay,
    /// Open the leaderboards (main menu).
    ShowLeaderboard,
    /// Leave the instructions or the victory screen.
    Continue,
    /// Go back to the previous screen.
    Back,
    /// Start a puzzle (puzzle menu) or walk to it (room).
    Play(PuzzleKind),
    /// Walk to the wall clock (room).
    OpenClock,
    /// Walk to the door (room).
    OpenDoor,
    /// Select the next dial of the safe (room).
    LockNextDial,
    /// Select the previous dial of the safe (room).
    LockPreviousDial,
    /// Turn the selected dial up (room).
    LockUp,
    /// Turn the selected dial down (room).
    LockDown,
    /// Take an item (room).
    PickUp(Item),
    /// Use the carried item on the current puzzle.
    UseItem,
    /// Slide a tile into the blank.
    SelectTile { row: usize, col: usize },
    /// Click a light.
    ToggleLight { row: usize, col: usize },
    /// Click a pole of the Tower of Hanoi.
    ClickPole(usize),
    /// Move the selected clock hand forward.
    ClockUp,
    /// Move the selected clock hand backward.
    ClockDown,
    /// Switch between the hour and minute hands.
    ClockToggleHand,
    /// Type characters in the text field.
    Type(String),
    /// Remove the last character of the text field.
    Backspace,
    /// Validate the text field.
    Submit,
}

/// Result of a puzzle solved in free play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub kind: PuzzleKind,
    pub time: f64,
    pub moves: i64,
    /// Rankings the result can enter. None means the player is not prompted for a name.
    pub qualification: Option<Qualification>,
}

/// Session parameters.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory for the leaderboard files.
    pub data_dir: PathBuf,
    pub sliding_grid_size: usize,
    pub lights_grid_size: usize,
    pub hanoi_ring_count: usize,
}

impl SessionConfig {
    /// Create a [`SessionConfig`] object with the default puzzle sizes.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            sliding_grid_size: config::SLIDING_GRID_SIZE,
            lights_grid_size: config::LIGHTS_GRID_SIZE,
            hanoi_ring_count: config::HANOI_RING_COUNT,
        }
    }
}

/// Order in which the puzzles reveal the passcode letters.
const CLUE_ORDER: [GameState; 4] = [
    GameState::Lights,
    GameState::Sliding,
    GameState::Clock,
    GameState::Hanoi,
];

/// Game state machine.
pub struct Session {
    config: SessionConfig,
    state: GameState,
    mode: Mode,

    /// One leaderboard per [`PuzzleKind`], in [`PuzzleKind::ALL`] order.
    stores: [LeaderboardStore; 3],

    sliding: Sliding,
    lights: LightsOut,
    hanoi: TowerOfHanoi,
    clock: Clock,
    lock: CombinationLock,

    /// Free play: time on the current puzzle. Campaign: time in the room.
    stopwatch: Stopwatch,

    input: TextInput,
    prompt: Option<Prompt>,

    /// Whether the campaign can be resumed from the main menu.
    campaign_open: bool,

    /// Item the player carries.
    held: Option<Item>,
    clock_hand_taken: bool,
    pole_taken: bool,

    last_result: Option<SolveResult>,

    /// Event for the host to display.
    message: Option<String>,
}

impl Session {
    /// Create a [`Session`] object on the main menu and load the leaderboards.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let mut stores: [LeaderboardStore; 3] =
            PuzzleKind::ALL.map(|kind| LeaderboardStore::new(config.data_dir.clone(), kind));
        stores.iter_mut().for_each(|s| s.load());

        Ok(Self {
            sliding: Sliding::new(config.sliding_grid_size)?,
            lights: LightsOut::new(config.lights_grid_size)?,
            hanoi: TowerOfHanoi::new(config.hanoi_ring_count, true),
            clock: Clock::new(config::CLOCK_TARGET, false),
            lock: CombinationLock::new(config::LOCK_COMBINATION),
            config,
            state: GameState::Menu,
            mode: Mode::FreePlay,
            stores,
            stopwatch: Stopwatch::new(),
            input: TextInput::new(config::MAX_INPUT_LEN),
            prompt: None,
            campaign_open: false,
            held: None,
            clock_hand_taken: false,
            pole_taken: false,
            last_result: None,
            message: None,
        })
    }

    /// Apply the action and return the new state.
    ///
    /// # Errors
    ///
    /// The action referred to a cell outside the grid. The state does not change.
    pub fn apply(&mut self, action: Action) -> Result<GameState, SessionError> {
        let previous: GameState = self.state;
        match self.state {
            GameState::Menu => self.on_menu(action)?,
            GameState::Instructions => self.on_instructions(action),
            GameState::PuzzleMenu => self.on_puzzle_menu(action)?,
            GameState::Room => self.on_room(action),
            GameState::Leaderboard => self.on_leaderboard(action),
            GameState::Hanoi | GameState::Lights | GameState::Sliding | GameState::Clock => {
                self.on_puzzle(action)?
            }
            GameState::Prompting => self.on_prompt(action),
            GameState::Victory => self.on_victory(action),
        }
        if self.state != previous {
            debug!("Session: {previous} -> {}", self.state);
        }
        Ok(self.state)
    }

    /// Add the time reported by the host to the stopwatch.
    pub fn advance(&mut self, ms: u64) {
        self.stopwatch.advance(ms);
    }

    fn ignore(&self, action: Action) {
        debug!("Session: {action:?} ignored in {}", self.state);
    }

    fn on_menu(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::NewGame => {
                self.start_campaign()?;
                self.state = GameState::Instructions;
            }
            Action::Continue if self.campaign_open => {
                self.mode = Mode::Campaign;
                self.stopwatch.resume();
                self.state = GameState::Room;
            }
            Action::FreePlay => {
                self.mode = Mode::FreePlay;
                self.state = GameState::PuzzleMenu;
            }
            Action::ShowLeaderboard => {
                self.stores.iter_mut().for_each(|s| s.load());
                self.state = GameState::Leaderboard;
            }
            _ => self.ignore(action),
        }
        Ok(())
    }

    fn on_instructions(&mut self, action: Action) {
        match action {
            Action::Continue => {
                self.stopwatch.restart();
                self.campaign_open = true;
                self.state = GameState::Room;
            }
            Action::Back => self.state = GameState::Menu,
            _ => self.ignore(action),
        }
    }

    fn on_puzzle_menu(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Play(kind) => {
                self.new_puzzle(kind, true)?;
                self.campaign_open = false;
                self.last_result = None;
                self.stopwatch.restart();
                self.state = kind.into();
                // A generated layout can already be solved
                self.after_move(kind);
            }
            Action::Back => self.state = GameState::Menu,
            _ => self.ignore(action),
        }
        Ok(())
    }

    fn on_leaderboard(&mut self, action: Action) {
        match action {
            Action::Back => self.state = GameState::Menu,
            _ => self.ignore(action),
        }
    }

    fn on_victory(&mut self, action: Action) {
        match action {
            Action::Continue | Action::Back => self.state = GameState::Menu,
            _ => self.ignore(action),
        }
    }

    fn on_room(&mut self, action: Action) {
        match action {
            Action::Play(kind) => self.state = kind.into(),
            Action::OpenClock => self.state = GameState::Clock,
            Action::OpenDoor => {
                self.input.clear();
                self.prompt = Some(Prompt::Passcode);
                self.state = GameState::Prompting;
            }
            Action::LockNextDial => self.lock.next_dial(),
            Action::LockPreviousDial => self.lock.previous_dial(),
            Action::LockUp | Action::LockDown => {
                let was_open: bool = self.lock.is_open();
                if action == Action::LockUp {
                    self.lock.increment();
                } else {
                    self.lock.decrement();
                }
                if !was_open && self.lock.is_open() {
                    self.message = Some("The safe opens. There is a minute hand inside.".into());
                }
            }
            Action::PickUp(item) => self.pick_up(item),
            Action::Back => {
                self.stopwatch.pause();
                self.state = GameState::Menu;
            }
            _ => self.ignore(action),
        }
    }

    fn pick_up(&mut self, item: Item) {
        if let Some(held) = self.held {
            self.message = Some(format!("You are already carrying the {held}."));
            return;
        }
        let available: bool = match item {
            Item::ClockHand => self.lock.is_open() && !self.clock_hand_taken,
            Item::Pole => self.clock.is_solved() && !self.pole_taken,
        };
        if !available {
            self.message = Some(format!("There is no {item} to pick up."));
            return;
        }
        match item {
            Item::ClockHand => self.clock_hand_taken = true,
            Item::Pole => self.pole_taken = true,
        }
        debug!("Session: {item} picked up");
        self.held = Some(item);
        self.message = Some(format!("You pick up the {item}."));
    }

    fn use_item(&mut self) {
        match (self.state, self.held) {
            (GameState::Clock, Some(Item::ClockHand)) => {
                self.clock.fix();
                self.held = None;
                self.message = Some("The minute hand is back on the clock.".into());
            }
            (GameState::Hanoi, Some(Item::Pole)) => {
                self.hanoi.fix_middle_pole();
                self.held = None;
                self.message = Some("The middle pole is in place.".into());
            }
            (_, Some(item)) => self.message = Some(format!("The {item} does not fit here.")),
            (_, None) => self.message = Some("You are not carrying anything.".into()),
        }
    }

    fn on_puzzle(&mut self, action: Action) -> Result<(), SessionError> {
        if action == Action::Back {
            self.hanoi.clear_selection();
            self.state = match self.mode {
                Mode::Campaign => GameState::Room,
                Mode::FreePlay => GameState::PuzzleMenu,
            };
            return Ok(());
        }
        if action == Action::UseItem && self.mode == Mode::Campaign {
            self.use_item();
            return Ok(());
        }

        if self.state == GameState::Clock {
            let was_solved: bool = self.clock.is_solved();
            match action {
                Action::ClockUp => self.clock.increment(),
                Action::ClockDown => self.clock.decrement(),
                Action::ClockToggleHand => self.clock.toggle_hand(),
                _ => self.ignore(action),
            }
            if !was_solved && self.clock.is_solved() {
                self.message = Some("A hatch opens below the clock. It holds a pole.".into());
            }
            return Ok(());
        }

        let kind: PuzzleKind = match self.state {
            GameState::Hanoi => PuzzleKind::Hanoi,
            GameState::Lights => PuzzleKind::Lights,
            _ => PuzzleKind::Sliding,
        };
        if self.puzzle(kind).is_solved() {
            self.ignore(action);
            return Ok(());
        }
        match (kind, action) {
            (PuzzleKind::Sliding, Action::SelectTile { row, col }) => {
                self.sliding.try_select_tile(row, col)?;
            }
            (PuzzleKind::Lights, Action::ToggleLight { row, col }) => {
                self.lights.toggle(row, col)?;
            }
            (PuzzleKind::Hanoi, Action::ClickPole(pole)) => {
                let outcome: ClickOutcome = self.hanoi.handle_click(pole)?;
                if outcome == ClickOutcome::Ignored
                    && pole == MIDDLE_POLE
                    && !self.hanoi.is_middle_pole_fixed()
                {
                    self.message = Some("The middle pole is missing.".into());
                }
            }
            (_, action) => {
                self.ignore(action);
                return Ok(());
            }
        }
        self.after_move(kind);
        Ok(())
    }

    /// Check whether the last move solved the puzzle.
    fn after_move(&mut self, kind: PuzzleKind) {
        if !self.puzzle(kind).is_solved() {
            return;
        }
        let time: f64 = self.stopwatch.seconds();
        let moves: i64 = self.puzzle(kind).move_count();
        debug!("Session: {kind} solved in {time}s and {moves} move(s)");

        match self.mode {
            Mode::Campaign => {
                self.message = Some(format!("The {kind} is solved."));
            }
            Mode::FreePlay => {
                self.stopwatch.pause();
                let qualification: Option<Qualification> =
                    self.stores[kind as usize].qualify(time, moves);
                self.last_result = Some(SolveResult {
                    kind,
                    time,
                    moves,
                    qualification,
                });
                if qualification.is_some() {
                    self.input.clear();
                    self.prompt = Some(Prompt::PlayerName);
                    self.state = GameState::Prompting;
                } else {
                    self.state = GameState::PuzzleMenu;
                }
            }
        }
    }

    fn on_prompt(&mut self, action: Action) {
        match action {
            Action::Type(text) => self.input.push_str(&text),
            Action::Backspace => self.input.backspace(),
            Action::Submit => match self.prompt {
                Some(Prompt::PlayerName) => self.submit_name(),
                Some(Prompt::Passcode) => self.submit_passcode(),
                None => self.state = GameState::Menu,
            },
            Action::Back => {
                self.state = match self.prompt {
                    Some(Prompt::Passcode) => GameState::Room,
                    _ => GameState::PuzzleMenu,
                };
                self.prompt = None;
                self.input.clear();
            }
            _ => self.ignore(action),
        }
    }

    fn submit_name(&mut self) {
        let Some(name) = self.input.submit() else {
            return;
        };
        if let Some(SolveResult {
            kind,
            time,
            moves,
            qualification: Some(q),
        }) = self.last_result
        {
            self.stores[kind as usize].record(&name, time, moves, q);
        }
        self.prompt = None;
        self.state = GameState::PuzzleMenu;
    }

    fn submit_passcode(&mut self) {
        let Some(code) = self.input.submit() else {
            return;
        };
        self.prompt = None;
        if code.eq_ignore_ascii_case(config::DOOR_PASSCODE) {
            self.stopwatch.pause();
            self.campaign_open = false;
            self.state = GameState::Victory;
        } else {
            self.message = Some("The door does not open.".into());
            self.state = GameState::Room;
        }
    }

    fn start_campaign(&mut self) -> Result<(), SessionError> {
        self.mode = Mode::Campaign;
        self.campaign_open = false;
        for kind in PuzzleKind::ALL {
            self.new_puzzle(kind, false)?;
        }
        self.clock.reset();
        self.lock = CombinationLock::new(config::LOCK_COMBINATION);
        self.held = None;
        self.clock_hand_taken = false;
        self.pole_taken = false;
        self.last_result = None;
        Ok(())
    }

    fn new_puzzle(&mut self, kind: PuzzleKind, middle_pole_fixed: bool) -> Result<(), SessionError> {
        match kind {
            PuzzleKind::Hanoi => {
                self.hanoi = TowerOfHanoi::new(self.config.hanoi_ring_count, middle_pole_fixed)
            }
            PuzzleKind::Lights => self.lights = LightsOut::new(self.config.lights_grid_size)?,
            PuzzleKind::Sliding => self.sliding = Sliding::new(self.config.sliding_grid_size)?,
        }
        Ok(())
    }

    /// The model of a scored puzzle.
    pub fn puzzle(&self, kind: PuzzleKind) -> &dyn Puzzle {
        match kind {
            PuzzleKind::Hanoi => &self.hanoi,
            PuzzleKind::Lights => &self.lights,
            PuzzleKind::Sliding => &self.sliding,
        }
    }

    /// The door passcode with the letters found so far, `_` for the others.
    pub fn passcode_hint(&self) -> String {
        config::DOOR_PASSCODE
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let solved: bool = match CLUE_ORDER.get(i) {
                    Some(GameState::Lights) => self.lights.is_solved(),
                    Some(GameState::Sliding) => self.sliding.is_solved(),
                    Some(GameState::Clock) => self.clock.is_solved(),
                    Some(GameState::Hanoi) => self.hanoi.is_solved(),
                    _ => false,
                };
                if solved { c } else { '_' }
            })
            .collect()
    }

    /// Take the last event message.
    pub fn take_message(&mut self) -> Option<String> {
        self.message.take()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the main menu offers to go back to the room.
    pub fn can_resume(&self) -> bool {
        self.campaign_open
    }

    pub fn sliding(&self) -> &Sliding {
        &self.sliding
    }

    pub fn lights(&self) -> &LightsOut {
        &self.lights
    }

    pub fn hanoi(&self) -> &TowerOfHanoi {
        &self.hanoi
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn lock(&self) -> &CombinationLock {
        &self.lock
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Item the player carries.
    pub fn held_item(&self) -> Option<Item> {
        self.held
    }

    /// Current prompt, when the state is [`GameState::Prompting`].
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    /// Text typed at the prompt.
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Last puzzle solved in free play.
    pub fn last_result(&self) -> Option<SolveResult> {
        self.last_result
    }

    /// Rankings of a puzzle.
    pub fn leaderboard(&self, kind: PuzzleKind) -> &Leaderboard {
        self.stores[kind as usize].board()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::BOARD_SIZE;

    fn session(dir: &tempfile::TempDir, ring_count: usize) -> Session {
        let mut config: SessionConfig = SessionConfig::new(dir.path().to_path_buf());
        config.hanoi_ring_count = ring_count;
        Session::new(config).unwrap()
    }

    fn apply_all(session: &mut Session, actions: &[Action]) -> GameState {
        let mut state: GameState = session.state();
        for action in actions {
            state = session.apply(action.clone()).unwrap();
        }
        state
    }

    #[test]
    fn free_play_score_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        assert_eq!(s.apply(Action::FreePlay).unwrap(), GameState::PuzzleMenu);
        assert_eq!(s.apply(Action::Play(PuzzleKind::Hanoi)).unwrap(), GameState::Hanoi);
        assert!(s.hanoi().is_middle_pole_fixed());

        s.apply(Action::ClickPole(0)).unwrap();
        s.advance(2_500);
        assert_eq!(s.apply(Action::ClickPole(2)).unwrap(), GameState::Prompting);
        assert_eq!(s.prompt(), Some(Prompt::PlayerName));
        // The time stops with the last move
        s.advance(10_000);
        let result: SolveResult = s.last_result().unwrap();
        assert_eq!(result.time, 2.5);
        assert_eq!(s.stopwatch().seconds(), 2.5);
        assert_eq!(result.moves, 1);
        assert_eq!(result.qualification, Some(Qualification::Both));

        // A blank name keeps the prompt open
        assert_eq!(s.apply(Action::Submit).unwrap(), GameState::Prompting);
        let state: GameState = apply_all(
            &mut s,
            &[Action::Type("ann!".into()), Action::Submit],
        );
        assert_eq!(state, GameState::PuzzleMenu);
        assert_eq!(s.leaderboard(PuzzleKind::Hanoi).top_moves()[0].player_name, "ANN");
        assert!(dir.path().join("hanoi_leaderboard.txt").exists());

        // Another session reads the file back
        let other: Session = session(&dir, 1);
        assert_eq!(other.leaderboard(PuzzleKind::Hanoi).top_moves().len(), 1);
    }

    #[test]
    fn result_outside_the_rankings_skips_the_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        for _ in 0..BOARD_SIZE {
            s.stores[PuzzleKind::Hanoi as usize].add_time_entry("X", 0.0);
            s.stores[PuzzleKind::Hanoi as usize].add_moves_entry("X", 1);
        }
        let state: GameState = apply_all(
            &mut s,
            &[
                Action::FreePlay,
                Action::Play(PuzzleKind::Hanoi),
                Action::ClickPole(0),
                Action::ClickPole(2),
            ],
        );
        assert_eq!(state, GameState::PuzzleMenu);
        assert_eq!(s.last_result().unwrap().qualification, None);
    }

    #[test]
    fn free_play_lights_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        apply_all(&mut s, &[Action::FreePlay, Action::Play(PuzzleKind::Lights)]);
        // Only the corner light and its neighbours are on
        let mut lights: Vec<bool> = vec![false; 25];
        for i in [0, 1, 5] {
            lights[i] = true;
        }
        s.lights = LightsOut::from_lights(5, lights).unwrap();

        let state: GameState = s.apply(Action::ToggleLight { row: 0, col: 0 }).unwrap();
        assert_eq!(state, GameState::Prompting);
        // The first click counts as zero moves, which never enters the moves ranking
        let result: SolveResult = s.last_result().unwrap();
        assert_eq!(result.moves, 0);
        assert_eq!(result.qualification, Some(Qualification::Time));

        assert_eq!(s.apply(Action::Back).unwrap(), GameState::PuzzleMenu);
        assert!(s.leaderboard(PuzzleKind::Lights).is_empty());
    }

    #[test]
    fn already_solved_layout_goes_to_the_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config: SessionConfig = SessionConfig::new(dir.path().to_path_buf());
        config.sliding_grid_size = 1;
        let mut s: Session = Session::new(config).unwrap();

        let state: GameState =
            apply_all(&mut s, &[Action::FreePlay, Action::Play(PuzzleKind::Sliding)]);
        assert_eq!(state, GameState::Prompting);
        let result: SolveResult = s.last_result().unwrap();
        assert_eq!(result.moves, 0);
        assert_eq!(result.qualification, Some(Qualification::Time));
    }

    #[test]
    fn campaign_resumes_from_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        // Nothing to resume yet
        assert_eq!(s.apply(Action::Continue).unwrap(), GameState::Menu);
        assert!(!s.can_resume());

        apply_all(&mut s, &[Action::NewGame, Action::Continue, Action::LockUp]);
        s.advance(3_000);
        assert_eq!(s.apply(Action::Back).unwrap(), GameState::Menu);
        assert!(s.can_resume());
        s.advance(60_000);

        assert_eq!(s.apply(Action::Continue).unwrap(), GameState::Room);
        assert_eq!(s.lock().dials()[0], 1);
        s.advance(1_000);
        assert_eq!(s.stopwatch().seconds(), 4.0);

        // Free play replaces the campaign puzzles
        apply_all(&mut s, &[Action::Back, Action::FreePlay, Action::Play(PuzzleKind::Hanoi)]);
        apply_all(&mut s, &[Action::Back, Action::Back]);
        assert!(!s.can_resume());
        assert_eq!(s.apply(Action::Continue).unwrap(), GameState::Menu);
    }

    #[test]
    fn out_of_bounds_cell_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        apply_all(&mut s, &[Action::FreePlay, Action::Play(PuzzleKind::Sliding)]);
        s.sliding = Sliding::from_layout(3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert!(s.apply(Action::SelectTile { row: 5, col: 0 }).is_err());
        assert_eq!(s.state(), GameState::Sliding);
        assert_eq!(
            s.apply(Action::ToggleLight { row: 0, col: 0 }).unwrap(),
            GameState::Sliding
        );
        assert_eq!(s.apply(Action::Back).unwrap(), GameState::PuzzleMenu);
        assert_eq!(s.apply(Action::Back).unwrap(), GameState::Menu);
    }

    #[test]
    fn campaign_repair_chain() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 2);
        assert_eq!(s.apply(Action::NewGame).unwrap(), GameState::Instructions);
        assert_eq!(s.apply(Action::Continue).unwrap(), GameState::Room);
        assert!(!s.hanoi().is_middle_pole_fixed());

        // The safe is closed
        s.apply(Action::PickUp(Item::ClockHand)).unwrap();
        assert_eq!(s.held_item(), None);
        assert!(s.take_message().is_some());

        let mut open_safe: Vec<Action> = vec![Action::LockUp; 3];
        open_safe.push(Action::LockNextDial);
        open_safe.push(Action::LockUp);
        open_safe.push(Action::LockNextDial);
        open_safe.extend(vec![Action::LockUp; 4]);
        apply_all(&mut s, &open_safe);
        assert!(s.lock().is_open());

        // The pole comes after the clock
        s.apply(Action::PickUp(Item::Pole)).unwrap();
        assert_eq!(s.held_item(), None);
        s.apply(Action::PickUp(Item::ClockHand)).unwrap();
        assert_eq!(s.held_item(), Some(Item::ClockHand));

        assert_eq!(s.apply(Action::OpenClock).unwrap(), GameState::Clock);
        s.apply(Action::ClockToggleHand).unwrap();
        assert_eq!(s.clock().selected_hand(), crate::puzzles::clock::Hand::Hour);
        s.apply(Action::UseItem).unwrap();
        assert!(s.clock().is_fixed());
        assert_eq!(s.held_item(), None);

        let mut set_time: Vec<Action> = vec![Action::ClockUp; 8];
        set_time.push(Action::ClockToggleHand);
        set_time.extend(vec![Action::ClockUp; 20]);
        apply_all(&mut s, &set_time);
        assert!(s.clock().is_solved());
        assert_eq!(s.apply(Action::Back).unwrap(), GameState::Room);

        s.apply(Action::PickUp(Item::Pole)).unwrap();
        assert_eq!(s.held_item(), Some(Item::Pole));
        // Already taken
        s.apply(Action::PickUp(Item::ClockHand)).unwrap();
        assert_eq!(s.held_item(), Some(Item::Pole));

        assert_eq!(s.apply(Action::Play(PuzzleKind::Hanoi)).unwrap(), GameState::Hanoi);
        s.take_message();
        s.apply(Action::ClickPole(0)).unwrap();
        s.apply(Action::ClickPole(MIDDLE_POLE)).unwrap();
        assert_eq!(s.take_message().as_deref(), Some("The middle pole is missing."));
        assert_eq!(s.hanoi().selected_pole(), Some(0));
        s.apply(Action::UseItem).unwrap();
        assert!(s.hanoi().is_middle_pole_fixed());

        // 0->1, 0->2, 1->2
        let state: GameState = apply_all(
            &mut s,
            &[
                Action::ClickPole(1),
                Action::ClickPole(0),
                Action::ClickPole(2),
                Action::ClickPole(1),
                Action::ClickPole(2),
            ],
        );
        // Campaign puzzles stay on screen when solved
        assert_eq!(state, GameState::Hanoi);
        assert!(s.puzzle(PuzzleKind::Hanoi).is_solved());
        assert_eq!(s.passcode_hint(), "__LT");
    }

    #[test]
    fn door_passcode() {
        let dir = tempfile::tempdir().unwrap();
        let mut s: Session = session(&dir, 1);
        apply_all(&mut s, &[Action::NewGame, Action::Continue]);

        assert_eq!(s.apply(Action::OpenDoor).unwrap(), GameState::Prompting);
        assert_eq!(s.prompt(), Some(Prompt::Passcode));
        let state: GameState = apply_all(&mut s, &[Action::Type("bolx".into()), Action::Submit]);
        assert_eq!(state, GameState::Room);

        let state: GameState = apply_all(
            &mut s,
            &[
                Action::OpenDoor,
                Action::Type("boltx".into()),
                Action::Backspace,
                Action::Submit,
            ],
        );
        assert_eq!(state, GameState::Victory);
        assert!(s.stopwatch().is_paused());
        assert_eq!(s.apply(Action::Continue).unwrap(), GameState::Menu);
    }

    #[test]
    fn leaderboard_screen() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("sliding_leaderboard.txt"),
            "Best Times:\n1. ZED, 9.00s\n-------------------------\nBest Moves:\n",
        )
        .unwrap();
        let mut s: Session = session(&dir, 1);
        assert_eq!(s.apply(Action::ShowLeaderboard).unwrap(), GameState::Leaderboard);
        assert_eq!(s.leaderboard(PuzzleKind::Sliding).top_times()[0].player_name, "ZED");
        assert_eq!(s.apply(Action::Play(PuzzleKind::Sliding)).unwrap(), GameState::Leaderboard);
        assert_eq!(s.apply(Action::Back).unwrap(), GameState::Menu);
    }
}
