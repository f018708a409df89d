/*
hanoi.rs

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

//! Tower of Hanoi.
//!
//! Three poles hold rings of decreasing size. At the beginning all the rings are on the first
//! pole, and the puzzle is solved when they are all on the last pole.
//!
//! The player moves a ring with two clicks: the first click selects a pole that has rings, the
//! second click moves the top ring of that pole to the clicked pole.
//! A ring cannot go on top of a smaller ring. In that case it goes back to its pole, but the move
//! is still counted.
//!
//! In the room, the middle pole is missing until the player brings it back (see
//! [`TowerOfHanoi::fix_middle_pole`]). Until then, clicks on the middle pole are ignored.

use log::debug;
use thiserror::Error;

use super::{Puzzle, PuzzleKind};

/// Number of poles.
pub const NUM_POLES: usize = 3;

/// Index of the pole that can be missing.
pub const MIDDLE_POLE: usize = 1;

/// Index of the pole that must hold all the rings at the end.
const TARGET_POLE: usize = 2;

/// Ring colors, by ring size. Sizes above the palette length reuse the colors.
const RING_COLORS: [(u8, u8, u8, u8); 6] = [
    (255, 0, 0, 255),
    (255, 165, 0, 255),
    (255, 255, 0, 255),
    (0, 128, 0, 255),
    (0, 0, 255, 255),
    (128, 0, 128, 255),
];

/// Errors raised when a caller breaks the pole rules.
#[derive(Error, Debug, PartialEq)]
pub enum PoleError {
    /// Removing a ring from a pole that has none.
    #[error("no rings on this pole")]
    Empty,

    /// Putting a ring on top of a smaller ring.
    #[error("cannot place ring {ring} on ring {top}")]
    RingTooLarge { ring: usize, top: usize },
}

/// A ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Ring size. The smallest ring has size 1.
    pub size: usize,

    /// Display color, as RGBA components between 0 and 255.
    pub color: (u8, u8, u8, u8),
}

impl Ring {
    /// Create a [`Ring`] object with the palette color for its size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            color: RING_COLORS[size.saturating_sub(1) % RING_COLORS.len()],
        }
    }
}

/// A pole: a stack of rings, the last ring in the list being on top.
#[derive(Debug, Clone, Default)]
pub struct Pole {
    rings: Vec<Ring>,
}

impl Pole {
    /// Create an empty [`Pole`] object.
    pub fn new() -> Self {
        Self { rings: Vec::new() }
    }

    /// Whether the ring can go on this pole: the pole is empty or its top ring is larger.
    pub fn can_accept(&self, ring: &Ring) -> bool {
        match self.peek() {
            Some(top) => top.size > ring.size,
            None => true,
        }
    }

    /// Put a ring on top of the pole.
    ///
    /// # Errors
    ///
    /// The method returns [`PoleError::RingTooLarge`] if [`Pole::can_accept`] refuses the ring.
    pub fn push(&mut self, ring: Ring) -> Result<(), PoleError> {
        if let Some(top) = self.peek()
            && top.size <= ring.size
        {
            return Err(PoleError::RingTooLarge {
                ring: ring.size,
                top: top.size,
            });
        }
        self.rings.push(ring);
        Ok(())
    }

    /// Remove and return the top ring.
    ///
    /// # Errors
    ///
    /// The method returns [`PoleError::Empty`] if the pole has no rings.
    pub fn pop(&mut self) -> Result<Ring, PoleError> {
        self.rings.pop().ok_or(PoleError::Empty)
    }

    /// Return the top ring, or None if the pole is empty.
    pub fn peek(&self) -> Option<&Ring> {
        self.rings.last()
    }

    /// Number of rings on the pole.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Whether the pole has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Rings from bottom to top.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

/// Result of a click on a pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Nothing happened: missing middle pole, pole out of range, or empty pole with no
    /// selection.
    Ignored,

    /// The pole is now the source of the next move.
    Selected(usize),

    /// The top ring moved.
    Moved { from: usize, to: usize },

    /// The destination refused the ring, which went back to its pole.
    Rejected { from: usize, to: usize },
}

/// Tower of Hanoi state.
#[derive(Debug, Clone)]
pub struct TowerOfHanoi {
    /// The three poles.
    poles: [Pole; NUM_POLES],

    /// Total number of rings.
    ring_count: usize,

    /// Pole selected by the first click, if any.
    selected_pole: Option<usize>,

    /// Number of attempted moves.
    move_count: i64,

    /// Whether the middle pole is in place.
    middle_pole_fixed: bool,
}

impl TowerOfHanoi {
    /// Create a [`TowerOfHanoi`] object with `ring_count` rings on the first pole.
    pub fn new(ring_count: usize, middle_pole_fixed: bool) -> Self {
        let mut first: Pole = Pole::new();
        // Largest ring at the bottom
        first.rings = (1..=ring_count).rev().map(Ring::new).collect();

        Self {
            poles: [first, Pole::new(), Pole::new()],
            ring_count,
            selected_pole: None,
            move_count: 0,
            middle_pole_fixed,
        }
    }

    /// Process a click on the given pole.
    ///
    /// The first click on a pole with rings selects it. The next click, on any pole, moves the
    /// top ring of the selected pole there, or puts it back if the ring is too large. Either way
    /// the move counter is incremented and the selection is cleared.
    ///
    /// # Errors
    ///
    /// A [`PoleError`] means the pole rules were broken, which this method never does.
    pub fn handle_click(&mut self, pole_index: usize) -> Result<ClickOutcome, PoleError> {
        if pole_index >= NUM_POLES {
            return Ok(ClickOutcome::Ignored);
        }
        if pole_index == MIDDLE_POLE && !self.middle_pole_fixed {
            return Ok(ClickOutcome::Ignored);
        }

        let from: usize = match self.selected_pole {
            None => {
                if self.poles[pole_index].is_empty() {
                    return Ok(ClickOutcome::Ignored);
                }
                self.selected_pole = Some(pole_index);
                return Ok(ClickOutcome::Selected(pole_index));
            }
            Some(p) => p,
        };
        let to: usize = pole_index;
        self.selected_pole = None;

        if self.poles[from].is_empty() {
            return Ok(ClickOutcome::Ignored);
        }

        self.move_count += 1;
        let ring: Ring = self.poles[from].pop()?;
        let outcome: ClickOutcome = if self.poles[to].can_accept(&ring) {
            self.poles[to].push(ring)?;
            ClickOutcome::Moved { from, to }
        } else {
            self.poles[from].push(ring)?;
            ClickOutcome::Rejected { from, to }
        };
        debug!(
            "Hanoi: ring {} from pole {from} to pole {to}: {outcome:?}, {} move(s)",
            ring.size, self.move_count
        );
        Ok(outcome)
    }

    /// Drop the current selection (click outside the poles).
    pub fn clear_selection(&mut self) {
        self.selected_pole = None;
    }

    /// Pole selected by the first click, if any.
    pub fn selected_pole(&self) -> Option<usize> {
        self.selected_pole
    }

    /// Put the middle pole in place so that the player can use it.
    pub fn fix_middle_pole(&mut self) {
        debug!("Hanoi: middle pole fixed");
        self.middle_pole_fixed = true;
    }

    /// Whether the middle pole is in place.
    pub fn is_middle_pole_fixed(&self) -> bool {
        self.middle_pole_fixed
    }

    /// The poles.
    pub fn poles(&self) -> &[Pole; NUM_POLES] {
        &self.poles
    }
}

impl Puzzle for TowerOfHanoi {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Hanoi
    }

    fn is_solved(&self) -> bool {
        self.poles[TARGET_POLE].len() == self.ring_count
    }

    fn move_count(&self) -> i64 {
        self.move_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(tower: &mut TowerOfHanoi, moves: &[(usize, usize)]) {
        for (from, to) in moves {
            tower.handle_click(*from).unwrap();
            tower.handle_click(*to).unwrap();
        }
    }

    fn sizes(pole: &Pole) -> Vec<usize> {
        pole.rings().iter().map(|r| r.size).collect()
    }

    #[test]
    fn rings_start_on_the_first_pole_largest_at_the_bottom() {
        let tower: TowerOfHanoi = TowerOfHanoi::new(4, true);
        assert_eq!(sizes(&tower.poles()[0]), vec![4, 3, 2, 1]);
        assert!(tower.poles()[1].is_empty());
        assert!(tower.poles()[2].is_empty());
        assert!(!tower.is_solved());
        assert_eq!(tower.move_count(), 0);
    }

    #[test]
    fn three_rings_are_solved_in_seven_moves() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(3, true);
        play(
            &mut tower,
            &[(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)],
        );
        assert!(tower.is_solved());
        assert_eq!(tower.move_count(), 7);
        assert_eq!(sizes(&tower.poles()[2]), vec![3, 2, 1]);
    }

    #[test]
    fn larger_ring_goes_back_and_the_attempt_counts() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(3, true);
        play(&mut tower, &[(0, 2), (0, 1)]);
        // Pole 0 holds ring 3, pole 1 holds ring 2
        assert_eq!(tower.handle_click(0), Ok(ClickOutcome::Selected(0)));
        assert_eq!(
            tower.handle_click(1),
            Ok(ClickOutcome::Rejected { from: 0, to: 1 })
        );
        assert_eq!(sizes(&tower.poles()[0]), vec![3]);
        assert_eq!(sizes(&tower.poles()[1]), vec![2]);
        assert_eq!(tower.move_count(), 3);
        assert_eq!(tower.selected_pole(), None);
    }

    #[test]
    fn clicking_the_source_twice_puts_the_ring_back_and_counts() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(2, true);
        assert_eq!(tower.handle_click(0), Ok(ClickOutcome::Selected(0)));
        assert_eq!(
            tower.handle_click(0),
            Ok(ClickOutcome::Moved { from: 0, to: 0 })
        );
        assert_eq!(sizes(&tower.poles()[0]), vec![2, 1]);
        assert_eq!(tower.move_count(), 1);
    }

    #[test]
    fn empty_pole_cannot_be_selected() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(2, true);
        assert_eq!(tower.handle_click(2), Ok(ClickOutcome::Ignored));
        assert_eq!(tower.selected_pole(), None);
        assert_eq!(tower.handle_click(7), Ok(ClickOutcome::Ignored));
    }

    #[test]
    fn missing_middle_pole_ignores_clicks_until_fixed() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(2, false);
        assert!(!tower.is_middle_pole_fixed());
        tower.handle_click(0).unwrap();
        assert_eq!(tower.handle_click(1), Ok(ClickOutcome::Ignored));
        // The selection survives the ignored click
        assert_eq!(tower.selected_pole(), Some(0));
        assert_eq!(tower.move_count(), 0);

        tower.fix_middle_pole();
        assert!(tower.is_middle_pole_fixed());
        assert_eq!(
            tower.handle_click(1),
            Ok(ClickOutcome::Moved { from: 0, to: 1 })
        );
    }

    #[test]
    fn clear_selection_drops_the_first_click() {
        let mut tower: TowerOfHanoi = TowerOfHanoi::new(2, true);
        tower.handle_click(0).unwrap();
        tower.clear_selection();
        assert_eq!(tower.handle_click(2), Ok(ClickOutcome::Ignored));
        assert_eq!(tower.move_count(), 0);
    }

    #[test]
    fn pole_rules() {
        let mut pole: Pole = Pole::new();
        assert_eq!(pole.pop(), Err(PoleError::Empty));
        assert!(pole.can_accept(&Ring::new(5)));
        pole.push(Ring::new(2)).unwrap();
        assert!(pole.can_accept(&Ring::new(1)));
        assert!(!pole.can_accept(&Ring::new(2)));
        assert!(!pole.can_accept(&Ring::new(3)));
        assert_eq!(
            pole.push(Ring::new(3)),
            Err(PoleError::RingTooLarge { ring: 3, top: 2 })
        );
        assert_eq!(pole.len(), 1);
        assert_eq!(pole.peek().map(|r| r.size), Some(2));
        assert_eq!(pole.pop().map(|r| r.size), Ok(2));
        assert!(pole.is_empty());
    }

    #[test]
    fn ring_colors_cycle() {
        assert_eq!(Ring::new(1).color, Ring::new(7).color);
        assert_ne!(Ring::new(1).color, Ring::new(2).color);
    }
}
