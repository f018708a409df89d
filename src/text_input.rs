/*
text_input.rs

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

//! Text field used for the player name and the door passcode.

/// Text being typed.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Upper-case letters and digits.
    text: String,

    /// Maximum number of characters.
    max_len: usize,
}

impl TextInput {
    /// Create an empty [`TextInput`] object.
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::with_capacity(max_len),
            max_len,
        }
    }

    /// Add a character. Characters other than ASCII letters and digits are ignored, and so
    /// are characters beyond the maximum length.
    pub fn push(&mut self, c: char) {
        if !c.is_ascii_alphanumeric() || self.text.len() >= self.max_len {
            return;
        }
        self.text.push(c.to_ascii_uppercase());
    }

    /// Add every character of the string, see [`TextInput::push`].
    pub fn push_str(&mut self, s: &str) {
        s.chars().for_each(|c| self.push(c));
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Typed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Return the typed text and empty the field, or None when nothing was typed.
    pub fn submit(&mut self) -> Option<String> {
        let text: String = self.text.trim().to_string();
        self.text.clear();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_upper_cases() {
        let mut input: TextInput = TextInput::new(10);
        input.push_str("ab c-9!");
        assert_eq!(input.text(), "ABC9");
    }

    #[test]
    fn length_is_capped() {
        let mut input: TextInput = TextInput::new(3);
        input.push_str("abcdef");
        assert_eq!(input.text(), "ABC");
        input.backspace();
        input.push('z');
        assert_eq!(input.text(), "ABZ");
    }

    #[test]
    fn submit_empties_the_field() {
        let mut input: TextInput = TextInput::new(10);
        assert_eq!(input.submit(), None);
        input.backspace();
        input.push_str("bolt");
        assert_eq!(input.submit(), Some("BOLT".to_string()));
        assert_eq!(input.text(), "");
    }
}
