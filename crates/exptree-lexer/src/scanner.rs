//! Character cursor over a whitespace-stripped expression.
//!
//! The scanner owns the normalized input and a single read position. The
//! position only moves forward; a fresh scanner is created for every parse.

use crate::token::{classify, Alphabet, CharClass};

/// Cursor over the normalized (whitespace-free) characters of an expression.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    alphabet: Alphabet,
}

impl Scanner {
    /// Strip all whitespace from `source` and position the cursor at 0.
    pub fn new(source: &str, alphabet: Alphabet) -> Self {
        Self {
            chars: source.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
            alphabet,
        }
    }

    /// Current cursor position, as a character index into the normalized input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Classification of the character under the cursor.
    pub fn peek_class(&self) -> Option<CharClass> {
        self.peek().map(|c| classify(c, self.alphabet))
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume `expected` if it is under the cursor.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the maximal run of operand characters at the cursor.
    ///
    /// Returns `None` without moving when no operand character is present.
    pub fn take_operand(&mut self) -> Option<String> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !self.alphabet.accepts(ch) {
                break;
            }
            self.pos += 1;
        }

        if start == self.pos {
            None
        } else {
            Some(self.chars[start..self.pos].iter().collect())
        }
    }

    /// The normalized input as a string.
    pub fn normalized(&self) -> String {
        self.chars.iter().collect()
    }
}
