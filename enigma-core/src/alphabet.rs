//! The 26-letter alphabet and validated wirings over it.

use crate::error::ConfigError;
use std::fmt;

/// Number of letters on every rotor, reflector and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// One letter A-Z, stored as its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`.
    pub const A: Self = Self(0);

    /// Converts an ASCII letter of either case. Anything else yields `None`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper as u8 - b'A'))
        } else {
            None
        }
    }

    /// Builds a letter from an index, wrapping modulo 26.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        Self((index % ALPHABET_LEN) as u8)
    }

    /// Parses a configuration value that must be exactly one letter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLetter`] if `value` is empty, longer
    /// than one character, or not an ASCII letter.
    pub fn parse(what: &'static str, value: &str) -> Result<Self, ConfigError> {
        let mut chars = value.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        letter.ok_or_else(|| ConfigError::InvalidLetter {
            what,
            value: value.to_owned(),
        })
    }

    /// Zero-based index from `A`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Upper-case character for this letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// The letter `offset` places further on, wrapping Z to A.
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::from_index(self.index() + offset % ALPHABET_LEN)
    }

    /// The letter `offset` places back, wrapping A to Z.
    #[must_use]
    pub const fn unshifted(self, offset: usize) -> Self {
        Self::from_index(self.index() + ALPHABET_LEN - offset % ALPHABET_LEN)
    }

    /// Iterates A through Z.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN).map(Self::from_index)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A permutation of the alphabet, checked to be a bijection when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring([Letter; ALPHABET_LEN]);

impl Wiring {
    /// Parses a 26-letter wiring such as `EKMFLGDQVZNTOWYHXUSPAIBRCJ`.
    ///
    /// Position `i` of the text is the output for input letter `i`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text is not exactly 26 letters, holds
    /// a character outside A-Z, or repeats a letter.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let len = text.chars().count();
        if len != ALPHABET_LEN {
            return Err(ConfigError::WiringLength {
                wiring: text.to_owned(),
                len,
            });
        }

        let mut table = [Letter::A; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (slot, c) in table.iter_mut().zip(text.chars()) {
            let letter = Letter::from_char(c).ok_or_else(|| ConfigError::NonAlphabetic {
                wiring: text.to_owned(),
                found: c,
            })?;
            if seen[letter.index()] {
                return Err(ConfigError::DuplicateLetter {
                    wiring: text.to_owned(),
                    letter: letter.to_char(),
                });
            }
            seen[letter.index()] = true;
            *slot = letter;
        }
        Ok(Self(table))
    }

    /// Where `letter` is sent by this wiring.
    #[must_use]
    pub const fn map(&self, letter: Letter) -> Letter {
        self.0[letter.index()]
    }

    /// The inverse permutation: `inverse.map(self.map(x)) == x`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for input in Letter::all() {
            table[self.map(input).index()] = input;
        }
        Self(table)
    }

    /// First letter `x` with `map(map(x)) != x`, if any.
    #[must_use]
    pub fn involution_break(&self) -> Option<Letter> {
        Letter::all().find(|&x| self.map(self.map(x)) != x)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}
