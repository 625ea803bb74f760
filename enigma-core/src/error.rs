// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Error types raised while configuring or driving an Enigma machine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for machine configuration and session use.

use thiserror::Error;

/// A machine configuration was rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A wiring does not contain exactly 26 letters.
    #[error("wiring `{wiring}` has {len} letters, expected 26")]
    WiringLength {
        /// The offending wiring text.
        wiring: String,
        /// Number of characters found.
        len: usize,
    },

    /// A wiring contains something other than A-Z.
    #[error("wiring `{wiring}` contains non-alphabetic character {found:?}")]
    NonAlphabetic {
        /// The offending wiring text.
        wiring: String,
        /// The first character outside the alphabet.
        found: char,
    },

    /// A wiring lists the same output letter twice.
    #[error("wiring `{wiring}` contains {letter} more than once")]
    DuplicateLetter {
        /// The offending wiring text.
        wiring: String,
        /// The repeated letter.
        letter: char,
    },

    /// A reflector wiring is not its own inverse.
    #[error("reflector wiring `{wiring}` is not self-inverse: {from} -> {to} -> {back}")]
    NotInvolutive {
        /// The offending wiring text.
        wiring: String,
        /// Letter that starts the broken cycle.
        from: char,
        /// Where `from` is sent.
        to: char,
        /// Where `to` is sent, which is not `from`.
        back: char,
    },

    /// A plugboard letter is used by more than one cable.
    #[error("plugboard letter {letter} appears in more than one pair")]
    PlugboardConflict {
        /// The reused letter.
        letter: char,
    },

    /// A plugboard pair joins a letter to itself.
    #[error("plugboard pair connects {letter} to itself")]
    PlugboardSelfPair {
        /// The letter in the degenerate pair.
        letter: char,
    },

    /// A value that must be one letter of the alphabet is not.
    #[error("{what} must be a single letter A-Z, got {value:?}")]
    InvalidLetter {
        /// What the value configures (notch, position, plugboard...).
        what: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The machine was given the wrong number of rotors.
    #[error("expected exactly 3 rotors, got {0}")]
    RotorCount(usize),

    /// The catalog has no rotor with this name.
    #[error("unknown rotor `{0}`")]
    UnknownRotor(String),

    /// The catalog has no reflector with this name.
    #[error("unknown reflector `{0}`")]
    UnknownReflector(String),
}

/// Errors surfaced to callers driving a machine through a [`crate::session::Session`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// The requested configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A transform was requested before any machine was configured.
    #[error("the machine has not been configured")]
    Uninitialized,
}
