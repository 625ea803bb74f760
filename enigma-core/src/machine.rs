// File:    machine.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Orchestrates the rotor stepping state machine and the per-letter signal path.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The assembled machine: plugboard, three rotors and a reflector.
//!
//! A keypress first steps the rotors, then sends the letter through
//! plugboard, rotors, reflector, rotors in reverse, and the plugboard again.

use crate::alphabet::Letter;
use crate::error::ConfigError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rotors in the stack.
pub const ROTOR_COUNT: usize = 3;

/// Which end of the rotor stack is the fast rotor.
///
/// The fast rotor steps on every keypress and is the first rotor the signal
/// meets on its way to the reflector. The two conventions are mirror images
/// of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stepping {
    /// The rightmost rotor is fast; the signal runs right to left first.
    #[default]
    RightFast,
    /// The leftmost rotor is fast; the signal runs left to right first.
    LeftFast,
}

impl Stepping {
    /// Rotor indices as `(fast, middle, slow)`.
    #[must_use]
    pub const fn lanes(self) -> (usize, usize, usize) {
        match self {
            Self::RightFast => (2, 1, 0),
            Self::LeftFast => (0, 1, 2),
        }
    }

    /// Rotor indices in the order the signal visits them before the reflector.
    #[must_use]
    pub const fn signal_order(self) -> [usize; ROTOR_COUNT] {
        let (fast, middle, slow) = self.lanes();
        [fast, middle, slow]
    }
}

impl fmt::Display for Stepping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RightFast => write!(f, "right-fast"),
            Self::LeftFast => write!(f, "left-fast"),
        }
    }
}

/// Every intermediate value of one letter's trip through the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// The upper-cased input letter.
    pub input: Letter,
    /// Output of the first plugboard pass.
    pub plugboard_in: Letter,
    /// `(in, out)` for each rotor on the way to the reflector, in signal order.
    pub forward: [(Letter, Letter); ROTOR_COUNT],
    /// Output of the reflector.
    pub reflected: Letter,
    /// `(in, out)` for each rotor on the way back, in signal order.
    pub backward: [(Letter, Letter); ROTOR_COUNT],
    /// Output of the second plugboard pass: the ciphertext letter.
    pub output: Letter,
    /// Rotor positions, left to right, the letter was enciphered at.
    pub positions: [Letter; ROTOR_COUNT],
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [l, m, r] = self.positions;
        write!(f, "[{l}{m}{r}] {} > plug {}", self.input, self.plugboard_in)?;
        for (_, out) in self.forward {
            write!(f, " > {out}")?;
        }
        write!(f, " > refl {}", self.reflected)?;
        for (_, out) in self.backward {
            write!(f, " > {out}")?;
        }
        write!(f, " > plug {}", self.output)
    }
}

/// A configured three-rotor machine.
///
/// Each instance is one cipher session: every mutating call takes
/// `&mut self`, so concurrent sessions need their own machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    plugboard: Plugboard,
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    stepping: Stepping,
}

impl Machine {
    /// Assembles a machine from its parts. `rotors` is ordered left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RotorCount`] unless exactly three rotors are given.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Plugboard,
        stepping: Stepping,
    ) -> Result<Self, ConfigError> {
        let rotors: [Rotor; ROTOR_COUNT] = rotors
            .try_into()
            .map_err(|given: Vec<Rotor>| ConfigError::RotorCount(given.len()))?;
        let machine = Self {
            plugboard,
            rotors,
            reflector,
            stepping,
        };
        debug!(
            "Assembled {} machine at {}",
            machine.stepping,
            machine.position_string()
        );
        Ok(machine)
    }

    /// The rotors, left to right.
    #[must_use]
    pub const fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// The plugboard.
    #[must_use]
    pub const fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The reflector.
    #[must_use]
    pub const fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The stepping convention this machine was built with.
    #[must_use]
    pub const fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Current rotor positions, left to right.
    #[must_use]
    pub fn positions(&self) -> [Letter; ROTOR_COUNT] {
        self.rotors.each_ref().map(Rotor::position)
    }

    /// Current rotor positions as a string such as `"AAB"`.
    #[must_use]
    pub fn position_string(&self) -> String {
        self.rotors.iter().map(|r| r.position().to_char()).collect()
    }

    /// Turns every rotor to the given positions, left to right.
    pub fn set_positions(&mut self, positions: [Letter; ROTOR_COUNT]) {
        for (rotor, position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
    }

    /// Advances the rotors for one keypress.
    ///
    /// Both notches are read before anything moves. The fast rotor always
    /// turns; a middle rotor at its notch turns itself and the slow rotor;
    /// a fast rotor at its notch turns the middle rotor. The last two rules
    /// are independent, so the middle rotor can advance twice in one press.
    pub fn step(&mut self) {
        let (fast, middle, slow) = self.stepping.lanes();
        let middle_at_notch = self.rotors[middle].at_notch();
        let fast_at_notch = self.rotors[fast].at_notch();

        self.rotors[fast].rotate();
        if middle_at_notch {
            self.rotors[middle].rotate();
            self.rotors[slow].rotate();
        }
        if fast_at_notch {
            self.rotors[middle].rotate();
        }
        debug!("Stepped to {}", self.position_string());
    }

    /// The composed substitution at the current positions, without stepping.
    #[must_use]
    pub fn substitute(&self, letter: Letter) -> Letter {
        self.trace(letter).output
    }

    /// Runs `letter` through the machine at the current positions, without
    /// stepping, recording every intermediate value.
    #[must_use]
    pub fn trace(&self, letter: Letter) -> Trace {
        let order = self.stepping.signal_order();
        let plugboard_in = self.plugboard.substitute(letter);

        let mut signal = plugboard_in;
        let forward = order.map(|index| {
            let input = signal;
            signal = self.rotors[index].forward_substitute(input);
            (input, signal)
        });

        let reflected = self.reflector.reflect(signal);
        signal = reflected;

        let mut reverse = order;
        reverse.reverse();
        let backward = reverse.map(|index| {
            let input = signal;
            signal = self.rotors[index].backward_substitute(input);
            (input, signal)
        });

        Trace {
            input: letter,
            plugboard_in,
            forward,
            reflected,
            backward,
            output: self.plugboard.substitute(signal),
            positions: self.positions(),
        }
    }

    /// Presses one key and returns the full signal trace.
    ///
    /// Returns `None`, leaving the rotors untouched, if `c` is not an ASCII letter.
    pub fn encrypt_traced(&mut self, c: char) -> Option<Trace> {
        let letter = Letter::from_char(c)?;
        self.step();
        Some(self.trace(letter))
    }

    /// Presses one key: steps the rotors, then enciphers the letter.
    ///
    /// Lower-case letters are upper-cased. Anything that is not an ASCII
    /// letter is returned unchanged and the rotors do not move.
    pub fn step_and_encrypt(&mut self, c: char) -> char {
        self.encrypt_traced(c)
            .map_or(c, |trace| trace.output.to_char())
    }

    /// Enciphers `text` one character at a time, carrying rotor state across.
    ///
    /// Because the machine is reciprocal this also deciphers, given the same
    /// starting positions.
    pub fn encrypt_sequence(&mut self, text: &str) -> String {
        text.chars().map(|c| self.step_and_encrypt(c)).collect()
    }
}
