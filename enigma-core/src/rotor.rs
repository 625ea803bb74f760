// File:    rotor.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: A single stateful substitution rotor with a rotating contact ring and a turnover notch.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A single rotor (walze).

use crate::alphabet::{Letter, Wiring};
use crate::error::ConfigError;
use log::trace;

/// One rotor of the machine.
///
/// The wiring is fixed; only the position changes, and only when the
/// machine steps or a caller resets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    reverse_wiring: Wiring,
    position: Letter,
    notch: Letter,
}

impl Rotor {
    /// Builds a rotor from its wiring text, notch letter and start position.
    ///
    /// # Arguments
    ///
    /// * `wiring` - The 26-letter forward wiring.
    /// * `notch` - The position at which this rotor drives its neighbour.
    /// * `position` - The initial window letter.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the wiring is not a bijection over A-Z or
    /// if `notch` or `position` is not a single letter.
    pub fn new(wiring: &str, notch: &str, position: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            Wiring::parse(wiring)?,
            Letter::parse("notch", notch)?,
            Letter::parse("rotor position", position)?,
        ))
    }

    /// Builds a rotor from already validated parts.
    #[must_use]
    pub fn from_parts(wiring: Wiring, notch: Letter, position: Letter) -> Self {
        let reverse_wiring = wiring.inverse();
        Self {
            wiring,
            reverse_wiring,
            position,
            notch,
        }
    }

    /// The letter currently showing in the window.
    #[must_use]
    pub const fn position(&self) -> Letter {
        self.position
    }

    /// The turnover letter.
    #[must_use]
    pub const fn notch(&self) -> Letter {
        self.notch
    }

    /// The forward wiring.
    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Turns the rotor to `position` without touching its neighbours.
    pub const fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Advances one step, Z wrapping to A.
    pub const fn rotate(&mut self) {
        self.position = self.position.shifted(1);
    }

    /// Whether the rotor sits at its notch and will drive its neighbour.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Passes `letter` through the rotor towards the reflector.
    #[must_use]
    pub fn forward_substitute(&self, letter: Letter) -> Letter {
        let out = self.substitute(&self.wiring, letter);
        trace!("forward {letter} -> {out} at {}", self.position);
        out
    }

    /// Passes `letter` back through the rotor on the return path.
    #[must_use]
    pub fn backward_substitute(&self, letter: Letter) -> Letter {
        let out = self.substitute(&self.reverse_wiring, letter);
        trace!("backward {letter} -> {out} at {}", self.position);
        out
    }

    // Enter the contact ring offset by the position, leave it offset back.
    fn substitute(&self, table: &Wiring, letter: Letter) -> Letter {
        let offset = self.position.index();
        table.map(letter.shifted(offset)).unshifted(offset)
    }
}
