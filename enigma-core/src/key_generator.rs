// File:    key_generator.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Draws random daily key sheets from the rotor and reflector catalog.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{ALPHABET_LEN, Letter};
use crate::catalog;
use crate::machine::Stepping;
use crate::settings::{MachineSettings, RotorSetting};
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

/// Most cables a plugboard can hold.
pub const MAX_PLUG_PAIRS: usize = ALPHABET_LEN / 2;

/// Generates a random key sheet.
///
/// # Arguments
///
/// * `plug_pairs` - Number of plugboard cables, clamped to 13.
/// * `stepping` - Stepping convention recorded on the sheet.
///
/// # Returns
///
/// A key sheet with three distinct catalog rotors at random positions, a
/// random reflector, disjoint random cables and a fresh id.
#[must_use]
pub fn generate_settings(plug_pairs: usize, stepping: Stepping) -> MachineSettings {
    let mut rng = rand::rng();

    let mut models: Vec<_> = catalog::ROTORS.iter().collect();
    models.shuffle(&mut rng);
    let rotors = models
        .iter()
        .take(3)
        .map(|model| RotorSetting {
            name: model.name.to_string(),
            position: Letter::from_index(rng.random_range(0..ALPHABET_LEN)).to_string(),
        })
        .collect();

    let reflector = catalog::REFLECTORS[rng.random_range(0..catalog::REFLECTORS.len())];

    let mut letters: Vec<Letter> = Letter::all().collect();
    letters.shuffle(&mut rng);
    let plugboard = letters
        .chunks_exact(2)
        .take(plug_pairs.min(MAX_PLUG_PAIRS))
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect();

    MachineSettings {
        id: Uuid::new_v4().to_string(),
        rotors,
        reflector: reflector.name.to_string(),
        plugboard,
        stepping,
    }
}
