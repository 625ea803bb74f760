// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for enigma-core, assembling rotors, reflector and plugboard into a machine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Enigma Core Library
//!
//! This library simulates a three-rotor Enigma machine: the letter
//! substitution pipeline, the rotor stepping state machine, key sheets and
//! caller-owned cipher sessions.
//!
//! ```
//! use enigma_core::settings::MachineSettings;
//!
//! let settings = MachineSettings::new(["I", "II", "III"], ['A', 'A', 'A'], "B");
//! let mut machine = settings.build().unwrap();
//! assert_eq!(machine.encrypt_sequence("AAAAA"), "BDZGO");
//! assert_eq!(machine.position_string(), "AAF");
//! ```

/// Letters and validated wirings.
pub mod alphabet;
/// Historical rotor and reflector tables.
pub mod catalog;
/// Configuration and session errors.
pub mod error;
/// Random key sheet generation.
pub mod key_generator;
/// The assembled machine and its stepping state machine.
pub mod machine;
/// Letter-pair swaps applied before and after the rotors.
pub mod plugboard;
/// The stationary reflector.
pub mod reflector;
/// A single rotor.
pub mod rotor;
/// Caller-owned cipher sessions.
pub mod session;
/// Key sheets and their JSON persistence.
pub mod settings;
