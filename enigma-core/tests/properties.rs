#![allow(missing_docs)]
//! Property-based tests for the cipher's algebraic guarantees.
//!
//! These run across random rotor choices, positions, plugboards and both
//! stepping conventions.

use enigma_core::alphabet::Letter;
use enigma_core::catalog::{REFLECTORS, ROTORS};
use enigma_core::machine::{Machine, Stepping};
use enigma_core::plugboard::Plugboard;
use enigma_core::reflector::Reflector;
use enigma_core::rotor::Rotor;
use proptest::prelude::*;
use std::collections::HashSet;

/// Everything needed to assemble one random machine.
#[derive(Debug, Clone)]
struct MachineCase {
    rotor_models: Vec<usize>,
    positions: [usize; 3],
    reflector: usize,
    plug_letters: Vec<usize>,
    plug_pairs: usize,
    stepping: Stepping,
}

impl MachineCase {
    fn pairs(&self) -> Vec<(Letter, Letter)> {
        self.plug_letters
            .chunks_exact(2)
            .take(self.plug_pairs)
            .map(|pair| (Letter::from_index(pair[0]), Letter::from_index(pair[1])))
            .collect()
    }

    fn build(&self) -> Machine {
        let rotors = self
            .rotor_models
            .iter()
            .zip(self.positions)
            .map(|(&model, position)| {
                let model = &ROTORS[model];
                let position = Letter::from_index(position).to_string();
                Rotor::new(model.wiring, model.notch, &position).expect("catalog rotor")
            })
            .collect();
        Machine::new(
            rotors,
            Reflector::new(REFLECTORS[self.reflector].wiring).expect("catalog reflector"),
            Plugboard::new(&self.pairs()).expect("disjoint pairs"),
            self.stepping,
        )
        .expect("three rotors")
    }
}

fn machine_case() -> impl Strategy<Value = MachineCase> {
    (
        Just((0..ROTORS.len()).collect::<Vec<_>>()).prop_shuffle(),
        [0..26usize, 0..26usize, 0..26usize],
        0..REFLECTORS.len(),
        Just((0..26usize).collect::<Vec<_>>()).prop_shuffle(),
        0..=13usize,
        prop_oneof![Just(Stepping::RightFast), Just(Stepping::LeftFast)],
    )
        .prop_map(
            |(models, positions, reflector, plug_letters, plug_pairs, stepping)| MachineCase {
                rotor_models: models.into_iter().take(3).collect(),
                positions,
                reflector,
                plug_letters,
                plug_pairs,
                stepping,
            },
        )
}

proptest! {
    #[test]
    fn prop_reciprocity(case in machine_case(), text in "[A-Z]{1,60}") {
        let mut sender = case.build();
        let mut receiver = case.build();
        let ciphertext = sender.encrypt_sequence(&text);
        prop_assert_eq!(receiver.encrypt_sequence(&ciphertext), text);
        prop_assert_eq!(sender.positions(), receiver.positions());
    }

    #[test]
    fn prop_reciprocity_for_every_letter(case in machine_case()) {
        let start = case.build();
        for x in Letter::all() {
            let mut forward = start.clone();
            let y = forward.step_and_encrypt(x.to_char());
            let mut back = start.clone();
            prop_assert_eq!(back.step_and_encrypt(y), x.to_char());
        }
    }

    #[test]
    fn prop_fixed_position_substitution_is_a_permutation(case in machine_case()) {
        let machine = case.build();
        let outputs: HashSet<Letter> = Letter::all().map(|x| machine.substitute(x)).collect();
        prop_assert_eq!(outputs.len(), 26);
        for x in Letter::all() {
            // A reflector with no fixed point means no letter enciphers to itself.
            prop_assert_ne!(machine.substitute(x), x);
        }
    }

    #[test]
    fn prop_stepping_ignores_plaintext(case in machine_case(), text in "[a-zA-Z]{0,80}") {
        let mut typed = case.build();
        let mut repeated = case.build();
        let mut stepped = case.build();
        typed.encrypt_sequence(&text);
        repeated.encrypt_sequence(&"A".repeat(text.len()));
        for _ in 0..text.len() {
            stepped.step();
        }
        prop_assert_eq!(typed.positions(), repeated.positions());
        prop_assert_eq!(typed.positions(), stepped.positions());
    }

    #[test]
    fn prop_non_letters_freeze_state(case in machine_case(), text in "[0-9 .,!?\\-]{1,40}") {
        let mut machine = case.build();
        let before = machine.clone();
        prop_assert_eq!(machine.encrypt_sequence(&text), text);
        prop_assert_eq!(machine, before);
    }

    #[test]
    fn prop_plugboard_involution(case in machine_case()) {
        let pairs = case.pairs();
        let plugboard = Plugboard::new(&pairs).expect("disjoint pairs");
        for &(a, b) in &pairs {
            prop_assert_eq!(plugboard.substitute(a), b);
            prop_assert_eq!(plugboard.substitute(b), a);
        }
        for x in Letter::all() {
            prop_assert_eq!(plugboard.substitute(plugboard.substitute(x)), x);
        }
    }
}
