//! Historical rotor and reflector wirings.
//!
//! These tables are read-only configuration data. The machine components
//! still validate them when they are built.

/// A rotor model from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorModel {
    /// Roman numeral name, `I` to `V`.
    pub name: &'static str,
    /// Forward wiring.
    pub wiring: &'static str,
    /// Turnover letter.
    pub notch: &'static str,
}

/// A reflector model from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorModel {
    /// Letter name, `A` to `C`.
    pub name: &'static str,
    /// Involutive wiring.
    pub wiring: &'static str,
}

/// Rotors I to V.
pub static ROTORS: [RotorModel; 5] = [
    RotorModel {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: "Q",
    },
    RotorModel {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: "E",
    },
    RotorModel {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: "V",
    },
    RotorModel {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: "J",
    },
    RotorModel {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: "Z",
    },
];

/// Reflectors A to C.
pub static REFLECTORS: [ReflectorModel; 3] = [
    ReflectorModel {
        name: "A",
        wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    ReflectorModel {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorModel {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Looks up a rotor by name, ignoring case.
#[must_use]
pub fn rotor(name: &str) -> Option<&'static RotorModel> {
    ROTORS.iter().find(|m| m.name.eq_ignore_ascii_case(name.trim()))
}

/// Looks up a reflector by name, ignoring case.
#[must_use]
pub fn reflector(name: &str) -> Option<&'static ReflectorModel> {
    REFLECTORS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
}
