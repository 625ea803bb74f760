use crate::catalog;
use crate::error::ConfigError;
use crate::machine::{Machine, Stepping};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One rotor slot of a key sheet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RotorSetting {
    /// Catalog name of the rotor, e.g. `"III"`.
    pub name: String,
    /// Window letter.
    pub position: String,
}

/// A key sheet: everything needed to set up a machine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineSettings {
    /// Identifier of the key sheet.
    #[serde(default)]
    pub id: String,
    /// Rotor slots, left to right.
    pub rotors: Vec<RotorSetting>,
    /// Catalog name of the reflector, e.g. `"B"`.
    pub reflector: String,
    /// Plugboard cables.
    #[serde(default)]
    pub plugboard: Vec<(String, String)>,
    /// Stepping convention.
    #[serde(default)]
    pub stepping: Stepping,
}

impl MachineSettings {
    /// Creates a key sheet for catalog rotors `names` at `positions`.
    #[must_use]
    pub fn new(names: [&str; 3], positions: [char; 3], reflector: &str) -> Self {
        let rotors = names
            .iter()
            .zip(positions)
            .map(|(name, position)| RotorSetting {
                name: (*name).to_string(),
                position: position.to_string(),
            })
            .collect();
        Self {
            id: String::new(),
            rotors,
            reflector: reflector.to_string(),
            plugboard: vec![],
            stepping: Stepping::default(),
        }
    }

    /// Builds the machine this key sheet describes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown catalog names, bad positions,
    /// conflicting plugboard cables or a wrong number of rotors.
    pub fn build(&self) -> Result<Machine, ConfigError> {
        let rotors = self
            .rotors
            .iter()
            .map(|setting| -> Result<Rotor, ConfigError> {
                let model = catalog::rotor(&setting.name)
                    .ok_or_else(|| ConfigError::UnknownRotor(setting.name.clone()))?;
                Rotor::new(model.wiring, model.notch, &setting.position)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let model = catalog::reflector(&self.reflector)
            .ok_or_else(|| ConfigError::UnknownReflector(self.reflector.clone()))?;
        let reflector = Reflector::new(model.wiring)?;
        let plugboard = Plugboard::from_pairs(self.plugboard.as_slice())?;
        Machine::new(rotors, reflector, plugboard, self.stepping)
    }

    /// Copies the machine's current rotor positions into this key sheet.
    pub fn record_positions(&mut self, machine: &Machine) {
        for (setting, position) in self.rotors.iter_mut().zip(machine.positions()) {
            setting.position = position.to_string();
        }
    }

    /// Rotor positions as a string such as `"ABC"`.
    #[must_use]
    pub fn position_string(&self) -> String {
        self.rotors.iter().map(|r| r.position.as_str()).collect()
    }
}

/// Loads a key sheet from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid key sheet.
pub fn load_settings(path: &Path) -> io::Result<MachineSettings> {
    let settings_str = fs::read_to_string(path)?;
    serde_json::from_str(&settings_str).map_err(io::Error::other)
}

/// Saves a key sheet as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the key sheet cannot be serialized or written.
pub fn save_settings(path: &Path, settings: &MachineSettings) -> io::Result<()> {
    let settings_str = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
    fs::write(path, settings_str)
}
