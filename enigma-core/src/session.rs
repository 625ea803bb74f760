use crate::alphabet::Letter;
use crate::error::EnigmaError;
use crate::machine::{Machine, ROTOR_COUNT, Trace};
use crate::settings::MachineSettings;
use log::{info, warn};

/// Result of a transform: the ciphertext and where the rotors ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Enciphered text.
    pub ciphertext: String,
    /// Rotor positions after the transform, left to right.
    pub rotor_positions: [Letter; ROTOR_COUNT],
}

/// A caller-owned cipher session.
///
/// A session is configured once and then receives any number of keypresses.
/// It holds no process-wide state; independent sessions share nothing.
#[derive(Debug, Default)]
pub struct Session {
    machine: Option<Machine>,
}

impl Session {
    /// Creates an unconfigured session.
    #[must_use]
    pub const fn new() -> Self {
        Self { machine: None }
    }

    /// Builds a machine from `settings` and makes it current.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Config`] if the settings are invalid. The
    /// previously configured machine, if any, stays in place.
    pub fn configure(&mut self, settings: &MachineSettings) -> Result<(), EnigmaError> {
        match settings.build() {
            Ok(machine) => {
                info!("Configured machine at {}", machine.position_string());
                self.machine = Some(machine);
                Ok(())
            }
            Err(e) => {
                warn!("Rejected machine configuration: {e}");
                Err(e.into())
            }
        }
    }

    /// Makes an already assembled machine current.
    pub fn install(&mut self, machine: Machine) {
        self.machine = Some(machine);
    }

    /// Drops the current machine.
    pub fn reset(&mut self) {
        self.machine = None;
    }

    /// The current machine.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Uninitialized`] if nothing is configured.
    pub fn machine(&self) -> Result<&Machine, EnigmaError> {
        self.machine.as_ref().ok_or(EnigmaError::Uninitialized)
    }

    fn machine_mut(&mut self) -> Result<&mut Machine, EnigmaError> {
        self.machine.as_mut().ok_or(EnigmaError::Uninitialized)
    }

    /// Presses one key.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Uninitialized`] if nothing is configured.
    pub fn press(&mut self, c: char) -> Result<KeyPress, EnigmaError> {
        let machine = self.machine_mut()?;
        let ciphertext = machine.step_and_encrypt(c).to_string();
        Ok(KeyPress {
            ciphertext,
            rotor_positions: machine.positions(),
        })
    }

    /// Presses one key and returns the signal trace, or `None` for a
    /// character that passes through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Uninitialized`] if nothing is configured.
    pub fn press_traced(&mut self, c: char) -> Result<Option<Trace>, EnigmaError> {
        Ok(self.machine_mut()?.encrypt_traced(c))
    }

    /// Enciphers a whole text, carrying rotor state across characters.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Uninitialized`] if nothing is configured.
    pub fn encrypt(&mut self, text: &str) -> Result<KeyPress, EnigmaError> {
        let machine = self.machine_mut()?;
        let ciphertext = machine.encrypt_sequence(text);
        Ok(KeyPress {
            ciphertext,
            rotor_positions: machine.positions(),
        })
    }
}
