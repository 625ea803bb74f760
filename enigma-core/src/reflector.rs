use crate::alphabet::{Letter, Wiring};
use crate::error::ConfigError;

/// The stationary umkehrwalze that sends the signal back through the rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Builds a reflector from its wiring text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the wiring is not a bijection or is not
    /// its own inverse.
    pub fn new(wiring: &str) -> Result<Self, ConfigError> {
        let parsed = Wiring::parse(wiring)?;
        if let Some(from) = parsed.involution_break() {
            let to = parsed.map(from);
            return Err(ConfigError::NotInvolutive {
                wiring: wiring.to_owned(),
                from: from.to_char(),
                to: to.to_char(),
                back: parsed.map(to).to_char(),
            });
        }
        Ok(Self { wiring: parsed })
    }

    /// Reflects `letter`.
    #[must_use]
    pub const fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }

    /// The reflector's wiring.
    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
