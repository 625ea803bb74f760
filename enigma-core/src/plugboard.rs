use crate::alphabet::{ALPHABET_LEN, Letter};
use crate::error::ConfigError;

/// The steckerbrett: cables that swap pairs of letters on the way in and out.
///
/// The mapping is always symmetric, so applying it twice is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [Letter; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for letter in Letter::all() {
            table[letter.index()] = letter;
        }
        Self { table }
    }
}

impl Plugboard {
    /// Wires up the given cables. Letters not mentioned pass through unchanged.
    ///
    /// # Errors
    ///
    /// Fails if a letter is used by two cables or a cable joins a letter to itself.
    pub fn new(pairs: &[(Letter, Letter)]) -> Result<Self, ConfigError> {
        let mut board = Self::default();
        let mut used = [false; ALPHABET_LEN];
        for &(a, b) in pairs {
            if a == b {
                return Err(ConfigError::PlugboardSelfPair {
                    letter: a.to_char(),
                });
            }
            for letter in [a, b] {
                if used[letter.index()] {
                    return Err(ConfigError::PlugboardConflict {
                        letter: letter.to_char(),
                    });
                }
                used[letter.index()] = true;
            }
            board.table[a.index()] = b;
            board.table[b.index()] = a;
        }
        Ok(board)
    }

    /// Same as [`Plugboard::new`], taking the pairs as one-letter strings.
    ///
    /// # Errors
    ///
    /// Fails if an entry is not a single letter, or on any error of [`Plugboard::new`].
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> Result<Self, ConfigError> {
        let parsed = pairs
            .iter()
            .map(|(a, b)| -> Result<_, ConfigError> {
                Ok((
                    Letter::parse("plugboard letter", a.as_ref())?,
                    Letter::parse("plugboard letter", b.as_ref())?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// The partner of `letter`, or `letter` itself if it is not plugged.
    #[must_use]
    pub const fn substitute(&self, letter: Letter) -> Letter {
        self.table[letter.index()]
    }

    /// The configured cables, each listed once with the smaller letter first.
    #[must_use]
    pub fn pairs(&self) -> Vec<(Letter, Letter)> {
        Letter::all()
            .map(|letter| (letter, self.substitute(letter)))
            .filter(|(a, b)| a < b)
            .collect()
    }
}
