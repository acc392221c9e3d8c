//! Seeds for reproducible puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed driving every random choice the generator makes.
///
/// The same seed always produces the same puzzle, which makes generated
/// puzzles shareable: print the seed, and anyone can regenerate the exact
/// grid from it.
///
/// Seeds render as 64 lowercase hex characters and parse back from the same
/// format.
///
/// # Examples
///
/// ```
/// use sudoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a full
    /// 256-bit seed. Useful for human-memorable seeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_generator::PuzzleSeed;
    ///
    /// let a = PuzzleSeed::from_phrase("daily puzzle 2026-08-30");
    /// let b = PuzzleSeed::from_phrase("daily puzzle 2026-08-30");
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self(digest.into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random number generator this seed stands for.
    #[must_use]
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

/// An error which can be returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {length}")]
    InvalidLength {
        /// Length of the rejected input.
        #[error(not(source))]
        length: usize,
    },
    /// The input contains a character outside `[0-9a-fA-F]`.
    #[display("invalid hex character: {character:?}")]
    InvalidCharacter {
        /// The rejected character.
        #[error(not(source))]
        character: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 64 {
            return Err(ParseSeedError::InvalidLength { length });
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                return Err(ParseSeedError::InvalidLength { length });
            };
            *byte = (hex_value(hi)? << 4) | hex_value(lo)?;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(character: char) -> Result<u8, ParseSeedError> {
    let digit = character
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidCharacter { character })?;
    #[expect(clippy::cast_possible_truncation)]
    let value = digit as u8;
    Ok(value)
}
