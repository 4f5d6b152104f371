//! Pair: Playfair-style digraph substitution over one key square.
//!
//! Plaintext is uppercased, stripped to letters, and has `J` folded into
//! `I`. It is then cut into digraphs, with an `X` wedged between doubled
//! letters and appended to a trailing single letter. Each digraph is
//! replaced by the row, column or rectangle rule applied to the
//! [`KeySquare`] built from the key with `J` dropped.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::random_word;
use crate::utils::square::{JPolicy, KeySquare, SQUARE_SIZE};

/// Letter inserted between doubled letters and after a trailing single one.
const FILLER: char = 'X';

/// Direction of the row/column shift.
#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, index: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % SQUARE_SIZE,
            Direction::Backward => (index + SQUARE_SIZE - 1) % SQUARE_SIZE,
        }
    }
}

/// Playfair-style digraph cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, PairCipher};
///
/// let pair = PairCipher::new("PLAYFAIREXAMPLE").unwrap();
/// let secret = pair.encrypt("Hide the gold in the tree stump").unwrap();
/// assert_eq!(secret, "BMODZBXDNABEKUDMUIXMMOUVIF");
/// assert_eq!(pair.decrypt(&secret).unwrap(), "HIDETHEGOLDINTHETREXESTUMP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCipher {
    key: String,
    square: KeySquare,
}

impl PairCipher {
    /// Creates a digraph cipher and builds its key square.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            warn!(cipher = "pair", "rejected empty key");
            return Err(CipherError::BadKey("Secret key must not be empty"));
        }
        let square = KeySquare::build(&key, JPolicy::Drop);
        debug!(cipher = "pair", key_len = key.chars().count(), "cipher constructed");
        Ok(PairCipher { key, square })
    }

    /// Generates a random valid key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
        random_word(rng)
    }

    /// Returns the key square.
    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    /// Normalizes plaintext and splits it into digraphs.
    fn prepare(text: &str) -> Vec<(char, char)> {
        let letters: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| match c.to_ascii_uppercase() {
                'J' => 'I',
                c => c,
            })
            .collect();

        let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
        let mut i = 0;
        while i < letters.len() {
            let first = letters[i];
            let second = letters.get(i + 1).copied().unwrap_or(FILLER);
            if first == second {
                digraphs.push((first, FILLER));
                i += 1;
            } else {
                digraphs.push((first, second));
                i += 2;
            }
        }
        digraphs
    }

    fn substitute(&self, a: char, b: char, direction: Direction) -> Result<[char; 2]> {
        let (r1, c1) = self.square.position(a)?;
        let (r2, c2) = self.square.position(b)?;
        let out = if r1 == r2 {
            [
                self.square.get(r1, direction.step(c1)),
                self.square.get(r2, direction.step(c2)),
            ]
        } else if c1 == c2 {
            [
                self.square.get(direction.step(r1), c1),
                self.square.get(direction.step(r2), c2),
            ]
        } else {
            [self.square.get(r1, c2), self.square.get(r2, c1)]
        };
        Ok(out)
    }
}

impl Cipher for PairCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "pair", len = data.len(), "encrypt");
        let mut out = String::with_capacity(data.len() + 2);
        for (a, b) in Self::prepare(data) {
            out.extend(self.substitute(a, b, Direction::Forward)?);
        }
        Ok(out)
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "pair", len = data.len(), "decrypt");
        let text: Vec<char> = data.chars().collect();
        if !text.len().is_multiple_of(2) {
            return Err(CipherError::MisalignedText {
                len: text.len(),
                unit: 2,
            });
        }
        let mut out = String::with_capacity(text.len());
        for digraph in text.chunks_exact(2) {
            out.extend(self.substitute(digraph[0], digraph[1], Direction::Backward)?);
        }
        Ok(out)
    }

    fn key(&self) -> CipherKey {
        CipherKey::Word(self.key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Pair
    }
}
