//! Caesar: monoalphabetic shift cipher.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::random_shift;
use crate::utils::alphabet::ALPHABET_SIZE;

/// Shifts every ASCII letter forward by a fixed amount, preserving case.
///
/// # Examples
///
/// ```
/// use classicrypt::{CaesarCipher, Cipher};
///
/// let caesar = CaesarCipher::new(3).unwrap();
/// assert_eq!(caesar.encrypt("abc").unwrap(), "def");
/// assert_eq!(caesar.decrypt("def").unwrap(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: i32,
}

impl CaesarCipher {
    /// Creates a Caesar cipher with the given shift.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `shift <= 0`.
    pub fn new(shift: i32) -> Result<Self> {
        if shift <= 0 {
            warn!(cipher = "caesar", "rejected non-positive shift");
            return Err(CipherError::BadKey("Key must be a positive integer"));
        }
        debug!(cipher = "caesar", "cipher constructed");
        Ok(CaesarCipher { shift })
    }

    /// Returns the shift.
    pub fn shift(&self) -> i32 {
        self.shift
    }

    /// Generates a random valid shift.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> i32 {
        random_shift(rng)
    }

    /// Applies a forward shift of `shift` positions to every letter.
    fn rotate(text: &str, shift: usize) -> String {
        text.chars()
            .map(|c| {
                let base = if c.is_ascii_uppercase() {
                    b'A'
                } else if c.is_ascii_lowercase() {
                    b'a'
                } else {
                    return c;
                };
                let offset = (c as u8 - base) as usize;
                (base + ((offset + shift) % ALPHABET_SIZE) as u8) as char
            })
            .collect()
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "caesar", len = data.len(), "encrypt");
        Ok(Self::rotate(data, self.shift as usize % ALPHABET_SIZE))
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "caesar", len = data.len(), "decrypt");
        let inverse = ALPHABET_SIZE - (self.shift as usize % ALPHABET_SIZE);
        Ok(Self::rotate(data, inverse))
    }

    fn key(&self) -> CipherKey {
        CipherKey::Shift(self.shift)
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }
}
