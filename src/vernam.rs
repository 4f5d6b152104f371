//! Vernam: character-wise XOR against a key stretched to the data length.
//!
//! Encryption repeats a short key cyclically and cuts a long one down to
//! the data length. Decryption always repeats cyclically. Both adjustments
//! yield the same keystream, so round trips are exact.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::random_word;

/// XOR stream cipher over Unicode code points.
///
/// Output characters may be control characters or lie outside the
/// printable range.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, VernamCipher};
///
/// let vernam = VernamCipher::new("KEY").unwrap();
/// let secret = vernam.encrypt("Hello").unwrap();
/// assert_eq!(vernam.decrypt(&secret).unwrap(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VernamCipher {
    key: Vec<char>,
}

impl VernamCipher {
    /// Creates a Vernam cipher.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty.
    pub fn new(key: impl AsRef<str>) -> Result<Self> {
        let key: Vec<char> = key.as_ref().chars().collect();
        if key.is_empty() {
            warn!(cipher = "vernam", "rejected empty key");
            return Err(CipherError::BadKey("Secret key must not be empty"));
        }
        debug!(cipher = "vernam", key_len = key.len(), "cipher constructed");
        Ok(VernamCipher { key })
    }

    /// Generates a random valid key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
        random_word(rng)
    }

    /// Key repeated cyclically until it is `len` characters long.
    fn repeated_key(&self, len: usize) -> Vec<char> {
        self.key.iter().copied().cycle().take(len).collect()
    }

    fn xor(data: &[char], key: &[char]) -> Result<String> {
        if data.len() != key.len() {
            return Err(CipherError::InvalidLength {
                key: key.len(),
                data: data.len(),
            });
        }
        data.iter()
            .zip(key)
            .map(|(&d, &k)| {
                let code = d as u32 ^ k as u32;
                char::from_u32(code).ok_or(CipherError::InvalidCodePoint(code))
            })
            .collect()
    }
}

impl Cipher for VernamCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "vernam", len = data.len(), "encrypt");
        let data: Vec<char> = data.chars().collect();
        if data.is_empty() {
            return Ok(String::new());
        }
        let key = if self.key.len() < data.len() {
            self.repeated_key(data.len())
        } else {
            self.key[..data.len()].to_vec()
        };
        Self::xor(&data, &key)
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "vernam", len = data.len(), "decrypt");
        let data: Vec<char> = data.chars().collect();
        if data.is_empty() {
            return Ok(String::new());
        }
        let key = self.repeated_key(data.len());
        Self::xor(&data, &key)
    }

    fn key(&self) -> CipherKey {
        CipherKey::Word(self.key.iter().collect())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Vernam
    }
}
