//! Vigenère: polyalphabetic substitution with a running key.
//!
//! Encryption removes spaces and uppercases the text; decryption takes
//! ciphertext as-is. A round trip returns the normalized plaintext, so
//! `"attack at dawn"` comes back as `"ATTACKATDAWN"`.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::random_word;
use crate::utils::alphabet::ALPHABET_SIZE;

const MODULUS: i32 = ALPHABET_SIZE as i32;
const BASE: i32 = b'A' as i32;

/// Vigenère cipher over the uppercase Latin alphabet.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, VigenereCipher};
///
/// let vigenere = VigenereCipher::new("LEMON").unwrap();
/// assert_eq!(vigenere.encrypt("attack at dawn").unwrap(), "LXFOPVEFRNHR");
/// assert_eq!(vigenere.decrypt("LXFOPVEFRNHR").unwrap(), "ATTACKATDAWN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    key: String,
}

impl VigenereCipher {
    /// Creates a Vigenère cipher.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            warn!(cipher = "vigenere", "rejected empty key");
            return Err(CipherError::BadKey("Secret key must not be empty"));
        }
        debug!(cipher = "vigenere", key_len = key.chars().count(), "cipher constructed");
        Ok(VigenereCipher { key })
    }

    /// Generates a random valid key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
        random_word(rng)
    }

    /// Uppercased key repeated to exactly `len` characters.
    fn running_key(&self, len: usize) -> Vec<char> {
        self.key.to_uppercase().chars().cycle().take(len).collect()
    }

    fn normalize(data: &str) -> String {
        data.replace(' ', "").to_uppercase()
    }

    fn combine(text: &str, key: &[char], op: impl Fn(i32, i32) -> i32) -> String {
        text.chars()
            .zip(key.iter())
            .map(|(t, &k)| {
                // Result lies in `BASE-25..=BASE+25`, always ASCII.
                let x = op(t as i32, k as i32) % MODULUS;
                (x + BASE) as u8 as char
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "vigenere", len = data.len(), "encrypt");
        let text = Self::normalize(data);
        let key = self.running_key(text.chars().count());
        Ok(Self::combine(&text, &key, |t, k| (t - BASE) + (k - BASE)))
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "vigenere", len = data.len(), "decrypt");
        let key = self.running_key(data.chars().count());
        Ok(Self::combine(data, &key, |c, k| c - k + MODULUS))
    }

    fn key(&self) -> CipherKey {
        CipherKey::Word(self.key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_key() {
        assert_eq!(
            VigenereCipher::new(""),
            Err(CipherError::BadKey("Secret key must not be empty"))
        );
    }

    #[test]
    fn test_lemon_vector() {
        let vigenere = VigenereCipher::new("LEMON").unwrap();
        assert_eq!(vigenere.encrypt("ATTACKATDAWN").unwrap(), "LXFOPVEFRNHR");
        assert_eq!(vigenere.decrypt("LXFOPVEFRNHR").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_lowercase_key_is_uppercased() {
        let upper = VigenereCipher::new("LEMON").unwrap();
        let lower = VigenereCipher::new("lemon").unwrap();
        assert_eq!(
            upper.encrypt("attackatdawn").unwrap(),
            lower.encrypt("attackatdawn").unwrap()
        );
    }

    #[test]
    fn test_roundtrip_is_normalized() {
        let vigenere = VigenereCipher::new("key").unwrap();
        let encrypted = vigenere.encrypt("hello world").unwrap();
        assert_eq!(encrypted, "RIJVSUYVJN");
        assert_eq!(vigenere.decrypt(&encrypted).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_key_longer_than_text() {
        let vigenere = VigenereCipher::new("LEMONADE").unwrap();
        assert_eq!(vigenere.encrypt("ATT").unwrap(), "LXF");
    }

    #[test]
    fn test_empty_input() {
        let vigenere = VigenereCipher::new("KEY").unwrap();
        assert_eq!(vigenere.encrypt("").unwrap(), "");
        assert_eq!(vigenere.encrypt("   ").unwrap(), "");
        assert_eq!(vigenere.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_key_accessor() {
        let vigenere = VigenereCipher::new("Secret").unwrap();
        assert_eq!(vigenere.key(), CipherKey::Word("Secret".into()));
    }
}
