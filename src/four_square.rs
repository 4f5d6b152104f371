//! Four-Square: digraph substitution over two keyed squares.
//!
//! Both plaintext letters are located in the plain alphabet square. The
//! first output letter comes from the first keyed square at the first
//! letter's row and the second letter's column; the second output letter
//! from the second keyed square at the second letter's row and the first
//! letter's column.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::KeyGenerator;
use crate::utils::square::{JPolicy, KeySquare};

/// Letter appended to odd-length plaintext.
const FILLER: char = 'X';

/// Four-Square digraph cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, FourSquareCipher};
///
/// let four = FourSquareCipher::new("EXAMPLE", "KEYWORD").unwrap();
/// let secret = four.encrypt("help me obi wan kenobi").unwrap();
/// assert_eq!(secret, "FYNFNEHWBXAFFOKHMD");
/// assert_eq!(four.decrypt(&secret).unwrap(), "HELPMEOBIWANKENOBI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FourSquareCipher {
    first_key: String,
    second_key: String,
    first: KeySquare,
    second: KeySquare,
    plain: KeySquare,
}

impl FourSquareCipher {
    /// Creates a Four-Square cipher and builds its three squares.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if either key is empty.
    pub fn new(first_key: impl Into<String>, second_key: impl Into<String>) -> Result<Self> {
        let first_key = first_key.into();
        let second_key = second_key.into();
        if first_key.is_empty() {
            warn!(cipher = "four-square", "rejected empty first key");
            return Err(CipherError::BadKey("First secret key must not be empty"));
        }
        if second_key.is_empty() {
            warn!(cipher = "four-square", "rejected empty second key");
            return Err(CipherError::BadKey("Second secret key must not be empty"));
        }
        let first = KeySquare::build(&first_key, JPolicy::Merge);
        let second = KeySquare::build(&second_key, JPolicy::Merge);
        let plain = KeySquare::build("", JPolicy::Merge);
        debug!(
            cipher = "four-square",
            first_len = first_key.chars().count(),
            second_len = second_key.chars().count(),
            "cipher constructed"
        );
        Ok(FourSquareCipher {
            first_key,
            second_key,
            first,
            second,
            plain,
        })
    }

    /// Encrypts `data` under the two keys without keeping a cipher around.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if either key is empty.
    pub fn encrypt_with(data: &str, first_key: &str, second_key: &str) -> Result<String> {
        Self::new(first_key, second_key)?.encrypt(data)
    }

    /// Decrypts `data` under the two keys without keeping a cipher around.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if either key is empty, plus any
    /// error [`decrypt`](Cipher::decrypt) reports.
    pub fn decrypt_with(data: &str, first_key: &str, second_key: &str) -> Result<String> {
        Self::new(first_key, second_key)?.decrypt(data)
    }

    /// Generates a random valid key pair.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
        KeyGenerator::new(rng).word_pair()
    }

    /// Returns the two keyed squares.
    pub fn squares(&self) -> (&KeySquare, &KeySquare) {
        (&self.first, &self.second)
    }

    fn prepare(text: &str) -> Vec<char> {
        let mut letters: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| match c.to_ascii_uppercase() {
                'J' => 'I',
                c => c,
            })
            .collect();
        if !letters.len().is_multiple_of(2) {
            letters.push(FILLER);
        }
        letters
    }
}

impl Cipher for FourSquareCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "four-square", len = data.len(), "encrypt");
        let letters = Self::prepare(data);
        let mut out = String::with_capacity(letters.len());
        for digraph in letters.chunks_exact(2) {
            let (r1, c1) = self.plain.position(digraph[0])?;
            let (r2, c2) = self.plain.position(digraph[1])?;
            out.push(self.first.get(r1, c2));
            out.push(self.second.get(r2, c1));
        }
        Ok(out)
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "four-square", len = data.len(), "decrypt");
        let text: Vec<char> = data.chars().collect();
        if !text.len().is_multiple_of(2) {
            return Err(CipherError::MisalignedText {
                len: text.len(),
                unit: 2,
            });
        }
        let mut out = String::with_capacity(text.len());
        for digraph in text.chunks_exact(2) {
            let (r1, c1) = self.first.position(digraph[0])?;
            let (r2, c2) = self.second.position(digraph[1])?;
            out.push(self.plain.get(r1, c2));
            out.push(self.plain.get(r2, c1));
        }
        Ok(out)
    }

    fn key(&self) -> CipherKey {
        CipherKey::Pair(self.first_key.clone(), self.second_key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::FourSquare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_keys() {
        assert_eq!(
            FourSquareCipher::new("", "KEY"),
            Err(CipherError::BadKey("First secret key must not be empty"))
        );
        assert_eq!(
            FourSquareCipher::new("KEY", ""),
            Err(CipherError::BadKey("Second secret key must not be empty"))
        );
    }

    #[test]
    fn test_prepare() {
        assert_eq!(FourSquareCipher::prepare("Jam!"), vec!['I', 'A', 'M', 'X']);
        // Doubled letters are kept together
        assert_eq!(FourSquareCipher::prepare("ee"), vec!['E', 'E']);
    }

    #[test]
    fn test_squares_use_merge() {
        let four = FourSquareCipher::new("jejune", "KEY").unwrap();
        let (first, _) = four.squares();
        assert_eq!(first.row(0), ['I', 'E', 'U', 'N', 'A']);
    }

    #[test]
    fn test_odd_tail_is_padded() {
        let four = FourSquareCipher::new("EXAMPLE", "KEYWORD").unwrap();
        let encrypted = four.encrypt("Jam").unwrap();
        assert_eq!(encrypted, "LWIU");
        assert_eq!(four.decrypt(&encrypted).unwrap(), "IAMX");
    }

    #[test]
    fn test_decrypt_rejects_odd_length() {
        let four = FourSquareCipher::new("A", "B").unwrap();
        assert_eq!(
            four.decrypt("ABC"),
            Err(CipherError::MisalignedText { len: 3, unit: 2 })
        );
    }

    #[test]
    fn test_decrypt_rejects_unknown_letter() {
        let four = FourSquareCipher::new("A", "B").unwrap();
        assert_eq!(four.decrypt("a1"), Err(CipherError::CharacterNotFound('a')));
    }

    #[test]
    fn test_one_shot_matches_instance() {
        let encrypted = FourSquareCipher::encrypt_with("attack", "ALPHA", "BRAVO").unwrap();
        let four = FourSquareCipher::new("ALPHA", "BRAVO").unwrap();
        assert_eq!(encrypted, four.encrypt("attack").unwrap());
        assert_eq!(
            FourSquareCipher::decrypt_with(&encrypted, "ALPHA", "BRAVO").unwrap(),
            "ATTACK"
        );
    }

    #[test]
    fn test_empty_input() {
        let four = FourSquareCipher::new("A", "B").unwrap();
        assert_eq!(four.encrypt("").unwrap(), "");
        assert_eq!(four.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_key_accessor() {
        let four = FourSquareCipher::new("one", "two").unwrap();
        assert_eq!(four.key(), CipherKey::Pair("one".into(), "two".into()));
    }
}
