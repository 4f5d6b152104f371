//! Matrix: columnar transposition.
//!
//! Text is written row by row into a grid as wide as the key, the last row
//! padded with spaces. Columns are read top to bottom in the order of their
//! key characters; equal characters keep their left-to-right order.

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::random_word;

/// Character used to fill the last row of the grid.
const FILLER: char = ' ';

/// Columnar transposition cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, MatrixCipher};
///
/// let matrix = MatrixCipher::new("ZEBRA").unwrap();
/// let secret = matrix.encrypt("WEAREDISCOVERED").unwrap();
/// assert_eq!(secret, "EODASREIERCEWDV");
/// assert_eq!(matrix.decrypt(&secret).unwrap(), "WEAREDISCOVERED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixCipher {
    key: String,
    column_order: Vec<usize>,
}

impl MatrixCipher {
    /// Creates a transposition cipher.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            warn!(cipher = "matrix", "rejected empty key");
            return Err(CipherError::BadKey("Secret key must not be empty"));
        }
        let column_order = Self::column_order(&key);
        debug!(cipher = "matrix", columns = column_order.len(), "cipher constructed");
        Ok(MatrixCipher { key, column_order })
    }

    /// Encrypts `data` under `key` without keeping a cipher around.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty.
    pub fn encrypt_with(data: &str, key: &str) -> Result<String> {
        Self::new(key)?.encrypt(data)
    }

    /// Decrypts `data` under `key` without keeping a cipher around.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if `key` is empty, or
    /// [`CipherError::MisalignedText`] if `data` does not fill the grid.
    pub fn decrypt_with(data: &str, key: &str) -> Result<String> {
        Self::new(key)?.decrypt(data)
    }

    /// Generates a random valid key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
        random_word(rng)
    }

    /// Column indices sorted by key character, stable on ties.
    fn column_order(key: &str) -> Vec<usize> {
        let chars: Vec<char> = key.chars().collect();
        let mut order: Vec<usize> = (0..chars.len()).collect();
        order.sort_by_key(|&i| chars[i]);
        order
    }

    fn columns(&self) -> usize {
        self.column_order.len()
    }
}

impl Cipher for MatrixCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "matrix", len = data.len(), "encrypt");
        let cols = self.columns();
        let mut grid: Vec<char> = data.chars().collect();
        let rows = grid.len().div_ceil(cols);
        grid.resize(rows * cols, FILLER);

        let mut out = String::with_capacity(grid.len());
        for &col in &self.column_order {
            out.extend((0..rows).map(|row| grid[row * cols + col]));
        }
        Ok(out)
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "matrix", len = data.len(), "decrypt");
        let cols = self.columns();
        let text: Vec<char> = data.chars().collect();
        if !text.len().is_multiple_of(cols) {
            return Err(CipherError::MisalignedText {
                len: text.len(),
                unit: cols,
            });
        }
        let rows = text.len() / cols;

        let mut grid = vec![FILLER; text.len()];
        let mut source = text.into_iter();
        for &col in &self.column_order {
            for row in 0..rows {
                if let Some(c) = source.next() {
                    grid[row * cols + col] = c;
                }
            }
        }

        let plain: String = grid.into_iter().collect();
        Ok(plain.trim_end_matches(FILLER).to_string())
    }

    fn key(&self) -> CipherKey {
        CipherKey::Word(self.key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_key() {
        assert!(matches!(MatrixCipher::new(""), Err(CipherError::BadKey(_))));
        assert!(matches!(
            MatrixCipher::encrypt_with("text", ""),
            Err(CipherError::BadKey(_))
        ));
    }

    #[test]
    fn test_column_order_zebra() {
        assert_eq!(MatrixCipher::column_order("ZEBRA"), vec![4, 2, 1, 3, 0]);
    }

    #[test]
    fn test_column_order_ties_are_stable() {
        assert_eq!(MatrixCipher::column_order("BAB"), vec![1, 0, 2]);
        assert_eq!(MatrixCipher::column_order("AAAA"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_padding_fills_last_row() {
        let matrix = MatrixCipher::new("BAB").unwrap();
        assert_eq!(matrix.encrypt("HELLO").unwrap(), "EOHLL ");
        assert_eq!(matrix.decrypt("EOHLL ").unwrap(), "HELLO");
    }

    #[test]
    fn test_ciphertext_length_is_full_rectangle() {
        let matrix = MatrixCipher::new("CAB").unwrap();
        let encrypted = matrix.encrypt("ABCDEFG").unwrap();
        assert_eq!(encrypted, "BE CF ADG");
        assert_eq!(encrypted.len(), 9);
    }

    #[test]
    fn test_embedded_spaces_survive() {
        let matrix = MatrixCipher::new("SECRET").unwrap();
        let text = "meet me at the old mill";
        let encrypted = matrix.encrypt(text).unwrap();
        assert_eq!(matrix.decrypt(&encrypted).unwrap(), text);
    }

    #[test]
    fn test_trailing_spaces_are_trimmed() {
        let matrix = MatrixCipher::new("KEY").unwrap();
        let encrypted = matrix.encrypt("abc  ").unwrap();
        assert_eq!(matrix.decrypt(&encrypted).unwrap(), "abc");
    }

    #[test]
    fn test_key_longer_than_text() {
        let matrix = MatrixCipher::new("ZYXWVUTSRQ").unwrap();
        let encrypted = matrix.encrypt("abc").unwrap();
        assert_eq!(encrypted.len(), 10);
        assert_eq!(matrix.decrypt(&encrypted).unwrap(), "abc");
    }

    #[test]
    fn test_decrypt_rejects_partial_grid() {
        let matrix = MatrixCipher::new("KEY").unwrap();
        assert_eq!(
            matrix.decrypt("ABCD"),
            Err(CipherError::MisalignedText { len: 4, unit: 3 })
        );
    }

    #[test]
    fn test_empty_input() {
        let matrix = MatrixCipher::new("KEY").unwrap();
        assert_eq!(matrix.encrypt("").unwrap(), "");
        assert_eq!(matrix.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_one_shot_matches_instance() {
        let matrix = MatrixCipher::new("ZEBRA").unwrap();
        assert_eq!(
            MatrixCipher::encrypt_with("WEAREDISCOVERED", "ZEBRA").unwrap(),
            matrix.encrypt("WEAREDISCOVERED").unwrap()
        );
        assert_eq!(
            MatrixCipher::decrypt_with("EODASREIERCEWDV", "ZEBRA").unwrap(),
            "WEAREDISCOVERED"
        );
    }
}
