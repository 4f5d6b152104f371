//! The 26-letter Latin alphabet shared by every cipher.

/// Uppercase Latin alphabet in order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in [`ALPHABET`]. Modulus for all letter arithmetic.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the zero-based alphabet index of an ASCII letter, ignoring case.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the uppercase letter at alphabet position `index % 26`.
pub fn letter_at(index: usize) -> char {
    (b'A' + (index % ALPHABET_SIZE) as u8) as char
}
