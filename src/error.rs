//! Error types for the classicrypt library.

use thiserror::Error;

/// Result alias used by every cipher operation.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by the classicrypt library.
///
/// Messages never carry key material.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key shape rejected at construction.
    #[error("Bad secret key: {0}")]
    BadKey(&'static str),

    /// Adjusted key length does not match the data length.
    #[error("Key length {key} does not match data length {data}")]
    InvalidLength {
        /// Length of the adjusted key, in characters.
        key: usize,
        /// Length of the data, in characters.
        data: usize,
    },

    /// A digraph letter is absent from its key square.
    #[error("Character {0:?} not found in key square")]
    CharacterNotFound(char),

    /// Ciphertext length is not a whole number of units.
    #[error("Text length {len} is not a multiple of {unit}")]
    MisalignedText {
        /// Length of the text handed to decrypt.
        len: usize,
        /// Unit the length must be a multiple of.
        unit: usize,
    },

    /// XOR result is not a Unicode scalar value.
    #[error("Code point {0:#x} is not a valid character")]
    InvalidCodePoint(u32),

    /// Key generator bounds were rejected.
    #[error("Invalid key generator configuration: {0}")]
    InvalidConfig(&'static str),

    /// Ciphertext is not valid Base64.
    #[error("Ciphertext is not valid Base64")]
    InvalidEncoding,

    /// Block padding is malformed.
    #[error("Block padding is malformed")]
    InvalidPadding,

    /// Decrypted bytes are not valid UTF-8.
    #[error("Decrypted bytes are not valid UTF-8")]
    InvalidUtf8,
}
