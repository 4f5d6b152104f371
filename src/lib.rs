//! Classical substitution and transposition ciphers.
//!
//! Every cipher implements the same [`Cipher`] contract: `encrypt`,
//! `decrypt` and `key`. Keys are validated once, at construction; a cipher
//! that exists is always usable. These are pedagogical ciphers and offer no
//! protection against modern cryptanalysis.
//!
//! # Architecture
//!
//! ```text
//! utils::alphabet   (A–Z, size 26)
//!     ↓
//! utils::square     (KeySquare: 5×5 grid from a seed key, J merged or dropped)
//!     ↓ shared by
//! PairCipher, FourSquareCipher
//!
//! CaesarCipher, VigenereCipher, VernamCipher, MatrixCipher   (standalone)
//! AesCipher, DesCipher                                       (feature "block")
//!
//! ClassicCipher     (closed enum over all of the above, dispatch by match)
//! random            (key generators over an injected rand::Rng)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a Vigenère cipher:
//!
//! ```
//! use classicrypt::{Cipher, VigenereCipher};
//!
//! let cipher = VigenereCipher::new("LEMON").unwrap();
//! let secret = cipher.encrypt("ATTACKATDAWN").unwrap();
//! assert_eq!(secret, "LXFOPVEFRNHR");
//! assert_eq!(cipher.decrypt(&secret).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! Pick a cipher by name and give it a random key from a seeded source:
//!
//! ```
//! use classicrypt::{Cipher, CipherKind, ClassicCipher};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let kind: CipherKind = "matrix".parse().unwrap();
//! let cipher = ClassicCipher::random(kind, &mut rng).unwrap();
//!
//! let secret = cipher.encrypt("Welcome to my world").unwrap();
//! assert_eq!(cipher.decrypt(&secret).unwrap(), "Welcome to my world");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod random;
pub mod utils;

#[cfg(feature = "block")]
mod block;
mod caesar;
mod contract;
mod four_square;
mod matrix;
mod pair;
mod vernam;
mod vigenere;

#[cfg(feature = "block")]
pub use block::{AesCipher, DesCipher};
pub use caesar::CaesarCipher;
pub use contract::{Cipher, CipherKey, CipherKind, ClassicCipher};
pub use error::{CipherError, Result};
pub use four_square::FourSquareCipher;
pub use matrix::MatrixCipher;
pub use pair::PairCipher;
pub use vernam::VernamCipher;
pub use vigenere::VigenereCipher;
