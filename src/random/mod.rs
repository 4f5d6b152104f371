//! Key-material generation for the classical ciphers.
//!
//! Generators never reach for ambient global randomness: the caller hands
//! in any [`rand::Rng`], and the bounds come from a
//! [`KeyGenConfig`](key_gen::KeyGenConfig).

pub mod key_gen;

pub use key_gen::{random_shift, random_word, random_word_of_len, KeyGenConfig, KeyGenerator};
