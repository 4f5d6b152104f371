//! Random key material for the classical ciphers.
//!
//! The randomness source is always supplied by the caller, so a seeded
//! `StdRng` gives reproducible keys in tests while `thread_rng()` serves
//! everyday use.

use rand::Rng;

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{letter_at, ALPHABET_SIZE};

/// Default exclusive upper bound for generated Caesar shifts.
pub const DEFAULT_MAX_SHIFT: i32 = 47;

/// Default exclusive upper bound for generated word lengths.
pub const DEFAULT_MAX_WORD_LEN: usize = 47;

/// Bounds used when generating keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenConfig {
    max_shift: i32,
    max_word_len: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyGenConfig {
    /// Creates a configuration with the default bounds (shift and word length
    /// both drawn from `1..47`).
    pub fn new() -> Self {
        KeyGenConfig {
            max_shift: DEFAULT_MAX_SHIFT,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    /// Creates a configuration with custom exclusive upper bounds.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if either bound is below 2,
    /// which would leave no valid value to draw.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::random::key_gen::KeyGenConfig;
    ///
    /// assert!(KeyGenConfig::with_bounds(27, 12).is_ok());
    /// assert!(KeyGenConfig::with_bounds(1, 12).is_err());
    /// ```
    pub fn with_bounds(max_shift: i32, max_word_len: usize) -> Result<Self> {
        if max_shift < 2 {
            return Err(CipherError::InvalidConfig("max_shift must be at least 2"));
        }
        if max_word_len < 2 {
            return Err(CipherError::InvalidConfig(
                "max_word_len must be at least 2",
            ));
        }
        Ok(KeyGenConfig {
            max_shift,
            max_word_len,
        })
    }

    /// Exclusive upper bound for shifts.
    pub fn max_shift(&self) -> i32 {
        self.max_shift
    }

    /// Exclusive upper bound for default-length words.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

/// Key generator over an injected random source.
pub struct KeyGenerator<R> {
    rng: R,
    config: KeyGenConfig,
}

impl<R: Rng> KeyGenerator<R> {
    /// Creates a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, KeyGenConfig::new())
    }

    /// Creates a generator with a custom configuration.
    pub fn with_config(rng: R, config: KeyGenConfig) -> Self {
        KeyGenerator { rng, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Draws a shift from `1..max_shift`.
    pub fn shift(&mut self) -> i32 {
        self.rng.gen_range(1..self.config.max_shift)
    }

    /// Draws a shift from `1..bound`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidConfig`] if `bound < 2`.
    pub fn shift_below(&mut self, bound: i32) -> Result<i32> {
        if bound < 2 {
            return Err(CipherError::InvalidConfig("shift bound must be at least 2"));
        }
        Ok(self.rng.gen_range(1..bound))
    }

    /// Draws an uppercase word whose length is in `1..max_word_len`.
    pub fn word(&mut self) -> String {
        let len = self.rng.gen_range(1..self.config.max_word_len);
        self.word_of_len(len)
    }

    /// Draws an uppercase word of exactly `len` letters.
    pub fn word_of_len(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| letter_at(self.rng.gen_range(0..ALPHABET_SIZE)))
            .collect()
    }

    /// Draws two independent default-length words.
    pub fn word_pair(&mut self) -> (String, String) {
        let first = self.word();
        let second = self.word();
        (first, second)
    }

    /// Draws `len` random bytes.
    pub fn bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.rng.fill(out.as_mut_slice());
        out
    }
}

/// Draws a shift from `1..47`.
pub fn random_shift<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    KeyGenerator::new(rng).shift()
}

/// Draws an uppercase word whose length is in `1..47`.
pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    KeyGenerator::new(rng).word()
}

/// Draws an uppercase word of exactly `len` letters.
pub fn random_word_of_len<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    KeyGenerator::new(rng).word_of_len(len)
}
