//! The uniform cipher contract and the closed set of cipher variants.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "block")]
use crate::block::{AesCipher, DesCipher};
use crate::caesar::CaesarCipher;
use crate::error::{CipherError, Result};
use crate::four_square::FourSquareCipher;
use crate::matrix::MatrixCipher;
use crate::pair::PairCipher;
use crate::vernam::VernamCipher;
use crate::vigenere::VigenereCipher;

/// Operations every cipher variant provides.
///
/// Implementations never mutate themselves, so one instance may be shared
/// across threads and used for any number of calls.
pub trait Cipher {
    /// Encrypts `data`, returning the ciphertext.
    fn encrypt(&self, data: &str) -> Result<String>;

    /// Decrypts `data`, returning the plaintext.
    fn decrypt(&self, data: &str) -> Result<String>;

    /// Returns a copy of the key the cipher was built with.
    fn key(&self) -> CipherKey;

    /// Returns which cipher this is.
    fn kind(&self) -> CipherKind;
}

/// Key material, shaped per cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Caesar shift.
    Shift(i32),
    /// Single string key (Vigenère, Vernam, Matrix, Pair).
    Word(String),
    /// Two string keys (Four-Square).
    Pair(String, String),
    /// Raw secret key bytes (AES, DES).
    Bytes(Vec<u8>),
}

/// Names of the available ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Fixed letter shift.
    Caesar,
    /// Running-key polyalphabetic substitution.
    Vigenere,
    /// Character-wise XOR stream.
    Vernam,
    /// Columnar transposition.
    Matrix,
    /// Playfair-style digraph substitution.
    Pair,
    /// Digraph substitution over two keyed squares.
    FourSquare,
    /// AES in ECB mode (feature `block`).
    Aes,
    /// Single DES in ECB mode (feature `block`).
    Des,
}

impl CipherKind {
    /// All kinds, classical ones first.
    pub const ALL: [CipherKind; 8] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Vernam,
        CipherKind::Matrix,
        CipherKind::Pair,
        CipherKind::FourSquare,
        CipherKind::Aes,
        CipherKind::Des,
    ];

    /// Lowercase name used by `Display` and `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Vernam => "vernam",
            CipherKind::Matrix => "matrix",
            CipherKind::Pair => "pair",
            CipherKind::FourSquare => "four-square",
            CipherKind::Aes => "aes",
            CipherKind::Des => "des",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or(CipherError::BadKey("unknown cipher kind"))
    }
}

/// Any one of the supported ciphers.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, CipherKey, CipherKind, ClassicCipher};
///
/// let cipher = ClassicCipher::from_key(CipherKind::Caesar, CipherKey::Shift(3)).unwrap();
/// assert_eq!(cipher.encrypt("abc").unwrap(), "def");
/// assert_eq!(cipher.kind(), CipherKind::Caesar);
/// ```
#[derive(Debug, Clone)]
pub enum ClassicCipher {
    Caesar(CaesarCipher),
    Vigenere(VigenereCipher),
    Vernam(VernamCipher),
    Matrix(MatrixCipher),
    Pair(PairCipher),
    FourSquare(FourSquareCipher),
    #[cfg(feature = "block")]
    Aes(AesCipher),
    #[cfg(feature = "block")]
    Des(DesCipher),
}

impl ClassicCipher {
    /// Builds a cipher of `kind` from `key`.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] if the key shape does not fit the
    /// kind, or if the cipher's own constructor rejects the key.
    pub fn from_key(kind: CipherKind, key: CipherKey) -> Result<Self> {
        let cipher = match (kind, key) {
            (CipherKind::Caesar, CipherKey::Shift(shift)) => CaesarCipher::new(shift)?.into(),
            (CipherKind::Vigenere, CipherKey::Word(word)) => VigenereCipher::new(word)?.into(),
            (CipherKind::Vernam, CipherKey::Word(word)) => VernamCipher::new(word)?.into(),
            (CipherKind::Matrix, CipherKey::Word(word)) => MatrixCipher::new(word)?.into(),
            (CipherKind::Pair, CipherKey::Word(word)) => PairCipher::new(word)?.into(),
            (CipherKind::FourSquare, CipherKey::Pair(first, second)) => {
                FourSquareCipher::new(first, second)?.into()
            }
            #[cfg(feature = "block")]
            (CipherKind::Aes, CipherKey::Bytes(bytes)) => AesCipher::new(bytes)?.into(),
            #[cfg(feature = "block")]
            (CipherKind::Des, CipherKey::Bytes(bytes)) => DesCipher::new(bytes)?.into(),
            #[cfg(not(feature = "block"))]
            (CipherKind::Aes | CipherKind::Des, _) => {
                return Err(CipherError::BadKey("block ciphers are not enabled"))
            }
            _ => return Err(CipherError::BadKey("key shape does not match cipher kind")),
        };
        Ok(cipher)
    }

    /// Builds a cipher of `kind` with a freshly generated key.
    ///
    /// # Errors
    /// Only fails for block kinds when the `block` feature is disabled.
    pub fn random<R: Rng + ?Sized>(kind: CipherKind, rng: &mut R) -> Result<Self> {
        let key = match kind {
            CipherKind::Caesar => CipherKey::Shift(CaesarCipher::generate_key(rng)),
            CipherKind::Vigenere => CipherKey::Word(VigenereCipher::generate_key(rng)),
            CipherKind::Vernam => CipherKey::Word(VernamCipher::generate_key(rng)),
            CipherKind::Matrix => CipherKey::Word(MatrixCipher::generate_key(rng)),
            CipherKind::Pair => CipherKey::Word(PairCipher::generate_key(rng)),
            CipherKind::FourSquare => {
                let (first, second) = FourSquareCipher::generate_key(rng);
                CipherKey::Pair(first, second)
            }
            #[cfg(feature = "block")]
            CipherKind::Aes => CipherKey::Bytes(AesCipher::generate_key(rng)),
            #[cfg(feature = "block")]
            CipherKind::Des => CipherKey::Bytes(DesCipher::generate_key(rng)),
            #[cfg(not(feature = "block"))]
            CipherKind::Aes | CipherKind::Des => {
                return Err(CipherError::BadKey("block ciphers are not enabled"))
            }
        };
        Self::from_key(kind, key)
    }

    fn inner(&self) -> &dyn Cipher {
        match self {
            ClassicCipher::Caesar(c) => c,
            ClassicCipher::Vigenere(c) => c,
            ClassicCipher::Vernam(c) => c,
            ClassicCipher::Matrix(c) => c,
            ClassicCipher::Pair(c) => c,
            ClassicCipher::FourSquare(c) => c,
            #[cfg(feature = "block")]
            ClassicCipher::Aes(c) => c,
            #[cfg(feature = "block")]
            ClassicCipher::Des(c) => c,
        }
    }
}

impl Cipher for ClassicCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        self.inner().encrypt(data)
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        self.inner().decrypt(data)
    }

    fn key(&self) -> CipherKey {
        self.inner().key()
    }

    fn kind(&self) -> CipherKind {
        self.inner().kind()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClassicCipher {
                fn from(cipher: $ty) -> Self {
                    ClassicCipher::$variant(cipher)
                }
            }
        )*
    };
}

impl_from_variant!(
    Caesar => CaesarCipher,
    Vigenere => VigenereCipher,
    Vernam => VernamCipher,
    Matrix => MatrixCipher,
    Pair => PairCipher,
    FourSquare => FourSquareCipher,
);

#[cfg(feature = "block")]
impl_from_variant!(Aes => AesCipher, Des => DesCipher);
