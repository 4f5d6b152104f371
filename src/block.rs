//! AES and DES behind the same cipher contract.
//!
//! Both run in ECB mode with PKCS#5/7 padding over the UTF-8 bytes of the
//! text and emit standard Base64. Empty text maps to empty text in both
//! directions without touching the block primitive.

use std::fmt;

use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use des::Des;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::contract::{Cipher, CipherKey, CipherKind};
use crate::error::{CipherError, Result};
use crate::random::KeyGenerator;

/// Key size produced by [`AesCipher::generate_key`].
pub const AES_DEFAULT_KEY_LEN: usize = 16;

/// Key sizes accepted by [`AesCipher`].
pub const AES_KEY_LENS: [usize; 3] = [16, 24, 32];

/// DES key size.
pub const DES_KEY_LEN: usize = 8;

/// Pads `data` to a whole number of blocks and encrypts each block.
fn ecb_encrypt<C: BlockEncrypt>(core: &C, data: &[u8]) -> Vec<u8> {
    let block_size = C::block_size();
    let pad = block_size - data.len() % block_size;
    let mut buf = data.to_vec();
    buf.resize(data.len() + pad, pad as u8);
    for block in buf.chunks_exact_mut(block_size) {
        core.encrypt_block(GenericArray::from_mut_slice(block));
    }
    buf
}

/// Decrypts whole blocks and strips the padding.
fn ecb_decrypt<C: BlockDecrypt>(core: &C, data: &[u8]) -> Result<Vec<u8>> {
    let block_size = C::block_size();
    if data.is_empty() || !data.len().is_multiple_of(block_size) {
        return Err(CipherError::MisalignedText {
            len: data.len(),
            unit: block_size,
        });
    }
    let mut buf = data.to_vec();
    for block in buf.chunks_exact_mut(block_size) {
        core.decrypt_block(GenericArray::from_mut_slice(block));
    }
    let pad = buf.last().copied().unwrap_or(0) as usize;
    if pad == 0 || pad > block_size || !buf[buf.len() - pad..].iter().all(|&b| b as usize == pad) {
        return Err(CipherError::InvalidPadding);
    }
    buf.truncate(buf.len() - pad);
    Ok(buf)
}

fn encode(bytes: Vec<u8>) -> String {
    BASE64.encode(bytes)
}

fn decode(text: &str) -> Result<Vec<u8>> {
    BASE64.decode(text).map_err(|_| CipherError::InvalidEncoding)
}

fn utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| CipherError::InvalidUtf8)
}

// Expanded key schedules live on the heap
#[derive(Clone)]
enum AesCore {
    Aes128(Box<Aes128>),
    Aes192(Box<Aes192>),
    Aes256(Box<Aes256>),
}

/// AES-128/192/256 in ECB mode, Base64 output.
///
/// # Examples
///
/// ```
/// use classicrypt::{AesCipher, Cipher};
///
/// let aes = AesCipher::new(vec![7u8; 16]).unwrap();
/// let secret = aes.encrypt("attack at dawn").unwrap();
/// assert_eq!(aes.decrypt(&secret).unwrap(), "attack at dawn");
/// ```
#[derive(Clone)]
pub struct AesCipher {
    key: Vec<u8>,
    core: AesCore,
}

impl AesCipher {
    /// Creates an AES cipher; the key length picks the variant.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] unless the key is 16, 24 or 32 bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        let bad = |_| CipherError::BadKey("AES key must be 16, 24 or 32 bytes");
        let core = match key.len() {
            16 => AesCore::Aes128(Box::new(Aes128::new_from_slice(&key).map_err(bad)?)),
            24 => AesCore::Aes192(Box::new(Aes192::new_from_slice(&key).map_err(bad)?)),
            32 => AesCore::Aes256(Box::new(Aes256::new_from_slice(&key).map_err(bad)?)),
            _ => {
                warn!(cipher = "aes", key_len = key.len(), "rejected key size");
                return Err(CipherError::BadKey("AES key must be 16, 24 or 32 bytes"));
            }
        };
        debug!(cipher = "aes", key_bits = key.len() * 8, "cipher constructed");
        Ok(AesCipher { key, core })
    }

    /// Generates a random AES-128 key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
        KeyGenerator::new(rng).bytes(AES_DEFAULT_KEY_LEN)
    }

    /// Generates a random key of `size` bytes for AES-128, -192 or -256.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] unless `size` is 16, 24 or 32.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::AesCipher;
    ///
    /// let key = AesCipher::generate_key_of_size(&mut rand::thread_rng(), 32).unwrap();
    /// assert_eq!(key.len(), 32);
    /// assert!(AesCipher::generate_key_of_size(&mut rand::thread_rng(), 20).is_err());
    /// ```
    pub fn generate_key_of_size<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Vec<u8>> {
        if !AES_KEY_LENS.contains(&size) {
            return Err(CipherError::BadKey("AES key must be 16, 24 or 32 bytes"));
        }
        Ok(KeyGenerator::new(rng).bytes(size))
    }
}

impl fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCipher")
            .field("key_bits", &(self.key.len() * 8))
            .finish_non_exhaustive()
    }
}

impl Cipher for AesCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "aes", len = data.len(), "encrypt");
        if data.is_empty() {
            return Ok(String::new());
        }
        let bytes = data.as_bytes();
        let out = match &self.core {
            AesCore::Aes128(core) => ecb_encrypt(&**core, bytes),
            AesCore::Aes192(core) => ecb_encrypt(&**core, bytes),
            AesCore::Aes256(core) => ecb_encrypt(&**core, bytes),
        };
        Ok(encode(out))
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "aes", len = data.len(), "decrypt");
        if data.is_empty() {
            return Ok(String::new());
        }
        let bytes = decode(data)?;
        let out = match &self.core {
            AesCore::Aes128(core) => ecb_decrypt(&**core, &bytes)?,
            AesCore::Aes192(core) => ecb_decrypt(&**core, &bytes)?,
            AesCore::Aes256(core) => ecb_decrypt(&**core, &bytes)?,
        };
        utf8(out)
    }

    fn key(&self) -> CipherKey {
        CipherKey::Bytes(self.key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Aes
    }
}

/// Single DES in ECB mode, Base64 output.
#[derive(Clone)]
pub struct DesCipher {
    key: Vec<u8>,
    core: Des,
}

impl DesCipher {
    /// Creates a DES cipher. Parity bits of the key are ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::BadKey`] unless the key is 8 bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        let core = Des::new_from_slice(&key).map_err(|_| {
            warn!(cipher = "des", key_len = key.len(), "rejected key size");
            CipherError::BadKey("DES key must be 8 bytes")
        })?;
        debug!(cipher = "des", "cipher constructed");
        Ok(DesCipher { key, core })
    }

    /// Generates a random DES key.
    pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
        KeyGenerator::new(rng).bytes(DES_KEY_LEN)
    }
}

impl fmt::Debug for DesCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesCipher").finish_non_exhaustive()
    }
}

impl Cipher for DesCipher {
    fn encrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "des", len = data.len(), "encrypt");
        if data.is_empty() {
            return Ok(String::new());
        }
        Ok(encode(ecb_encrypt(&self.core, data.as_bytes())))
    }

    fn decrypt(&self, data: &str) -> Result<String> {
        trace!(cipher = "des", len = data.len(), "decrypt");
        if data.is_empty() {
            return Ok(String::new());
        }
        let bytes = decode(data)?;
        utf8(ecb_decrypt(&self.core, &bytes)?)
    }

    fn key(&self) -> CipherKey {
        CipherKey::Bytes(self.key.clone())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Des
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // FIPS-197 appendix C.1 key with a 16-byte plaintext
    const AES128_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn test_aes_rejects_bad_key_size() {
        assert!(matches!(AesCipher::new(vec![0u8; 15]), Err(CipherError::BadKey(_))));
        assert!(matches!(AesCipher::new(Vec::new()), Err(CipherError::BadKey(_))));
    }

    #[test]
    fn test_aes_all_key_sizes_roundtrip() {
        for len in [16, 24, 32] {
            let aes = AesCipher::new(vec![0x42u8; len]).unwrap();
            let encrypted = aes.encrypt("Welcome to my world").unwrap();
            assert_ne!(encrypted, "Welcome to my world");
            assert_eq!(aes.decrypt(&encrypted).unwrap(), "Welcome to my world");
        }
    }

    #[test]
    fn test_aes_block_aligned_input_gets_full_pad_block() {
        let aes = AesCipher::new(AES128_KEY.to_vec()).unwrap();
        let encrypted = aes.encrypt("0123456789abcdef").unwrap();
        assert_eq!(decode(&encrypted).unwrap().len(), 32);
        assert_eq!(aes.decrypt(&encrypted).unwrap(), "0123456789abcdef");
    }

    #[test]
    fn test_aes_ecb_repeats_identical_blocks() {
        let aes = AesCipher::new(AES128_KEY.to_vec()).unwrap();
        let bytes = decode(&aes.encrypt("YELLOW SUBMARINEYELLOW SUBMARINE").unwrap()).unwrap();
        assert_eq!(bytes[..16], bytes[16..32]);
    }

    #[test]
    fn test_aes_decrypt_errors() {
        let aes = AesCipher::new(AES128_KEY.to_vec()).unwrap();
        assert_eq!(aes.decrypt("not base64!"), Err(CipherError::InvalidEncoding));
        assert_eq!(
            aes.decrypt(&BASE64.encode([1u8; 5])),
            Err(CipherError::MisalignedText { len: 5, unit: 16 })
        );
    }

    #[test]
    fn test_aes_generate_key_of_each_size() {
        let mut rng = StdRng::seed_from_u64(21);
        for size in AES_KEY_LENS {
            let key = AesCipher::generate_key_of_size(&mut rng, size).unwrap();
            assert_eq!(key.len(), size);
            let aes = AesCipher::new(key).unwrap();
            let encrypted = aes.encrypt("attack at dawn").unwrap();
            assert_eq!(aes.decrypt(&encrypted).unwrap(), "attack at dawn");
        }
    }

    #[test]
    fn test_aes_generate_key_rejects_other_sizes() {
        let mut rng = StdRng::seed_from_u64(21);
        for size in [0, 8, 15, 20, 33] {
            assert!(matches!(
                AesCipher::generate_key_of_size(&mut rng, size),
                Err(CipherError::BadKey(_))
            ));
        }
    }

    #[test]
    fn test_aes_variant_keeps_dispatch_enum_small() {
        use crate::contract::ClassicCipher;
        let aes = std::mem::size_of::<AesCipher>();
        let des = std::mem::size_of::<DesCipher>();
        assert!(aes <= 64, "AesCipher is {} bytes", aes);
        assert!(std::mem::size_of::<ClassicCipher>() <= des + 200);
    }

    #[test]
    fn test_des_roundtrip() {
        let des = DesCipher::new(vec![0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1]).unwrap();
        let encrypted = des.encrypt("Welcome to my world").unwrap();
        assert_eq!(decode(&encrypted).unwrap().len(), 24);
        assert_eq!(des.decrypt(&encrypted).unwrap(), "Welcome to my world");
    }

    #[test]
    fn test_des_rejects_bad_key_size() {
        assert!(matches!(DesCipher::new(vec![0u8; 7]), Err(CipherError::BadKey(_))));
    }

    #[test]
    fn test_wrong_key_fails_padding_or_utf8() {
        let a = DesCipher::new(vec![1u8; 8]).unwrap();
        let b = DesCipher::new(vec![0xF0u8; 8]).unwrap();
        let encrypted = a.encrypt("some secret text").unwrap();
        assert_ne!(b.decrypt(&encrypted).ok().as_deref(), Some("some secret text"));
    }

    #[test]
    fn test_empty_input_skips_primitive() {
        let aes = AesCipher::new(AES128_KEY.to_vec()).unwrap();
        let des = DesCipher::new(vec![1u8; 8]).unwrap();
        assert_eq!(aes.encrypt("").unwrap(), "");
        assert_eq!(aes.decrypt("").unwrap(), "");
        assert_eq!(des.encrypt("").unwrap(), "");
        assert_eq!(des.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_debug_hides_key() {
        let aes = AesCipher::new(AES128_KEY.to_vec()).unwrap();
        let shown = format!("{:?}", aes);
        assert!(shown.contains("key_bits: 128"));
        assert!(!shown.contains("15"));
    }
}
