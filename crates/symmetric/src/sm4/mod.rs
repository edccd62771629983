//! SM4-CBC pass-through encryption
//!
//! Delegates entirely to the external `sm4` block cipher and `cbc`
//! mode crates. Plaintext crosses the boundary as UTF-8 text,
//! ciphertext as a lowercase hex string, matching the conventions of
//! the SM2 utility layer.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Size of an SM4 key in bytes
pub const SM4_KEY_SIZE: usize = 16;

/// Size of an SM4 block (and CBC IV) in bytes
pub const SM4_BLOCK_SIZE: usize = 16;

type Sm4CbcEnc = cbc::Encryptor<::sm4::Sm4>;
type Sm4CbcDec = cbc::Decryptor<::sm4::Sm4>;

/// An SM4 key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm4Key([u8; SM4_KEY_SIZE]);

impl Sm4Key {
    /// Create a key from a fixed-size byte array
    pub fn new(bytes: [u8; SM4_KEY_SIZE]) -> Self {
        Sm4Key(bytes)
    }

    /// Create a key from a byte slice with length validation
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM4_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "Sm4Key::from_slice",
                expected: SM4_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key_bytes = [0u8; SM4_KEY_SIZE];
        key_bytes.copy_from_slice(bytes);
        Ok(Sm4Key(key_bytes))
    }

    /// Generate a random key from the supplied secure source
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SM4_KEY_SIZE];
        rng.fill_bytes(&mut bytes);
        Sm4Key(bytes)
    }

    /// Access the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Sm4Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sm4Key([REDACTED])")
    }
}

/// A CBC initialization vector for SM4
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm4Iv([u8; SM4_BLOCK_SIZE]);

impl Sm4Iv {
    /// Create an IV from a fixed-size byte array
    pub fn new(bytes: [u8; SM4_BLOCK_SIZE]) -> Self {
        Sm4Iv(bytes)
    }

    /// Create an IV from a byte slice with length validation
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM4_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                context: "Sm4Iv::from_slice",
                expected: SM4_BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut iv_bytes = [0u8; SM4_BLOCK_SIZE];
        iv_bytes.copy_from_slice(bytes);
        Ok(Sm4Iv(iv_bytes))
    }

    /// Generate a random IV from the supplied secure source
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SM4_BLOCK_SIZE];
        rng.fill_bytes(&mut bytes);
        Sm4Iv(bytes)
    }

    /// Access the raw IV bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Encrypt UTF-8 plaintext with SM4-CBC and PKCS#7 padding
///
/// Returns the ciphertext as a lowercase hex string.
pub fn sm4_cbc_encrypt(key: &Sm4Key, iv: &Sm4Iv, plaintext: &str) -> Result<String> {
    let cipher =
        Sm4CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes()).map_err(|_| {
            Error::InvalidParameter {
                context: "sm4_cbc_encrypt",
                #[cfg(feature = "std")]
                message: "bad key or IV length".to_string(),
            }
        })?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(hex::encode(ciphertext))
}

/// Decrypt an SM4-CBC hex ciphertext back to UTF-8 plaintext
///
/// Fails on malformed hex, on ciphertext that is not a whole number of
/// blocks, on a padding mismatch, and on plaintext that is not valid
/// UTF-8.
pub fn sm4_cbc_decrypt(key: &Sm4Key, iv: &Sm4Iv, ciphertext_hex: &str) -> Result<String> {
    let ciphertext = hex::decode(ciphertext_hex).map_err(|_| Error::InvalidCiphertext {
        context: "sm4_cbc_decrypt",
        #[cfg(feature = "std")]
        message: "ciphertext is not valid hex".to_string(),
    })?;

    if ciphertext.is_empty() || ciphertext.len() % SM4_BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertext {
            context: "sm4_cbc_decrypt",
            #[cfg(feature = "std")]
            message: "ciphertext is not a whole number of blocks".to_string(),
        });
    }

    let cipher =
        Sm4CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes()).map_err(|_| {
            Error::InvalidParameter {
                context: "sm4_cbc_decrypt",
                #[cfg(feature = "std")]
                message: "bad key or IV length".to_string(),
            }
        })?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| Error::DecryptionFailed {
            context: "sm4_cbc_decrypt",
            #[cfg(feature = "std")]
            message: "padding check failed".to_string(),
        })?;

    String::from_utf8(plaintext).map_err(|_| Error::DecryptionFailed {
        context: "sm4_cbc_decrypt",
        #[cfg(feature = "std")]
        message: "plaintext is not valid UTF-8".to_string(),
    })
}
