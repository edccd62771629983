//! SM4 symmetric encryption wrapper for the gmkit library
//!
//! This crate is a thin pass-through over the external `sm4` and `cbc`
//! cipher crates: UTF-8 plaintext in, lowercase hex ciphertext out,
//! PKCS#7 padding. It implements no cipher of its own and shares no
//! state with the elliptic-curve core.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod sm4;

// Re-export main types for convenience
pub use crate::sm4::{sm4_cbc_decrypt, sm4_cbc_encrypt, Sm4Iv, Sm4Key};

// Re-export the unified error system instead of custom error types
pub use error::{Error, Result};
