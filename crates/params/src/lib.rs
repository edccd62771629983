//! Published cryptographic domain parameters for the gmkit library
//!
//! Parameters are stored as compile-time constants in big-endian byte
//! form, exactly as printed in the defining standards. Nothing in this
//! crate is computed at runtime and nothing is mutable.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod sm2;

pub use sm2::{Sm2Params, SM2};
