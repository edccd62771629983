//! SM2 elliptic-curve and codec primitives
//!
//! This crate holds the algorithmic core of gmkit: field, point and
//! scalar arithmetic for the SM2 curve, the hex/UTF-8 codec helpers
//! that feed the curve operations, and the hex-string utility layer
//! (key generation, public-key derivation, point compression).
//!
//! All operations are pure data-in/data-out computations. The curve
//! domain parameters come from `gmkit-params` and are compile-time
//! constants, so everything here is safe to call concurrently.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary/hex/UTF-8 conversion helpers
#[cfg(feature = "alloc")]
pub mod codec;

// Elliptic curve primitives
pub mod ec;
pub use ec::{Sm2Point, Sm2Scalar};
