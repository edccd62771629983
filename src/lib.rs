//! # gmkit
//!
//! A small utility toolkit for the Chinese commercial (GM)
//! cryptographic algorithms: SM2 elliptic-curve key and point
//! utilities plus a thin SM4-CBC wrapper.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmkit = "0.3"
//! ```
//!
//! Generate a keypair and move it across the hex boundary:
//!
//! ```no_run
//! use gmkit::algorithms::ec::sm2;
//! use rand::rngs::OsRng;
//!
//! let pair = sm2::generate_keypair_hex(&mut OsRng)?;
//! let compressed = sm2::compress_public_key_hex(&pair.public_key)?;
//! assert_eq!(sm2::decompress_public_key_hex(&compressed)?, pair.public_key);
//! # Ok::<(), gmkit::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `symmetric` (default): the SM4-CBC pass-through wrapper
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`gmkit-api`](api): unified error and result types
//! - [`gmkit-common`](common): zeroizing secret buffers
//! - [`gmkit-params`](params): published SM2 domain parameters
//! - [`gmkit-algorithms`](algorithms): SM2 field/point/scalar
//!   arithmetic, codec helpers and the hex utility layer
//! - [`gmkit-symmetric`](symmetric): SM4-CBC wrapper over external
//!   cipher crates

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use gmkit_algorithms as algorithms;
pub use gmkit_api as api;
pub use gmkit_common as common;
pub use gmkit_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use gmkit_symmetric as symmetric;

/// Common imports for gmkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecureZeroingType};

    // Re-export the SM2 utility surface and domain parameters
    pub use crate::algorithms::ec::sm2;
    pub use crate::algorithms::{Sm2Point, Sm2Scalar};
    pub use crate::params::sm2::SM2;

    // Codec helpers feed the hex boundary
    #[cfg(feature = "alloc")]
    pub use crate::algorithms::codec;

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{sm4_cbc_decrypt, sm4_cbc_encrypt, Sm4Iv, Sm4Key};
}
