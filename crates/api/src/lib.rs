//! Unified error handling for the gmkit ecosystem
//!
//! Every gmkit crate reports failures through the [`Error`] type defined
//! here, so callers working against the facade crate see a single error
//! surface regardless of which component produced the failure.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

// Re-export the primary error type and result
pub use error::{Error, Result};
