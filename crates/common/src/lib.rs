//! Common implementations and shared functionality for the gmkit library
//!
//! This crate provides the security primitives used across gmkit
//! components, most importantly zeroize-on-drop buffers for secret
//! key material.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecureZeroingType};
