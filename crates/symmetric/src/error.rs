//! Error handling for symmetric operations
//!
//! This crate reports failures through the unified gmkit error system;
//! no symmetric-specific error type is needed.

pub use gmkit_api::{Error, Result};
