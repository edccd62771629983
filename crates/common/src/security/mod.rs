//! Security primitives for sensitive data handling

pub mod secret;

pub use secret::{SecretBuffer, SecureZeroingType};
