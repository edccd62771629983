//! Elliptic Curve Primitives
//!
//! Constant-time field, point and scalar arithmetic for the SM2
//! prime-field curve, plus the hex-string utility layer built on top
//! of it (key generation, public-key derivation, point compression).

pub mod sm2;

// Re-export types with a consistent naming scheme.
pub use sm2::{Point as Sm2Point, Scalar as Sm2Scalar};
