//! SM2 Elliptic Curve Primitives
//!
//! This module implements the SM2 prime-field curve published in
//! GB/T 32918: y² = x³ + ax + b over F_p with a = p − 3 and cofactor 1.
//! It provides the utility surface of the toolkit (key-pair
//! generation, public-key derivation, and point
//! compression/decompression) at two levels:
//!
//! - byte level: [`Point`], [`Scalar`], [`generate_keypair`],
//!   [`scalar_mult_base_g`], [`scalar_mult`];
//! - hex-string level: [`generate_keypair_hex`],
//!   [`derive_public_key_hex`], [`compress_public_key_hex`],
//!   [`decompress_public_key_hex`], which move fixed-width lowercase
//!   hex across the API boundary (64-digit scalars and coordinates,
//!   130-digit uncompressed points, 66-digit compressed points).
//!
//! The implementation uses:
//! - limb arithmetic with a fold-based reduction for the SM2 prime
//! - Jacobian projective coordinates for point operations
//! - binary scalar multiplication

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    SM2_COORDINATE_HEX_WIDTH, SM2_FIELD_ELEMENT_SIZE, SM2_POINT_COMPRESSED_HEX_WIDTH,
    SM2_POINT_COMPRESSED_SIZE, SM2_POINT_UNCOMPRESSED_HEX_WIDTH, SM2_POINT_UNCOMPRESSED_SIZE,
    SM2_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

#[cfg(feature = "alloc")]
use crate::codec;
use crate::error::Result;
#[cfg(feature = "alloc")]
use crate::error::validate;
use gmkit_params::sm2::{Sm2Params, SM2};
use rand::{CryptoRng, RngCore};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

#[cfg(feature = "alloc")]
use core::fmt;
#[cfg(feature = "alloc")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Get the immutable SM2 domain parameters shared by all operations
///
/// The parameters are compile-time constants; every call returns the
/// same read-only data, so concurrent first use needs no guarding.
pub fn domain_params() -> &'static Sm2Params {
    &SM2
}

/// Get the standard base point G of the SM2 curve
///
/// Returns the generator point specified in GB/T 32918. This point
/// generates the cyclic subgroup used for key generation.
pub fn base_point_g() -> Point {
    Point::new_uncompressed(&SM2.g_x, &SM2.g_y).expect("Standard base point must be valid")
}

/// Scalar multiplication with the base point: scalar * G
///
/// This is the core operation for deriving public keys from private
/// keys.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    let g = base_point_g();
    g.mul(scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        // scalar * O = O (identity element)
        return Ok(Point::identity());
    }

    point.mul(scalar)
}

/// Generate a cryptographically secure SM2 keypair
///
/// Uses rejection sampling to ensure the private key scalar is
/// uniformly distributed in the range [1, n-1]. The public key is
/// computed as private_key * G where G is the standard base point.
///
/// The random source is supplied by the caller and must be
/// cryptographically secure; the `CryptoRng` bound enforces this at
/// the type level. A failing source aborts key generation; there is
/// no fallback.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; SM2_SCALAR_SIZE];

    loop {
        rng.fill_bytes(&mut scalar_bytes);

        // Attempt to create a valid scalar (non-zero, < n)
        match Scalar::new(scalar_bytes) {
            Ok(private_key) => {
                let public_key = scalar_mult_base_g(&private_key)?;
                return Ok((private_key, public_key));
            }
            Err(_) => {
                // Out-of-range bytes, retry with fresh randomness
                continue;
            }
        }
    }
}

/// An SM2 keypair in hex form
///
/// `private_key` is the 64-digit scalar, `public_key` the 130-digit
/// uncompressed point encoding ("04" ‖ x ‖ y), both lowercase. The
/// private key is zeroized when the pair is dropped.
#[cfg(feature = "alloc")]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm2KeyPair {
    /// Private scalar d as 64 lowercase hex digits
    pub private_key: String,
    /// Uncompressed public point d·G as 130 lowercase hex digits
    pub public_key: String,
}

#[cfg(feature = "alloc")]
impl fmt::Debug for Sm2KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sm2KeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Generate an SM2 keypair in hex form
///
/// See [`generate_keypair`] for the sampling contract.
#[cfg(feature = "alloc")]
pub fn generate_keypair_hex<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Sm2KeyPair> {
    let (private_key, public_key) = generate_keypair(rng)?;
    Ok(Sm2KeyPair {
        private_key: codec::bytes_to_hex(&private_key.serialize()),
        public_key: codec::bytes_to_hex(&public_key.serialize_uncompressed()),
    })
}

/// Derive the public key for a private scalar given in hex
///
/// Accepts up to 64 hex digits (shorter input is left-padded with
/// zeros). The decoded value must lie in [1, n-1]; zero and anything
/// ≥ n are rejected with an invalid-scalar error. Returns the
/// 130-digit uncompressed encoding of d·G.
#[cfg(feature = "alloc")]
pub fn derive_public_key_hex(private_key_hex: &str) -> Result<String> {
    let bytes = codec::hex_to_bytes(private_key_hex)?;
    validate::max_length("SM2 private key hex", bytes.len(), SM2_SCALAR_SIZE)?;

    let mut scalar_bytes = [0u8; SM2_SCALAR_SIZE];
    scalar_bytes[SM2_SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);

    let scalar = Scalar::new(scalar_bytes)?;
    let public_key = scalar_mult_base_g(&scalar)?;
    Ok(codec::bytes_to_hex(&public_key.serialize_uncompressed()))
}

/// Compress an uncompressed public-key hex encoding
///
/// Input that does not carry the "04" uncompressed tag is returned
/// unchanged: it is taken to be compressed already, which makes the
/// operation idempotent. "04"-tagged input must be exactly 130 valid
/// hex digits describing a point on the curve; the result is the
/// 66-digit compressed form, tag "02" for even y and "03" for odd y.
#[cfg(feature = "alloc")]
pub fn compress_public_key_hex(point_hex: &str) -> Result<String> {
    if !point_hex.starts_with("04") {
        return Ok(String::from(point_hex));
    }
    validate::length(
        "SM2 uncompressed point hex",
        point_hex.len(),
        SM2_POINT_UNCOMPRESSED_HEX_WIDTH,
    )?;
    let bytes = codec::hex_to_bytes(point_hex)?;
    let point = Point::deserialize_uncompressed(&bytes)?;
    Ok(codec::bytes_to_hex(&point.serialize_compressed()))
}

/// Decompress a compressed public-key hex encoding
///
/// Input already carrying the "04" uncompressed tag is returned
/// unchanged. Otherwise the input must be exactly 66 valid hex digits
/// with tag "02" or "03"; y is recovered from the curve equation using
/// the tag's parity bit. The result is the 130-digit uncompressed
/// form, both coordinates left-padded to 64 digits.
#[cfg(feature = "alloc")]
pub fn decompress_public_key_hex(point_hex: &str) -> Result<String> {
    if point_hex.starts_with("04") {
        return Ok(String::from(point_hex));
    }
    validate::length(
        "SM2 compressed point hex",
        point_hex.len(),
        SM2_POINT_COMPRESSED_HEX_WIDTH,
    )?;
    let bytes = codec::hex_to_bytes(point_hex)?;
    let point = Point::deserialize_compressed(&bytes)?;
    Ok(codec::bytes_to_hex(&point.serialize_uncompressed()))
}

#[cfg(test)]
mod tests;
