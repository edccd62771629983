//! SM2 scalar handling
//!
//! A [`Scalar`] is a private-key value d with the strict invariant
//! 1 ≤ d ≤ n−1, where n is the SM2 group order. Out-of-range input is
//! rejected rather than reduced, so a caller can never feed 0 or n and
//! silently obtain a different key.

use crate::ec::sm2::constants::SM2_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use gmkit_common::security::SecretBuffer;
use gmkit_params::sm2::SM2;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SM2 scalar value for use in elliptic curve operations
///
/// Represents a private key in the range [1, n-1]. Automatically
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from raw big-endian bytes with validation
    ///
    /// The value must lie in [1, n-1]. Zero and anything ≥ n are
    /// rejected with an invalid-scalar error; no reduction is applied.
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        Self::validate_scalar_bytes(&data)?;
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Create a scalar from an existing SecretBuffer
    pub fn from_secret_buffer(buffer: SecretBuffer<SM2_SCALAR_SIZE>) -> Result<Self> {
        let mut bytes = [0u8; SM2_SCALAR_SIZE];
        bytes.copy_from_slice(buffer.as_ref());
        Self::validate_scalar_bytes(&bytes)?;
        Ok(Scalar(SecretBuffer::new(bytes)))
    }

    /// Access the underlying SecretBuffer containing the scalar value
    pub fn as_secret_buffer(&self) -> &SecretBuffer<SM2_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize the scalar to big-endian bytes
    pub fn serialize(&self) -> [u8; SM2_SCALAR_SIZE] {
        let mut result = [0u8; SM2_SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Deserialize a scalar from a byte slice with validation
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 Scalar", bytes.len(), SM2_SCALAR_SIZE)?;

        let mut scalar_bytes = [0u8; SM2_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);

        Self::new(scalar_bytes)
    }

    /// Check if the scalar represents zero
    pub fn is_zero(&self) -> bool {
        self.0.as_ref().iter().all(|&b| b == 0)
    }

    /// Validate that a big-endian value lies in [1, n-1]
    ///
    /// The comparison against the group order runs over every byte
    /// regardless of the outcome.
    fn validate_scalar_bytes(bytes: &[u8; SM2_SCALAR_SIZE]) -> Result<()> {
        let order = &SM2.n;

        if bytes.iter().all(|&b| b == 0) {
            return Err(Error::InvalidScalar {
                context: "SM2 Scalar",
                reason: "Scalar cannot be zero",
            });
        }

        // Lexicographic compare with the curve order, branch-free per byte
        let mut gt = 0u8; // set if bytes > order
        let mut lt = 0u8; // set if bytes < order
        for i in 0..SM2_SCALAR_SIZE {
            let x = bytes[i];
            let y = order[i];
            gt |= ((x > y) as u8) & (!lt);
            lt |= ((x < y) as u8) & (!gt);
        }
        let ge = gt | ((!lt) & 1); // ge = gt || eq

        if ge == 1 {
            return Err(Error::InvalidScalar {
                context: "SM2 Scalar",
                reason: "Scalar must be less than the group order",
            });
        }

        Ok(())
    }
}
