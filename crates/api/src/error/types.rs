//! Error type definitions for gmkit operations

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for gmkit operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        /// Operation that rejected the ciphertext
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },

    /// Decryption error
    DecryptionFailed {
        /// Operation that failed
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        /// Operation that needed randomness
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        #[cfg(feature = "std")]
        /// Detailed failure message
        message: String,
    },
}

/// Result type for gmkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => {
                write!(f, "Invalid key in {}", context)
            }
            Self::InvalidParameter { context, .. } => {
                write!(f, "Invalid parameter in {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length in {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Self::InvalidCiphertext { context, .. } => {
                write!(f, "Invalid ciphertext in {}", context)
            }
            Self::DecryptionFailed { context, .. } => {
                write!(f, "Decryption failed in {}", context)
            }
            Self::RandomGenerationError { context, .. } => {
                write!(f, "Random generation failed in {}", context)
            }
            Self::Other { context, .. } => {
                write!(f, "Error in {}", context)
            }
        }
    }
}
