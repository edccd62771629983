//! Error handling for the algorithmic primitives

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

use gmkit_api::Error as CoreError;

/// The error type for the algorithmic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Malformed hex or non-UTF-8 data during codec conversion
    Decode {
        /// Context where the decode error occurred
        context: &'static str,
        /// Reason the input could not be decoded
        reason: &'static str,
    },

    /// Private scalar outside the range [1, n-1]
    InvalidScalar {
        /// Context where the scalar was rejected
        context: &'static str,
        /// Reason the scalar is invalid
        reason: &'static str,
    },

    /// Coordinates that do not describe a point on the curve
    InvalidPoint {
        /// Context where the point was rejected
        context: &'static str,
        /// Reason the point is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for the algorithmic primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Decode { context, reason } => {
                write!(f, "Decode error in {}: {}", context, reason)
            }
            Error::InvalidScalar { context, reason } => {
                write!(f, "Invalid scalar in {}: {}", context, reason)
            }
            Error::InvalidPoint { context, reason } => {
                write!(f, "Invalid point in {}: {}", context, reason)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Conversion into the unified gmkit error type
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Decode { context, reason } => CoreError::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::InvalidScalar { context, reason } => CoreError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::InvalidPoint { context, reason } => CoreError::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
