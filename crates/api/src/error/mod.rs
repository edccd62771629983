//! Error handling for the gmkit ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for different operations
/// Result type for key operations
pub type KeyResult<T> = Result<T>;
/// Result type for cipher operations
pub type CipherResult<T> = Result<T>;
