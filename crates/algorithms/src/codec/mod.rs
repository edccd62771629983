//! Binary/hex/UTF-8 conversion helpers
//!
//! Pure, stateless conversions between byte sequences, lowercase hex
//! strings and UTF-8 text. These feed the hex-string boundary of the
//! SM2 utilities: scalars and curve points cross that boundary as
//! fixed-width lowercase hex.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::{String, ToString};
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Convert a byte sequence to a lowercase hex string
///
/// Each byte renders as exactly two lowercase hex digits.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Convert a hex string to a byte sequence
///
/// Odd-length input is left-padded with one leading zero before
/// conversion, preserving a canonical even length. Non-hex characters
/// are rejected.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let decoded = if hex.len() % 2 == 1 {
        let mut padded = String::with_capacity(hex.len() + 1);
        padded.push('0');
        padded.push_str(hex);
        hex::decode(padded)
    } else {
        hex::decode(hex)
    };
    decoded.map_err(|_| Error::Decode {
        context: "hex_to_bytes",
        reason: "input contains non-hex characters",
    })
}

/// Render a UTF-8 string as the hex of its byte sequence
pub fn utf8_to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Decode a hex string back into UTF-8 text
///
/// Fails when the hex is malformed or the decoded bytes are not valid
/// UTF-8.
pub fn hex_to_utf8(hex: &str) -> Result<String> {
    let bytes = hex_to_bytes(hex)?;
    String::from_utf8(bytes).map_err(|_| Error::Decode {
        context: "hex_to_utf8",
        reason: "decoded bytes are not valid UTF-8",
    })
}

/// Left-pad a hex string with '0' characters to the given width
///
/// No-op when the input is already at least `width` long; never
/// truncates.
pub fn left_pad(hex: &str, width: usize) -> String {
    if hex.len() >= width {
        return hex.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - hex.len() {
        out.push('0');
    }
    out.push_str(hex);
    out
}
