//! Shared constants for SM2 operations

/// Size of an SM2 scalar in bytes (32 bytes = 256 bits)
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an SM2 field element in bytes (32 bytes = 256 bits)
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SM2 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE; // 65 bytes: 0x04 || x || y

/// Size of a compressed SM2 point in bytes: format byte (0x02/0x03) + x-coordinate
pub const SM2_POINT_COMPRESSED_SIZE: usize = 1 + SM2_FIELD_ELEMENT_SIZE; // 33 bytes: 0x02/0x03 || x

/// Width in hex digits of one coordinate or scalar (64)
pub const SM2_COORDINATE_HEX_WIDTH: usize = 2 * SM2_FIELD_ELEMENT_SIZE;

/// Width in hex digits of an uncompressed point encoding (130)
pub const SM2_POINT_UNCOMPRESSED_HEX_WIDTH: usize = 2 * SM2_POINT_UNCOMPRESSED_SIZE;

/// Width in hex digits of a compressed point encoding (66)
pub const SM2_POINT_COMPRESSED_HEX_WIDTH: usize = 2 * SM2_POINT_COMPRESSED_SIZE;
