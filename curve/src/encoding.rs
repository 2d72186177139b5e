//! Fixed-width big-endian encodings of field and scalar values.

use num_bigint::BigUint;

use crate::errors::CurveError;

/// Width of an encoded field element or scalar.
pub const FIELD_BYTES: usize = 32;

/// Width of a compressed point: parity prefix plus x-coordinate.
pub const COMPRESSED_BYTES: usize = FIELD_BYTES + 1;

/// Encodes `value` as exactly 32 big-endian bytes, left-padded with zeros.
///
/// Fails with [`CurveError::Overflow`] if the value needs more than 32 bytes.
pub fn to_fixed_bytes(value: &BigUint) -> Result<[u8; FIELD_BYTES], CurveError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > FIELD_BYTES {
        return Err(CurveError::Overflow(FIELD_BYTES));
    }
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

#[inline]
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Interprets `bytes` as a little-endian integer, i.e. reverses them before
/// the big-endian interpretation.
#[inline]
pub fn from_le_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}
