//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized secret signing key in bytes.
///
/// A signing key is a big-endian scalar `d` with `1 <= d < n`.
pub const SK_SIZE: usize = 32;

/// Size of a message digest in bytes.
///
/// Digests are supplied in little-endian byte order and reversed before
/// being interpreted as a scalar.
pub const DIGEST_SIZE: usize = 32;

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is serialized as a compressed point: one parity byte
/// followed by the 32-byte x-coordinate.
pub const PK_SIZE: usize = 33;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - The x-coordinate r of the nonce point (32 bytes)
/// - A scalar s (32 bytes)
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Upper bound on candidate draws in deterministic nonce derivation.
///
/// For a 256-bit group order a single draw succeeds with probability
/// `1 - 2^-128`, so this bound is never reached with valid parameters.
pub const DEFAULT_MAX_NONCE_ITERATIONS: u32 = 1_000;

/// Algorithm tag appended to the nonce derivation input. Separates this
/// Schnorr/SHA-256 instantiation from RFC6979 ECDSA nonces for the same key.
pub(crate) const ALGORITHM_TAG: &[u8; 16] = b"Schnorr+SHA256  ";
