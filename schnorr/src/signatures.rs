//! Signature type and challenge hashing.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DIGEST_SIZE, PK_SIZE, SIG_SIZE};
use crate::errors::SchnorrError;

const HALF: usize = SIG_SIZE / 2;

/// A Schnorr signature `(r, s)`.
///
/// `r` is the x-coordinate of the nonce point `R` and `s` the response
/// scalar, each as 32 big-endian bytes. The wire form is `r || s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of `R = k*G`
    pub r: [u8; HALF],
    /// `s = e0*d + k mod n`
    pub s: [u8; HALF],
}

impl Signature {
    /// Serializes as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..HALF].copy_from_slice(&self.r);
        out[HALF..].copy_from_slice(&self.s);
        out
    }

    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Self {
        let mut r = [0u8; HALF];
        let mut s = [0u8; HALF];
        r.copy_from_slice(&bytes[..HALF]);
        s.copy_from_slice(&bytes[HALF..]);
        Self { r, s }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchnorrError> {
        let bytes: &[u8; SIG_SIZE] = bytes.try_into().map_err(|_| SchnorrError::InvalidLength {
            expected: SIG_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl From<Signature> for [u8; SIG_SIZE] {
    fn from(sig: Signature) -> Self {
        sig.to_bytes()
    }
}

/// Computes the challenge `e0 = SHA256(r || P || e)` as a big-endian integer.
///
/// `pk` is the compressed public key and `e` the 32-byte message scalar. The
/// result is not reduced modulo the order.
pub(crate) fn hash_challenge(
    r: &[u8; HALF],
    pk: &[u8; PK_SIZE],
    e: &[u8; DIGEST_SIZE],
) -> BigUint {
    let mut hasher = Sha256::new();
    hasher.update(r);
    hasher.update(pk);
    hasher.update(e);
    BigUint::from_bytes_be(&hasher.finalize())
}
