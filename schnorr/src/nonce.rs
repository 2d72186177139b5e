//! Deterministic nonce derivation in the style of RFC6979.
//!
//! The generator is HMAC-SHA256 keyed as in RFC6979 section 3.2, with the
//! private key and message scalar as seed material, optional extra entropy,
//! and a 16-byte algorithm tag that keeps these nonces apart from ECDSA
//! nonces derived for the same key and message.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use secp_curve::Modulus;
use sha2::Sha256;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::constants::{ALGORITHM_TAG, DEFAULT_MAX_NONCE_ITERATIONS, DIGEST_SIZE, SK_SIZE};
use crate::errors::SchnorrError;

type HmacSha256 = Hmac<Sha256>;

const HASH_SIZE: usize = 32;

fn hmac_sha256(key: &[u8; HASH_SIZE], parts: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Derives the per-signature nonce `k` from a private key and message.
///
/// The output is a pure function of the private key, the message, the
/// extra entropy and the group order. No clock or random source is read.
#[derive(Clone, Debug)]
pub struct NonceGenerator<'a> {
    order: &'a Modulus,
    extra_entropy: &'a [u8],
    max_iterations: u32,
}

impl<'a> NonceGenerator<'a> {
    pub fn new(order: &'a Modulus) -> Self {
        Self {
            order,
            extra_entropy: &[],
            max_iterations: DEFAULT_MAX_NONCE_ITERATIONS,
        }
    }

    /// Mixes `entropy` into the seed. Changes the derived nonce, and with it
    /// the signature, for every non-empty value.
    pub fn with_extra_entropy(mut self, entropy: &'a [u8]) -> Self {
        self.extra_entropy = entropy;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns a nonce in `[1, n)`.
    ///
    /// `secret` is the 32-byte big-endian private scalar and `message` the
    /// 32-byte big-endian message scalar.
    ///
    /// HMAC state and seed bytes are wiped on return. The returned `BigUint`
    /// and rejected candidates are not, since `BigUint` cannot be zeroized.
    pub fn derive(
        &self,
        secret: &[u8; SK_SIZE],
        message: &[u8; DIGEST_SIZE],
    ) -> Result<BigUint, SchnorrError> {
        let mut v = Zeroizing::new([0x01u8; HASH_SIZE]);
        let mut k = Zeroizing::new([0x00u8; HASH_SIZE]);
        let seed = Zeroizing::new(
            [
                secret.as_slice(),
                message.as_slice(),
                self.extra_entropy,
                ALGORITHM_TAG.as_slice(),
            ]
            .concat(),
        );

        *k = hmac_sha256(&k, &[&v[..], &[0x00u8][..], &seed[..]]);
        *v = hmac_sha256(&k, &[&v[..]]);
        *k = hmac_sha256(&k, &[&v[..], &[0x01u8][..], &seed[..]]);
        *v = hmac_sha256(&k, &[&v[..]]);

        for attempt in 0..self.max_iterations {
            *v = hmac_sha256(&k, &[&v[..]]);
            let candidate = BigUint::from_bytes_be(&v[..]);
            if !candidate.is_zero() && self.order.contains(&candidate) {
                return Ok(candidate);
            }

            debug!(attempt, "nonce candidate out of range, reseeding");
            *k = hmac_sha256(&k, &[&v[..], &[0x00u8][..]]);
            *v = hmac_sha256(&k, &[&v[..]]);
        }

        warn!(
            max_iterations = self.max_iterations,
            "nonce derivation exhausted"
        );
        Err(SchnorrError::NonceDerivationExhausted(self.max_iterations))
    }
}
