//! Signer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_NONCE_ITERATIONS;

/// Tunables for [`Signer`](crate::Signer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Maximum number of candidate draws in nonce derivation before signing
    /// fails with [`NonceDerivationExhausted`](crate::SchnorrError::NonceDerivationExhausted).
    pub max_nonce_iterations: u32,
    /// Additional input mixed into nonce derivation between the message and
    /// the algorithm tag.
    ///
    /// Empty by default. Any non-empty value changes every signature
    /// produced, so both sides of a reproducibility check must agree on it.
    pub extra_entropy: Vec<u8>,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            max_nonce_iterations: DEFAULT_MAX_NONCE_ITERATIONS,
            extra_entropy: Vec::new(),
        }
    }
}
