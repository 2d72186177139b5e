//! Error types for the Schnorr signature scheme.

use secp_curve::CurveError;
use thiserror::Error;

/// Errors that can occur during signing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// The private scalar is zero or not reduced modulo the curve order.
    ///
    /// This is a caller error and is reported before any secret-dependent
    /// computation starts.
    #[error("private key must satisfy 1 <= d < n")]
    InvalidPrivateKey,
    /// An internal modular inverse, exponentiation or encoding received a
    /// degenerate input. Indicates a defect, not bad caller input.
    #[error("arithmetic domain error: {0}")]
    ArithmeticDomain(#[from] CurveError),
    /// Deterministic nonce derivation did not find a scalar in `[1, n)`
    /// within the configured number of draws.
    #[error("nonce derivation exhausted after {0} iterations")]
    NonceDerivationExhausted(u32),
    /// A byte slice had the wrong length for the value being decoded.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
