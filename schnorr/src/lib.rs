//! Deterministic Schnorr signatures over secp256k1.
//!
//! This library implements the Schnorr variant used by Bitcoin Cash and
//! Nexa:
//! - The secp256k1 curve, via the `secp-curve` crate
//! - SHA-256 for the challenge `e0 = H(R.x || P || e)`
//! - An RFC6979-style HMAC-SHA256 nonce, so signing needs no randomness
//!
//! # Overview
//!
//! Signing takes a 32-byte big-endian private key and a 32-byte digest. The
//! digest is supplied in little-endian order and reversed internally. The
//! output is the 64-byte `r || s`, where `r` is the x-coordinate of the nonce
//! point and `s = e0*d + k mod n`. The nonce is chosen so that the y
//! coordinate of `R` is a quadratic residue, which lets a verifier recover
//! `R` from its x-coordinate alone.
//!
//! # Example
//!
//! ```
//! use secp_schnorr::{Signer, SignerConfig};
//!
//! let signer = Signer::secp256k1();
//! let private_key = [0x11u8; 32];
//! let digest = [0x22u8; 32];
//!
//! let signature = signer.sign(&private_key, &digest).expect("signing failed");
//! assert_eq!(signature.to_bytes().len(), 64);
//!
//! // Extra entropy yields a different, still deterministic, signature
//! let salted = Signer::secp256k1().with_config(SignerConfig {
//!     extra_entropy: vec![0xaa; 32],
//!     ..SignerConfig::default()
//! });
//! assert_ne!(salted.sign(&private_key, &digest).expect("signing failed"), signature);
//! ```
//!
//! # Security Considerations
//!
//! - Arithmetic is variable time
//! - Protect the signing key from unauthorized access
//! - Install a [`SignTrace`] other than [`NoTrace`] only for diagnostics

mod config;
mod constants;
mod errors;
mod keys;
mod nonce;
mod policy;
mod signatures;
mod signer;
mod trace;


pub use config::SignerConfig;
pub use constants::{DEFAULT_MAX_NONCE_ITERATIONS, DIGEST_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::SchnorrError;
pub use keys::{SigningKey, VerifyingKey};
pub use nonce::NonceGenerator;
pub use policy::{InfinityGatedResidue, NoncePolicy, ResidueY};
pub use signatures::Signature;
pub use signer::Signer;
pub use trace::{NoTrace, SignTrace, TRACE_TARGET, TracingTrace};

/// Signs `digest` with `private_key` on secp256k1 using the default
/// configuration and returns the 64-byte `r || s`.
pub fn sign(
    private_key: &[u8; SK_SIZE],
    digest: &[u8; DIGEST_SIZE],
) -> Result<[u8; SIG_SIZE], SchnorrError> {
    Signer::secp256k1()
        .sign(private_key, digest)
        .map(|sig| sig.to_bytes())
}
