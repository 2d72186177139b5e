//! Deterministic signing.

use secp_curve::{CurveError, CurveParams, from_le_bytes, to_fixed_bytes};

use crate::config::SignerConfig;
use crate::constants::{DIGEST_SIZE, SK_SIZE};
use crate::errors::SchnorrError;
use crate::keys::{SigningKey, VerifyingKey};
use crate::nonce::NonceGenerator;
use crate::policy::{NoncePolicy, ResidueY};
use crate::signatures::{Signature, hash_challenge};
use crate::trace::{NoTrace, SignTrace};

/// Produces Schnorr signatures over a fixed curve.
///
/// A signer is immutable once built and can be shared between threads; every
/// call to [`Signer::sign`] is independent.
///
/// # Example
///
/// ```
/// use secp_schnorr::Signer;
///
/// let signer = Signer::secp256k1();
/// let mut key = [0u8; 32];
/// key[31] = 1;
///
/// let first = signer.sign(&key, &[0u8; 32]).expect("signing failed");
/// let second = signer.sign(&key, &[0u8; 32]).expect("signing failed");
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct Signer<P = ResidueY, T = NoTrace> {
    curve: CurveParams,
    config: SignerConfig,
    policy: P,
    trace: T,
}

impl Signer {
    pub fn new(curve: CurveParams) -> Self {
        Self {
            curve,
            config: SignerConfig::default(),
            policy: ResidueY,
            trace: NoTrace,
        }
    }

    pub fn secp256k1() -> Self {
        Self::new(CurveParams::secp256k1())
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::secp256k1()
    }
}

impl<P: NoncePolicy, T: SignTrace> Signer<P, T> {
    pub fn with_config(mut self, config: SignerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the nonce selection policy.
    pub fn with_policy<Q: NoncePolicy>(self, policy: Q) -> Signer<Q, T> {
        Signer {
            curve: self.curve,
            config: self.config,
            policy,
            trace: self.trace,
        }
    }

    /// Installs a hook that observes signing intermediates.
    pub fn with_trace<U: SignTrace>(self, trace: U) -> Signer<P, U> {
        Signer {
            curve: self.curve,
            config: self.config,
            policy: self.policy,
            trace,
        }
    }

    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// Derives the verifying key for a raw private key.
    pub fn verifying_key(&self, private_key: &[u8; SK_SIZE]) -> Result<VerifyingKey, SchnorrError> {
        SigningKey::from_bytes(private_key, &self.curve)?.verifying_key(&self.curve)
    }

    /// Signs a 32-byte digest with a raw big-endian private key.
    ///
    /// The digest is read in little-endian order: its bytes are reversed
    /// before being used as the message scalar `e`. The result depends only
    /// on the key, the digest, the configured extra entropy and the policy.
    ///
    /// # Errors
    ///
    /// - [`SchnorrError::InvalidPrivateKey`] if the key is not in `[1, n)`
    /// - [`SchnorrError::NonceDerivationExhausted`] if no nonce was found
    ///   within the configured number of draws
    /// - [`SchnorrError::ArithmeticDomain`] on degenerate curve arithmetic
    pub fn sign(
        &self,
        private_key: &[u8; SK_SIZE],
        digest: &[u8; DIGEST_SIZE],
    ) -> Result<Signature, SchnorrError> {
        let key = SigningKey::from_bytes(private_key, &self.curve)?;
        self.sign_with_key(&key, digest)
    }

    /// Signs with an already validated key. See [`Signer::sign`].
    pub fn sign_with_key(
        &self,
        key: &SigningKey,
        digest: &[u8; DIGEST_SIZE],
    ) -> Result<Signature, SchnorrError> {
        let order = self.curve.order();

        let message = to_fixed_bytes(&from_le_bytes(digest))?;

        let public = key.verifying_key(&self.curve)?.to_compressed()?;

        let k = NonceGenerator::new(order)
            .with_extra_entropy(&self.config.extra_entropy)
            .with_max_iterations(self.config.max_nonce_iterations)
            .derive(key.as_bytes(), &message)?;
        self.trace.nonce(&k);

        let commitment = self.curve.mul_generator(&k)?;
        if commitment.is_infinity() {
            return Err(CurveError::PointAtInfinity.into());
        }

        let keep = self.policy.keep_nonce(&commitment, &self.curve);
        self.trace.nonce_negated(!keep);
        let k = if keep { k } else { order.neg(&k) };

        let r = commitment.x_bytes()?;
        let e0 = hash_challenge(&r, &public, &message);
        self.trace.challenge(&e0);

        let s = order.add(&order.mul(&e0, &key.scalar()), &k);

        Ok(Signature {
            r,
            s: to_fixed_bytes(&s)?,
        })
    }
}
