//! Signing and verifying keys for the Schnorr signature scheme.

use std::fmt;

use num_bigint::BigUint;
use rand::Rng;
use secp_curve::{Affine, CurveError, CurveParams, RandomField, from_be_bytes, to_fixed_bytes};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::SchnorrError;

/// A secret signing key.
///
/// Holds the 32-byte big-endian encoding of a scalar `d` with `1 <= d < n`.
/// The bytes are wiped when the key is dropped and never printed.
///
/// # Example
///
/// ```
/// use secp_curve::CurveParams;
/// use secp_schnorr::SigningKey;
///
/// let curve = CurveParams::secp256k1();
/// let mut bytes = [0u8; 32];
/// bytes[31] = 1;
/// let signing_key = SigningKey::from_bytes(&bytes, &curve).expect("valid key");
/// assert_eq!(signing_key.to_bytes(), bytes);
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    bytes: [u8; SK_SIZE],
}

/// A public verifying key, the point `P = d*G`.
///
/// # Example
///
/// ```
/// use secp_curve::CurveParams;
/// use secp_schnorr::SigningKey;
///
/// let curve = CurveParams::secp256k1();
/// let mut bytes = [0u8; 32];
/// bytes[31] = 1;
/// let signing_key = SigningKey::from_bytes(&bytes, &curve).expect("valid key");
/// let verifying_key = signing_key.verifying_key(&curve).expect("finite point");
/// assert_eq!(verifying_key.point(), curve.generator());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Parses a big-endian private scalar.
    ///
    /// # Errors
    ///
    /// Returns [`SchnorrError::InvalidPrivateKey`] unless `1 <= d < n` for the
    /// order `n` of `curve`.
    pub fn from_bytes(bytes: &[u8; SK_SIZE], curve: &CurveParams) -> Result<Self, SchnorrError> {
        let d = from_be_bytes(bytes);
        if d.bits() == 0 || !curve.order().contains(&d) {
            debug!("rejected private key outside [1, n)");
            return Err(SchnorrError::InvalidPrivateKey);
        }
        Ok(Self { bytes: *bytes })
    }

    /// Like [`SigningKey::from_bytes`], but checks the length first.
    pub fn from_slice(bytes: &[u8], curve: &CurveParams) -> Result<Self, SchnorrError> {
        let bytes: &[u8; SK_SIZE] = bytes.try_into().map_err(|_| SchnorrError::InvalidLength {
            expected: SK_SIZE,
            actual: bytes.len(),
        })?;
        Self::from_bytes(bytes, curve)
    }

    /// Generates a uniformly random signing key for `curve`.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R, curve: &CurveParams) -> Result<Self, SchnorrError> {
        let d = curve.order().random_nonzero(rng);
        Ok(Self {
            bytes: to_fixed_bytes(&d)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.bytes
    }

    pub(crate) fn as_bytes(&self) -> &[u8; SK_SIZE] {
        &self.bytes
    }

    /// The private scalar `d`.
    ///
    /// `BigUint` cannot be zeroized, so the returned copy is not wiped when
    /// dropped. Keep it short-lived.
    pub(crate) fn scalar(&self) -> BigUint {
        from_be_bytes(&self.bytes)
    }

    /// Derives the verifying key `P = d*G`.
    pub fn verifying_key(&self, curve: &CurveParams) -> Result<VerifyingKey, SchnorrError> {
        let point = curve.mul_generator(&self.scalar())?;
        if point.is_infinity() {
            return Err(CurveError::PointAtInfinity.into());
        }
        Ok(VerifyingKey { point })
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

impl VerifyingKey {
    pub fn point(&self) -> &Affine {
        &self.point
    }

    /// SEC1 compressed encoding, as hashed into the challenge.
    pub fn to_compressed(&self) -> Result<[u8; PK_SIZE], SchnorrError> {
        Ok(self.point.compress()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_out_of_range() {
        let curve = CurveParams::secp256k1();
        let n = to_fixed_bytes(curve.order().value()).expect("fits");

        assert_eq!(
            SigningKey::from_bytes(&[0u8; 32], &curve),
            Err(SchnorrError::InvalidPrivateKey)
        );
        assert_eq!(
            SigningKey::from_bytes(&n, &curve),
            Err(SchnorrError::InvalidPrivateKey)
        );
        assert_eq!(
            SigningKey::from_bytes(&[0xff; 32], &curve),
            Err(SchnorrError::InvalidPrivateKey)
        );

        let mut n_minus_one = n;
        n_minus_one[31] -= 1;
        assert!(SigningKey::from_bytes(&n_minus_one, &curve).is_ok());
    }

    #[test]
    fn test_from_slice_length() {
        let curve = CurveParams::secp256k1();
        assert_eq!(
            SigningKey::from_slice(&[1u8; 31], &curve),
            Err(SchnorrError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
        assert!(SigningKey::from_slice(&[1u8; 32], &curve).is_ok());
    }

    #[test]
    fn test_random_key_is_valid() {
        let curve = CurveParams::secp256k1();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..8 {
            let sk = SigningKey::random(&mut rng, &curve).expect("key");
            assert!(SigningKey::from_bytes(&sk.to_bytes(), &curve).is_ok());
            let vk = sk.verifying_key(&curve).expect("finite");
            assert!(curve.is_on_curve(vk.point()));
        }
    }

    #[test]
    fn test_scalar_matches_bytes() {
        let curve = CurveParams::secp256k1();
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0x02;
        let sk = SigningKey::from_bytes(&bytes, &curve).expect("key");
        assert_eq!(sk.scalar(), (BigUint::from(1u32) << 248u32) + 2u32);
        assert_eq!(to_fixed_bytes(&sk.scalar()), Ok(bytes));
    }

    #[test]
    fn test_debug_is_redacted() {
        let curve = CurveParams::secp256k1();
        let sk = SigningKey::from_bytes(&[0x42; 32], &curve).expect("key");
        let printed = format!("{sk:?}");
        assert!(!printed.contains("42"));
    }

    #[test]
    fn test_serialized_verifying_key_restores() {
        let curve = CurveParams::secp256k1();
        let sk = SigningKey::from_bytes(&[0x07; 32], &curve).expect("key");
        let vk = sk.verifying_key(&curve).expect("finite");

        let bytes = bincode::serialize(&vk).expect("serialize");
        let restored: VerifyingKey = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, vk);
        assert_eq!(restored.to_compressed(), vk.to_compressed());
    }
}
