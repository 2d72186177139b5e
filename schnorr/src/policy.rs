//! Canonical nonce selection.
//!
//! After `R = k*G` is computed the signer asks a [`NoncePolicy`] whether `k`
//! stays as is or is replaced by `n - k`. Both nonces share `R.x`, so the
//! choice only affects `s` and which of `R`, `-R` a verifier reconstructs.

use secp_curve::{Affine, CurveParams, is_quadratic_residue};

/// Decides whether the nonce behind `commitment` is kept or negated.
pub trait NoncePolicy {
    /// Returns `true` to keep `k`, `false` to substitute `n - k`.
    fn keep_nonce(&self, commitment: &Affine, curve: &CurveParams) -> bool;
}

/// Keeps `k` iff `R` is finite and `R.y` is a quadratic residue.
///
/// This is the BCH/Nexa convention: the verifier reconstructs
/// `R' = s*G - e*P` and requires `jacobi(R'.y) = 1` and `R'.x = r`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResidueY;

impl NoncePolicy for ResidueY {
    fn keep_nonce(&self, commitment: &Affine, curve: &CurveParams) -> bool {
        !commitment.is_infinity() && is_quadratic_residue(&commitment.y, curve.field())
    }
}

/// Keeps `k` iff `R` is the point at infinity and `R.y` is a quadratic
/// residue.
///
/// A commitment from a nonce in `[1, n)` is never infinity, so this policy
/// always substitutes `n - k`. The result verifies only when `R.y` is a
/// non-residue. Use it solely to reproduce signatures made by signers that
/// shipped this predicate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InfinityGatedResidue;

impl NoncePolicy for InfinityGatedResidue {
    fn keep_nonce(&self, commitment: &Affine, curve: &CurveParams) -> bool {
        commitment.is_infinity() && is_quadratic_residue(&commitment.y, curve.field())
    }
}

impl<P: NoncePolicy + ?Sized> NoncePolicy for &P {
    fn keep_nonce(&self, commitment: &Affine, curve: &CurveParams) -> bool {
        (**self).keep_nonce(commitment, curve)
    }
}
