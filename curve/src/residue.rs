//! Quadratic residuosity over the base field.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::modular::Modulus;

/// Value of the Legendre symbol `(y / p)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Legendre {
    /// `y ≡ 0 (mod p)`.
    Zero,
    /// `y` is a non-zero square mod `p`.
    Residue,
    /// `y` is not a square mod `p`.
    NonResidue,
}

/// Evaluates the Legendre symbol with Euler's criterion `y^((p-1)/2) mod p`.
///
/// The field modulus must be an odd prime for the result to be meaningful.
pub fn legendre_symbol(y: &BigUint, field: &Modulus) -> Legendre {
    let exp = (field.value() - BigUint::one()) >> 1u32;
    let t = field.pow(y, &exp);
    if t.is_zero() {
        Legendre::Zero
    } else if t.is_one() {
        Legendre::Residue
    } else {
        Legendre::NonResidue
    }
}

/// Returns `true` iff `y^((p-1)/2) mod p == 1`.
#[inline]
pub fn is_quadratic_residue(y: &BigUint, field: &Modulus) -> bool {
    legendre_symbol(y, field) == Legendre::Residue
}
