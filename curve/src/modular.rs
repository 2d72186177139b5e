//! Modular arithmetic over an arbitrary-precision modulus.
//!
//! The same type serves the base field (modulus `p`) and the scalar field
//! (modulus `n`). Every operation accepts unreduced operands and returns a
//! value normalized into `[0, m)`.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;

/// A modulus `m >= 2` together with the residue operations mod `m`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modulus {
    value: BigUint,
}

impl Modulus {
    /// Wraps `value` as a modulus.
    ///
    /// Returns [`CurveError::InvalidOperand`] for `0` and `1`.
    pub fn new(value: BigUint) -> Result<Self, CurveError> {
        if value <= BigUint::one() {
            return Err(CurveError::InvalidOperand);
        }
        Ok(Self { value })
    }

    /// Wraps a constant already known to be larger than one.
    pub(crate) fn from_trusted(value: BigUint) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Returns `true` if `a` is already reduced, i.e. `a < m`.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.value
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.value
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.value
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.value - b + a
        }
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.value - a
        }
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.value
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiplies `a` by a small constant.
    #[inline]
    pub fn mul_u32(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.value
    }

    /// Variable-time modular exponentiation `base^exp mod m`.
    #[inline]
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        self.reduce(base).modpow(exp, &self.value)
    }

    /// Multiplicative inverse of `a`.
    ///
    /// Fails with [`CurveError::InvalidOperand`] when `a` shares a factor with
    /// the modulus, in particular when `a` is a multiple of it.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, CurveError> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(CurveError::InvalidOperand);
        }
        a.modinv(&self.value).ok_or(CurveError::InvalidOperand)
    }

    /// Computes `a / b` as `a * b^{-1}`.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        Ok(self.mul(a, &self.inv(b)?))
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Modulus {
        Modulus::new(BigUint::from(97u32)).expect("modulus")
    }

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_rejects_degenerate_modulus() {
        assert_eq!(Modulus::new(big(0)), Err(CurveError::InvalidOperand));
        assert_eq!(Modulus::new(big(1)), Err(CurveError::InvalidOperand));
        assert!(Modulus::new(big(2)).is_ok());
    }

    #[test]
    fn test_addition_wraps() {
        let m = small();
        assert_eq!(m.add(&big(90), &big(10)), big(3));
        assert_eq!(m.add(&big(5), &big(7)), big(12));
    }

    #[test]
    fn test_subtraction_wraps() {
        let m = small();
        assert_eq!(m.sub(&big(10), &big(3)), big(7));
        assert_eq!(m.sub(&big(3), &big(10)), big(90));
        assert_eq!(m.sub(&big(200), &big(3)), big(3));
    }

    #[test]
    fn test_negation() {
        let m = small();
        assert_eq!(m.neg(&big(5)), big(92));
        assert_eq!(m.neg(&big(0)), big(0));
        assert_eq!(m.neg(&big(97)), big(0));
        assert_eq!(m.add(&big(5), &m.neg(&big(5))), big(0));
    }

    #[test]
    fn test_multiplication() {
        let m = small();
        assert_eq!(m.mul(&big(6), &big(7)), big(42));
        assert_eq!(m.mul(&big(50), &big(50)), big(2500 % 97));
        assert_eq!(m.square(&big(10)), big(3));
        assert_eq!(m.mul_u32(&big(40), 3), big(23));
    }

    #[test]
    fn test_pow() {
        let m = small();
        assert_eq!(m.pow(&big(3), &big(4)), big(81));
        // Fermat: a^(p-1) = 1
        assert_eq!(m.pow(&big(5), &big(96)), big(1));
    }

    #[test]
    fn test_inverse() {
        let m = small();
        let a = big(5);
        let a_inv = m.inv(&a).expect("invertible");
        assert_eq!(m.mul(&a, &a_inv), big(1));
        assert_eq!(m.div(&big(10), &big(5)), Ok(big(2)));
    }

    #[test]
    fn test_inverse_of_multiple_fails() {
        let m = small();
        assert_eq!(m.inv(&big(0)), Err(CurveError::InvalidOperand));
        assert_eq!(m.inv(&big(194)), Err(CurveError::InvalidOperand));
        assert_eq!(m.div(&big(1), &big(97)), Err(CurveError::InvalidOperand));
    }

    #[test]
    fn test_inverse_non_prime_modulus() {
        let m = Modulus::new(big(15)).expect("modulus");
        assert_eq!(m.inv(&big(6)), Err(CurveError::InvalidOperand));
        assert_eq!(m.inv(&big(7)), Ok(big(13)));
    }

    #[test]
    fn test_outputs_normalized() {
        let m = small();
        let huge = big(u64::MAX);
        for out in [
            m.reduce(&huge),
            m.add(&huge, &huge),
            m.sub(&huge, &big(1)),
            m.mul(&huge, &huge),
            m.pow(&huge, &big(3)),
        ] {
            assert!(m.contains(&out));
        }
    }
}
