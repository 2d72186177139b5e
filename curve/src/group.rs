//! Scalar multiplication.
//!
//! All routines accumulate in Jacobian coordinates and convert back to affine
//! once at the end. They are variable time.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::params::CurveParams;
use crate::projective::Projective;

const WINDOW_BITS: u64 = 4;
const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// Reads `WINDOW_BITS` bits of `scalar` starting at bit `offset`.
#[inline]
fn window(scalar: &BigUint, offset: u64) -> usize {
    (0..WINDOW_BITS).fold(0usize, |acc, j| {
        acc | ((scalar.bit(offset + j) as usize) << j)
    })
}

impl CurveParams {
    /// Double-and-add scalar multiplication `scalar * point`.
    ///
    /// `0 * P` and `k * O` both give the point at infinity.
    pub fn scalar_mul(&self, scalar: &BigUint, point: &Affine) -> Result<Affine, CurveError> {
        if point.is_infinity() || scalar.is_zero() {
            return Ok(Affine::infinity());
        }

        let mut result = Projective::infinity();

        for i in (0..scalar.bits()).rev() {
            result = result.double(self);
            if scalar.bit(i) {
                result = result.add_affine(point, self);
            }
        }

        result.to_affine(self)
    }

    /// Fixed 4-bit window scalar multiplication. Same result as
    /// [`CurveParams::scalar_mul`] with fewer additions.
    pub fn scalar_mul_windowed(
        &self,
        scalar: &BigUint,
        point: &Affine,
    ) -> Result<Affine, CurveError> {
        if point.is_infinity() || scalar.is_zero() {
            return Ok(Affine::infinity());
        }

        let mut table = vec![Projective::infinity(); WINDOW_SIZE];
        table[1] = Projective::from_affine(point);
        for i in 2..WINDOW_SIZE {
            table[i] = if i % 2 == 0 {
                table[i / 2].double(self)
            } else {
                table[i - 1].add(&table[1], self)
            };
        }

        let windows = scalar.bits().div_ceil(WINDOW_BITS);
        let mut result = Projective::infinity();

        for w in (0..windows).rev() {
            for _ in 0..WINDOW_BITS {
                result = result.double(self);
            }
            let digit = window(scalar, w * WINDOW_BITS);
            if digit != 0 {
                result = result.add(&table[digit], self);
            }
        }

        result.to_affine(self)
    }

    /// Multiplies the generator: `scalar * G`.
    #[inline]
    pub fn mul_generator(&self, scalar: &BigUint) -> Result<Affine, CurveError> {
        self.scalar_mul_windowed(scalar, self.generator())
    }

    pub fn mul_u64(&self, point: &Affine, n: u64) -> Result<Affine, CurveError> {
        self.scalar_mul(&BigUint::from(n), point)
    }
}
