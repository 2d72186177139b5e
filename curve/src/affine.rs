use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::encoding::{to_fixed_bytes, COMPRESSED_BYTES, FIELD_BYTES};
use crate::errors::CurveError;
use crate::params::CurveParams;

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point, reduced mod p
    pub x: BigUint,
    /// The y-coordinate of the point, reduced mod p
    pub y: BigUint,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The point at infinity (identity element).
    pub fn infinity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    pub fn is_y_odd(&self) -> bool {
        self.y.bit(0)
    }

    /// The x-coordinate as 32 big-endian bytes.
    pub fn x_bytes(&self) -> Result<[u8; FIELD_BYTES], CurveError> {
        if self.is_infinity {
            return Err(CurveError::PointAtInfinity);
        }
        to_fixed_bytes(&self.x)
    }

    /// SEC1 compressed encoding: `0x02` for even y, `0x03` for odd y,
    /// followed by the 32-byte x-coordinate.
    pub fn compress(&self) -> Result<[u8; COMPRESSED_BYTES], CurveError> {
        let x = self.x_bytes()?;
        let mut out = [0u8; COMPRESSED_BYTES];
        out[0] = if self.is_y_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&x);
        Ok(out)
    }

    /// Point doubling: 2*P.
    pub fn double(&self, curve: &CurveParams) -> Result<Self, CurveError> {
        if self.is_infinity {
            return Ok(self.clone());
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Ok(Self::infinity());
        }

        let p = curve.field();

        // λ = (3x^2 + a) / (2y)
        let numerator = p.add(&p.mul_u32(&p.square(&self.x), 3), curve.a());
        let denominator = p.mul_u32(&self.y, 2);
        let lambda = p.div(&numerator, &denominator)?;

        // x_r = λ^2 - 2x
        let x_r = p.sub(&p.square(&lambda), &p.mul_u32(&self.x, 2));

        // y_r = λ(x - x_r) - y
        let y_r = p.sub(&p.mul(&lambda, &p.sub(&self.x, &x_r)), &self.y);

        Ok(Affine::new(x_r, y_r))
    }

    /// Point addition: P + Q.
    pub fn add(&self, other: &Self, curve: &CurveParams) -> Result<Self, CurveError> {
        if self.is_infinity {
            return Ok(other.clone());
        }
        if other.is_infinity {
            return Ok(self.clone());
        }

        let p = curve.field();

        if self.x == other.x {
            if self.y == other.y {
                return self.double(curve);
            }
            // Points are inverses
            return Ok(Self::infinity());
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = p.div(&p.sub(&other.y, &self.y), &p.sub(&other.x, &self.x))?;

        // x_r = λ^2 - x1 - x2
        let x_r = p.sub(&p.sub(&p.square(&lambda), &self.x), &other.x);

        // y_r = λ(x1 - x_r) - y1
        let y_r = p.sub(&p.mul(&lambda, &p.sub(&self.x, &x_r)), &self.y);

        Ok(Affine::new(x_r, y_r))
    }

    /// Negate a point.
    pub fn negate(&self, curve: &CurveParams) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), curve.field().neg(&self.y))
    }
}
