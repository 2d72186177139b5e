use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::params::CurveParams;

/// Jacobian point on the elliptic curve.
/// Represents a point in coordinates (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented as (0:1:0).
///
/// Group operations never invert; the single inversion happens in
/// [`Projective::to_affine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projective {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl Projective {
    /// The point at infinity (identity element): (0:1:0)
    pub fn infinity() -> Self {
        Projective {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Create a new projective point.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }

        Projective::new(point.x.clone(), point.y.clone(), BigUint::one())
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self, curve: &CurveParams) -> Result<Affine, CurveError> {
        if self.is_infinity() {
            return Ok(Affine::infinity());
        }

        let p = curve.field();
        let z_inv = p.inv(&self.z)?;
        let z_inv2 = p.square(&z_inv);
        let z_inv3 = p.mul(&z_inv2, &z_inv);

        Ok(Affine::new(p.mul(&self.x, &z_inv2), p.mul(&self.y, &z_inv3)))
    }

    /// Point doubling: 2*P.
    pub fn double(&self, curve: &CurveParams) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity();
        }

        let p = curve.field();

        let y2 = p.square(&self.y);
        // S = 4*X*Y^2
        let s = p.mul_u32(&p.mul(&self.x, &y2), 4);
        // M = 3*X^2 + a*Z^4
        let mut m = p.mul_u32(&p.square(&self.x), 3);
        if !curve.a().is_zero() {
            let z4 = p.square(&p.square(&self.z));
            m = p.add(&m, &p.mul(curve.a(), &z4));
        }

        // X' = M^2 - 2*S
        let x3 = p.sub(&p.square(&m), &p.mul_u32(&s, 2));
        // Y' = M*(S - X') - 8*Y^4
        let y3 = p.sub(&p.mul(&m, &p.sub(&s, &x3)), &p.mul_u32(&p.square(&y2), 8));
        // Z' = 2*Y*Z
        let z3 = p.mul_u32(&p.mul(&self.y, &self.z), 2);

        Projective::new(x3, y3, z3)
    }

    /// Point addition: P + Q.
    pub fn add(&self, other: &Self, curve: &CurveParams) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let p = curve.field();

        let z1z1 = p.square(&self.z);
        let z2z2 = p.square(&other.z);
        let u1 = p.mul(&self.x, &z2z2);
        let u2 = p.mul(&other.x, &z1z1);
        let s1 = p.mul(&self.y, &p.mul(&other.z, &z2z2));
        let s2 = p.mul(&other.y, &p.mul(&self.z, &z1z1));

        if u1 == u2 {
            if s1 == s2 {
                return self.double(curve);
            }
            return Self::infinity();
        }

        let h = p.sub(&u2, &u1);
        let r = p.sub(&s2, &s1);
        let h2 = p.square(&h);
        let h3 = p.mul(&h2, &h);
        let u1h2 = p.mul(&u1, &h2);

        // X3 = R^2 - H^3 - 2*U1*H^2
        let x3 = p.sub(&p.sub(&p.square(&r), &h3), &p.mul_u32(&u1h2, 2));
        // Y3 = R*(U1*H^2 - X3) - S1*H^3
        let y3 = p.sub(&p.mul(&r, &p.sub(&u1h2, &x3)), &p.mul(&s1, &h3));
        // Z3 = H*Z1*Z2
        let z3 = p.mul(&h, &p.mul(&self.z, &other.z));

        Projective::new(x3, y3, z3)
    }

    /// Mixed addition P + Q with Q in affine form (Z2 = 1).
    pub fn add_affine(&self, other: &Affine, curve: &CurveParams) -> Self {
        if other.is_infinity() {
            return self.clone();
        }
        if self.is_infinity() {
            return Self::from_affine(other);
        }

        let p = curve.field();

        let z1z1 = p.square(&self.z);
        // U1 = X1, S1 = Y1
        let u2 = p.mul(&other.x, &z1z1);
        let s2 = p.mul(&other.y, &p.mul(&self.z, &z1z1));

        if self.x == u2 {
            if self.y == s2 {
                return self.double(curve);
            }
            return Self::infinity();
        }

        let h = p.sub(&u2, &self.x);
        let r = p.sub(&s2, &self.y);
        let h2 = p.square(&h);
        let h3 = p.mul(&h2, &h);
        let u1h2 = p.mul(&self.x, &h2);

        let x3 = p.sub(&p.sub(&p.square(&r), &h3), &p.mul_u32(&u1h2, 2));
        let y3 = p.sub(&p.mul(&r, &p.sub(&u1h2, &x3)), &p.mul(&self.y, &h3));
        let z3 = p.mul(&h, &self.z);

        Projective::new(x3, y3, z3)
    }

    /// Negate a point.
    pub fn negate(&self, curve: &CurveParams) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Projective::new(self.x.clone(), curve.field().neg(&self.y), self.z.clone())
    }
}
