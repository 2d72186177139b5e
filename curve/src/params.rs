//! Curve domain parameters.
//!
//! secp256k1: y^2 = x^3 + 7 over GF(p)
//! p = 2^256 - 2^32 - 977
//! n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//! Cofactor: 1
//!
//! A [`CurveParams`] value is built once and handed by reference to every
//! operation that needs it. It is immutable, so a single instance can be
//! shared across threads.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::modular::Modulus;

const SECP256K1_P: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

const SECP256K1_N: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

const SECP256K1_GX: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

const SECP256K1_GY: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

const SECP256K1_B: u32 = 7;

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    field: Modulus,
    order: Modulus,
    a: BigUint,
    b: BigUint,
    generator: Affine,
}

impl CurveParams {
    /// Builds a parameter set, checking that `a` and `b` are reduced and that
    /// the generator is a finite point on the curve.
    ///
    /// Primality of `field` and `order` is the caller's responsibility.
    pub fn new(
        field: Modulus,
        order: Modulus,
        a: BigUint,
        b: BigUint,
        generator: Affine,
    ) -> Result<Self, CurveError> {
        if !field.contains(&a) || !field.contains(&b) {
            return Err(CurveError::InvalidOperand);
        }
        let params = Self {
            field,
            order,
            a,
            b,
            generator,
        };
        if params.generator.is_infinity() || !params.is_on_curve(&params.generator) {
            return Err(CurveError::NotOnCurve);
        }
        Ok(params)
    }

    /// The secp256k1 parameter set.
    pub fn secp256k1() -> Self {
        // The constants are fixed and valid, so the checks in `new` are skipped.
        Self {
            field: Modulus::from_trusted(BigUint::from_bytes_be(&SECP256K1_P)),
            order: Modulus::from_trusted(BigUint::from_bytes_be(&SECP256K1_N)),
            a: BigUint::zero(),
            b: BigUint::from(SECP256K1_B),
            generator: Affine::new(
                BigUint::from_bytes_be(&SECP256K1_GX),
                BigUint::from_bytes_be(&SECP256K1_GY),
            ),
        }
    }

    /// y^2 = x^3 + 7 over GF(1051), prime order 1093.
    #[cfg(test)]
    pub(crate) fn toy() -> Self {
        Self::new(
            Modulus::new(BigUint::from(1051u32)).expect("field"),
            Modulus::new(BigUint::from(1093u32)).expect("order"),
            BigUint::zero(),
            BigUint::from(7u32),
            Affine::new(BigUint::from(3u32), BigUint::from(666u32)),
        )
        .expect("toy curve")
    }

    /// Modulus `p` of the base field.
    #[inline]
    pub fn field(&self) -> &Modulus {
        &self.field
    }

    /// Order `n` of the generator.
    #[inline]
    pub fn order(&self) -> &Modulus {
        &self.order
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        if point.is_infinity() {
            return true;
        }
        let p = &self.field;
        if !p.contains(&point.x) || !p.contains(&point.y) {
            return false;
        }

        let y2 = p.square(&point.y);
        let x3 = p.mul(&p.square(&point.x), &point.x);
        let ax = p.mul(&self.a, &point.x);
        let rhs = p.add(&p.add(&x3, &ax), &self.b);

        y2 == rhs
    }
}
