//! Short Weierstrass curve arithmetic over arbitrary-precision integers.
//!
//! This crate provides modular arithmetic, affine and Jacobian curve points,
//! scalar multiplication, the quadratic residue test and the fixed-width
//! encodings used by signatures. Domain parameters are an explicit
//! [`CurveParams`] value; [`CurveParams::secp256k1`] builds the standard set.

mod affine;
mod encoding;
mod errors;
mod group;
mod modular;
mod msm;
mod params;
mod projective;
mod random;
mod residue;

pub use affine::Affine;
pub use encoding::{from_be_bytes, from_le_bytes, to_fixed_bytes, COMPRESSED_BYTES, FIELD_BYTES};
pub use errors::CurveError;
pub use modular::Modulus;
pub use num_bigint::BigUint;
pub use params::CurveParams;
pub use projective::Projective;
pub use random::RandomField;
pub use residue::{is_quadratic_residue, legendre_symbol, Legendre};
