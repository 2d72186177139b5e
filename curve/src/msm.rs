use num_bigint::BigUint;

use crate::affine::Affine;
use crate::errors::CurveError;
use crate::params::CurveParams;
use crate::projective::Projective;

impl CurveParams {
    /// Compute a * G + b * P with a single shared doubling chain.
    pub fn double_scalar_mul(
        &self,
        a: &BigUint,
        b: &BigUint,
        point: &Affine,
    ) -> Result<Affine, CurveError> {
        let g = Projective::from_affine(self.generator());
        let p = Projective::from_affine(point);
        let gp = g.add(&p, self);

        let bits = a.bits().max(b.bits());
        let mut result = Projective::infinity();

        for i in (0..bits).rev() {
            result = result.double(self);
            match (a.bit(i), b.bit(i)) {
                (true, true) => result = result.add(&gp, self),
                (true, false) => result = result.add(&g, self),
                (false, true) => result = result.add(&p, self),
                (false, false) => {}
            }
        }

        result.to_affine(self)
    }
}
