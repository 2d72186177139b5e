use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::modular::Modulus;

/// Helper trait for sampling uniform residues.
pub trait RandomField {
    /// Samples uniformly from `[1, m)` by rejection.
    fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint;
}

impl RandomField for Modulus {
    fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits();
        let len = bits.div_ceil(8) as usize;
        let excess = (len as u64) * 8 - bits;
        let mut bytes = vec![0u8; len];

        loop {
            rng.fill(&mut bytes[..]);
            bytes[0] &= 0xff >> excess;
            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
