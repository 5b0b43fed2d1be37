//! Key generation: rejection-sample f until invertible, derive g and h.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{LunaSignError, Result};
use crate::euclid::invert_mod_cyclotomic;
use crate::params::{RingParams, MAX_KEYGEN_ATTEMPTS};
use crate::poly::Poly;
use crate::sampling::{sample_small, sample_unit_candidate};

/// The key triple (f, g, h): private f and g, public h = g · f⁻¹ in
/// Z_q[x]/(x^n + 1). Immutable once generated; the secret halves are wiped
/// on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    f: Poly,
    g: Poly,
    #[zeroize(skip)]
    h: Poly,
}

impl SigningKey {
    /// Generate a fresh key: sample f uniformly in [1, q-1] per coefficient
    /// until it is invertible modulo (x^n + 1, q), then sample a small g and
    /// set h = g · f⁻¹. Invertibility failures resample; anything else is a
    /// misconfiguration and aborts. Fails with `KeyGenerationFailed` once the
    /// retry cap is exhausted.
    pub fn generate<R: RngCore + CryptoRng>(params: &RingParams, rng: &mut R) -> Result<Self> {
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let f = sample_unit_candidate(rng, params);
            let f_inv = match invert_mod_cyclotomic(&f, params) {
                Ok(inv) => inv,
                Err(LunaSignError::NotInvertible) => continue,
                Err(e) => return Err(e),
            };
            let g = Poly::from_coeffs(&sample_small(rng, params), params.q);
            let h = g.mul_negacyclic(&f_inv, params);
            return Ok(Self { f, g, h });
        }
        Err(LunaSignError::KeyGenerationFailed {
            attempts: MAX_KEYGEN_ATTEMPTS,
        })
    }

    /// The public polynomial h.
    pub fn public_key(&self) -> &Poly {
        &self.h
    }

    #[cfg(test)]
    pub(crate) fn secret_parts(&self) -> (&Poly, &Poly) {
        (&self.f, &self.g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn public_key_matches_secret_trapdoor() {
        let params = RingParams::standard();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let key = SigningKey::generate(&params, &mut rng).unwrap();
        let (f, g) = key.secret_parts();
        let f_inv = invert_mod_cyclotomic(f, &params).unwrap();
        assert_eq!(&g.mul_negacyclic(&f_inv, &params), key.public_key());
    }

    #[test]
    fn generated_key_is_canonical() {
        let params = RingParams::standard();
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let key = SigningKey::generate(&params, &mut rng).unwrap();
        let (f, g) = key.secret_parts();
        for p in [f, g, key.public_key()] {
            assert!(p.degree() < params.n);
            assert!(p.coeffs().iter().all(|&c| (0..params.q).contains(&c)));
        }
        assert!(g
            .coeffs()
            .iter()
            .all(|&c| c <= params.small_bound || c >= params.q - params.small_bound));
    }

    #[test]
    fn distinct_seeds_give_distinct_keys() {
        let params = RingParams::standard();
        let a = SigningKey::generate(&params, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        let b = SigningKey::generate(&params, &mut ChaCha20Rng::seed_from_u64(2)).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }
}
