//! Small-coefficient and uniform polynomial sampling.
//!
//! All samplers take the RNG as a parameter so tests can run seeded ChaCha20
//! while production callers pass a cryptographic source.

use rand::{CryptoRng, Rng, RngCore};

use crate::params::RingParams;
use crate::poly::Poly;

/// Bounds at or above this are shaped by a Gaussian envelope; below it there
/// is too little range to shape and the distribution is bounded-uniform.
const GAUSSIAN_CUTOFF: i64 = 8;

/// Sample n signed coefficients in [-bound, bound]. These stay signed until
/// they enter ring arithmetic, where they reduce into [0, q).
pub fn sample_small<R: RngCore + CryptoRng>(rng: &mut R, params: &RingParams) -> Vec<i64> {
    (0..params.n)
        .map(|_| sample_coefficient(rng, params.small_bound))
        .collect()
}

fn sample_coefficient<R: RngCore + CryptoRng>(rng: &mut R, bound: i64) -> i64 {
    if bound < GAUSSIAN_CUTOFF {
        return rng.gen_range(-bound..=bound);
    }
    // Rejection sampling against a centered Gaussian with sigma = bound / 3,
    // so nearly all of the mass sits inside the bound.
    let sigma = bound as f64 / 3.0;
    loop {
        let x = rng.gen_range(-bound..=bound);
        let envelope = (-((x * x) as f64) / (2.0 * sigma * sigma)).exp();
        if rng.gen::<f64>() <= envelope {
            return x;
        }
    }
}

/// Uniform ring element with coefficients in [1, q-1], the candidate
/// distribution for the invertible key component f.
pub fn sample_unit_candidate<R: RngCore + CryptoRng>(rng: &mut R, params: &RingParams) -> Poly {
    let coeffs: Vec<i64> = (0..params.n).map(|_| rng.gen_range(1..params.q)).collect();
    Poly::from_coeffs(&coeffs, params.q)
}
