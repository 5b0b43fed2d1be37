//! Deterministic message-to-polynomial derivation.

use sha3::{Digest, Sha3_256};

use crate::params::RingParams;
use crate::poly::Poly;

/// Expand a message into exactly n coefficients mod q.
///
/// The message is digested once, then counter-indexed digests of that inner
/// digest are consumed as little-endian 16-bit words until n coefficients are
/// produced. Fully reproducible from the message bytes; this is the binding
/// between what was signed and what is verified.
pub fn hash_to_poly(message: &[u8], params: &RingParams) -> Poly {
    let inner = Sha3_256::digest(message);

    let mut out = Vec::with_capacity(params.n);
    let mut ctr: u32 = 0;
    while out.len() < params.n {
        let mut hasher = Sha3_256::new();
        hasher.update(&inner);
        hasher.update(ctr.to_le_bytes());
        let block = hasher.finalize();
        for chunk in block.chunks_exact(2) {
            if out.len() >= params.n {
                break;
            }
            let word = u16::from_le_bytes([chunk[0], chunk[1]]) as i64;
            out.push(word.rem_euclid(params.q));
        }
        ctr += 1;
    }
    Poly::from_coeffs(&out, params.q)
}
