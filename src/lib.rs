//! lunasign: toy NTRU-style lattice signatures over Z_q[x]/(x^n + 1).
//!
//! Negacyclic polynomial ring arithmetic, extended-Euclidean inversion, a
//! hash-to-polynomial derivation, small-coefficient sampling, and the weak
//! sign/verify protocol built on them (s1 = H(m) - s2·h, accepted when
//! s1 + s2·h = H(m)). The scheme is deliberately breakable — signatures are
//! publicly linear in the message digest and the small noise — because it
//! exists to be attacked in a CTF setting. Do not use it to protect anything.

pub mod encoding;
pub mod error;
pub mod euclid;
pub mod hashing;
pub mod keygen;
pub mod params;
pub mod poly;
pub mod sampling;
pub mod sign;

pub use error::{LunaSignError, Result};
pub use keygen::SigningKey;
pub use params::RingParams;
pub use poly::Poly;
pub use sign::{Signature, SigningScheme};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn reference_instance_signs_and_verifies() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x1f5a);
        let scheme = SigningScheme::generate(RingParams::standard(), &mut rng).unwrap();

        let sig = scheme.sign(b"test", &mut rng);
        assert_eq!(sig.len(), 512); // 64 coefficients x 2 halves x 4 hex digits
        assert!(scheme.verify(b"test", &sig));
    }

    #[test]
    fn flipped_hex_digit_breaks_verification() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xf11d);
        let scheme = SigningScheme::generate(RingParams::standard(), &mut rng).unwrap();
        let sig = scheme.sign(b"test", &mut rng);

        // Any single-digit change shifts one coefficient by d·16^i, which is
        // never a multiple of q = 12289, so the altered half no longer sums
        // to the digest.
        let mut chars: Vec<char> = sig.chars().collect();
        chars[0] = if chars[0] == '0' { '1' } else { '0' };
        let tampered: String = chars.into_iter().collect();
        assert!(!scheme.verify(b"test", &tampered));
    }

    #[test]
    fn malformed_signatures_verify_false_without_panicking() {
        let mut rng = ChaCha20Rng::seed_from_u64(0xbad);
        let scheme = SigningScheme::generate(RingParams::standard(), &mut rng).unwrap();
        let good = scheme.sign(b"test", &mut rng);

        let odd_length = &good[..good.len() - 1];
        let mut non_hex = good.clone();
        non_hex.replace_range(0..1, "g");
        let truncated = &good[..8];

        for bad in [odd_length, non_hex.as_str(), truncated, ""] {
            assert!(!scheme.verify(b"test", bad));
        }
        // The honest signature still verifies after all the rejections.
        assert!(scheme.verify(b"test", &good));
    }

    #[test]
    fn signatures_do_not_transfer_between_keys() {
        let params = RingParams::standard();
        let mut rng = ChaCha20Rng::seed_from_u64(41);
        let alice = SigningScheme::generate(params.clone(), &mut rng).unwrap();
        let bob = SigningScheme::generate(params, &mut rng).unwrap();

        let sig = alice.sign(b"inter-key", &mut rng);
        assert!(alice.verify(b"inter-key", &sig));
        assert!(!bob.verify(b"inter-key", &sig));
    }
}
