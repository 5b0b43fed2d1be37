//! The sign/verify boundary.
//!
//! Sign: s1 = H(m) - s2·h with a fresh small s2; the wire form is
//! hex(s1) ‖ hex(s2). Verify recomputes H(m) and accepts iff s1 + s2·h
//! equals it, which inverts the subtraction exactly, so honest signatures
//! always verify. The algebra is publicly linear in H(m) and s2 on purpose:
//! collecting signatures of related messages leaks the trapdoor, and that
//! weakness is the service's puzzle.

use rand::{CryptoRng, RngCore};

use crate::encoding::{hex_to_poly, poly_to_hex, HEX_PER_COEFF};
use crate::error::{LunaSignError, Result};
use crate::hashing::hash_to_poly;
use crate::keygen::SigningKey;
use crate::params::RingParams;
use crate::poly::Poly;
use crate::sampling::sample_small;

/// A decoded signature pair (s1, s2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub s1: Poly,
    pub s2: Poly,
}

impl Signature {
    /// Wire form: 4 hex digits per coefficient, s1 then s2, 8·n digits total.
    pub fn to_hex(&self, params: &RingParams) -> String {
        let mut out = poly_to_hex(&self.s1, params.n);
        out.push_str(&poly_to_hex(&self.s2, params.n));
        out
    }

    /// Parse the wire form, splitting at the midpoint. Anything that is not
    /// exactly 8·n valid hex digits is `MalformedSignature`.
    pub fn from_hex(hs: &str, params: &RingParams) -> Result<Self> {
        let expected = 2 * params.n * HEX_PER_COEFF;
        if hs.len() != expected {
            return Err(LunaSignError::MalformedSignature(format!(
                "expected {expected} hex digits, got {}",
                hs.len()
            )));
        }
        let (first, second) = hs.split_at(hs.len() / 2);
        Ok(Self {
            s1: hex_to_poly(first, params.q)?,
            s2: hex_to_poly(second, params.q)?,
        })
    }
}

/// Ring parameters plus an immutable key triple: the plain function-call
/// boundary the service layer talks to. Construct once at startup and share;
/// nothing here mutates after construction.
#[derive(Clone, Debug)]
pub struct SigningScheme {
    params: RingParams,
    key: SigningKey,
}

impl SigningScheme {
    pub fn new(params: RingParams, key: SigningKey) -> Self {
        Self { params, key }
    }

    /// Generate a fresh key for `params` and wrap it.
    pub fn generate<R: RngCore + CryptoRng>(params: RingParams, rng: &mut R) -> Result<Self> {
        let key = SigningKey::generate(&params, rng)?;
        Ok(Self::new(params, key))
    }

    pub fn params(&self) -> &RingParams {
        &self.params
    }

    pub fn public_key(&self) -> &Poly {
        self.key.public_key()
    }

    /// Sign a message. Each call draws a fresh s2; re-signing the same
    /// message yields a different signature that still verifies.
    pub fn sign<R: RngCore + CryptoRng>(&self, message: &[u8], rng: &mut R) -> String {
        let m = hash_to_poly(message, &self.params);
        let s2 = Poly::from_coeffs(&sample_small(rng, &self.params), self.params.q);
        let s2h = s2.mul_negacyclic(self.key.public_key(), &self.params);
        let s1 = m.sub(&s2h, self.params.q);
        Signature { s1, s2 }.to_hex(&self.params)
    }

    /// Verify a hex signature against a message. Malformed encodings are a
    /// verification failure, never an error or panic.
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let sig = match Signature::from_hex(signature, &self.params) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        let m = hash_to_poly(message, &self.params);
        let s2h = sig.s2.mul_negacyclic(self.key.public_key(), &self.params);
        sig.s1.add(&s2h, self.params.q) == m
    }
}
