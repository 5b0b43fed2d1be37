//! Extended Euclidean machinery: integer inverses mod q, schoolbook long
//! division and extended gcd over Z_q[x], and inversion modulo (x^n + 1, q).
//!
//! The integer and division errors here indicate a misconfigured modulus and
//! are fatal; `NotInvertible` is the one recoverable condition, driving the
//! key-generation rejection loop.

use crate::error::{LunaSignError, Result};
use crate::params::RingParams;
use crate::poly::Poly;

/// Inverse of `a` modulo `m` by the extended Euclidean algorithm.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    let a = a.rem_euclid(m);
    if a == 0 {
        return Err(LunaSignError::NoIntegerInverse { value: a, modulus: m });
    }
    let (mut r0, mut r1) = (m, a);
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let k = r0 / r1;
        (r0, r1) = (r1, r0 - k * r1);
        (t0, t1) = (t1, t0 - k * t1);
    }
    if r0 != 1 {
        return Err(LunaSignError::NoIntegerInverse { value: a, modulus: m });
    }
    Ok(t0.rem_euclid(m))
}

/// Schoolbook long division in Z_q[x]: returns (quotient, remainder) with
/// deg(remainder) < deg(divisor). The divisor's leading coefficient must be
/// invertible mod q, which holds for any nonzero divisor when q is prime.
pub fn poly_divmod(a: &Poly, b: &Poly, q: i64) -> Result<(Poly, Poly)> {
    if b.is_zero() {
        return Err(LunaSignError::DivisionByZeroPolynomial);
    }
    let deg_b = b.degree();
    if a.degree() < deg_b || a.is_zero() {
        return Ok((Poly::zero(), a.clone()));
    }
    let inv_lc = mod_inverse(b.coeff(deg_b), q)?;

    let mut quotient = vec![0i64; a.degree() - deg_b + 1];
    let mut rem: Vec<i64> = a.coeffs().to_vec();
    while rem.len() - 1 >= deg_b && !(rem.len() == 1 && rem[0] == 0) {
        let deg_r = rem.len() - 1;
        let lead = (rem[deg_r] * inv_lc).rem_euclid(q);
        let pos = deg_r - deg_b;
        quotient[pos] = lead;
        for i in 0..=deg_b {
            rem[pos + i] = (rem[pos + i] - lead * b.coeff(i)).rem_euclid(q);
        }
        while rem.len() > 1 && *rem.last().unwrap() == 0 {
            rem.pop();
        }
    }
    Ok((Poly::from_coeffs(&quotient, q), Poly::from_coeffs(&rem, q)))
}

/// Extended Euclidean algorithm in Z_q[x]: returns (g, s, t) with
/// s·a + t·b = g. The remainder degree strictly decreases each round, so the
/// loop terminates once the remainder reaches zero.
pub fn poly_gcd_ext(a: &Poly, b: &Poly, q: i64) -> Result<(Poly, Poly, Poly)> {
    let (mut r0, mut r1) = (a.clone(), b.clone());
    let (mut s0, mut s1) = (Poly::one(), Poly::zero());
    let (mut t0, mut t1) = (Poly::zero(), Poly::one());
    while !r1.is_zero() {
        let (quot, r2) = poly_divmod(&r0, &r1, q)?;
        let s2 = s0.sub(&quot.mul_plain(&s1, q), q);
        let t2 = t0.sub(&quot.mul_plain(&t1, q), q);
        (r0, r1) = (r1, r2);
        (s0, s1) = (s1, s2);
        (t0, t1) = (t1, t2);
    }
    Ok((r0, s0, t0))
}

/// Inverse of `f` in Z_q[x]/(x^n + 1), via gcd(f, x^n + 1). Invertible
/// exactly when the gcd is a nonzero constant c; the inverse is then s·c⁻¹
/// reduced negacyclically. A gcd of positive degree means f shares a factor
/// with x^n + 1 and has no inverse.
pub fn invert_mod_cyclotomic(f: &Poly, params: &RingParams) -> Result<Poly> {
    let mut m = vec![0i64; params.n + 1];
    m[0] = 1;
    m[params.n] = 1;
    let modulus = Poly::from_coeffs(&m, params.q);

    let (g, s, _t) = poly_gcd_ext(f, &modulus, params.q)?;
    if g.degree() > 0 || g.is_zero() {
        return Err(LunaSignError::NotInvertible);
    }
    let inv_c = mod_inverse(g.coeff(0), params.q)?;
    let scaled: Vec<i64> = s.coeffs().iter().map(|&c| c * inv_c).collect();
    Ok(Poly::from_coeffs(&scaled, params.q).reduce_negacyclic(params))
}
