//! Polynomials over Z_q and the negacyclic ring operations.
//!
//! A `Poly` stores canonical residues in [0, q) with trailing zero
//! coefficients trimmed (a single constant placeholder is kept for zero).
//! Plain operations work in Z_q[x]; `mul_negacyclic` additionally folds with
//! x^n = -1, which is the only multiplication sign/verify use.

use zeroize::Zeroize;

use crate::params::RingParams;

#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: Vec<i64>,
}

impl Poly {
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Build from arbitrary signed coefficients, reducing each into [0, q).
    pub fn from_coeffs(coeffs: &[i64], q: i64) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        let mut c: Vec<i64> = coeffs.iter().map(|&x| x.rem_euclid(q)).collect();
        trim(&mut c);
        Self { coeffs: c }
    }

    /// Coefficient of the x^i term; zero beyond the stored degree.
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == 0
    }

    /// Element-wise sum mod q, shorter operand zero-padded.
    pub fn add(&self, other: &Self, q: i64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut c: Vec<i64> = (0..len)
            .map(|i| (self.coeff(i) + other.coeff(i)).rem_euclid(q))
            .collect();
        trim(&mut c);
        Self { coeffs: c }
    }

    /// Element-wise difference mod q, shorter operand zero-padded.
    pub fn sub(&self, other: &Self, q: i64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut c: Vec<i64> = (0..len)
            .map(|i| (self.coeff(i) - other.coeff(i)).rem_euclid(q))
            .collect();
        trim(&mut c);
        Self { coeffs: c }
    }

    /// Full convolution of length |a| + |b| - 1 in Z_q[x], no x^n folding.
    pub fn mul_plain(&self, other: &Self, q: i64) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut c = vec![0i64; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &ai) in self.coeffs.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in other.coeffs.iter().enumerate() {
                c[i + j] = (c[i + j] + ai * bj).rem_euclid(q);
            }
        }
        trim(&mut c);
        Self { coeffs: c }
    }

    /// Fold degrees >= n back with a sign flip: x^n = -1, so the coefficient
    /// of x^(n+k) is subtracted from the coefficient of x^k.
    pub fn reduce_negacyclic(&self, params: &RingParams) -> Self {
        let mut c = vec![0i64; params.n];
        for (idx, &coeff) in self.coeffs.iter().enumerate() {
            let pos = idx % params.n;
            if (idx / params.n) % 2 == 0 {
                c[pos] = (c[pos] + coeff).rem_euclid(params.q);
            } else {
                c[pos] = (c[pos] - coeff).rem_euclid(params.q);
            }
        }
        trim(&mut c);
        Self { coeffs: c }
    }

    /// Ring multiplication in Z_q[x]/(x^n + 1).
    pub fn mul_negacyclic(&self, other: &Self, params: &RingParams) -> Self {
        self.mul_plain(other, params.q).reduce_negacyclic(params)
    }
}

fn trim(c: &mut Vec<i64>) {
    while c.len() > 1 && *c.last().unwrap() == 0 {
        c.pop();
    }
}
