use crate::error::{LunaSignError, Result};

/// Retry cap for the key-generation rejection loop. For a prime-like q the
/// loop exits within a few iterations; past the cap we fail loudly instead of
/// spinning on a pathological (q, n) choice.
pub const MAX_KEYGEN_ATTEMPTS: u32 = 10_000;

/// Ring modulus pair (q, n) for Z_q[x]/(x^n + 1), plus the coefficient bound
/// used for secret/noise polynomials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingParams {
    /// Coefficient modulus q. Must be an odd prime for every nonzero residue
    /// to be invertible.
    pub q: i64,
    /// Degree bound n (power of two). Reduction rule: x^n = -1.
    pub n: usize,
    /// Secret/noise coefficients are drawn from [-small_bound, small_bound].
    pub small_bound: i64,
}

impl RingParams {
    pub fn new(q: i64, n: usize, small_bound: i64) -> Result<Self> {
        if q <= 2 || q % 2 == 0 {
            return Err(LunaSignError::InvalidModulus { modulus: q });
        }
        if !n.is_power_of_two() {
            return Err(LunaSignError::InvalidDimension {
                expected: n.next_power_of_two(),
                got: n,
            });
        }
        if small_bound < 1 || small_bound >= q / 2 {
            return Err(LunaSignError::InvalidParameters(format!(
                "small_bound {small_bound} out of range for modulus {q}"
            )));
        }
        Ok(Self { q, n, small_bound })
    }

    /// Reference instance: q = 12·1024 + 1 = 12289, n = 64, ±4 secrets.
    pub fn standard() -> Self {
        Self {
            q: 12289,
            n: 64,
            small_bound: 4,
        }
    }
}
