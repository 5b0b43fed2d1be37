//! Fixed-width hex wire codec: 4 hex digits per coefficient, no delimiters.

use crate::error::{LunaSignError, Result};
use crate::poly::Poly;

/// Hex digits per encoded coefficient (one zero-padded 16-bit word).
pub const HEX_PER_COEFF: usize = 4;

/// Encode the low n coefficients as lowercase hex, exactly 4 digits each.
/// Coefficients above the stored degree encode as `0000`.
pub fn poly_to_hex(p: &Poly, n: usize) -> String {
    let bytes: Vec<u8> = (0..n)
        .flat_map(|i| (p.coeff(i) as u16).to_be_bytes())
        .collect();
    hex::encode(bytes)
}

/// Decode a run of 4-hex-digit coefficients back into a polynomial,
/// canonicalizing each word into [0, q). Upper and lower case both accepted.
pub fn hex_to_poly(hs: &str, q: i64) -> Result<Poly> {
    if hs.is_empty() || hs.len() % HEX_PER_COEFF != 0 {
        return Err(LunaSignError::MalformedSignature(format!(
            "hex length {} is not a positive multiple of {HEX_PER_COEFF}",
            hs.len()
        )));
    }
    let bytes = hex::decode(hs)
        .map_err(|e| LunaSignError::MalformedSignature(format!("invalid hex: {e}")))?;
    let coeffs: Vec<i64> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]) as i64)
        .collect();
    Ok(Poly::from_coeffs(&coeffs, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::params::RingParams;

    #[test]
    fn encoding_is_fixed_width_lowercase() {
        let params = RingParams::standard();
        let p = Poly::from_coeffs(&[1, 12288, 255], params.q);
        let hs = poly_to_hex(&p, params.n);
        assert_eq!(hs.len(), params.n * HEX_PER_COEFF);
        assert!(hs.starts_with("00013000"));
        assert_eq!(hs, hs.to_lowercase());
    }

    #[test]
    fn uppercase_input_accepted() {
        let q = RingParams::standard().q;
        let p = hex_to_poly("00FF0001", q).unwrap();
        assert_eq!(p.coeffs(), &[255, 1]);
    }

    #[test]
    fn rejects_bad_lengths_and_alphabet() {
        let q = RingParams::standard().q;
        for bad in ["", "abc", "00123", "00zz0011"] {
            assert!(matches!(
                hex_to_poly(bad, q),
                Err(LunaSignError::MalformedSignature(_))
            ));
        }
    }

    #[test]
    fn decoded_words_reduce_mod_q() {
        let q = RingParams::standard().q;
        // 0xffff = 65535 = 5 * 12289 + 4090
        let p = hex_to_poly("ffff", q).unwrap();
        assert_eq!(p.coeffs(), &[4090]);
    }

    proptest! {
        #[test]
        fn hex_round_trip(coeffs in prop::collection::vec(0..12289i64, 1..=64)) {
            let params = RingParams::standard();
            let p = Poly::from_coeffs(&coeffs, params.q);
            let decoded = hex_to_poly(&poly_to_hex(&p, params.n), params.q).unwrap();
            prop_assert_eq!(decoded, p);
        }
    }
}
