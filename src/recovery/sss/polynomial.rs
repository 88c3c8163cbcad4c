//! Polynomial evaluation over a prime field.

use num_bigint::BigUint;
use num_traits::Zero;

use super::field::PrimeField;

/// Evaluates a polynomial at `x`, modulo the field prime.
///
/// The polynomial is provided as a slice of coefficients in increasing
/// degree order:
///
/// ```text
/// f(x) = coeffs[0] + coeffs[1]·x + coeffs[2]·x² + ...   (mod p)
/// ```
///
/// Each power `x^i mod p` is computed with fast modular exponentiation, so
/// intermediate values never exceed `p²`. An empty slice is the zero
/// polynomial.
pub fn eval_polynomial(coeffs: &[BigUint], x: &BigUint, field: &PrimeField) -> BigUint {
    let p = field.modulus();

    coeffs
        .iter()
        .enumerate()
        .fold(BigUint::zero(), |acc, (exponent, coeff)| {
            let power = x.modpow(&BigUint::from(exponent), p);

            (acc + coeff * power) % p
        })
}
