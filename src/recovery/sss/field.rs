//! Prime field arithmetic for Shamir Secret Sharing.
//!
//! This module implements the arithmetic of GF(p), the integers modulo a
//! prime `p`, which is the mathematical foundation of the secret sharing
//! scheme in [`super::core`].
//!
//! Only the modular inverse is provided as a dedicated operation. Addition,
//! multiplication and negation are plain modular arithmetic on
//! [`BigInt`]/[`BigUint`] values, composed inline by callers and normalised
//! with [`PrimeField::reduce`].
//!
//! ## Design principles
//!
//! - The modulus is an explicit value ([`PrimeField`]), never a global
//! - Arbitrary-precision integers, so 256-bit products never overflow
//! - Every result is normalised into `[0, p - 1]`
//!
//! This module does **not** validate Shamir-specific parameters such as
//! thresholds or share identifiers. Those checks live in [`super::core`].

use std::fmt::{Display, Formatter};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::core::SharingError;

/// Base-field prime of the secp256k1 curve, big-endian.
///
/// ```text
/// p = 2²⁵⁶ − 2³² − 977
///   = 0xFFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
/// ```
pub const SECP256K1_PRIME: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// Miller-Rabin witnesses. Testing against all of them is deterministic for
/// every modulus below 3.3·10²⁴.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// A prime field GF(p).
///
/// This is the only configuration the sharing scheme needs. The same field
/// must be used to generate and to reconstruct a set of shares.
///
/// [`PrimeField::default`] returns the 256-bit secp256k1 base field, which
/// is large enough for any 255-bit secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,

    /// Signed copy of `modulus`, used by `reduce`.
    signed: BigInt,
}

impl PrimeField {
    /// Creates a field from a caller-supplied modulus.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError::InvalidPrime`] if `modulus` is not prime.
    ///
    /// # Notes
    ///
    /// Primality is checked by trial division followed by a Miller-Rabin
    /// test over the first twelve primes. The test is exact below
    /// 3.3·10²⁴; beyond that a composite passing every witness is
    /// astronomically unlikely but not excluded.
    pub fn new(modulus: BigUint) -> Result<Self, SharingError> {
        if !is_probable_prime(&modulus) {
            return Err(SharingError::InvalidPrime { modulus });
        }

        Ok(Self::new_unchecked(modulus))
    }

    /// Parses a hexadecimal modulus, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError::MalformedModulus`] if the input is not
    /// hexadecimal, and [`SharingError::InvalidPrime`] if it is not prime.
    pub fn from_hex(input: &str) -> Result<Self, SharingError> {
        let digits = input
            .trim()
            .trim_start_matches("0x")
            .trim_start_matches("0X")
            .replace('_', "");

        let modulus = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| {
            SharingError::MalformedModulus {
                input: input.to_owned(),
            }
        })?;

        Self::new(modulus)
    }

    /// The secp256k1 base field.
    pub fn secp256k1() -> Self {
        Self::new_unchecked(BigUint::from_bytes_be(&SECP256K1_PRIME))
    }

    fn new_unchecked(modulus: BigUint) -> Self {
        let signed = BigInt::from(modulus.clone());

        Self { modulus, signed }
    }

    /// The field prime `p`.
    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the field prime.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Returns `true` if `value` is a canonical field element (`value < p`).
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        *value < self.modulus
    }

    /// Reduces a signed integer into `[0, p - 1]` using floor modulo, so
    /// negative inputs wrap around instead of keeping their sign.
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        // mod_floor by a positive modulus is never negative.
        value.mod_floor(&self.signed).magnitude().clone()
    }

    /// Computes the multiplicative inverse of `a` in this field.
    ///
    /// See [`mod_inverse`].
    pub fn inverse(&self, a: &BigInt) -> Result<BigUint, SharingError> {
        mod_inverse(a, &self.modulus)
    }
}

impl Default for PrimeField {
    /// The secp256k1 base field.
    fn default() -> Self {
        Self::secp256k1()
    }
}

impl Display for PrimeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GF(0x{:x})", self.modulus)
    }
}

/// Computes `x` in `[0, p - 1]` such that `a·x ≡ 1 (mod p)`.
///
/// `a` may be negative or larger than `p`; it is reduced with a floor
/// modulo first.
///
/// # Errors
///
/// Returns [`SharingError::NotInvertible`] if `a ≡ 0 (mod p)`. For a
/// composite modulus this is also returned whenever `gcd(a, p) ≠ 1`.
///
/// # Implementation details
///
/// Extended Euclidean Algorithm, tracking only the Bézout coefficient of
/// `a`:
///
/// ```text
/// (low, lm)  = (a mod p, 1)
/// (high, hm) = (p, 0)
/// while low > 1:
///     r = high / low
///     (high, hm, low, lm) = (low, lm, high − r·low, hm − r·lm)
/// ```
///
/// On exit `low` is the gcd and `lm` the (possibly negative) inverse.
pub fn mod_inverse(a: &BigInt, p: &BigUint) -> Result<BigUint, SharingError> {
    let modulus = BigInt::from(p.clone());

    if modulus <= BigInt::one() {
        return Err(SharingError::NotInvertible { value: a.clone() });
    }

    let mut low = a.mod_floor(&modulus);
    let mut high = modulus.clone();
    let mut lm = BigInt::one();
    let mut hm = BigInt::zero();

    while low > BigInt::one() {
        // Both operands are positive, so truncating division is floor division.
        let ratio = &high / &low;

        let next = &high - &ratio * &low;
        let next_m = &hm - &ratio * &lm;

        high = std::mem::replace(&mut low, next);
        hm = std::mem::replace(&mut lm, next_m);
    }

    if low.is_zero() {
        return Err(SharingError::NotInvertible { value: a.clone() });
    }

    Ok(lm.mod_floor(&modulus).magnitude().clone())
}

/// Primality test: trial division by [`WITNESSES`], then Miller-Rabin with
/// the same values as bases.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    if *n < two {
        return false;
    }

    for &w in &WITNESSES {
        let w = BigUint::from(w);

        if *n == w {
            return true;
        }

        if (n % &w).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^r · d with d odd
    let n_minus_one = n - &one;
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> r;

    'witness: for &w in &WITNESSES {
        let mut x = BigUint::from(w).modpow(&d, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = &x * &x % n;

            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> PrimeField {
        PrimeField::new(BigUint::from(97u32)).unwrap()
    }

    #[test]
    fn inverse_of_small_values() {
        let p = BigUint::from(17u32);

        // 3 · 6 = 18 ≡ 1 (mod 17)
        assert_eq!(mod_inverse(&BigInt::from(3), &p).unwrap(), BigUint::from(6u32));
        // 16 ≡ -1 is its own inverse
        assert_eq!(mod_inverse(&BigInt::from(16), &p).unwrap(), BigUint::from(16u32));
        assert_eq!(mod_inverse(&BigInt::from(1), &p).unwrap(), BigUint::one());
    }

    #[test]
    fn inverse_reduces_negative_and_large_inputs() {
        let p = BigUint::from(17u32);

        // -3 ≡ 14, and 14 · 11 = 154 = 9·17 + 1
        assert_eq!(mod_inverse(&BigInt::from(-3), &p).unwrap(), BigUint::from(11u32));
        // 20 ≡ 3
        assert_eq!(mod_inverse(&BigInt::from(20), &p).unwrap(), BigUint::from(6u32));
    }

    #[test]
    fn inverse_of_zero_fails() {
        let p = BigUint::from(17u32);

        for value in [0, 17, -34] {
            let err = mod_inverse(&BigInt::from(value), &p).unwrap_err();
            assert_eq!(
                err,
                SharingError::NotInvertible {
                    value: BigInt::from(value)
                }
            );
        }
    }

    #[test]
    fn inverse_fails_for_shared_factor_of_composite_modulus() {
        let p = BigUint::from(8u32);

        assert!(mod_inverse(&BigInt::from(4), &p).is_err());
        assert_eq!(mod_inverse(&BigInt::from(3), &p).unwrap(), BigUint::from(3u32));
    }

    #[test]
    fn inverse_is_an_involution() {
        let field = small_field();

        for a in 1..97 {
            let a = BigInt::from(a);
            let inv = field.inverse(&a).unwrap();
            let back = field.inverse(&BigInt::from(inv.clone())).unwrap();

            assert_eq!(back, field.reduce(&a));
            assert_eq!((BigInt::from(inv) * &a) % 97, BigInt::one());
        }
    }

    #[test]
    fn inverse_in_secp256k1_field() {
        let field = PrimeField::secp256k1();
        let a = BigInt::from(12345678901234567890u64);

        let inv = field.inverse(&a).unwrap();
        let product = field.reduce(&(BigInt::from(inv) * a));

        assert_eq!(product, BigUint::one());
    }

    #[test]
    fn reduce_wraps_negative_values() {
        let field = small_field();

        assert_eq!(field.reduce(&BigInt::from(-1)), BigUint::from(96u32));
        assert_eq!(field.reduce(&BigInt::from(-97)), BigUint::zero());
        assert_eq!(field.reduce(&BigInt::from(200)), BigUint::from(6u32));
    }

    #[test]
    fn default_is_secp256k1() {
        let field = PrimeField::default();

        assert_eq!(field.bits(), 256);
        assert_eq!(
            *field.modulus(),
            BigUint::parse_bytes(
                b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
                16
            )
            .unwrap()
        );
        assert!(is_probable_prime(field.modulus()));
    }

    #[test]
    fn primality() {
        for p in [2u32, 3, 5, 17, 37, 41, 97, 7919, 104_729, 2_147_483_647] {
            assert!(is_probable_prime(&BigUint::from(p)), "{p} is prime");
        }

        // 3215031751 is a strong pseudoprime to bases 2, 3, 5 and 7.
        for n in [0u64, 1, 4, 15, 91, 561, 7917, 3_215_031_751] {
            assert!(!is_probable_prime(&BigUint::from(n)), "{n} is not prime");
        }
    }

    #[test]
    fn new_rejects_composites() {
        let err = PrimeField::new(BigUint::from(15u32)).unwrap_err();

        assert_eq!(
            err,
            SharingError::InvalidPrime {
                modulus: BigUint::from(15u32)
            }
        );
        assert!(PrimeField::new(BigUint::one()).is_err());
    }

    #[test]
    fn from_hex() {
        assert_eq!(PrimeField::from_hex("0x11").unwrap().modulus(), &BigUint::from(17u32));
        assert_eq!(
            PrimeField::from_hex(
                "0xFFFFFFFF_FFFFFFFF_FFFFFFFF_FFFFFFFF_FFFFFFFF_FFFFFFFF_FFFFFFFE_FFFFFC2F"
            )
            .unwrap(),
            PrimeField::secp256k1()
        );

        assert!(matches!(
            PrimeField::from_hex("0xZZ"),
            Err(SharingError::MalformedModulus { .. })
        ));
        assert!(matches!(
            PrimeField::from_hex("0x10"),
            Err(SharingError::InvalidPrime { .. })
        ));
    }
}
