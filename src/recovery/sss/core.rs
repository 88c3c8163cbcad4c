//! Shamir Secret Sharing (SSS) core implementation.
//!
//! This module provides the public API for **Shamir Secret Sharing** over a
//! prime field GF(p).
//!
//! A secret `s < p` is hidden as the constant term of a random polynomial
//! of degree `threshold - 1`; every share is one evaluation of that
//! polynomial at a non-zero point. Then:
//!
//! - Any subset of at least `threshold` shares reconstructs the secret.
//! - Any subset of fewer than `threshold` shares reveals no information
//!   about the secret.
//!
//! ## Provided operations
//!
//! - [`generate_shares`]
//!   Split a secret into `share_count` shares in an explicit field, using
//!   an explicit randomness source.
//!
//! - [`reconstruct_secret`]
//!   Recover the secret from a set of shares by Lagrange interpolation at
//!   zero.
//!
//! - [`split`] / [`combine`]
//!   The same two operations over the default secp256k1 field, with an
//!   OS-seeded [`Csprng`].
//!
//! ## Cryptographic properties
//!
//! - Coefficients are drawn uniformly from `[0, p - 1]` by a generator
//!   bounded by [`CryptoRng`]. Secrecy holds only if that generator is
//!   unpredictable.
//! - The polynomial is dropped before [`generate_shares`] returns.
//!
//! ## Scope and limitations
//!
//! Reconstruction does not know the original threshold. Given fewer than
//! `threshold` shares it still returns a field element, which is unrelated
//! to the secret. Corrupted shares are not detected either.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, instrument};

use super::field::PrimeField;
use super::polynomial::eval_polynomial;
use crate::rng::Csprng;

/// A single Shamir Secret Sharing share.
///
/// A share is a point `(x, y)` on the secret polynomial. It is only
/// meaningful together with other shares of the same secret, generated in
/// the same field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    /// Share identifier (x-coordinate).
    ///
    /// Non-zero and unique among all shares of the same secret.
    pub x: u64,

    /// Polynomial evaluation `f(x) mod p`.
    pub y: BigUint,
}

impl Share {
    pub fn new(x: u64, y: BigUint) -> Self {
        Self { x, y }
    }
}

/// Errors that may occur during Shamir Secret Sharing operations.
///
/// Secret values never appear in an error; only their size does.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SharingError {
    /// The threshold is zero or greater than the share count.
    #[error("invalid threshold {threshold} for {share_count} shares, expected 1 <= k <= n")]
    InvalidThreshold { threshold: usize, share_count: usize },

    /// Reconstruction was called without any share.
    #[error("cannot reconstruct a secret from an empty share set")]
    EmptyShareSet,

    /// Attempted to invert a value congruent to zero.
    #[error("{value} has no inverse modulo the field prime")]
    NotInvertible { value: BigInt },

    /// Two shares have the same identifier modulo the field prime, so the
    /// interpolation has no unique solution.
    #[error("share set is degenerate: identifier {x} collides with another share")]
    InvalidShareSet { x: u64 },

    /// The secret is not a canonical field element.
    #[error("secret of {secret_bits} bits does not fit below a {modulus_bits}-bit field prime")]
    SecretOutOfRange { secret_bits: u64, modulus_bits: u64 },

    /// More shares were requested than the field has non-zero elements.
    #[error("cannot issue {share_count} distinct non-zero identifiers in this field")]
    TooManyShares { share_count: usize },

    /// A share value is not a canonical field element.
    #[error("share {x} has a value outside the field")]
    ShareOutOfRange { x: u64 },

    /// The modulus supplied for a field is not prime.
    #[error("modulus {modulus} is not prime")]
    InvalidPrime { modulus: BigUint },

    /// The modulus could not be parsed.
    #[error("cannot parse {input:?} as a hexadecimal modulus")]
    MalformedModulus { input: String },
}

/// Splits a secret into shares using Shamir Secret Sharing.
///
/// # Arguments
///
/// - `secret`
///   The secret to split. Must be lower than the field prime.
/// - `threshold`
///   The minimum number of shares required to reconstruct the secret.
/// - `share_count`
///   The total number of shares to generate.
/// - `field`
///   The field to work in. Reconstruction must use the same field.
/// - `rng`
///   Source of the polynomial coefficients.
///
/// # Returns
///
/// `share_count` shares, with identifiers `1..=share_count` in order.
///
/// # Errors
///
/// - [`SharingError::InvalidThreshold`] if `threshold` is zero or greater
///   than `share_count`
/// - [`SharingError::SecretOutOfRange`] if `secret >= p`
/// - [`SharingError::TooManyShares`] if `share_count >= p`
#[instrument(
    level = "debug",
    skip_all,
    fields(threshold = threshold, share_count = share_count, field_bits = field.bits())
)]
pub fn generate_shares<R>(
    secret: &BigUint,
    threshold: usize,
    share_count: usize,
    field: &PrimeField,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if threshold == 0 || threshold > share_count {
        debug!("threshold rejected");
        return Err(SharingError::InvalidThreshold {
            threshold,
            share_count,
        });
    }

    if !field.contains(secret) {
        debug!("secret rejected");
        return Err(SharingError::SecretOutOfRange {
            secret_bits: secret.bits(),
            modulus_bits: field.bits(),
        });
    }

    // Identifiers are reduced mod p during interpolation, so n >= p would
    // produce a share at x ≡ 0, which is the secret itself.
    if BigUint::from(share_count) >= *field.modulus() {
        debug!("share count rejected");
        return Err(SharingError::TooManyShares { share_count });
    }

    let mut coeffs = Vec::with_capacity(threshold);
    coeffs.push(secret.clone());
    coeffs.extend((1..threshold).map(|_| rng.gen_biguint_below(field.modulus())));

    let shares = emit_shares(&coeffs, share_count, field);
    drop(coeffs);

    debug!("shares generated");

    Ok(shares)
}

/// Evaluates the polynomial at `x = 1..=share_count`.
fn emit_shares(coeffs: &[BigUint], share_count: usize, field: &PrimeField) -> Vec<Share> {
    (1..=share_count as u64)
        .map(|x| Share::new(x, eval_polynomial(coeffs, &BigUint::from(x), field)))
        .collect()
}

/// Reconstructs a secret from a set of shares.
///
/// # Arguments
///
/// - `shares`
///   Shares with pairwise distinct identifiers, in any order. At least the
///   original threshold is needed for the result to be the secret.
/// - `field`
///   The field the shares were generated in.
///
/// # Errors
///
/// - [`SharingError::EmptyShareSet`] if `shares` is empty
/// - [`SharingError::ShareOutOfRange`] if a share value is `>= p`
/// - [`SharingError::InvalidShareSet`] if two identifiers are equal
///   modulo `p`
///
/// # Cryptographic notes
///
/// Lagrange interpolation at zero, without rebuilding the polynomial:
///
/// ```text
/// s = Σ_j y_j · L_j(0)
/// L_j(0) = Π_{m≠j} (−x_m) / Π_{m≠j} (x_j − x_m)   (mod p)
/// ```
#[instrument(
    level = "debug",
    skip_all,
    fields(share_count = shares.len(), field_bits = field.bits())
)]
pub fn reconstruct_secret(shares: &[Share], field: &PrimeField) -> Result<BigUint, SharingError> {
    if shares.is_empty() {
        debug!("empty share set");
        return Err(SharingError::EmptyShareSet);
    }

    if let Some(share) = shares.iter().find(|s| !field.contains(&s.y)) {
        debug!(x = share.x, "share value out of range");
        return Err(SharingError::ShareOutOfRange { x: share.x });
    }

    let p = BigInt::from(field.modulus().clone());
    let mut secret = BigInt::zero();

    for (j, share_j) in shares.iter().enumerate() {
        let xj = BigInt::from(share_j.x);

        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (m, share_m) in shares.iter().enumerate() {
            if m == j {
                continue;
            }

            let xm = BigInt::from(share_m.x);

            numerator = (numerator * -&xm).mod_floor(&p);
            denominator = (denominator * (&xj - &xm)).mod_floor(&p);
        }

        let inverse = field.inverse(&denominator).map_err(|_| {
            debug!(x = share_j.x, "duplicate share identifier");
            SharingError::InvalidShareSet { x: share_j.x }
        })?;

        let basis = (numerator * BigInt::from(inverse)).mod_floor(&p);

        secret = (secret + BigInt::from(share_j.y.clone()) * basis).mod_floor(&p);
    }

    debug!("secret reconstructed");

    Ok(field.reduce(&secret))
}

/// Splits a secret over the default secp256k1 field, drawing coefficients
/// from a fresh OS-seeded [`Csprng`].
///
/// See [`generate_shares`].
pub fn split(
    secret: &BigUint,
    threshold: usize,
    share_count: usize,
) -> Result<Vec<Share>, SharingError> {
    generate_shares(
        secret,
        threshold,
        share_count,
        &PrimeField::default(),
        &mut Csprng::new(),
    )
}

/// Reconstructs a secret split with [`split`].
///
/// See [`reconstruct_secret`].
pub fn combine(shares: &[Share]) -> Result<BigUint, SharingError> {
    reconstruct_secret(shares, &PrimeField::default())
}
