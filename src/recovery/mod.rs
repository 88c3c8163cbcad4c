//! Cryptographic recovery primitives.
//!
//! This module protects a secret against the loss or compromise of
//! individual custodians by distributing it across several parties.
//!
//! # Shamir Secret Sharing (SSS)
//!
//! The `shamirsecretsharing` submodule provides an implementation of
//! **Shamir Secret Sharing** over a prime field GF(p).
//!
//! A secret integer is split into `n` *shares* such that:
//!
//! - Any subset of at least `k` shares reconstructs the original secret.
//! - Any subset of fewer than `k` shares reveals no information about it.
//!
//! ## Provided functionality
//!
//! - **Field arithmetic** ([`field`])
//!   - The [`field::PrimeField`] configuration value, defaulting to the
//!     secp256k1 base-field prime.
//!   - Modular inversion via the Extended Euclidean Algorithm.
//!
//! - **Polynomial evaluation** ([`polynomial`])
//!   - Evaluation of a coefficient list at a field point.
//!
//! - **Splitting and combining** ([`shamirsecretsharing`])
//!   - `generate_shares` draws a random polynomial with the secret as its
//!     constant term and evaluates it at `x = 1..=n`.
//!   - `reconstruct_secret` performs Lagrange interpolation at zero.
//!
//! This module is intentionally minimal and does not include:
//! - verification of shares (a corrupted share yields a wrong secret)
//! - share refresh or rotation
//! - serialization or networking logic

mod sss;

pub use sss::core as shamirsecretsharing;
pub use sss::field;
pub use sss::polynomial;
