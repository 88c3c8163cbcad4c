//! Threshold secret sharing over prime fields
//!
//! This crate splits a secret integer into shares using **Shamir Secret
//! Sharing** over GF(p), and reconstructs it from any sufficiently large
//! subset of those shares.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! arithmetic is written out explicitly, the field prime is an explicit
//! value rather than a hidden global, and the randomness source is an
//! explicit capability at every call site.
//!
//! # Module overview
//!
//! - `recovery`
//!   Secret splitting and reconstruction.
//!
//!   This module contains the prime field arithmetic (modular inverse,
//!   field configuration), the polynomial evaluator, and the Shamir
//!   share generator and reconstructor built on top of them. The default
//!   field is the 256-bit secp256k1 base-field prime; callers may supply
//!   any other prime.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generation. The
//!   generator is seeded from the operating system and expands randomness
//!   with ChaCha20. It is the default source of polynomial coefficients.
//!
//! # Design goals
//!
//! - Arbitrary-precision arithmetic, never machine-word modular products
//! - Stateless operations, safe to call from any number of threads
//! - Typed errors carrying the offending (non-secret) value
//! - No storage, transport, or policy decisions
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use primeshare::recovery::field::PrimeField;
//! use primeshare::recovery::shamirsecretsharing::{generate_shares, reconstruct_secret};
//! use primeshare::rng::Csprng;
//!
//! let field = PrimeField::default();
//! let secret = BigUint::from(12345678901234567890u64);
//!
//! let shares = generate_shares(&secret, 3, 5, &field, &mut Csprng::new()).unwrap();
//! let recovered = reconstruct_secret(&shares[1..4], &field).unwrap();
//!
//! assert_eq!(recovered, secret);
//! ```

pub mod recovery;
pub mod rng;
