//! Shamir Secret Sharing (SSS) implementation.
//!
//! The implementation is split into three layers, leaves first:
//!
//! - [`field`]
//!   Prime field configuration and modular inversion.
//!
//! - [`polynomial`]
//!   Evaluation of a polynomial, given by its coefficients, at a field
//!   point.
//!
//! - [`core`]
//!   Public API and protocol logic: share representation, parameter
//!   validation, share generation, and reconstruction.
//!
//! ## Design notes
//!
//! - The secret is a single field element, used as the constant term of a
//!   random polynomial of degree `k - 1`.
//! - Share identifiers are `1..=n` and never zero, since `f(0)` is the
//!   secret itself.
//! - The random polynomial only lives for the duration of one
//!   `generate_shares` call.
//!
//! ## Security scope
//!
//! This module provides **confidentiality through threshold secrecy**.
//! It does not provide:
//! - authentication or integrity protection for shares
//! - resistance against malicious or byzantine participants
//! - serialization, storage, or transport mechanisms

pub mod core;
pub mod field;
pub mod polynomial;
