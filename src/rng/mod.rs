//! Random number generation module
//!
//! This module provides the cryptographically secure randomness used to
//! draw polynomial coefficients.
//!
//! Any generator implementing [`rand::RngCore`] and [`rand::CryptoRng`] is
//! accepted by the sharing API. [`Csprng`] is the one used by default.

mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the default entropy source of the sharing API.
pub use csprng::Csprng;
