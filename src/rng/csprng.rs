//! ChaCha20-based CSPRNG
//!
//! This module implements the default source of polynomial coefficients:
//! a cryptographically secure pseudorandom number generator built on the
//! ChaCha20 stream cipher.
//!
//! - relies on the operating system for initial entropy
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - provides forward secrecy via rekeying after every fill
//!
//! The generator implements [`RngCore`] and [`CryptoRng`], so it can be
//! passed anywhere the sharing API asks for a secure generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy and expands it
/// with ChaCha20.
///
/// After filling a buffer, the generator rekeys itself: compromise of the
/// internal state does not reveal previously generated coefficients.
pub struct Csprng {
    inner: ChaCha20Rng,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide entropy. Sharing a
    /// secret without it is not recoverable.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a new CSPRNG from a user-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable, unless the
    /// generator is used for reproducible tests. The local copy of the seed
    /// is wiped once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let inner = ChaCha20Rng::from_seed(seed);
        seed.zeroize();

        Self { inner }
    }

    /// Replaces the key with fresh output of the current stream.
    fn rekey(&mut self) {
        let mut key = [0u8; 32];
        self.inner.fill_bytes(&mut key);

        self.inner = ChaCha20Rng::from_seed(key);
        key.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Fills the buffer, then rekeys the generator.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
        self.rekey();
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}

impl CryptoRng for Csprng {}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}
