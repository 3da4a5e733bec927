//! Seedable random number generator for deterministic testing.
//!
//! When a seed is provided via [`Config::rng_seed`](crate::Config::rng_seed),
//! the server random and the ephemeral key share are deterministic. This is
//! only meant for tests and debugging.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the server random and ephemeral private keys.
///
/// Seeded, it replays the same bytes for every server built from the same
/// config. Unseeded, it draws from the thread-local generator.
pub(crate) struct SeededRng {
    inner: Option<StdRng>,
}

impl SeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let inner = seed.map(StdRng::seed_from_u64);
        Self { inner }
    }

    /// Fill `dest` with random bytes.
    pub fn fill(&mut self, dest: &mut [u8]) {
        match self.inner.as_mut() {
            Some(rng) => rng.fill(dest),
            None => rand::rng().fill(dest),
        }
    }
}

impl std::fmt::Debug for SeededRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededRng")
            .field("seeded", &self.inner.is_some())
            .finish()
    }
}
