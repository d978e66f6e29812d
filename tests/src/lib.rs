//! Shared fixtures for the aesvault integration tests and benchmarks

pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decodes a hex literal, panicking on malformed fixtures
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex fixture {:?}: {}", s, e))
}
