//! Labelled seed derivation for independent random streams.
//!
//! Each consumer of randomness (hazard scheduling, attack-pattern scheduling,
//! collectible timers, per-hazard jitter) draws from its own stream so that
//! adding a consumer never perturbs the sequence observed by another.

use sha2::{Digest, Sha256};

/// Stream label used by the hazard scheduling loop.
pub const RNG_STREAM_HAZARDS: &str = "hazards";
/// Stream label used by the legacy attack-pattern scheduling loop.
pub const RNG_STREAM_ATTACK_PATTERNS: &str = "attack-patterns";
/// Stream label used by the collectible spawner.
pub const RNG_STREAM_COLLECTIBLES: &str = "collectibles";
/// Stream label prefix used for per-hazard behaviour randomness.
pub const RNG_STREAM_HAZARD_INSTANCE: &str = "hazard-instance";

/// Derives a child seed from `base` and a stream label.
#[must_use]
pub fn derive_labeled_seed(base: u64, label: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(base.to_le_bytes());
    hasher.update(label.as_bytes());
    finalize_seed(hasher)
}

/// Derives a child seed from `base`, a stream label and an index.
#[must_use]
pub fn derive_indexed_seed(base: u64, label: &str, index: u32) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(base.to_le_bytes());
    hasher.update(label.as_bytes());
    hasher.update(index.to_le_bytes());
    finalize_seed(hasher)
}

fn finalize_seed(hasher: Sha256) -> u64 {
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[0..8]);
    u64::from_le_bytes(bytes)
}
