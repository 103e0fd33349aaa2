use crc32fast::Hasher;
use std::time::{SystemTime, UNIX_EPOCH};

/// Hash a seed string to a compact hex document id.
fn hash_seed(seed: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for blocks within a document.
///
/// Ids are `"{seed}-{n}"` where the seed is a CRC32 of the seed string and
/// `n` counts up from 1. The same seed string always yields the same id
/// stream, which keeps tests deterministic.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    /// Create a generator seeded from an arbitrary string (typically the
    /// document id or slug).
    pub fn new(seed: &str) -> Self {
        Self {
            seed: hash_seed(seed),
            count: 0,
        }
    }

    /// Create a generator seeded from the current time, for sessions that
    /// only need in-memory uniqueness.
    pub fn random() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        Self::new(&nanos.to_string())
    }

    /// Generate the next id.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
