use chrono::Utc;
use crc32fast::Hasher;

/// Derive a generator seed from a label using CRC32, mixed with the
/// creation time so two generators with the same label cannot collide.
fn seed_for(label: &str) -> u32 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    hasher.update(&nanos.to_le_bytes());
    hasher.finalize()
}

/// Sequential ID generator for blocks, groups and websites.
///
/// Non-blocking and free of cryptographic RNG requirements: ids are a
/// seed prefix plus a monotonically increasing counter, unique for the
/// lifetime of the generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: u32,
    count: u64,
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: seed_for(label),
            count: 0,
        }
    }

    pub fn from_seed(seed: u32) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{:x}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_distinct() {
        let mut gen = IdGenerator::new("test-store");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));
    }

    #[test]
    fn test_ids_share_generator_seed() {
        let mut gen = IdGenerator::from_seed(0xdeadbeef);

        assert_eq!(gen.new_id(), "deadbeef-1");
        assert_eq!(gen.new_id(), "deadbeef-2");
    }
}
