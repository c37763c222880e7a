use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hands out reproducible RNG streams keyed by name, all derived from one master seed.
///
/// Every stream shares the master key and differs only in its ChaCha stream id, so
/// adding a new consumer never shifts the sequence an existing one sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// RNG for the consumer called `name`.
    pub fn stream(&self, name: &str) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.master_seed);
        rng.set_stream(stream_id(name));
        rng
    }
}

/// FNV-1a over the name bytes. Stable across builds, unlike `DefaultHasher`.
fn stream_id(name: &str) -> u64 {
    name.bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Swap in an externally-constructed RNG (used to inject a known buffeting sequence).
pub trait WithRng {
    fn with_rng(self, rng: ChaCha8Rng) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn draw(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.gen::<f64>()).collect()
    }

    #[test]
    fn test_same_stream_is_reproducible() {
        let manager = RngManager::new(42);
        let first = draw(&mut manager.stream("buffet"), 5);
        let second = draw(&mut manager.stream("buffet"), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_named_streams_are_independent() {
        let manager = RngManager::new(42);
        let buffet = draw(&mut manager.stream("buffet"), 5);
        let other = draw(&mut manager.stream("turbulence"), 5);
        assert_ne!(buffet, other);
    }

    #[test]
    fn test_master_seed_changes_stream() {
        let a = draw(&mut RngManager::new(1).stream("buffet"), 5);
        let b = draw(&mut RngManager::new(2).stream("buffet"), 5);
        assert_ne!(a, b);
        assert_eq!(RngManager::new(7).master_seed(), 7);
    }

    #[test]
    fn test_stream_id_is_fixed() {
        // FNV-1a reference value for the empty input
        assert_eq!(stream_id(""), FNV_OFFSET);
        assert_ne!(stream_id("buffet"), stream_id("buffeT"));
    }
}
