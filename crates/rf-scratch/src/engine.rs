//! Scratch Engine — owns a configuration and an RNG stream

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::ScratchConfig;
use crate::error::ScratchResult;
use crate::play::{PlayOutcome, play};

/// Scratch card engine
///
/// Holds a validated configuration and a ChaCha8 stream. Plays share no
/// state besides the stream position, so two engines seeded alike produce
/// identical outcomes.
pub struct ScratchEngine {
    /// Configuration
    config: ScratchConfig,
    /// Random number generator
    rng: ChaCha8Rng,
}

impl ScratchEngine {
    /// Create with an entropy-seeded stream
    pub fn new(config: ScratchConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Create with a fixed seed for reproducible plays
    pub fn seeded(config: ScratchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from a seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Get current config
    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    /// Play one round for `stake`
    pub fn play(&mut self, stake: i64) -> ScratchResult<PlayOutcome> {
        play(&self.config, stake, &mut self.rng)
    }
}

impl Default for ScratchEngine {
    fn default() -> Self {
        Self::new(ScratchConfig::default())
    }
}
