//! Single play: generate, detect, resolve

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ScratchConfig;
use crate::detector::{DetectedPatterns, detect};
use crate::error::ScratchResult;
use crate::generator::generate;
use crate::grid::Grid;
use crate::resolver::{Resolution, resolve_detailed};
use crate::rng::RandomSource;

/// Complete result of one play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Realized grid
    pub grid: Grid,
    /// Patterns found on the grid
    pub patterns: DetectedPatterns,
    /// Payout breakdown
    pub resolution: Resolution,
}

impl PlayOutcome {
    pub fn payout(&self) -> i64 {
        self.resolution.payout
    }

    pub fn stake(&self) -> i64 {
        self.resolution.stake
    }

    pub fn is_win(&self) -> bool {
        self.resolution.is_win()
    }
}

/// Play one round
///
/// Nothing is returned unless every stage succeeds.
pub fn play<R: RandomSource + ?Sized>(
    config: &ScratchConfig,
    stake: i64,
    rng: &mut R,
) -> ScratchResult<PlayOutcome> {
    let grid = generate(config, rng)?;
    let outcome = evaluate(config, grid, stake)?;
    info!(
        "Play resolved: stake={} payout={} patterns={:?}",
        stake,
        outcome.payout(),
        outcome.patterns.kinds()
    );
    Ok(outcome)
}

/// Detect and resolve an existing grid
pub fn evaluate(config: &ScratchConfig, grid: Grid, stake: i64) -> ScratchResult<PlayOutcome> {
    let patterns = detect(&grid);
    let resolution = resolve_detailed(&grid, &patterns, config.paytable(), stake)?;
    Ok(PlayOutcome {
        grid,
        patterns,
        resolution,
    })
}
