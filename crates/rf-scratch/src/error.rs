//! Error types for scratch card generation, resolution and config loading

use thiserror::Error;

use crate::paytable::{PatternKind, RewardAction};

/// Scratch engine error types
#[derive(Error, Debug)]
pub enum ScratchError {
    /// A detected pattern has no reward rule in the pay table
    #[error("No reward rule configured for detected pattern {kind}")]
    MissingRewardRule { kind: PatternKind },

    /// The random source produced a fraction of exactly zero
    #[error("Degenerate random source: drew 0.0 while filling cell ({row}, {column})")]
    DegenerateRandomSource { row: usize, column: usize },

    /// A reward step left the `i64` range
    #[error("Payout overflow: {action:?} {amount} applied to {base}")]
    PayoutOverflow {
        action: RewardAction,
        amount: f64,
        base: i64,
    },

    /// A cell with no eligible symbols reached the generator
    #[error("Cell ({row}, {column}) has no eligible symbols")]
    EmptyCell { row: usize, column: usize },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    /// Config file extension not recognised
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scratch engine operations
pub type ScratchResult<T> = Result<T, ScratchError>;
