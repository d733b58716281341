//! # rf-scratch — Scratch Lottery Engine
//!
//! Simulates one round of a grid-based scratch card: fills the grid from a
//! weighted, position-aware configuration, detects winning patterns and
//! composes the reward rules into a single integer payout.
//!
//! ## Features
//!
//! - **Grid Generator**: per-cell rejection sampling, replayable from a scripted stream
//! - **Pattern Detector**: exact-count, horizontal, vertical and diagonal patterns
//! - **Reward Resolver**: count → lines → bonus cells, in a fixed order
//! - **Config Parser**: JSON/YAML documents validated before use
//!
//! ## Architecture
//!
//! ```text
//! ScratchConfig ──┐
//!                 v
//! RandomSource ─▶ generate() ─▶ Grid ─▶ detect() ─▶ DetectedPatterns
//!                                 │                       │
//!                                 └──────────┬────────────┘
//!                                            v
//!                      PayTable + stake ─▶ resolve() ─▶ payout
//! ```

pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod parser;
pub mod paytable;
pub mod play;
pub mod resolver;
pub mod rng;
pub mod symbols;

pub use config::*;
pub use detector::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use parser::*;
pub use paytable::*;
pub use play::*;
pub use resolver::*;
pub use rng::*;
pub use symbols::*;
