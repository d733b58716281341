//! Random sources for grid generation
//!
//! The generator draws exactly two values per attempt, always in the same
//! order: an index into the cell's symbol list, then a fraction in `[0, 1)`.
//! Any `rand` generator works as a source; [`ScriptedSource`] replays a fixed
//! sequence so a recorded play can be reproduced draw for draw.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

/// Source of the two draws the generator needs per attempt
pub trait RandomSource {
    /// Uniform index in `[0, bound)`; `bound` is never zero
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform fraction in `[0, 1)`
    fn next_fraction(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn next_fraction(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays scripted draws
///
/// Index and fraction draws come from two separate queues. Once a queue holds
/// a single value that value repeats forever. Scripted indices are reduced
/// modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    fractions: VecDeque<f64>,
    index_draws: usize,
    fraction_draws: usize,
}

impl ScriptedSource {
    /// Script the index and fraction draws
    ///
    /// # Panics
    ///
    /// Panics if either sequence is empty.
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        fractions: impl IntoIterator<Item = f64>,
    ) -> Self {
        let indices: VecDeque<usize> = indices.into_iter().collect();
        let fractions: VecDeque<f64> = fractions.into_iter().collect();
        assert!(!indices.is_empty(), "scripted indices must not be empty");
        assert!(!fractions.is_empty(), "scripted fractions must not be empty");
        Self {
            indices,
            fractions,
            index_draws: 0,
            fraction_draws: 0,
        }
    }

    /// Number of index draws taken so far
    pub fn index_draws(&self) -> usize {
        self.index_draws
    }

    /// Number of fraction draws taken so far
    pub fn fraction_draws(&self) -> usize {
        self.fraction_draws
    }
}

fn next_repeating<T: Copy>(queue: &mut VecDeque<T>) -> T {
    if queue.len() > 1 {
        if let Some(v) = queue.pop_front() {
            return v;
        }
    }
    // Constructor guarantees one element remains
    queue[0]
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.index_draws += 1;
        next_repeating(&mut self.indices) % bound
    }

    fn next_fraction(&mut self) -> f64 {
        self.fraction_draws += 1;
        next_repeating(&mut self.fractions)
    }
}
