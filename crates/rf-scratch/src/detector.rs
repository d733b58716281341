//! Winning pattern detection

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::paytable::{MAX_COUNT, MIN_COUNT, PatternKind};
use crate::symbols::Symbol;

/// Patterns present on a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPatterns {
    /// Largest exact-count match, if any
    pub count: Option<PatternKind>,
    pub horizontal: bool,
    pub vertical: bool,
    pub diagonal: bool,
}

impl DetectedPatterns {
    /// Whether a given pattern kind was detected
    pub fn matched(&self, kind: PatternKind) -> bool {
        match kind {
            PatternKind::Horizontal => self.horizontal,
            PatternKind::Vertical => self.vertical,
            PatternKind::Diagonal => self.diagonal,
            count => self.count == Some(count),
        }
    }

    /// Matched line kinds in resolution order
    pub fn lines(&self) -> impl Iterator<Item = PatternKind> + '_ {
        PatternKind::LINES
            .into_iter()
            .filter(move |kind| self.matched(*kind))
    }

    /// Every matched kind, count first, then lines in resolution order
    pub fn kinds(&self) -> Vec<PatternKind> {
        self.count.into_iter().chain(self.lines()).collect()
    }

    pub fn any(&self) -> bool {
        self.count.is_some() || self.horizontal || self.vertical || self.diagonal
    }
}

/// Detect every pattern on the grid
pub fn detect(grid: &Grid) -> DetectedPatterns {
    let patterns = DetectedPatterns {
        count: count_pattern(grid),
        horizontal: has_horizontal_line(grid),
        vertical: has_vertical_line(grid),
        diagonal: has_diagonal_line(grid),
    };
    debug!("Detected patterns: {:?}", patterns.kinds());
    patterns
}

/// Occurrences of each basic symbol
pub fn basic_histogram(grid: &Grid) -> BTreeMap<Symbol, usize> {
    let mut histogram = BTreeMap::new();
    for symbol in grid.cells().iter().filter(|s| s.is_basic()) {
        *histogram.entry(*symbol).or_insert(0) += 1;
    }
    histogram
}

/// Largest N in 3..=9 such that some basic symbol occurs exactly N times
pub fn count_pattern(grid: &Grid) -> Option<PatternKind> {
    let histogram = basic_histogram(grid);
    let mut found = None;
    for n in MIN_COUNT..=MAX_COUNT {
        if histogram.values().any(|&count| count == n) {
            found = PatternKind::same(n);
        }
    }
    found
}

/// All symbols equal to a basic leading symbol
fn uniform_basic_line(mut line: impl Iterator<Item = Symbol>) -> bool {
    match line.next() {
        Some(first) if first.is_basic() => line.all(|s| s == first),
        _ => false,
    }
}

pub fn has_horizontal_line(grid: &Grid) -> bool {
    grid.iter_rows().any(|row| uniform_basic_line(row.iter().copied()))
}

pub fn has_vertical_line(grid: &Grid) -> bool {
    (0..grid.columns()).any(|column| uniform_basic_line(grid.column(column)))
}

/// Main or anti diagonal over `min(rows, columns)` cells from its corner
pub fn has_diagonal_line(grid: &Grid) -> bool {
    let len = grid.shape().diagonal_len();
    let last_column = grid.columns() - 1;

    let main = (0..len).filter_map(|i| grid.get(i, i));
    let anti = (0..len).filter_map(|i| grid.get(i, last_column - i));

    uniform_basic_line(main) || uniform_basic_line(anti)
}
