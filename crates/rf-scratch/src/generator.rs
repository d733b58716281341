//! Grid generation by per-cell rejection sampling
//!
//! Cells are filled in the order of the configured cell table. For each cell
//! the generator repeatedly picks a candidate uniformly from the cell's symbol
//! list and accepts it only when a fresh fraction is strictly greater than
//! the candidate's generation chance. A lower chance therefore makes a symbol
//! *more* likely to be accepted.

use log::{debug, trace};

use crate::config::{CellSpec, ScratchConfig, SymbolWeights};
use crate::error::{ScratchError, ScratchResult};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::symbols::Symbol;

/// Fill a grid from the configuration
pub fn generate<R: RandomSource + ?Sized>(
    config: &ScratchConfig,
    rng: &mut R,
) -> ScratchResult<Grid> {
    let mut grid = Grid::blank(config.shape());

    for cell in config.cells() {
        let symbol = fill_cell(cell, &config.symbols, rng)?;
        grid.set(cell.row, cell.column, symbol);
    }

    debug!("Generated grid:\n{}", grid);
    Ok(grid)
}

fn fill_cell<R: RandomSource + ?Sized>(
    cell: &CellSpec,
    weights: &SymbolWeights,
    rng: &mut R,
) -> ScratchResult<Symbol> {
    if cell.symbols.is_empty() {
        return Err(ScratchError::EmptyCell {
            row: cell.row,
            column: cell.column,
        });
    }

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let index = rng.next_index(cell.symbols.len());
        let fraction = rng.next_fraction();

        if fraction == 0.0 {
            return Err(ScratchError::DegenerateRandomSource {
                row: cell.row,
                column: cell.column,
            });
        }

        let candidate = cell.symbols[index];
        if fraction > weights.weight(candidate) {
            trace!(
                "Cell ({}, {}) accepted {} after {} attempt(s)",
                cell.row, cell.column, candidate, attempts
            );
            return Ok(candidate);
        }
    }
}
