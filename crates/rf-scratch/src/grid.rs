//! Realized symbol grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GridShape;
use crate::error::ScratchError;
use crate::symbols::Symbol;

/// A filled `rows × columns` grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Symbol>,
}

/// Serialized grid before the shape is checked against the cells
#[derive(Deserialize)]
struct RawGrid {
    shape: GridShape,
    cells: Vec<Symbol>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = ScratchError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let shape = raw.shape;
        let found = raw.cells.len();
        Grid::from_cells(shape, raw.cells).ok_or_else(|| {
            ScratchError::Validation(format!(
                "Grid {}x{} cannot hold {} cells",
                shape.rows, shape.columns, found
            ))
        })
    }
}

impl Grid {
    /// Grid with every cell set to [`Symbol::Blank`]
    pub fn blank(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![Symbol::Blank; shape.total_cells()],
        }
    }

    /// Build from explicit rows. Returns `None` for ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<Symbol>>) -> Option<Self> {
        let columns = rows.first()?.len();
        if columns == 0 || rows.iter().any(|r| r.len() != columns) {
            return None;
        }
        let shape = GridShape::new(rows.len(), columns);
        Some(Self {
            shape,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from row-major cells. Returns `None` for an empty shape or a
    /// cell count that does not match it.
    pub fn from_cells(shape: GridShape, cells: Vec<Symbol>) -> Option<Self> {
        if shape.rows == 0 || shape.columns == 0 {
            return None;
        }
        if shape.rows.checked_mul(shape.columns) != Some(cells.len()) {
            return None;
        }
        Some(Self { shape, cells })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn columns(&self) -> usize {
        self.shape.columns
    }

    /// Symbol at `(row, column)`, `None` out of range
    pub fn get(&self, row: usize, column: usize) -> Option<Symbol> {
        if !self.shape.contains(row, column) {
            return None;
        }
        self.cells.get(row * self.shape.columns + column).copied()
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, symbol: Symbol) {
        let idx = row * self.shape.columns + column;
        self.cells[idx] = symbol;
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Symbol] {
        let start = row * self.shape.columns;
        &self.cells[start..start + self.shape.columns]
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(self.shape.columns)
    }

    /// Iterate one column top to bottom
    pub fn column(&self, column: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.cells
            .iter()
            .skip(column)
            .step_by(self.shape.columns)
            .copied()
    }

    /// Every cell, row-major
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<Symbol>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, symbol) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:<5}", symbol)?;
            }
        }
        Ok(())
    }
}
