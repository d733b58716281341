//! Scratch card configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::paytable::PayTable;
use crate::symbols::Symbol;

/// Weight used for a selectable symbol that has no configured weight
pub const DEFAULT_GENERATION_CHANCE: f64 = 0.5;

/// Grid dimensions (rows × columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl GridShape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Classic 3×3 card
    pub fn standard_3x3() -> Self {
        Self::new(3, 3)
    }

    /// Total cell count
    pub fn total_cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Cells on each diagonal
    pub fn diagonal_len(&self) -> usize {
        self.rows.min(self.columns)
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::standard_3x3()
    }
}

/// Symbols eligible at one grid coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    pub row: usize,
    pub column: usize,
    /// Eligible symbols; index draws are taken into this list
    pub symbols: Vec<Symbol>,
}

impl CellSpec {
    pub fn new(row: usize, column: usize, symbols: Vec<Symbol>) -> Self {
        Self {
            row,
            column,
            symbols,
        }
    }
}

/// Generation settings for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolSettings {
    /// Rejection threshold in [0, 1]: a draw is accepted only when the
    /// random fraction is strictly greater than this value
    pub generation_chance: f64,
}

/// Symbol → generation weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolWeights {
    settings: BTreeMap<Symbol, SymbolSettings>,
}

impl SymbolWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, symbol: Symbol, generation_chance: f64) -> Self {
        self.set(symbol, generation_chance);
        self
    }

    pub fn set(&mut self, symbol: Symbol, generation_chance: f64) {
        self.settings
            .insert(symbol, SymbolSettings { generation_chance });
    }

    /// Configured weight, if any
    pub fn get(&self, symbol: Symbol) -> Option<f64> {
        self.settings.get(&symbol).map(|s| s.generation_chance)
    }

    /// Effective weight (missing → 0.5)
    pub fn weight(&self, symbol: Symbol) -> f64 {
        self.get(symbol).unwrap_or(DEFAULT_GENERATION_CHANCE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.settings
            .iter()
            .map(|(symbol, s)| (*symbol, s.generation_chance))
    }
}

/// Grid shape plus the ordered cell table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameArea {
    #[serde(flatten)]
    pub shape: GridShape,
    /// Cell table; the generator fills cells in exactly this order
    pub possible_positions: Vec<CellSpec>,
}

impl GameArea {
    /// Row-major table with the same symbol list at every cell
    pub fn uniform(shape: GridShape, symbols: &[Symbol]) -> Self {
        let possible_positions = (0..shape.rows)
            .flat_map(|row| {
                (0..shape.columns).map(move |column| CellSpec::new(row, column, symbols.to_vec()))
            })
            .collect();
        Self {
            shape,
            possible_positions,
        }
    }
}

/// Complete scratch card configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScratchConfig {
    pub game_area: GameArea,
    /// Generation weights
    #[serde(default)]
    pub symbols: SymbolWeights,
    /// Rewards per winning pattern
    pub win_combinations: PayTable,
}

impl ScratchConfig {
    /// The 3×3 card with all ten playable symbols at every cell
    pub fn standard_3x3() -> Self {
        let playable: Vec<Symbol> = Symbol::ALL
            .iter()
            .copied()
            .filter(|s| *s != Symbol::Blank)
            .collect();

        let symbols = SymbolWeights::new()
            .with(Symbol::A, 0.5)
            .with(Symbol::B, 0.4)
            .with(Symbol::C, 0.3)
            .with(Symbol::D, 0.2)
            .with(Symbol::E, 0.15)
            .with(Symbol::F, 0.1)
            .with(Symbol::X10, 0.1)
            .with(Symbol::X5, 0.2)
            .with(Symbol::P1000, 0.2)
            .with(Symbol::P500, 0.3);

        Self {
            game_area: GameArea::uniform(GridShape::standard_3x3(), &playable),
            symbols,
            win_combinations: PayTable::standard(),
        }
    }

    pub fn shape(&self) -> GridShape {
        self.game_area.shape
    }

    pub fn cells(&self) -> &[CellSpec] {
        &self.game_area.possible_positions
    }

    pub fn paytable(&self) -> &PayTable {
        &self.win_combinations
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::standard_3x3()
    }
}
