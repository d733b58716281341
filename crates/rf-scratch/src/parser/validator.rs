//! Semantic checks for a parsed `ScratchConfig`

use std::collections::HashSet;

use crate::config::ScratchConfig;
use crate::error::{ScratchError, ScratchResult};
use crate::symbols::Symbol;

use super::ParserLimits;

fn invalid(msg: String) -> ScratchError {
    ScratchError::Validation(msg)
}

/// Check every invariant the engine relies on
pub fn validate_config(config: &ScratchConfig, limits: &ParserLimits) -> ScratchResult<()> {
    let shape = config.shape();

    if shape.rows < 1 {
        return Err(invalid("Number of rows should not be less than 1".into()));
    }
    if shape.columns < 1 {
        return Err(invalid("Number of columns should not be less than 1".into()));
    }
    if shape.rows > limits.max_rows {
        return Err(invalid(format!(
            "Too many rows: {} > {}",
            shape.rows, limits.max_rows
        )));
    }
    if shape.columns > limits.max_columns {
        return Err(invalid(format!(
            "Too many columns: {} > {}",
            shape.columns, limits.max_columns
        )));
    }

    // Weights
    for (symbol, chance) in config.symbols.iter() {
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(invalid(format!(
                "Generation chance for symbol {} should be between 0 and 1, got {}",
                symbol, chance
            )));
        }
    }

    // Cell table
    let mut seen = HashSet::with_capacity(shape.total_cells());
    for cell in config.cells() {
        if !shape.contains(cell.row, cell.column) {
            return Err(invalid(format!(
                "Position ({}, {}) is outside the {}x{} grid",
                cell.row, cell.column, shape.rows, shape.columns
            )));
        }
        if !seen.insert((cell.row, cell.column)) {
            return Err(invalid(format!(
                "Position ({}, {}) is listed more than once",
                cell.row, cell.column
            )));
        }
        if cell.symbols.is_empty() {
            return Err(invalid(format!(
                "Position ({}, {}) has no eligible symbols",
                cell.row, cell.column
            )));
        }
        if cell.symbols.contains(&Symbol::Blank) {
            return Err(invalid(format!(
                "Position ({}, {}) lists {} as an eligible symbol",
                cell.row,
                cell.column,
                Symbol::Blank
            )));
        }
        // Generation only ends once some candidate can be accepted
        if cell.symbols.iter().all(|s| config.symbols.weight(*s) >= 1.0) {
            return Err(invalid(format!(
                "Position ({}, {}) has no symbol with generation chance below 1",
                cell.row, cell.column
            )));
        }
    }
    if seen.len() != shape.total_cells() {
        return Err(invalid(format!(
            "Only {} of {} positions are configured",
            seen.len(),
            shape.total_cells()
        )));
    }

    // Rewards
    for (kind, rule) in config.paytable().iter() {
        if !rule.amount.is_finite() || rule.amount.abs() > limits.max_reward_amount {
            return Err(invalid(format!(
                "Reward amount for {} is out of range: {}",
                kind, rule.amount
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellSpec, GridShape};
    use crate::paytable::{PatternKind, RewardRule};

    fn limits() -> ParserLimits {
        ParserLimits::default()
    }

    fn assert_invalid(config: &ScratchConfig, needle: &str) {
        match validate_config(config, &limits()) {
            Err(ScratchError::Validation(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {msg}")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_standard_config_is_valid() {
        assert!(validate_config(&ScratchConfig::standard_3x3(), &limits()).is_ok());
    }

    #[test]
    fn test_zero_rows() {
        let mut config = ScratchConfig::standard_3x3();
        config.game_area.shape = GridShape::new(0, 3);
        assert_invalid(&config, "rows");
    }

    #[test]
    fn test_weight_out_of_range() {
        let mut config = ScratchConfig::standard_3x3();
        config.symbols.set(Symbol::A, 1.5);
        assert_invalid(&config, "between 0 and 1");

        config.symbols.set(Symbol::A, -0.1);
        assert_invalid(&config, "between 0 and 1");
    }

    #[test]
    fn test_position_out_of_range() {
        let mut config = ScratchConfig::standard_3x3();
        config.game_area.possible_positions[8] = CellSpec::new(3, 0, vec![Symbol::A]);
        assert_invalid(&config, "outside");
    }

    #[test]
    fn test_duplicate_position() {
        let mut config = ScratchConfig::standard_3x3();
        config.game_area.possible_positions[8] = CellSpec::new(0, 0, vec![Symbol::A]);
        assert_invalid(&config, "more than once");
    }

    #[test]
    fn test_missing_position() {
        let mut config = ScratchConfig::standard_3x3();
        config.game_area.possible_positions.pop();
        assert_invalid(&config, "8 of 9");
    }

    #[test]
    fn test_sentinel_not_selectable() {
        let mut config = ScratchConfig::standard_3x3();
        config.game_area.possible_positions[0].symbols.push(Symbol::Blank);
        assert_invalid(&config, "NONE");
    }

    #[test]
    fn test_unacceptable_cell() {
        let mut config = ScratchConfig::standard_3x3();
        config.symbols.set(Symbol::C, 1.0);
        config.game_area.possible_positions[4].symbols = vec![Symbol::C];
        assert_invalid(&config, "below 1");
    }

    #[test]
    fn test_reward_amount_limit() {
        let mut config = ScratchConfig::standard_3x3();
        config
            .win_combinations
            .insert(PatternKind::Diagonal, RewardRule::multiply(f64::INFINITY));
        assert_invalid(&config, "same_diagonal");
    }
}
