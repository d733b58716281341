//! Symbol definitions and their fixed classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::paytable::RewardAction;

/// Symbol classification
///
/// Fixed per symbol; never read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SymbolClass {
    /// Takes part in count and line patterns
    Basic = 0,
    /// Multiplier or additive effect applied after pattern rewards
    Bonus = 1,
    /// Unfilled cell marker
    Sentinel = 2,
}

/// A scratch card symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    /// Multiplies the final running total by 10
    X10,
    /// Multiplies the final running total by 5
    X5,
    /// Adds 1000 to the final payout
    P1000,
    /// Adds 500 to the final payout
    P500,
    /// Unfilled cell
    #[serde(rename = "NONE")]
    Blank,
}

/// Effect carried by a bonus symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusEffect {
    pub action: RewardAction,
    pub amount: f64,
}

impl Symbol {
    /// Every symbol, sentinel last
    pub const ALL: [Symbol; 11] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
        Symbol::X10,
        Symbol::X5,
        Symbol::P1000,
        Symbol::P500,
        Symbol::Blank,
    ];

    /// Symbols that take part in count and line patterns
    pub const BASIC: [Symbol; 6] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
    ];

    /// Get the fixed classification
    pub fn class(self) -> SymbolClass {
        match self {
            Symbol::A | Symbol::B | Symbol::C | Symbol::D | Symbol::E | Symbol::F => {
                SymbolClass::Basic
            }
            Symbol::X10 | Symbol::X5 | Symbol::P1000 | Symbol::P500 => SymbolClass::Bonus,
            Symbol::Blank => SymbolClass::Sentinel,
        }
    }

    pub fn is_basic(self) -> bool {
        self.class() == SymbolClass::Basic
    }

    pub fn is_bonus(self) -> bool {
        self.class() == SymbolClass::Bonus
    }

    /// Bonus effect, `None` for basic and sentinel symbols
    pub fn bonus(self) -> Option<BonusEffect> {
        let (action, amount) = match self {
            Symbol::X10 => (RewardAction::Multiply, 10.0),
            Symbol::X5 => (RewardAction::Multiply, 5.0),
            Symbol::P1000 => (RewardAction::Sum, 1000.0),
            Symbol::P500 => (RewardAction::Sum, 500.0),
            _ => return None,
        };
        Some(BonusEffect { action, amount })
    }

    /// Display name as used in configuration documents
    pub fn name(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::E => "E",
            Symbol::F => "F",
            Symbol::X10 => "X10",
            Symbol::X5 => "X5",
            Symbol::P1000 => "P1000",
            Symbol::P500 => "P500",
            Symbol::Blank => "NONE",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_has_one_class() {
        let basic = Symbol::ALL.iter().filter(|s| s.is_basic()).count();
        let bonus = Symbol::ALL.iter().filter(|s| s.is_bonus()).count();
        let sentinel = Symbol::ALL
            .iter()
            .filter(|s| s.class() == SymbolClass::Sentinel)
            .count();
        assert_eq!(basic, 6);
        assert_eq!(bonus, 4);
        assert_eq!(sentinel, 1);
    }

    #[test]
    fn test_bonus_effects() {
        let x10 = Symbol::X10.bonus().unwrap();
        assert_eq!(x10.action, RewardAction::Multiply);
        assert_eq!(x10.amount, 10.0);

        let p500 = Symbol::P500.bonus().unwrap();
        assert_eq!(p500.action, RewardAction::Sum);
        assert_eq!(p500.amount, 500.0);

        assert!(Symbol::A.bonus().is_none());
        assert!(Symbol::Blank.bonus().is_none());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Symbol::Blank).unwrap();
        assert_eq!(json, "\"NONE\"");
        let sym: Symbol = serde_json::from_str("\"P1000\"").unwrap();
        assert_eq!(sym, Symbol::P1000);
    }
}
