//! Reward rules and the pattern → reward table

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScratchError, ScratchResult};

/// Smallest and largest exact-count pattern
pub const MIN_COUNT: usize = 3;
pub const MAX_COUNT: usize = 9;

/// Winning pattern kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    #[serde(rename = "same_3")]
    Same3,
    #[serde(rename = "same_4")]
    Same4,
    #[serde(rename = "same_5")]
    Same5,
    #[serde(rename = "same_6")]
    Same6,
    #[serde(rename = "same_7")]
    Same7,
    #[serde(rename = "same_8")]
    Same8,
    #[serde(rename = "same_9")]
    Same9,
    #[serde(rename = "same_horizontal")]
    Horizontal,
    #[serde(rename = "same_vertical")]
    Vertical,
    #[serde(rename = "same_diagonal")]
    Diagonal,
}

impl PatternKind {
    /// Line patterns in resolution order
    pub const LINES: [PatternKind; 3] = [
        PatternKind::Horizontal,
        PatternKind::Vertical,
        PatternKind::Diagonal,
    ];

    /// Count pattern for exactly `n` identical basic symbols
    pub fn same(n: usize) -> Option<Self> {
        let kind = match n {
            3 => PatternKind::Same3,
            4 => PatternKind::Same4,
            5 => PatternKind::Same5,
            6 => PatternKind::Same6,
            7 => PatternKind::Same7,
            8 => PatternKind::Same8,
            9 => PatternKind::Same9,
            _ => return None,
        };
        Some(kind)
    }

    /// Symbol count for count patterns
    pub fn count(self) -> Option<usize> {
        match self {
            PatternKind::Same3 => Some(3),
            PatternKind::Same4 => Some(4),
            PatternKind::Same5 => Some(5),
            PatternKind::Same6 => Some(6),
            PatternKind::Same7 => Some(7),
            PatternKind::Same8 => Some(8),
            PatternKind::Same9 => Some(9),
            PatternKind::Horizontal | PatternKind::Vertical | PatternKind::Diagonal => None,
        }
    }

    pub fn is_line(self) -> bool {
        self.count().is_none()
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count() {
            Some(n) => write!(f, "same_{n}"),
            None => match self {
                PatternKind::Horizontal => f.write_str("same_horizontal"),
                PatternKind::Vertical => f.write_str("same_vertical"),
                _ => f.write_str("same_diagonal"),
            },
        }
    }
}

/// How a reward transforms the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardAction {
    /// `round(base × amount)`
    Multiply,
    /// `round(base + amount)`
    Sum,
}

/// A reward attached to a pattern kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardRule {
    pub action: RewardAction,
    pub amount: f64,
}

impl RewardRule {
    pub fn multiply(amount: f64) -> Self {
        Self {
            action: RewardAction::Multiply,
            amount,
        }
    }

    pub fn sum(amount: f64) -> Self {
        Self {
            action: RewardAction::Sum,
            amount,
        }
    }

    /// Apply to a base value, rounding half up
    pub fn apply(&self, base: i64) -> ScratchResult<i64> {
        apply_action(self.action, self.amount, base)
    }
}

/// Largest stake the CLI accepts; above 2^53 an `f64` no longer holds every integer
pub const MAX_STAKE: i64 = 1 << 53;

/// `2^63`, the first `f64` past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Apply an action/amount pair to `base`, rounding half up
///
/// Integral amounts use checked integer arithmetic so large totals stay exact.
/// A result outside the `i64` range is [`ScratchError::PayoutOverflow`].
pub fn apply_action(action: RewardAction, amount: f64, base: i64) -> ScratchResult<i64> {
    let overflow = || ScratchError::PayoutOverflow {
        action,
        amount,
        base,
    };

    if let Some(whole) = integral(amount) {
        let exact = match action {
            RewardAction::Multiply => base.checked_mul(whole),
            RewardAction::Sum => base.checked_add(whole),
        };
        return exact.ok_or_else(overflow);
    }

    let raw = match action {
        RewardAction::Multiply => base as f64 * amount,
        RewardAction::Sum => base as f64 + amount,
    };
    round_half_up(raw).ok_or_else(overflow)
}

fn integral(amount: f64) -> Option<i64> {
    (amount.fract() == 0.0 && amount.abs() < I64_BOUND).then_some(amount as i64)
}

/// Round to the nearest integer, ties toward positive infinity
///
/// `None` when the rounded value is not finite or falls outside `i64`.
pub fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    let in_range = rounded.is_finite() && rounded >= -I64_BOUND && rounded < I64_BOUND;
    in_range.then_some(rounded as i64)
}

/// Pattern → reward lookup table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayTable {
    rules: BTreeMap<PatternKind, RewardRule>,
}

impl PayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_rule(mut self, kind: PatternKind, rule: RewardRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    pub fn insert(&mut self, kind: PatternKind, rule: RewardRule) -> Option<RewardRule> {
        self.rules.insert(kind, rule)
    }

    pub fn get(&self, kind: PatternKind) -> Option<&RewardRule> {
        self.rules.get(&kind)
    }

    /// Look up a detected pattern; a missing rule is a configuration error
    pub fn rule_for(&self, kind: PatternKind) -> ScratchResult<&RewardRule> {
        self.rules
            .get(&kind)
            .ok_or(ScratchError::MissingRewardRule { kind })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PatternKind, &RewardRule)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Table used by the classic 3×3 card
    pub fn standard() -> Self {
        Self::new()
            .with_rule(PatternKind::Same3, RewardRule::multiply(1.0))
            .with_rule(PatternKind::Same4, RewardRule::multiply(2.0))
            .with_rule(PatternKind::Same5, RewardRule::multiply(3.0))
            .with_rule(PatternKind::Same6, RewardRule::multiply(5.0))
            .with_rule(PatternKind::Same7, RewardRule::multiply(7.0))
            .with_rule(PatternKind::Same8, RewardRule::multiply(10.0))
            .with_rule(PatternKind::Same9, RewardRule::multiply(50.0))
            .with_rule(PatternKind::Horizontal, RewardRule::multiply(2.0))
            .with_rule(PatternKind::Vertical, RewardRule::multiply(2.0))
            .with_rule(PatternKind::Diagonal, RewardRule::multiply(5.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), Some(3));
        assert_eq!(round_half_up(2.49), Some(2));
        assert_eq!(round_half_up(-2.5), Some(-2));
        assert_eq!(round_half_up(7.0), Some(7));
        assert_eq!(round_half_up(1e19), None);
        assert_eq!(round_half_up(f64::NAN), None);
        assert_eq!(round_half_up(f64::INFINITY), None);
    }

    #[test]
    fn test_rule_apply() {
        assert_eq!(RewardRule::multiply(2.5).apply(3).unwrap(), 8); // 7.5 rounds up
        assert_eq!(RewardRule::multiply(0.5).apply(5).unwrap(), 3);
        assert_eq!(RewardRule::sum(0.4).apply(10).unwrap(), 10);
        assert_eq!(RewardRule::sum(250.0).apply(100).unwrap(), 350);
    }

    #[test]
    fn test_integral_amounts_stay_exact() {
        let stake = MAX_STAKE + 1;
        assert_eq!(RewardRule::multiply(1.0).apply(stake).unwrap(), stake);
        assert_eq!(RewardRule::sum(1000.0).apply(stake).unwrap(), stake + 1000);
        assert_eq!(
            RewardRule::multiply(3.0).apply(i64::MAX / 4).unwrap(),
            (i64::MAX / 4) * 3
        );
    }

    #[test]
    fn test_overflow_is_error() {
        let err = RewardRule::multiply(2.0).apply(i64::MAX / 2 + 1).unwrap_err();
        assert!(matches!(
            err,
            ScratchError::PayoutOverflow {
                action: RewardAction::Multiply,
                ..
            }
        ));
        assert!(RewardRule::sum(1.0).apply(i64::MAX).is_err());
        assert!(RewardRule::multiply(2.5).apply(i64::MAX / 2).is_err());
        assert!(RewardRule::multiply(f64::INFINITY).apply(10).is_err());
    }

    #[test]
    fn test_count_kinds() {
        for n in MIN_COUNT..=MAX_COUNT {
            let kind = PatternKind::same(n).unwrap();
            assert_eq!(kind.count(), Some(n));
            assert!(!kind.is_line());
        }
        assert!(PatternKind::same(2).is_none());
        assert!(PatternKind::same(10).is_none());
        assert!(PatternKind::LINES.iter().all(|k| k.is_line()));
    }

    #[test]
    fn test_missing_rule_is_error() {
        let table = PayTable::new().with_rule(PatternKind::Same3, RewardRule::multiply(1.0));
        assert!(table.rule_for(PatternKind::Same3).is_ok());
        assert!(matches!(
            table.rule_for(PatternKind::Diagonal),
            Err(ScratchError::MissingRewardRule {
                kind: PatternKind::Diagonal
            })
        ));
    }

    #[test]
    fn test_paytable_json_keys() {
        let json = r#"{ "same_3": { "action": "multiply", "amount": 1.0 },
                        "same_horizontal": { "action": "sum", "amount": 25 } }"#;
        let table: PayTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get(PatternKind::Horizontal),
            Some(&RewardRule::sum(25.0))
        );
        assert_eq!(PatternKind::Same7.to_string(), "same_7");
    }
}
